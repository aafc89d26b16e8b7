use crate::coordinates::*;
use crate::error::LayoutError;
use crate::layout::*;
use crate::operands::*;
use std::collections::HashSet;

const EPS: f64 = 1e-9;

#[test]
fn test_unit_count_matches_total() {
    for (a, b) in [(0, 0), (1, 0), (0, 1), (7, 9), (125, 0), (124, 2), (300, 251), (0, 1000)] {
        let layout = compute_layout(a, b);
        assert_eq!(layout.len() as u64, a as u64 + b as u64, "count mismatch for ({a}, {b})");
        assert_eq!(layout.total(), a as u64 + b as u64);
    }
}

#[test]
fn test_groups_follow_first_operand() {
    let layout = compute_layout(130, 40);
    for unit in layout.units() {
        let expected = if unit.index < 130 { Group::First } else { Group::Second };
        assert_eq!(unit.group, expected, "unit {} has wrong group", unit.index);
    }
    assert_eq!(layout.units_in_group(Group::First).count(), 130);
    assert_eq!(layout.units_in_group(Group::Second).count(), 40);
}

#[test]
fn test_units_in_strict_index_order() {
    let layout = compute_layout(200, 77);
    for (i, unit) in layout.units().iter().enumerate() {
        assert_eq!(unit.index, i as u64);
        assert_eq!(unit.block_index, i as u64 / 125);
        assert_eq!(unit.index_in_block as u64, i as u64 % 125);
    }
}

#[test]
fn test_block_slots_unique_and_full() {
    let layout = compute_layout(400, 0);
    let mut seen = HashSet::new();
    for unit in layout.units() {
        assert!(seen.insert((unit.block_index, unit.index_in_block)),
            "slot ({}, {}) used twice", unit.block_index, unit.index_in_block);
        assert!(unit.index_in_block < 125);
    }

    let blocks = layout.blocks();
    assert_eq!(blocks.len(), 4);
    for block in &blocks[..3] {
        assert_eq!(block.occupancy, 125, "block {} not full", block.block_index);
    }
    assert_eq!(blocks[3].occupancy, 25);
}

#[test]
fn test_cells_are_x_fastest() {
    let grid = GridLayout::with_defaults();
    assert_eq!(grid.cell_of(0), CellCoord::new(0, 0, 0));
    assert_eq!(grid.cell_of(4), CellCoord::new(4, 0, 0));
    assert_eq!(grid.cell_of(5), CellCoord::new(0, 1, 0));
    assert_eq!(grid.cell_of(24), CellCoord::new(4, 4, 0));
    assert_eq!(grid.cell_of(25), CellCoord::new(0, 0, 1));
    assert_eq!(grid.cell_of(124), CellCoord::new(4, 4, 4));
}

#[test]
fn test_empty_layout() {
    let layout = compute_layout(0, 0);
    assert!(layout.is_empty());
    assert_eq!(layout.block_count(), 0);
    assert!(layout.blocks().is_empty());
    assert!(layout.bounds().is_none());
}

#[test]
fn test_block_boundaries() {
    let one = compute_layout(125, 0);
    assert_eq!(one.block_count(), 1);
    assert_eq!(one.blocks().len(), 1);
    assert_eq!(one.blocks()[0].occupancy, 125);

    let two = compute_layout(126, 0);
    assert_eq!(two.block_count(), 2);
    let blocks = two.blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].occupancy, 125);
    assert_eq!(blocks[1].occupancy, 1);
}

#[test]
fn test_idempotent() {
    let a = compute_layout(181, 64);
    let b = compute_layout(181, 64);
    assert_eq!(a, b);
    for (u, v) in a.units().iter().zip(b.units()) {
        assert_eq!(u.position.x.to_bits(), v.position.x.to_bits());
        assert_eq!(u.position.y.to_bits(), v.position.y.to_bits());
        assert_eq!(u.position.z.to_bits(), v.position.z.to_bits());
    }
}

#[test]
fn test_single_row_symmetric_about_origin() {
    let layout = compute_layout(5, 0);
    let xs: Vec<f64> = layout.units().iter().map(|u| u.position.x).collect();
    assert_eq!(xs.len(), 5);
    for i in 0..5 {
        assert!((xs[i] + xs[4 - i]).abs() < EPS, "x[{}]={} x[{}]={}", i, xs[i], 4 - i, xs[4 - i]);
    }
    assert!(xs[2].abs() < EPS, "middle unit should sit on the origin");
}

#[test]
fn test_seven_plus_nine_scenario() {
    let layout = compute_layout(7, 9);
    assert_eq!(layout.len(), 16);
    assert_eq!(layout.block_count(), 1);

    for unit in &layout.units()[..7] {
        assert_eq!(unit.group, Group::First);
    }
    for unit in &layout.units()[7..] {
        assert_eq!(unit.group, Group::Second);
    }

    // All inside one block's 5x5x5 footprint
    let half_extent = 2.0 * 1.2 + 0.5;
    for unit in layout.units() {
        assert_eq!(unit.block_index, 0);
        assert!(unit.position.x.abs() <= half_extent + EPS);
        assert!(unit.position.y.abs() <= half_extent + EPS);
        assert!(unit.position.z.abs() <= half_extent + EPS);
    }

    let blocks = layout.blocks();
    assert_eq!(blocks[0].first, 7);
    assert_eq!(blocks[0].second, 9);
}

#[test]
fn test_yz_centered_per_block() {
    // A partial last block keeps the same Y/Z offsets as a full one
    let layout = compute_layout(126, 0);
    let first = &layout.units()[0];
    let last = &layout.units()[125];
    assert_eq!(last.cell, CellCoord::new(0, 0, 0));
    assert!((first.position.y - last.position.y).abs() < EPS);
    assert!((first.position.z - last.position.z).abs() < EPS);
    assert!((first.position.y + 2.4).abs() < EPS);
    assert!((first.position.z + 2.4).abs() < EPS);

    let full = compute_layout(125, 0);
    let bounds = full.bounds().unwrap();
    assert!(bounds.center.y.abs() < EPS);
    assert!(bounds.center.z.abs() < EPS);
}

#[test]
fn test_multi_block_assembly_centered_on_x() {
    for total in [125, 126, 130, 250, 251, 377, 999] {
        let layout = compute_layout(total, 0);
        let bounds = layout.bounds().unwrap();
        assert!(bounds.center.x.abs() < 1e-6,
            "total {} has x center {}", total, bounds.center.x);
    }
}

#[test]
fn test_block_spacing_between_blocks() {
    let grid = GridLayout::with_defaults();
    let layout = grid.compute(250, 0);
    let a = &layout.units()[0];
    let b = &layout.units()[125];
    assert!((b.position.x - a.position.x - grid.block_spacing_x()).abs() < EPS);
    assert!((grid.block_spacing_x() - (5.0 * 1.2 + 2.0)).abs() < EPS);
}

#[test]
fn test_assembly_width() {
    let grid = GridLayout::with_defaults();
    assert_eq!(grid.assembly_width(0), 0.0);
    assert!((grid.assembly_width(1) - 1.0).abs() < EPS);
    assert!((grid.assembly_width(3) - (2.0 * 1.2 + 1.0)).abs() < EPS);
    // Wraps past one row: all five columns occupied
    assert!((grid.assembly_width(12) - (4.0 * 1.2 + 1.0)).abs() < EPS);
    assert!((grid.assembly_width(125) - (4.0 * 1.2 + 1.0)).abs() < EPS);
    assert!((grid.assembly_width(127) - (8.0 + 1.2 + 1.0)).abs() < EPS);
}

#[test]
fn test_custom_grid_dimensions() {
    let config = LayoutConfig { grid_x: 2, grid_y: 3, grid_z: 4, spacing: 1.0, block_gap: 0.5, unit_size: 0.8 };
    let grid = GridLayout::try_new(config).unwrap();
    assert_eq!(grid.block_capacity(), 24);

    let layout = grid.compute(30, 0);
    assert_eq!(layout.block_count(), 2);
    assert_eq!(layout.units()[7].cell, CellCoord::new(1, 0, 1));
    assert_eq!(layout.blocks()[1].occupancy, 6);
    assert!(layout.bounds().unwrap().center.x.abs() < EPS);
}

#[test]
fn test_config_validation() {
    assert!(LayoutConfig::default().validate().is_ok());

    let bad = [
        LayoutConfig { grid_x: 0, ..LayoutConfig::default() },
        LayoutConfig { spacing: 0.0, ..LayoutConfig::default() },
        LayoutConfig { unit_size: -1.0, ..LayoutConfig::default() },
        LayoutConfig { block_gap: -0.1, ..LayoutConfig::default() },
        LayoutConfig { spacing: f64::NAN, ..LayoutConfig::default() },
        LayoutConfig { grid_x: 3_000_000_000, grid_y: 3_000_000_000, grid_z: 3_000_000_000, ..LayoutConfig::default() },
        LayoutConfig { grid_x: 65_536, grid_y: 65_536, grid_z: 1, ..LayoutConfig::default() },
    ];
    for config in bad {
        assert!(matches!(GridLayout::try_new(config.clone()), Err(LayoutError::InvalidConfig(_))),
            "{:?} should be rejected", config);
    }

    let largest = LayoutConfig { grid_x: 65_535, grid_y: 65_537, grid_z: 1, ..LayoutConfig::default() };
    assert_eq!(largest.block_capacity().unwrap(), u32::MAX);
    assert_eq!(GridLayout::try_new(largest).unwrap().block_capacity(), u32::MAX as u64);
}

#[test]
fn test_config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("sumcubes-config-{}.json", std::process::id()));
    let config = LayoutConfig { spacing: 1.5, block_gap: 3.0, ..LayoutConfig::default() };
    config.save(&path).unwrap();
    let loaded = LayoutConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config, loaded);
}

#[test]
fn test_parse_operand_accepts_whole_numbers() {
    assert_eq!(parse_operand("0").unwrap(), 0);
    assert_eq!(parse_operand(" 42 ").unwrap(), 42);
    assert_eq!(parse_operand("+7").unwrap(), 7);
}

#[test]
fn test_parse_operand_rejects_bad_input() {
    for input in ["", "   ", "-1", "abc", "1.5", "3e2", "99999999999"] {
        let err = parse_operand(input).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidOperand { .. }), "{input:?} gave {err:?}");
        assert!(err.to_string().contains("enter valid non-negative numbers"));
    }
}

#[test]
fn test_operands_limit() {
    let ops = Operands::parse("7", "9").unwrap();
    assert_eq!(ops.total(), 16);
    assert_eq!(ops.checked().unwrap(), ops);
    assert_eq!(ops.layout(&GridLayout::with_defaults()).len(), 16);

    let big = Operands::new(u32::MAX, u32::MAX);
    assert_eq!(big.total(), 2 * u32::MAX as u64);
    assert!(matches!(big.checked(), Err(LayoutError::TooManyUnits { .. })));
}

#[test]
fn test_bounds_contain_every_unit() {
    let layout = compute_layout(90, 260);
    let bounds = layout.bounds().unwrap();
    for unit in layout.units() {
        assert!(bounds.contains(unit.position));
    }
    assert!(bounds.radius() > 0.0);
}
