use crate::constants::*;
use crate::coordinates::*;
use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Configuration for the block grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub grid_x: u32,
    pub grid_y: u32,
    pub grid_z: u32,
    pub spacing: f64,
    pub block_gap: f64,
    pub unit_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_x: GRID_X,
            grid_y: GRID_Y,
            grid_z: GRID_Z,
            spacing: SPACING,
            block_gap: BLOCK_GAP,
            unit_size: UNIT_SIZE,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> LayoutResult<()> {
        if self.grid_x == 0 || self.grid_y == 0 || self.grid_z == 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "grid dimensions must be at least 1, got {}x{}x{}",
                self.grid_x, self.grid_y, self.grid_z
            )));
        }
        self.block_capacity()?;
        for (name, value) in [
            ("spacing", self.spacing),
            ("block_gap", self.block_gap),
            ("unit_size", self.unit_size),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }
        if self.spacing <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!("spacing must be positive, got {}", self.spacing)));
        }
        if self.unit_size <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!("unit_size must be positive, got {}", self.unit_size)));
        }
        if self.block_gap < 0.0 {
            return Err(LayoutError::InvalidConfig(format!("block_gap must not be negative, got {}", self.block_gap)));
        }
        Ok(())
    }

    /// Units per block; must fit in `u32` so slot indices do too
    pub fn block_capacity(&self) -> LayoutResult<u32> {
        self.grid_x
            .checked_mul(self.grid_y)
            .and_then(|layer| layer.checked_mul(self.grid_z))
            .ok_or_else(|| {
                LayoutError::InvalidConfig(format!(
                    "block capacity {}x{}x{} exceeds {} units",
                    self.grid_x, self.grid_y, self.grid_z, u32::MAX
                ))
            })
    }

    pub fn save(&self, path: &Path) -> LayoutResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> LayoutResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Which operand a unit counts towards
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    First,
    Second,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::First => f.pad("first"),
            Group::Second => f.pad("second"),
        }
    }
}

/// One placed unit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub index: u64,
    pub group: Group,
    pub block_index: u64,
    pub index_in_block: u32,
    pub cell: CellCoord,
    pub position: Position,
}

/// Occupancy of one block
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub block_index: u64,
    pub occupancy: u32,
    pub first: u32,
    pub second: u32,
}

/// Full ordered unit sequence for one (first, second) pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    first: u32,
    second: u32,
    block_count: u64,
    unit_size: f64,
    units: Vec<Unit>,
}

impl Layout {
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.first as u64 + self.second as u64
    }

    pub fn first_count(&self) -> u32 {
        self.first
    }

    pub fn second_count(&self) -> u32 {
        self.second
    }

    pub fn block_count(&self) -> u64 {
        self.block_count
    }

    pub fn units_in_group(&self, group: Group) -> impl Iterator<Item = &Unit> + '_ {
        self.units.iter().filter(move |u| u.group == group)
    }

    /// Per-block occupancy, in block order
    pub fn blocks(&self) -> Vec<BlockSummary> {
        let mut blocks: Vec<BlockSummary> = Vec::with_capacity(self.block_count as usize);
        for unit in &self.units {
            if blocks.last().map(|b| b.block_index) != Some(unit.block_index) {
                blocks.push(BlockSummary {
                    block_index: unit.block_index,
                    occupancy: 0,
                    first: 0,
                    second: 0,
                });
            }
            // Units arrive in block order, so the last entry is always current
            if let Some(block) = blocks.last_mut() {
                block.occupancy += 1;
                match unit.group {
                    Group::First => block.first += 1,
                    Group::Second => block.second += 1,
                }
            }
        }
        blocks
    }

    /// Box around every unit cube, `None` for an empty layout
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::around(self.units.iter().map(|u| &u.position), self.unit_size)
    }
}

/// The block-grid layout calculator
#[derive(Clone, Debug)]
pub struct GridLayout {
    config: LayoutConfig,
    capacity: u64,        // Precomputed grid_x * grid_y * grid_z
    layer: u64,           // Precomputed grid_x * grid_y
    block_spacing_x: f64, // Precomputed grid_x * spacing + block_gap
}

impl GridLayout {
    /// Build a calculator from a validated config
    pub fn try_new(config: LayoutConfig) -> LayoutResult<Self> {
        config.validate()?;
        let capacity = config.block_capacity()? as u64;
        let layer = config.grid_x as u64 * config.grid_y as u64;
        let block_spacing_x = config.grid_x as f64 * config.spacing + config.block_gap;
        Ok(Self { config, capacity, layer, block_spacing_x })
    }

    pub fn with_defaults() -> Self {
        let config = LayoutConfig::default();
        Self {
            capacity: BLOCK_CAPACITY as u64,
            layer: GRID_X as u64 * GRID_Y as u64,
            block_spacing_x: GRID_X as f64 * SPACING + BLOCK_GAP,
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn block_capacity(&self) -> u64 {
        self.capacity
    }

    /// Distance between the left edges of adjacent blocks
    pub fn block_spacing_x(&self) -> f64 {
        self.block_spacing_x
    }

    pub fn block_count_for(&self, total: u64) -> u64 {
        total.div_ceil(self.capacity)
    }

    /// Occupied X columns of the last block
    fn columns_in_last_block(&self, total: u64) -> u64 {
        match total % self.capacity {
            0 => self.config.grid_x as u64,
            rem => rem.min(self.config.grid_x as u64),
        }
    }

    /// Width of the whole assembly along X: full blocks plus the occupied
    /// part of the last block
    pub fn assembly_width(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let blocks = self.block_count_for(total);
        let columns = self.columns_in_last_block(total);
        let last_width = (columns - 1) as f64 * self.config.spacing + self.config.unit_size;
        (blocks - 1) as f64 * self.block_spacing_x + last_width
    }

    /// Cell coordinates of a slot inside a block, X fastest then Y then Z
    pub fn cell_of(&self, index_in_block: u64) -> CellCoord {
        let gx = self.config.grid_x as u64;
        let gy = self.config.grid_y as u64;
        CellCoord::new(
            (index_in_block % gx) as u32,
            ((index_in_block / gx) % gy) as u32,
            (index_in_block / self.layer) as u32,
        )
    }

    /// Lay out `first + second` units. Pure and deterministic.
    pub fn compute(&self, first: u32, second: u32) -> Layout {
        let total = first as u64 + second as u64;
        let block_count = self.block_count_for(total);
        let spacing = self.config.spacing;

        let start_x = -self.assembly_width(total) / 2.0;
        // Unit centers sit half a unit inside the assembly's left edge
        let block_x_center_offset = -self.config.unit_size / 2.0;
        let offset_y = (self.config.grid_y - 1) as f64 * spacing / 2.0;
        let offset_z = (self.config.grid_z - 1) as f64 * spacing / 2.0;

        let mut units = Vec::with_capacity(total as usize);
        for index in 0..total {
            let group = if index < first as u64 { Group::First } else { Group::Second };
            let block_index = index / self.capacity;
            let index_in_block = index % self.capacity;
            let cell = self.cell_of(index_in_block);

            let x = start_x + block_index as f64 * self.block_spacing_x + cell.x as f64 * spacing
                - block_x_center_offset;
            let y = cell.y as f64 * spacing - offset_y;
            let z = cell.z as f64 * spacing - offset_z;

            units.push(Unit {
                index,
                group,
                block_index,
                index_in_block: index_in_block as u32,
                cell,
                position: Position::new(x, y, z),
            });
        }

        debug!(first, second, total, block_count, "computed layout");

        Layout {
            first,
            second,
            block_count,
            unit_size: self.config.unit_size,
            units,
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Lay out `first + second` units with the default 5x5x5 grid
pub fn compute_layout(first: u32, second: u32) -> Layout {
    GridLayout::with_defaults().compute(first, second)
}
