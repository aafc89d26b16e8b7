/// Cells along X inside one block (fastest-varying axis)
pub const GRID_X: u32 = 5;

/// Cells along Y inside one block
pub const GRID_Y: u32 = 5;

/// Cells along Z inside one block
pub const GRID_Z: u32 = 5;

/// Units per full block
pub const BLOCK_CAPACITY: u32 = GRID_X * GRID_Y * GRID_Z;

/// Distance between adjacent unit centers inside a block
pub const SPACING: f64 = 1.2;

/// Extra distance between adjacent blocks along X
pub const BLOCK_GAP: f64 = 2.0;

/// Edge length of one rendered unit cube
pub const UNIT_SIZE: f64 = 1.0;

/// Largest operand total the front ends will lay out
pub const MAX_TOTAL_UNITS: u64 = 100_000;
