//! Block-grid layout for the sum visualizer.
//!
//! Units for two operand counts are packed in index order into fixed-size
//! cubic blocks, the blocks sit side by side along X, and the assembly is
//! centered on the origin.

pub mod constants;
pub mod coordinates;
pub mod error;
pub mod layout;
pub mod operands;

#[cfg(test)]
mod tests;

pub use coordinates::{Bounds, CellCoord, Position};
pub use error::{LayoutError, LayoutResult};
pub use layout::{compute_layout, BlockSummary, GridLayout, Group, Layout, LayoutConfig, Unit};
pub use operands::{parse_operand, Operands};
