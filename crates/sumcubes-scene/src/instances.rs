//! GPU instance data for layout units

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use sumcubes_core::{Group, Layout, Unit};

/// Per-cube instance data for instanced rendering
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    /// Model matrix, column-major
    pub model: [[f32; 4]; 4],
    /// RGBA tint
    pub tint: [f32; 4],
}

impl CubeInstance {
    pub const SIZE: usize = std::mem::size_of::<Self>();

    pub fn from_unit(unit: &Unit, palette: &GroupPalette, unit_size: f32) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(unit_size),
            Quat::IDENTITY,
            unit.position.as_vec3(),
        );
        Self {
            model: model.to_cols_array_2d(),
            tint: palette.tint(unit.group),
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }
}

/// Tint per operand group
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupPalette {
    pub first: [f32; 4],
    pub second: [f32; 4],
}

impl Default for GroupPalette {
    fn default() -> Self {
        Self {
            first: [0.26, 0.52, 0.96, 1.0],  // blue
            second: [0.96, 0.58, 0.22, 1.0], // orange
        }
    }
}

impl GroupPalette {
    pub fn tint(&self, group: Group) -> [f32; 4] {
        match group {
            Group::First => self.first,
            Group::Second => self.second,
        }
    }
}

/// One instance per unit, in unit index order
pub fn build_instances(layout: &Layout, palette: &GroupPalette, unit_size: f32) -> Vec<CubeInstance> {
    layout
        .units()
        .iter()
        .map(|unit| CubeInstance::from_unit(unit, palette, unit_size))
        .collect()
}
