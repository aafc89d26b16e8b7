use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Unit position in scene space (f64 for computation)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// GPU-friendly f32 vector
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Integer cell coordinates inside a block
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl CellCoord {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned box enclosing every unit cube of a layout
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
    pub center: Position,
}

impl Bounds {
    /// Grow a box around cubes of edge `size` centered at `positions`
    pub fn around<'a>(positions: impl IntoIterator<Item = &'a Position>, size: f64) -> Option<Self> {
        let half = size / 2.0;
        let mut iter = positions.into_iter();
        let first = iter.next()?.as_dvec3();
        let (mut min, mut max) = (first, first);

        for pos in iter {
            let p = pos.as_dvec3();
            min = min.min(p);
            max = max.max(p);
        }

        let min = min - DVec3::splat(half);
        let max = max + DVec3::splat(half);

        Some(Self {
            min: min.into(),
            max: max.into(),
            center: ((min + max) / 2.0).into(),
        })
    }

    pub fn size(&self) -> DVec3 {
        self.max.as_dvec3() - self.min.as_dvec3()
    }

    /// Radius of the sphere through the box corners
    pub fn radius(&self) -> f64 {
        self.size().length() / 2.0
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x
            && pos.y >= self.min.y && pos.y <= self.max.y
            && pos.z >= self.min.z && pos.z <= self.max.z
    }
}
