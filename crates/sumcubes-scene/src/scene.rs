//! Scene state for the sum visualizer
//!
//! Holds the current operands, their layout and the instance buffer built
//! from it. Any operand change rebuilds everything from scratch.

use crate::camera::OrbitCamera;
use crate::instances::{build_instances, CubeInstance, GroupPalette};
use sumcubes_core::{GridLayout, Layout, LayoutResult, Operands};
use tracing::{debug, info};

pub struct SumScene {
    grid: GridLayout,
    palette: GroupPalette,
    pub camera: OrbitCamera,
    operands: Option<Operands>,
    layout: Option<Layout>,
    instances: Vec<CubeInstance>,
    generation: u64,
}

impl SumScene {
    pub fn new(grid: GridLayout, palette: GroupPalette, aspect: f32) -> Self {
        Self {
            grid,
            palette,
            camera: OrbitCamera::new(aspect),
            operands: None,
            layout: None,
            instances: Vec::new(),
            generation: 0,
        }
    }

    pub fn with_defaults(aspect: f32) -> Self {
        Self::new(GridLayout::with_defaults(), GroupPalette::default(), aspect)
    }

    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    pub fn palette(&self) -> &GroupPalette {
        &self.palette
    }

    pub fn operands(&self) -> Option<Operands> {
        self.operands
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn instances(&self) -> &[CubeInstance] {
        &self.instances
    }

    /// Bumped on every rebuild so renderers know to re-upload
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show `first + second`. Returns false if those operands are already shown.
    pub fn set_operands(&mut self, first: u32, second: u32) -> bool {
        let operands = Operands::new(first, second);
        if self.operands == Some(operands) {
            debug!(first, second, "operands unchanged, keeping layout");
            return false;
        }
        self.rebuild(operands);
        true
    }

    /// Validate user text, then show it
    pub fn set_operands_from_input(&mut self, first: &str, second: &str) -> LayoutResult<bool> {
        let operands = Operands::parse(first, second)?.checked()?;
        Ok(self.set_operands(operands.first, operands.second))
    }

    /// Rebuild for the current operands even if unchanged
    pub fn refresh(&mut self) {
        if let Some(operands) = self.operands {
            self.rebuild(operands);
        }
    }

    pub fn set_palette(&mut self, palette: GroupPalette) {
        self.palette = palette;
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.operands = None;
        self.layout = None;
        self.instances.clear();
        self.generation += 1;
    }

    fn rebuild(&mut self, operands: Operands) {
        let layout = operands.layout(&self.grid);
        let unit_size = self.grid.config().unit_size as f32;
        self.instances = build_instances(&layout, &self.palette, unit_size);

        if let Some(bounds) = layout.bounds() {
            self.camera.frame(&bounds);
        }

        info!(
            first = operands.first,
            second = operands.second,
            units = layout.len(),
            blocks = layout.block_count(),
            "rebuilt scene"
        );

        self.operands = Some(operands);
        self.layout = Some(layout);
        self.generation += 1;
    }
}
