//! The loaded world: viewport, camera and the meshes to draw.

mod parser;

pub use parser::{load_scene, parse_scene, SceneError};

use serde::Serialize;

use crate::camera::Camera;
use crate::math::AABB;
use crate::types::Mesh;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Viewport after a window resize; a zero height is clamped to 1.
    pub fn resized(width: u32, height: u32) -> Self {
        Self {
            width,
            height: height.max(1),
        }
    }
}

/// What a key press asks the render loop to do
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Redraw,
    Ignored,
}

/// Render-mode toggles owned by the renderer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderFlags {
    pub wireframe: bool,
    pub show_axes: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            wireframe: true,
            show_axes: true,
        }
    }
}

impl RenderFlags {
    pub const ESCAPE: char = '\u{1b}';

    /// `w` toggles wireframe, `a` toggles the axes, `q` or Escape quits.
    pub fn apply_key(&mut self, key: char) -> KeyAction {
        match key {
            Self::ESCAPE | 'q' | 'Q' => KeyAction::Quit,
            'w' | 'W' => {
                self.wireframe = !self.wireframe;
                KeyAction::Redraw
            }
            'a' | 'A' => {
                self.show_axes = !self.show_axes;
                KeyAction::Redraw
            }
            _ => KeyAction::Ignored,
        }
    }
}

/// A fully loaded scene. Only the parser builds one, and never with zero models.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    viewport: Viewport,
    camera: Camera,
    models: Vec<Mesh>,
    flags: RenderFlags,
}

impl Scene {
    pub(crate) fn new(viewport: Viewport, camera: Camera, models: Vec<Mesh>) -> Self {
        debug_assert!(!models.is_empty());
        Self {
            viewport,
            camera,
            models,
            flags: RenderFlags::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Meshes in declaration order
    pub fn models(&self) -> &[Mesh] {
        &self.models
    }

    pub fn vertex_count(&self) -> usize {
        self.models.iter().map(Mesh::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.models.iter().map(Mesh::triangle_count).sum()
    }

    /// Bounds of every model together, `None` if all models are empty
    pub fn bounds(&self) -> Option<AABB> {
        self.models
            .iter()
            .filter_map(Mesh::bounds)
            .reduce(|a, b| a.union(&b))
    }

    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    pub fn flags_mut(&mut self) -> &mut RenderFlags {
        &mut self.flags
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            viewport: self.viewport,
            camera: self.camera,
            models: self
                .models
                .iter()
                .map(|m| ModelSummary {
                    vertices: m.vertex_count(),
                    triangles: m.triangle_count(),
                    bounds: m.bounds().map(|b| [b.min.to_array(), b.max.to_array()]),
                })
                .collect(),
            total_triangles: self.triangle_count(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ModelSummary {
    pub vertices: usize,
    pub triangles: usize,
    /// `[min, max]` corners
    pub bounds: Option<[[f32; 3]; 2]>,
}

/// Serializable overview of a scene, without the vertex data
#[derive(Clone, Debug, Serialize)]
pub struct SceneSummary {
    pub viewport: Viewport,
    pub camera: Camera,
    pub models: Vec<ModelSummary>,
    pub total_triangles: usize,
}
