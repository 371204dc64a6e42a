use glam::{Mat4, Vec3};

use crate::camera::CameraUniform;
use crate::scene::{RenderFlags, Scene, Viewport};
use crate::types::Mesh;

pub const AXIS_LENGTH: f32 = 5.0;

/// Coloured line segment of the axis gizmo
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 3],
}

/// X red, Y green, Z blue, each starting at the origin
pub fn axis_lines(length: f32) -> [AxisLine; 3] {
    let line = |dir: Vec3| AxisLine {
        start: Vec3::ZERO,
        end: dir * length,
        color: dir.to_array(),
    };
    [line(Vec3::X), line(Vec3::Y), line(Vec3::Z)]
}

/// Everything a backend needs to draw one frame
#[derive(Debug)]
pub struct FrameDescription<'a> {
    pub number: u64,
    pub viewport: Viewport,
    pub view: Mat4,
    pub projection: Mat4,
    /// `projection * view` and the eye position, ready for a uniform buffer
    pub camera: CameraUniform,
    pub flags: RenderFlags,
    /// Empty when the axes are hidden
    pub axes: Vec<AxisLine>,
    /// Drawn in order, no depth sorting
    pub models: &'a [Mesh],
}

impl<'a> FrameDescription<'a> {
    pub fn build(number: u64, scene: &'a Scene, viewport: Viewport) -> Self {
        let camera = scene.camera();
        let flags = scene.flags();
        let axes = if flags.show_axes {
            axis_lines(AXIS_LENGTH).to_vec()
        } else {
            Vec::new()
        };

        let aspect = viewport.aspect_ratio();

        Self {
            number,
            viewport,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(aspect),
            camera: camera.to_uniform(aspect),
            flags,
            axes,
            models: scene.models(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.models.iter().map(Mesh::triangle_count).sum()
    }

    /// One tightly packed `xyz` buffer per model, in draw order
    pub fn vertex_buffers(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let models: &'a [Mesh] = self.models;
        models.iter().map(Mesh::as_bytes)
    }

    pub fn camera_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.camera)
    }
}
