//! Drives a renderer from a loaded scene.

use crate::frame::FrameDescription;
use crate::scene::{KeyAction, Scene, Viewport};
use crate::traits::Renderer;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub struct Engine<R: Renderer> {
    scene: Scene,
    renderer: R,
    viewport: Viewport,
    frames: u64,
}

impl<R: Renderer> Engine<R> {
    pub fn new(scene: Scene, mut renderer: R) -> Self {
        let viewport = scene.viewport();
        if let Err(e) = scene.camera().validate() {
            log::warn!("camera will not render sensibly: {}", e);
        }
        renderer.resize(viewport);

        Self {
            scene,
            renderer,
            viewport,
            frames: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::resized(width, height);
        self.renderer.resize(self.viewport);
    }

    pub fn handle_key(&mut self, key: char) -> KeyAction {
        let action = self.scene.flags_mut().apply_key(key);
        log::debug!("key {:?} -> {:?}", key, action);
        action
    }

    pub fn render_frame(&mut self) -> Result<()> {
        let frame = FrameDescription::build(self.frames, &self.scene, self.viewport);
        self.renderer.render(&frame)?;
        self.frames += 1;
        Ok(())
    }
}

/// Renderer with no output device; keeps per-frame statistics
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub viewport: Option<Viewport>,
    pub frames: u64,
    pub last_triangles: usize,
    pub last_wireframe: bool,
    /// Vertex and camera bytes the last frame would upload
    pub last_upload_bytes: usize,
}

impl Renderer for HeadlessRenderer {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    fn render(&mut self, frame: &FrameDescription<'_>) -> Result<()> {
        self.frames += 1;
        self.last_triangles = frame.triangle_count();
        self.last_wireframe = frame.flags.wireframe;
        self.last_upload_bytes = frame.vertex_buffers().map(<[u8]>::len).sum::<usize>()
            + frame.camera_bytes().len();
        log::trace!(
            "frame {}: {} triangles, {} axis lines, {} bytes",
            frame.number,
            self.last_triangles,
            frame.axes.len(),
            self.last_upload_bytes
        );
        Ok(())
    }
}
