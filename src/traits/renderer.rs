use crate::frame::FrameDescription;
use crate::scene::Viewport;

/// Drawing backend - turns frame descriptions into pixels
pub trait Renderer {
    /// Called once before the first frame and again after every window resize
    fn resize(&mut self, viewport: Viewport);

    /// Draw one frame
    fn render(&mut self, frame: &FrameDescription<'_>) -> Result<(), Box<dyn std::error::Error>>;
}
