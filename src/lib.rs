pub mod camera;
pub mod cli;
pub mod engine;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod primitives;
pub mod scene;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use primitives::Primitive;
pub use scene::{load_scene, Scene};
pub use types::{Mesh, Vertex};
