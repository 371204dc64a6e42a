pub mod mesh_file;

pub use mesh_file::{read_mesh, read_mesh_from, write_mesh, write_mesh_to, MeshFileError};
