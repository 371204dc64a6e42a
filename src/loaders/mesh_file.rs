//! Plain-text `.3d` mesh files.
//!
//! The first token is the vertex count `N`, followed by `N` whitespace
//! separated `x y z` triples. The writer puts one vertex per line; the reader
//! only cares about token order.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Mesh, Vertex};

#[derive(Error, Debug)]
pub enum MeshFileError {
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("missing vertex count")]
    MissingHeader,
    #[error("invalid vertex count {0:?}")]
    InvalidCount(String),
    #[error("vertex count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),
    #[error("expected {expected} vertices, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("invalid coordinate {token:?} in vertex {vertex}")]
    InvalidFloat { vertex: usize, token: String },
}

/// Serializes `mesh` in `.3d` format. Floats use the shortest representation
/// that parses back to the same value.
pub fn write_mesh_to<W: Write>(mut writer: W, mesh: &Mesh) -> Result<(), MeshFileError> {
    writeln!(writer, "{}", mesh.vertex_count())?;
    for v in mesh.vertices() {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_mesh(path: impl AsRef<Path>, mesh: &Mesh) -> Result<(), MeshFileError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| MeshFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    write_mesh_to(BufWriter::new(file), mesh)?;
    log::debug!("wrote {} vertices to {:?}", mesh.vertex_count(), path);
    Ok(())
}

/// Parses a `.3d` stream. Anything after the declared vertices is ignored.
pub fn read_mesh_from<R: Read>(mut reader: R) -> Result<Mesh, MeshFileError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let header = tokens.next().ok_or(MeshFileError::MissingHeader)?;
    let count: usize = header
        .parse()
        .map_err(|_| MeshFileError::InvalidCount(header.to_string()))?;
    if count % 3 != 0 {
        return Err(MeshFileError::IncompleteTriangle(count));
    }

    // The header is untrusted, don't let it drive a huge allocation
    let mut vertices = Vec::with_capacity(count.min(1 << 16));
    for vertex in 0..count {
        let mut coords = [0.0f32; 3];
        for c in coords.iter_mut() {
            let token = tokens.next().ok_or(MeshFileError::Truncated {
                expected: count,
                found: vertex,
            })?;
            *c = token.parse().map_err(|_| MeshFileError::InvalidFloat {
                vertex,
                token: token.to_string(),
            })?;
        }
        vertices.push(Vertex::from(coords));
    }

    // count is a multiple of 3, so this cannot fail
    Mesh::from_vertices(vertices).map_err(|e| MeshFileError::IncompleteTriangle(e.0))
}

pub fn read_mesh(path: impl AsRef<Path>) -> Result<Mesh, MeshFileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MeshFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mesh = read_mesh_from(BufReader::new(file))?;
    log::debug!("read {} vertices from {:?}", mesh.vertex_count(), path);
    Ok(mesh)
}
