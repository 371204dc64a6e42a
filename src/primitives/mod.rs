//! Procedural tessellation of canonical primitives into unindexed triangle lists.

mod cone;
mod cube;
mod plane;
mod sphere;

pub use cone::{generate_cone, taper_radius};
pub use cube::{generate_box, FaceOrientation};
pub use plane::generate_plane;
pub use sphere::generate_sphere;

use std::fmt;

use thiserror::Error;

use crate::types::Mesh;

/// Largest mesh a single primitive may tessellate into (3 GiB of vertex data)
pub const MAX_VERTICES: usize = 1 << 28;

#[derive(Error, Debug, PartialEq)]
pub enum PrimitiveError {
    #[error("invalid {primitive} parameters: {requirement}")]
    InvalidParameters {
        primitive: &'static str,
        requirement: &'static str,
    },
    #[error("{primitive} resolution too high: more than {limit} vertices")]
    TooManyVertices { primitive: &'static str, limit: usize },
}

/// A primitive shape together with its tessellation resolution
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Plane { length: f32, divisions: u32 },
    Box { length: f32, grid: u32 },
    Sphere { radius: f32, slices: u32, stacks: u32 },
    Cone { radius: f32, height: f32, slices: u32, stacks: u32 },
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Plane { .. } => "plane",
            Primitive::Box { .. } => "box",
            Primitive::Sphere { .. } => "sphere",
            Primitive::Cone { .. } => "cone",
        }
    }

    /// Checks parameter bounds and the size of the resulting mesh.
    ///
    /// Lengths must be finite and positive, so NaN and infinity are rejected.
    /// A resolution whose vertex count exceeds [`MAX_VERTICES`] is rejected
    /// before anything is allocated.
    pub fn validate(&self) -> Result<(), PrimitiveError> {
        let size_ok = |v: f32| v.is_finite() && v > 0.0;
        let ok = match *self {
            Primitive::Plane { length, divisions } => size_ok(length) && divisions >= 1,
            Primitive::Box { length, grid } => size_ok(length) && grid >= 1,
            Primitive::Sphere { radius, slices, stacks } => {
                size_ok(radius) && slices >= 3 && stacks >= 2
            }
            Primitive::Cone { radius, height, slices, stacks } => {
                size_ok(radius) && size_ok(height) && slices >= 3 && stacks >= 1
            }
        };

        if !ok {
            return Err(PrimitiveError::InvalidParameters {
                primitive: self.name(),
                requirement: self.requirement(),
            });
        }

        match self.vertex_count() {
            Some(n) if n <= MAX_VERTICES => Ok(()),
            _ => Err(PrimitiveError::TooManyVertices {
                primitive: self.name(),
                limit: MAX_VERTICES,
            }),
        }
    }

    fn requirement(&self) -> &'static str {
        match self {
            Primitive::Plane { .. } => "length > 0 and divisions >= 1",
            Primitive::Box { .. } => "length > 0 and grid >= 1",
            Primitive::Sphere { .. } => "radius > 0, slices >= 3 and stacks >= 2",
            Primitive::Cone { .. } => "radius > 0, height > 0, slices >= 3 and stacks >= 1",
        }
    }

    /// Number of vertices `tessellate` produces, without generating them.
    /// `None` if the count does not fit in a `usize`.
    pub fn vertex_count(&self) -> Option<usize> {
        match *self {
            Primitive::Plane { divisions, .. } => {
                let n = divisions as usize;
                n.checked_mul(n)?.checked_mul(6)
            }
            Primitive::Box { grid, .. } => {
                let n = grid as usize;
                n.checked_mul(n)?.checked_mul(36)
            }
            Primitive::Sphere { slices, stacks, .. } => {
                (slices as usize).checked_mul(stacks as usize)?.checked_mul(6)
            }
            Primitive::Cone { slices, stacks, .. } => {
                let slices = slices as usize;
                let lateral = slices.checked_mul(stacks as usize)?.checked_mul(6)?;
                lateral.checked_add(3 * slices)
            }
        }
    }

    /// Validates the parameters and generates the mesh
    pub fn tessellate(&self) -> Result<Mesh, PrimitiveError> {
        self.validate()?;

        let mesh = match *self {
            Primitive::Plane { length, divisions } => generate_plane(length, divisions),
            Primitive::Box { length, grid } => generate_box(length, grid),
            Primitive::Sphere { radius, slices, stacks } => generate_sphere(radius, slices, stacks),
            Primitive::Cone { radius, height, slices, stacks } => {
                generate_cone(radius, height, slices, stacks)
            }
        };

        debug_assert_eq!(Some(mesh.vertex_count()), self.vertex_count());
        log::debug!(
            "tessellated {} into {} triangles",
            self,
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Plane { length, divisions } => {
                write!(f, "plane(length={length}, divisions={divisions})")
            }
            Primitive::Box { length, grid } => write!(f, "box(length={length}, grid={grid})"),
            Primitive::Sphere { radius, slices, stacks } => {
                write!(f, "sphere(radius={radius}, slices={slices}, stacks={stacks})")
            }
            Primitive::Cone { radius, height, slices, stacks } => write!(
                f,
                "cone(radius={radius}, height={height}, slices={slices}, stacks={stacks})"
            ),
        }
    }
}
