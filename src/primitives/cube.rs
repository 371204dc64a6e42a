use crate::types::{Mesh, MeshBuilder, Vertex};

/// Which way a box face's triangles are wound.
///
/// Paired faces on the same axis share corner ordering, so one face of each
/// pair flips its winding to keep facing outward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FaceOrientation {
    Front,
    Back,
}

/// Emits the two triangles of a grid cell with corners
///
/// ```text
/// q00 --- q10
///  |       |
/// q01 --- q11
/// ```
fn push_quad(
    mesh: &mut MeshBuilder,
    [q00, q10, q01, q11]: [Vertex; 4],
    orientation: FaceOrientation,
) {
    match orientation {
        FaceOrientation::Front => {
            mesh.triangle(q00, q01, q11);
            mesh.triangle(q00, q11, q10);
        }
        FaceOrientation::Back => {
            mesh.triangle(q00, q11, q01);
            mesh.triangle(q00, q10, q11);
        }
    }
}

/// Axis-aligned cube of side `length` centred at the origin.
///
/// Faces come in axis pairs (X, then Y, then Z). Within each pair the cells
/// of the `+half` face and the `-half` face are interleaved, `+half` first.
/// The corner layout of the X and Z faces winds inward under `Front`, so
/// those pairs pass the orientations the other way round; every triangle
/// ends up counter-clockwise seen from outside the cube.
///
/// This deliberately differs from generators that pass `Front` for every
/// `+half` face: their X and Z triangles face inward and list corners in a
/// different order, so `.3d` golden files produced that way will not match
/// this output byte for byte. Positions and the Y faces are identical.
///
/// Requires a finite `length > 0` and `grid >= 1`; yields `36 * grid²` vertices.
pub fn generate_box(length: f32, grid: u32) -> Mesh {
    let half = length / 2.0;
    let step = length / grid as f32;
    let cells = (grid as usize).saturating_mul(grid as usize);
    let mut mesh = MeshBuilder::with_capacity(cells.saturating_mul(36));

    let span = |k: u32| {
        let lo = -half + k as f32 * step;
        (lo, lo + step)
    };

    // X = ±half, rows along Z, columns along Y
    for i in 0..grid {
        let (z0, z1) = span(i);
        for j in 0..grid {
            let (y0, y1) = span(j);
            let face = |x: f32| {
                [
                    Vertex::new(x, y0, z0),
                    Vertex::new(x, y1, z0),
                    Vertex::new(x, y0, z1),
                    Vertex::new(x, y1, z1),
                ]
            };
            push_quad(&mut mesh, face(half), FaceOrientation::Back);
            push_quad(&mut mesh, face(-half), FaceOrientation::Front);
        }
    }

    // Y = ±half, rows along Z, columns along X
    for i in 0..grid {
        let (z0, z1) = span(i);
        for j in 0..grid {
            let (x0, x1) = span(j);
            let face = |y: f32| {
                [
                    Vertex::new(x0, y, z0),
                    Vertex::new(x1, y, z0),
                    Vertex::new(x0, y, z1),
                    Vertex::new(x1, y, z1),
                ]
            };
            push_quad(&mut mesh, face(half), FaceOrientation::Front);
            push_quad(&mut mesh, face(-half), FaceOrientation::Back);
        }
    }

    // Z = ±half, rows along Y, columns along X
    for i in 0..grid {
        let (y0, y1) = span(i);
        for j in 0..grid {
            let (x0, x1) = span(j);
            let face = |z: f32| {
                [
                    Vertex::new(x0, y0, z),
                    Vertex::new(x1, y0, z),
                    Vertex::new(x0, y1, z),
                    Vertex::new(x1, y1, z),
                ]
            };
            push_quad(&mut mesh, face(half), FaceOrientation::Back);
            push_quad(&mut mesh, face(-half), FaceOrientation::Front);
        }
    }

    mesh.build()
}
