use crate::types::{Mesh, MeshBuilder, Vertex};

/// Square of side `length` on the y = 0 plane, centred at the origin.
///
/// Rows run along Z and columns along X. Every cell is split along the
/// `(x0, z0)`–`(x1, z1)` diagonal into two triangles.
///
/// Requires a finite `length > 0` and `divisions >= 1`; yields `6 * divisions²` vertices.
pub fn generate_plane(length: f32, divisions: u32) -> Mesh {
    let half = length / 2.0;
    let step = length / divisions as f32;
    let cells = (divisions as usize).saturating_mul(divisions as usize);
    let mut mesh = MeshBuilder::with_capacity(cells.saturating_mul(6));

    for i in 0..divisions {
        let z0 = -half + i as f32 * step;
        let z1 = z0 + step;

        for j in 0..divisions {
            let x0 = -half + j as f32 * step;
            let x1 = x0 + step;

            let p00 = Vertex::new(x0, 0.0, z0);
            let p10 = Vertex::new(x1, 0.0, z0);
            let p01 = Vertex::new(x0, 0.0, z1);
            let p11 = Vertex::new(x1, 0.0, z1);

            mesh.triangle(p00, p11, p10);
            mesh.triangle(p00, p01, p11);
        }
    }

    mesh.build()
}
