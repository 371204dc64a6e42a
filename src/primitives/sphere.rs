use std::f32::consts::PI;

use crate::types::{Mesh, MeshBuilder, Vertex};

/// Point on a sphere at polar angle `phi` (from the equator) and azimuth `theta`
fn surface_point(radius: f32, phi: f32, theta: f32) -> Vertex {
    let ring = radius * phi.cos();
    Vertex::new(ring * theta.sin(), radius * phi.sin(), ring * theta.cos())
}

/// UV sphere centred at the origin.
///
/// `phi` sweeps from -π/2 to π/2 in `stacks` bands and `theta` from 0 to 2π
/// in `slices` wedges. Pole bands are not collapsed: their cells produce
/// triangles whose top or bottom edge has zero length.
///
/// Requires a finite `radius > 0`, `slices >= 3` and `stacks >= 2`;
/// yields `6 * slices * stacks` vertices.
pub fn generate_sphere(radius: f32, slices: u32, stacks: u32) -> Mesh {
    let d_phi = PI / stacks as f32;
    let d_theta = 2.0 * PI / slices as f32;
    let bands = (slices as usize).saturating_mul(stacks as usize);
    let mut mesh = MeshBuilder::with_capacity(bands.saturating_mul(6));

    for i in 0..stacks {
        let phi0 = -PI / 2.0 + i as f32 * d_phi;
        let phi1 = phi0 + d_phi;

        for j in 0..slices {
            let theta0 = j as f32 * d_theta;
            let theta1 = theta0 + d_theta;

            let p00 = surface_point(radius, phi0, theta0);
            let p10 = surface_point(radius, phi0, theta1);
            let p01 = surface_point(radius, phi1, theta0);
            let p11 = surface_point(radius, phi1, theta1);

            mesh.triangle(p00, p01, p11);
            mesh.triangle(p00, p11, p10);
        }
    }

    mesh.build()
}
