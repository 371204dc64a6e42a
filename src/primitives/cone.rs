use std::f32::consts::PI;

use crate::types::{Mesh, MeshBuilder, Vertex};

fn ring_point(radius: f32, y: f32, theta: f32) -> Vertex {
    Vertex::new(radius * theta.sin(), y, radius * theta.cos())
}

/// Radius of the lateral surface at the bottom of band `band`.
pub fn taper_radius(radius: f32, band: u32, stacks: u32) -> f32 {
    radius * (1.0 - band as f32 / stacks as f32)
}

/// Cone standing on the y = 0 plane with its apex at `(0, height, 0)`.
///
/// The base is a fan of `slices` triangles around the origin, emitted first
/// and wound to face down. The lateral surface follows in `stacks` bands,
/// its radius shrinking linearly to zero at the apex.
///
/// Requires finite `radius > 0` and `height > 0`, plus `slices >= 3` and `stacks >= 1`;
/// yields `3 * slices + 6 * slices * stacks` vertices.
pub fn generate_cone(radius: f32, height: f32, slices: u32, stacks: u32) -> Mesh {
    let d_theta = 2.0 * PI / slices as f32;
    let d_h = height / stacks as f32;
    let slices_n = slices as usize;
    let lateral = slices_n.saturating_mul(stacks as usize).saturating_mul(6);
    let mut mesh = MeshBuilder::with_capacity(lateral.saturating_add(3 * slices_n));

    let center = Vertex::new(0.0, 0.0, 0.0);
    for j in 0..slices {
        let theta0 = j as f32 * d_theta;
        let theta1 = theta0 + d_theta;

        mesh.triangle(
            center,
            ring_point(radius, 0.0, theta1),
            ring_point(radius, 0.0, theta0),
        );
    }

    for i in 0..stacks {
        let y0 = i as f32 * d_h;
        let y1 = (i + 1) as f32 * d_h;
        let r0 = taper_radius(radius, i, stacks);
        let r1 = taper_radius(radius, i + 1, stacks);

        for j in 0..slices {
            let theta0 = j as f32 * d_theta;
            let theta1 = theta0 + d_theta;

            let p00 = ring_point(r0, y0, theta0);
            let p10 = ring_point(r0, y0, theta1);
            let p01 = ring_point(r1, y1, theta0);
            let p11 = ring_point(r1, y1, theta1);

            mesh.triangle(p00, p01, p11);
            mesh.triangle(p00, p11, p10);
        }
    }

    mesh.build()
}
