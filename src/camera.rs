use glam::{Mat4, Vec3};
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const DEFAULT_LOOK_AT: Vec3 = Vec3::ZERO;
pub const DEFAULT_UP: Vec3 = Vec3::Y;
pub const DEFAULT_FOV: f32 = 60.0;
pub const DEFAULT_NEAR: f32 = 1.0;
pub const DEFAULT_FAR: f32 = 1000.0;

#[derive(Error, Debug, PartialEq)]
pub enum CameraError {
    #[error("camera position and look-at target coincide")]
    DegenerateDirection,
    #[error("up vector is parallel to the view direction")]
    DegenerateUpVector,
    #[error("invalid projection: fov={fov}, near={near}, far={far}")]
    InvalidProjection { fov: f32, near: f32, far: f32 },
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Look-at camera with a symmetric perspective projection
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            look_at: DEFAULT_LOOK_AT,
            up: DEFAULT_UP,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl Camera {
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Nothing at load time enforces a usable camera, so renderers that care
    /// should call this before building matrices.
    pub fn validate(&self) -> Result<(), CameraError> {
        let dir = self.look_at - self.position;
        if dir.length_squared() <= f32::EPSILON {
            return Err(CameraError::DegenerateDirection);
        }
        if dir.normalize().cross(self.up).length_squared() <= f32::EPSILON {
            return Err(CameraError::DegenerateUpVector);
        }
        let fov_ok = self.fov > 0.0 && self.fov < 180.0;
        if !fov_ok || self.near <= 0.0 || self.far <= self.near {
            return Err(CameraError::InvalidProjection {
                fov: self.fov,
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, self.up)
    }

    /// OpenGL-style clip space (depth in [-1, 1])
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, self.near, self.far)
    }

    pub fn to_uniform(&self, aspect_ratio: f32) -> CameraUniform {
        let view_proj = self.projection_matrix(aspect_ratio) * self.view_matrix();
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }
}
