/// Perspective projection
use log::debug;

use crate::error::{TransformError, TransformResult};
use crate::matrix::Mat4;

/// Symmetric-frustum perspective projection in the OpenGL convention.
///
/// View-space depths in `[-near, -far]` map to NDC `[-1, 1]` after the
/// perspective divide, with `w' = -z`. Parameters are not validated: with
/// `near == far` the result contains infinities or NaNs. Use
/// [`Projection::new`] for a checked alternative.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let depth = far - near;

    Mat4::from_cols_array([
        f / aspect, 0.0, 0.0, 0.0, //
        0.0, f, 0.0, 0.0, //
        0.0, 0.0, -(far + near) / depth, -1.0, //
        0.0, 0.0, -(2.0 * far * near) / depth, 0.0,
    ])
}

/// Camera frustum parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Create a projection, rejecting parameters that would produce a
    /// degenerate matrix.
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> TransformResult<Self> {
        let params = [fov_y, aspect, near, far];
        if params.iter().any(|v| !v.is_finite()) {
            return Err(TransformError::NonFinite);
        }
        if fov_y <= 0.0 || fov_y >= std::f32::consts::PI {
            return Err(TransformError::InvalidFieldOfView(fov_y));
        }
        if aspect <= 0.0 {
            return Err(TransformError::InvalidAspect(aspect));
        }
        if near <= 0.0 || far <= near {
            return Err(TransformError::InvalidDepthRange { near, far });
        }

        Ok(Self {
            fov_y,
            aspect,
            near,
            far,
        })
    }

    /// Default frustum with the aspect ratio of a `width` x `height` viewport
    pub fn for_viewport(width: u32, height: u32) -> TransformResult<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::EmptyViewport { width, height });
        }
        let aspect = width as f32 / height as f32;
        debug!("Viewport {}x{} -> aspect {:.3}", width, height, aspect);
        Ok(Self {
            aspect,
            ..Self::default()
        })
    }

    pub fn matrix(&self) -> Mat4 {
        perspective(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_2,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}
