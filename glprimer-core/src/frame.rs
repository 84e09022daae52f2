/// Per-frame transform composition for the spinning cube scene
use std::f32::consts::PI;

use crate::matrix::Mat4;
use crate::projection::Projection;
use crate::transform::{compose, rotate_x, rotate_y, scale, translate};

/// Parameters of the animated model-view transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Uniform object scale
    pub scale: f32,
    /// Fixed view tilt about X, in radians
    pub tilt: f32,
    /// Distance the object is pushed along +Z before orbiting
    pub distance: f32,
    /// Orbit rate about Y, in radians per second
    pub orbit_speed: f32,
    /// Spin rate about X, in radians per second
    pub spin_speed: f32,
}

impl Animation {
    pub fn orbit(&self, time: f32) -> Mat4 {
        rotate_y(time * self.orbit_speed)
    }

    pub fn spin(&self, time: f32) -> Mat4 {
        rotate_x(time * self.spin_speed)
    }

    /// `tilt * orbit * push * spin * scale`, so the object is scaled and
    /// spun in place, pushed out, orbited, and finally tilted.
    pub fn model_view(&self, time: f32) -> Mat4 {
        compose(&[
            rotate_x(self.tilt),
            self.orbit(time),
            translate(0.0, 0.0, self.distance),
            self.spin(time),
            scale(self.scale),
        ])
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            scale: 0.5,
            tilt: PI / 10.0,
            distance: 3.0,
            orbit_speed: PI / 8.0,
            spin_speed: PI / 2.0,
        }
    }
}

/// The three matrix uniforms a frame uploads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    /// Object-space spin, `R`
    pub rotation: Mat4,
    /// Model-view, `MV`
    pub model_view: Mat4,
    /// Projection, `P`
    pub projection: Mat4,
}

impl FrameTransforms {
    pub fn at(animation: &Animation, projection: &Projection, time: f32) -> Self {
        Self {
            rotation: animation.spin(time),
            model_view: animation.model_view(time),
            projection: projection.matrix(),
        }
    }

    /// `P * MV`
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.model_view
    }

    /// Uniform names paired with their matrices, in upload order
    pub fn uniforms(&self) -> [(&'static str, &Mat4); 3] {
        [
            ("R", &self.rotation),
            ("MV", &self.model_view),
            ("P", &self.projection),
        ]
    }
}
