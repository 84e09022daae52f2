/// GLprimer Core Library - 4x4 transforms for the OpenGL lab framework
///
/// Column-major matrix construction and composition (identity, axis
/// rotations, scale, translation, perspective), the per-frame transforms of
/// the spinning cube scene, its static mesh data, and a small expression
/// language for composing transforms from text.

pub mod error;
pub mod expr;
pub mod frame;
pub mod geometry;
pub mod matrix;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use error::{ExprError, MeshError, TransformError};
pub use frame::{Animation, FrameTransforms};
pub use geometry::{Mesh, Rgb8};
pub use matrix::Mat4;
pub use projection::{perspective, Projection};
pub use transform::{compose, identity, multiply, rotate_x, rotate_y, rotate_z, scale, translate};
