/// Error types for the core crate
use thiserror::Error;

/// Rejected transform parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Projection parameters must be finite")]
    NonFinite,

    #[error("Invalid field of view: {0} rad (expected 0 < fov < pi)")]
    InvalidFieldOfView(f32),

    #[error("Invalid aspect ratio: {0}")]
    InvalidAspect(f32),

    #[error("Invalid depth range: near = {near}, far = {far} (expected 0 < near < far)")]
    InvalidDepthRange { near: f32, far: f32 },

    #[error("Viewport has no area: {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Rejected mesh construction parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("Box extents must be positive: {0:?}")]
    InvalidExtents([f32; 3]),
}

/// Result type for mesh construction
pub type MeshResult<T> = Result<T, MeshError>;

/// Transform expression errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// The parser stopped at the given remainder of the input
    #[error("Syntax error near `{0}`")]
    Syntax(String),

    #[error("Unknown transform: {0}")]
    UnknownFunction(String),

    #[error("`{name}` takes {expected} argument(s), got {actual}")]
    Arity {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unexpected trailing input: `{0}`")]
    TrailingInput(String),

    #[error("Empty expression")]
    Empty,
}

/// Result type for expression evaluation
pub type ExprResult<T> = Result<T, ExprError>;
