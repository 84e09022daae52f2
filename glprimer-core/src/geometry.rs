/// Static mesh data for the lab scene
use crate::error::{MeshError, MeshResult};

/// An 8-bit RGB color, converted to `[0, 1]` floats before it reaches a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    pub const RED: Self = Self(255, 0, 0);
    pub const GREEN: Self = Self(0, 255, 0);
    pub const BLUE: Self = Self(0, 0, 255);
    pub const YELLOW: Self = Self(255, 255, 0);
    pub const CYAN: Self = Self(0, 255, 255);
    pub const WHITE: Self = Self(255, 255, 255);

    pub fn to_f32(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Unit cube corners for each face, two counter-clockwise triangles per face
/// as seen from outside. Faces: +Z, -Z, +X, -X, -Y, +Y.
#[rustfmt::skip]
const CUBE_POSITIONS: [[f32; 3]; 36] = [
    // +Z
    [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0,  1.0,  1.0],
    [-1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
    // -Z
    [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0],
    // +X
    [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0, -1.0,  1.0],
    [ 1.0, -1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0],
    // -X
    [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0, -1.0],
    [-1.0,  1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0],
    // -Y
    [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [-1.0, -1.0,  1.0],
    [-1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0],
    // +Y
    [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0],
    [ 1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0],
];

const FACE_COLORS: [Rgb8; 6] = [
    Rgb8::RED,
    Rgb8::GREEN,
    Rgb8::BLUE,
    Rgb8::YELLOW,
    Rgb8::CYAN,
    Rgb8::WHITE,
];

const VERTICES_PER_FACE: usize = 6;

/// Indexed triangle mesh with a flat color per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// The `[-1, 1]^3` cube with one color per face
    pub fn cube() -> Self {
        let positions = CUBE_POSITIONS.to_vec();
        let colors = (0..positions.len())
            .map(|i| FACE_COLORS[i / VERTICES_PER_FACE].to_f32())
            .collect();
        let indices = (0..positions.len() as u32).collect();

        Self {
            positions,
            colors,
            indices,
        }
    }

    /// Axis-aligned box centered on the origin with the given full extents
    pub fn cuboid(x: f32, y: f32, z: f32) -> MeshResult<Self> {
        let extents = [x, y, z];
        if extents.iter().any(|e| !e.is_finite() || *e <= 0.0) {
            return Err(MeshError::InvalidExtents(extents));
        }

        let mut mesh = Self::cube();
        for p in &mut mesh.positions {
            p[0] *= x / 2.0;
            p[1] *= y / 2.0;
            p[2] *= z / 2.0;
        }
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.positions.first()?;
        let bounds = self.positions.iter().fold((first, first), |(mut lo, mut hi), p| {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(p[axis]);
                hi[axis] = hi[axis].max(p[axis]);
            }
            (lo, hi)
        });
        Some(bounds)
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
