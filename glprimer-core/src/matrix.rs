/// Column-major 4x4 matrix value type
use bytemuck::{Pod, Zeroable};
use nalgebra::Matrix4;
use std::fmt;
use std::ops::Mul;

use crate::transform;

/// A 4x4 matrix of `f32` stored column-major: element `(row, col)` lives at
/// `data[col * 4 + row]`.
///
/// The layout matches what OpenGL expects from `glUniformMatrix4fv` with
/// `transpose = GL_FALSE`, so [`Mat4::as_slice`] can be uploaded directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const ZERO: Self = Self { data: [0.0; 16] };

    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.data
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes in column-major order, ready for a uniform upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Element at `row`, `col` (both `0..4`)
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    pub fn column(&self, col: usize) -> [f32; 4] {
        let c = col * 4;
        [self.data[c], self.data[c + 1], self.data[c + 2], self.data[c + 3]]
    }

    pub fn row(&self, row: usize) -> [f32; 4] {
        [
            self.data[row],
            self.data[4 + row],
            self.data[8 + row],
            self.data[12 + row],
        ]
    }

    /// Apply the matrix to a homogeneous column vector (`M * v`)
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let m = &self.data;
        let mut out = [0.0f32; 4];
        for (row, value) in out.iter_mut().enumerate() {
            *value = m[row] * v[0] + m[4 + row] * v[1] + m[8 + row] * v[2] + m[12 + row] * v[3];
        }
        out
    }

    /// Transform a point (`w = 1`) and divide by the resulting `w`.
    ///
    /// Returns `None` when `w` is too close to zero to divide by.
    pub fn project_point(&self, p: [f32; 3]) -> Option<[f32; 3]> {
        let [x, y, z, w] = self.transform([p[0], p[1], p[2], 1.0]);
        if w.abs() < 1e-6 {
            return None;
        }
        Some([x / w, y / w, z / w])
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                out.data[row * 4 + col] = self.data[col * 4 + row];
            }
        }
        out
    }

    /// Element-wise comparison within `epsilon`
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        transform::multiply(&self, &rhs)
    }
}

impl Mul<&Mat4> for &Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: &Mat4) -> Mat4 {
        transform::multiply(self, rhs)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self { data }
    }
}

// nalgebra stores column-major as well, so conversions are plain copies.
impl From<Mat4> for Matrix4<f32> {
    fn from(m: Mat4) -> Self {
        Matrix4::from_column_slice(&m.data)
    }
}

impl From<Matrix4<f32>> for Mat4 {
    fn from(m: Matrix4<f32>) -> Self {
        let mut data = [0.0f32; 16];
        data.copy_from_slice(m.as_slice());
        Self { data }
    }
}

/// Prints the matrix row by row, like the lab framework's `mat4print`
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix:")?;
        for row in 0..4 {
            let [a, b, c, d] = self.row(row);
            writeln!(f, "{:6.2} {:6.2} {:6.2} {:6.2}", a, b, c, d)?;
        }
        writeln!(f)
    }
}
