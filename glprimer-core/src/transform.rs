/// 4x4 transform constructors and composition
///
/// All matrices follow the column-vector convention (`v' = M * v`) in a
/// right-handed coordinate system. When composing, the rightmost matrix is
/// applied to the vector first.
use crate::matrix::Mat4;

/// The multiplicative identity
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Rotation about the X axis by `angle` radians.
///
/// Positive angles turn +Y towards +Z, so `rotate_x(PI / 2)` maps
/// `(0, 1, 0)` onto `(0, 0, 1)`.
pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::from_cols_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, s, 0.0, //
        0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the Y axis by `angle` radians (+Z turns towards +X)
pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::from_cols_array([
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the Z axis by `angle` radians (+X turns towards +Y)
pub fn rotate_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::from_cols_array([
        c, s, 0.0, 0.0, //
        -s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Uniform scale on x, y and z
pub fn scale(factor: f32) -> Mat4 {
    Mat4::from_cols_array([
        factor, 0.0, 0.0, 0.0, //
        0.0, factor, 0.0, 0.0, //
        0.0, 0.0, factor, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Translation, stored in the last column
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_cols_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        x, y, z, 1.0,
    ])
}

/// Matrix product `a * b`
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let a = &a.data;
    let b = &b.data;
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[col * 4 + row] = a[row] * b[col * 4]
                + a[4 + row] * b[col * 4 + 1]
                + a[8 + row] * b[col * 4 + 2]
                + a[12 + row] * b[col * 4 + 3];
        }
    }
    Mat4::from_cols_array(out)
}

/// Multiply a chain of matrices left to right
pub fn compose<'a, I>(matrices: I) -> Mat4
where
    I: IntoIterator<Item = &'a Mat4>,
{
    matrices
        .into_iter()
        .fold(identity(), |acc, m| multiply(&acc, m))
}
