use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::math::{Vec3, to_radians};

/// 4x4 transform matrix stored as 16 floats in column-major order.
///
/// Element (row `r`, column `c`) lives at index `c * 4 + r`, which is also the
/// layout uploaded to the graphics backend, so [`Mat4::as_slice`] and the
/// `bytemuck` impls hand out the storage untouched.
///
/// Composition reads right to left: `a * b` applies `b` first, then `a`.
///
/// Degenerate inputs (zero-length look-at direction, `near == far`, zero span
/// projection boxes) are not checked and produce NaN or infinite elements.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Level used by [`Mat4::log`].
    pub const LOG_LEVEL: log::Level = log::Level::Debug;

    /// All-zero matrix.
    pub const fn new() -> Self {
        Self { data: [0.0; 16] }
    }

    /// Zero matrix with `diagonal` on the main diagonal.
    pub const fn from_diagonal(diagonal: f32) -> Self {
        let mut data = [0.0; 16];
        data[0] = diagonal;
        data[5] = diagonal;
        data[10] = diagonal;
        data[15] = diagonal;
        Self { data }
    }

    pub const fn identity() -> Self {
        Self::from_diagonal(1.0)
    }

    /// Wraps 16 floats that are already laid out column-major.
    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Orthographic projection mapping the box to the canonical clip cube.
    ///
    /// `near` and `far` are z coordinates: `z = near` lands on `+1` and
    /// `z = far` on `-1`.
    pub fn orthographic(
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut result = Self::identity();

        result.data[0] = 2.0 / (right - left);
        result.data[5] = 2.0 / (top - bottom);
        result.data[10] = 2.0 / (near - far);
        result.data[12] = (left + right) / (left - right);
        result.data[13] = (bottom + top) / (bottom - top);
        result.data[14] = (far + near) / (far - near);

        result
    }

    /// Perspective projection with a vertical field of view in degrees.
    ///
    /// Camera looks down -Z. Built on top of the identity, so `e[15]` stays
    /// `1` and clip `w` comes out as `1 - z`.
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let (aspect_ratio, near, far) = (f64::from(aspect_ratio), f64::from(near), f64::from(far));

        let q = 1.0 / to_radians(0.5 * f64::from(fov)).tan();
        let a = q / aspect_ratio;
        let b = (near + far) / (near - far);
        let c = (2.0 * near * far) / (near - far);

        let mut result = Self::identity();
        result.data[0] = a as f32;
        result.data[5] = q as f32;
        result.data[10] = b as f32;
        result.data[11] = -1.0;
        result.data[14] = c as f32;

        log::debug!(
            "Perspective matrix: fov={}, aspect={}, near={}, far={}",
            fov,
            aspect_ratio,
            near,
            far
        );

        result
    }

    /// View matrix placing the camera at `eye`, looking at `at`.
    ///
    /// Eye space has the viewing direction along -Z and `up` projected onto +Y.
    pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Self {
        let f = (at - eye).normalize();
        let s = f.cross(up.normalize()).normalize();
        let u = s.cross(f);

        let mut rotation = Self::identity();

        // rows: side, up, -forward
        rotation.data[0] = s.x;
        rotation.data[4] = s.y;
        rotation.data[8] = s.z;

        rotation.data[1] = u.x;
        rotation.data[5] = u.y;
        rotation.data[9] = u.z;

        rotation.data[2] = -f.x;
        rotation.data[6] = -f.y;
        rotation.data[10] = -f.z;

        rotation * Self::translate(-eye)
    }

    pub fn translate(translation: Vec3) -> Self {
        let mut result = Self::identity();
        result.data[12] = translation.x;
        result.data[13] = translation.y;
        result.data[14] = translation.z;
        result
    }

    pub fn scale(scale: Vec3) -> Self {
        let mut result = Self::identity();
        result.data[0] = scale.x;
        result.data[5] = scale.y;
        result.data[10] = scale.z;
        result
    }

    /// Counter-clockwise rotation of `angle` degrees about `axis`.
    ///
    /// `axis` is used as given and should be unit length.
    pub fn rotate(angle: f32, axis: Vec3) -> Self {
        let (s, c) = to_radians(f64::from(angle)).sin_cos();
        let omc = 1.0 - c;
        let (x, y, z) = (f64::from(axis.x), f64::from(axis.y), f64::from(axis.z));

        let mut result = Self::identity();

        // col 0
        result.data[0] = (x * x * omc + c) as f32;
        result.data[1] = (y * x * omc + z * s) as f32;
        result.data[2] = (z * x * omc - y * s) as f32;

        // col 1
        result.data[4] = (x * y * omc - z * s) as f32;
        result.data[5] = (y * y * omc + c) as f32;
        result.data[6] = (z * y * omc + x * s) as f32;

        // col 2
        result.data[8] = (x * z * omc + y * s) as f32;
        result.data[9] = (y * z * omc - x * s) as f32;
        result.data[10] = (z * z * omc + c) as f32;

        result
    }

    /// Element at mathematical `row` and `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    pub fn col(&self, index: usize) -> [f32; 4] {
        let start = index * 4;
        [
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            self.data[start + 3],
        ]
    }

    pub fn row(&self, index: usize) -> [f32; 4] {
        [
            self.data[index],
            self.data[index + 4],
            self.data[index + 8],
            self.data[index + 12],
        ]
    }

    pub fn transpose(self) -> Self {
        let mut result = Self::new();
        for row in 0..4 {
            for col in 0..4 {
                result.data[row * 4 + col] = self.data[col * 4 + row];
            }
        }
        result
    }

    fn product(&self, other: &Self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                out[row + col * 4] = sum;
            }
        }
        out
    }

    /// Returns `self * other`: `other` is applied first.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_cols_array(self.product(other))
    }

    /// In-place `self = self * other`.
    ///
    /// The product is finished in a scratch array before `self` is overwritten.
    pub fn multiply_assign(&mut self, other: &Self) -> &mut Self {
        let scratch = self.product(other);
        self.data = scratch;
        self
    }

    /// Transforms a point (`w = 1`), dividing by the resulting `w` when it is non-zero.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let x = self.get(0, 0) * point.x
            + self.get(0, 1) * point.y
            + self.get(0, 2) * point.z
            + self.get(0, 3);
        let y = self.get(1, 0) * point.x
            + self.get(1, 1) * point.y
            + self.get(1, 2) * point.z
            + self.get(1, 3);
        let z = self.get(2, 0) * point.x
            + self.get(2, 1) * point.y
            + self.get(2, 2) * point.z
            + self.get(2, 3);
        let w = self.get(3, 0) * point.x
            + self.get(3, 1) * point.y
            + self.get(3, 2) * point.z
            + self.get(3, 3);

        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        let x =
            self.get(0, 0) * vector.x + self.get(0, 1) * vector.y + self.get(0, 2) * vector.z;
        let y =
            self.get(1, 0) * vector.x + self.get(1, 1) * vector.y + self.get(1, 2) * vector.z;
        let z =
            self.get(2, 0) * vector.x + self.get(2, 1) * vector.y + self.get(2, 2) * vector.z;

        Vec3::new(x, y, z)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn to_cols_array(self) -> [f32; 16] {
        self.data
    }

    /// Raw column-major bytes, ready for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Dumps the matrix, row by row, to the log at [`Mat4::LOG_LEVEL`].
    pub fn log(&self) {
        log::log!(Self::LOG_LEVEL, "{}", self);
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl Mul<&Mat4> for &Mat4 {
    type Output = Mat4;

    fn mul(self, other: &Mat4) -> Mat4 {
        self.multiply(other)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, other: Self) {
        self.multiply_assign(&other);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, other: &Mat4) {
        self.multiply_assign(other);
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mat4:")?;
        for index in 0..4 {
            let [a, b, c, d] = self.row(index);
            write!(f, "\n{:.6}, {:.6}, {:.6}, {:.6}", a, b, c, d)?;
        }
        Ok(())
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self { data }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(mat: Mat4) -> Self {
        mat.data
    }
}

/// Array of columns, the shape shader uniform structs usually declare.
impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(cols: [[f32; 4]; 4]) -> Self {
        let mut data = [0.0; 16];
        for (col, values) in cols.iter().enumerate() {
            data[col * 4..col * 4 + 4].copy_from_slice(values);
        }
        Self { data }
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(mat: Mat4) -> Self {
        [mat.col(0), mat.col(1), mat.col(2), mat.col(3)]
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        let data: [f32; 16] = slice.try_into().map_err(|_| MathError::ElementCount {
            expected: 16,
            found: slice.len(),
        })?;
        Ok(Self { data })
    }
}

unsafe impl bytemuck::Pod for Mat4 {}
unsafe impl bytemuck::Zeroable for Mat4 {}
