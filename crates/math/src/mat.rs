use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// 4x4 `f32` matrix stored column-major: element `col * 4 + row`.
///
/// Indices 0..4 are column 0, 4..8 column 1, and so on. This is the layout
/// GPU shaders expect for a `mat4x4<f32>` uniform, so the raw array can be
/// written to a uniform buffer as is.
///
/// `Default` is the all-zero matrix, not the identity.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const ZERO: Self = Self([0.0; 16]);

    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const fn from_cols_array(v: [f32; 16]) -> Self {
        Self(v)
    }

    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.0
    }

    /// Element at `col`, `row`.
    ///
    /// # Panics
    /// If either index is 4 or more.
    pub fn at(&self, col: usize, row: usize) -> f32 {
        assert!(col < 4 && row < 4, "matrix index ({col}, {row}) out of range");
        self.0[col * 4 + row]
    }

    pub fn col(&self, col: usize) -> [f32; 4] {
        let base = col * 4;
        [self.0[base], self.0[base + 1], self.0[base + 2], self.0[base + 3]]
    }

    pub fn row(&self, row: usize) -> [f32; 4] {
        [self.0[row], self.0[4 + row], self.0[8 + row], self.0[12 + row]]
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                out.0[row * 4 + col] = self.0[col * 4 + row];
            }
        }
        out
    }

    /// Multiply a column vector: `self * v`.
    pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|col| self.0[col * 4 + row] * v[col]).sum();
        }
        out
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for col in 0..4 {
            out.0[col * 4..col * 4 + 4].copy_from_slice(&self.transform_vec4(rhs.col(col)));
        }
        out
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self(m.to_cols_array())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.0)
    }
}
