use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Two-component `f32` vector, used for texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::splat(0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Broadcast one scalar to both components.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

/// Three-component `f32` vector.
///
/// A plain value type: every operation takes its operands by value and
/// returns a new vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Broadcast one scalar to all three components.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Euclidean length. Zero for the zero vector, never negative.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit length.
    ///
    /// The input must have a non-zero length. A zero vector divides by zero
    /// and yields non-finite components; callers are expected to check.
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Right-handed cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec2> for Vec2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SAMPLES: [Vec3; 6] = [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.5, 0.25, 9.0),
        Vec3::new(0.0, 0.0, -7.0),
        Vec3::new(1e-3, 2e-3, -5e-3),
        Vec3::new(120.0, -80.0, 33.0),
        Vec3::new(0.3, 0.3, 0.3),
    ];

    #[test]
    fn splat_broadcasts() {
        assert_eq!(Vec3::splat(2.5), Vec3::new(2.5, 2.5, 2.5));
        assert_eq!(Vec2::splat(-1.0), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vec3::default(), Vec3::ZERO);
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }

    #[test]
    fn subtraction_is_componentwise() {
        let d = Vec3::new(5.0, 7.0, 9.0) - Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(d, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn length_of_zero_is_zero() {
        assert_eq!(Vec3::ZERO.length(), 0.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert!(Vec3::new(-3.0, -4.0, -12.0).length() > 0.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in SAMPLES {
            assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn normalize_zero_is_not_finite() {
        assert!(!Vec3::ZERO.normalize().is_finite());
    }

    #[test]
    fn cross_of_axes_is_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        for a in SAMPLES {
            for b in SAMPLES {
                let c = a.cross(b);
                let scale = a.length() * b.length() * (a.length() + b.length());
                assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-5 * scale.max(1.0));
                assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-5 * scale.max(1.0));
            }
        }
    }

    #[test]
    fn cross_is_anti_commutative() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(a.cross(b), -b.cross(a));
            }
        }
    }

    #[test]
    fn dot_product() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, -5.0, 6.0)), 12.0);
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    }

    #[test]
    fn glam_conversion_preserves_components() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Vec3::from(g), v);
        assert_eq!(v.cross(Vec3::Y), Vec3::from(g.cross(glam::Vec3::Y)));
    }

    #[test]
    fn serializes_as_named_fields() {
        let json = serde_json::to_string(&Vec3::new(0.0, 1.0, 1.0)).unwrap();
        assert_eq!(json, r#"{"x":0.0,"y":1.0,"z":1.0}"#);
    }
}
