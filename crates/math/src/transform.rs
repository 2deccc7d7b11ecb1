//! Camera transforms: right-handed look-at view and zero-to-one perspective.

use crate::{Mat4, Vec3};

/// Truncated pi used by [`radians`].
#[allow(clippy::approx_constant)]
pub const PI: f32 = 3.1415;

#[allow(clippy::approx_constant)]
const PI_F64: f64 = 3.1415;

/// Degrees to radians, computed as `degrees / 180 * PI`.
///
/// The division runs in `f32` and the product in `f64` before narrowing, so
/// results match the demo's C math for every angle.
pub fn radians(degrees: f32) -> f32 {
    (f64::from(degrees / 180.0) * PI_F64) as f32
}

/// Right-handed view matrix placing the camera at `eye`, looking at `target`.
///
/// Camera space has the viewer looking down its own -Z with +Y up. The rows
/// of the rotation block are the right (`s`), true up (`u`) and negated
/// forward (`f`) axes; column 3 holds the translation.
///
/// `eye` must differ from `target` and `up` must not be parallel to the view
/// direction. Neither is checked: a violation normalizes a zero vector and
/// the matrix fills with NaN.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);

    let mut m = Mat4::ZERO;

    m.0[0] = s.x;
    m.0[4] = s.y;
    m.0[8] = s.z;

    m.0[1] = u.x;
    m.0[5] = u.y;
    m.0[9] = u.z;

    m.0[2] = -f.x;
    m.0[6] = -f.y;
    m.0[10] = -f.z;

    m.0[12] = -s.dot(eye);
    m.0[13] = -u.dot(eye);
    m.0[14] = f.dot(eye);
    m.0[15] = 1.0;

    m
}

/// Right-handed perspective projection with depth mapped to `[0, 1]`.
///
/// A view-space point at distance `near` in front of the camera lands on
/// depth 0 after the perspective divide, one at `far` on depth 1.
///
/// No validation: `near == far` or a `fov_y` of 0 or pi produce non-finite
/// entries.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let tan_half = (fov_y / 2.0).tan();

    let mut m = Mat4::ZERO;
    m.0[0] = 1.0 / (tan_half * aspect);
    m.0[5] = 1.0 / tan_half;
    m.0[10] = far / (near - far);
    m.0[11] = -1.0;
    m.0[14] = -(near * far) / (far - near);
    m
}
