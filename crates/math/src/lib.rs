//! Math core: vector types and the two camera transforms fed to the GPU.
//!
//! # Invariants
//! - Every operation is a pure function of its arguments. No global state.
//! - Matrices are column-major (`col * 4 + row`), right-handed, with clip
//!   depth in `[0, 1]`.
//! - Precondition violations (zero-length normalization, degenerate camera
//!   parameters) propagate as NaN/Inf instead of being reported. Validate
//!   camera input before calling in.

mod mat;
mod transform;
mod vec;

pub use mat::Mat4;
pub use transform::{PI, look_at, perspective, radians};
pub use vec::{Vec2, Vec3};

pub fn crate_info() -> &'static str {
    "noiseplane-math v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("math"));
    }
}
