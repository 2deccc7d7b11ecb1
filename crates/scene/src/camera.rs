use noiseplane_math::{Mat4, Vec3, look_at, perspective, radians};
use serde::{Deserialize, Serialize};

use crate::uniforms::ViewUniforms;

/// Shortest eye-to-target distance, and smallest |forward x up|, accepted by
/// [`Camera::validate`].
const MIN_EXTENT: f32 = 1e-6;

/// Look-at camera with a symmetric perspective frustum.
///
/// The math core does not check its inputs, so callers run
/// [`Camera::validate`] before building matrices from user-supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 50.0,
            aspect: 1280.0 / 720.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}

/// Camera parameters the view/projection math cannot handle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("camera {0} is not finite")]
    NonFinite(&'static str),
    #[error("near plane {near} must be positive and closer than far plane {far}")]
    InvalidDepthRange { near: f32, far: f32 },
    #[error("field of view {0} degrees must be strictly between 0 and 180")]
    InvalidFov(f32),
    #[error("aspect ratio {0} must be positive")]
    InvalidAspect(f32),
    #[error("eye and target coincide")]
    EyeAtTarget,
    #[error("up vector is zero or parallel to the view direction")]
    DegenerateUp,
}

impl Camera {
    pub fn validate(&self) -> Result<(), CameraError> {
        for (name, v) in [("eye", self.eye), ("target", self.target), ("up", self.up)] {
            if !v.is_finite() {
                return Err(CameraError::NonFinite(name));
            }
        }
        for (name, v) in [
            ("fov", self.fov_degrees),
            ("aspect", self.aspect),
            ("near", self.near),
            ("far", self.far),
        ] {
            if !v.is_finite() {
                return Err(CameraError::NonFinite(name));
            }
        }

        if self.near <= 0.0 || self.far <= self.near {
            return Err(CameraError::InvalidDepthRange {
                near: self.near,
                far: self.far,
            });
        }
        if self.fov_degrees <= 0.0 || self.fov_degrees >= 180.0 {
            return Err(CameraError::InvalidFov(self.fov_degrees));
        }
        if self.aspect <= 0.0 {
            return Err(CameraError::InvalidAspect(self.aspect));
        }

        let view_dir = self.target - self.eye;
        if view_dir.length() < MIN_EXTENT {
            return Err(CameraError::EyeAtTarget);
        }
        if self.up.length() < MIN_EXTENT
            || view_dir.normalize().cross(self.up.normalize()).length() < MIN_EXTENT
        {
            return Err(CameraError::DegenerateUp);
        }
        Ok(())
    }

    /// Unit vector from eye towards target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Update the aspect ratio after a resize.
    ///
    /// A zero width or height (a minimized window) keeps the previous aspect
    /// and returns `false`.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        perspective(radians(self.fov_degrees), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn view_uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            projection: self.projection_matrix(),
            view: self.view_matrix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_camera_is_valid() {
        let cam = Camera::default();
        assert!(cam.validate().is_ok());
        assert!(cam.view_projection().is_finite());
    }

    #[test]
    fn matrices_come_from_math_core() {
        let cam = Camera::default();
        assert_eq!(
            cam.view_matrix(),
            look_at(Vec3::new(0.0, 1.0, 1.0), Vec3::ZERO, Vec3::Y)
        );
        assert_eq!(
            cam.projection_matrix(),
            perspective(radians(50.0), 1280.0 / 720.0, 0.01, 1000.0)
        );
        let u = cam.view_uniforms();
        assert_eq!(u.view, cam.view_matrix());
        assert_eq!(u.projection, cam.projection_matrix());
    }

    #[test]
    fn forward_points_at_target() {
        let cam = Camera::default();
        let f = cam.forward();
        assert_abs_diff_eq!(f.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(f.y, -(0.5f32).sqrt(), epsilon = 1e-6);
        assert_abs_diff_eq!(f.z, -(0.5f32).sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn viewport_updates_aspect() {
        let mut cam = Camera::default();
        assert!(cam.set_viewport(800, 400));
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn zero_sized_viewport_keeps_aspect() {
        let mut cam = Camera::default();
        cam.set_viewport(800, 400);
        assert!(!cam.set_viewport(640, 0));
        assert!(!cam.set_viewport(0, 600));
        assert_eq!(cam.aspect, 2.0);
        assert!(cam.validate().is_ok());
    }

    #[test]
    fn rejects_bad_depth_range() {
        for (near, far) in [(0.0, 10.0), (-1.0, 10.0), (5.0, 5.0), (10.0, 1.0)] {
            let cam = Camera {
                near,
                far,
                ..Camera::default()
            };
            assert_eq!(
                cam.validate(),
                Err(CameraError::InvalidDepthRange { near, far })
            );
        }
    }

    #[test]
    fn rejects_bad_fov_and_aspect() {
        for fov in [0.0, 180.0, -10.0, 270.0] {
            let cam = Camera {
                fov_degrees: fov,
                ..Camera::default()
            };
            assert_eq!(cam.validate(), Err(CameraError::InvalidFov(fov)));
        }
        let cam = Camera {
            aspect: 0.0,
            ..Camera::default()
        };
        assert_eq!(cam.validate(), Err(CameraError::InvalidAspect(0.0)));
    }

    #[test]
    fn rejects_degenerate_orientation() {
        let at_target = Camera {
            eye: Vec3::ZERO,
            ..Camera::default()
        };
        assert_eq!(at_target.validate(), Err(CameraError::EyeAtTarget));

        let looking_up = Camera {
            eye: Vec3::new(0.0, -3.0, 0.0),
            ..Camera::default()
        };
        assert_eq!(looking_up.validate(), Err(CameraError::DegenerateUp));

        let no_up = Camera {
            up: Vec3::ZERO,
            ..Camera::default()
        };
        assert_eq!(no_up.validate(), Err(CameraError::DegenerateUp));
    }

    #[test]
    fn rejects_non_finite_input() {
        let cam = Camera {
            eye: Vec3::new(f32::NAN, 0.0, 0.0),
            ..Camera::default()
        };
        assert_eq!(cam.validate(), Err(CameraError::NonFinite("eye")));

        let cam = Camera {
            far: f32::INFINITY,
            ..Camera::default()
        };
        assert_eq!(cam.validate(), Err(CameraError::NonFinite("far")));
    }

    #[test]
    fn deserializes_partial_yaml_over_defaults() {
        let yaml = "fov_degrees: 70.0\neye: { x: 0.0, y: 2.0, z: 3.0 }\n";
        let cam: Camera = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cam.fov_degrees, 70.0);
        assert_eq!(cam.eye, Vec3::new(0.0, 2.0, 3.0));
        assert_eq!(cam.near, Camera::default().near);
    }
}
