use bytemuck::{Pod, Zeroable};
use noiseplane_math::Mat4;
use serde::Serialize;

/// Camera matrices as pushed to the vertex stage: projection, then view.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize)]
pub struct ViewUniforms {
    pub projection: Mat4,
    pub view: Mat4,
}

/// Per-frame uniform block: projection (16 floats), view (16 floats) and the
/// elapsed time in seconds, packed with no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize)]
pub struct GlobalUniforms {
    pub projection: Mat4,
    pub view: Mat4,
    pub time: f32,
}

impl GlobalUniforms {
    pub fn new(view: ViewUniforms, time: f32) -> Self {
        Self {
            projection: view.projection,
            view: view.view,
            time,
        }
    }

    pub fn view_uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            projection: self.projection,
            view: self.view,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl ViewUniforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn layout_has_no_padding() {
        assert_eq!(size_of::<ViewUniforms>(), 128);
        assert_eq!(size_of::<GlobalUniforms>(), 132);
        assert_eq!(offset_of!(GlobalUniforms, projection), 0);
        assert_eq!(offset_of!(GlobalUniforms, view), 64);
        assert_eq!(offset_of!(GlobalUniforms, time), 128);
    }

    #[test]
    fn bytes_follow_field_order() {
        let mut projection = Mat4::ZERO;
        projection.0[0] = 2.0;
        let uniforms = GlobalUniforms {
            projection,
            view: Mat4::IDENTITY,
            time: 0.5,
        };

        let bytes = uniforms.as_bytes();
        assert_eq!(bytes.len(), 132);
        assert_eq!(&bytes[0..4], &2.0f32.to_ne_bytes());
        assert_eq!(&bytes[64..68], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[128..132], &0.5f32.to_ne_bytes());
    }

    #[test]
    fn view_uniforms_round_trip() {
        let view = ViewUniforms {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
        };
        let global = GlobalUniforms::new(view, 3.0);
        assert_eq!(global.view_uniforms(), view);
        assert_eq!(global.view_projection(), Mat4::IDENTITY);
        assert_eq!(&global.as_bytes()[..128], view.as_bytes());
    }
}
