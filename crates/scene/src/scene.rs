use crate::camera::{Camera, CameraError};
use crate::clock::FrameClock;
use crate::config::SceneConfig;
use crate::mesh::{MeshError, PlaneMesh};
use crate::noise::{NoiseError, NoiseTexture};
use crate::uniforms::GlobalUniforms;

/// Errors from building a [`Scene`].
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("invalid camera: {0}")]
    Camera(#[from] CameraError),
    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),
    #[error("noise generation failed: {0}")]
    Noise(#[from] NoiseError),
}

/// Everything the frame loop hands to a renderer: the plane, its noise
/// texture, the camera and the clock behind the `time` uniform.
///
/// Owns all state explicitly; nothing lives in globals.
#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    mesh: PlaneMesh,
    texture: NoiseTexture,
    clock: FrameClock,
}

impl Scene {
    /// Validate the camera, then generate the mesh and noise texture.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        let _span = tracing::info_span!("scene_build").entered();

        let camera = config.camera();
        camera.validate()?;
        let mesh = PlaneMesh::generate(config.mesh.segments)?;
        let texture = NoiseTexture::generate(&config.noise)?;

        tracing::debug!(
            vertices = mesh.vertex_count(),
            indices = mesh.index_count(),
            texture = texture.width(),
            "scene ready"
        );

        Ok(Self {
            camera,
            mesh,
            texture,
            clock: FrameClock::new(config.clock),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Replace the camera. Rejected parameters leave the current one in place.
    pub fn set_camera(&mut self, camera: Camera) -> Result<(), CameraError> {
        camera.validate()?;
        self.camera = camera;
        Ok(())
    }

    /// Track a window resize. Zero-sized viewports (minimized windows) are
    /// ignored so the projection stays finite.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.camera.set_viewport(width, height) {
            tracing::debug!(width, height, aspect = self.camera.aspect, "viewport resized");
        } else {
            tracing::debug!(width, height, "zero-sized viewport ignored");
        }
    }

    pub fn mesh(&self) -> &PlaneMesh {
        &self.mesh
    }

    pub fn texture(&self) -> &NoiseTexture {
        &self.texture
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Uniforms for the current clock time, without advancing it.
    pub fn uniforms(&self) -> GlobalUniforms {
        GlobalUniforms::new(self.camera.view_uniforms(), self.clock.time())
    }

    /// Advance the clock one step and build that frame's uniforms.
    pub fn next_frame(&mut self) -> GlobalUniforms {
        let time = self.clock.tick();
        let uniforms = GlobalUniforms::new(self.camera.view_uniforms(), time);
        tracing::trace!(frame = self.clock.frame(), time, "frame uniforms built");
        uniforms
    }
}
