//! Scene: everything the frame loop feeds a GPU back end, built on the CPU.
//!
//! # Invariants
//! - Camera parameters are validated before they reach the math core.
//! - The mesh, texture and uniforms are plain byte-castable data; no GPU
//!   handles live here.
//! - Frame time advances by a fixed step, so frame N always produces the
//!   same uniforms.

mod camera;
mod clock;
mod config;
mod mesh;
mod noise;
mod renderer;
mod scene;
mod uniforms;

pub use camera::{Camera, CameraError};
pub use clock::{ClockConfig, FrameClock};
pub use config::{ConfigError, ConfigFormat, MeshConfig, SceneConfig, WindowConfig};
pub use mesh::{DEFAULT_SEGMENTS, MeshError, PlaneMesh, Vertex, plane_vertex_index};
pub use noise::{NoiseConfig, NoiseError, NoiseTexture, perlin3};
pub use renderer::{DebugTextRenderer, FrameRenderer, format_matrix};
pub use scene::{Scene, SceneError};
pub use uniforms::{GlobalUniforms, ViewUniforms};

pub fn crate_info() -> &'static str {
    "noiseplane-scene v0.1.0"
}
