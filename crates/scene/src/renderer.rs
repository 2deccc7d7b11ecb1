use std::fmt::Write;

use noiseplane_math::Mat4;

use crate::scene::Scene;
use crate::uniforms::GlobalUniforms;

/// Renderer-agnostic interface. A GPU back end implements this to upload the
/// scene's buffers once and draw each frame from the uniforms.
///
/// Renderers read the scene and never mutate it.
pub trait FrameRenderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `scene` with the given uniforms.
    fn render(&self, scene: &Scene, uniforms: &GlobalUniforms) -> Self::Output;
}

/// Debug text renderer, standing in for the GPU back end.
///
/// Produces a human-readable summary of what a GPU renderer would receive.
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Also dump the full projection and view matrices.
    pub show_matrices: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matrices() -> Self {
        Self {
            show_matrices: true,
        }
    }
}

/// Format a column-major matrix as four rows.
pub fn format_matrix(m: &Mat4) -> String {
    let mut out = String::new();
    for row in 0..4 {
        let r = m.row(row);
        let _ = writeln!(
            out,
            "  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]",
            r[0], r[1], r[2], r[3]
        );
    }
    out
}

impl FrameRenderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, uniforms: &GlobalUniforms) -> String {
        let mut out = String::new();
        let cam = scene.camera();
        let mesh = scene.mesh();
        let tex = scene.texture();

        let _ = writeln!(
            out,
            "=== Frame {} (time={:.3}s) ===",
            scene.clock().frame(),
            uniforms.time
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.3}",
            cam.eye.x,
            cam.eye.y,
            cam.eye.z,
            cam.target.x,
            cam.target.y,
            cam.target.z,
            cam.fov_degrees,
            cam.aspect
        );
        let _ = writeln!(
            out,
            "Mesh: {} vertices, {} triangles ({} segments)",
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.segments()
        );
        let _ = writeln!(out, "Texture: {}x{} R8", tex.width(), tex.height());
        let _ = writeln!(out, "Uniforms: {} bytes", uniforms.as_bytes().len());

        if self.show_matrices {
            out.push_str("Projection:\n");
            out.push_str(&format_matrix(&uniforms.projection));
            out.push_str("View:\n");
            out.push_str(&format_matrix(&uniforms.view));
        }

        out
    }
}
