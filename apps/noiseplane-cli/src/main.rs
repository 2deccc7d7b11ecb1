use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use noiseplane_math::{Mat4, Vec3};
use noiseplane_scene::{
    DebugTextRenderer, FrameRenderer, NoiseTexture, PlaneMesh, Scene, SceneConfig, format_matrix,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noiseplane-cli", about = "CLI tool for noiseplane scene data")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene config file (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the projection, view and view-projection matrices
    Matrices {
        /// Camera position as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        eye: Option<Vec3>,
        /// Look-at target as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        target: Option<Vec3>,
        /// Vertical field of view in degrees
        #[arg(long)]
        fov: Option<f32>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate the plane mesh and report its size
    Mesh {
        /// Subdivisions per half axis
        #[arg(short, long)]
        segments: Option<u32>,
        /// Dump every vertex and index as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate the noise texture and write it as a PGM image
    Noise {
        /// Output file
        #[arg(short, long, default_value = "noise.pgm")]
        out: PathBuf,
        /// Texture width and height in texels
        #[arg(long)]
        size: Option<u32>,
        /// Lattice cells across the texture (power of two)
        #[arg(long)]
        frequency: Option<u32>,
    },
    /// Drive frames through the debug text renderer
    Run {
        /// Number of frames to build
        #[arg(short, long, default_value = "3")]
        frames: u64,
        /// Include the full matrices in each frame
        #[arg(long)]
        matrices: bool,
    },
    /// Write the effective config, or print it as JSON
    DumpConfig {
        /// Destination (.yaml, .yml or .json)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct MatrixReport {
    projection: Mat4,
    view: Mat4,
    view_projection: Mat4,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z, got {s:?}"));
    };
    let component = |p: &str| {
        p.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad component {p:?}: {e}"))
    };
    Ok(Vec3::new(component(*x)?, component(*y)?, component(*z)?))
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    match path {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("noiseplane-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("math: {}", noiseplane_math::crate_info());
            println!("scene: {}", noiseplane_scene::crate_info());
            println!(
                "pi: {} (radians(180) = {})",
                noiseplane_math::PI,
                noiseplane_math::radians(180.0)
            );
        }
        Commands::Matrices {
            eye,
            target,
            fov,
            json,
        } => {
            if let Some(eye) = eye {
                config.camera.eye = eye;
            }
            if let Some(target) = target {
                config.camera.target = target;
            }
            if let Some(fov) = fov {
                config.camera.fov_degrees = fov;
            }
            let camera = config.camera();
            camera.validate().context("camera rejected")?;

            let report = MatrixReport {
                projection: camera.projection_matrix(),
                view: camera.view_matrix(),
                view_projection: camera.view_projection(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Projection:\n{}", format_matrix(&report.projection));
                println!("View:\n{}", format_matrix(&report.view));
                println!("View-projection:\n{}", format_matrix(&report.view_projection));
            }
        }
        Commands::Mesh { segments, json } => {
            let segments = segments.unwrap_or(config.mesh.segments);
            let mesh = PlaneMesh::generate(segments)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&mesh)?);
            } else {
                println!(
                    "Plane: segments={}, vertices={}, indices={}, triangles={}",
                    mesh.segments(),
                    mesh.vertex_count(),
                    mesh.index_count(),
                    mesh.triangle_count()
                );
                println!(
                    "Buffers: vertex={} bytes, index={} bytes",
                    mesh.vertex_bytes().len(),
                    mesh.index_bytes().len()
                );
            }
        }
        Commands::Noise {
            out,
            size,
            frequency,
        } => {
            if let Some(size) = size {
                config.noise.size = size;
            }
            if let Some(frequency) = frequency {
                config.noise.frequency = frequency;
            }
            let texture = NoiseTexture::generate(&config.noise)?;
            texture
                .save_pgm(&out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!(
                "Noise: {}x{} (frequency {}) -> {}",
                texture.width(),
                texture.height(),
                config.noise.frequency,
                out.display()
            );
        }
        Commands::Run { frames, matrices } => {
            let mut scene = Scene::new(&config)?;
            let renderer = DebugTextRenderer {
                show_matrices: matrices,
            };
            for _ in 0..frames {
                let uniforms = scene.next_frame();
                print!("{}", renderer.render(&scene, &uniforms));
            }
            tracing::info!(
                frames,
                time = scene.clock().time(),
                "frame run complete"
            );
        }
        Commands::DumpConfig { out } => match out {
            Some(path) => {
                config
                    .save(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Config written to {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&config)?),
        },
    }

    Ok(())
}
