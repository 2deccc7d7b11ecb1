//! Scene configuration file.
//!
//! Every section is optional; missing fields fall back to the demo defaults
//! (1280x720 window, camera at (0, 1, 1) looking at the origin, 5-segment
//! plane, 256x256 noise at frequency 16, 60 Hz clock).
//!
//! ```yaml
//! window: { width: 1920, height: 1080 }
//! camera:
//!   eye: { x: 0.0, y: 2.0, z: 2.0 }
//!   fov_degrees: 60.0
//! mesh: { segments: 8 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::camera::Camera;
use crate::clock::ClockConfig;
use crate::mesh::DEFAULT_SEGMENTS;
use crate::noise::NoiseConfig;

/// Errors from loading or saving a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// On-disk encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Subdivisions per half axis of the plane.
    pub segments: u32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Everything needed to build a [`crate::Scene`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub camera: Camera,
    pub mesh: MeshConfig,
    pub noise: NoiseConfig,
    pub clock: ClockConfig,
}

impl SceneConfig {
    /// Read a YAML or JSON config, picking the parser from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(&text)?,
            ConfigFormat::Json => serde_json::from_str(&text)?,
        };
        tracing::debug!(path = %path.display(), ?format, "loaded scene config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = match ConfigFormat::from_path(path)? {
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, text)?;
        Ok(())
    }

    /// The configured camera with its aspect ratio taken from the window.
    pub fn camera(&self) -> Camera {
        let mut camera = self.camera;
        camera.set_viewport(self.window.width, self.window.height);
        camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noiseplane_math::Vec3;

    #[test]
    fn defaults_match_demo() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.window.width, 1280);
        assert_eq!(cfg.window.height, 720);
        assert_eq!(cfg.mesh.segments, 5);
        assert_eq!(cfg.noise.size, 256);
        assert_eq!(cfg.noise.frequency, 16);
        assert_eq!(cfg.camera().aspect, 1280.0 / 720.0);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.toml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(ConfigFormat::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(&path, "mesh:\n  segments: 8\nwindow: { width: 800, height: 800 }\n").unwrap();

        let cfg = SceneConfig::load(&path).unwrap();
        assert_eq!(cfg.mesh.segments, 8);
        assert_eq!(cfg.noise, NoiseConfig::default());
        assert_eq!(cfg.camera.eye, Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(cfg.camera().aspect, 1.0);
    }

    #[test]
    fn yaml_and_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = SceneConfig::default();
        cfg.camera.fov_degrees = 65.0;
        cfg.noise.frequency = 8;
        cfg.clock.delta = 0.25;

        for name in ["scene.yaml", "scene.json"] {
            let path = dir.path().join(name);
            cfg.save(&path).unwrap();
            assert_eq!(SceneConfig::load(&path).unwrap(), cfg);
        }
    }

    #[test]
    fn malformed_file_reports_parser_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"mesh\": ").unwrap();
        assert!(matches!(SceneConfig::load(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SceneConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
