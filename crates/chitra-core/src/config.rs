use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ChitraError, ChitraResult};

/// Output settings for exported storyboards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30.0,
        }
    }
}

/// Scene frame settings. Scenes are authored in scene units with a centered
/// origin; the frame height fixes the unit scale and the width follows the
/// output aspect ratio.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrameConfig {
    pub height: f64,
    /// Background color as a hex string, e.g. "#000000".
    pub background: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            height: 8.0,
            background: "#000000".to_string(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: "output".to_string(),
        }
    }
}

/// Project configuration, loaded from `chitra.toml`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ChitraConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub frame: FrameConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl ChitraConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> ChitraResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ChitraConfig =
            toml::from_str(&contents).map_err(|e| ChitraError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load `chitra.toml` from the given directory, falling back to defaults
    /// when the file does not exist.
    pub fn load_or_default(dir: &Path) -> ChitraResult<Self> {
        let path = dir.join("chitra.toml");
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}
