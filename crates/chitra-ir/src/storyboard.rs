use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::Frame;
use crate::scene::Scene;
use chitra_core::{ChitraConfig, ChitraError, ChitraResult, Color};

/// Top-level export unit: settings plus an ordered list of scenes. This is
/// the root of the JSON document handed to the external renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storyboard {
    /// Unique storyboard identifier.
    pub id: String,
    /// Output and frame settings.
    pub settings: StoryboardSettings,
    /// Ordered list of scenes.
    pub scenes: Vec<Scene>,
}

impl Storyboard {
    /// Create a new empty storyboard with the given settings.
    pub fn new(settings: StoryboardSettings) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            settings,
            scenes: Vec::new(),
        }
    }

    /// Total duration across all scenes.
    pub fn total_duration(&self) -> chitra_core::Duration {
        self.scenes
            .iter()
            .fold(chitra_core::Duration::zero(), |acc, s| acc + s.duration())
    }

    /// Total number of frames across all scenes.
    pub fn total_frames(&self) -> u64 {
        self.total_duration().frame_count(self.settings.fps)
    }

    /// Add a scene.
    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    /// Get a scene by its ID.
    pub fn get_scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id.0 == id)
    }
}

/// Output resolution, frame rate, and scene-frame geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryboardSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: f64,
    /// Scene frame height in scene units; width follows the output aspect.
    pub frame_height: f64,
    /// Background color.
    pub background: Color,
}

impl StoryboardSettings {
    /// 1080p at 30 fps with the canonical 8-unit frame.
    pub fn hd_30() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30.0,
            frame_height: 8.0,
            background: Color::BLACK,
        }
    }

    /// Custom resolution and frame rate.
    pub fn custom(width: u32, height: u32, fps: f64) -> Self {
        Self {
            width,
            height,
            fps,
            frame_height: 8.0,
            background: Color::BLACK,
        }
    }

    /// Build settings from a loaded project configuration.
    pub fn from_config(config: &ChitraConfig) -> ChitraResult<Self> {
        let background = Color::from_hex(&config.frame.background)
            .map_err(|e| ChitraError::Config(format!("frame.background: {}", e)))?;
        Ok(Self {
            width: config.output.width,
            height: config.output.height,
            fps: config.output.fps,
            frame_height: config.frame.height,
            background,
        })
    }

    /// The scene frame implied by these settings.
    pub fn frame(&self) -> Frame {
        Frame::with_aspect(self.frame_height, self.width, self.height)
    }
}

impl Default for StoryboardSettings {
    fn default() -> Self {
        Self::hd_30()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use crate::script::Step;

    #[test]
    fn test_storyboard_creation() {
        let board = Storyboard::new(StoryboardSettings::hd_30());
        assert_eq!(board.settings.width, 1920);
        assert!(board.scenes.is_empty());
        assert_eq!(board.total_frames(), 0);
    }

    #[test]
    fn test_storyboard_totals() {
        let mut board = Storyboard::new(StoryboardSettings::hd_30());
        let mut a = Scene::new("a", "A");
        a.script.push(Step::wait(5.0));
        let mut b = Scene::new("b", "B");
        b.script.push(Step::wait(10.0));
        board.add_scene(a);
        board.add_scene(b);
        assert!((board.total_duration().as_seconds() - 15.0).abs() < 0.001);
        assert_eq!(board.total_frames(), 450);
        assert!(board.get_scene("a").is_some());
        assert!(board.get_scene("c").is_none());
    }

    #[test]
    fn test_settings_from_config() {
        let config = ChitraConfig::default();
        let settings = StoryboardSettings::from_config(&config).unwrap();
        assert_eq!(settings.width, 1920);
        assert_eq!(settings.background, Color::BLACK);
        let frame = settings.frame();
        assert!((frame.height - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_settings_from_config_bad_background() {
        let mut config = ChitraConfig::default();
        config.frame.background = "not-a-color".into();
        assert!(StoryboardSettings::from_config(&config).is_err());
    }
}
