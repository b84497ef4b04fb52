use serde::{Deserialize, Serialize};

use crate::mobject::{Mobject, MobjectId};
use crate::script::Step;
use chitra_core::{Duration, Timestamp};

/// Unique identifier for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneId(pub String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One self-contained storyboard: a set of mobjects and the ordered script
/// of timed steps applied to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: SceneId,
    /// Human-readable title.
    pub title: String,
    /// Every mobject the script refers to, declared up front.
    pub mobjects: Vec<Mobject>,
    /// The ordered list of timed steps.
    pub script: Vec<Step>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SceneId::new(id),
            title: title.into(),
            mobjects: Vec::new(),
            script: Vec::new(),
        }
    }

    /// Total running time: the sum of all step durations.
    pub fn duration(&self) -> Duration {
        self.script
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.duration)
    }

    /// Number of frames in this scene at the given fps.
    pub fn frame_count(&self, fps: f64) -> u64 {
        self.duration().frame_count(fps)
    }

    /// The timestamp at the end of each step: the scene's wait-checkpoints.
    pub fn checkpoints(&self) -> Vec<Timestamp> {
        let mut t = Timestamp::zero();
        self.script
            .iter()
            .map(|s| {
                t = t + s.duration;
                t
            })
            .collect()
    }

    /// Get a mobject by its ID.
    pub fn get_mobject(&self, id: &str) -> Option<&Mobject> {
        self.mobjects.iter().find(|m| m.id.0 == id)
    }

    /// Whether the scene declares a mobject with this ID.
    pub fn has_mobject(&self, id: &MobjectId) -> bool {
        self.mobjects.iter().any(|m| &m.id == id)
    }
}
