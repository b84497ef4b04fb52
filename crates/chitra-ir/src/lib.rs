//! # chitra-ir
//!
//! The Chitra storyboard IR — a typed, deterministic scene graph for
//! educational animations. A scene is a set of drawable objects (mobjects)
//! plus an ordered script of timed steps; the external vector renderer
//! consumes the serialized form and owns rasterization, text shaping, and
//! video encoding.

pub mod builder;
pub mod layout;
pub mod mobject;
pub mod scene;
pub mod script;
pub mod storyboard;
pub mod timeline;
pub mod validate;

pub use builder::SceneBuilder;
pub use layout::{Frame, Placement};
pub use mobject::{Mobject, MobjectContent, MobjectId};
pub use scene::{Scene, SceneId};
pub use script::{Action, ShowStyle, Step};
pub use storyboard::{Storyboard, StoryboardSettings};
pub use timeline::{MobjectState, SceneState};
