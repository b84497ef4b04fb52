//! # chitra-scenes
//!
//! The Chitra scene library: self-contained educational animation
//! storyboards covering school physics and maths topics, captioned in
//! Nepali and English. Each module transcribes one storyboard (its literal
//! geometry, colors, caption strings, and timings) into the IR builder.
//!
//! Scenes are deliberately self-contained: sibling modules repeat similar
//! patterns rather than sharing helpers, so each scene reads top to bottom
//! as one storyboard.

pub mod blackhole;
pub mod complex_number;
pub mod cow;
pub mod force;
pub mod force_basics;
pub mod force_vector;
pub mod gravitation;
pub mod newton_third_law;
pub mod newton_third_law_np;
pub mod pythagoras;
pub mod quadratic;

use chitra_ir::{Scene, Storyboard, StoryboardSettings};

/// One entry in the scene catalog.
pub struct SceneEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub build: fn() -> Scene,
}

/// The full catalog, in presentation order.
pub fn catalog() -> Vec<SceneEntry> {
    vec![
        SceneEntry {
            id: "force",
            title: "Force",
            build: force::scene,
        },
        SceneEntry {
            id: "force-basics",
            title: "Force Basics",
            build: force_basics::scene,
        },
        SceneEntry {
            id: "force-vector",
            title: "Force Vector Illustration",
            build: force_vector::scene,
        },
        SceneEntry {
            id: "gravitation",
            title: "Gravitational Force",
            build: gravitation::scene,
        },
        SceneEntry {
            id: "newton-third-law",
            title: "Newton's Third Law",
            build: newton_third_law::scene,
        },
        SceneEntry {
            id: "newton-third-law-np",
            title: "Newton's Third Law (Nepali)",
            build: newton_third_law_np::scene,
        },
        SceneEntry {
            id: "pythagoras",
            title: "Pythagoras' Theorem",
            build: pythagoras::scene,
        },
        SceneEntry {
            id: "quadratic",
            title: "Quadratic Equation",
            build: quadratic::scene,
        },
        SceneEntry {
            id: "blackhole",
            title: "Black Hole",
            build: blackhole::scene,
        },
        SceneEntry {
            id: "complex-number",
            title: "Complex Numbers",
            build: complex_number::scene,
        },
        SceneEntry {
            id: "cow",
            title: "Cow",
            build: cow::scene,
        },
    ]
}

/// Build a scene by its catalog ID.
pub fn by_id(id: &str) -> Option<Scene> {
    catalog()
        .into_iter()
        .find(|entry| entry.id == id)
        .map(|entry| (entry.build)())
}

/// Bundle every catalog scene into a storyboard with the given settings.
pub fn storyboard(settings: StoryboardSettings) -> Storyboard {
    let mut board = Storyboard::new(settings);
    for entry in catalog() {
        board.add_scene((entry.build)());
    }
    board
}
