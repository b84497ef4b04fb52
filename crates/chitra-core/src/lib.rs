//! # chitra-core
//!
//! Core types and primitives for the Chitra storyboard library.
//! This crate contains foundational types shared across all Chitra crates:
//! colors, durations, scene-unit geometry, easing curves, caption languages,
//! configuration, and error types.

pub mod color;
pub mod config;
pub mod digest;
pub mod error;
pub mod math;
pub mod time;
pub mod types;

pub use color::Color;
pub use config::ChitraConfig;
pub use digest::SceneDigest;
pub use error::{ChitraError, ChitraResult};
pub use math::{Transform2D, Vec2};
pub use time::{Duration, Timestamp};
pub use types::{Dir, Easing, Edge, Language};
