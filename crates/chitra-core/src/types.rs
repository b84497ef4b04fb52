use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Easing curve for interpolating a play step.
///
/// `Smooth` is the default: storyboard motion reads better with an
/// ease-in-out ramp, and the source scenes only opt out of it for constant
/// -speed paths (orbits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Smooth,
    EaseIn,
    EaseOut,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Smooth
    }
}

impl Easing {
    /// Apply the easing curve to a normalized time value t in [0, 1].
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth => t * t * (3.0 - 2.0 * t),
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
        }
    }
}

/// Language of a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Nepali,
    English,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Nepali => write!(f, "ne"),
            Language::English => write!(f, "en"),
        }
    }
}

/// An edge of the scene frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A cardinal direction, used for relative placement ("next to X, below").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// The unit vector for this direction in the scene frame.
    pub fn unit(&self) -> Vec2 {
        match self {
            Dir::Up => Vec2::UP,
            Dir::Down => Vec2::DOWN,
            Dir::Left => Vec2::LEFT,
            Dir::Right => Vec2::RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_linear() {
        let e = Easing::Linear;
        assert!((e.apply(0.0)).abs() < 0.001);
        assert!((e.apply(0.5) - 0.5).abs() < 0.001);
        assert!((e.apply(1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_easing_smooth_midpoint() {
        // Smoothstep passes through 0.5 at the midpoint but with zero slope
        // at the endpoints.
        let e = Easing::Smooth;
        assert!((e.apply(0.5) - 0.5).abs() < 0.001);
        assert!(e.apply(0.1) < 0.1);
        assert!(e.apply(0.9) > 0.9);
    }

    #[test]
    fn test_easing_boundaries() {
        for easing in [Easing::Linear, Easing::Smooth, Easing::EaseIn, Easing::EaseOut] {
            assert!(
                (easing.apply(0.0)).abs() < 0.001,
                "{:?} should start at 0",
                easing
            );
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 0.001,
                "{:?} should end at 1",
                easing
            );
        }
    }

    #[test]
    fn test_easing_out_of_range_clamps() {
        assert!((Easing::Linear.apply(1.5) - 1.0).abs() < 0.001);
        assert!((Easing::Smooth.apply(-0.5)).abs() < 0.001);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(format!("{}", Language::Nepali), "ne");
        assert_eq!(format!("{}", Language::English), "en");
    }

    #[test]
    fn test_dir_unit() {
        assert_eq!(Dir::Down.unit(), Vec2::DOWN);
        assert_eq!(Dir::Right.unit(), Vec2::RIGHT);
    }
}
