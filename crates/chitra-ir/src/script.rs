use serde::{Deserialize, Serialize};

use crate::mobject::MobjectId;
use chitra_core::{Color, Duration, Easing, Vec2};

/// How a mobject is brought on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowStyle {
    /// Stroke-by-stroke draw-on (Create).
    Draw,
    /// Handwriting-style reveal, used for text and formulas.
    Write,
    /// Opacity ramp from zero.
    FadeIn,
    /// Instant add, no animation. Only legal in zero-duration steps.
    Pop,
}

/// One animation directive, applied to a single mobject over the enclosing
/// step's duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Show {
        target: MobjectId,
        style: ShowStyle,
    },
    FadeOut {
        target: MobjectId,
    },
    /// Translate by a delta in scene units.
    ShiftBy {
        target: MobjectId,
        delta: Vec2,
    },
    /// Move the mobject center to an absolute point.
    MoveTo {
        target: MobjectId,
        to: Vec2,
    },
    /// Multiply the current scale.
    Scale {
        target: MobjectId,
        factor: f64,
    },
    SetOpacity {
        target: MobjectId,
        value: f64,
    },
    SetColor {
        target: MobjectId,
        color: Color,
    },
    /// Circular path around `center`: the mobject keeps its current radius
    /// vector and sweeps `revolutions` full turns.
    FollowPath {
        target: MobjectId,
        center: Vec2,
        revolutions: f64,
    },
    /// Horizontal stretch about a fixed point.
    Stretch {
        target: MobjectId,
        factor: f64,
        about: Vec2,
    },
}

impl Action {
    pub fn draw(target: impl Into<MobjectId>) -> Self {
        Action::Show {
            target: target.into(),
            style: ShowStyle::Draw,
        }
    }

    pub fn write(target: impl Into<MobjectId>) -> Self {
        Action::Show {
            target: target.into(),
            style: ShowStyle::Write,
        }
    }

    pub fn fade_in(target: impl Into<MobjectId>) -> Self {
        Action::Show {
            target: target.into(),
            style: ShowStyle::FadeIn,
        }
    }

    pub fn pop(target: impl Into<MobjectId>) -> Self {
        Action::Show {
            target: target.into(),
            style: ShowStyle::Pop,
        }
    }

    pub fn fade_out(target: impl Into<MobjectId>) -> Self {
        Action::FadeOut {
            target: target.into(),
        }
    }

    pub fn shift(target: impl Into<MobjectId>, delta: Vec2) -> Self {
        Action::ShiftBy {
            target: target.into(),
            delta,
        }
    }

    pub fn move_to(target: impl Into<MobjectId>, to: Vec2) -> Self {
        Action::MoveTo {
            target: target.into(),
            to,
        }
    }

    pub fn scale(target: impl Into<MobjectId>, factor: f64) -> Self {
        Action::Scale {
            target: target.into(),
            factor,
        }
    }

    pub fn set_opacity(target: impl Into<MobjectId>, value: f64) -> Self {
        Action::SetOpacity {
            target: target.into(),
            value,
        }
    }

    pub fn set_color(target: impl Into<MobjectId>, color: Color) -> Self {
        Action::SetColor {
            target: target.into(),
            color,
        }
    }

    pub fn follow_path(target: impl Into<MobjectId>, center: Vec2, revolutions: f64) -> Self {
        Action::FollowPath {
            target: target.into(),
            center,
            revolutions,
        }
    }

    pub fn stretch(target: impl Into<MobjectId>, factor: f64, about: Vec2) -> Self {
        Action::Stretch {
            target: target.into(),
            factor,
            about,
        }
    }

    /// The mobject this action animates.
    pub fn target(&self) -> &MobjectId {
        match self {
            Action::Show { target, .. }
            | Action::FadeOut { target }
            | Action::ShiftBy { target, .. }
            | Action::MoveTo { target, .. }
            | Action::Scale { target, .. }
            | Action::SetOpacity { target, .. }
            | Action::SetColor { target, .. }
            | Action::FollowPath { target, .. }
            | Action::Stretch { target, .. } => target,
        }
    }

    /// True when the action may appear in a zero-duration step. Property
    /// sets and jumps apply instantly; reveals, fades, and paths are
    /// inherently temporal and need a duration.
    pub fn is_instant(&self) -> bool {
        match self {
            Action::Show { style, .. } => *style == ShowStyle::Pop,
            Action::ShiftBy { .. }
            | Action::MoveTo { .. }
            | Action::Scale { .. }
            | Action::SetOpacity { .. }
            | Action::SetColor { .. }
            | Action::Stretch { .. } => true,
            Action::FadeOut { .. } | Action::FollowPath { .. } => false,
        }
    }
}

/// One step of a scene script: a set of actions that run in parallel over
/// the step's duration. A step with no actions is a wait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub actions: Vec<Action>,
    pub duration: Duration,
    pub easing: Easing,
}

impl Step {
    /// A play step with the default smooth easing.
    pub fn play(actions: Vec<Action>, seconds: f64) -> Self {
        Self {
            actions,
            duration: Duration::from_seconds(seconds),
            easing: Easing::Smooth,
        }
    }

    /// A play step with an explicit easing.
    pub fn play_with(actions: Vec<Action>, seconds: f64, easing: Easing) -> Self {
        Self {
            actions,
            duration: Duration::from_seconds(seconds),
            easing,
        }
    }

    /// A wait step.
    pub fn wait(seconds: f64) -> Self {
        Self {
            actions: Vec::new(),
            duration: Duration::from_seconds(seconds),
            easing: Easing::Linear,
        }
    }

    /// An instant step: zero duration, actions applied at once.
    pub fn instant(actions: Vec<Action>) -> Self {
        Self {
            actions,
            duration: Duration::zero(),
            easing: Easing::Linear,
        }
    }

    /// True when this step only passes time.
    pub fn is_wait(&self) -> bool {
        self.actions.is_empty()
    }
}
