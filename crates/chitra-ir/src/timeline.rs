//! Deterministic timeline evaluation.
//!
//! A scene is a pure function of its literals, so the state of every mobject
//! at any timestamp can be computed by replaying the script: completed steps
//! apply fully, the in-flight step applies partially through its easing
//! curve, and later steps not at all. A step that has not strictly started
//! contributes nothing, which gives wait-checkpoints exact semantics.

use std::f64::consts::TAU;

use crate::layout::{resolve_positions, Frame};
use crate::mobject::{MobjectContent, MobjectId};
use crate::scene::Scene;
use crate::script::{Action, ShowStyle};
use chitra_core::{Color, Timestamp, Vec2};

/// The evaluated state of one mobject at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct MobjectState {
    /// Whether the mobject has been shown and not yet faded out.
    pub visible: bool,
    /// Center position in scene units.
    pub position: Vec2,
    /// Current scale factors.
    pub scale: Vec2,
    /// Current opacity.
    pub opacity: f64,
    /// Effective color after recolor animations, if the content has one.
    pub color: Option<Color>,
    /// Draw-on progress for `Draw`/`Write` reveals (1.0 once complete).
    pub progress: f64,
}

/// The evaluated state of a whole scene at a point in time.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub time: Timestamp,
    states: Vec<(MobjectId, MobjectState)>,
}

impl SceneState {
    /// Evaluate the scene at time `t` against the given frame.
    pub fn at(scene: &Scene, frame: &Frame, t: Timestamp) -> SceneState {
        let positions = resolve_positions(frame, &scene.mobjects);
        let base_opacity: Vec<f64> = scene
            .mobjects
            .iter()
            .map(|m| m.transform.opacity)
            .collect();

        let mut states: Vec<MobjectState> = scene
            .mobjects
            .iter()
            .zip(positions.iter())
            .map(|(m, (_, pos))| MobjectState {
                visible: false,
                position: *pos,
                scale: m.transform.scale,
                opacity: m.transform.opacity,
                color: m.content.primary_color(),
                progress: 0.0,
            })
            .collect();

        let t_secs = t.as_seconds();
        let mut cursor = 0.0;
        for step in &scene.script {
            let end = cursor + step.duration.as_seconds();
            if t_secs >= end {
                for action in &step.actions {
                    for idx in expand_target(scene, action.target()) {
                        apply(action, &mut states[idx], base_opacity[idx], 1.0);
                    }
                }
                cursor = end;
                continue;
            }
            // In-flight step: apply partially, but only once it has strictly
            // started. At an exact step boundary the next step contributes
            // nothing yet.
            if t_secs > cursor {
                let local = (t_secs - cursor) / step.duration.as_seconds();
                let p = step.easing.apply(local);
                for action in &step.actions {
                    for idx in expand_target(scene, action.target()) {
                        apply(action, &mut states[idx], base_opacity[idx], p);
                    }
                }
            }
            break;
        }

        SceneState {
            time: t,
            states: scene
                .mobjects
                .iter()
                .map(|m| m.id.clone())
                .zip(states)
                .collect(),
        }
    }

    /// Get the state of a mobject by ID.
    pub fn get(&self, id: &str) -> Option<&MobjectState> {
        self.states
            .iter()
            .find(|(mid, _)| mid.0 == id)
            .map(|(_, s)| s)
    }

    /// Iterate over all mobject states in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&MobjectId, &MobjectState)> {
        self.states.iter().map(|(id, s)| (id, s))
    }

    /// IDs of mobjects currently on screen.
    pub fn visible_ids(&self) -> Vec<&MobjectId> {
        self.states
            .iter()
            .filter(|(_, s)| s.visible && s.opacity > 1e-3)
            .map(|(id, _)| id)
            .collect()
    }

    /// The caption currently on screen, if any. A caption counts as visible
    /// once its reveal has begun and until it has fully faded.
    pub fn visible_caption<'a>(&self, scene: &'a Scene) -> Option<(&'a MobjectId, &'a str)> {
        scene.mobjects.iter().find_map(|m| {
            let MobjectContent::Caption { text, .. } = &m.content else {
                return None;
            };
            let state = self.get(&m.id.0)?;
            if state.visible && state.opacity > 1e-3 && state.progress > 0.0 {
                Some((&m.id, text.as_str()))
            } else {
                None
            }
        })
    }
}

/// Indices of the mobjects an action actually touches: the members when the
/// target is a group, otherwise the target itself.
fn expand_target(scene: &Scene, target: &MobjectId) -> Vec<usize> {
    let Some(index) = scene.mobjects.iter().position(|m| &m.id == target) else {
        return Vec::new();
    };
    if let MobjectContent::Group { members } = &scene.mobjects[index].content {
        members
            .iter()
            .filter_map(|mid| scene.mobjects.iter().position(|m| &m.id == mid))
            .collect()
    } else {
        vec![index]
    }
}

/// Apply an action to a state at eased progress `p` (1.0 = fully applied).
fn apply(action: &Action, state: &mut MobjectState, base_opacity: f64, p: f64) {
    match action {
        Action::Show { style, .. } => {
            state.visible = true;
            match style {
                ShowStyle::Draw | ShowStyle::Write => {
                    state.progress = p;
                    state.opacity = base_opacity;
                }
                ShowStyle::FadeIn => {
                    state.progress = 1.0;
                    state.opacity = base_opacity * p;
                }
                ShowStyle::Pop => {
                    state.progress = 1.0;
                    state.opacity = base_opacity;
                }
            }
        }
        Action::FadeOut { .. } => {
            state.opacity *= 1.0 - p;
            if p >= 1.0 {
                state.visible = false;
                state.opacity = 0.0;
            }
        }
        Action::ShiftBy { delta, .. } => {
            state.position = state.position + *delta * p;
        }
        Action::MoveTo { to, .. } => {
            state.position = state.position.lerp(to, p);
        }
        Action::Scale { factor, .. } => {
            let f = 1.0 + (factor - 1.0) * p;
            state.scale = state.scale * f;
        }
        Action::SetOpacity { value, .. } => {
            state.opacity += (value - state.opacity) * p;
        }
        Action::SetColor { color, .. } => {
            state.color = Some(match state.color {
                Some(current) => current.lerp(color, p as f32),
                None => *color,
            });
        }
        Action::FollowPath {
            center,
            revolutions,
            ..
        } => {
            let v = state.position - *center;
            let angle = TAU * revolutions * p;
            let (sin, cos) = angle.sin_cos();
            state.position = *center + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos);
        }
        Action::Stretch { factor, about, .. } => {
            let f = 1.0 + (factor - 1.0) * p;
            state.scale = Vec2::new(state.scale.x * f, state.scale.y);
            state.position = Vec2::new(
                about.x + (state.position.x - about.x) * f,
                state.position.y,
            );
        }
    }
}
