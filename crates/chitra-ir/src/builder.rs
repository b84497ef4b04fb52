use crate::mobject::Mobject;
use crate::scene::Scene;
use crate::script::{Action, Step};
use chitra_core::{Color, Easing, Vec2};

/// Fluent builder for scenes. Scene modules read like the storyboards they
/// transcribe: declare mobjects, then issue the timed script.
///
/// ```
/// use chitra_ir::builder::SceneBuilder;
/// use chitra_ir::mobject::{Mobject, MobjectContent};
/// use chitra_core::Color;
///
/// let scene = SceneBuilder::new("demo", "Demo")
///     .mobject(Mobject::new(
///         "ball",
///         MobjectContent::Dot { radius: 0.2, color: Color::BLUE },
///     ))
///     .draw(&["ball"], 1.0)
///     .wait(1.0)
///     .fade_out(&["ball"], 1.0)
///     .build();
/// assert_eq!(scene.script.len(), 3);
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(id, title),
        }
    }

    /// Declare a mobject.
    pub fn mobject(mut self, mobject: Mobject) -> Self {
        self.scene.mobjects.push(mobject);
        self
    }

    /// Play an arbitrary set of parallel actions with the default easing.
    pub fn play(mut self, actions: Vec<Action>, seconds: f64) -> Self {
        self.scene.script.push(Step::play(actions, seconds));
        self
    }

    /// Play with an explicit easing.
    pub fn play_with(mut self, actions: Vec<Action>, seconds: f64, easing: Easing) -> Self {
        self.scene
            .script
            .push(Step::play_with(actions, seconds, easing));
        self
    }

    /// Wait for the given time.
    pub fn wait(mut self, seconds: f64) -> Self {
        self.scene.script.push(Step::wait(seconds));
        self
    }

    /// Apply property sets or jumps instantly, without animation.
    pub fn instant(mut self, actions: Vec<Action>) -> Self {
        self.scene.script.push(Step::instant(actions));
        self
    }

    /// Add mobjects instantly, without animation.
    pub fn pop(mut self, targets: &[&str]) -> Self {
        self.scene
            .script
            .push(Step::instant(targets.iter().map(|t| Action::pop(*t)).collect()));
        self
    }

    /// Draw-on several mobjects in parallel.
    pub fn draw(self, targets: &[&str], seconds: f64) -> Self {
        let actions = targets.iter().map(|t| Action::draw(*t)).collect();
        self.play(actions, seconds)
    }

    /// Write one or more text mobjects.
    pub fn write(self, targets: &[&str], seconds: f64) -> Self {
        let actions = targets.iter().map(|t| Action::write(*t)).collect();
        self.play(actions, seconds)
    }

    /// Fade in several mobjects in parallel.
    pub fn fade_in(self, targets: &[&str], seconds: f64) -> Self {
        let actions = targets.iter().map(|t| Action::fade_in(*t)).collect();
        self.play(actions, seconds)
    }

    /// Fade out several mobjects in parallel.
    pub fn fade_out(self, targets: &[&str], seconds: f64) -> Self {
        let actions = targets.iter().map(|t| Action::fade_out(*t)).collect();
        self.play(actions, seconds)
    }

    /// Shift one mobject by a delta.
    pub fn shift(self, target: &str, delta: Vec2, seconds: f64) -> Self {
        self.play(vec![Action::shift(target, delta)], seconds)
    }

    /// Move one mobject to an absolute point.
    pub fn move_to(self, target: &str, to: Vec2, seconds: f64) -> Self {
        self.play(vec![Action::move_to(target, to)], seconds)
    }

    /// Scale one mobject by a factor.
    pub fn scale(self, target: &str, factor: f64, seconds: f64) -> Self {
        self.play(vec![Action::scale(target, factor)], seconds)
    }

    /// Animate a mobject's opacity.
    pub fn set_opacity(self, target: &str, value: f64, seconds: f64) -> Self {
        self.play(vec![Action::set_opacity(target, value)], seconds)
    }

    /// Animate a mobject's color.
    pub fn set_color(self, target: &str, color: Color, seconds: f64) -> Self {
        self.play(vec![Action::set_color(target, color)], seconds)
    }

    /// Build and return the scene.
    pub fn build(self) -> Scene {
        self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mobject::MobjectContent;
    use crate::script::ShowStyle;

    #[test]
    fn test_builder_script_order() {
        let scene = SceneBuilder::new("demo", "Demo")
            .mobject(Mobject::new(
                "ball",
                MobjectContent::Dot {
                    radius: 0.2,
                    color: Color::BLUE,
                },
            ))
            .draw(&["ball"], 1.0)
            .wait(0.5)
            .shift("ball", Vec2::RIGHT * 2.0, 2.0)
            .fade_out(&["ball"], 1.0)
            .build();

        assert_eq!(scene.mobjects.len(), 1);
        assert_eq!(scene.script.len(), 4);
        assert!((scene.duration().as_seconds() - 4.5).abs() < 0.001);
        assert!(scene.script[1].is_wait());
    }

    #[test]
    fn test_builder_pop_is_instant() {
        let scene = SceneBuilder::new("demo", "Demo")
            .mobject(Mobject::new(
                "ball",
                MobjectContent::Dot {
                    radius: 0.2,
                    color: Color::BLUE,
                },
            ))
            .pop(&["ball"])
            .wait(1.0)
            .build();

        assert!(scene.script[0].duration.is_zero());
        assert!(matches!(
            scene.script[0].actions[0],
            Action::Show {
                style: ShowStyle::Pop,
                ..
            }
        ));
    }

    #[test]
    fn test_builder_parallel_draw() {
        let scene = SceneBuilder::new("demo", "Demo")
            .mobject(Mobject::new(
                "a",
                MobjectContent::Dot {
                    radius: 0.2,
                    color: Color::BLUE,
                },
            ))
            .mobject(Mobject::new(
                "b",
                MobjectContent::Dot {
                    radius: 0.2,
                    color: Color::RED,
                },
            ))
            .draw(&["a", "b"], 1.0)
            .build();

        assert_eq!(scene.script[0].actions.len(), 2);
    }
}
