use crate::mobject::{MobjectContent, MobjectId};
use crate::scene::Scene;
use crate::script::Action;
use crate::storyboard::Storyboard;
use chitra_core::ChitraError;

/// Validate a storyboard for structural correctness.
pub fn validate_storyboard(board: &Storyboard) -> Result<(), Vec<ChitraError>> {
    let mut errors = Vec::new();

    if board.settings.width == 0 || board.settings.height == 0 {
        errors.push(ChitraError::validation(
            "output resolution must be non-zero",
        ));
    }
    if board.settings.fps <= 0.0 {
        errors.push(ChitraError::validation("fps must be positive"));
    }
    if board.settings.frame_height <= 0.0 {
        errors.push(ChitraError::validation("frame height must be positive"));
    }
    if board.scenes.is_empty() {
        errors.push(ChitraError::validation(
            "storyboard must have at least one scene",
        ));
    }

    let mut scene_ids = std::collections::HashSet::new();
    for scene in &board.scenes {
        if !scene_ids.insert(&scene.id) {
            errors.push(ChitraError::validation(format!(
                "duplicate scene id: {}",
                scene.id
            )));
        }
        if let Err(scene_errors) = validate_scene(scene) {
            errors.extend(scene_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a single scene for structural correctness.
pub fn validate_scene(scene: &Scene) -> Result<(), Vec<ChitraError>> {
    let mut errors = Vec::new();

    if scene.duration().is_zero() {
        errors.push(ChitraError::validation(format!(
            "scene '{}' has zero total duration",
            scene.id
        )));
    }

    // Unique mobject ids
    let mut ids = std::collections::HashSet::new();
    for m in &scene.mobjects {
        if !ids.insert(&m.id) {
            errors.push(ChitraError::validation(format!(
                "duplicate mobject id '{}' in scene '{}'",
                m.id, scene.id
            )));
        }
    }

    // Placement anchors and group membership
    for m in &scene.mobjects {
        if let crate::layout::Placement::NextTo { anchor, .. } = &m.placement {
            if anchor == &m.id {
                errors.push(ChitraError::validation(format!(
                    "mobject '{}' in scene '{}' is anchored to itself",
                    m.id, scene.id
                )));
            } else if !scene.has_mobject(anchor) {
                errors.push(ChitraError::validation(format!(
                    "mobject '{}' in scene '{}' is anchored to undefined mobject '{}'",
                    m.id, scene.id, anchor
                )));
            }
        }
        if let MobjectContent::Group { members } = &m.content {
            for member in members {
                match scene.mobjects.iter().find(|o| &o.id == member) {
                    None => errors.push(ChitraError::validation(format!(
                        "group '{}' in scene '{}' references undefined mobject '{}'",
                        m.id, scene.id, member
                    ))),
                    Some(o) => {
                        if matches!(o.content, MobjectContent::Group { .. }) {
                            errors.push(ChitraError::validation(format!(
                                "group '{}' in scene '{}' nests group '{}'",
                                m.id, scene.id, member
                            )));
                        }
                    }
                }
            }
        }
    }

    // Script targets and zero-duration rules
    for (i, step) in scene.script.iter().enumerate() {
        for action in &step.actions {
            if !scene.has_mobject(action.target()) {
                errors.push(ChitraError::validation(format!(
                    "step {} of scene '{}' targets undefined mobject '{}'",
                    i,
                    scene.id,
                    action.target()
                )));
            }
            if step.duration.is_zero() && !action.is_instant() {
                errors.push(ChitraError::validation(format!(
                    "step {} of scene '{}' animates '{}' over zero duration",
                    i,
                    scene.id,
                    action.target()
                )));
            }
        }
    }

    // Caption discipline: at most one caption on screen at a time
    check_caption_overlap(scene, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// On-screen interval of each caption, by step boundaries: a caption is on
/// screen from the start of the step that shows it until the end of the step
/// that fades it (or the scene end). Two captions of one scene must not
/// overlap.
fn check_caption_overlap(scene: &Scene, errors: &mut Vec<ChitraError>) {
    let captions: Vec<&MobjectId> = scene
        .mobjects
        .iter()
        .filter(|m| matches!(m.content, MobjectContent::Caption { .. }))
        .map(|m| &m.id)
        .collect();
    if captions.len() < 2 {
        return;
    }

    let intervals: Vec<(&MobjectId, f64, f64)> = captions
        .iter()
        .filter_map(|id| caption_interval(scene, id).map(|(s, e)| (*id, s, e)))
        .collect();

    for (i, (id_a, start_a, end_a)) in intervals.iter().enumerate() {
        for (id_b, start_b, end_b) in intervals.iter().skip(i + 1) {
            if start_a < end_b && start_b < end_a {
                errors.push(ChitraError::validation(format!(
                    "captions '{}' and '{}' in scene '{}' overlap on screen",
                    id_a, id_b, scene.id
                )));
            }
        }
    }
}

fn caption_interval(scene: &Scene, id: &MobjectId) -> Option<(f64, f64)> {
    let mut cursor = 0.0;
    let mut shown_at: Option<f64> = None;
    let mut hidden_at: Option<f64> = None;

    for step in &scene.script {
        let end = cursor + step.duration.as_seconds();
        for action in &step.actions {
            let touches = touches_mobject(scene, action.target(), id);
            match action {
                Action::Show { .. } if touches && shown_at.is_none() => {
                    shown_at = Some(cursor);
                }
                Action::FadeOut { .. } if touches && shown_at.is_some() && hidden_at.is_none() => {
                    hidden_at = Some(end);
                }
                _ => {}
            }
        }
        cursor = end;
    }

    shown_at.map(|s| (s, hidden_at.unwrap_or(cursor)))
}

/// Whether an action target (possibly a group) touches the given mobject.
fn touches_mobject(scene: &Scene, target: &MobjectId, id: &MobjectId) -> bool {
    if target == id {
        return true;
    }
    scene
        .mobjects
        .iter()
        .find(|m| &m.id == target)
        .map(|m| match &m.content {
            MobjectContent::Group { members } => members.contains(id),
            _ => false,
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mobject::Mobject;
    use crate::script::Step;
    use crate::storyboard::StoryboardSettings;
    use chitra_core::{Color, Language};

    fn caption(id: &str, text: &str) -> Mobject {
        Mobject::new(
            id,
            MobjectContent::Caption {
                text: text.into(),
                language: Language::Nepali,
                font_size: 28.0,
            },
        )
    }

    fn dot(id: &str) -> Mobject {
        Mobject::new(
            id,
            MobjectContent::Dot {
                radius: 0.2,
                color: Color::BLUE,
            },
        )
    }

    #[test]
    fn test_validate_empty_storyboard() {
        let board = Storyboard::new(StoryboardSettings::hd_30());
        assert!(validate_storyboard(&board).is_err());
    }

    #[test]
    fn test_validate_valid_scene() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(dot("ball"));
        scene.script.push(Step::play(vec![Action::draw("ball")], 1.0));
        assert!(validate_scene(&scene).is_ok());
    }

    #[test]
    fn test_validate_duplicate_mobject_ids() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(dot("ball"));
        scene.mobjects.push(dot("ball"));
        scene.script.push(Step::wait(1.0));
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("duplicate mobject id")));
    }

    #[test]
    fn test_validate_undefined_target() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(dot("ball"));
        scene.script.push(Step::play(vec![Action::draw("wall")], 1.0));
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("undefined mobject 'wall'")));
    }

    #[test]
    fn test_validate_zero_duration_animation() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(dot("ball"));
        scene.script.push(Step::instant(vec![Action::draw("ball")]));
        scene.script.push(Step::wait(1.0));
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("zero duration")));
    }

    #[test]
    fn test_validate_zero_duration_pop_is_fine() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(dot("ball"));
        scene.script.push(Step::instant(vec![Action::pop("ball")]));
        scene.script.push(Step::wait(1.0));
        assert!(validate_scene(&scene).is_ok());
    }

    #[test]
    fn test_validate_caption_overlap() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(caption("c1", "पहिलो"));
        scene.mobjects.push(caption("c2", "दोस्रो"));
        // c2 is written while c1 is still on screen
        scene.script.push(Step::play(vec![Action::write("c1")], 2.0));
        scene.script.push(Step::play(vec![Action::write("c2")], 2.0));
        scene.script.push(Step::play(vec![Action::fade_out("c1")], 1.0));
        scene.script.push(Step::play(vec![Action::fade_out("c2")], 1.0));
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("overlap")));
    }

    #[test]
    fn test_validate_sequential_captions_ok() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(caption("c1", "पहिलो"));
        scene.mobjects.push(caption("c2", "दोस्रो"));
        scene.script.push(Step::play(vec![Action::write("c1")], 2.0));
        scene.script.push(Step::play(vec![Action::fade_out("c1")], 1.0));
        scene.script.push(Step::play(vec![Action::write("c2")], 2.0));
        assert!(validate_scene(&scene).is_ok());
    }

    #[test]
    fn test_validate_group_fade_counts_as_caption_exit() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(caption("c1", "पहिलो"));
        scene.mobjects.push(caption("c2", "दोस्रो"));
        scene.mobjects.push(Mobject::new(
            "everything",
            MobjectContent::Group {
                members: vec!["c1".into()],
            },
        ));
        scene.script.push(Step::play(vec![Action::write("c1")], 2.0));
        scene
            .script
            .push(Step::play(vec![Action::fade_out("everything")], 1.0));
        scene.script.push(Step::play(vec![Action::write("c2")], 2.0));
        assert!(validate_scene(&scene).is_ok());
    }

    #[test]
    fn test_validate_nested_group() {
        let mut scene = Scene::new("s", "S");
        scene.mobjects.push(dot("a"));
        scene.mobjects.push(Mobject::new(
            "inner",
            MobjectContent::Group {
                members: vec!["a".into()],
            },
        ));
        scene.mobjects.push(Mobject::new(
            "outer",
            MobjectContent::Group {
                members: vec!["inner".into()],
            },
        ));
        scene.script.push(Step::wait(1.0));
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("nests group")));
    }

    #[test]
    fn test_validate_self_anchor() {
        let mut scene = Scene::new("s", "S");
        let mut m = dot("ball");
        m.placement = crate::layout::Placement::NextTo {
            anchor: "ball".into(),
            direction: chitra_core::Dir::Up,
            gap: 0.1,
        };
        scene.mobjects.push(m);
        scene.script.push(Step::wait(1.0));
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("anchored to itself")));
    }
}
