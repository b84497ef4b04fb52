//! Timeline inspection: evaluate a scene at a timestamp and print the state
//! of every mobject that is on screen.

use anyhow::{bail, Result};

use chitra_core::Timestamp;
use chitra_ir::timeline::SceneState;
use chitra_ir::StoryboardSettings;

pub fn run(scene_id: &str, time: Timestamp, settings: &StoryboardSettings) -> Result<()> {
    let Some(scene) = chitra_scenes::by_id(scene_id) else {
        bail!("unknown scene: {}", scene_id);
    };

    let duration = scene.duration();
    if time.as_seconds() > duration.as_seconds() {
        tracing::warn!(
            "t={} is past the end of '{}' ({}); showing the final state",
            time,
            scene_id,
            duration
        );
    }

    let frame = settings.frame();
    let state = SceneState::at(&scene, &frame, time);

    println!("{} @ {} (of {})", scene_id, time, duration);
    println!(
        "{:<16} {:<14} {:>8} {:>8} {:>8} {:>8}",
        "MOBJECT", "KIND", "X", "Y", "SCALE", "OPACITY"
    );
    for (id, mobject_state) in state.iter() {
        if !mobject_state.visible {
            continue;
        }
        let kind = scene
            .get_mobject(&id.0)
            .map(|m| m.content.kind())
            .unwrap_or("?");
        println!(
            "{:<16} {:<14} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            id.0,
            kind,
            mobject_state.position.x,
            mobject_state.position.y,
            mobject_state.scale.x,
            mobject_state.opacity,
        );
    }

    match state.visible_caption(&scene) {
        Some((id, text)) => println!("caption [{}]: {}", id, text),
        None => println!("caption: none"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_known_scene() {
        run(
            "newton-third-law",
            Timestamp::from_seconds(2.0),
            &StoryboardSettings::hd_30(),
        )
        .unwrap();
    }

    #[test]
    fn test_inspect_unknown_scene() {
        let result = run(
            "no-such-scene",
            Timestamp::from_seconds(0.0),
            &StoryboardSettings::hd_30(),
        );
        assert!(result.is_err());
    }
}
