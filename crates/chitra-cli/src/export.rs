//! Scene export: serialize scenes as JSON scene graphs for the renderer.
//!
//! Each exported file wraps a single scene in a storyboard envelope carrying
//! the output settings, so the renderer needs nothing but the file. The
//! digest of every export is logged for deterministic-output verification.

use std::path::Path;

use anyhow::{bail, Context, Result};

use chitra_core::digest::digest_of;
use chitra_ir::validate::validate_storyboard;
use chitra_ir::{Scene, Storyboard, StoryboardSettings};

pub fn run(
    scene_id: Option<&str>,
    dir: &Path,
    pretty: bool,
    settings: &StoryboardSettings,
) -> Result<()> {
    let scenes: Vec<Scene> = match scene_id {
        Some(id) => match chitra_scenes::by_id(id) {
            Some(scene) => vec![scene],
            None => bail!("unknown scene: {}", id),
        },
        None => chitra_scenes::catalog()
            .into_iter()
            .map(|entry| (entry.build)())
            .collect(),
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output dir {}", dir.display()))?;

    for scene in scenes {
        let path = dir.join(format!("{}.json", scene.id));
        write_scene(scene, &path, pretty, settings)?;
    }
    Ok(())
}

fn write_scene(
    scene: Scene,
    path: &Path,
    pretty: bool,
    settings: &StoryboardSettings,
) -> Result<()> {
    let scene_id = scene.id.clone();
    let mut board = Storyboard::new(settings.clone());
    board.add_scene(scene);

    if let Err(errors) = validate_storyboard(&board) {
        for error in &errors {
            tracing::error!(scene = %scene_id, "{}", error);
        }
        bail!("scene '{}' failed validation", scene_id);
    }

    let digest = digest_of(&board.scenes[0]).context("failed to digest scene")?;

    let json = if pretty {
        serde_json::to_string_pretty(&board)?
    } else {
        serde_json::to_string(&board)?
    };
    std::fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        scene = %scene_id,
        path = %path.display(),
        digest = %digest,
        "exported"
    );
    Ok(())
}
