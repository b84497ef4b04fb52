mod export;
mod inspect;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use chitra_core::{ChitraConfig, Timestamp};
use chitra_ir::validate::validate_scene;
use chitra_ir::StoryboardSettings;

#[derive(Parser)]
#[command(
    name = "chitra",
    version,
    about = "Chitra — educational animation storyboards",
    long_about = "Chitra is a library of educational animation storyboards in Nepali and English.\nScenes are described as deterministic scene graphs and exported as JSON for the\nexternal vector renderer, which owns rasterization and video encoding."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the scene catalog
    List,

    /// Validate one scene, or the whole catalog
    Check {
        /// Scene id to check (all scenes if omitted)
        #[arg()]
        scene: Option<String>,
    },

    /// Export scenes as JSON scene graphs for the renderer
    Export {
        /// Scene id to export (all scenes if omitted)
        #[arg()]
        scene: Option<String>,

        /// Output directory (default: the configured export dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Evaluate a scene's timeline at a timestamp
    Inspect {
        /// Scene id to inspect
        #[arg()]
        scene: String,

        /// Timestamp in seconds
        #[arg(long, short)]
        time: f64,
    },

    /// Display version and catalog totals
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ChitraConfig::load_or_default(&std::env::current_dir()?)
        .context("failed to load chitra.toml")?;
    let settings =
        StoryboardSettings::from_config(&config).context("invalid chitra.toml settings")?;

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Check { scene } => cmd_check(scene),
        Commands::Export {
            scene,
            output,
            pretty,
        } => {
            let dir = output.unwrap_or_else(|| PathBuf::from(&config.export.dir));
            export::run(scene.as_deref(), &dir, pretty, &settings)
        }
        Commands::Inspect { scene, time } => {
            inspect::run(&scene, Timestamp::from_seconds(time), &settings)
        }
        Commands::Info => cmd_info(&settings),
    }
}

fn cmd_list() -> Result<()> {
    println!(
        "{:<22} {:<32} {:>8} {:>6} {:>9}",
        "ID", "TITLE", "MOBJECTS", "STEPS", "DURATION"
    );
    for entry in chitra_scenes::catalog() {
        let scene = (entry.build)();
        println!(
            "{:<22} {:<32} {:>8} {:>6} {:>9}",
            entry.id,
            entry.title,
            scene.mobjects.len(),
            scene.script.len(),
            format!("{}", scene.duration()),
        );
    }
    Ok(())
}

fn cmd_check(scene_id: Option<String>) -> Result<()> {
    let entries: Vec<_> = match &scene_id {
        Some(id) => {
            let entries: Vec<_> = chitra_scenes::catalog()
                .into_iter()
                .filter(|e| e.id == id)
                .collect();
            if entries.is_empty() {
                bail!("unknown scene: {}", id);
            }
            entries
        }
        None => chitra_scenes::catalog(),
    };

    let mut failed = false;
    for entry in entries {
        let scene = (entry.build)();
        warn_external_assets(&scene);
        match validate_scene(&scene) {
            Ok(()) => tracing::info!(scene = entry.id, "ok"),
            Err(errors) => {
                failed = true;
                for error in errors {
                    tracing::error!(scene = entry.id, "{}", error);
                }
            }
        }
    }

    if failed {
        bail!("validation failed");
    }
    Ok(())
}

/// Image mobjects reference assets by name only; whether the file exists is
/// the renderer's concern, but it is worth surfacing at check time.
fn warn_external_assets(scene: &chitra_ir::Scene) {
    for m in &scene.mobjects {
        if let chitra_ir::MobjectContent::Image { asset, .. } = &m.content {
            tracing::warn!(
                scene = %scene.id,
                mobject = %m.id,
                asset = %asset,
                "references an external image asset; existence is checked by the renderer"
            );
        }
    }
}

fn cmd_info(settings: &StoryboardSettings) -> Result<()> {
    let board = chitra_scenes::storyboard(settings.clone());
    println!("chitra {}", env!("CARGO_PKG_VERSION"));
    println!(
        "output: {}x{} @ {} fps, frame height {} units",
        settings.width, settings.height, settings.fps, settings.frame_height
    );
    println!(
        "catalog: {} scenes, {} total ({} frames)",
        board.scenes.len(),
        board.total_duration(),
        board.total_frames(),
    );
    Ok(())
}
