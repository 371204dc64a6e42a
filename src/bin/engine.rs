use std::process::ExitCode;

use anyhow::{Context, Result};
use cg_scene::cli::{EngineCli, SummaryFormat};
use cg_scene::engine::{Engine, HeadlessRenderer};
use cg_scene::scene::{load_scene, SceneSummary};
use clap::Parser;

fn print_text(summary: &SceneSummary) {
    let cam = &summary.camera;
    println!("Viewport: {}x{}", summary.viewport.width, summary.viewport.height);
    println!(
        "Camera: position {} look-at {} up {} (fov {}, near {}, far {})",
        cam.position, cam.look_at, cam.up, cam.fov, cam.near, cam.far
    );
    for (i, model) in summary.models.iter().enumerate() {
        println!("  Model {}: {} vertices, {} triangles", i, model.vertices, model.triangles);
    }
    println!("Total triangles: {}", summary.total_triangles);
}

fn run(cli: &EngineCli) -> Result<()> {
    let scene = load_scene(&cli.scene)
        .with_context(|| format!("Failed to load scene {:?}", cli.scene))?;

    let summary = scene.summary();
    match cli.summary {
        SummaryFormat::Text => print_text(&summary),
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    let mut engine = Engine::new(scene, HeadlessRenderer::default());
    for _ in 0..cli.frames {
        engine
            .render_frame()
            .map_err(|e| anyhow::anyhow!("Render error: {}", e))?;
    }
    log::info!("rendered {} frames", engine.frames_rendered());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match EngineCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
