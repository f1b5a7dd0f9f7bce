use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use winding::api::{
    classify_points_with, draw_scene, read_points, read_polygons, write_points, write_polygons,
    write_results, Decision, SceneCfg, SceneReplay,
};

mod provenance;

#[derive(Parser)]
#[command(name = "winding-cli")]
#[command(about = "Classify points against rectangles by winding number")]
struct Cmd {
    /// Log every per-point decision (DEBUG level)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify points and write one result code per point
    Run {
        #[arg(long, default_value = "Input-Files/Ray-Definition.txt")]
        points: PathBuf,
        #[arg(long, default_value = "Input-Files/Space-Definition.txt")]
        polygons: PathBuf,
        #[arg(long, default_value = "Output-File/Results.txt")]
        out: PathBuf,
    },
    /// Write a random scene in the input format
    Gen {
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        polygons: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = SceneCfg::default().n_points)]
        n_points: usize,
        #[arg(long, default_value_t = SceneCfg::default().n_polygons)]
        n_polygons: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Counts recorded in the log and the provenance sidecar.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct RunSummary {
    points: usize,
    polygons: usize,
    inside: usize,
    outside: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            points,
            polygons,
            out,
        } => run(&points, &polygons, &out).map(|_| ()),
        Action::Gen {
            points,
            polygons,
            seed,
            n_points,
            n_polygons,
        } => gen_scene(&points, &polygons, seed, n_points, n_polygons),
        Action::Report => report(),
    }
}

fn log_decision(d: Decision<'_>) {
    match d.matched {
        Some((j, poly)) => tracing::debug!(
            line = d.index + 1,
            point = %d.point,
            polygon = j,
            rect = %poly,
            "point in polygon"
        ),
        None => tracing::debug!(line = d.index + 1, point = %d.point, "point not in polygon"),
    }
}

fn run(points_path: &Path, polygons_path: &Path, out: &Path) -> Result<RunSummary> {
    tracing::info!(
        points = %points_path.display(),
        polygons = %polygons_path.display(),
        out = %out.display(),
        "run"
    );
    let points = read_points(points_path)
        .with_context(|| format!("loading points from {}", points_path.display()))?;
    let polygons = read_polygons(polygons_path)
        .with_context(|| format!("loading polygons from {}", polygons_path.display()))?;

    let results = classify_points_with(&points, &polygons, log_decision);
    let inside = results.iter().filter(|r| r.is_inside()).count();
    let summary = RunSummary {
        points: points.len(),
        polygons: polygons.len(),
        inside,
        outside: results.len() - inside,
    };

    write_results(out, &results)
        .with_context(|| format!("writing results to {}", out.display()))?;
    tracing::info!(
        points = summary.points,
        polygons = summary.polygons,
        inside = summary.inside,
        outside = summary.outside,
        "results written"
    );

    let inputs = provenance::Inputs::new(points_path, polygons_path);
    let prov = provenance::write_sidecar(out, &inputs, &summary)?;
    tracing::info!(provenance = %prov.display(), "provenance");
    Ok(summary)
}

fn gen_scene(
    points_path: &Path,
    polygons_path: &Path,
    seed: u64,
    n_points: usize,
    n_polygons: usize,
) -> Result<()> {
    tracing::info!(seed, n_points, n_polygons, "gen");
    let cfg = SceneCfg {
        n_points,
        n_polygons,
        ..SceneCfg::default()
    };
    let scene = draw_scene(cfg, SceneReplay::new(seed, 0));
    write_points(points_path, &scene.points)
        .with_context(|| format!("writing points to {}", points_path.display()))?;
    write_polygons(polygons_path, &scene.polygons)
        .with_context(|| format!("writing polygons to {}", polygons_path.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": winding::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
