//! Hysteresis CLI — headless inspection of the control.
//!
//! Commands:
//! - `layout` — print the computed geometry and ticks as JSON
//! - `drag` — replay a pointer gesture and print the reported range
//! - `check` — validate a configuration file and list what gets adjusted

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use hysteresis_core::layout::{FontSizeMetrics, Tick};
use hysteresis_core::{ControlConfig, DragState, Geometry, HysteresisControl, Point, Range, Viewport};

/// Canvas width used when neither the config nor `--width` sets one.
const DEFAULT_WIDTH: f64 = 300.0;

#[derive(Parser)]
#[command(name = "hysteresis", about = "Hysteresis control — layout and gesture inspection")]
struct Cli {
    /// Log filter when RUST_LOG is unset (logs go to stderr).
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print geometry, ticks and knob positions as JSON.
    Layout {
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Replay a press at --from, moves through each --to, then release.
    Drag {
        #[command(flatten)]
        canvas: CanvasArgs,

        /// Press position, as X,Y in canvas units.
        #[arg(long, value_parser = parse_point)]
        from: Point,

        /// Move positions, as X,Y in canvas units (repeatable).
        #[arg(long, value_parser = parse_point)]
        to: Vec<Point>,
    },
    /// Validate a configuration file.
    Check {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,
    },
}

#[derive(clap::Args)]
struct CanvasArgs {
    /// Path to a TOML config file. Defaults apply without one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width; the config's style width wins when set.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height; overrides the config's style height.
    #[arg(long)]
    height: Option<f64>,
}

impl CanvasArgs {
    fn load(&self) -> Result<(ControlConfig, Viewport)> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => ControlConfig::default(),
        }
        .normalized();
        let mut viewport = Viewport::for_config(&config, self.width.unwrap_or(DEFAULT_WIDTH));
        if let Some(height) = self.height {
            viewport = Viewport::new(viewport.width, height);
        }
        Ok((config, viewport))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Layout { canvas } => run_layout(&canvas),
        Commands::Drag { canvas, from, to } => run_drag(&canvas, from, &to),
        Commands::Check { config } => run_check(&config),
    }
}

fn load_config(path: &Path) -> Result<ControlConfig> {
    ControlConfig::load(path).with_context(|| format!("loading config {}", path.display()))
}

/// `X,Y` → point.
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{v}': {e}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

// ── layout ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct LayoutReport {
    degenerate: bool,
    step_count: Option<usize>,
    geometry: Geometry,
    ticks: Vec<Tick>,
    knobs: Knobs,
}

#[derive(Serialize)]
struct Knobs {
    min: Point,
    max: Point,
}

fn layout_report(config: &ControlConfig, viewport: Viewport) -> LayoutReport {
    let geometry = Geometry::compute(config, viewport, &FontSizeMetrics);
    let knobs = Knobs {
        min: geometry.knob_center(config.initial.min),
        max: geometry.knob_center(config.initial.max),
    };
    LayoutReport {
        degenerate: geometry.is_degenerate(),
        step_count: geometry.step_count(),
        ticks: geometry.ticks(),
        knobs,
        geometry,
    }
}

fn run_layout(canvas: &CanvasArgs) -> Result<()> {
    let (config, viewport) = canvas.load()?;
    let report = layout_report(&config, viewport);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// ── drag ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct DragReport {
    grabbed: Option<&'static str>,
    /// Range reported on release; `null` when the press missed.
    reported: Option<Range>,
}

fn simulate_drag(
    config: &ControlConfig,
    viewport: Viewport,
    from: Point,
    to: &[Point],
) -> DragReport {
    let geometry = Geometry::compute(config, viewport, &FontSizeMetrics);
    let mut control = HysteresisControl::new(config.value_bounds(), config.initial);

    let grabbed = match control.begin(&geometry, from) {
        DragState::Idle => None,
        DragState::DraggingMin => Some("min"),
        DragState::DraggingMax => Some("max"),
        DragState::Contested => Some("contested"),
    };
    for point in to {
        control.update(&geometry, *point);
    }
    let reported = control.end();
    info!(?grabbed, ?reported, "gesture replayed");
    DragReport { grabbed, reported }
}

fn run_drag(canvas: &CanvasArgs, from: Point, to: &[Point]) -> Result<()> {
    let (config, viewport) = canvas.load()?;
    let report = simulate_drag(&config, viewport, from, to);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// ── check ────────────────────────────────────────────────────────────

fn run_check(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    let warnings = config.diagnose();
    if warnings.is_empty() {
        println!("{}: ok", path.display());
    } else {
        println!("{}: {} adjustment(s)", path.display(), warnings.len());
        for warning in &warnings {
            println!("  - {warning}");
        }
    }
    Ok(())
}
