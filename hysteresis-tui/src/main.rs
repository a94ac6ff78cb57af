//! Hysteresis TUI — one hysteresis control in the terminal.
//!
//! Drag a knob with the mouse or move the focused handle with the arrow
//! keys; every settled range is shown, logged, and remembered on exit.

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use hysteresis_core::ControlConfig;
use hysteresis_tui::app::AppState;
use hysteresis_tui::sample_configs::Preset;
use hysteresis_tui::{input, persistence, ui};

#[derive(Parser, Debug)]
#[command(name = "hysteresis-tui", about = "Interactive hysteresis range control")]
struct Args {
    /// Control configuration (TOML). Without it the built-in presets are used.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// State file for the last settled range.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Neither restore nor save the last settled range.
    #[arg(long)]
    no_persist: bool,

    /// Log file (the terminal belongs to the UI).
    #[arg(long, default_value = "hysteresis-tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(&args.log_file)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let (config, preset) = match &args.config {
        Some(path) => {
            let config = ControlConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            (config, None)
        }
        None => (Preset::default().config(), Some(Preset::default())),
    };

    let state_path = (!args.no_persist)
        .then(|| args.state.clone().unwrap_or_else(persistence::default_path));

    let warnings = config.diagnose();
    let mut app = AppState::new(config, preset);
    if let Some(path) = &state_path {
        if let Some(persisted) = persistence::load(path) {
            if persistence::apply(&mut app, persisted) {
                info!(path = %path.display(), "restored last range");
            }
        }
    }
    if let Some(warning) = warnings.last() {
        app.set_warning(format!("Config adjusted: {warning}"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Some(path) = &state_path {
        if let Err(err) = persistence::save(path, &persistence::extract(&app)) {
            warn!(path = %path.display(), error = %err, "could not save state");
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// File logging through a non-blocking writer; `RUST_LOG` overrides the
/// default `info` filter.
fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .context("log file path has no file name")?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(guard)
}
