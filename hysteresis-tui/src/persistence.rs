//! Last settled range persistence — JSON save/load across restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hysteresis_core::{Handle, Range};

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
///
/// The range is only restored onto a control with the same bounds and
/// step; anything else keeps the configured initial range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub bounds: Range,
    pub step: f64,
    pub range: Range,
    #[serde(default = "default_focus")]
    pub focused: Handle,
}

fn default_focus() -> Handle {
    Handle::Max
}

/// Default state file under the user config directory.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hysteresis")
        .join("state.json")
}

/// Load persisted state from disk. Returns `None` if the file is missing or
/// corrupt.
pub fn load(path: &Path) -> Option<PersistedState> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring corrupt state file");
            None
        }
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    let bounds = app.control.bounds();
    PersistedState {
        bounds: bounds.range,
        step: bounds.step,
        range: app.control.range(),
        focused: app.focused,
    }
}

/// Apply persisted state to AppState. Returns whether the range was
/// restored.
pub fn apply(app: &mut AppState, state: PersistedState) -> bool {
    let bounds = app.control.bounds();
    if state.bounds != bounds.range || state.step != bounds.step {
        debug!("persisted range belongs to other bounds; keeping initial range");
        return false;
    }
    let range = state.range;
    if !range.is_ordered() || !bounds.contains(range.min) || !bounds.contains(range.max) {
        warn!(min = range.min, max = range.max, "persisted range out of bounds; ignoring");
        return false;
    }
    app.config.initial = range;
    app.control.sync(bounds, range);
    app.focused = state.focused;
    true
}
