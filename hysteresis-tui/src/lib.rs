//! Hysteresis TUI - terminal rendering and interaction for the hysteresis
//! range control
//!
//! Provides:
//! - A ratatui widget painting the control on a braille canvas
//! - Mouse drag and keyboard handle movement
//! - Demo presets and persistence of the last settled range

pub mod app;
pub mod input;
pub mod persistence;
pub mod sample_configs;
pub mod theme;
pub mod ui;
pub mod widget;

pub use app::AppState;
pub use theme::Theme;
pub use widget::{CanvasMapping, HysteresisWidget};
