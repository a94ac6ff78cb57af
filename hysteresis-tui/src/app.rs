//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here: the configured control, the live gesture
//! state, keyboard focus, and the status line. Input handlers mutate it and
//! the draw pass reads it.

use ratatui::layout::Rect;
use tracing::info;

use hysteresis_core::{ControlConfig, Geometry, Handle, HysteresisControl, Range};

use crate::sample_configs::Preset;
use crate::widget::CanvasMapping;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay is drawn on top of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

pub struct AppState {
    pub running: bool,
    /// Normalized configuration the control is drawn with.
    pub config: ControlConfig,
    pub control: HysteresisControl,
    /// Preset the configuration came from; `None` for a loaded file.
    pub preset: Option<Preset>,
    /// Handle moved by the keyboard.
    pub focused: Handle,
    /// Canvas area of the last frame, used to map mouse cells.
    pub control_area: Option<Rect>,
    /// Range reported by the latest completed gesture; cleared when the
    /// control resets to new bounds.
    pub settled: Option<Range>,
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(config: ControlConfig, preset: Option<Preset>) -> Self {
        let config = config.normalized();
        let control = HysteresisControl::new(config.value_bounds(), config.initial);
        Self {
            running: true,
            config,
            control,
            preset,
            focused: Handle::Max,
            control_area: None,
            settled: None,
            status_message: None,
            overlay: Overlay::None,
        }
    }

    /// Replace the configuration. The control resets only when the bounds,
    /// step, or initial values changed.
    pub fn set_config(&mut self, config: ControlConfig, preset: Option<Preset>) {
        self.config = config.normalized();
        self.preset = preset;
        if self
            .control
            .sync(self.config.value_bounds(), self.config.initial)
        {
            self.settled = None;
            self.set_status(format!(
                "Range reset to {}",
                self.format_range(self.control.range())
            ));
        }
    }

    /// Canvas mapping for the last drawn frame.
    pub fn mapping(&self) -> Option<CanvasMapping> {
        self.control_area
            .map(|area| CanvasMapping::new(area, &self.config))
    }

    /// Geometry matching what is on screen.
    pub fn geometry(&self) -> Option<(CanvasMapping, Geometry)> {
        let mapping = self.mapping()?;
        let geometry = mapping.geometry(&self.config);
        Some((mapping, geometry))
    }

    /// The control's change report: a gesture or key press settled on a
    /// new range.
    pub fn report(&mut self, range: Range) {
        info!(min = range.min, max = range.max, "change reported");
        self.settled = Some(range);
        self.set_status(format!("Settled on {}", self.format_range(range)));
    }

    pub fn last_report(&self) -> Option<Range> {
        self.settled
    }

    pub fn format_range(&self, range: Range) -> String {
        let bounds = self.control.bounds();
        format!(
            "{}{unit} .. {}{unit}",
            bounds.format_value(range.min),
            bounds.format_value(range.max),
            unit = self.config.unit
        )
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(Preset::Thermostat.config(), Some(Preset::Thermostat))
    }

    #[test]
    fn test_new_normalizes_config() {
        let mut config = Preset::Thermostat.config();
        config.initial = Range::new(45.0, 5.0);
        let app = AppState::new(config, None);
        assert_eq!(app.control.range(), Range::new(5.0, 45.0));
    }

    #[test]
    fn test_geometry_requires_a_drawn_frame() {
        let mut app = app();
        assert!(app.geometry().is_none());
        app.control_area = Some(Rect::new(0, 0, 80, 12));
        assert!(app.geometry().is_some());
    }

    #[test]
    fn test_set_config_keeps_range_when_bounds_unchanged() {
        let mut app = app();
        app.control.nudge(Handle::Min, 1);
        let moved = app.control.range();

        let mut config = Preset::Thermostat.config();
        config.display.fill = !config.display.fill;
        app.set_config(config, Some(Preset::Thermostat));
        assert_eq!(app.control.range(), moved);
    }

    #[test]
    fn test_set_config_resets_on_new_bounds() {
        let mut app = app();
        app.control.nudge(Handle::Min, 1);
        app.report(app.control.range());
        app.set_config(Preset::Signed.config(), Some(Preset::Signed));
        assert_eq!(app.control.range(), Preset::Signed.config().initial);
        assert_eq!(app.last_report(), None);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_report_records_and_formats() {
        let mut app = AppState::new(Preset::Signed.config(), Some(Preset::Signed));
        app.report(Range::new(20.0, 40.0));
        assert_eq!(app.last_report(), Some(Range::new(20.0, 40.0)));
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Info);
        assert_eq!(msg, "Settled on 20°C .. 40°C");
    }
}
