//! Built-in demo configurations.
//!
//! Three presets exercising the main display variants:
//! - Thermostat: coarse steps, tick values, axis title
//! - Signed: negative bounds, y axis with band labels, value labels
//! - Current: fine steps, no padding, custom knob colours

use hysteresis_core::config::{AxisSettings, DisplaySettings, XAxisSettings};
use hysteresis_core::style::{ColorSpec, FontWeight, Styles};
use hysteresis_core::{ControlConfig, Orientation, Range, TickLabels, YAxisMode};

use crate::theme::{color_spec, Theme};

const AXIS_COLOR: &str = "#66747A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Thermostat,
    Signed,
    Current,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Thermostat, Preset::Signed, Preset::Current];

    pub fn label(self) -> &'static str {
        match self {
            Preset::Thermostat => "Thermostat",
            Preset::Signed => "Signed",
            Preset::Current => "Current",
        }
    }

    pub fn next(self) -> Preset {
        match self {
            Preset::Thermostat => Preset::Signed,
            Preset::Signed => Preset::Current,
            Preset::Current => Preset::Thermostat,
        }
    }

    pub fn config(self) -> ControlConfig {
        match self {
            Preset::Thermostat => thermostat(),
            Preset::Signed => signed(),
            Preset::Current => current(),
        }
    }
}

fn base_styles(line_width: f64) -> Styles {
    let theme = Theme::default();
    let mut styles = theme.control_styles();
    styles.axis.line.color = Some(AXIS_COLOR.into());
    styles.axis.font.font_color = Some(AXIS_COLOR.into());
    styles.low_line.width = Some(line_width);
    styles.high_line.width = Some(line_width);
    styles
}

fn thermostat() -> ControlConfig {
    let mut style = base_styles(4.0);
    style.container.padding_left = Some(20.0);
    style.container.padding_right = Some(20.0);
    style.container.padding_top = Some(20.0);
    style.container.padding_bottom = Some(20.0);
    style.axis.line.width = Some(2.0);
    style.axis.font.font_weight = Some(FontWeight::Bold);
    style.control.size = Some(15.0);
    style.control.width = Some(15.0);

    ControlConfig {
        bounds: Range::new(0.0, 50.0),
        step: 5.0,
        initial: Range::new(10.0, 40.0),
        unit: String::new(),
        display: DisplaySettings {
            control_labels: false,
            fill: true,
            orientation: Orientation::Standard,
        },
        axis: AxisSettings {
            x: XAxisSettings {
                tick_labels: TickLabels::Values,
                title: Some("Setpoint".to_string()),
            },
            y: YAxisMode::Hidden,
        },
        style,
    }
}

fn signed() -> ControlConfig {
    let mut style = base_styles(2.0);
    style.control.size = Some(10.0);
    style.control.width = Some(2.0);
    style.control_label.border_width = Some(2.0);
    style.control_label.border_color = Some(AXIS_COLOR.into());
    style.control_label.border_radius = Some(10.0);
    style.control_label.width = Some(65.0);

    ControlConfig {
        bounds: Range::new(-50.0, 50.0),
        step: 10.0,
        initial: Range::new(10.0, 40.0),
        unit: "°C".to_string(),
        display: DisplaySettings::default(),
        axis: AxisSettings {
            x: XAxisSettings {
                tick_labels: TickLabels::Values,
                title: None,
            },
            y: YAxisMode::Labeled {
                top: "On".to_string(),
                bottom: "Off".to_string(),
            },
        },
        style,
    }
}

fn current() -> ControlConfig {
    let theme = Theme::default();
    let mut style = base_styles(2.0);
    style.container.padding_left = Some(0.0);
    style.container.padding_right = Some(0.0);
    style.container.padding_top = Some(0.0);
    style.container.padding_bottom = Some(0.0);
    style.control.size = Some(15.0);
    style.control.width = Some(5.0);
    style.control.color = Some(ColorSpec::from(AXIS_COLOR));
    style.control_label.border_width = Some(2.0);
    style.control_label.border_color = Some(AXIS_COLOR.into());
    style.control_label.background_color = Some(color_spec(theme.background));
    style.control_label.width = Some(50.0);

    ControlConfig {
        bounds: Range::new(5.0, 45.0),
        step: 1.0,
        initial: Range::new(10.0, 40.0),
        unit: "mA".to_string(),
        display: DisplaySettings {
            control_labels: true,
            fill: false,
            orientation: Orientation::Inverted,
        },
        axis: AxisSettings {
            x: XAxisSettings::default(),
            y: YAxisMode::Line,
        },
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_need_no_normalization() {
        for preset in Preset::ALL {
            let config = preset.config();
            assert!(
                config.diagnose().is_empty(),
                "{} preset has warnings: {:?}",
                preset.label(),
                config.diagnose()
            );
        }
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut preset = Preset::Thermostat;
        for _ in 0..Preset::ALL.len() {
            preset = preset.next();
        }
        assert_eq!(preset, Preset::Thermostat);
    }

    #[test]
    fn test_thermostat_matches_classic_setup() {
        let config = Preset::Thermostat.config();
        let bounds = config.value_bounds();
        assert_eq!(bounds.step_count(), Some(10));
        assert_eq!(config.initial, Range::new(10.0, 40.0));
    }
}
