//! Control configuration — the unified TOML schema.
//!
//! One schema covers what used to be two widget variants: axis settings are
//! enumerated (`TickLabels`, `YAxisMode`, `Orientation`) instead of being
//! spread over loosely related boolean flags.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Bounds, Range};
use crate::error::ConfigError;
use crate::style::Styles;

/// Whether tick values are printed under the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickLabels {
    #[default]
    Hidden,
    Values,
}

/// How the vertical axis is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum YAxisMode {
    #[default]
    Hidden,
    /// Axis line with marks at the band edges.
    Line,
    /// Axis line plus text at the band edges (e.g. "On" / "Off").
    Labeled { top: String, bottom: String },
}

impl YAxisMode {
    pub fn shows_line(&self) -> bool {
        !matches!(self, YAxisMode::Hidden)
    }

    pub fn labels(&self) -> Option<(&str, &str)> {
        match self {
            YAxisMode::Labeled { top, bottom } => Some((top, bottom)),
            _ => None,
        }
    }
}

/// Which band edge each hysteresis line runs along.
///
/// `Standard`: the low line runs along the top edge in from the right and
/// drops at the min handle; the high line runs along the bottom edge in
/// from the origin and rises at the max handle. `Inverted` swaps the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Standard,
    Inverted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct XAxisSettings {
    pub tick_labels: TickLabels,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    pub x: XAxisSettings,
    pub y: YAxisMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show the floating value label while a handle is dragged.
    pub control_labels: bool,
    /// Fill the band between the handles.
    pub fill: bool,
    pub orientation: Orientation,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            control_labels: true,
            fill: false,
            orientation: Orientation::Standard,
        }
    }
}

/// Everything the control is configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub bounds: Range,
    pub step: f64,
    pub initial: Range,
    pub unit: String,
    pub display: DisplaySettings,
    pub axis: AxisSettings,
    pub style: Styles,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            bounds: Range::new(0.0, 100.0),
            step: 1.0,
            initial: Range::new(25.0, 75.0),
            unit: String::new(),
            display: DisplaySettings::default(),
            axis: AxisSettings::default(),
            style: Styles::default(),
        }
    }
}

/// A degenerate input and what `normalized()` does about it.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// Step is zero, negative, or not finite: the axis collapses to a point
    /// and dragging is disabled.
    InvalidStep(f64),
    /// Bounds are not finite: treated like an invalid step.
    NonFiniteBounds(Range),
    /// `bounds.max < bounds.min`: the bounds are swapped.
    InvertedBounds(Range),
    /// `bounds.max == bounds.min`: a single selectable value.
    EmptyBounds(f64),
    /// `initial.max < initial.min`: the initial values are swapped.
    InvertedInitial(Range),
    /// Initial values outside the bounds: clamped.
    InitialOutOfBounds(Range),
    /// Step is larger than the span, or so small the axis cannot draw it.
    UnusableStep { span: f64, step: f64 },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::InvalidStep(step) => {
                write!(f, "step {step} is not positive; dragging disabled")
            }
            ConfigWarning::NonFiniteBounds(r) => {
                write!(f, "bounds {}..{} are not finite; dragging disabled", r.min, r.max)
            }
            ConfigWarning::InvertedBounds(r) => {
                write!(f, "bounds {}..{} are inverted; swapped", r.min, r.max)
            }
            ConfigWarning::EmptyBounds(v) => {
                write!(f, "bounds collapse to the single value {v}; dragging disabled")
            }
            ConfigWarning::InvertedInitial(r) => {
                write!(f, "initial values {}..{} are inverted; swapped", r.min, r.max)
            }
            ConfigWarning::InitialOutOfBounds(r) => {
                write!(f, "initial values {}..{} exceed the bounds; clamped", r.min, r.max)
            }
            ConfigWarning::UnusableStep { span, step } => {
                write!(f, "step {step} does not divide span {span} into drawable ticks; dragging disabled")
            }
        }
    }
}

impl ControlConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Value bounds as configured (before normalization).
    pub fn value_bounds(&self) -> Bounds {
        Bounds::new(self.bounds, self.step)
    }

    /// List every degenerate input in this configuration.
    pub fn diagnose(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let b = self.bounds;

        if !(b.min.is_finite() && b.max.is_finite()) {
            warnings.push(ConfigWarning::NonFiniteBounds(b));
            return warnings;
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            warnings.push(ConfigWarning::InvalidStep(self.step));
        }
        if b.max < b.min {
            warnings.push(ConfigWarning::InvertedBounds(b));
        } else if b.max == b.min {
            warnings.push(ConfigWarning::EmptyBounds(b.min));
        }
        let ordered = Range::new(b.min.min(b.max), b.min.max(b.max));
        if self.step.is_finite()
            && self.step > 0.0
            && ordered.span() > 0.0
            && Bounds::new(ordered, self.step).is_degenerate()
        {
            warnings.push(ConfigWarning::UnusableStep {
                span: ordered.span(),
                step: self.step,
            });
        }

        let i = self.initial;
        if i.max < i.min {
            warnings.push(ConfigWarning::InvertedInitial(i));
        }
        if i.min < ordered.min || i.max > ordered.max || i.min > ordered.max || i.max < ordered.min
        {
            warnings.push(ConfigWarning::InitialOutOfBounds(i));
        }
        warnings
    }

    /// Apply the fixes described by [`ConfigWarning`], logging each one.
    ///
    /// The result always has ordered bounds and an initial range that is
    /// ordered and inside the bounds. A bad step is kept as is; the layout
    /// turns it into a degenerate geometry.
    pub fn normalized(&self) -> ControlConfig {
        for warning in self.diagnose() {
            warn!(%warning, "control configuration");
        }

        let mut config = self.clone();
        let b = config.bounds;
        if b.min.is_finite() && b.max.is_finite() && b.max < b.min {
            config.bounds = Range::new(b.max, b.min);
        }

        let bounds = config.value_bounds();
        let mut initial = config.initial;
        if initial.max < initial.min {
            initial = Range::new(initial.max, initial.min);
        }
        config.initial = Range::new(bounds.clamp(initial.min), bounds.clamp(initial.max));
        config
    }
}
