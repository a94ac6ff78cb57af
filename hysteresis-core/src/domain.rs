//! Domain types — ranges, value bounds, handles, canvas points.

use serde::{Deserialize, Serialize};

/// Tolerance used when counting steps so floating-point drift never drops
/// the final tick or snaps a value one step too low.
pub const STEP_EPSILON: f64 = 1e-9;

/// Upper limit on the number of steps along the axis. Anything denser is
/// treated as degenerate.
pub const MAX_STEP_COUNT: usize = 100_000;

/// A `{min, max}` pair. Used both for the live value of the control and for
/// the configured value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Value of the given endpoint.
    pub fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Min => self.min,
            Handle::Max => self.max,
        }
    }
}

/// Which endpoint of the range a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    Min,
    Max,
}

impl Handle {
    pub fn other(self) -> Handle {
        match self {
            Handle::Min => Handle::Max,
            Handle::Max => Handle::Min,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Handle::Min => "min",
            Handle::Max => "max",
        }
    }
}

/// A position on the canvas. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The discretized domain of selectable values: every `step` from
/// `range.min` to `range.max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub range: Range,
    pub step: f64,
}

impl Bounds {
    pub fn new(range: Range, step: f64) -> Self {
        Self { range, step }
    }

    pub fn min(&self) -> f64 {
        self.range.min
    }

    pub fn max(&self) -> f64 {
        self.range.max
    }

    /// Number of whole steps between the bounds, or `None` when the bounds
    /// cannot be discretized (zero or negative span, non-positive step,
    /// non-finite input, or an absurdly dense axis).
    pub fn step_count(&self) -> Option<usize> {
        let Range { min, max } = self.range;
        if !(min.is_finite() && max.is_finite() && self.step.is_finite()) {
            return None;
        }
        if self.step <= 0.0 || max <= min {
            return None;
        }
        let steps = ((max - min) / self.step + STEP_EPSILON).floor();
        if steps < 1.0 || steps > MAX_STEP_COUNT as f64 {
            return None;
        }
        Some(steps as usize)
    }

    pub fn is_degenerate(&self) -> bool {
        self.step_count().is_none()
    }

    /// Value of the `index`-th tick. Always computed from the integer index
    /// so repeated calls agree bit-for-bit.
    pub fn value_at(&self, index: usize) -> f64 {
        self.range.min + index as f64 * self.step
    }

    /// All tick values, `step_count + 1` of them; a single value at `min`
    /// when degenerate.
    pub fn tick_values(&self) -> Vec<f64> {
        match self.step_count() {
            Some(n) => (0..=n).map(|i| self.value_at(i)).collect(),
            None => vec![self.range.min],
        }
    }

    /// Snap an arbitrary value down onto the step grid, clamped to the
    /// reachable ticks.
    pub fn snap(&self, value: f64) -> f64 {
        let Some(n) = self.step_count() else {
            return self.range.min;
        };
        if !value.is_finite() {
            return self.range.min;
        }
        let index = ((value - self.range.min) / self.step + STEP_EPSILON).floor();
        self.value_at(index.clamp(0.0, n as f64) as usize)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.range.min && value <= self.range.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let Range { min, max } = self.range;
        let upper = max.max(min);
        if value.is_nan() || value < min {
            min
        } else if value > upper {
            upper
        } else {
            value
        }
    }

    /// Number of decimals needed to print values on this step grid.
    pub fn decimals(&self) -> usize {
        if !self.step.is_finite() || self.step <= 0.0 {
            return 0;
        }
        (0..=6)
            .find(|&d| {
                let scaled = self.step * 10f64.powi(d as i32);
                (scaled - scaled.round()).abs() < 1e-6
            })
            .unwrap_or(6)
    }

    /// Format a value with the precision of the step grid.
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}
