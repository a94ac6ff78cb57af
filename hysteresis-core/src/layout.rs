//! Layout calculator — canvas geometry derived from bounds, step, style.
//!
//! All coordinates are canvas units with the origin at the top-left and `y`
//! growing downwards. The geometry is recomputed whenever the canvas or the
//! configuration changes; nothing here is retained between frames.

use serde::Serialize;

use crate::config::{ControlConfig, TickLabels};
use crate::domain::{Bounds, Handle, Point, Range, STEP_EPSILON};
use crate::style::{Font, DEFAULT_HEIGHT, DEFAULT_PADDING};

/// Padding added on every side on top of the configured padding.
pub const REQUIRED_PADDING: f64 = 10.0;
/// Smallest touch radius around a knob, whatever the knob size.
pub const MIN_TOUCH_RADIUS: f64 = 20.0;
/// Gap between the x axis and the bottom edge of the hysteresis band.
pub const HYSTERESIS_AXIS_DISTANCE: f64 = 20.0;
/// Inner padding of the floating value label.
pub const CONTROL_LABEL_PADDING: f64 = 5.0;
/// Gap between an axis and its text.
pub const LABEL_AXIS_DISTANCE: f64 = 5.0;
/// Full length of a tick mark.
pub const AXIS_TICK_LENGTH: f64 = 10.0;
/// Overhang of the x axis past the first and last tick.
pub const AXIS_LENGTH_ADDON: f64 = 5.0;

/// Size of a piece of text in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Measures text for a given font. Implemented by whatever paints the scene.
pub trait TextMetrics {
    fn measure(&self, text: &str, font: &Font) -> TextSize;
}

/// Approximate metrics from the font size alone: every character is
/// `0.6 * size` wide and a line is `size` tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontSizeMetrics;

impl TextMetrics for FontSizeMetrics {
    fn measure(&self, text: &str, font: &Font) -> TextSize {
        TextSize {
            width: text.chars().count() as f64 * font.size * 0.6,
            height: font.size,
        }
    }
}

/// Canvas size in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Canvas size for a config: explicit style width/height win, the
    /// available width is used otherwise, and height falls back to the
    /// default.
    pub fn for_config(config: &ControlConfig, available_width: f64) -> Self {
        let container = &config.style.container;
        Self::new(
            container.width.unwrap_or(available_width),
            container.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Effective padding on each side, including [`REQUIRED_PADDING`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// One tick mark on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub x: f64,
}

/// Which handles a point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitTest {
    pub min: bool,
    pub max: bool,
}

impl HitTest {
    pub fn any(&self) -> bool {
        self.min || self.max
    }

    pub fn both(&self) -> bool {
        self.min && self.max
    }

    pub fn single(&self) -> Option<Handle> {
        match (self.min, self.max) {
            (true, false) => Some(Handle::Min),
            (false, true) => Some(Handle::Max),
            _ => None,
        }
    }
}

/// Derived pixel geometry of the control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    #[serde(skip)]
    bounds: Bounds,
    step_count: Option<usize>,
    pub viewport: Viewport,
    pub padding: Padding,
    /// x of the first tick (the y axis position).
    pub origin_x: f64,
    /// y of the x axis line.
    pub x_axis_y: f64,
    /// Length of the x axis between the first and last tick.
    pub axis_len: f64,
    /// Distance between neighbouring ticks; zero when degenerate.
    pub line_space: f64,
    pub band_top: f64,
    pub band_bottom: f64,
    /// y of the knob centres.
    pub control_y: f64,
    pub touch_radius: f64,
    /// Height of one line of axis text.
    pub label_height: f64,
    /// Width reserved left of the y axis for its labels.
    pub y_label_width: f64,
}

impl Geometry {
    pub fn compute(config: &ControlConfig, viewport: Viewport, metrics: &dyn TextMetrics) -> Self {
        let container = &config.style.container;
        let pad = |side: Option<f64>| sanitize(side.unwrap_or(DEFAULT_PADDING)) + REQUIRED_PADDING;
        let padding = Padding {
            left: pad(container.padding_left),
            right: pad(container.padding_right),
            top: pad(container.padding_top),
            bottom: pad(container.padding_bottom),
        };

        let axis_font = config.style.axis.font.resolved();
        let label_height = metrics.measure("0", &axis_font).height;

        let mut x_axis_y = viewport.height - padding.bottom;
        if config.axis.x.tick_labels == TickLabels::Values {
            x_axis_y -= label_height;
        }
        if config.axis.x.title.is_some() {
            x_axis_y -= label_height;
        }

        let y_label_width = match config.axis.y.labels() {
            Some((top, bottom)) => metrics
                .measure(top, &axis_font)
                .width
                .max(metrics.measure(bottom, &axis_font).width),
            None => 0.0,
        };
        let origin_x = padding.left + y_label_width;

        let bounds = config.value_bounds();
        let available = (viewport.width - origin_x - padding.right).max(0.0);
        let step_count = bounds.step_count().filter(|_| available > 0.0);

        let (axis_len, line_space) = match step_count {
            Some(_) => (available, available / (bounds.range.span() / bounds.step)),
            None => (0.0, 0.0),
        };

        let band_bottom = x_axis_y - HYSTERESIS_AXIS_DISTANCE;
        let band_top = padding.top + AXIS_LENGTH_ADDON;
        let control_y = (x_axis_y + band_top) / 2.0;
        let touch_radius = config.style.control.size().max(MIN_TOUCH_RADIUS);

        Self {
            bounds,
            step_count,
            viewport,
            padding,
            origin_x,
            x_axis_y,
            axis_len,
            line_space,
            band_top,
            band_bottom,
            control_y,
            touch_radius,
            label_height,
            y_label_width,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// True when the axis collapses to a point and dragging is disabled.
    pub fn is_degenerate(&self) -> bool {
        self.step_count.is_none()
    }

    pub fn step_count(&self) -> Option<usize> {
        self.step_count
    }

    /// x of the last point of the axis (before the overhang).
    pub fn axis_end_x(&self) -> f64 {
        self.origin_x + self.axis_len
    }

    /// `(v - bounds.min) / step * line_space + origin_x`.
    pub fn value_to_x(&self, value: f64) -> f64 {
        if self.is_degenerate() || !value.is_finite() {
            return self.origin_x;
        }
        (value - self.bounds.min()) / self.bounds.step * self.line_space + self.origin_x
    }

    /// Inverse of [`value_to_x`](Self::value_to_x), floored onto the step
    /// grid and clamped to the reachable ticks.
    pub fn x_to_value(&self, x: f64) -> f64 {
        let Some(n) = self.step_count else {
            return self.bounds.min();
        };
        if !x.is_finite() {
            return self.bounds.min();
        }
        let index = ((x - self.origin_x) / self.line_space + STEP_EPSILON).floor();
        self.bounds.value_at(index.clamp(0.0, n as f64) as usize)
    }

    /// Every tick, `step_count + 1` of them; a single tick at the origin
    /// when degenerate.
    pub fn ticks(&self) -> Vec<Tick> {
        match self.step_count {
            Some(n) => (0..=n)
                .map(|i| {
                    let value = self.bounds.value_at(i);
                    Tick {
                        value,
                        x: self.origin_x + i as f64 * self.line_space,
                    }
                })
                .collect(),
            None => vec![Tick {
                value: self.bounds.min(),
                x: self.origin_x,
            }],
        }
    }

    /// Centre of the knob for a handle at `value`.
    pub fn knob_center(&self, value: f64) -> Point {
        Point::new(self.value_to_x(value), self.control_y)
    }

    /// Which knobs of `range` lie within the touch radius of `point`.
    pub fn hit_test(&self, range: Range, point: Point) -> HitTest {
        if self.is_degenerate() {
            return HitTest::default();
        }
        let near = |value: f64| {
            let center = self.knob_center(value);
            (point.x - center.x).abs() < self.touch_radius
                && (point.y - center.y).abs() < self.touch_radius
        };
        HitTest {
            min: near(range.min),
            max: near(range.max),
        }
    }
}
