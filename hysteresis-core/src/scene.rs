//! Scene builder — the renderer as a pure function.
//!
//! `Scene::build` turns the current range, geometry, and style into an
//! ordered list of drawing primitives. Whatever owns a real canvas paints
//! them; nothing is retained between frames.

use crate::config::{ControlConfig, Orientation, TickLabels};
use crate::control::DragState;
use crate::domain::{Handle, Point, Range};
use crate::layout::{
    Geometry, TextMetrics, AXIS_LENGTH_ADDON, AXIS_TICK_LENGTH, CONTROL_LABEL_PADDING,
    LABEL_AXIS_DISTANCE,
};
use crate::style::{ColorSpec, Font};

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Fill the whole canvas.
    Background { color: ColorSpec },
    Line {
        from: Point,
        to: Point,
        color: ColorSpec,
        width: f64,
    },
    /// Filled disc.
    Circle {
        center: Point,
        radius: f64,
        color: ColorSpec,
    },
    /// Rectangle filled with a left-to-right linear gradient.
    Gradient {
        rect: Rect,
        from: ColorSpec,
        to: ColorSpec,
    },
    /// Filled rounded rectangle.
    RoundedRect {
        rect: Rect,
        radius: f64,
        color: ColorSpec,
    },
    /// Text whose bounding box starts at `origin` (top-left).
    Text {
        origin: Point,
        text: String,
        font: Font,
    },
}

/// What a floating value label looks like and where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub handle: Handle,
    pub text: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn build(
        config: &ControlConfig,
        geometry: &Geometry,
        range: Range,
        drag: DragState,
        metrics: &dyn TextMetrics,
    ) -> Scene {
        let mut scene = Scene::default();
        scene.push(Primitive::Background {
            color: config.style.container.background(),
        });
        scene.axis(config, geometry);
        scene.axis_text(config, geometry, metrics);
        if config.display.fill {
            scene.fill(config, geometry, range);
        }
        scene.hysteresis_lines(config, geometry, range);
        if config.display.control_labels {
            if let Some(handle) = drag.handle() {
                scene.value_label(config, geometry, range, handle, metrics);
            }
        }
        scene
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// All text primitives, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    fn line(&mut self, from: Point, to: Point, color: &ColorSpec, width: f64) {
        self.push(Primitive::Line {
            from,
            to,
            color: color.clone(),
            width,
        });
    }

    fn axis(&mut self, config: &ControlConfig, g: &Geometry) {
        let axis = &config.style.axis.line;
        let color = axis.color();
        let width = axis.width();

        let (start, end) = if g.is_degenerate() {
            (g.origin_x, g.origin_x)
        } else {
            (g.origin_x - AXIS_LENGTH_ADDON, g.axis_end_x() + AXIS_LENGTH_ADDON)
        };
        self.line(
            Point::new(start, g.x_axis_y),
            Point::new(end, g.x_axis_y),
            &color,
            width,
        );

        let half = AXIS_TICK_LENGTH / 2.0;
        for tick in g.ticks() {
            self.line(
                Point::new(tick.x, g.x_axis_y - half),
                Point::new(tick.x, g.x_axis_y + half),
                &color,
                width,
            );
        }

        if config.axis.y.shows_line() {
            self.line(
                Point::new(g.origin_x, g.padding.top),
                Point::new(g.origin_x, g.x_axis_y),
                &color,
                width,
            );
            for y in [g.band_bottom, g.band_top] {
                self.line(
                    Point::new(g.origin_x - half, y),
                    Point::new(g.origin_x + half, y),
                    &color,
                    width,
                );
            }
        }
    }

    fn axis_text(&mut self, config: &ControlConfig, g: &Geometry, metrics: &dyn TextMetrics) {
        let font = config.style.axis.font.resolved();
        let bounds = g.bounds();
        let show_ticks = config.axis.x.tick_labels == TickLabels::Values;

        if show_ticks {
            for tick in g.ticks() {
                let text = bounds.format_value(tick.value);
                let size = metrics.measure(&text, &font);
                self.push(Primitive::Text {
                    origin: Point::new(tick.x - size.width / 2.0, g.x_axis_y + LABEL_AXIS_DISTANCE),
                    text,
                    font: font.clone(),
                });
            }
        }

        if let Some(title) = &config.axis.x.title {
            let size = metrics.measure(title, &font);
            let rows = if show_ticks { 2.0 } else { 1.0 };
            let baseline = g.x_axis_y + (g.label_height + LABEL_AXIS_DISTANCE) * rows;
            self.push(Primitive::Text {
                origin: Point::new(
                    g.origin_x + g.axis_len / 2.0 - size.width / 2.0,
                    baseline - size.height,
                ),
                text: title.clone(),
                font: font.clone(),
            });
        }

        if let Some((top, bottom)) = config.axis.y.labels() {
            for (text, y) in [(bottom, g.band_bottom), (top, g.band_top)] {
                let size = metrics.measure(text, &font);
                self.push(Primitive::Text {
                    origin: Point::new(
                        g.origin_x - size.width - AXIS_TICK_LENGTH / 2.0 - LABEL_AXIS_DISTANCE,
                        y - size.height / 2.0,
                    ),
                    text: text.to_string(),
                    font: font.clone(),
                });
            }
        }
    }

    fn fill(&mut self, config: &ControlConfig, g: &Geometry, range: Range) {
        let x_start = g.value_to_x(range.min);
        let x_end = g.value_to_x(range.max);
        self.push(Primitive::Gradient {
            rect: Rect {
                x: x_start,
                y: g.band_top,
                width: (x_end - x_start).max(0.0),
                height: (g.x_axis_y - g.band_top).max(0.0),
            },
            from: config.style.low_line.color(),
            to: config.style.high_line.color(),
        });
    }

    fn hysteresis_lines(&mut self, config: &ControlConfig, g: &Geometry, range: Range) {
        let style = &config.style;
        let (low_run_y, high_run_y) = match config.display.orientation {
            Orientation::Standard => (g.band_top, g.band_bottom),
            Orientation::Inverted => (g.band_bottom, g.band_top),
        };

        // Low line comes in from the right edge, high line from the origin.
        let right_edge = g.viewport.width - g.padding.right;
        let low_color = style.low_line.color();
        let high_color = style.high_line.color();
        self.hysteresis_line(g, range.min, right_edge, low_run_y, &low_color, style.low_line.width());
        self.hysteresis_line(g, range.max, g.origin_x, high_run_y, &high_color, style.high_line.width());

        self.knob(config, g, range.min, &low_color);
        self.knob(config, g, range.max, &high_color);
    }

    /// Horizontal run along `run_y` from `x_start` to the handle, then a
    /// vertical drop to the opposite band edge.
    fn hysteresis_line(
        &mut self,
        g: &Geometry,
        value: f64,
        x_start: f64,
        run_y: f64,
        color: &ColorSpec,
        width: f64,
    ) {
        let x = g.value_to_x(value);
        let drop_y = if run_y == g.band_top {
            g.band_bottom
        } else {
            g.band_top
        };
        self.line(Point::new(x_start, run_y), Point::new(x, run_y), color, width);
        self.line(Point::new(x, run_y), Point::new(x, drop_y), color, width);
    }

    fn knob(&mut self, config: &ControlConfig, g: &Geometry, value: f64, line_color: &ColorSpec) {
        let control = &config.style.control;
        let center = g.knob_center(value);
        let radius = control.size();
        let ring = control.color.clone().unwrap_or_else(|| line_color.clone());
        self.push(Primitive::Circle {
            center,
            radius,
            color: ring,
        });
        let inner = radius - control.ring_width();
        if inner > 0.0 {
            self.push(Primitive::Circle {
                center,
                radius: inner,
                color: control.background(),
            });
        }
    }

    fn value_label(
        &mut self,
        config: &ControlConfig,
        g: &Geometry,
        range: Range,
        handle: Handle,
        metrics: &dyn TextMetrics,
    ) {
        let label = layout_value_label(config, g, range, handle, metrics);
        let style = &config.style.control_label;
        let line_color = match handle {
            Handle::Min => config.style.low_line.color(),
            Handle::Max => config.style.high_line.color(),
        };
        let radius = style.border_radius.unwrap_or(0.0).max(0.0);
        let border = style.border_width();
        let font = style.font.resolved();
        let size = metrics.measure(&label.text, &font);

        self.push(Primitive::RoundedRect {
            rect: label.rect,
            radius,
            color: style.border_color.clone().unwrap_or(line_color),
        });
        self.push(Primitive::RoundedRect {
            rect: Rect {
                x: label.rect.x + border,
                y: label.rect.y + border,
                width: (label.rect.width - border * 2.0).max(0.0),
                height: (label.rect.height - border * 2.0).max(0.0),
            },
            radius,
            color: style.background(),
        });
        self.push(Primitive::Text {
            origin: Point::new(
                label.rect.x + label.rect.width / 2.0 - size.width / 2.0,
                label.rect.y + label.rect.height / 2.0 - size.height / 2.0,
            ),
            text: label.text,
            font,
        });
    }
}

/// Text and box of the floating label for `handle`: `value + unit`,
/// centred over the knob at half the knob height and kept inside the
/// canvas horizontally.
pub fn layout_value_label(
    config: &ControlConfig,
    g: &Geometry,
    range: Range,
    handle: Handle,
    metrics: &dyn TextMetrics,
) -> ValueLabel {
    let style = &config.style.control_label;
    let value = range.get(handle);
    let text = format!("{}{}", g.bounds().format_value(value), config.unit);
    let size = metrics.measure(&text, &style.font.resolved());
    let inset = (CONTROL_LABEL_PADDING + style.border_width()) * 2.0;

    let width = style.width.unwrap_or(size.width + inset).max(0.0);
    let height = style.height.unwrap_or(size.height + inset).max(0.0);
    let y = g.control_y / 2.0 - height / 2.0;

    let mut x = g.value_to_x(value) - width / 2.0;
    if x + width > g.viewport.width {
        x = g.viewport.width - width;
    }
    if x < 0.0 {
        x = 0.0;
    }

    ValueLabel {
        handle,
        text,
        rect: Rect { x, y, width, height },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YAxisMode;
    use crate::layout::{FontSizeMetrics, Viewport};

    fn config() -> ControlConfig {
        ControlConfig {
            bounds: Range::new(0.0, 50.0),
            step: 5.0,
            initial: Range::new(10.0, 40.0),
            unit: "°C".into(),
            ..Default::default()
        }
    }

    fn build(config: &ControlConfig, range: Range, drag: DragState) -> (Scene, Geometry) {
        let g = Geometry::compute(config, Viewport::new(540.0, 200.0), &FontSizeMetrics);
        (Scene::build(config, &g, range, drag, &FontSizeMetrics), g)
    }

    fn lines(scene: &Scene) -> usize {
        scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count()
    }

    #[test]
    fn background_comes_first() {
        let (scene, _) = build(&config(), Range::new(10.0, 40.0), DragState::Idle);
        assert!(matches!(
            scene.primitives.first(),
            Some(Primitive::Background { .. })
        ));
    }

    #[test]
    fn axis_ticks_and_handle_lines() {
        let (scene, _) = build(&config(), Range::new(10.0, 40.0), DragState::Idle);
        // baseline + 11 ticks + 2 handle lines of 2 segments each
        assert_eq!(lines(&scene), 1 + 11 + 4);
    }

    #[test]
    fn y_axis_adds_line_and_marks() {
        let mut c = config();
        c.axis.y = YAxisMode::Line;
        let (scene, _) = build(&c, Range::new(10.0, 40.0), DragState::Idle);
        assert_eq!(lines(&scene), 1 + 11 + 3 + 4);
    }

    #[test]
    fn tick_labels_and_title() {
        let mut c = config();
        c.axis.x.tick_labels = TickLabels::Values;
        c.axis.x.title = Some("Temp".into());
        let (scene, _) = build(&c, Range::new(10.0, 40.0), DragState::Idle);
        let texts: Vec<&str> = scene.texts().collect();
        assert_eq!(texts.len(), 12);
        assert_eq!(texts[0], "0");
        assert_eq!(texts[10], "50");
        assert_eq!(texts[11], "Temp");
    }

    #[test]
    fn value_label_only_while_dragging() {
        let c = config();
        let (idle, _) = build(&c, Range::new(10.0, 40.0), DragState::Idle);
        assert_eq!(idle.texts().count(), 0);

        let (dragging, _) = build(&c, Range::new(10.0, 40.0), DragState::DraggingMax);
        assert_eq!(dragging.texts().collect::<Vec<_>>(), vec!["40°C"]);

        let (contested, _) = build(&c, Range::new(20.0, 20.0), DragState::Contested);
        assert_eq!(contested.texts().count(), 0);
    }

    #[test]
    fn value_label_respects_toggle() {
        let mut c = config();
        c.display.control_labels = false;
        let (scene, _) = build(&c, Range::new(10.0, 40.0), DragState::DraggingMin);
        assert_eq!(scene.texts().count(), 0);
    }

    #[test]
    fn value_label_clamped_to_canvas() {
        let mut c = config();
        c.unit = " degrees Celsius".into();
        let g = Geometry::compute(&c, Viewport::new(540.0, 200.0), &FontSizeMetrics);
        let right = layout_value_label(&c, &g, Range::new(10.0, 50.0), Handle::Max, &FontSizeMetrics);
        assert!(right.rect.right() <= 540.0 + 1e-9);
        let left = layout_value_label(&c, &g, Range::new(0.0, 50.0), Handle::Min, &FontSizeMetrics);
        assert_eq!(left.rect.x, 0.0);
    }

    #[test]
    fn fill_spans_handles() {
        let mut c = config();
        c.display.fill = true;
        let (scene, g) = build(&c, Range::new(10.0, 40.0), DragState::Idle);
        let rect = scene
            .primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Gradient { rect, .. } => Some(*rect),
                _ => None,
            })
            .expect("fill present");
        assert_eq!(rect.x, g.value_to_x(10.0));
        assert_eq!(rect.right(), g.value_to_x(40.0));
        assert_eq!(rect.y, g.band_top);
        assert_eq!(rect.bottom(), g.x_axis_y);
    }

    #[test]
    fn inverted_orientation_swaps_run_edges() {
        let mut c = config();
        c.display.orientation = Orientation::Inverted;
        let (scene, g) = build(&c, Range::new(10.0, 40.0), DragState::Idle);
        let runs: Vec<f64> = scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { from, to, .. } if from.y == to.y && from.x != to.x => Some(from.y),
                _ => None,
            })
            .collect();
        // baseline, then low run, then high run
        assert_eq!(runs, vec![g.x_axis_y, g.band_bottom, g.band_top]);
    }

    #[test]
    fn knob_ring_and_disc() {
        let (scene, g) = build(&config(), Range::new(10.0, 40.0), DragState::Idle);
        let circles: Vec<(Point, f64)> = scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 4);
        assert_eq!(circles[0], (g.knob_center(10.0), 10.0));
        assert_eq!(circles[1], (g.knob_center(10.0), 9.0));
    }

    #[test]
    fn value_label_adds_box_and_text() {
        let range = Range::new(10.0, 40.0);
        let (idle, _) = build(&config(), range, DragState::Idle);
        let (dragging, _) = build(&config(), range, DragState::DraggingMin);
        // border box, fill box, text
        assert_eq!(dragging.len(), idle.len() + 3);

        let mut c = config();
        c.display.control_labels = false;
        let (unlabelled, _) = build(&c, range, DragState::DraggingMin);
        assert_eq!(unlabelled.len(), idle.len());
    }

    #[test]
    fn degenerate_scene_builds() {
        let c = ControlConfig {
            bounds: Range::new(5.0, 5.0),
            initial: Range::new(5.0, 5.0),
            ..config()
        };
        let (scene, g) = build(&c, Range::new(5.0, 5.0), DragState::Idle);
        assert!(g.is_degenerate());
        assert!(!scene.is_empty());
    }
}
