//! Hysteresis widget — paints a core `Scene` onto a ratatui canvas.
//!
//! Layout runs in canvas units: by default one terminal cell is
//! `CELL_WIDTH` x `CELL_HEIGHT` units, so the constants of the layout
//! calculator keep roughly their pixel proportions. Braille markers give
//! 2x4 dots per cell for lines and knobs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Circle, Context, Line},
        Block, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

use hysteresis_core::layout::{TextMetrics, TextSize};
use hysteresis_core::scene::{Primitive, Rect as SceneRect};
use hysteresis_core::style::Font;
use hysteresis_core::{ControlConfig, Geometry, HysteresisControl, Point, Scene, Viewport};

use crate::theme;

/// Canvas units per terminal column.
pub const CELL_WIDTH: f64 = 8.0;
/// Canvas units per terminal row.
pub const CELL_HEIGHT: f64 = 16.0;

const MIN_DOT_SPACING: f64 = 0.5;

/// Text measurement in whole terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl TextMetrics for CellMetrics {
    fn measure(&self, text: &str, _font: &Font) -> TextSize {
        TextSize {
            width: text.width() as f64 * self.cell_width,
            height: self.cell_height,
        }
    }
}

/// Maps between terminal cells of one widget area and canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    pub area: Rect,
    pub viewport: Viewport,
}

impl CanvasMapping {
    /// Canvas covering `area`. An explicit style width/height rescales the
    /// canvas; it never changes the terminal area used.
    pub fn new(area: Rect, config: &ControlConfig) -> Self {
        let container = &config.style.container;
        let viewport = Viewport::new(
            container.width.unwrap_or(area.width as f64 * CELL_WIDTH),
            container.height.unwrap_or(area.height as f64 * CELL_HEIGHT),
        );
        Self { area, viewport }
    }

    pub fn cell_width(&self) -> f64 {
        self.viewport.width / self.area.width.max(1) as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.viewport.height / self.area.height.max(1) as f64
    }

    pub fn metrics(&self) -> CellMetrics {
        CellMetrics {
            cell_width: self.cell_width(),
            cell_height: self.cell_height(),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }

    /// Centre of a terminal cell in canvas units. Cells outside the area
    /// map outside the canvas so a drag can continue past the widget.
    pub fn to_canvas(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f64 - self.area.x as f64 + 0.5) * self.cell_width(),
            (row as f64 - self.area.y as f64 + 0.5) * self.cell_height(),
        )
    }

    /// Terminal cell containing a canvas point, if it lies inside the area.
    pub fn to_cell(&self, point: Point) -> Option<(u16, u16)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.cell_width()).floor();
        let row = (point.y / self.cell_height()).floor();
        if col >= self.area.width as f64 || row >= self.area.height as f64 {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    pub fn geometry(&self, config: &ControlConfig) -> Geometry {
        Geometry::compute(config, self.viewport, &self.metrics())
    }

    /// Canvas y grows upwards; scene y grows downwards.
    fn flip(&self, y: f64) -> f64 {
        self.viewport.height - y
    }

    /// Spacing of braille dots in canvas units, never below
    /// `MIN_DOT_SPACING` so fill loops always advance.
    fn dot(&self) -> (f64, f64) {
        (
            (self.cell_width() / 2.0).max(MIN_DOT_SPACING),
            (self.cell_height() / 4.0).max(MIN_DOT_SPACING),
        )
    }
}

/// Widget that renders one hysteresis control.
pub struct HysteresisWidget<'a> {
    config: &'a ControlConfig,
    control: &'a HysteresisControl,
    block: Option<Block<'a>>,
}

impl<'a> HysteresisWidget<'a> {
    pub fn new(config: &'a ControlConfig, control: &'a HysteresisControl) -> Self {
        Self {
            config,
            control,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Area the canvas occupies inside `area` once the block is drawn.
    pub fn inner(&self, area: Rect) -> Rect {
        match &self.block {
            Some(block) => block.inner(area),
            None => area,
        }
    }
}

impl<'a> Widget for HysteresisWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = self.inner(area);
        if let Some(block) = self.block {
            block.render(area, buf);
        }
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mapping = CanvasMapping::new(inner, self.config);
        let metrics = mapping.metrics();
        let geometry = Geometry::compute(self.config, mapping.viewport, &metrics);
        let scene = Scene::build(
            self.config,
            &geometry,
            self.control.range(),
            self.control.drag_state(),
            &metrics,
        );
        paint(&scene, &mapping, inner, buf);
    }
}

/// Paint a scene into `area` of `buf`.
pub fn paint(scene: &Scene, mapping: &CanvasMapping, area: Rect, buf: &mut Buffer) {
    let background = scene
        .primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Background { color } => Some(theme::parse_color(color)),
            _ => None,
        })
        .unwrap_or(Color::Reset);

    Canvas::default()
        .marker(Marker::Braille)
        .background_color(background)
        .x_bounds([0.0, mapping.viewport.width])
        .y_bounds([0.0, mapping.viewport.height])
        .paint(|ctx| {
            for primitive in &scene.primitives {
                paint_primitive(ctx, mapping, primitive);
                // Filled shapes get their own layer so later shapes cover them.
                if is_filled(primitive) {
                    ctx.layer();
                }
            }
        })
        .render(area, buf);
}

fn is_filled(primitive: &Primitive) -> bool {
    matches!(
        primitive,
        Primitive::Circle { .. } | Primitive::Gradient { .. } | Primitive::RoundedRect { .. }
    )
}

fn paint_primitive(ctx: &mut Context, m: &CanvasMapping, primitive: &Primitive) {
    match primitive {
        Primitive::Background { .. } => {}
        Primitive::Line { from, to, color, .. } => {
            ctx.draw(&Line::new(
                from.x,
                m.flip(from.y),
                to.x,
                m.flip(to.y),
                theme::parse_color(color),
            ));
        }
        Primitive::Circle {
            center,
            radius,
            color,
        } => {
            let color = theme::parse_color(color);
            let (_, dot_h) = m.dot();
            let mut r = radius.min(m.viewport.width.max(m.viewport.height));
            // At most one ring per braille dot along the longer side of the area.
            let rings = f64::from(m.area.width.max(m.area.height).max(1)) * 4.0;
            let spacing = dot_h.max(r / rings);
            while r > 0.0 {
                ctx.draw(&Circle {
                    x: center.x,
                    y: m.flip(center.y),
                    radius: r,
                    color,
                });
                r -= spacing;
            }
        }
        Primitive::Gradient { rect, from, to } => {
            let from = theme::parse_color(from);
            let to = theme::parse_color(to);
            let (dot_w, _) = m.dot();
            let mut x = rect.x.max(0.0);
            while x <= rect.right().min(m.viewport.width) {
                let t = if rect.width > 0.0 {
                    (x - rect.x) / rect.width
                } else {
                    0.0
                };
                ctx.draw(&Line::new(
                    x,
                    m.flip(rect.y),
                    x,
                    m.flip(rect.bottom()),
                    theme::lerp(from, to, t),
                ));
                x += dot_w;
            }
        }
        Primitive::RoundedRect { rect, color, .. } => {
            fill_rect(ctx, m, rect, theme::parse_color(color));
        }
        Primitive::Text { origin, text, font } => {
            // Print in the middle of the first text row so the cell under
            // the box's top-left corner receives the first glyph.
            let y = origin.y + m.cell_height() / 2.0;
            ctx.print(
                origin.x.max(0.0),
                m.flip(y),
                TextLine::styled(text.clone(), theme::font_style(font)),
            );
        }
    }
}

fn fill_rect(ctx: &mut Context, m: &CanvasMapping, rect: &SceneRect, color: Color) {
    let (_, dot_h) = m.dot();
    let mut y = rect.y.max(0.0);
    while y <= rect.bottom().min(m.viewport.height) {
        ctx.draw(&Line::new(rect.x, m.flip(y), rect.right(), m.flip(y), color));
        y += dot_h;
    }
}
