//! Parrot/neon theme tokens and colour handling for the hysteresis TUI
//!
//! Provides a consistent color palette inspired by:
//! - Parrot color scheme (neon accents on dark background)
//! - Terminal aesthetic with high contrast
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (canvas)
//! - **Accent**: Electric cyan (axis, focus)
//! - **Low**: Neon blue (low handle, fill start)
//! - **High**: Hot pink (high handle, fill end)
//! - **Warning**: Neon orange (alerts)
//! - **Muted**: Steel blue (hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

use hysteresis_core::style::{ColorSpec, Font, FontSlant, Styles};

/// Parrot/neon theme for the hysteresis TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (canvas surface)
    pub background: Color,
    /// Electric cyan accent (axis, focus)
    pub accent: Color,
    /// Neon blue (low handle)
    pub low: Color,
    /// Hot pink (high handle)
    pub high: Color,
    /// Neon orange (warnings, alerts)
    pub warning: Color,
    /// Steel blue (muted text, hints)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    /// Create the default Parrot/neon theme
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            low: Color::Rgb(89, 201, 250),
            high: Color::Rgb(250, 82, 110),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Control styles in this theme's colours, for configs that do not set
    /// their own.
    pub fn control_styles(&self) -> Styles {
        let mut styles = Styles::default();
        styles.container.background_color = Some(color_spec(self.background));
        styles.axis.line.color = Some(color_spec(self.text_secondary));
        styles.axis.font.font_color = Some(color_spec(self.text_secondary));
        styles.low_line.color = Some(color_spec(self.low));
        styles.high_line.color = Some(color_spec(self.high));
        styles.control.background_color = Some(color_spec(self.background));
        styles.control_label.background_color = Some(color_spec(self.background));
        styles.control_label.font.font_color = Some(color_spec(self.text_primary));
        styles
    }

    /// Color for the handle that currently has keyboard focus.
    pub fn focus_color(&self, focused: bool) -> Color {
        if focused {
            self.accent
        } else {
            self.muted
        }
    }
}

// ── Status bar styles ────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn panel_border(active: bool) -> Style {
    Style::default().fg(Theme::default().focus_color(active))
}

pub fn panel_title(active: bool) -> Style {
    let style = Style::default().fg(Theme::default().focus_color(active));
    if active {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

// ── Colour parsing ───────────────────────────────────────────────────

/// Parse a configured colour: named colours (`"gray"`, `"lightblue"`),
/// `#rrggbb` hex, or an indexed colour number. Unknown names fall back to
/// the terminal default.
pub fn parse_color(spec: &ColorSpec) -> Color {
    spec.as_str().trim().parse::<Color>().unwrap_or_else(|_| {
        tracing::trace!(color = spec.as_str(), "unknown colour; using terminal default");
        Color::Reset
    })
}

/// Hex form of a ratatui colour, for writing it back into a style.
pub fn color_spec(color: Color) -> ColorSpec {
    match color {
        Color::Rgb(r, g, b) => ColorSpec(format!("#{r:02x}{g:02x}{b:02x}")),
        other => ColorSpec(other.to_string().to_lowercase()),
    }
}

/// RGB value of a colour, using xterm defaults for the named ones.
pub fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        _ => return None,
    };
    Some(rgb)
}

/// Colour at `t` (0..=1) between `from` and `to`. Colours without an RGB
/// value switch over at the midpoint.
pub fn lerp(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (to_rgb(from), to_rgb(to)) {
        (Some(a), Some(b)) => {
            let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
            Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Text style for a configured font. Terminals only honour weight and
/// slant; family and size drive layout only.
pub fn font_style(font: &Font) -> Style {
    let mut style = Style::default().fg(parse_color(&font.color));
    if font.weight.is_bold() {
        style = style.add_modifier(Modifier::BOLD);
    } else if font.weight.is_light() {
        style = style.add_modifier(Modifier::DIM);
    }
    if font.slant == FontSlant::Italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}
