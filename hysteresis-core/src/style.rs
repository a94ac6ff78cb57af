//! Style schema for the control — container, axis, hysteresis lines,
//! control knobs, and the floating value label.
//!
//! Every field is optional; `resolved()` accessors apply the defaults.
//! Colours are kept as strings (`"gray"`, `"#ff8800"`) and parsed by the
//! renderer that paints them.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LINE_COLOR: &str = "gray";
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_BACKGROUND_COLOR: &str = "white";
pub const DEFAULT_FONT_COLOR: &str = "black";
pub const DEFAULT_FONT_FAMILY: &str = "arial";
pub const DEFAULT_FONT_SIZE: f64 = 15.0;
pub const DEFAULT_PADDING: f64 = 10.0;
pub const DEFAULT_CONTROL_SIZE: f64 = 10.0;
pub const DEFAULT_HEIGHT: f64 = 200.0;

/// A colour as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSpec(pub String);

impl ColorSpec {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "100")]
    Thin,
    #[serde(rename = "200")]
    ExtraLight,
    #[serde(rename = "300")]
    Light,
    #[serde(rename = "400")]
    Regular,
}

impl FontWeight {
    pub fn is_bold(self) -> bool {
        matches!(self, FontWeight::Bold)
    }

    pub fn is_light(self) -> bool {
        matches!(
            self,
            FontWeight::Thin | FontWeight::ExtraLight | FontWeight::Light
        )
    }
}

/// Font settings shared by axis text and the control label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_style: Option<FontSlant>,
    pub font_weight: Option<FontWeight>,
    pub font_color: Option<ColorSpec>,
}

/// Fully defaulted font, as handed to text measurement and painting.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub slant: FontSlant,
    pub weight: FontWeight,
    pub color: ColorSpec,
}

impl FontStyle {
    pub fn resolved(&self) -> Font {
        Font {
            family: self
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            slant: self.font_style.unwrap_or_default(),
            weight: self.font_weight.unwrap_or_default(),
            color: self
                .font_color
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_COLOR.into()),
        }
    }
}

/// Container style: background, explicit canvas size, padding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStyle {
    pub background_color: Option<ColorSpec>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
}

impl ContainerStyle {
    pub fn background(&self) -> ColorSpec {
        self.background_color
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.into())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub width: Option<f64>,
    pub color: Option<ColorSpec>,
}

impl LineStyle {
    pub fn color(&self) -> ColorSpec {
        self.color
            .clone()
            .unwrap_or_else(|| DEFAULT_LINE_COLOR.into())
    }

    pub fn width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_LINE_WIDTH)
    }
}

/// Axis line plus the font used for tick values and titles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    #[serde(flatten)]
    pub line: LineStyle,
    #[serde(flatten)]
    pub font: FontStyle,
}

/// Control knob: ring width and colour, disc background, radius.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlStyle {
    pub size: Option<f64>,
    pub width: Option<f64>,
    pub color: Option<ColorSpec>,
    pub background_color: Option<ColorSpec>,
}

impl ControlStyle {
    pub fn size(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_CONTROL_SIZE).max(0.0)
    }

    pub fn ring_width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_LINE_WIDTH).max(0.0)
    }

    pub fn background(&self) -> ColorSpec {
        self.background_color
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.into())
    }
}

/// Floating value label shown while a handle is dragged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlLabelStyle {
    #[serde(flatten)]
    pub font: FontStyle,
    pub background_color: Option<ColorSpec>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub border_width: Option<f64>,
    pub border_color: Option<ColorSpec>,
    pub border_radius: Option<f64>,
}

impl ControlLabelStyle {
    pub fn border_width(&self) -> f64 {
        self.border_width.unwrap_or(DEFAULT_LINE_WIDTH).max(0.0)
    }

    pub fn background(&self) -> ColorSpec {
        self.background_color
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.into())
    }
}

/// All style groups of the control.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    #[serde(flatten)]
    pub container: ContainerStyle,
    pub axis: AxisStyle,
    pub low_line: LineStyle,
    pub high_line: LineStyle,
    pub control: ControlStyle,
    pub control_label: ControlLabelStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_defaults() {
        let font = FontStyle::default().resolved();
        assert_eq!(font.size, DEFAULT_FONT_SIZE);
        assert_eq!(font.family, "arial");
        assert_eq!(font.color, ColorSpec::from("black"));
        assert_eq!(font.weight, FontWeight::Normal);
    }

    #[test]
    fn line_defaults() {
        let line = LineStyle::default();
        assert_eq!(line.color().as_str(), "gray");
        assert_eq!(line.width(), 1.0);
    }

    #[test]
    fn control_size_never_negative() {
        let control = ControlStyle {
            size: Some(-4.0),
            ..Default::default()
        };
        assert_eq!(control.size(), 0.0);
    }

    #[test]
    fn numeric_weights_parse() {
        #[derive(Deserialize)]
        struct Weighted {
            w: FontWeight,
        }
        let parsed: Weighted = toml::from_str(r#"w = "300""#).unwrap();
        assert_eq!(parsed.w, FontWeight::Light);
        assert!(parsed.w.is_light());
    }
}
