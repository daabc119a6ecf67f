use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as `#RRGGBB` (or `#RRGGBBAA` when translucent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_u32(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as f64 / 255.0,
            ((hex >> 8) & 0xFF) as f64 / 255.0,
            (hex & 0xFF) as f64 / 255.0,
        )
    }

    /// Parses `#RGB`, `#RRGGBB`, `#RRGGBBAA` or one of a few common color
    /// names (case-insensitive).
    pub fn parse(text: &str) -> ChartResult<Self> {
        let trimmed = text.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex)
                .ok_or_else(|| ChartError::InvalidData(format!("invalid hex color `{text}`")));
        }
        named_color(&trimmed.to_ascii_lowercase())
            .ok_or_else(|| ChartError::InvalidData(format!("unknown color `{text}`")))
    }

    /// Same color with `alpha` replacing the current alpha channel.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let [red, green, blue, alpha] =
            [self.red, self.green, self.blue, self.alpha].map(channel_to_u8);
        if alpha == u8::MAX {
            format!("#{red:02X}{green:02X}{blue:02X}")
        } else {
            format!("#{red:02X}{green:02X}{blue:02X}{alpha:02X}")
        }
    }

    /// Opaque `#RRGGBB` form, alpha dropped.
    #[must_use]
    pub fn to_rgb_hex(self) -> String {
        self.with_alpha(1.0).to_hex()
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|value| f64::from(value) / 255.0)
    };
    match hex.len() {
        3 => {
            let expand = |index: usize| {
                u8::from_str_radix(&hex[index..=index], 16)
                    .ok()
                    .map(|value| f64::from(value * 17) / 255.0)
            };
            Some(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Some(Color::rgba(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::from_rgb_u32(0xFF0000),
        "green" => Color::from_rgb_u32(0x008000),
        "blue" => Color::from_rgb_u32(0x0000FF),
        "gray" | "grey" => Color::from_rgb_u32(0x808080),
        "lightgray" | "lightgrey" => Color::from_rgb_u32(0xD3D3D3),
        "orange" => Color::from_rgb_u32(0xFFA500),
        "none" | "transparent" => Color::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(color)
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(text: &str) -> ChartResult<Self> {
        Color::parse(text)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStrokeStyle {
    /// On/off lengths in multiples of the stroke width; empty for solid.
    #[must_use]
    pub fn dash_pattern(self, stroke_width: f64) -> Vec<f64> {
        let unit = stroke_width.max(0.5);
        match self {
            LineStrokeStyle::Solid => Vec::new(),
            LineStrokeStyle::Dashed => vec![3.7 * unit, 1.6 * unit],
            LineStrokeStyle::Dotted => vec![unit, 1.65 * unit],
            LineStrokeStyle::DashDot => vec![6.4 * unit, 1.6 * unit, unit, 1.6 * unit],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    Diamond,
    Plus,
    Cross,
}

impl MarkerShape {
    /// Plus and cross are stroked; the others are filled.
    #[must_use]
    pub fn is_filled(self) -> bool {
        !matches!(self, MarkerShape::Plus | MarkerShape::Cross)
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Connected line through two or more points.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
    pub style: LineStrokeStyle,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(
        points: Vec<(f64, f64)>,
        stroke_width: f64,
        color: Color,
        style: LineStrokeStyle,
    ) -> Self {
        Self {
            points,
            stroke_width,
            color,
            style,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.is_empty() {
            return Err(ChartError::InvalidData(
                "polyline must contain at least one point".to_owned(),
            ));
        }
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled rectangle with optional border and rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, width: f64, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if [self.x, self.y, self.width, self.height]
            .iter()
            .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one label in pixel space.
///
/// Alignment is applied in the text's own frame, then the text is rotated
/// counter-clockwise by `rotation_deg` around `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation_deg: f64,
    pub weight: FontWeight,
    pub italic: bool,
    pub font_family: String,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align: TextVAlign::Top,
            rotation_deg: 0.0,
            weight: FontWeight::Normal,
            italic: false,
            font_family: "sans-serif".to_owned(),
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Series marker centred on a data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub shape: MarkerShape,
    /// Full marker width in pixels.
    pub size_px: f64,
    pub color: Color,
}

impl MarkerPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, shape: MarkerShape, size_px: f64, color: Color) -> Self {
        Self {
            x,
            y,
            shape,
            size_px,
            color,
        }
    }

    /// Outline of polygonal markers (square, triangle, diamond).
    #[must_use]
    pub fn polygon_points(self) -> Option<Vec<(f64, f64)>> {
        let half = self.size_px * 0.5;
        let (x, y) = (self.x, self.y);
        match self.shape {
            MarkerShape::Square => Some(vec![
                (x - half, y - half),
                (x + half, y - half),
                (x + half, y + half),
                (x - half, y + half),
            ]),
            MarkerShape::Triangle => Some(vec![
                (x, y - half),
                (x + half, y + half),
                (x - half, y + half),
            ]),
            MarkerShape::Diamond => Some(vec![
                (x, y - half),
                (x + half, y),
                (x, y + half),
                (x - half, y),
            ]),
            MarkerShape::Circle | MarkerShape::Plus | MarkerShape::Cross => None,
        }
    }

    /// Stroke segments of line markers (plus, cross).
    #[must_use]
    pub fn stroke_segments(self) -> Option<[(f64, f64, f64, f64); 2]> {
        let half = self.size_px * 0.5;
        let (x, y) = (self.x, self.y);
        match self.shape {
            MarkerShape::Plus => Some([(x - half, y, x + half, y), (x, y - half, x, y + half)]),
            MarkerShape::Cross => Some([
                (x - half, y - half, x + half, y + half),
                (x - half, y + half, x + half, y - half),
            ]),
            _ => None,
        }
    }

    /// Stroke width used for plus and cross markers.
    #[must_use]
    pub fn stroke_width(self) -> f64 {
        (self.size_px / 6.0).max(1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "marker coordinates must be finite".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke_width(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "line stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Color, LineStrokeStyle};

    #[test]
    fn hex_colors_parse_and_print() {
        let color = Color::parse("#1f77b4").expect("valid hex");
        assert_eq!(color, Color::from_rgb_u32(0x1F77B4));
        assert_eq!(color.to_hex(), "#1F77B4");
        assert_eq!(Color::parse("#fff").expect("short hex"), Color::WHITE);
        assert_eq!(color.with_alpha(0.5).to_hex(), "#1F77B480");
    }

    #[test]
    fn named_and_invalid_colors() {
        assert_eq!(Color::parse("Black").expect("named"), Color::BLACK);
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
        assert!(Color::parse("chartreuse-ish").is_err());
    }

    #[test]
    fn colors_serialize_as_hex_strings() {
        let json = serde_json::to_string(&Color::from_rgb_u32(0xFF0000)).expect("serialize");
        assert_eq!(json, "\"#FF0000\"");
        let parsed: Color = serde_json::from_str("\"#00ff00\"").expect("deserialize");
        assert_eq!(parsed, Color::from_rgb_u32(0x00FF00));
    }

    #[test]
    fn solid_lines_have_no_dash_pattern() {
        assert!(LineStrokeStyle::Solid.dash_pattern(2.0).is_empty());
        assert_eq!(LineStrokeStyle::Dashed.dash_pattern(2.0).len(), 2);
        assert_eq!(LineStrokeStyle::DashDot.dash_pattern(2.0).len(), 4);
    }
}
