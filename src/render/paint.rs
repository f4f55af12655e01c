use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Straight-alpha RGBA, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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

    #[must_use]
    pub const fn channels(self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

/// Text settings used both to measure and to draw axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPaint {
    pub font_size_px: f64,
    pub color: Color,
}

impl Default for LabelPaint {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            color: Color::rgb(0.35, 0.35, 0.38),
        }
    }
}

impl LabelPaint {
    pub fn validate(self) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        validate_color("label color", self.color)
    }
}

/// Stroke settings passed with every data draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub line_color: Color,
    pub stroke_width: f64,
    /// Radius of the dot drawn on each point; `0.0` disables dots.
    #[serde(default)]
    pub dot_radius: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0.16, 0.38, 1.0),
            stroke_width: 2.0,
            dot_radius: 0.0,
        }
    }
}

impl SeriesStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "series stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.dot_radius.is_finite() || self.dot_radius < 0.0 {
            return Err(ChartError::InvalidConfig(
                "series dot radius must be finite and >= 0".to_owned(),
            ));
        }
        validate_color("series line color", self.line_color)
    }
}

fn validate_color(name: &str, color: Color) -> ChartResult<()> {
    if color
        .channels()
        .iter()
        .all(|channel| (0.0..=1.0).contains(channel))
    {
        return Ok(());
    }
    Err(ChartError::InvalidConfig(format!(
        "{name} channels must be in [0, 1], got {:?}",
        color.channels()
    )))
}
