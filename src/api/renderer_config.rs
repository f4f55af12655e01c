use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{LabelPaint, SeriesStyle};

/// Renderer configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own format. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRendererConfig {
    #[serde(default)]
    pub label_paint: LabelPaint,
    #[serde(default)]
    pub series_style: SeriesStyle,
    /// Number of evenly stepped Y-axis labels, min and max included.
    #[serde(default = "default_y_label_count")]
    pub y_label_count: usize,
    /// Maximum decimals shown in Y-axis labels; trailing zeros are trimmed.
    #[serde(default = "default_value_precision")]
    pub value_precision: u8,
}

impl Default for ChartRendererConfig {
    fn default() -> Self {
        Self {
            label_paint: LabelPaint::default(),
            series_style: SeriesStyle::default(),
            y_label_count: default_y_label_count(),
            value_precision: default_value_precision(),
        }
    }
}

impl ChartRendererConfig {
    #[must_use]
    pub fn with_label_paint(mut self, paint: LabelPaint) -> Self {
        self.label_paint = paint;
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, style: SeriesStyle) -> Self {
        self.series_style = style;
        self
    }

    #[must_use]
    pub fn with_y_label_count(mut self, count: usize) -> Self {
        self.y_label_count = count;
        self
    }

    #[must_use]
    pub fn with_value_precision(mut self, precision: u8) -> Self {
        self.value_precision = precision;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.y_label_count < 2 {
            return Err(ChartError::InvalidConfig(format!(
                "y label count must be >= 2, got {}",
                self.y_label_count
            )));
        }
        self.label_paint.validate()?;
        self.series_style.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_y_label_count() -> usize {
    5
}

fn default_value_precision() -> u8 {
    2
}
