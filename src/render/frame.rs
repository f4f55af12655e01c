use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LabelPaint, SeriesStyle};

/// Projected series as handed to `Painter::draw_data`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPath {
    /// `(screen_x, screen_y)` per point, in series order.
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl SeriesPath {
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// One dot per point when the style enables them.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        if self.style.dot_radius > 0.0 {
            self.points.len()
        } else {
            0
        }
    }
}

/// Measured axis label, anchored like `ChartLabel`: horizontally centered on
/// `center_x`, baseline on `baseline_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub center_x: f64,
    pub baseline_y: f64,
    pub width: f64,
    pub height: f64,
    pub paint: LabelPaint,
}

impl PlacedLabel {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.baseline_y - self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameItem {
    Series(SeriesPath),
    Label(PlacedLabel),
}

/// Draw calls of one `ChartRenderer::draw` pass, in call order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    items: Vec<FrameItem>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: FrameItem) {
        self.items.push(item);
    }

    #[must_use]
    pub fn items(&self) -> &[FrameItem] {
        &self.items
    }

    pub fn series(&self) -> impl Iterator<Item = &SeriesPath> + '_ {
        self.items.iter().filter_map(|item| match item {
            FrameItem::Series(path) => Some(path),
            FrameItem::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &PlacedLabel> + '_ {
        self.items.iter().filter_map(|item| match item {
            FrameItem::Label(label) => Some(label),
            FrameItem::Series(_) => None,
        })
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.series().map(SeriesPath::segment_count).sum()
    }

    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.series().map(SeriesPath::dot_count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rejects empty viewports, non-finite geometry and blank labels.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (index, item) in self.items.iter().enumerate() {
            match item {
                FrameItem::Series(path) => {
                    if path
                        .points
                        .iter()
                        .any(|(x, y)| !x.is_finite() || !y.is_finite())
                    {
                        return Err(ChartError::InvalidData(format!(
                            "series at frame item {index} has non-finite points"
                        )));
                    }
                }
                FrameItem::Label(label) => {
                    if label.text.is_empty() {
                        return Err(ChartError::InvalidData(format!(
                            "label at frame item {index} is empty"
                        )));
                    }
                    if !label.center_x.is_finite() || !label.baseline_y.is_finite() {
                        return Err(ChartError::InvalidData(format!(
                            "label `{}` has a non-finite anchor",
                            label.text
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
