use std::cell::Cell;

use crate::core::{ChartLabel, ChartSet, Frame};
use crate::error::ChartResult;
use crate::render::{LabelPaint, Painter, SeriesStyle};

/// One draw call observed by `RecordingPainter`.
#[derive(Debug, Clone, PartialEq)]
pub enum PainterCall {
    DrawData { frame: Frame, set: ChartSet },
    DrawLabels { labels: Vec<ChartLabel> },
}

/// Headless painter with fixed label metrics that keeps every draw call.
///
/// Measurement queries are counted so callers can check which axes were
/// measured during layout.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub label_width: f64,
    pub label_height: f64,
    calls: Vec<PainterCall>,
    width_queries: Cell<usize>,
    height_queries: Cell<usize>,
}

impl RecordingPainter {
    /// Every label measures `label_width` × `label_height`.
    #[must_use]
    pub fn with_label_metrics(label_width: f64, label_height: f64) -> Self {
        Self {
            label_width,
            label_height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[PainterCall] {
        &self.calls
    }

    /// Sets passed to `draw_data`, in call order.
    #[must_use]
    pub fn drawn_sets(&self) -> Vec<&ChartSet> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PainterCall::DrawData { set, .. } => Some(set),
                PainterCall::DrawLabels { .. } => None,
            })
            .collect()
    }

    /// Label lists passed to `draw_labels`, in call order.
    #[must_use]
    pub fn drawn_labels(&self) -> Vec<&[ChartLabel]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PainterCall::DrawLabels { labels } => Some(labels.as_slice()),
                PainterCall::DrawData { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub fn width_queries(&self) -> usize {
        self.width_queries.get()
    }

    #[must_use]
    pub fn height_queries(&self) -> usize {
        self.height_queries.get()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.width_queries.set(0);
        self.height_queries.set(0);
    }
}

impl Painter for RecordingPainter {
    fn measure_label_width(&self, _text: &str, _paint: &LabelPaint) -> f64 {
        self.width_queries.set(self.width_queries.get() + 1);
        self.label_width
    }

    fn measure_label_height(&self, _paint: &LabelPaint) -> f64 {
        self.height_queries.set(self.height_queries.get() + 1);
        self.label_height
    }

    fn draw_data(&mut self, frame: Frame, set: &ChartSet, _style: &SeriesStyle) -> ChartResult<()> {
        self.calls.push(PainterCall::DrawData {
            frame,
            set: set.clone(),
        });
        Ok(())
    }

    fn draw_labels(&mut self, labels: &[ChartLabel], _paint: &LabelPaint) -> ChartResult<()> {
        self.calls.push(PainterCall::DrawLabels {
            labels: labels.to_vec(),
        });
        Ok(())
    }
}
