use crate::core::{ChartLabel, ChartSet, Frame};
use crate::error::ChartResult;
use crate::render::{LabelPaint, SeriesStyle};

/// Drawing-surface capability consumed by `ChartRenderer`.
///
/// Measurements are trusted as returned. Draw calls arrive in back-to-front
/// order: every data set first, then X labels, then Y labels.
pub trait Painter {
    fn measure_label_width(&self, text: &str, paint: &LabelPaint) -> f64;

    fn measure_label_height(&self, paint: &LabelPaint) -> f64;

    /// `frame` is the drawable area the set was projected into.
    fn draw_data(&mut self, frame: Frame, set: &ChartSet, style: &SeriesStyle) -> ChartResult<()>;

    fn draw_labels(&mut self, labels: &[ChartLabel], paint: &LabelPaint) -> ChartResult<()>;
}

impl<P: Painter + ?Sized> Painter for &mut P {
    fn measure_label_width(&self, text: &str, paint: &LabelPaint) -> f64 {
        (**self).measure_label_width(text, paint)
    }

    fn measure_label_height(&self, paint: &LabelPaint) -> f64 {
        (**self).measure_label_height(paint)
    }

    fn draw_data(&mut self, frame: Frame, set: &ChartSet, style: &SeriesStyle) -> ChartResult<()> {
        (**self).draw_data(frame, set, style)
    }

    fn draw_labels(&mut self, labels: &[ChartLabel], paint: &LabelPaint) -> ChartResult<()> {
        (**self).draw_labels(labels, paint)
    }
}
