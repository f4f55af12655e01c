use crate::core::{ChartLabel, ChartSet, Frame, Viewport};
use crate::error::ChartResult;
use crate::render::{
    FrameItem, HeuristicTextMeasurer, LabelPaint, Painter, PlacedLabel, RenderFrame, Renderer,
    SeriesPath, SeriesStyle, TextMeasurer,
};

/// Painter that records draw calls into a `RenderFrame`, measuring labels
/// with `M`.
///
/// Frames accumulate until `present` hands them to a `Renderer`, so one
/// `ChartRenderer::draw` maps to one backend frame.
#[derive(Debug)]
pub struct FramePainter<M: TextMeasurer = HeuristicTextMeasurer> {
    measurer: M,
    frame: RenderFrame,
}

impl FramePainter<HeuristicTextMeasurer> {
    #[must_use]
    pub fn heuristic(viewport: Viewport) -> Self {
        Self::new(viewport, HeuristicTextMeasurer)
    }
}

impl<M: TextMeasurer> FramePainter<M> {
    #[must_use]
    pub fn new(viewport: Viewport, measurer: M) -> Self {
        Self {
            measurer,
            frame: RenderFrame::new(viewport),
        }
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Discards pending items and retargets the next frame.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.frame = RenderFrame::new(viewport);
    }

    /// Returns the pending frame and starts an empty one with the same viewport.
    pub fn take_frame(&mut self) -> RenderFrame {
        let viewport = self.frame.viewport;
        std::mem::replace(&mut self.frame, RenderFrame::new(viewport))
    }

    pub fn present<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.take_frame();
        renderer.render(&frame)
    }
}

impl<M: TextMeasurer> Painter for FramePainter<M> {
    fn measure_label_width(&self, text: &str, paint: &LabelPaint) -> f64 {
        self.measurer.text_width(text, paint)
    }

    fn measure_label_height(&self, paint: &LabelPaint) -> f64 {
        self.measurer.line_height(paint)
    }

    fn draw_data(&mut self, _frame: Frame, set: &ChartSet, style: &SeriesStyle) -> ChartResult<()> {
        self.frame.push(FrameItem::Series(SeriesPath {
            points: set
                .entries
                .iter()
                .map(|point| (point.screen_x, point.screen_y))
                .collect(),
            style: *style,
        }));
        Ok(())
    }

    fn draw_labels(&mut self, labels: &[ChartLabel], paint: &LabelPaint) -> ChartResult<()> {
        let height = self.measurer.line_height(paint);
        for label in labels.iter().filter(|label| !label.text.is_empty()) {
            self.frame.push(FrameItem::Label(PlacedLabel {
                text: label.text.clone(),
                center_x: label.screen_x,
                baseline_y: label.screen_y,
                width: self.measurer.text_width(&label.text, paint),
                height,
                paint: *paint,
            }));
        }
        Ok(())
    }
}
