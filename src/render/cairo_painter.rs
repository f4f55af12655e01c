use std::f64::consts::TAU;

use cairo::Context;

use crate::core::{ChartLabel, ChartSet, Frame};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LabelPaint, PangoTextMeasurer, Painter, SeriesStyle, TextMeasurer};

/// Counters for what a `CairoPainter` has put on its surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CairoPaintStats {
    pub series_stroked: usize,
    pub dots_filled: usize,
    pub labels_shown: usize,
}

/// Painter drawing straight onto a Cairo context.
///
/// Labels are measured and shown through the same Pango layouts, so the
/// extents used by layout match the glyphs on the surface.
#[derive(Debug)]
pub struct CairoPainter {
    context: Context,
    measurer: PangoTextMeasurer,
    stats: CairoPaintStats,
}

impl CairoPainter {
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            measurer: PangoTextMeasurer::from_context(context.clone()),
            context,
            stats: CairoPaintStats::default(),
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn stats(&self) -> CairoPaintStats {
        self.stats
    }

    fn set_source(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl Painter for CairoPainter {
    fn measure_label_width(&self, text: &str, paint: &LabelPaint) -> f64 {
        self.measurer.text_width(text, paint)
    }

    fn measure_label_height(&self, paint: &LabelPaint) -> f64 {
        self.measurer.line_height(paint)
    }

    fn draw_data(&mut self, _frame: Frame, set: &ChartSet, style: &SeriesStyle) -> ChartResult<()> {
        let Some((first, rest)) = set.entries.split_first() else {
            return Ok(());
        };

        self.set_source(style.line_color);
        self.context.set_line_width(style.stroke_width);
        self.context.move_to(first.screen_x, first.screen_y);
        for point in rest {
            self.context.line_to(point.screen_x, point.screen_y);
        }
        self.context
            .stroke()
            .map_err(|err| map_cairo_error("series stroke", err))?;
        self.stats.series_stroked += 1;

        if style.dot_radius > 0.0 {
            for point in &set.entries {
                self.context.new_sub_path();
                self.context
                    .arc(point.screen_x, point.screen_y, style.dot_radius, 0.0, TAU);
            }
            self.context
                .fill()
                .map_err(|err| map_cairo_error("series dots", err))?;
            self.stats.dots_filled += set.entries.len();
        }
        Ok(())
    }

    fn draw_labels(&mut self, labels: &[ChartLabel], paint: &LabelPaint) -> ChartResult<()> {
        self.set_source(paint.color);
        for label in labels.iter().filter(|label| !label.text.is_empty()) {
            let layout = self.measurer.layout(&label.text, paint);
            let (width, _) = layout.pixel_size();
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            // Pango places the layout by its top-left corner.
            self.context.move_to(
                label.screen_x - f64::from(width) / 2.0,
                label.screen_y - baseline,
            );
            pangocairo::functions::show_layout(&self.context, &layout);
            self.stats.labels_shown += 1;
        }
        self.context
            .status()
            .map_err(|err| map_cairo_error("label text", err))
    }
}

fn map_cairo_error(stage: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("cairo {stage} failed: {err}"))
}
