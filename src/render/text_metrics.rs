use crate::render::LabelPaint;

/// Text measurement used by `FramePainter` when laying out labels.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, paint: &LabelPaint) -> f64;

    fn line_height(&self, paint: &LabelPaint) -> f64;
}

/// Font-free estimate: 0.6 em per character, 1 em tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn text_width(&self, text: &str, paint: &LabelPaint) -> f64 {
        0.6 * paint.font_size_px * text.chars().count() as f64
    }

    fn line_height(&self, paint: &LabelPaint) -> f64 {
        paint.font_size_px
    }
}

#[cfg(feature = "cairo-backend")]
pub use pango_measurer::PangoTextMeasurer;

#[cfg(feature = "cairo-backend")]
mod pango_measurer {
    use cairo::{Context, Format, ImageSurface};
    use pango::FontDescription;

    use super::TextMeasurer;
    use crate::error::{ChartError, ChartResult};
    use crate::render::LabelPaint;

    /// Measures text through a Pango layout on a Cairo context, the same
    /// path `CairoPainter` draws labels with.
    #[derive(Debug)]
    pub struct PangoTextMeasurer {
        context: Context,
    }

    impl PangoTextMeasurer {
        /// Measures against a private 1×1 image surface.
        pub fn new() -> ChartResult<Self> {
            let surface = ImageSurface::create(Format::ARgb32, 1, 1).map_err(|err| {
                ChartError::InvalidData(format!("failed to create measuring surface: {err}"))
            })?;
            let context = Context::new(&surface).map_err(|err| {
                ChartError::InvalidData(format!("failed to create measuring context: {err}"))
            })?;
            Ok(Self { context })
        }

        /// Measures with the font options of an existing drawing context.
        #[must_use]
        pub fn from_context(context: Context) -> Self {
            Self { context }
        }

        /// Pango layout for `text` in `paint`'s font on the measuring context.
        #[must_use]
        pub fn layout(&self, text: &str, paint: &LabelPaint) -> pango::Layout {
            let layout = pangocairo::functions::create_layout(&self.context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", paint.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(text);
            layout
        }

        fn pixel_size(&self, text: &str, paint: &LabelPaint) -> (i32, i32) {
            self.layout(text, paint).pixel_size()
        }
    }

    impl TextMeasurer for PangoTextMeasurer {
        fn text_width(&self, text: &str, paint: &LabelPaint) -> f64 {
            f64::from(self.pixel_size(text, paint).0)
        }

        fn line_height(&self, paint: &LabelPaint) -> f64 {
            f64::from(self.pixel_size("0", paint).1)
        }
    }
}
