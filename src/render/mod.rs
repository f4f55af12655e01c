mod animation;
mod frame;
mod frame_painter;
mod null_renderer;
mod paint;
mod painter;
mod recording_painter;
mod text_metrics;

pub use animation::{ChartAnimation, NoAnimation};
pub use frame::{FrameItem, PlacedLabel, RenderFrame, SeriesPath};
pub use frame_painter::FramePainter;
pub use null_renderer::NullRenderer;
pub use paint::{Color, LabelPaint, SeriesStyle};
pub use painter::Painter;
pub use recording_painter::{PainterCall, RecordingPainter};
pub use text_metrics::{HeuristicTextMeasurer, TextMeasurer};

#[cfg(feature = "cairo-backend")]
pub use text_metrics::PangoTextMeasurer;

use crate::error::ChartResult;

/// Backend consuming the frames recorded by `FramePainter`.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_painter;
#[cfg(feature = "cairo-backend")]
pub use cairo_painter::{CairoPaintStats, CairoPainter};
