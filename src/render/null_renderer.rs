use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless backend: validates each frame and keeps counts of what it would
/// have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_segment_count: usize,
    pub last_dot_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_segment_count = frame.segment_count();
        self.last_dot_count = frame.dot_count();
        self.last_label_count = frame.labels().count();
        Ok(())
    }
}
