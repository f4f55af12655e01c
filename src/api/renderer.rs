use tracing::{debug, trace, warn};

use crate::core::{Axis, ChartSet, Padding, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartAnimation, NoAnimation, Painter};

use super::label_format::format_axis_value;
use super::layout::{
    ChartLayout, LabelExtents, drawable_frames, project_set, x_axis_labels, y_axis_labels,
};
use super::renderer_config::ChartRendererConfig;

/// Lifecycle of one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// No series registered.
    Empty,
    /// Series registered since the last successful `pre_draw`.
    Pending,
    LaidOut,
    Drawn,
}

/// Turns registered series into painter calls.
///
/// One cycle is `add` → `pre_draw` → `draw`. `draw` may be repeated against
/// the same layout; `add` discards the layout until the next `pre_draw`.
pub struct ChartRenderer<P: Painter, A: ChartAnimation = NoAnimation> {
    painter: P,
    animation: A,
    config: ChartRendererConfig,
    sets: Vec<ChartSet>,
    value_range: Option<ValueRange>,
    layout: Option<ChartLayout>,
    drawn: bool,
}

impl<P: Painter> ChartRenderer<P, NoAnimation> {
    /// Renderer with default config and no animation.
    #[must_use]
    pub fn with_painter(painter: P) -> Self {
        Self::from_parts(painter, NoAnimation, ChartRendererConfig::default())
    }
}

impl<P: Painter, A: ChartAnimation> ChartRenderer<P, A> {
    pub fn new(painter: P, animation: A, config: ChartRendererConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(painter, animation, config))
    }

    fn from_parts(painter: P, animation: A, config: ChartRendererConfig) -> Self {
        Self {
            painter,
            animation,
            config,
            sets: Vec::new(),
            value_range: None,
            layout: None,
            drawn: false,
        }
    }

    /// Registers a series. Validation is deferred to `pre_draw`.
    pub fn add(&mut self, set: ChartSet) {
        self.value_range = ValueRange::extend(self.value_range, set.values());
        trace!(
            index = self.sets.len(),
            points = set.len(),
            "register series"
        );
        self.sets.push(set);
        self.invalidate_layout();
    }

    /// Drops every series and the committed layout.
    pub fn clear(&mut self) {
        self.sets.clear();
        self.value_range = None;
        self.invalidate_layout();
    }

    pub fn set_config(&mut self, config: ChartRendererConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        self.invalidate_layout();
        Ok(())
    }

    /// Measures labels and commits the layout used by the next `draw`.
    ///
    /// Fails with `InsufficientPoints` if any series has fewer than 2 points
    /// and commits nothing: no layout, no projected coordinates. A short series
    /// can only arrive through `add`, which already discarded any earlier
    /// layout, so after a failure `draw` issues no calls until a later
    /// `pre_draw` succeeds. Without series this is a no-op.
    pub fn pre_draw(
        &mut self,
        viewport: Viewport,
        padding: Padding,
        axis: Axis,
        border_spacing: f64,
    ) -> ChartResult<()> {
        if let Some((index, set)) = self
            .sets
            .iter()
            .enumerate()
            .find(|(_, set)| set.len() < 2)
        {
            warn!(index, len = set.len(), "series too short for layout");
            return Err(ChartError::InsufficientPoints {
                index,
                len: set.len(),
            });
        }
        let Some(value_range) = self.value_range else {
            trace!("pre_draw skipped: no series registered");
            return Ok(());
        };

        let x_texts = self.x_label_texts();
        let y_texts: Vec<String> = value_range
            .steps(self.config.y_label_count)
            .into_iter()
            .map(|value| format_axis_value(value, self.config.value_precision))
            .collect();

        let extents = LabelExtents::measure(
            &self.painter,
            axis,
            &x_texts,
            &y_texts,
            &self.config.label_paint,
        );
        let (outer, inner) = drawable_frames(viewport, padding, border_spacing, axis, extents);

        let x_labels = if axis.has_x() {
            x_axis_labels(&x_texts, outer, inner)
        } else {
            Vec::new()
        };
        let y_labels = if axis.has_y() {
            y_axis_labels(&y_texts, outer, inner, extents)
        } else {
            Vec::new()
        };

        let columns = x_texts.len();
        for set in &mut self.sets {
            project_set(set, inner, value_range, columns);
        }

        debug!(
            series = self.sets.len(),
            ?axis,
            inner_width = inner.width(),
            inner_height = inner.height(),
            x_labels = x_labels.len(),
            y_labels = y_labels.len(),
            "layout committed"
        );

        self.layout = Some(ChartLayout {
            axis,
            outer,
            inner,
            value_range,
            extents,
            x_labels,
            y_labels,
        });
        self.drawn = false;
        Ok(())
    }

    /// Issues painter calls for the committed layout: every series in
    /// insertion order, then X labels, then Y labels.
    ///
    /// Without a committed layout no painter call is made.
    pub fn draw(&mut self) -> ChartResult<()> {
        let Some(layout) = self.layout.as_ref() else {
            trace!("draw skipped: no layout committed");
            return Ok(());
        };

        for set in &self.sets {
            let animated = self.animation.animate(set);
            self.painter
                .draw_data(layout.inner, &animated, &self.config.series_style)?;
        }
        if layout.axis.has_x() {
            self.painter
                .draw_labels(&layout.x_labels, &self.config.label_paint)?;
        }
        if layout.axis.has_y() {
            self.painter
                .draw_labels(&layout.y_labels, &self.config.label_paint)?;
        }

        self.drawn = true;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        if self.sets.is_empty() {
            RenderState::Empty
        } else if self.layout.is_none() {
            RenderState::Pending
        } else if self.drawn {
            RenderState::Drawn
        } else {
            RenderState::LaidOut
        }
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    /// Registered series; screen coordinates reflect the last layout.
    #[must_use]
    pub fn sets(&self) -> &[ChartSet] {
        &self.sets
    }

    #[must_use]
    pub fn value_range(&self) -> Option<ValueRange> {
        self.value_range
    }

    #[must_use]
    pub fn config(&self) -> ChartRendererConfig {
        self.config
    }

    #[must_use]
    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    #[must_use]
    pub fn animation(&self) -> &A {
        &self.animation
    }

    #[must_use]
    pub fn into_painter(self) -> P {
        self.painter
    }

    fn invalidate_layout(&mut self) {
        self.layout = None;
        self.drawn = false;
    }

    /// Labels of the longest series, earliest one on ties.
    fn x_label_texts(&self) -> Vec<String> {
        self.sets
            .iter()
            .reduce(|longest, set| if set.len() > longest.len() { set } else { longest })
            .map(|set| set.entries.iter().map(|point| point.label.clone()).collect())
            .unwrap_or_default()
    }
}
