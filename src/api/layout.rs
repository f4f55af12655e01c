//! Axis-label layout.
//!
//! Pure geometry shared by `ChartRenderer::pre_draw`: label extents are
//! measured once through the painter, then the drawable frame, label
//! positions and point projections are derived from them without further
//! painter queries.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, ChartLabel, ChartSet, Frame, Padding, ValueRange, Viewport};
use crate::render::{LabelPaint, Painter};

/// Label extents measured through the painter. Disabled axes measure zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelExtents {
    pub first_x_width: f64,
    pub last_x_width: f64,
    pub x_height: f64,
    /// Widest Y label.
    pub y_width: f64,
    pub y_height: f64,
}

impl LabelExtents {
    /// Queries only the axes enabled by `axis`; `Axis::None` issues no
    /// painter calls at all.
    pub fn measure<P: Painter + ?Sized>(
        painter: &P,
        axis: Axis,
        x_texts: &[String],
        y_texts: &[String],
        paint: &LabelPaint,
    ) -> Self {
        let mut extents = Self::default();
        if axis == Axis::None {
            return extents;
        }

        let height = painter.measure_label_height(paint);
        if axis.has_x() {
            let widths: Vec<f64> = x_texts
                .iter()
                .map(|text| painter.measure_label_width(text, paint))
                .collect();
            extents.first_x_width = widths.first().copied().unwrap_or(0.0);
            extents.last_x_width = widths.last().copied().unwrap_or(0.0);
            extents.x_height = height;
        }
        if axis.has_y() {
            extents.y_width = y_texts
                .iter()
                .map(|text| painter.measure_label_width(text, paint))
                .fold(0.0, f64::max);
            extents.y_height = height;
        }
        extents
    }
}

/// Committed result of one `pre_draw` pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub axis: Axis,
    /// Canvas minus padding and border spacing; labels live here.
    pub outer: Frame,
    /// Drawable area the data is projected into.
    pub inner: Frame,
    pub value_range: ValueRange,
    pub extents: LabelExtents,
    pub x_labels: Vec<ChartLabel>,
    pub y_labels: Vec<ChartLabel>,
}

/// Returns `(outer, inner)` frames.
///
/// The inner frame keeps the outermost labels inside the outer frame: X
/// labels are centered on their column so the first/last ones need half their
/// width, Y labels are vertically centered on their value so the top one needs
/// half the label height, and the Y label column and X label row are reserved
/// in full.
///
/// Insets that do not fit collapse the frame onto its far edge (see
/// `Frame::inset`), so label and point order is never reversed on small
/// canvases.
#[must_use]
pub fn drawable_frames(
    viewport: Viewport,
    padding: Padding,
    border_spacing: f64,
    axis: Axis,
    extents: LabelExtents,
) -> (Frame, Frame) {
    let outer = Frame::from_viewport(viewport)
        .inset(padding)
        .inset(Padding::uniform(border_spacing));

    let mut insets = Padding::zero();
    if axis.has_x() {
        insets.left += extents.first_x_width / 2.0;
        insets.right += extents.last_x_width / 2.0;
        insets.bottom = insets.bottom.max(extents.x_height);
    }
    if axis.has_y() {
        insets.left += extents.y_width;
        insets.top += extents.y_height / 2.0;
        insets.bottom = insets.bottom.max(extents.y_height / 2.0);
    }

    (outer, outer.inset(insets))
}

/// Horizontal position of column `index` out of `columns`.
#[must_use]
pub fn column_x(inner: Frame, columns: usize, index: usize) -> f64 {
    if columns < 2 {
        return inner.left;
    }
    inner.left + inner.width() * index as f64 / (columns - 1) as f64
}

/// Vertical position of `value`; larger values sit higher (smaller Y).
#[must_use]
pub fn value_y(inner: Frame, range: ValueRange, value: f64) -> f64 {
    inner.bottom - range.normalize(value) * inner.height()
}

/// X labels evenly spread across the drawable width, baseline on the bottom
/// edge of the outer frame.
#[must_use]
pub fn x_axis_labels(texts: &[String], outer: Frame, inner: Frame) -> Vec<ChartLabel> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            ChartLabel::new(
                text.clone(),
                column_x(inner, texts.len(), index),
                outer.bottom,
            )
        })
        .collect()
}

/// Y labels evenly spread across the drawable height, first (lowest value) at
/// the bottom. Each baseline sits half a label below its grid line so the
/// text is vertically centered on it.
#[must_use]
pub fn y_axis_labels(
    texts: &[String],
    outer: Frame,
    inner: Frame,
    extents: LabelExtents,
) -> Vec<ChartLabel> {
    let x = outer.left + extents.y_width / 2.0;
    let rows = texts.len();
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let grid_y = if rows < 2 {
                inner.bottom
            } else {
                inner.bottom - inner.height() * index as f64 / (rows - 1) as f64
            };
            ChartLabel::new(text.clone(), x, grid_y + extents.y_height / 2.0)
        })
        .collect()
}

/// Writes screen coordinates into every point of `set`.
pub fn project_set(set: &mut ChartSet, inner: Frame, range: ValueRange, columns: usize) {
    for (index, point) in set.entries.iter_mut().enumerate() {
        point.screen_x = column_x(inner, columns, index);
        point.screen_y = value_y(inner, range, point.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_axes_leave_outer_frame_untouched() {
        let extents = LabelExtents {
            first_x_width: 20.0,
            last_x_width: 20.0,
            x_height: 10.0,
            y_width: 30.0,
            y_height: 10.0,
        };
        let (outer, inner) = drawable_frames(
            Viewport::new(200, 100),
            Padding::new(1.0, 2.0, 3.0, 4.0),
            5.0,
            Axis::None,
            extents,
        );

        assert_eq!(outer, Frame::from_ltrb(6.0, 7.0, 192.0, 91.0));
        assert_eq!(inner, outer);
    }

    #[test]
    fn xy_reserves_label_column_and_row() {
        let extents = LabelExtents {
            first_x_width: 20.0,
            last_x_width: 40.0,
            x_height: 10.0,
            y_width: 30.0,
            y_height: 10.0,
        };
        let (outer, inner) = drawable_frames(
            Viewport::new(200, 100),
            Padding::zero(),
            0.0,
            Axis::XY,
            extents,
        );

        assert_eq!(outer, Frame::from_ltrb(0.0, 0.0, 200.0, 100.0));
        assert_eq!(inner, Frame::from_ltrb(40.0, 5.0, 180.0, 90.0));
    }

    #[test]
    fn oversized_insets_collapse_instead_of_inverting() {
        let extents = LabelExtents {
            first_x_width: 20.0,
            last_x_width: 20.0,
            x_height: 20.0,
            y_width: 20.0,
            y_height: 20.0,
        };
        let (outer, inner) = drawable_frames(
            Viewport::new(10, 10),
            Padding::uniform(2.0),
            1.0,
            Axis::XY,
            extents,
        );

        assert_eq!(outer, Frame::from_ltrb(3.0, 3.0, 7.0, 7.0));
        assert_eq!(inner, Frame::from_ltrb(7.0, 7.0, 7.0, 7.0));
        assert_eq!(value_y(inner, ValueRange::new(0.0, 1.0), 1.0), 7.0);
    }

    #[test]
    fn single_column_collapses_to_left_edge() {
        let inner = Frame::from_ltrb(10.0, 0.0, 50.0, 10.0);
        assert_eq!(column_x(inner, 1, 0), 10.0);
        assert_eq!(column_x(inner, 5, 4), 50.0);
        assert_eq!(column_x(inner, 5, 2), 30.0);
    }

    #[test]
    fn degenerate_range_maps_to_bottom() {
        let inner = Frame::from_ltrb(0.0, 0.0, 10.0, 80.0);
        let range = ValueRange::single(3.0);
        assert_eq!(value_y(inner, range, 3.0), 80.0);
    }
}
