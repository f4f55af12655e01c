use chart_layout::ChartError;
use chart_layout::api::ChartRenderer;
use chart_layout::core::{Axis, ChartSet, Padding, Point, Viewport};
use chart_layout::render::RecordingPainter;
use proptest::prelude::*;

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![
        Just(Axis::None),
        Just(Axis::X),
        Just(Axis::Y),
        Just(Axis::XY),
    ]
}

fn series(values: &[f64]) -> ChartSet {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| Point::new(format!("p{i}"), *value))
        .collect()
}

proptest! {
    #[test]
    fn labels_stay_ordered_and_points_stay_inside_drawable_area(
        width in 0u32..2_000,
        height in 0u32..2_000,
        pad in 0.0f64..400.0,
        border in 0.0f64..100.0,
        label_width in 0.0f64..300.0,
        label_height in 0.0f64..300.0,
        axis in axis_strategy(),
        values in prop::collection::vec(-1_000.0f64..1_000.0, 2..30)
    ) {
        let painter = RecordingPainter::with_label_metrics(label_width, label_height);
        let mut renderer = ChartRenderer::with_painter(painter);
        renderer.add(series(&values));
        renderer
            .pre_draw(Viewport::new(width, height), Padding::uniform(pad), axis, border)
            .expect("pre_draw");

        let layout = renderer.layout().expect("layout");
        prop_assert_eq!(layout.x_labels.is_empty(), !axis.has_x());
        prop_assert_eq!(layout.y_labels.is_empty(), !axis.has_y());

        let (outer, inner) = (layout.outer, layout.inner);
        prop_assert!(outer.width() >= 0.0 && outer.height() >= 0.0);
        prop_assert!(inner.width() >= 0.0 && inner.height() >= 0.0);
        prop_assert!(inner.left >= outer.left && inner.right <= outer.right);
        prop_assert!(inner.top >= outer.top && inner.bottom <= outer.bottom);

        for pair in layout.x_labels.windows(2) {
            prop_assert!(pair[0].screen_x <= pair[1].screen_x);
            if inner.width() > 1.0 {
                prop_assert!(pair[0].screen_x < pair[1].screen_x);
            }
        }
        for pair in layout.y_labels.windows(2) {
            prop_assert!(pair[0].screen_y >= pair[1].screen_y);
            if inner.height() > 1.0 {
                prop_assert!(pair[0].screen_y > pair[1].screen_y);
            }
        }

        if inner.width() > 0.0 {
            if let Some(last) = layout.x_labels.last() {
                prop_assert!(last.screen_x + label_width / 2.0 <= f64::from(width) + 1e-9);
            }
        }
        if inner.height() > 0.0 {
            if let Some(top) = layout.y_labels.last() {
                prop_assert!(top.screen_y - label_height >= -1e-9);
            }
        }

        let points = &renderer.sets()[0].entries;
        for point in points {
            prop_assert!(point.screen_x >= inner.left - 1e-9);
            prop_assert!(point.screen_x <= inner.right + 1e-9);
            prop_assert!(point.screen_y >= inner.top - 1e-9);
            prop_assert!(point.screen_y <= inner.bottom + 1e-9);
        }
        for pair in points.windows(2) {
            prop_assert!(pair[0].screen_x <= pair[1].screen_x);
        }
        for a in points {
            for b in points {
                if a.value > b.value {
                    prop_assert!(a.screen_y <= b.screen_y);
                }
            }
        }
    }

    #[test]
    fn short_series_always_fail_layout(
        axis in axis_strategy(),
        pad in 0.0f64..50.0,
        values in prop::collection::vec(-10.0f64..10.0, 0..2)
    ) {
        let mut renderer = ChartRenderer::with_painter(RecordingPainter::default());
        renderer.add(series(&[1.0, 2.0]));
        renderer.add(series(&values));

        let result = renderer.pre_draw(Viewport::new(300, 300), Padding::uniform(pad), axis, 0.0);
        let is_rejected = matches!(
            result,
            Err(ChartError::InsufficientPoints { index: 1, len }) if len == values.len()
        );
        prop_assert!(is_rejected);
        prop_assert!(renderer.layout().is_none());
    }

    #[test]
    fn larger_values_never_sit_lower(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 2..40)
    ) {
        let mut renderer = ChartRenderer::with_painter(RecordingPainter::default());
        renderer.add(series(&values));
        renderer
            .pre_draw(Viewport::new(800, 600), Padding::zero(), Axis::None, 0.0)
            .expect("pre_draw");

        let points = &renderer.sets()[0].entries;
        for a in points {
            for b in points {
                if a.value > b.value {
                    prop_assert!(a.screen_y <= b.screen_y);
                }
            }
        }
    }
}
