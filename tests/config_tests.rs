use chart_layout::api::{ChartRenderer, ChartRendererConfig};
use chart_layout::core::{Axis, ChartSet, Padding, Viewport};
use chart_layout::render::{Color, LabelPaint, NoAnimation, RecordingPainter, SeriesStyle};
use chart_layout::ChartError;

#[test]
fn default_config_is_valid() {
    let config = ChartRendererConfig::default();
    config.validate().expect("default config");
    assert_eq!(config.y_label_count, 5);
    assert_eq!(config.value_precision, 2);
}

#[test]
fn config_json_roundtrip_preserves_every_field() {
    let config = ChartRendererConfig::default()
        .with_label_paint(LabelPaint {
            font_size_px: 14.0,
            color: Color::rgb(0.1, 0.2, 0.3),
        })
        .with_series_style(SeriesStyle {
            line_color: Color::rgba(0.9, 0.1, 0.1, 0.5),
            stroke_width: 3.5,
            dot_radius: 4.0,
        })
        .with_y_label_count(7)
        .with_value_precision(1);

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartRendererConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn missing_json_fields_fall_back_to_defaults() {
    let restored = ChartRendererConfig::from_json_str("{}").expect("parse");
    assert_eq!(restored, ChartRendererConfig::default());

    let restored =
        ChartRendererConfig::from_json_str(r#"{ "y_label_count": 3 }"#).expect("parse");
    assert_eq!(restored.y_label_count, 3);
    assert_eq!(restored.series_style, SeriesStyle::default());
}

#[test]
fn malformed_json_is_rejected() {
    let err = ChartRendererConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn json_with_invalid_values_is_rejected() {
    let err = ChartRendererConfig::from_json_str(r#"{ "y_label_count": 1 }"#)
        .expect_err("too few labels");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn invalid_paint_and_style_are_rejected() {
    let bad_font = ChartRendererConfig::default().with_label_paint(LabelPaint {
        font_size_px: 0.0,
        ..LabelPaint::default()
    });
    assert!(matches!(
        bad_font.validate(),
        Err(ChartError::InvalidConfig(_))
    ));

    let bad_color = ChartRendererConfig::default().with_series_style(SeriesStyle {
        line_color: Color::rgb(1.5, 0.0, 0.0),
        ..SeriesStyle::default()
    });
    assert!(matches!(
        bad_color.validate(),
        Err(ChartError::InvalidConfig(_))
    ));

    let bad_stroke = ChartRendererConfig::default().with_series_style(SeriesStyle {
        stroke_width: f64::NAN,
        ..SeriesStyle::default()
    });
    assert!(bad_stroke.validate().is_err());

    let bad_dot = ChartRendererConfig::default().with_series_style(SeriesStyle {
        dot_radius: -1.0,
        ..SeriesStyle::default()
    });
    assert!(bad_dot.validate().is_err());
}

#[test]
fn renderer_construction_validates_config() {
    let config = ChartRendererConfig::default().with_y_label_count(0);
    let result = ChartRenderer::new(RecordingPainter::default(), NoAnimation, config);
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn y_label_count_and_precision_shape_y_labels() {
    let config = ChartRendererConfig::default()
        .with_y_label_count(3)
        .with_value_precision(1);
    let mut renderer =
        ChartRenderer::new(RecordingPainter::default(), NoAnimation, config).expect("renderer");
    renderer.add(ChartSet::new().with_point("a", 0.0).with_point("b", 0.6));
    renderer
        .pre_draw(Viewport::new(100, 100), Padding::zero(), Axis::Y, 0.0)
        .expect("pre_draw");

    let layout = renderer.layout().expect("layout");
    let texts: Vec<&str> = layout.y_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["0", "0.3", "0.6"]);
}
