/// Formats a Y-axis value with at most `precision` decimals.
///
/// Trailing zeros and a dangling decimal point are dropped, and negative zero
/// prints as `0`.
#[must_use]
pub fn format_axis_value(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let mut text = format!("{value:.prec$}", prec = usize::from(precision));
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}
