/// Rounds up to the next multiple of `multiple`; plain `ceil` when the
/// multiple is not positive.
pub fn round_up(value: f64, multiple: f64) -> f64 {
    if multiple > 0.0 {
        (value / multiple).ceil() * multiple
    } else {
        value.ceil()
    }
}

/// Rounds down to the previous multiple of `multiple`; plain `floor` when
/// the multiple is not positive.
pub fn round_down(value: f64, multiple: f64) -> f64 {
    if multiple > 0.0 {
        (value / multiple).floor() * multiple
    } else {
        value.floor()
    }
}

/// Cuts (never rounds) to 4 decimal places.
pub fn truncate4(value: f64) -> f64 {
    (value * 10_000.0).trunc() / 10_000.0
}
