/// Seconds with one decimal, as shown in the results panel.
#[must_use]
pub fn format_seconds(value: f64) -> String {
    format!("{value:.1} seconds")
}

#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    format!("Time left: {seconds}s")
}

/// Whole percent of `part` over `total`, 0 when `total` is 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(part) * 100.0 / f64::from(total)).round() as u32
}
