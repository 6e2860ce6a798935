//! Display strings for the report's numeric metrics.

/// Formats a whole-dollar amount with a leading `$` and comma thousands separators.
pub fn currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats a weekly hour count, e.g. `10 hrs` or `7.5 hrs`.
pub fn hours(value: f64) -> String {
    format!("{value} hrs")
}

/// Formats the ROI multiplier for the metric triad, e.g. `3.2x` or `4.0x`.
pub fn multiplier(value: f64) -> String {
    format!("{}x", decimal(value))
}

/// Formats the ROI multiplier for the investment badge, e.g. `3.2x ROI`.
pub fn roi_badge(value: f64) -> String {
    format!("{}x ROI", decimal(value))
}

/// Shortest decimal form of `value` that always keeps a fractional digit.
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
