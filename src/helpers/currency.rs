//! Money and percentage formatting shared by the terminal table and the dashboard.

/// Format an amount as dollars with two decimals.
///
/// ```
/// use finops_review::helpers::currency::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1234.50");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Signed dollar change: `+$x`, `-$x`, or `$0.00`.
pub fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{}", format_currency(change))
    } else if change < 0.0 {
        format!("-{}", format_currency(change.abs()))
    } else {
        format_currency(0.0)
    }
}

/// Percentage with one decimal; positive values get a `+`, a missing value renders as `-`.
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(value) if value > 0.0 => format!("+{:.1}%", value),
        Some(value) => format!("{:.1}%", value),
        None => "-".to_string(),
    }
}

/// Total change line for the summary panel, e.g. `+$150.00 (+12.5%)`.
pub fn format_total_change(change: f64, change_percent: f64) -> String {
    let amount = format_currency(change.abs());
    if change > 0.0 {
        format!("+{} (+{:.1}%)", amount, change_percent)
    } else if change < 0.0 {
        format!("-{} ({:.1}%)", amount, change_percent)
    } else {
        "$0.00 (0.0%)".to_string()
    }
}

/// Headline shown when asking for an explanation: `+$50.00 (+50.0%)`, or `+$50.00 (-)` without a percentage.
pub fn format_increase(change: f64, change_percent: Option<f64>) -> String {
    format!("+{} ({})", format_currency(change), format_percent(change_percent))
}
