use jiff::civil::Date;

pub const PLACEHOLDER: &str = "--";

/// Grouped thousands, at most three fraction digits, trailing zeros dropped.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

pub fn format_decimal(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        PLACEHOLDER.to_string()
    }
}

/// `+N` or `-N` with grouped digits.
pub fn format_delta(value: f64) -> String {
    let prefix = if value >= 0.0 { '+' } else { '-' };
    format!("{prefix}{}", format_count(value.abs()))
}

/// `2024-01-05` (optionally with a time suffix) becomes `Jan 5`; anything
/// else is shown as received.
pub fn format_day(value: &str) -> String {
    value
        .get(..10)
        .and_then(|day| day.parse::<Date>().ok())
        .map(|date| date.strftime("%b %-d").to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(120.0), "120");
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(-1500.5), "-1,500.5");
        assert_eq!(format_count(2.34567), "2.346");
        assert_eq!(format_count(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn decimals_and_deltas() {
        assert_eq!(format_decimal(4.256), "4.26");
        assert_eq!(format_decimal(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_delta(12.0), "+12");
        assert_eq!(format_delta(-3000.0), "-3,000");
        assert_eq!(format_delta(0.0), "+0");
    }

    #[test]
    fn days_are_shortened() {
        assert_eq!(format_day("2024-01-05"), "Jan 5");
        assert_eq!(format_day("2024-11-23T00:00:00Z"), "Nov 23");
        assert_eq!(format_day("week 3"), "week 3");
    }
}
