//! Formatting utilities for numeric display values.

/// Format a number for display with at most `max_decimals` fraction digits.
///
/// Trailing zeros are trimmed. Very large or very small magnitudes fall back
/// to scientific notation.
pub fn format_number(value: f64, max_decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e15).contains(&magnitude) {
        return format!("{:.6e}", value);
    }

    let fixed = format!("{:.*}", max_decimals, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    // Rounding can leave "-0" behind for tiny negative values.
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a monetary amount with thousands separators and two decimals
/// (e.g., "1,234,567.89").
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Format a percentage with one decimal (e.g., "42.5%").
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_trims_zeros() {
        assert_eq!(format_number(1.5, 6), "1.5");
        assert_eq!(format_number(100.0, 6), "100");
        assert_eq!(format_number(0.333333333, 4), "0.3333");
        assert_eq!(format_number(0.0, 6), "0");
        assert_eq!(format_number(-0.00000001, 2), "-1.000000e-8");
    }

    #[test]
    fn test_format_number_scientific() {
        assert_eq!(format_number(1e20, 6), "1.000000e20");
        assert_eq!(format_number(f64::INFINITY, 6), "inf");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0001, 2), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(999.5), "999.50");
        assert_eq!(format_currency(1234.5), "1,234.50");
        assert_eq!(format_currency(1234567.891), "1,234,567.89");
        assert_eq!(format_currency(-1000.0), "-1,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.425), "42.5%");
    }
}
