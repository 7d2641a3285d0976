//! Display formatting for numbers, money and percentages

use crate::fields::Unit;

/// Insert thousands separators into an already formatted number
fn group_thousands(formatted: &str) -> String {
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Format with thousands separators and a fixed number of decimals
pub fn format_number(value: f64, decimals: usize) -> String {
    let value = finite(value);
    let formatted = format!("{:.prec$}", value, prec = decimals);
    // "-0" and "-0.00" read badly
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        return group_thousands(formatted.trim_start_matches('-'));
    }
    group_thousands(&formatted)
}

/// Format as whole number with thousands separators
pub fn format_count(value: f64) -> String {
    format_number(value, 0)
}

/// Format USD with cents: `$1,234.56`, `-$12.00`
pub fn format_currency(value: f64) -> String {
    let value = finite(value);
    let amount = format_number(value.abs(), 2);
    if value < 0.0 && amount != "0.00" {
        format!("-${amount}")
    } else {
        format!("${amount}")
    }
}

/// Format a percentage value (5.0 -> "5.00%")
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", format_number(value, decimals))
}

/// Short form for large counts: 950, 1.2K, 3.4M, 1.1B
pub fn format_compact(value: f64) -> String {
    let value = finite(value);
    let abs = value.abs();
    // Each suffix starts where the rounded value would reach 1,000 of the one below
    let (scaled, suffix) = if abs >= 999_950_000.0 {
        (value / 1_000_000_000.0, "B")
    } else if abs >= 999_950.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 999.5 {
        (value / 1_000.0, "K")
    } else {
        return format_number(value, 0);
    };

    let formatted = format!("{:.1}", scaled);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{trimmed}{suffix}")
}

/// Format a value according to its unit
pub fn format_value(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Count => format_count(value),
        Unit::Currency => format_currency(value),
        Unit::Cents => format!("{}¢", format_number(value, 2)),
        Unit::Percent => format_percent(value, 2),
        Unit::Seconds => format!("{}s", format_number(value, 1)),
        Unit::Hours => format!("{} hrs", format_number(value, 1)),
        Unit::Months => format!("{} mo", format_number(value, 0)),
        Unit::Ratio => format!("{}x", format_number(value, 2)),
        Unit::Score => format!("{}/100", format_number(value, 0)),
        Unit::Multiplier => format!("{}x", format_number(value, 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10.5), "$10.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.0), "-$12.00");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1000.0), "1,000");
        assert_eq!(format_count(-1234567.0), "-1,234,567");
        assert_eq!(format_number(12345.678, 1), "12,345.7");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(5.0, 2), "5.00%");
        assert_eq!(format_percent(12.34, 1), "12.3%");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_value(0.4, Unit::Cents), "0.40¢");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1_000.0), "1K");
        assert_eq!(format_compact(1_240.0), "1.2K");
        assert_eq!(format_compact(3_400_000.0), "3.4M");
        assert_eq!(format_compact(1_100_000_000.0), "1.1B");
    }

    #[test]
    fn test_format_compact_rounds_into_next_suffix() {
        assert_eq!(format_compact(999_999.0), "1M");
        assert_eq!(format_compact(999_940.0), "999.9K");
        assert_eq!(format_compact(999.6), "1K");
        assert_eq!(format_compact(999_999_999.0), "1B");
    }

    #[test]
    fn test_format_value_by_unit() {
        assert_eq!(format_value(42.0, Unit::Score), "42/100");
        assert_eq!(format_value(3.25, Unit::Ratio), "3.25x");
        assert_eq!(format_value(10.5, Unit::Currency), "$10.50");
    }
}
