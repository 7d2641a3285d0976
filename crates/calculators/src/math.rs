//! Rounding and guarded arithmetic
//!
//! Every helper returns `0.0` rather than NaN or infinity, so a result can
//! never leak a non-finite number into interpretation text.

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Avoid "-0.00" in formatted output
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round a monetary amount to cents
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// `a / b`, or zero when `b` is not strictly positive
pub fn ratio(a: f64, b: f64) -> f64 {
    if b > 0.0 && a.is_finite() && b.is_finite() { a / b } else { 0.0 }
}

/// `part` as a percentage of `whole`
pub fn percent_of(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}

/// Amount per 1,000 views (RPM / CPM style)
pub fn per_thousand(amount: f64, views: f64) -> f64 {
    ratio(amount, views) * 1_000.0
}

/// Whole units needed to cover `total` at `per_unit` each.
/// Partial units can't be sold, so this always rounds up. The quotient is
/// rounded to 6 decimals first so `700 / 0.7` counts as 1,000, not 1,001.
pub fn ceil_units(total: f64, per_unit: f64) -> f64 {
    let units = round_to(ratio(total, per_unit), 6);
    if units > 0.0 { units.ceil() } else { 0.0 }
}

/// Scale `value` so that `full_marks_at` maps to 100, capped at 100
pub fn clamp_score(value: f64, full_marks_at: f64) -> f64 {
    (ratio(value, full_marks_at) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(10.504999), 10.5);
        assert_eq!(round_cents(1.005_1), 1.01);
        assert_eq!(round_cents(-0.001), 0.0);
        assert_eq!(round_cents(f64::NAN), 0.0);
    }

    #[test]
    fn test_zero_denominators_are_guarded() {
        assert_eq!(ratio(5.0, 0.0), 0.0);
        assert_eq!(percent_of(5.0, -1.0), 0.0);
        assert_eq!(per_thousand(3.0, 0.0), 0.0);
        assert_eq!(ceil_units(1000.0, 0.0), 0.0);
    }

    #[test]
    fn test_ceil_units_rounds_up() {
        assert_eq!(ceil_units(1000.0, 30.0), 34.0);
        assert_eq!(ceil_units(900.0, 30.0), 30.0);
        assert_eq!(ceil_units(700.0, 0.7), 1_000.0);
        assert_eq!(ceil_units(1000.0, 19.99 - 9.99), 100.0);
        assert_eq!(ceil_units(1000.01, 10.0), 101.0);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(5.0, 10.0), 50.0);
        assert_eq!(clamp_score(50.0, 10.0), 100.0);
    }
}
