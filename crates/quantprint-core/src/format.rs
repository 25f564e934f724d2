//! Number formatting for report text.
//!
//! All helpers work on `f64` and never fail: non-finite values are passed
//! through using Rust's own rendering (`NaN`, `inf`).

/// Formats a fraction as a percentage with a fixed number of decimals.
///
/// `percent(0.1333, 1)` renders `13.3%`.
#[must_use]
pub fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Formats a value with comma-grouped thousands.
///
/// ```rust
/// use quantprint_core::grouped;
///
/// assert_eq!(grouped(1_234_567.891, 0), "1,234,568");
/// assert_eq!(grouped(-1_234.5, 1), "-1,234.5");
/// ```
#[must_use]
pub fn grouped(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value);
    if !value.is_finite() {
        return raw;
    }

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(raw.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(*digit));
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a whole-dollar amount, e.g. `$1,500` or `$-200`.
///
/// The sign follows the dollar symbol, matching the report layout
/// used across every blueprint.
#[must_use]
pub fn currency(value: f64) -> String {
    format!("${}", grouped(value, 0))
}

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.5, 0), "50%");
        assert_eq!(percent(2.0 / 3.0, 1), "66.7%");
        assert_eq!(percent(-0.2 / 1.5, 1), "-13.3%");
        assert_eq!(percent(0.0, 1), "0.0%");
    }

    #[test]
    fn test_grouped_small_values() {
        assert_eq!(grouped(0.0, 0), "0");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(1000.0, 0), "1,000");
        assert_eq!(grouped(-200.0, 0), "-200");
    }

    #[test]
    fn test_grouped_rounding() {
        assert_eq!(grouped(1499.6, 0), "1,500");
        assert_eq!(grouped(1_000_000.0, 2), "1,000,000.00");
    }

    #[test]
    fn test_grouped_non_finite() {
        assert_eq!(grouped(f64::NAN, 0), "NaN");
        assert_eq!(grouped(f64::INFINITY, 0), "inf");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(1500.0), "$1,500");
        assert_eq!(currency(-200.0), "$-200");
        assert_eq!(currency(12_345_678.4), "$12,345,678");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("equity"), "Equity");
        assert_eq!(capitalize("FIXED_INCOME"), "Fixed_income");
        assert_eq!(capitalize(""), "");
    }

    proptest! {
        #[test]
        fn grouped_preserves_digits(value in -1.0e12_f64..1.0e12_f64) {
            let plain = format!("{:.0}", value);
            let with_commas = grouped(value, 0);
            prop_assert_eq!(with_commas.replace(',', ""), plain);
        }
    }
}
