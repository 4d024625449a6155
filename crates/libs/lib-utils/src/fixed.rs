//! # Fixed-Point Integers
//!
//! Oracle and AI prices arrive as raw integers with an implicit number of
//! decimals. Values with different decimals must be brought to a common scale
//! before they can be compared.
//!
//! ```rust
//! use lib_utils::fixed::{format_big_int, rescale};
//!
//! // 1.50 with 18 decimals, truncated to 8 decimals
//! assert_eq!(rescale(1_500_000_000_000_000_000, 18, 8), 150_000_000);
//! assert_eq!(format_big_int(1_234_567_890_123_456_789, 8, 18), "1.23456789");
//! ```

/// Largest exponent for which `10^exp` fits in an `i128`.
const MAX_POW10: u32 = 38;

fn pow10(exp: u32) -> Option<i128> {
    if exp > MAX_POW10 {
        None
    } else {
        Some(10_i128.pow(exp))
    }
}

/// Convert `raw` from `from_decimals` to `to_decimals`.
///
/// Lowering the scale drops the extra digits, truncating toward zero.
/// Raising it multiplies and saturates at the `i128` bounds.
pub fn rescale(raw: i128, from_decimals: u32, to_decimals: u32) -> i128 {
    if from_decimals >= to_decimals {
        match pow10(from_decimals - to_decimals) {
            Some(divisor) => raw / divisor,
            None => 0,
        }
    } else {
        let factor = pow10(to_decimals - from_decimals).unwrap_or(i128::MAX);
        raw.saturating_mul(factor)
    }
}

/// Format `raw` (with `decimals` decimals) as a decimal string showing at most
/// `display_decimals` digits after the point.
///
/// Extra digits are truncated, not rounded. Trailing zeros and a bare decimal
/// point are dropped.
///
/// # Examples
///
/// ```rust
/// use lib_utils::fixed::format_big_int;
///
/// assert_eq!(format_big_int(150_000_000, 8, 8), "1.5");
/// assert_eq!(format_big_int(2_000_000_000_000_000_000, 2, 18), "2");
/// assert_eq!(format_big_int(-1_999, 2, 3), "-1.99");
/// ```
pub fn format_big_int(raw: i128, display_decimals: u32, decimals: u32) -> String {
    let shown = display_decimals.min(decimals);
    let value = rescale(raw, decimals, shown);

    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let shown = shown as usize;

    let (int_part, frac_part) = if digits.len() > shown {
        let (i, f) = digits.split_at(digits.len() - shown);
        (i.to_string(), f.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = shown))
    };

    let frac_part = frac_part.trim_end_matches('0');
    let sign = if negative { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_down_truncates() {
        assert_eq!(rescale(1_500_000_000_000_000_000, 18, 8), 150_000_000);
        assert_eq!(rescale(1_500_000_009_999_999_999, 18, 8), 150_000_000);
        assert_eq!(rescale(-1_500_000_009_999_999_999, 18, 8), -150_000_000);
        assert_eq!(rescale(42, 8, 8), 42);
    }

    #[test]
    fn test_rescale_up() {
        assert_eq!(rescale(150_000_000, 8, 18), 1_500_000_000_000_000_000);
        assert_eq!(rescale(i128::MAX / 2, 0, 18), i128::MAX);
        assert_eq!(rescale(-(i128::MAX / 2), 0, 18), i128::MIN);
    }

    #[test]
    fn test_rescale_huge_exponent() {
        assert_eq!(rescale(i128::MAX, 60, 0), 0);
        assert_eq!(rescale(1, 0, 60), i128::MAX);
        assert_eq!(rescale(0, 0, 60), 0);
    }

    #[test]
    fn test_format_big_int() {
        assert_eq!(format_big_int(150_000_000, 8, 8), "1.5");
        assert_eq!(format_big_int(1_234_567_890_123_456_789, 8, 18), "1.23456789");
        assert_eq!(format_big_int(5, 8, 8), "0.00000005");
        assert_eq!(format_big_int(0, 8, 18), "0");
        assert_eq!(format_big_int(-50_000_000, 8, 8), "-0.5");
    }

    #[test]
    fn test_format_big_int_display_beyond_decimals() {
        assert_eq!(format_big_int(12_345, 8, 2), "123.45");
    }
}
