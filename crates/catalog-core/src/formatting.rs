/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use catalog_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    // Handle the sign separately so the thousands grouping works on the
    // absolute value.
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Round to the requested decimal places.
    // Add a tiny epsilon (half ULP at the target precision) before rounding
    // to avoid IEEE 754 binary-representation issues at exact midpoints.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    // Build the thousands-separated integer portion.
    let int_str = integer_part.to_string();
    let grouped = group_thousands(&int_str);

    let result = if decimals == 0 {
        grouped
    } else {
        // Format the fractional part to the exact number of decimals.
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` starts with "0.", e.g. "0.50". Strip the leading "0".
        let decimal_digits = &frac_str[1..]; // ".50"
        format!("{}{}", grouped, decimal_digits)
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a chart value: integral values get thousands separators and no
/// decimals, anything else keeps one decimal place.
///
/// # Examples
///
/// ```
/// use catalog_core::formatting::format_value;
///
/// assert_eq!(format_value(1234.0), "1,234");
/// assert_eq!(format_value(92.5),   "92.5");
/// ```
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number(value, 0)
    } else {
        format_number(value, 1)
    }
}

/// Format a number without grouping, dropping a zero fraction.
///
/// Used where the number is itself a category label (years, durations).
///
/// # Examples
///
/// ```
/// use catalog_core::formatting::format_plain;
///
/// assert_eq!(format_plain(2021.0), "2021");
/// assert_eq!(format_plain(12.75),  "12.75");
/// ```
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Label of a histogram bin, e.g. `"60–90"`. Bounds are rounded to one
/// decimal and printed without a trailing `.0`.
///
/// # Examples
///
/// ```
/// use catalog_core::formatting::format_bin_range;
///
/// assert_eq!(format_bin_range(60.0, 90.0), "60–90");
/// assert_eq!(format_bin_range(1925.0, 1931.4), "1925–1931.4");
/// ```
pub fn format_bin_range(lower: f64, upper: f64) -> String {
    let round = |v: f64| (v * 10.0).round() / 10.0;
    format!("{}–{}", format_plain(round(lower)), format_plain(round(upper)))
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use catalog_core::formatting::percentage;
///
/// assert!((percentage(50.0, 200.0, 1) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(0.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let raw = (part / whole) * 100.0;
    let factor = 10_f64.powi(decimal_places as i32);
    (raw * factor).round() / factor
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_no_thousands() {
        assert_eq!(format_number(123.456, 2), "123.46");
    }

    #[test]
    fn test_format_number_with_thousands() {
        assert_eq!(format_number(1_234.5, 1), "1,234.5");
    }

    #[test]
    fn test_format_number_millions() {
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-9_876.5, 1), "-9,876.5");
    }

    #[test]
    fn test_format_number_exact_thousands() {
        assert_eq!(format_number(1_000.0, 0), "1,000");
    }

    #[test]
    fn test_format_number_small_decimals() {
        assert_eq!(format_number(0.001, 3), "0.001");
    }

    #[test]
    fn test_format_number_rounds_up() {
        assert_eq!(format_number(1.005, 2), "1.01");
    }

    // ── format_value ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_value_integral() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(12_345.0), "12,345");
    }

    #[test]
    fn test_format_value_fractional() {
        assert_eq!(format_value(2.25), "2.3");
        assert_eq!(format_value(1_500.5), "1,500.5");
    }

    // ── format_plain ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_plain_drops_zero_fraction() {
        assert_eq!(format_plain(90.0), "90");
        assert_eq!(format_plain(3.0), "3");
        assert_eq!(format_plain(-4.0), "-4");
    }

    #[test]
    fn test_format_plain_keeps_fraction() {
        assert_eq!(format_plain(0.5), "0.5");
    }

    // ── format_bin_range ─────────────────────────────────────────────────────

    #[test]
    fn test_format_bin_range() {
        assert_eq!(format_bin_range(3.0, 15.6), "3–15.6");
        assert_eq!(format_bin_range(2000.04, 2010.0), "2000–2010");
    }

    // ── percentage ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentage_basic() {
        let p = percentage(50.0, 200.0, 1);
        assert!((p - 25.0).abs() < 1e-9, "percentage = {p}");
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(10.0, 0.0, 2), 0.0);
    }

    #[test]
    fn test_percentage_full() {
        let p = percentage(100.0, 100.0, 0);
        assert!((p - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_rounding() {
        let p = percentage(1.0, 3.0, 2);
        assert!((p - 33.33).abs() < 1e-2, "percentage = {p}");
    }

    #[test]
    fn test_percentage_zero_part() {
        assert_eq!(percentage(0.0, 100.0, 2), 0.0);
    }

    // ── group_thousands (via format_number) ──────────────────────────────────

    #[test]
    fn test_group_thousands_one_digit() {
        assert_eq!(format_number(5.0, 0), "5");
    }

    #[test]
    fn test_group_thousands_four_digits() {
        assert_eq!(format_number(1234.0, 0), "1,234");
    }

    #[test]
    fn test_group_thousands_seven_digits() {
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
    }
}
