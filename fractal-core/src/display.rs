//! Formatting of parameter values for on-screen labels.

/// Formats `value` with `digits` significant digits.
///
/// Mirrors the familiar `toPrecision` behaviour: plain decimal notation is
/// used while the exponent fits, otherwise `m.mmme±x`. Rounding happens before
/// the notation is chosen, so `9.96` with two digits becomes `"10"`.
///
/// ### Parameters
/// - `value` - Number to format. Non-finite values are printed as-is.
/// - `digits` - Significant digits; values below 1 are treated as 1.
///
/// ### Returns
/// The formatted string, e.g. `"0.90"` for `0.9` or `"1.2e+2"` for `123`.
pub fn to_precision(value: f32, digits: usize) -> String {
    let digits = digits.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let v = f64::from(value);
    let sig = digits as i32;

    let exp = v.abs().log10().floor() as i32;
    let scale = 10f64.powi(sig - 1 - exp);
    let rounded = (v * scale).round() / scale;
    // Rounding may carry into the next power of ten.
    let exp = rounded.abs().log10().floor() as i32;

    if exp >= sig || exp < -6 {
        let mantissa = rounded / 10f64.powi(exp);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{:.*}e{}{}", digits - 1, mantissa, sign, exp.abs())
    } else {
        let decimals = (sig - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_typical_slider_values() {
        assert_eq!(to_precision(30.0, 2), "30");
        assert_eq!(to_precision(0.9, 2), "0.90");
        assert_eq!(to_precision(0.456, 2), "0.46");
        assert_eq!(to_precision(1.0, 2), "1.0");
        assert_eq!(to_precision(-0.5, 2), "-0.50");
    }

    #[test]
    fn zero_keeps_requested_digits() {
        assert_eq!(to_precision(0.0, 2), "0.0");
        assert_eq!(to_precision(0.0, 1), "0");
    }

    #[test]
    fn rounding_carries_into_next_power_of_ten() {
        assert_eq!(to_precision(9.96, 2), "10");
        assert_eq!(to_precision(99.7, 2), "1.0e+2");
    }

    #[test]
    fn large_and_tiny_values_switch_notation() {
        assert_eq!(to_precision(123.0, 2), "1.2e+2");
        assert_eq!(to_precision(0.000123, 2), "0.00012");
        assert_eq!(to_precision(1.5e-8, 2), "1.5e-8");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(to_precision(f32::NAN, 2), "NaN");
        assert_eq!(to_precision(f32::INFINITY, 2), "inf");
    }
}
