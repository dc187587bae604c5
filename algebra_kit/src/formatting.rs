//! Float rendering for canonical string forms.
//!
//! Built on the `Debug` rendering of `f64`, which is the shortest text that
//! round-trips and never drops the fractional marker of a whole number:
//! `2.0` and `1000000000000000.0` keep their `.0`, magnitudes from `1e16`
//! (and below `1e-4`) switch to an exponent such as `1e20`. A real and an
//! integer-valued coefficient therefore never print alike.

/// Render `x` for a canonical string form.
///
/// Both zeros render as `0.0`, so `-0.0` and `0.0` compare equal through
/// any string-based equality built on this function. Non-finite values
/// render as `NaN`, `Inf` and `-Inf`.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        let sign = if x.is_sign_negative() { "-" } else { "" };
        format!("{sign}Inf")
    } else if x == 0.0 {
        "0.0".to_string()
    } else {
        format!("{x:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(-1.0), "-1.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "0.0");
        assert_eq!(format_float(1e14), "100000000000000.0");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(-1e15), "-1000000000000000.0");
    }

    #[test]
    fn test_large_and_small_magnitudes_use_exponent() {
        assert_eq!(format_float(1e16), "1e16");
        assert_eq!(format_float(1e20), "1e20");
        assert_eq!(format_float(-2.5e30), "-2.5e30");
        assert_eq!(format_float(1e-5), "1e-5");
    }

    #[test]
    fn test_fractions_and_specials() {
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(-2.25), "-2.25");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "Inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
    }
}
