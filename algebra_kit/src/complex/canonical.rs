//! Reduction of `real + imaginary * i^exp` to canonical form.
//!
//! `i^exp` cycles with period 4 through `1, i, -1, -i`, so the sign of the
//! imaginary coefficient can absorb the upper half of the cycle and only the
//! parity of the exponent needs to survive. The steps below run in a fixed
//! order; negative and large exponents depend on it.

/// Reduce `(real, imaginary, exp)` to its canonical triple.
///
/// The result always has `exp` in `{0, 1}`, and `exp == 0` implies a zero
/// imaginary coefficient (the term has been folded into `real`).
///
/// ```
/// use algebra_kit::complex::canonicalize;
///
/// // i^2 = -1
/// assert_eq!(canonicalize(0.0, 1.0, 2), (-1.0, 0.0, 0));
/// // i^3 = -i
/// assert_eq!(canonicalize(0.0, 1.0, 3), (0.0, -1.0, 1));
/// ```
pub fn canonicalize(real: f64, imaginary: f64, exp: i32) -> (f64, f64, i32) {
    let mut real = real;

    // i^2 and i^3 flip the sign of the coefficient.
    let mut imaginary = if (exp % 4).abs() < 2 {
        imaginary
    } else {
        -imaginary
    };

    let mut exp = if imaginary == 0.0 { 0 } else { exp % 2 };

    if exp == 0 {
        if imaginary != 0.0 {
            log::trace!("folding imaginary coefficient {imaginary} into real part {real}");
        }
        real += imaginary;
        imaginary = 0.0;
    }

    // i^-1 = -i
    if exp < 0 {
        imaginary = -imaginary;
        exp = -exp;
    }

    (real, imaginary, exp)
}
