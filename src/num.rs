//! Utilities related to numbers.

use std::fmt;

/// Number of fractional digits in scientific notation.
pub const SCIENTIFIC_PRECISION: usize = 6;

/// Wrapper displaying a float in C-style `%e` notation,
/// e.g. `8.333333e+00` or `-1.250000e-07`.
#[derive(Clone, Copy, Debug)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.pad("nan");
        }
        if value.is_infinite() {
            return f.pad(if value > 0.0 { "inf" } else { "-inf" });
        }
        let formatted = format!("{:.*e}", SCIENTIFIC_PRECISION, value);
        // Rust omits the exponent sign and padding, so `1e0` must become `1e+00`
        let (mantissa, exponent) = formatted
            .split_once('e')
            .expect("Scientific formatting always contains an exponent");
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f.pad(&format!("{}e{}{:0>2}", mantissa, sign, digits))
    }
}
