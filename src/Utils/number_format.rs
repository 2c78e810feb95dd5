//! Text rendering of numbers for the output artifacts.
//!
//! `reactions.txt` and the cleaned profile CSV print floats in the shortest
//! round-trip form with a mandatory decimal point (`212.0`, `94.83`,
//! `1e-05`), while integral composition inputs print without a fractional
//! part (`106`). `R.txt` uses the `%.18e` layout of NumPy `savetxt`.

/// Rounds `x` to `digits` decimals. Rounding is done on the exact binary value
/// with ties to even, so `round_to(2.675, 2) == 2.67`.
pub fn round_to(x: f64, digits: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{:.*}", digits, x).parse::<f64>().unwrap_or(x)
}

/// Shortest round-trip representation which always shows it is a float.
pub fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    let magnitude = x.abs();
    if magnitude != 0.0 && (magnitude < 1e-4 || magnitude >= 1e16) {
        return c_style_exponent(&format!("{:e}", x));
    }
    if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

/// Representation of an elemental ratio: integral values print as integers.
pub fn ratio_repr(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{:.0}", x)
    } else {
        float_repr(x)
    }
}

/// `%.18e` with a signed two digit exponent, e.g. `-8.915094339622641151e-01`.
pub fn savetxt_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    c_style_exponent(&format!("{:.18e}", x))
}

// rust prints `1e-5`, C prints `1e-05`
fn c_style_exponent(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(94.833333, 2), 94.83);
        assert_eq!(round_to(212.0, 2), 212.0);
        assert_eq!(round_to(-29.200000000000003, 2), -29.2);
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_float_repr() {
        assert_eq!(float_repr(212.0), "212.0");
        assert_eq!(float_repr(94.83), "94.83");
        assert_eq!(float_repr(-0.5), "-0.5");
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(0.00001), "1e-05");
        assert_eq!(float_repr(f64::NAN), "nan");
    }

    #[test]
    fn test_ratio_repr() {
        assert_eq!(ratio_repr(106.0), "106");
        assert_eq!(ratio_repr(1.0), "1");
        assert_eq!(ratio_repr(112.5), "112.5");
        assert_eq!(ratio_repr(11.23), "11.23");
    }

    #[test]
    fn test_savetxt_repr() {
        assert_eq!(savetxt_repr(1.0), "1.000000000000000000e+00");
        assert_eq!(savetxt_repr(0.0), "0.000000000000000000e+00");
        assert_eq!(savetxt_repr(-12.0), "-1.200000000000000000e+01");
        assert_eq!(savetxt_repr(46.296), "4.629599999999999937e+01");
    }
}
