//! Numeric literal classification.
//!
//! A literal is stored under every representation that holds its value exactly: signed 64-bit
//! integer, unsigned 64-bit integer, 64-bit float and complex. This mimics untyped numeric
//! constants: `10` is all of int, uint and float, `3.5` is only a float, `2i` is only complex.
//!
//! ## Notes
//! - Integer literals accept an optional sign (unsigned: none), a `0x`/`0X` hex prefix, `0o`/`0b`
//!   prefixes and a leading `0` for octal.
//! - Floats that overflow to infinity are rejected.

/// A complex number with `f64` parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// Every exact representation of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumberValue {
    pub int: Option<i64>,
    pub uint: Option<u64>,
    pub float: Option<f64>,
    pub complex: Option<Complex>,
}

impl NumberValue {
    /// Classify literal text. `is_complex` marks a `<num>+<num>i` token.
    ///
    /// Returns `None` when the text holds no representable value.
    pub fn classify(text: &str, is_complex: bool) -> Option<Self> {
        if is_complex {
            let c = parse_complex(text)?;
            return Some(Self::from_complex(c));
        }

        // Imaginary constants can only be complex unless they are zero.
        if let Some(imag) = text.strip_suffix('i') {
            if let Some(f) = parse_float(imag) {
                return Some(Self::from_complex(Complex::new(0.0, f)));
            }
        }

        let mut value = Self {
            uint: parse_uint(text),
            int: parse_int(text),
            ..Self::default()
        };
        if value.int == Some(0) && value.uint.is_none() {
            // `-0`
            value.uint = Some(0);
        }

        if let Some(i) = value.int {
            value.float = Some(i as f64);
        } else if let Some(u) = value.uint {
            value.float = Some(u as f64);
        } else if let Some(f) = parse_float(text) {
            value.float = Some(f);
            value.int = exact_i64(f);
            value.uint = exact_u64(f);
        }

        if value.int.is_none() && value.uint.is_none() && value.float.is_none() {
            return None;
        }
        Some(value)
    }

    /// Pull out the other representations a complex value holds; all need a zero imaginary part.
    fn from_complex(c: Complex) -> Self {
        let mut value = Self {
            complex: Some(c),
            ..Self::default()
        };
        if c.im == 0.0 {
            value.float = Some(c.re);
            value.int = exact_i64(c.re);
            value.uint = exact_u64(c.re);
        }
        value
    }
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

fn exact_i64(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&f)).then_some(f as i64)
}

fn exact_u64(f: f64) -> Option<u64> {
    (f.fract() == 0.0 && (0.0..TWO_POW_64).contains(&f)).then_some(f as u64)
}

/// Split a base prefix off unsigned digits: `(radix, digits)`.
fn radix_and_digits(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &text[2..]),
            b'o' | b'O' => return (8, &text[2..]),
            b'b' | b'B' => return (2, &text[2..]),
            _ => return (8, &text[1..]),
        }
    }
    (10, text)
}

fn parse_uint(text: &str) -> Option<u64> {
    let (radix, digits) = radix_and_digits(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn parse_int(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = i128::from(parse_uint(unsigned)?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

fn parse_float(text: &str) -> Option<f64> {
    // Only plain decimal notation; `inf`/`nan` spellings never reach here from the scanner but
    // are refused anyway.
    if !text.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return None;
    }
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Parse `<float><sign><float>i`, optionally wrapped in parentheses.
fn parse_complex(text: &str) -> Option<Complex> {
    let text = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);
    let body = text.strip_suffix('i')?;

    // The imaginary part starts at the last sign that is not the first character and does not
    // follow an exponent marker.
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))?;

    let re = parse_float(&body[..split])?;
    let im = parse_float(&body[split..])?;
    Some(Complex::new(re, im))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> NumberValue {
        NumberValue::classify(text, false).unwrap_or_else(|| panic!("{text:?} should classify"))
    }

    #[test]
    fn integral_literal_populates_int_uint_and_float() {
        let v = classify("10");
        assert_eq!(v.int, Some(10));
        assert_eq!(v.uint, Some(10));
        assert_eq!(v.float, Some(10.0));
        assert_eq!(v.complex, None);
    }

    #[test]
    fn fractional_literal_is_only_float() {
        let v = classify("3.5");
        assert_eq!(v.float, Some(3.5));
        assert_eq!(v.int, None);
        assert_eq!(v.uint, None);
        assert_eq!(v.complex, None);
    }

    #[test]
    fn hex_literal() {
        let v = classify("0x1A");
        assert_eq!(v.int, Some(26));
        assert_eq!(v.uint, Some(26));
        assert_eq!(v.float, Some(26.0));
    }

    #[test]
    fn leading_zero_is_octal() {
        assert_eq!(classify("010").int, Some(8));
        // Not valid octal, but still a valid float with an integral value.
        let v = classify("089");
        assert_eq!(v.int, Some(89));
        assert_eq!(v.float, Some(89.0));
    }

    #[test]
    fn negative_literal_has_no_unsigned_form() {
        let v = classify("-7");
        assert_eq!(v.int, Some(-7));
        assert_eq!(v.uint, None);
        assert_eq!(v.float, Some(-7.0));
    }

    #[test]
    fn negative_zero_is_unsigned_too() {
        let v = classify("-0");
        assert_eq!(v.int, Some(0));
        assert_eq!(v.uint, Some(0));
    }

    #[test]
    fn float_with_integral_value_gains_integer_forms() {
        let v = classify("1e3");
        assert_eq!(v.int, Some(1000));
        assert_eq!(v.uint, Some(1000));
        assert_eq!(v.float, Some(1000.0));
    }

    #[test]
    fn large_unsigned_is_not_signed() {
        let v = classify("18446744073709551615");
        assert_eq!(v.uint, Some(u64::MAX));
        assert_eq!(v.int, None);
        assert!(v.float.is_some());
    }

    #[test]
    fn imaginary_literal_is_only_complex() {
        let v = classify("2i");
        assert_eq!(v.complex, Some(Complex::new(0.0, 2.0)));
        assert_eq!(v.float, None);
        assert_eq!(v.int, None);
    }

    #[test]
    fn zero_imaginary_collapses_to_real_forms() {
        let v = classify("0i");
        assert_eq!(v.complex, Some(Complex::new(0.0, 0.0)));
        assert_eq!(v.int, Some(0));
        assert_eq!(v.float, Some(0.0));
    }

    #[test]
    fn complex_pair() {
        let v = NumberValue::classify("1+2i", true).unwrap();
        assert_eq!(v.complex, Some(Complex::new(1.0, 2.0)));
        assert_eq!(v.float, None);

        let v = NumberValue::classify("1.5e2-0.5i", true).unwrap();
        assert_eq!(v.complex, Some(Complex::new(150.0, -0.5)));

        let v = NumberValue::classify("3+0i", true).unwrap();
        assert_eq!(v.int, Some(3));
    }

    #[test]
    fn rejects_text_with_no_value() {
        assert_eq!(NumberValue::classify("-", false), None);
        assert_eq!(NumberValue::classify("0x", false), None);
        assert_eq!(NumberValue::classify("1e", false), None);
        assert_eq!(NumberValue::classify("1e400", false), None);
        assert_eq!(NumberValue::classify("1+2", true), None);
    }

    proptest::proptest! {
        #[test]
        fn decimal_integers_hold_every_real_form(n in proptest::num::i64::ANY) {
            let v = classify(&n.to_string());
            proptest::prop_assert_eq!(v.int, Some(n));
            proptest::prop_assert_eq!(v.uint, u64::try_from(n).ok());
            proptest::prop_assert_eq!(v.float, Some(n as f64));
        }

        #[test]
        fn hex_matches_decimal(n in proptest::num::u64::ANY) {
            let hex = classify(&format!("0x{n:x}"));
            let dec = classify(&n.to_string());
            proptest::prop_assert_eq!(hex, dec);
        }
    }
}
