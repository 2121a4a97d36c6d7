//! Number ↔ string conversion per XPath 1.0 (sections 4.2 and 4.4).
//!
//! `format_number` never emits scientific notation. It takes the shortest
//! digit string that round-trips to the same `f64` and places the decimal
//! point itself, so `3e-7` becomes `0.0000003` and `1.000000005e8` becomes
//! `100000000.5`.

use smallvec::SmallVec;

/// Shortest round-trip decimal digits of a finite, non-zero magnitude.
///
/// The represented value is `0.d1 d2 d3 ... × 10^point`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ShortestDecimal {
    digits: SmallVec<[u8; 24]>,
    point: i32,
}

impl ShortestDecimal {
    fn of(magnitude: f64) -> Self {
        // `{:e}` yields the shortest digits that read back as the same
        // double, e.g. "1.000000005e8"; only its digits and exponent are used.
        let sci = format!("{magnitude:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let mut digits: SmallVec<[u8; 24]> =
            mantissa.bytes().filter(u8::is_ascii_digit).collect();
        while digits.len() > 1 && digits.last() == Some(&b'0') {
            digits.pop();
        }
        Self {
            digits,
            point: parse_exponent(exponent) + 1,
        }
    }

    fn write_fixed(&self, out: &mut String) {
        let len = self.digits.len();
        let point = self.point;
        if point <= 0 {
            out.push_str("0.");
            push_zeros(out, point.unsigned_abs() as usize);
            push_digits(out, &self.digits);
            return;
        }
        let point = point.unsigned_abs() as usize;
        if point >= len {
            push_digits(out, &self.digits);
            push_zeros(out, point - len);
        } else {
            push_digits(out, &self.digits[..point]);
            out.push('.');
            push_digits(out, &self.digits[point..]);
        }
    }
}

fn parse_exponent(s: &str) -> i32 {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = body
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0i32, |acc, b| acc * 10 + i32::from(b - b'0'));
    if negative { -magnitude } else { magnitude }
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&d| char::from(d)));
}

fn push_zeros(out: &mut String, count: usize) {
    out.extend(core::iter::repeat_n('0', count));
}

/// Canonical XPath string form of a number.
///
/// - NaN → `NaN`
/// - positive / negative infinity → `Infinity` / `-Infinity`
/// - positive and negative zero → `0`
/// - integers → digits only, no decimal point (`12`, not `12.0`)
/// - everything else → shortest round-trip digits in plain decimal notation
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let decimal = ShortestDecimal::of(n.abs());
    let mut out = String::with_capacity(decimal.digits.len() + 4);
    if n.is_sign_negative() {
        out.push('-');
    }
    decimal.write_fixed(&mut out);
    out
}

fn is_xpath_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// XPath 1.0 `number()` applied to a string.
///
/// Accepts optional surrounding whitespace, an optional minus sign and
/// `Digits ('.' Digits?)? | '.' Digits`. Anything else, including exponents,
/// a plus sign and the `Infinity`/`NaN` spellings, yields NaN.
pub fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim_matches(is_xpath_whitespace);
    let body = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match body.split_once('.') {
        Some((int, frac)) => {
            (!int.is_empty() || !frac.is_empty()) && all_digits(int) && all_digits(frac)
        }
        None => !body.is_empty() && all_digits(body),
    };
    if !well_formed {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
