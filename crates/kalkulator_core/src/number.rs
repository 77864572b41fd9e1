//! Number parsing and formatting for the display string.
//!
//! The display is text, not a float. Every transition parses it leniently
//! (leading numeric prefix, trailing junk ignored) and writes back the
//! shortest representation that round-trips.

/// Upper bound beyond which rounding to a fixed number of places is skipped.
const FIXED_LIMIT: f64 = 1e21;

/// Parses the leading decimal number in `text`.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction and exponent, or `Infinity`. Anything after the numeric prefix
/// is ignored. Returns NaN when there is no numeric prefix.
#[must_use]
pub fn parse(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            mantissa_digits += j - frac_start;
            end = j;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a value the way the display shows it.
///
/// Integral values have no fraction, `-0` prints as `0`, and non-finite
/// values print as `NaN`, `Infinity` or `-Infinity`.
#[must_use]
pub fn format(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_owned()
    } else if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}

/// Rounds `value` half away from zero to `places` decimal places.
///
/// The tie is judged on the exact binary value, so `2.675` (stored just
/// below the half) rounds to `2.67`. Non-finite values and magnitudes of
/// 1e21 or more are returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: u8) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return value;
    }
    parse(&to_fixed(value, places))
}

/// Formats `value` with exactly `places` fraction digits.
///
/// The sign follows `value < 0`, so `-0.001` at two places is `-0.00`.
#[must_use]
pub fn to_fixed(value: f64, places: u8) -> String {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return format(value);
    }
    let digits = round_decimal(value.abs(), usize::from(places));
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Fraction digits needed to print any `f64` exactly (2^-1074).
const EXACT_DIGITS: usize = 1074;

/// Rounds the exact decimal expansion of a non-negative `magnitude`.
///
/// `{:.N}` formatting breaks exact ties to even, so the rounding is done
/// here on the full expansion instead.
fn round_decimal(magnitude: f64, places: usize) -> String {
    let exact = format!("{magnitude:.prec$}", prec = EXACT_DIGITS);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();

    if frac_part.as_bytes().get(places).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 1);
    for (i, &digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(digit));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse("12."), 12.0);
        assert_eq!(parse("3.00"), 3.0);
        assert_eq!(parse("  -4.5xyz"), -4.5);
        assert_eq!(parse(".5"), 0.5);
        assert_eq!(parse("1e3"), 1000.0);
        assert_eq!(parse("2e"), 2.0);
    }

    #[test]
    fn test_parse_non_numbers() {
        assert!(parse("NaN").is_nan());
        assert!(parse("-").is_nan());
        assert!(parse(".").is_nan());
        assert!(parse("").is_nan());
        assert_eq!(parse("Infinity"), f64::INFINITY);
        assert_eq!(parse("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_format() {
        assert_eq!(format(10.0), "10");
        assert_eq!(format(0.1), "0.1");
        assert_eq!(format(-0.0), "0");
        assert_eq!(format(-2.5), "-2.5");
        assert_eq!(format(f64::NAN), "NaN");
        assert_eq!(format(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_round_to_exact_expansion() {
        assert_eq!(format(round_to(2.675, 2)), "2.67");
        assert_eq!(format(round_to(1.115, 2)), "1.11");
        assert_eq!(format(round_to(10.235, 2)), "10.23");
        assert_eq!(format(round_to(0.125, 2)), "0.13");
        assert_eq!(format(round_to(-0.125, 2)), "-0.13");
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_round_to_precision() {
        assert_eq!(format(round_to(1.0 / 3.0, 2)), "0.33");
        assert_eq!(format(round_to(2.0 / 3.0, 4)), "0.6667");
        assert_eq!(format(round_to(2.5, 0)), "3");
        assert_eq!(format(round_to(-2.5, 0)), "-3");
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(format(round_to(-0.001, 2)), "0");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(3.0, 2), "3.00");
        assert_eq!(to_fixed(1.0 / 3.0, 6), "0.333333");
        assert_eq!(to_fixed(-1.5, 0), "-2");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(99.995, 2), "99.99");
        assert_eq!(to_fixed(9.5, 0), "10");
    }
}
