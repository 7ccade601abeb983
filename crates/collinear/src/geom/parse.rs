//! Decimal text to exact rational.
//!
//! Accepted forms: `12`, `-0.25`, `.5`, `3.`, `1e-3`, `2.5E+2`, `1/3`, `-0.5/1.5`.

use num_bigint::BigInt;
use num_traits::Zero;

use super::point::Coord;
use crate::error::{GeomError, Result};

/// Exponents beyond this are rejected rather than expanded into huge integers.
const MAX_EXPONENT: i64 = 4096;

/// Parse a coordinate exactly. Surrounding whitespace is ignored.
pub fn parse_coord(text: &str) -> Result<Coord> {
    let s = text.trim();
    if s.is_empty() {
        return Err(invalid(text, "empty"));
    }
    if let Some((num, den)) = s.split_once('/') {
        let num = parse_decimal(text, num.trim())?;
        let den = parse_decimal(text, den.trim())?;
        if den.is_zero() {
            return Err(invalid(text, "zero denominator"));
        }
        return Ok(num / den);
    }
    parse_decimal(text, s)
}

fn parse_decimal(text: &str, s: &str) -> Result<Coord> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => {
            let exp: i64 = body[i + 1..]
                .parse()
                .map_err(|_| invalid(text, "bad exponent"))?;
            (&body[..i], exp)
        }
        None => (body, 0),
    };
    if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
        return Err(invalid(text, "exponent out of range"));
    }
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid(text, "no digits"));
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid(text, "unexpected character"));
    }

    let digits = format!("{int_part}{frac_part}");
    let significand =
        BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| invalid(text, "no digits"))?;
    let scale = i64::try_from(frac_part.len())
        .ok()
        .and_then(|frac_digits| exponent.checked_sub(frac_digits))
        .ok_or_else(|| invalid(text, "exponent out of range"))?;
    let power =
        u32::try_from(scale.unsigned_abs()).map_err(|_| invalid(text, "exponent out of range"))?;
    let ten = BigInt::from(10u32);
    let value = if scale >= 0 {
        Coord::from_integer(significand * ten.pow(power))
    } else {
        Coord::new(significand, ten.pow(power))
    };
    Ok(if negative { -value } else { value })
}

fn invalid(text: &str, reason: &'static str) -> GeomError {
    GeomError::ParseCoord {
        text: text.to_string(),
        reason,
    }
}
