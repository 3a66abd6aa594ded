//! Reading angles back from text.
//!
//! `str::parse::<Angle>()` accepts what the readable formatter writes, plus plain numerals:
//!
//! | input                              | mode    | display  |
//! |------------------------------------|---------|----------|
//! | `45°`, `12°30'`, `10°30'15.25"`    | degrees | readable |
//! | `0`, `π`, `2π`, `π/6`, `3π/2`      | radians | readable |
//! | `12.5`, `-0.75`                    | degrees | decimal  |
//!
//! Every form takes an optional leading `-`. Minutes and seconds must be below 60, and a π-fraction must have a
//! non-zero denominator. Surrounding whitespace is ignored; whitespace inside a form is not.
//!
//! Decimal output of a radian-mode angle is a bare numeral and reads back as *degrees*; only readable output
//! round-trips through the parser.

use crate::angle::{Angle, DisplayStyle, Mode};
use crate::consts::{DEGREE_SYMBOL, DOUBLE_PRIME, PI_SYMBOL, PRIME};
use crate::conversion::{sexagesimal_to_degrees, Coefficient};
use crate::error::{AngleError, Result};
use core::str::FromStr;

fn invalid(input: &str, reason: &'static str) -> AngleError {
    log::debug!("cannot parse {:?} as an angle: {}", input, reason);
    AngleError::Parse {
        input: input.to_owned(),
        reason,
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Unsigned decimal field: digits with at most one `.`.
fn is_unsigned_decimal(text: &str) -> bool {
    let mut parts = text.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    match parts.next() {
        None => is_digits(whole),
        Some(fraction) => {
            (whole.is_empty() || is_digits(whole))
                && (fraction.is_empty() || is_digits(fraction))
                && !(whole.is_empty() && fraction.is_empty())
        }
    }
}

fn sexagesimal_field(text: &str, input: &str, reason: &'static str) -> Result<f64> {
    if !is_unsigned_decimal(text) {
        return Err(invalid(input, reason));
    }
    text.parse::<f64>().map_err(|_| invalid(input, reason))
}

fn integer_field(text: &str, input: &str, reason: &'static str) -> Result<i64> {
    if !is_digits(text) {
        return Err(invalid(input, reason));
    }
    text.parse::<i64>().map_err(|_| invalid(input, reason))
}

/// `D°`, `D°MM'` or `D°MM'SS.ff"`, unsigned, as decimal degrees.
fn parse_sexagesimal(body: &str, input: &str) -> Result<f64> {
    let (degrees, rest) = body
        .split_once(DEGREE_SYMBOL)
        .ok_or_else(|| invalid(input, "missing degree sign"))?;
    let degrees = sexagesimal_field(degrees, input, "degrees are not a number")?;
    if rest.is_empty() {
        return Ok(degrees);
    }

    let (minutes, rest) = rest
        .split_once(PRIME)
        .ok_or_else(|| invalid(input, "expected minutes followed by '"))?;
    let minutes = sexagesimal_field(minutes, input, "minutes are not a number")?;
    if minutes >= 60.0 {
        return Err(invalid(input, "minutes must be below 60"));
    }
    if rest.is_empty() {
        return Ok(sexagesimal_to_degrees(degrees, minutes, 0.0));
    }

    let seconds = rest
        .strip_suffix(DOUBLE_PRIME)
        .ok_or_else(|| invalid(input, "expected seconds followed by \""))?;
    let seconds = sexagesimal_field(seconds, input, "seconds are not a number")?;
    if seconds >= 60.0 {
        return Err(invalid(input, "seconds must be below 60"));
    }
    Ok(sexagesimal_to_degrees(degrees, minutes, seconds))
}

/// `π`, `Nπ`, `π/D` or `Nπ/D`, unsigned.
fn parse_coefficient(body: &str, input: &str) -> Result<Coefficient> {
    let (numerator, rest) = body
        .split_once(PI_SYMBOL)
        .ok_or_else(|| invalid(input, "missing π"))?;
    let numerator = if numerator.is_empty() {
        1
    } else {
        integer_field(numerator, input, "coefficient of π is not an integer")?
    };
    let denominator = if rest.is_empty() {
        1
    } else {
        let denominator = rest
            .strip_prefix('/')
            .ok_or_else(|| invalid(input, "expected /denominator after π"))?;
        integer_field(denominator, input, "denominator is not an integer")?
    };
    if denominator == 0 {
        return Err(invalid(input, "zero denominator"));
    }
    Ok(Coefficient::new(numerator, denominator))
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Err(invalid(s, "empty input"));
        }

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if body.contains(DEGREE_SYMBOL) {
            let degrees = parse_sexagesimal(body, s)?;
            if !degrees.is_finite() {
                return Err(invalid(s, "not a finite number"));
            }
            return Ok(Angle::from_degrees(if negative { -degrees } else { degrees }));
        }

        if body.contains(PI_SYMBOL) {
            let coefficient = parse_coefficient(body, s)?;
            return Ok(Angle::from_coefficient(if negative { -coefficient } else { coefficient }));
        }

        // what the radian formatter writes for a zero coefficient
        if text == "0" {
            return Ok(Angle::from_radians(0.0));
        }

        let value: f64 = text.parse().map_err(|_| invalid(s, "not a number"))?;
        if !value.is_finite() {
            return Err(invalid(s, "not a finite number"));
        }
        Ok(Angle::with_display(value, Mode::Degrees, DisplayStyle::Decimal))
    }
}
