//! Locale-independent text output.
//!
//! | mode    | readable              | decimal              |
//! |---------|-----------------------|----------------------|
//! | degrees | `10°30'15.25"`        | `10.504236111111111` |
//! | radians | `3π/4`                | `2.356194490192345`  |
//!
//! Readable degree output omits trailing zero components: minutes appear only when minutes or seconds are
//! non-zero, seconds only when seconds are non-zero, and the fractional seconds only when they survive rounding to
//! [`SECONDS_DECIMAL_PLACES`]. Minutes and whole seconds are two digits wide. Values that round up to a full unit
//! carry into the next field (`59.999"` prints as the next whole minute).
//!
//! Readable radian output is the exact reduced coefficient of π: `0`, `π`, `2π/3`, … A numerator or denominator of
//! one is omitted.
//!
//! The glyphs are fixed: `°` (U+00B0), `'`, `"` and `π` (U+03C0).

use crate::angle::{Angle, DisplayStyle, Mode};
use crate::consts::{
    DEGREE_SYMBOL, DOUBLE_PRIME, FULL_TURN_DEGREES, PI_SYMBOL, PRIME, ROUND_FORMAT_RADIANS,
    SECONDS_DECIMAL_PLACES,
};
use crate::conversion::{
    degrees_to_sexagesimal, radians_to_coefficient, radians_to_degrees, round_to, Coefficient,
};
use core::fmt::{self, Write};
use num_traits::{Signed, Zero};

struct DegreeText<'a>(&'a Angle);

struct RadianText<'a>(&'a Angle);

impl fmt::Display for DegreeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let angle = self.0;
        match angle.display {
            DisplayStyle::Readable if angle.radians.is_finite() => write_sexagesimal(f, angle.radians),
            _ => write!(f, "{}", angle.degrees()),
        }
    }
}

impl fmt::Display for RadianText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let angle = self.0;
        match angle.display {
            DisplayStyle::Readable if angle.radians.is_finite() => write_coefficient(f, angle.radians),
            _ => write!(f, "{}", angle.radians),
        }
    }
}

fn write_sexagesimal<W: Write>(out: &mut W, radians: f64) -> fmt::Result {
    let dms = degrees_to_sexagesimal(radians_to_degrees(round_to(radians, ROUND_FORMAT_RADIANS)));
    let mut degrees = dms.degrees;
    let mut minutes = dms.minutes;
    let mut seconds = round_to(dms.seconds, SECONDS_DECIMAL_PLACES);

    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        degrees += 1.0;
    }
    if degrees >= FULL_TURN_DEGREES {
        degrees -= FULL_TURN_DEGREES;
    }

    write!(out, "{}{}", degrees as u32, DEGREE_SYMBOL)?;
    if minutes <= 0.0 && seconds <= 0.0 {
        return Ok(());
    }

    write!(out, "{:02}{}", minutes as u32, PRIME)?;
    if seconds <= 0.0 {
        return Ok(());
    }

    let mut whole = seconds.trunc();
    let mut fraction = round_to(seconds - whole, SECONDS_DECIMAL_PLACES);
    if fraction >= 1.0 {
        whole += fraction.trunc();
        fraction -= fraction.trunc();
    }

    write!(out, "{:02}", whole as u32)?;
    if fraction > 0.0 {
        // "0.25" -> ".25"
        let digits = round_to(fraction, SECONDS_DECIMAL_PLACES).to_string();
        out.write_str(digits.trim_start_matches('0'))?;
    }
    out.write_char(DOUBLE_PRIME)
}

fn write_coefficient<W: Write>(out: &mut W, radians: f64) -> fmt::Result {
    let mut coefficient = radians_to_coefficient(round_to(radians, ROUND_FORMAT_RADIANS));
    let full_turn = Coefficient::from_integer(2);
    if coefficient >= full_turn {
        coefficient -= full_turn;
    }

    if coefficient.is_zero() {
        return out.write_char('0');
    }

    if coefficient.is_negative() {
        out.write_char('-')?;
    }
    let numerator = coefficient.numer().abs();
    let denominator = coefficient.denom().abs();
    if numerator != 1 {
        write!(out, "{}", numerator)?;
    }
    out.write_char(PI_SYMBOL)?;
    if denominator != 1 {
        write!(out, "/{}", denominator)?;
    }
    Ok(())
}

impl Angle {
    /// Degree rendering in the current display style, regardless of mode.
    ///
    /// ```rust
    /// use angles::sexagesimal;
    /// assert_eq!(sexagesimal(10.0, 30.0, 15.0).to_deg_string(), "10°30'15\"");
    /// ```
    pub fn to_deg_string(&self) -> String {
        DegreeText(self).to_string()
    }

    /// Radian rendering in the current display style, regardless of mode.
    ///
    /// ```rust
    /// use angles::degrees;
    /// assert_eq!(degrees(90.0).to_rad_string(), "π/2");
    /// ```
    pub fn to_rad_string(&self) -> String {
        RadianText(self).to_string()
    }
}

/// Renders in the angle's mode: degrees as [`Angle::to_deg_string`], radians as [`Angle::to_rad_string`].
///
/// Width, fill and alignment apply to the whole rendering (`{:>8}` gives `     45°`).
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.mode {
            Mode::Degrees => DegreeText(self).to_string(),
            Mode::Radians => RadianText(self).to_string(),
        };
        f.pad(&text)
    }
}
