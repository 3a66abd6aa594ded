//! The [`Angle`] value type, its presentation enums, accessors and digit setters.
//!
//! An `Angle` stores exactly one number: its *canonical radians*, always inside `[0, 2π)`. Everything else
//! (degrees, minutes, seconds, the sexagesimal digits, the coefficient of π) is derived from that value on demand,
//! and every setter recomputes the canonical radians from scratch and normalizes again.
//!
//! [`Mode`] and [`DisplayStyle`] only change presentation: which unit [`Angle::value`] and `Display` use, and
//! whether the output is symbolic. They never affect storage, comparison or arithmetic.
//!
//! ## Digit accessors
//!
//! [`Angle::d`], [`Angle::m`] and [`Angle::s`] read the sexagesimal *digits*; [`Angle::minutes`] and
//! [`Angle::seconds`] read *totals*. The digit transforms ([`Angle::with_d`], [`Angle::with_m`], [`Angle::with_s`])
//! replace one digit and keep the other two:
//!
//! ```rust
//! use angles::sexagesimal;
//!
//! let a = sexagesimal(12.0, 30.0, 0.0);
//! assert_eq!(a.with_d(5.0).to_string(), "5°30'");
//! assert_eq!(a.with_m(45.0).to_string(), "12°45'");
//! ```
//!
//! Degree values recovered from radians carry binary noise (`30°` reads back as `29.999999999999996`). All three
//! digits are cut from one total in seconds rounded to [`ROUND_SEXAGESIMAL`](crate::consts::ROUND_SEXAGESIMAL)
//! places (see [`degrees_to_sexagesimal`]), so they always describe the same point: `12.9999999996°` is
//! `12°59'59.99999856"`, never `13°59'`.

use crate::consts::{ROUND_DEGREES_VALUE, ROUND_SECONDS};
use crate::conversion::{
    coefficient_to_radians, degrees_to_radians, degrees_to_sexagesimal, normalize_radians,
    radians_to_coefficient, radians_to_degrees, round_to, sexagesimal_to_degrees, Coefficient,
    Sexagesimal,
};
use crate::error::{AngleError, Result};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit used by [`Angle::value`] and by `Display`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Degrees; readable output is `D°MM'SS"`.
    #[default]
    Degrees,
    /// Radians; readable output is a fraction of π.
    Radians,
}

impl Mode {
    /// Lowercase name, as accepted by `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Degrees => "degrees",
            Mode::Radians => "radians",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "degrees" | "deg" => Ok(Mode::Degrees),
            "radians" | "rad" => Ok(Mode::Radians),
            _ => Err(AngleError::UnknownMode(s.to_owned())),
        }
    }
}

/// Formatting style used by `Display`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum DisplayStyle {
    /// Symbolic output: `D°MM'SS"` or `Nπ/D`.
    #[default]
    Readable,
    /// Plain decimal numeral in the angle's mode.
    Decimal,
}

impl DisplayStyle {
    /// Lowercase name, as accepted by `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DisplayStyle::Readable => "readable",
            DisplayStyle::Decimal => "decimal",
        }
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayStyle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "readable" => Ok(DisplayStyle::Readable),
            "decimal" => Ok(DisplayStyle::Decimal),
            _ => Err(AngleError::UnknownDisplay(s.to_owned())),
        }
    }
}

/// A planar angle stored as canonical radians in `[0, 2π)`.
///
/// Equality and ordering look at the canonical radians only, so angles congruent modulo a full turn are equal
/// (`-10°` equals `350°`) and `mode`/`display` are ignored. See the `ops` module for the operator set.
///
/// # Examples
///
/// ```rust
/// use angles::{Angle, Mode};
///
/// let a = Angle::new(-90.0, Mode::Degrees);
/// assert!((a.degrees() - 270.0).abs() < 1e-9);
/// assert_eq!(a.to_radians().to_string(), "3π/2");
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "AngleRepr"))]
pub struct Angle {
    pub(crate) radians: f64,
    pub(crate) mode: Mode,
    pub(crate) display: DisplayStyle,
}

impl Default for Angle {
    fn default() -> Self {
        Angle::with_display(0.0, Mode::Degrees, DisplayStyle::Readable)
    }
}

impl Angle {
    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Angle of `value` interpreted in `mode`, with readable display.
    #[inline]
    pub fn new(value: f64, mode: Mode) -> Self {
        Self::with_display(value, mode, DisplayStyle::Readable)
    }

    /// Angle of `value` interpreted in `mode`, with an explicit display style.
    pub fn with_display(value: f64, mode: Mode, display: DisplayStyle) -> Self {
        let radians = match mode {
            Mode::Degrees => degrees_to_radians(value),
            Mode::Radians => normalize_radians(value),
        };
        Self {
            radians,
            mode,
            display,
        }
    }

    /// Like [`Angle::new`], but rejects NaN and infinities instead of storing NaN.
    pub fn try_new(value: f64, mode: Mode) -> Result<Self> {
        if !value.is_finite() {
            log::debug!("rejected non-finite {} value {}", mode, value);
            return Err(AngleError::NonFinite { value });
        }
        Ok(Self::new(value, mode))
    }

    /// Degree-mode angle.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees, Mode::Degrees)
    }

    /// Radian-mode angle.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self::new(radians, Mode::Radians)
    }

    /// Degree-mode angle from degrees, minutes and seconds.
    ///
    /// Minutes and seconds are not range-checked: `(0, 90, 0)` is `1°30'`.
    #[inline]
    pub fn from_sexagesimal(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self::from_degrees(sexagesimal_to_degrees(degrees, minutes, seconds))
    }

    /// Radian-mode angle of `coefficient · π`.
    #[inline]
    pub fn from_coefficient(coefficient: Coefficient) -> Self {
        Self::from_radians(coefficient_to_radians(coefficient))
    }

    /// Same position with a different display style.
    #[inline]
    pub fn displayed(self, display: DisplayStyle) -> Self {
        Self { display, ..self }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────────────────────

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current display style.
    #[inline]
    pub fn display(&self) -> DisplayStyle {
        self.display
    }

    /// Change the mode. Storage is untouched.
    #[inline]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Change the display style. Storage is untouched.
    #[inline]
    pub fn set_display(&mut self, display: DisplayStyle) {
        self.display = display;
    }

    /// Copy of this angle in degree mode, keeping the display style.
    #[inline]
    pub fn to_degrees(self) -> Self {
        Self {
            mode: Mode::Degrees,
            ..self
        }
    }

    /// Copy of this angle in radian mode, keeping the display style.
    #[inline]
    pub fn to_radians(self) -> Self {
        Self {
            mode: Mode::Radians,
            ..self
        }
    }

    /// Numeric value in the current mode.
    ///
    /// Degree mode rounds to [`ROUND_DEGREES_VALUE`] places so that `90°` reads back as `90.0`; radian mode returns
    /// the canonical radians unchanged.
    pub fn value(&self) -> f64 {
        match self.mode {
            Mode::Degrees => round_to(self.degrees(), ROUND_DEGREES_VALUE),
            Mode::Radians => self.radians,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Canonical radians, in `[0, 2π)`.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Degrees, in `[0, 360)`.
    #[inline]
    pub fn degrees(&self) -> f64 {
        radians_to_degrees(self.radians)
    }

    /// Total minutes (`degrees · 60`), not the minutes digit.
    #[inline]
    pub fn minutes(&self) -> f64 {
        self.degrees() * 60.0
    }

    /// Total seconds (`minutes · 60`), rounded to [`ROUND_SECONDS`] places.
    #[inline]
    pub fn seconds(&self) -> f64 {
        round_to(self.minutes() * 60.0, ROUND_SECONDS)
    }

    /// Whole-degree digit, `0..360`.
    #[inline]
    pub fn d(&self) -> u32 {
        self.sexagesimal().degrees as u32
    }

    /// Minutes digit, `0..60`.
    #[inline]
    pub fn m(&self) -> u32 {
        self.sexagesimal().minutes as u32
    }

    /// Seconds digit, `[0, 60)`, rounded to [`ROUND_SECONDS`] places.
    #[inline]
    pub fn s(&self) -> f64 {
        round_to(self.sexagesimal().seconds, ROUND_SECONDS)
    }

    /// Degrees, minutes and seconds as produced by [`degrees_to_sexagesimal`].
    #[inline]
    pub fn sexagesimal(&self) -> Sexagesimal {
        degrees_to_sexagesimal(self.degrees())
    }

    /// This angle as a reduced multiple of π.
    #[inline]
    pub fn coefficient(&self) -> Coefficient {
        radians_to_coefficient(self.radians)
    }

    /// Fraction of a full turn (coefficient of π halved).
    #[inline]
    pub fn turns(&self) -> Coefficient {
        self.coefficient() / 2
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pure transforms
    // ─────────────────────────────────────────────────────────────────────────

    /// Same presentation, new position given in radians.
    #[inline]
    pub fn with_radians(self, radians: f64) -> Self {
        Self {
            radians: normalize_radians(radians),
            ..self
        }
    }

    /// Same presentation, new position given in degrees.
    #[inline]
    pub fn with_degrees(self, degrees: f64) -> Self {
        Self {
            radians: degrees_to_radians(degrees),
            ..self
        }
    }

    /// Same presentation, new position given in total minutes.
    #[inline]
    pub fn with_minutes(self, minutes: f64) -> Self {
        self.with_degrees(minutes / 60.0)
    }

    /// Same presentation, new position given in total seconds.
    #[inline]
    pub fn with_seconds(self, seconds: f64) -> Self {
        self.with_degrees(seconds / 3600.0)
    }

    /// Replace the whole-degree digit, keeping minutes and seconds.
    pub fn with_d(self, d: f64) -> Self {
        self.with_degrees(self.degrees() - f64::from(self.d()) + d)
    }

    /// Replace the minutes digit, keeping degrees and seconds.
    ///
    /// Values outside `0..60` carry into the degrees.
    pub fn with_m(self, m: f64) -> Self {
        self.with_minutes(self.minutes() - f64::from(self.m()) + m)
    }

    /// Replace the seconds digit, keeping degrees and minutes.
    pub fn with_s(self, s: f64) -> Self {
        self.with_seconds(self.seconds() - self.s() + s)
    }

    /// Absolute value of the stored radians.
    ///
    /// Storage is never negative, so this is the identity on every constructed angle.
    #[inline]
    pub fn abs(self) -> Self {
        self.with_radians(self.radians.abs())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Setters
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the position in radians.
    #[inline]
    pub fn set_radians(&mut self, radians: f64) {
        *self = self.with_radians(radians);
    }

    /// Set the position in degrees.
    #[inline]
    pub fn set_degrees(&mut self, degrees: f64) {
        *self = self.with_degrees(degrees);
    }

    /// Set the position in total minutes.
    #[inline]
    pub fn set_minutes(&mut self, minutes: f64) {
        *self = self.with_minutes(minutes);
    }

    /// Set the position in total seconds.
    #[inline]
    pub fn set_seconds(&mut self, seconds: f64) {
        *self = self.with_seconds(seconds);
    }

    /// In-place [`Angle::with_d`].
    #[inline]
    pub fn set_d(&mut self, d: f64) {
        *self = self.with_d(d);
    }

    /// In-place [`Angle::with_m`].
    #[inline]
    pub fn set_m(&mut self, m: f64) {
        *self = self.with_m(m);
    }

    /// In-place [`Angle::with_s`].
    #[inline]
    pub fn set_s(&mut self, s: f64) {
        *self = self.with_s(s);
    }

    /// In-place [`Angle::abs`].
    #[inline]
    pub fn abs_mut(&mut self) {
        *self = self.abs();
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct AngleRepr {
    radians: f64,
    #[serde(default)]
    mode: Mode,
    #[serde(default)]
    display: DisplayStyle,
}

#[cfg(feature = "serde")]
impl From<AngleRepr> for Angle {
    fn from(repr: AngleRepr) -> Self {
        Angle {
            radians: normalize_radians(repr.radians),
            mode: repr.mode,
            display: repr.display,
        }
    }
}
