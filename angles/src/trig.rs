//! Trigonometric engine: direct, reciprocal, classical derived and inverse functions, plus angle classification.
//!
//! # Rounding
//!
//! `sin`, `cos` and `tan` are rounded to [`ROUND_TRIG`] decimal places, and a result that rounds to zero is returned
//! as positive `0.0`. `Angle::from_degrees(180.0).sin()` is therefore exactly `0.0` rather than `1.2e-16`.
//!
//! # Undefined points
//!
//! A function evaluated outside its domain returns `None`:
//!
//! | function | undefined at |
//! |----------|--------------|
//! | `tan`    | π/2, 3π/2 |
//! | `csc`    | 0, π |
//! | `sec`    | π/2 (and 3π/2) |
//! | `cot`    | 0, π |
//! | `asec`, `acsc` | 0 (and wherever `acos`/`asin` are) |
//! | `asin`, `acos` | outside `[-1, 1]` |
//!
//! The poles are matched with exact float equality against the canonical radians. Reciprocal functions
//! additionally return `None` whenever their rounded direct function is exactly zero, so they never divide by zero.
//! `exsec` and `excsc` propagate `None` from `sec` and `csc`.
//!
//! ```rust
//! use angles::degrees;
//!
//! assert_eq!(degrees(90.0).sin(), 1.0);
//! assert_eq!(degrees(90.0).tan(), None);
//! assert_eq!(degrees(90.0).cot(), Some(0.0));
//! ```

use crate::angle::Angle;
use crate::consts::{HALF_PI, PI, ROUND_TRIG, THREE_HALVES_PI};
use crate::conversion::round_to;

/// Round to [`ROUND_TRIG`] places; anything that rounds to zero becomes positive zero.
#[inline]
fn snap(x: f64) -> f64 {
    let r = round_to(x, ROUND_TRIG);
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[inline]
fn undefined<T>(function: &str, at: f64) -> Option<T> {
    log::trace!("{} is undefined at {} rad", function, at);
    None
}

#[inline]
fn reciprocal(function: &str, at: f64, direct: f64) -> Option<f64> {
    if direct == 0.0 {
        return undefined(function, at);
    }
    Some(1.0 / direct)
}

impl Angle {
    // ─────────────────────────────────────────────────────────────────────────
    // Direct functions
    // ─────────────────────────────────────────────────────────────────────────

    /// Sine.
    #[inline]
    pub fn sin(&self) -> f64 {
        snap(self.radians.sin())
    }

    /// Cosine.
    #[inline]
    pub fn cos(&self) -> f64 {
        snap(self.radians.cos())
    }

    /// Tangent; `None` at π/2 and 3π/2.
    pub fn tan(&self) -> Option<f64> {
        if self.radians == HALF_PI || self.radians == THREE_HALVES_PI {
            return undefined("tan", self.radians);
        }
        Some(snap(self.radians.tan()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reciprocal functions
    // ─────────────────────────────────────────────────────────────────────────

    /// Cosecant, `1 / sin`; `None` at 0 and π.
    pub fn csc(&self) -> Option<f64> {
        if self.radians == 0.0 || self.radians == PI {
            return undefined("csc", self.radians);
        }
        reciprocal("csc", self.radians, self.sin())
    }

    /// Secant, `1 / cos`; `None` at π/2.
    pub fn sec(&self) -> Option<f64> {
        if self.radians == HALF_PI {
            return undefined("sec", self.radians);
        }
        reciprocal("sec", self.radians, self.cos())
    }

    /// Cotangent, `1 / tan`; `None` at 0 and π, exactly `0` at π/2 and 3π/2.
    pub fn cot(&self) -> Option<f64> {
        if self.radians == 0.0 || self.radians == PI {
            return undefined("cot", self.radians);
        }
        if self.radians == HALF_PI || self.radians == THREE_HALVES_PI {
            return Some(0.0);
        }
        let tan = self.tan()?;
        reciprocal("cot", self.radians, tan)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Classical derived functions
    // ─────────────────────────────────────────────────────────────────────────

    /// Chord of the unit circle subtending this angle, `2·sin(θ/2)`.
    #[inline]
    pub fn crd(&self) -> f64 {
        2.0 * (*self / 2.0).sin()
    }

    /// Same as [`Angle::crd`].
    #[inline]
    pub fn chord(&self) -> f64 {
        self.crd()
    }

    /// Versed sine, `1 - cos`.
    #[inline]
    pub fn versin(&self) -> f64 {
        1.0 - self.cos()
    }

    /// Versed cosine, `1 + cos`.
    #[inline]
    pub fn vercosin(&self) -> f64 {
        1.0 + self.cos()
    }

    /// Coversed sine, `1 - sin`.
    #[inline]
    pub fn coversin(&self) -> f64 {
        1.0 - self.sin()
    }

    /// Coversed cosine, `1 + sin`.
    #[inline]
    pub fn covercosin(&self) -> f64 {
        1.0 + self.sin()
    }

    /// Haversine, `versin / 2`.
    #[inline]
    pub fn haversin(&self) -> f64 {
        self.versin() / 2.0
    }

    /// Havercosine, `vercosin / 2`.
    #[inline]
    pub fn havercosin(&self) -> f64 {
        self.vercosin() / 2.0
    }

    /// Hacoversine, `coversin / 2`.
    #[inline]
    pub fn hacoversin(&self) -> f64 {
        self.coversin() / 2.0
    }

    /// Hacovercosine, `covercosin / 2`.
    #[inline]
    pub fn hacovercosin(&self) -> f64 {
        self.covercosin() / 2.0
    }

    /// Exsecant, `sec - 1`.
    #[inline]
    pub fn exsec(&self) -> Option<f64> {
        self.sec().map(|sec| sec - 1.0)
    }

    /// Same as [`Angle::exsec`].
    #[inline]
    pub fn exsecant(&self) -> Option<f64> {
        self.exsec()
    }

    /// Excosecant, `csc - 1`.
    #[inline]
    pub fn excsc(&self) -> Option<f64> {
        self.csc().map(|csc| csc - 1.0)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inverse functions
    // ─────────────────────────────────────────────────────────────────────────

    /// Arcsine as a radian-mode angle; `None` outside `[-1, 1]`.
    pub fn asin(x: f64) -> Option<Angle> {
        if !(-1.0..=1.0).contains(&x) {
            return undefined("asin", x);
        }
        Some(Angle::from_radians(x.asin()))
    }

    /// Arccosine as a radian-mode angle; `None` outside `[-1, 1]`.
    pub fn acos(x: f64) -> Option<Angle> {
        if !(-1.0..=1.0).contains(&x) {
            return undefined("acos", x);
        }
        Some(Angle::from_radians(x.acos()))
    }

    /// Arctangent as a radian-mode angle.
    #[inline]
    pub fn atan(x: f64) -> Angle {
        Angle::from_radians(x.atan())
    }

    /// Four-quadrant arctangent of `y / x` as a radian-mode angle.
    #[inline]
    pub fn atan2(y: f64, x: f64) -> Angle {
        Angle::from_radians(y.atan2(x))
    }

    /// Arcsecant, `acos(1 / x)`; `None` at 0.
    pub fn asec(x: f64) -> Option<Angle> {
        if x == 0.0 {
            return undefined("asec", x);
        }
        Angle::acos(1.0 / x)
    }

    /// Arccosecant, `asin(1 / x)`; `None` at 0.
    pub fn acsc(x: f64) -> Option<Angle> {
        if x == 0.0 {
            return undefined("acsc", x);
        }
        Angle::asin(1.0 / x)
    }

    /// Arccotangent, defined here as `90° - atan(x)`.
    ///
    /// The result is a degree-mode angle in `(0°, 180°)` after normalization (`acot(-1)` is `135°`), which differs
    /// from the principal value convention `(-90°, 90°]` for negative `x`.
    #[inline]
    pub fn acot(x: f64) -> Angle {
        Angle::from_degrees(90.0) - Angle::atan(x)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Classification
    //
    // Boundaries use exact float equality on the normalized degree value: an
    // angle one ulp away from 90° is acute or obtuse, not right.
    // ─────────────────────────────────────────────────────────────────────────

    /// `0° <= θ < 90°`.
    pub fn is_acute(&self) -> bool {
        let d = self.degrees();
        (0.0..90.0).contains(&d)
    }

    /// `θ == 90°`.
    pub fn is_right(&self) -> bool {
        self.degrees() == 90.0
    }

    /// `90° < θ < 180°`.
    pub fn is_obtuse(&self) -> bool {
        let d = self.degrees();
        d > 90.0 && d < 180.0
    }

    /// `θ == 180°`.
    pub fn is_straight(&self) -> bool {
        self.degrees() == 180.0
    }

    /// `180° < θ < 360°`.
    pub fn is_reflex(&self) -> bool {
        let d = self.degrees();
        d > 180.0 && d < 360.0
    }

    /// Full turn. Storage wraps 360° to 0°, so this is `θ == 0°` and also holds for the zero angle.
    pub fn is_full(&self) -> bool {
        self.degrees() == 0.0
    }

    /// Not a multiple of 90°.
    pub fn is_oblique(&self) -> bool {
        let d = self.degrees();
        ![0.0, 90.0, 180.0, 270.0].contains(&d)
    }
}
