//! Plane angles with a single canonical representation.
//!
//! `angles` models an angle as one `f64`, its *canonical radians*, normalized into `[0, 2π)`. Degrees, sexagesimal
//! digits (degrees, arc-minutes, arc-seconds) and exact rational multiples of π are all derived from that value, and
//! every operation re-normalizes its result.
//!
//! - [`Angle`] is the value type: constructors, accessors, digit setters and mode conversion.
//! - [`Mode`] and [`DisplayStyle`] select how an angle is presented. They never affect comparison or arithmetic.
//! - The trigonometric engine covers direct, reciprocal, classical derived (versine, haversine, …) and inverse
//!   functions. Points outside a function's domain return `None`.
//! - `Display` renders `10°30'15.25"` or `3π/4` in readable style, plain numerals in decimal style, and
//!   [`str::parse`] reads those back.
//!
//! # Quick start
//!
//! ```rust
//! use angles::{degrees, sexagesimal};
//!
//! let a = degrees(10.0) + degrees(350.0);
//! assert!(a.degrees().abs() < 1e-9);
//!
//! let b = sexagesimal(10.0, 30.0, 15.0);
//! assert_eq!(b.to_string(), "10°30'15\"");
//! assert_eq!(degrees(90.0).to_radians().to_string(), "π/2");
//!
//! assert_eq!(degrees(90.0).sin(), 1.0);
//! assert_eq!(degrees(90.0).tan(), None);
//! ```
//!
//! Digit setters keep the other two digits:
//!
//! ```rust
//! use angles::sexagesimal;
//!
//! let mut a = sexagesimal(12.0, 30.0, 0.0);
//! a.set_d(5.0);
//! assert_eq!(a.to_string(), "5°30'");
//! ```
//!
//! # Canonical equality
//!
//! Two angles are equal when their canonical radians are equal. Congruent inputs therefore collapse:
//! `degrees(-10.0) == degrees(350.0)` and `degrees(720.0) == degrees(0.0)`. Ordering is a total order over
//! `[0, 2π)`, so `359°` is greater than `1°`.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Angle`], [`Mode`] and [`DisplayStyle`]. Deserialized angles are
//!   normalized again.
//!
//! # Panics and errors
//!
//! Nothing in this crate panics. Construction and arithmetic follow IEEE-754 (a NaN input gives a NaN angle);
//! [`Angle::try_new`] and [`Angle::checked_div`] reject those cases with an [`AngleError`]. Parsing and the
//! `FromStr` impls of the presentation enums return [`AngleError`] as well.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger: `trace` when a trigonometric function
//! is undefined at its argument, `debug` when a checked operation or the parser rejects its input.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Modules
// ─────────────────────────────────────────────────────────────────────────────

mod angle;
pub mod consts;
pub mod conversion;
mod error;
mod format;
mod ops;
mod parse;
mod trig;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use angle::{Angle, DisplayStyle, Mode};
pub use conversion::{Coefficient, Sexagesimal};
pub use error::{AngleError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Factories
// ─────────────────────────────────────────────────────────────────────────────

/// Degree-mode angle of `x` degrees.
#[inline]
pub fn degrees(x: f64) -> Angle {
    Angle::from_degrees(x)
}

/// Radian-mode angle of `x` radians.
#[inline]
pub fn radians(x: f64) -> Angle {
    Angle::from_radians(x)
}

/// Degree-mode angle of `d° m' s"`.
#[inline]
pub fn sexagesimal(d: f64, m: f64, s: f64) -> Angle {
    Angle::from_sexagesimal(d, m, s)
}
