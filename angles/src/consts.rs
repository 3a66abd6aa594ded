//! Process-wide constants: turn fractions, output glyphs and rounding precisions.
//!
//! These are fixed at compile time. Formatting and trigonometry read them directly, so changing one of the
//! precisions changes the observable output of the whole crate.

/// π.
pub const PI: f64 = core::f64::consts::PI;
/// A full turn in radians (2π).
pub const TWO_PI: f64 = core::f64::consts::TAU;
/// A quarter turn in radians (π/2).
pub const HALF_PI: f64 = PI / 2.0;
/// Three quarter turns in radians (3π/2).
pub const THREE_HALVES_PI: f64 = 3.0 * PI / 2.0;

/// A full turn in degrees.
pub const FULL_TURN_DEGREES: f64 = 360.0;
/// Relative distance below a full turn that normalization treats as the full turn itself.
pub const FULL_TURN_SNAP: f64 = 4.0 * f64::EPSILON;

/// Lowercase pi, used in readable radian output.
pub const PI_SYMBOL: char = '\u{03c0}';
/// Degree sign.
pub const DEGREE_SYMBOL: char = '\u{00b0}';
/// Prime, marks arcminutes.
pub const PRIME: char = '\'';
/// Double prime, marks arcseconds.
pub const DOUBLE_PRIME: char = '"';

/// Decimal places kept on the seconds field of readable degree output.
pub const SECONDS_DECIMAL_PLACES: i32 = 2;
/// Decimal places kept on total and digit seconds accessors.
pub const ROUND_SECONDS: i32 = 10;
/// Decimal places kept on trigonometric results.
pub const ROUND_TRIG: i32 = 12;
/// Decimal places kept on a total in seconds before it is split into degrees, minutes and seconds.
pub const ROUND_SEXAGESIMAL: i32 = 9;
/// Decimal places kept on the radian value before readable formatting.
pub const ROUND_FORMAT_RADIANS: i32 = 10;
/// Decimal places kept on the numeric degree value of a degree-mode angle.
pub const ROUND_DEGREES_VALUE: i32 = 12;

/// Largest distance between `r/π` and the rational coefficient chosen for it.
pub const COEFFICIENT_TOLERANCE: f64 = 1e-10;
