//! Normalization and conversion between angular representations.
//!
//! Everything in this module is a pure function over `f64` (or an exact [`Coefficient`]). Each conversion lands in
//! a canonical range:
//!
//! * degrees are wrapped into `[0, 360)`,
//! * radians are wrapped into `[0, 2π)`,
//! * sexagesimal triples carry integer-valued degrees and minutes and fractional seconds.
//!
//! Wrapping is a Euclidean remainder, so negative inputs wrap *up* (`-10°` becomes `350°`) and the upper bound is
//! never returned. Results within [`FULL_TURN_SNAP`] (relative) of a full turn are returned as zero, so that
//! `10° + 350°` lands on `0` instead of one ulp below `2π`. A negative zero input is returned as positive zero.
//!
//! ## Coefficients of π
//!
//! A radian value `r` is also expressed as a reduced fraction `c` with `r ≈ c·π`. Binary floats cannot hold `π/2`
//! exactly, so [`radians_to_coefficient`] recovers the fraction with [`rationalize`]: the first continued-fraction
//! convergent of `r/π` that lies within [`COEFFICIENT_TOLERANCE`].
//!
//! ```rust
//! use angles::conversion::{degrees_to_coefficient, normalize_degrees};
//! use num_rational::Ratio;
//!
//! assert_eq!(normalize_degrees(-10.0), 350.0);
//! assert_eq!(degrees_to_coefficient(90.0), Ratio::new(1, 2));
//! ```

use crate::consts::{
    COEFFICIENT_TOLERANCE, FULL_TURN_DEGREES, FULL_TURN_SNAP, PI, ROUND_SEXAGESIMAL, TWO_PI,
};
use num_rational::Ratio;
use num_traits::Zero;

/// Exact rational multiple of π.
pub type Coefficient = Ratio<i64>;

/// Continued-fraction terms tried before [`rationalize`] settles for the last convergent.
const MAX_CONVERGENTS: usize = 64;

/// Largest magnitude [`rationalize`] expands as a continued fraction.
const MAX_RATIONAL_MAGNITUDE: f64 = (1_u64 << 52) as f64;

#[inline]
fn wrap(x: f64, modulus: f64) -> f64 {
    let r = x.rem_euclid(modulus);
    // a few ulps short of a full turn is a full turn
    if modulus - r <= modulus * FULL_TURN_SNAP {
        0.0
    } else {
        r + 0.0
    }
}

/// Round `x` to `places` decimal places, halves away from zero.
#[inline]
pub fn round_to(x: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (x * factor).round() / factor
}

/// Normalize a degree value into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    wrap(degrees, FULL_TURN_DEGREES)
}

/// Normalize a radian value into `[0, 2π)`.
#[inline]
pub fn normalize_radians(radians: f64) -> f64 {
    wrap(radians, TWO_PI)
}

/// Convert degrees to normalized radians.
///
/// The degrees are normalized first, so congruent inputs (`-10`, `350`, `710`) give bit-identical radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    normalize_radians(normalize_degrees(degrees) * PI / 180.0)
}

/// Convert radians to normalized degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    normalize_degrees(radians * 180.0 / PI)
}

/// A degree value split into degrees, minutes and seconds.
///
/// `degrees` and `minutes` are integer-valued; `seconds` keeps the fractional part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sexagesimal {
    /// Whole degrees, `0..360`.
    pub degrees: f64,
    /// Whole minutes, `0..60`.
    pub minutes: f64,
    /// Seconds, `[0, 60)`.
    pub seconds: f64,
}

impl Sexagesimal {
    /// Recombine the components into decimal degrees.
    #[inline]
    pub fn to_degrees(self) -> f64 {
        sexagesimal_to_degrees(self.degrees, self.minutes, self.seconds)
    }
}

/// Split a degree value into sexagesimal components.
///
/// The input is normalized first and converted to total seconds, which are rounded to [`ROUND_SEXAGESIMAL`] places.
/// All three components are cut from that one total, so binary noise such as `29.999999999999996` reads as `30°`
/// and the components never disagree about which degree or minute the value lies in. `360°` wraps to `0°`.
///
/// ```rust
/// use angles::conversion::degrees_to_sexagesimal;
///
/// let dms = degrees_to_sexagesimal(-0.5);
/// assert_eq!((dms.degrees, dms.minutes), (359.0, 30.0));
/// assert!(dms.seconds.abs() < 1e-9);
/// ```
pub fn degrees_to_sexagesimal(degrees: f64) -> Sexagesimal {
    let total = round_to(normalize_degrees(degrees) * 3600.0, ROUND_SEXAGESIMAL);
    let whole_minutes = (total / 60.0).floor();
    let whole_degrees = (whole_minutes / 60.0).floor();

    Sexagesimal {
        degrees: normalize_degrees(whole_degrees),
        minutes: whole_minutes - whole_degrees * 60.0,
        seconds: total - whole_minutes * 60.0,
    }
}

/// Combine degrees, minutes and seconds into decimal degrees.
///
/// Only the degree component is normalized; minutes and seconds are added as given, so the result may exceed
/// `360` when they do.
#[inline]
pub fn sexagesimal_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    normalize_degrees(degrees) + minutes / 60.0 + seconds / 3600.0
}

/// Best rational approximation of `x` within `tolerance`.
///
/// Walks the continued-fraction expansion of `x` and returns the first convergent `p/q` with
/// `|p/q - x| <= tolerance`. Convergents are already in lowest terms. The expansion stops early when the next
/// convergent would overflow `i64`; the last representable convergent is returned then.
///
/// Non-finite input yields zero. Magnitudes beyond `2^52` (where every `f64` is an integer) are returned as the
/// integer itself.
pub fn rationalize(x: f64, tolerance: f64) -> Coefficient {
    if !x.is_finite() {
        return Coefficient::zero();
    }
    if x.abs() >= MAX_RATIONAL_MAGNITUDE {
        return Coefficient::from_integer(x.trunc() as i64);
    }

    let target = x.abs();
    let (mut h_prev, mut h) = (0_i64, 1_i64);
    let (mut k_prev, mut k) = (1_i64, 0_i64);
    let mut rest = target;

    for _ in 0..MAX_CONVERGENTS {
        let term = rest.floor();
        let a = term as i64;
        let next_h = a.checked_mul(h).and_then(|v| v.checked_add(h_prev));
        let next_k = a.checked_mul(k).and_then(|v| v.checked_add(k_prev));
        let (Some(next_h), Some(next_k)) = (next_h, next_k) else {
            break;
        };
        (h_prev, h) = (h, next_h);
        (k_prev, k) = (k, next_k);

        let fraction = rest - term;
        if fraction == 0.0 || (h as f64 / k as f64 - target).abs() <= tolerance {
            break;
        }
        rest = 1.0 / fraction;
    }

    let numerator = if x < 0.0 { -h } else { h };
    Coefficient::new(numerator, k)
}

#[inline]
fn coefficient_to_f64(coefficient: Coefficient) -> f64 {
    *coefficient.numer() as f64 / *coefficient.denom() as f64
}

/// Express a radian value as a reduced rational multiple of π.
///
/// The input is not normalized: `3π` maps to `3`.
#[inline]
pub fn radians_to_coefficient(radians: f64) -> Coefficient {
    rationalize(radians / PI, COEFFICIENT_TOLERANCE)
}

/// Convert a coefficient of π to normalized radians.
#[inline]
pub fn coefficient_to_radians(coefficient: Coefficient) -> f64 {
    normalize_radians(coefficient_to_f64(coefficient) * PI)
}

/// Express a degree value as a reduced rational multiple of π (after normalization).
#[inline]
pub fn degrees_to_coefficient(degrees: f64) -> Coefficient {
    radians_to_coefficient(degrees_to_radians(degrees))
}

/// Convert a coefficient of π to normalized degrees.
#[inline]
pub fn coefficient_to_degrees(coefficient: Coefficient) -> f64 {
    normalize_degrees(coefficient_to_f64(coefficient) * 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HALF_PI;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Normalization
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn normalize_degrees_wraps_both_directions() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(-370.0), 350.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn normalize_degrees_boundaries() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert!(normalize_degrees(-0.0).is_sign_positive());
    }

    #[test]
    fn normalize_radians_boundaries() {
        assert_eq!(normalize_radians(0.0), 0.0);
        assert_eq!(normalize_radians(TWO_PI), 0.0);
        assert_abs_diff_eq!(normalize_radians(-HALF_PI), 3.0 * HALF_PI, epsilon = 1e-12);
    }

    #[test]
    fn normalize_radians_tiny_negative_stays_below_full_turn() {
        let r = normalize_radians(-1e-20);
        assert!(r < TWO_PI);
        assert!(r >= 0.0);
    }

    #[test]
    fn normalize_snaps_float_noise_below_full_turn() {
        assert_eq!(normalize_radians(TWO_PI - 1e-15), 0.0);
        assert_eq!(normalize_degrees(359.999_999_999_999_94), 0.0);
        assert!(normalize_radians(TWO_PI - 1e-12) > 0.0);
    }

    #[test]
    fn congruent_degrees_give_identical_radians() {
        assert_eq!(degrees_to_radians(-10.0), degrees_to_radians(350.0));
        assert_eq!(degrees_to_radians(710.0), degrees_to_radians(350.0));
    }

    #[test]
    fn normalize_propagates_nan() {
        assert!(normalize_degrees(f64::NAN).is_nan());
        assert!(normalize_radians(f64::INFINITY).is_nan());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Degrees / radians
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn degrees_to_radians_known_values() {
        assert_eq!(degrees_to_radians(90.0), HALF_PI);
        assert_eq!(degrees_to_radians(180.0), PI);
        assert_eq!(degrees_to_radians(360.0), 0.0);
        assert_abs_diff_eq!(degrees_to_radians(-90.0), 3.0 * HALF_PI, epsilon = 1e-12);
    }

    #[test]
    fn radians_to_degrees_known_values() {
        assert_eq!(radians_to_degrees(PI), 180.0);
        assert_eq!(radians_to_degrees(HALF_PI), 90.0);
        assert_abs_diff_eq!(radians_to_degrees(-PI / 4.0), 315.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sexagesimal
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn sexagesimal_split_half_degree() {
        let dms = degrees_to_sexagesimal(10.5);
        assert_eq!(dms.degrees, 10.0);
        assert_eq!(dms.minutes, 30.0);
        assert_abs_diff_eq!(dms.seconds, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn sexagesimal_split_with_seconds() {
        let dms = degrees_to_sexagesimal(sexagesimal_to_degrees(10.0, 30.0, 15.0));
        assert_eq!(dms.degrees, 10.0);
        assert_eq!(dms.minutes, 30.0);
        assert_abs_diff_eq!(dms.seconds, 15.0, epsilon = 1e-5);
    }

    #[test]
    fn sexagesimal_split_carries_float_noise() {
        let dms = degrees_to_sexagesimal(12.999_999_999_999_998);
        assert_eq!(dms.degrees, 13.0);
        assert_eq!(dms.minutes, 0.0);
        assert_abs_diff_eq!(dms.seconds, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn sexagesimal_split_wraps_full_turn() {
        let dms = degrees_to_sexagesimal(359.999_999_999_999_9);
        assert_eq!(dms.degrees, 0.0);
        assert_eq!(dms.minutes, 0.0);
    }

    #[test]
    fn sexagesimal_split_below_whole_degree_stays_in_that_degree() {
        let dms = degrees_to_sexagesimal(359.999_999_999_9);
        assert_eq!((dms.degrees, dms.minutes), (359.0, 59.0));
        assert!(dms.seconds > 59.999 && dms.seconds < 60.0);

        let dms = degrees_to_sexagesimal(12.999_999_999_6);
        assert_eq!((dms.degrees, dms.minutes), (12.0, 59.0));
        assert_abs_diff_eq!(dms.seconds, 59.999_998_56, epsilon = 1e-6);
    }

    #[test]
    fn sexagesimal_join_normalizes_degrees_only() {
        assert_eq!(sexagesimal_to_degrees(370.0, 30.0, 0.0), 10.5);
        assert_eq!(sexagesimal_to_degrees(0.0, 90.0, 0.0), 1.5);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Coefficients of π
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn rationalize_recovers_simple_fractions() {
        assert_eq!(rationalize(0.5, 1e-10), Ratio::new(1, 2));
        assert_eq!(rationalize(0.333_333_333_333_3, 1e-10), Ratio::new(1, 3));
        assert_eq!(rationalize(-0.75, 1e-10), Ratio::new(-3, 4));
        assert_eq!(rationalize(2.0, 1e-10), Ratio::from_integer(2));
        assert_eq!(rationalize(0.0, 1e-10), Ratio::from_integer(0));
    }

    #[test]
    fn rationalize_non_finite_is_zero() {
        assert_eq!(rationalize(f64::NAN, 1e-10), Ratio::from_integer(0));
        assert_eq!(rationalize(f64::INFINITY, 1e-10), Ratio::from_integer(0));
    }

    #[test]
    fn rationalize_huge_values_are_integers() {
        let big = 1e17;
        assert_eq!(rationalize(big, 1e-10), Ratio::from_integer(100_000_000_000_000_000));
    }

    #[test]
    fn coefficient_of_common_angles() {
        assert_eq!(degrees_to_coefficient(90.0), Ratio::new(1, 2));
        assert_eq!(degrees_to_coefficient(45.0), Ratio::new(1, 4));
        assert_eq!(degrees_to_coefficient(270.0), Ratio::new(3, 2));
        assert_eq!(degrees_to_coefficient(-90.0), Ratio::new(3, 2));
        assert_eq!(degrees_to_coefficient(120.0), Ratio::new(2, 3));
        assert_eq!(radians_to_coefficient(PI), Ratio::from_integer(1));
    }

    #[test]
    fn coefficient_is_not_normalized() {
        assert_eq!(radians_to_coefficient(3.0 * PI), Ratio::from_integer(3));
    }

    #[test]
    fn coefficient_back_to_angles() {
        assert_eq!(coefficient_to_radians(Ratio::new(1, 2)), HALF_PI);
        assert_abs_diff_eq!(coefficient_to_radians(Ratio::new(5, 2)), HALF_PI, epsilon = 1e-12);
        assert_eq!(coefficient_to_degrees(Ratio::new(1, 2)), 90.0);
        assert_eq!(coefficient_to_degrees(Ratio::from_integer(3)), 180.0);
    }

    #[test]
    fn coefficient_of_one_radian_is_close() {
        let c = radians_to_coefficient(1.0);
        let back = *c.numer() as f64 / *c.denom() as f64 * PI;
        assert_abs_diff_eq!(back, 1.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    fn circular_distance(a: f64, b: f64, full: f64) -> f64 {
        let d = (a - b).abs() % full;
        d.min(full - d)
    }

    proptest! {
        #[test]
        fn normalized_degrees_in_range(x in -1e6f64..1e6) {
            let n = normalize_degrees(x);
            prop_assert!((0.0..360.0).contains(&n));
        }

        #[test]
        fn normalized_radians_in_range(x in -1e4f64..1e4) {
            let n = normalize_radians(x);
            prop_assert!((0.0..TWO_PI).contains(&n));
        }

        #[test]
        fn degree_radian_round_trip(r in -100.0f64..100.0) {
            let back = degrees_to_radians(radians_to_degrees(r));
            prop_assert!(circular_distance(back, normalize_radians(r), TWO_PI) < 1e-9);
        }

        #[test]
        fn sexagesimal_round_trip(d in -1000.0f64..1000.0) {
            let dms = degrees_to_sexagesimal(d);
            prop_assert!(dms.minutes >= 0.0 && dms.minutes < 60.0);
            prop_assert!(circular_distance(dms.to_degrees(), normalize_degrees(d), 360.0) < 1e-9);
        }

        #[test]
        fn coefficient_round_trip(r in -100.0f64..100.0) {
            let back = coefficient_to_radians(radians_to_coefficient(r));
            prop_assert!(circular_distance(back, normalize_radians(r), TWO_PI) < 1e-9);
        }

        #[test]
        fn coefficient_is_reduced(r in 0.0f64..TWO_PI) {
            let c = radians_to_coefficient(r);
            let reduced = Ratio::new(*c.numer(), *c.denom());
            prop_assert_eq!(reduced.numer(), c.numer());
            prop_assert_eq!(reduced.denom(), c.denom());
        }
    }
}
