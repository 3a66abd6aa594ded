//! Arithmetic and ordering.
//!
//! `+`/`-` combine two angles, `*`/`/` scale by an `f64`; every result is normalized back into `[0, 2π)` and keeps
//! the **left** operand's mode and display style.
//!
//! Comparison uses the canonical radians only. Congruent angles therefore compare equal (`-10°` == `350°`), and an
//! angle just below a full turn is the *largest* angle, not one close to zero.
//!
//! Scaling follows IEEE-754: dividing by zero produces a NaN angle. Use [`Angle::checked_div`] to reject that.

use crate::angle::Angle;
use crate::conversion::normalize_radians;
use crate::error::{AngleError, Result};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        self.with_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        self.with_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        self.with_radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl MulAssign<f64> for Angle {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn div(self, rhs: f64) -> Angle {
        self.with_radians(self.radians / rhs)
    }
}

impl DivAssign<f64> for Angle {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Angle {
    /// `self / rhs`, or an error when `rhs` is zero or the quotient is not finite.
    pub fn checked_div(self, rhs: f64) -> Result<Angle> {
        if rhs == 0.0 {
            log::debug!("refused to divide {} rad by zero", self.radians);
            return Err(AngleError::DivisionByZero);
        }
        let quotient = self.radians / rhs;
        if !quotient.is_finite() {
            log::debug!("quotient {} rad / {} is not finite", self.radians, rhs);
            return Err(AngleError::NonFinite { value: quotient });
        }
        Ok(Angle {
            radians: normalize_radians(quotient),
            ..self
        })
    }
}

impl PartialEq for Angle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Angle {}

impl PartialOrd for Angle {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order over canonical radians (`f64::total_cmp`, so NaN angles sort after every finite one).
impl Ord for Angle {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.radians.total_cmp(&other.radians)
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::{HALF_PI, PI};
    use crate::{degrees, radians, Angle, AngleError, DisplayStyle, Mode};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn addition_wraps_around() {
        let sum = degrees(10.0) + degrees(350.0);
        assert_abs_diff_eq!(sum.degrees(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn subtraction_wraps_around() {
        let diff = degrees(10.0) - degrees(20.0);
        assert_abs_diff_eq!(diff.degrees(), 350.0, epsilon = 1e-9);
    }

    #[test]
    fn scaling() {
        assert_abs_diff_eq!((degrees(100.0) * 4.0).degrees(), 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!((2.0 * degrees(90.0)).degrees(), 180.0, epsilon = 1e-9);
        assert_eq!((radians(PI) / 2.0).radians(), HALF_PI);
    }

    #[test]
    fn result_keeps_left_presentation() {
        let left = radians(1.0).displayed(DisplayStyle::Decimal);
        let right = degrees(10.0);
        let sum = left + right;
        assert_eq!(sum.mode(), Mode::Radians);
        assert_eq!(sum.display(), DisplayStyle::Decimal);
        assert_eq!((right - left).mode(), Mode::Degrees);
        assert_eq!((left * 2.0).mode(), Mode::Radians);
    }

    #[test]
    fn assign_operators() {
        let mut a = degrees(350.0);
        a += degrees(20.0);
        assert_abs_diff_eq!(a.degrees(), 10.0, epsilon = 1e-9);
        a -= degrees(20.0);
        assert_abs_diff_eq!(a.degrees(), 350.0, epsilon = 1e-9);
        a *= 2.0;
        assert_abs_diff_eq!(a.degrees(), 340.0, epsilon = 1e-9);
        a /= 2.0;
        assert_abs_diff_eq!(a.degrees(), 170.0, epsilon = 1e-9);
    }

    #[test]
    fn operands_are_not_mutated() {
        let a = degrees(30.0);
        let b = degrees(40.0);
        let _ = a + b;
        assert_abs_diff_eq!(a.degrees(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.degrees(), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn division_by_zero_is_nan_unless_checked() {
        assert!((degrees(10.0) / 0.0).radians().is_nan());
        assert_eq!(degrees(10.0).checked_div(0.0), Err(AngleError::DivisionByZero));
        assert!(matches!(
            degrees(10.0).checked_div(1e-320),
            Err(AngleError::NonFinite { .. })
        ));
        let half = degrees(90.0).checked_div(2.0).expect("finite");
        assert_abs_diff_eq!(half.degrees(), 45.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Ordering
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ordering() {
        assert!(degrees(10.0) < degrees(20.0));
        assert!(degrees(359.0) > degrees(1.0));
        assert_eq!(degrees(10.0).max(degrees(20.0)), degrees(20.0));
    }

    #[test]
    fn congruent_angles_are_equal() {
        assert_eq!(degrees(-10.0), degrees(350.0));
        assert_eq!(degrees(90.0), radians(HALF_PI));
        assert_eq!(degrees(720.0), Angle::default());
    }

    #[test]
    fn presentation_is_ignored_by_equality() {
        assert_eq!(degrees(45.0), degrees(45.0).to_radians().displayed(DisplayStyle::Decimal));
    }

    #[test]
    fn sorting() {
        let mut v = vec![degrees(270.0), degrees(-90.0 + 45.0), degrees(0.0), degrees(90.0)];
        v.sort();
        let order: Vec<u32> = v.iter().map(|a| a.d()).collect();
        assert_eq!(order, vec![0, 90, 270, 315]);
    }

    proptest! {
        #[test]
        fn sum_is_normalized(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
            let s = degrees(a) + degrees(b);
            prop_assert!(s.degrees() >= 0.0 && s.degrees() < 360.0);
        }

        #[test]
        fn order_is_antisymmetric(a in 0.0f64..360.0, b in 0.0f64..360.0) {
            let (x, y) = (degrees(a), degrees(b));
            prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
        }
    }
}
