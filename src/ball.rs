/*
    Definition of `Ball`
*/

use rug::{float::Special, Float};

use crate::Mag;

mod arithmetic;
mod compare;
mod convert;
mod elementary;
mod parse;
mod precision;
mod round;

pub use precision::PREC_EXACT;

// Precision used for midpoints that carry no significant bits
// (zero, infinities and NaN).
pub(crate) const SPECIAL_PREC: u32 = 2;

/** A real ball: a midpoint and a radius.
 *
 * A `Ball` with midpoint `m` and radius `r` represents the closed
 * interval `[m - r, m + r]`. Every operation on balls returns a ball
 * that contains the exact result for every choice of values contained
 * in the operands. The radius is an upper bound on the uncertainty
 * and is never required to be tight.
 *
 * Some distinguished values:
 *  - exact: the radius is zero and the ball is exactly its midpoint;
 *  - indeterminate: NaN midpoint, infinite radius, the universal
 *    "unknown" value produced by domain errors.
 *
 */
#[derive(Clone, Debug)]
pub struct Ball {
    mid: Float,
    rad: Mag,
}

// Constructors and getters
impl Ball {
    /// Returns an exact zero.
    pub fn zero() -> Self {
        Self {
            mid: Float::new(SPECIAL_PREC),
            rad: Mag::zero(),
        }
    }

    /// Returns an exact one.
    pub fn one() -> Self {
        Self::from(1_u32)
    }

    /// Returns an exact `+infinity`.
    pub fn pos_inf() -> Self {
        Self {
            mid: Float::with_val(SPECIAL_PREC, Special::Infinity),
            rad: Mag::zero(),
        }
    }

    /// Returns an exact `-infinity`.
    pub fn neg_inf() -> Self {
        Self {
            mid: Float::with_val(SPECIAL_PREC, Special::NegInfinity),
            rad: Mag::zero(),
        }
    }

    /// Returns the ball `0 +/- inf`, the whole real line.
    pub fn zero_pm_inf() -> Self {
        Self {
            mid: Float::new(SPECIAL_PREC),
            rad: Mag::inf(),
        }
    }

    /// Returns the indeterminate ball `NaN +/- inf`.
    pub fn indeterminate() -> Self {
        Self {
            mid: Float::with_val(SPECIAL_PREC, Special::Nan),
            rad: Mag::inf(),
        }
    }

    /// Creates a ball directly from a midpoint and radius.
    ///
    /// No error is computed: the caller vouches that the pair
    /// encloses the intended value.
    pub fn from_mid_rad(mid: Float, rad: Mag) -> Self {
        if mid.is_nan() {
            Self::indeterminate()
        } else {
            Self { mid, rad }
        }
    }

    /// Returns the midpoint of this `Ball`.
    pub fn mid(&self) -> &Float {
        &self.mid
    }

    /// Returns the radius of this `Ball`.
    pub fn rad(&self) -> &Mag {
        &self.rad
    }

    /// Splits this `Ball` into its midpoint and radius.
    pub fn into_parts(self) -> (Float, Mag) {
        (self.mid, self.rad)
    }

    /// Replaces the midpoint, keeping the radius.
    pub fn set_mid(&mut self, mid: Float) {
        if mid.is_nan() {
            *self = Self::indeterminate();
        } else {
            self.mid = mid;
        }
    }

    /// Replaces the radius, keeping the midpoint.
    pub fn set_rad(&mut self, rad: Mag) {
        if !self.mid.is_nan() {
            self.rad = rad;
        }
    }

    /// Returns the exact ball with the same midpoint.
    pub fn get_mid(&self) -> Self {
        Self::from_mid_rad(self.mid.clone(), Mag::zero())
    }

    /// Returns true if this `Ball` is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.mid.is_zero() && self.rad.is_zero()
    }

    /// Returns true if this `Ball` is exactly one.
    pub fn is_one(&self) -> bool {
        self.rad.is_zero() && self.mid == 1
    }

    /// Returns true if this `Ball` has zero radius.
    pub fn is_exact(&self) -> bool {
        self.rad.is_zero()
    }

    /// Returns true if this `Ball` is an exact integer.
    pub fn is_int(&self) -> bool {
        self.rad.is_zero() && self.mid.is_integer()
    }

    /// Returns true if both the midpoint and the radius are finite.
    pub fn is_finite(&self) -> bool {
        self.mid.is_finite() && self.rad.is_finite()
    }

    /// Returns true if this `Ball` has a NaN midpoint.
    pub fn is_indeterminate(&self) -> bool {
        self.mid.is_nan()
    }

    /// Inflates the radius by `err`.
    pub fn add_error(&mut self, err: &Mag) {
        self.rad = self.rad.add(err);
    }

    /// Inflates the radius by `2^e`.
    pub fn add_error_2exp(&mut self, e: i64) {
        self.add_error(&Mag::pow2(e));
    }

    /// Inflates the radius by an upper bound for `|err|`.
    pub fn add_error_float(&mut self, err: &Float) {
        self.add_error(&Mag::from_float(err));
    }

    /// Inflates the radius by an upper bound for the absolute
    /// value of every point of `err`.
    pub fn add_error_ball(&mut self, err: &Ball) {
        self.add_error(&err.get_mag());
    }

    /// Returns the number of bits needed to represent the
    /// midpoint exactly.
    pub fn bits(&self) -> u32 {
        match self.mid.to_integer_exp() {
            Some((man, _)) if man != 0 => {
                let tz = man.find_one(0).unwrap_or(0);
                man.significant_bits() - tz
            }
            _ => 0,
        }
    }
}

// Implementing `Default` for `Ball`
impl Default for Ball {
    fn default() -> Self {
        Self::zero()
    }
}

// Structural equality: same midpoint and same radius.
// Two indeterminate balls compare equal.
impl PartialEq for Ball {
    fn eq(&self, other: &Self) -> bool {
        let mid = (self.mid.is_nan() && other.mid.is_nan()) || self.mid == other.mid;
        mid && self.rad == other.rad
    }
}
