/*
    Rounding
*/

use std::cmp::Ordering;

use rug::{
    float::{self, Round as Rnd},
    ops::AssignRound,
    Float,
};

use super::*;
use crate::{ops::Round, BallContext, Mag, RoundingMode};

// Returns a bound on the error committed when rounding produced `mid`
// at precision `prec` in direction `dir`.
pub(crate) fn rounding_error(mid: &Float, dir: Ordering, prec: u32, rm: RoundingMode) -> Mag {
    if dir == Ordering::Equal {
        // exact: no error was introduced
        Mag::zero()
    } else if mid.is_nan() || mid.is_infinite() {
        // overflow: the exact value is finite but unrepresentable
        Mag::inf()
    } else {
        match mid.get_exp() {
            // overflow under a mode rounding towards zero: the result is
            // clamped to the largest finite float
            Some(e) if e >= float::exp_max() => Mag::inf(),
            // underflow under a mode rounding away from zero: the result is
            // clamped to the smallest positive float `2^(emin - 1)`
            Some(e) if e <= float::exp_min() => Mag::pow2(float::exp_min() as i64),
            // `|mid| < 2^e`, so one ulp at `prec` bits is at most `2^(e - prec)`
            Some(e) => {
                let ulp = e as i64 - prec as i64;
                if rm.is_nearest() {
                    Mag::pow2(ulp - 1)
                } else {
                    Mag::pow2(ulp)
                }
            }
            // underflow: the exact value is below the smallest positive float
            None => Mag::pow2(float::exp_min() as i64),
        }
    }
}

// Rounds the exact result of an operation to the working precision
// of `ctx`, returning the rounded midpoint and the rounding error.
pub(crate) fn round_mid<T>(val: T, ctx: &BallContext) -> (Float, Mag)
where
    Float: AssignRound<T, Round = Rnd, Ordering = Ordering>,
{
    let (mid, dir) = Float::with_val_round(ctx.prec(), val, ctx.rnd());
    let err = rounding_error(&mid, dir, ctx.prec(), ctx.rm());
    (mid, err)
}

// Rounds `val` at precision `prec` in direction `rnd`, discarding
// the direction. Used for endpoints, which carry their own bounds.
pub(crate) fn round_directed<T>(val: T, prec: u32, rnd: Rnd) -> Float
where
    Float: AssignRound<T, Round = Rnd, Ordering = Ordering>,
{
    Float::with_val_round(prec, val, rnd).0
}

// Rounding utilities
impl Ball {
    // Assembles a ball from a rounded midpoint and its radius,
    // collapsing NaN midpoints to the indeterminate ball.
    pub(crate) fn round_finalize(mid: Float, rad: Mag) -> Self {
        if mid.is_nan() {
            Self::indeterminate()
        } else {
            Self { mid, rad }
        }
    }

    /// Creates a ball containing the interval `[a, b]`.
    ///
    /// The midpoint is rounded to the working precision and the
    /// radius is inflated to cover both endpoints. Returns the
    /// indeterminate ball if `a > b` or either endpoint is NaN.
    pub fn from_interval(a: &Float, b: &Float, ctx: &BallContext) -> Self {
        if a.is_nan() || b.is_nan() || a > b {
            return Self::indeterminate();
        }

        if !a.is_finite() || !b.is_finite() {
            return if a == b {
                Self::from(a.clone())
            } else {
                Self::zero_pm_inf()
            };
        }

        if a == b {
            let (mid, err) = round_mid(a, ctx);
            return Self::round_finalize(mid, err);
        }

        let mut mid = Float::with_val(ctx.prec(), a + b);
        mid >>= 1;
        let lo = round_directed(&mid - a, MAG_BITS_ROUND, Rnd::Up);
        let hi = round_directed(b - &mid, MAG_BITS_ROUND, Rnd::Up);
        let rad = Mag::from_float(&lo).max(Mag::from_float(&hi));
        Self::round_finalize(mid, rad)
    }

    /// Rounds the midpoint to the precision of `ctx`, adding the
    /// rounding error to the radius.
    pub fn set_round(&self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(&self.mid, ctx);
        Self::round_finalize(mid, self.rad.add(&err))
    }

    /// Discards midpoint bits that are insignificant compared
    /// to the radius.
    pub fn trim(&self) -> Self {
        let acc = self.rel_accuracy_bits();
        if self.is_exact() || !self.is_finite() || acc >= self.bits() as i64 {
            return self.clone();
        }

        // keep a few guard bits beyond the accurate ones
        let prec = (acc.max(0) + 2) as u32;
        self.set_round(&BallContext::new(prec.max(2)))
    }
}

// Enough bits that an endpoint distance rounds with small relative error.
const MAG_BITS_ROUND: u32 = 2 * crate::MAG_BITS;

// Implementing `Round<Ball>` for `Ball`
impl Round<Ball> for Ball {
    fn round(&self, ctx: &Self::Ctx) -> Ball {
        self.set_round(ctx)
    }
}
