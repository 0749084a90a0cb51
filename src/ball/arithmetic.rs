/*
    Arithmetic
*/

use std::ops::Neg;

use rug::float;
use tracing::trace;

use super::round::round_mid;
use super::*;
use crate::{BallContext, Number};

// Arithmetic on balls
impl Ball {
    /// Adds this `Ball` and another, rounding the midpoint of the result
    /// according to `ctx`.
    pub fn add(&self, other: &Self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() || other.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(&self.mid + &other.mid, ctx);
        let rad = self.rad.add(&other.rad).add(&err);
        Self::round_finalize(mid, rad)
    }

    /// Subtracts another `Ball` from this one, rounding the midpoint of
    /// the result according to `ctx`.
    pub fn sub(&self, other: &Self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() || other.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(&self.mid - &other.mid, ctx);
        let rad = self.rad.add(&other.rad).add(&err);
        Self::round_finalize(mid, rad)
    }

    /// Multiplies this `Ball` and another, rounding the midpoint of the
    /// result according to `ctx`.
    ///
    /// The radius is `|x| ry + |y| rx + rx ry` plus the rounding error.
    pub fn mul(&self, other: &Self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() || other.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(&self.mid * &other.mid, ctx);
        let rad = self.mul_rad(other).add(&err);
        Self::round_finalize(mid, rad)
    }

    /// Computes `self + x * y` with a single rounding of the midpoint.
    pub fn addmul(&self, x: &Self, y: &Self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() || x.is_indeterminate() || y.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(x.mid.mul_add_ref(&y.mid, &self.mid), ctx);
        let rad = self.rad.add(&x.mul_rad(y)).add(&err);
        Self::round_finalize(mid, rad)
    }

    /// Computes `self - x * y` with a single rounding of the midpoint.
    pub fn submul(&self, x: &Self, y: &Self, ctx: &BallContext) -> Self {
        self.addmul(&x.neg(), y, ctx)
    }

    /// Divides this `Ball` by another, rounding the midpoint of the
    /// result according to `ctx`.
    ///
    /// If the divisor contains zero the quotient is unbounded and the
    /// result is the indeterminate ball.
    pub fn div(&self, other: &Self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() || other.is_indeterminate() {
            return Self::indeterminate();
        }

        if other.contains_zero() {
            trace!(divisor = %other, "division by a ball containing zero");
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(&self.mid / &other.mid, ctx);

        // |x/y - mx/my| <= (|my| rx + |mx| ry) / (|my| (|my| - ry))
        let rad = if self.rad.is_zero() && other.rad.is_zero() {
            Mag::zero()
        } else {
            let mx = Mag::from_float(&self.mid);
            let my = Mag::from_float(&other.mid);
            let my_lo = Mag::from_float_lower(&other.mid);
            let num = my.mul(&self.rad).add(&mx.mul(&other.rad));
            let den = my_lo.mul_lower(&my_lo.sub_lower(&other.rad));
            num.div(&den)
        };

        Self::round_finalize(mid, rad.add(&err))
    }

    /// Returns `1 / self`.
    pub fn inv(&self, ctx: &BallContext) -> Self {
        Self::one().div(self, ctx)
    }

    /// Squares this `Ball`.
    ///
    /// Tighter than `self.mul(self)`: the radius is `2 |x| r + r^2`.
    pub fn sqr(&self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(self.mid.square_ref(), ctx);
        let m = Mag::from_float(&self.mid);
        let rad = m
            .mul(&self.rad)
            .mul_2exp_si(1)
            .add(&self.rad.mul(&self.rad))
            .add(&err);
        Self::round_finalize(mid, rad)
    }

    /// Negates this `Ball`. Negation is exact.
    pub fn neg(&self) -> Self {
        Self {
            mid: -self.mid.clone(),
            rad: self.rad,
        }
    }

    /// Returns the absolute value of this `Ball`.
    ///
    /// Only the midpoint is reflected, so the result may still
    /// contain negative numbers when `self` contains zero.
    pub fn abs(&self) -> Self {
        Self {
            mid: self.mid.clone().abs(),
            rad: self.rad,
        }
    }

    /// Multiplies this `Ball` by `2^e`.
    ///
    /// Exact unless the midpoint leaves the exponent range: overflow
    /// makes the midpoint infinite and the radius unbounded, while
    /// underflow flushes the midpoint to zero and adds `2^emin` to
    /// the radius.
    pub fn mul_2exp(&self, e: i64) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        let rad = self.rad.mul_2exp_si(e);
        let exp = match self.mid.get_exp() {
            Some(exp) => exp as i64,
            None => return Self::from_mid_rad(self.mid.clone(), rad),
        };

        let neg = self.mid.is_sign_negative();
        let prec = self.mid.prec();
        let target = exp.saturating_add(e);
        if target > float::exp_max() as i64 {
            let inf = if neg { Special::NegInfinity } else { Special::Infinity };
            return Self::from_mid_rad(Float::with_val(prec, inf), Mag::inf());
        }

        if target < float::exp_min() as i64 {
            // |mid * 2^e| < 2^(emin - 1)
            let zero = if neg { Special::NegZero } else { Special::Zero };
            let rad = rad.add(&Mag::pow2(float::exp_min() as i64));
            return Self::from_mid_rad(Float::with_val(prec, zero), rad);
        }

        // every intermediate exponent lies between `exp` and `target`
        let mut mid = self.mid.clone();
        let mut rem = e;
        while rem != 0 {
            let step = rem.clamp(i32::MIN as i64, i32::MAX as i64);
            mid <<= step as i32;
            rem -= step;
        }

        Self { mid, rad }
    }

    /// Adds the integer `n` to this `Ball`.
    pub fn add_i64(&self, n: i64, ctx: &BallContext) -> Self {
        self.add(&Self::from(n), ctx)
    }

    /// Multiplies this `Ball` by the integer `n`.
    pub fn mul_i64(&self, n: i64, ctx: &BallContext) -> Self {
        self.mul(&Self::from(n), ctx)
    }

    /// Divides this `Ball` by the integer `n`.
    /// Division by zero yields the indeterminate ball.
    pub fn div_i64(&self, n: i64, ctx: &BallContext) -> Self {
        self.div(&Self::from(n), ctx)
    }

    // Propagated radius of a product, excluding the rounding error.
    fn mul_rad(&self, other: &Self) -> Mag {
        let mx = Mag::from_float(&self.mid);
        let my = Mag::from_float(&other.mid);
        mx.mul(&other.rad)
            .add(&my.mul(&self.rad))
            .add(&self.rad.mul(&other.rad))
    }
}

impl Neg for &Ball {
    type Output = Ball;

    fn neg(self) -> Ball {
        Ball::neg(self)
    }
}

// Implementing `Number` for `Ball`
impl Number for Ball {
    type Ctx = BallContext;

    fn is_zero(&self) -> bool {
        Ball::is_zero(self)
    }

    fn is_exact(&self) -> bool {
        Ball::is_exact(self)
    }

    fn is_finite(&self) -> bool {
        Ball::is_finite(self)
    }

    fn is_indeterminate(&self) -> bool {
        Ball::is_indeterminate(self)
    }

    fn contains_zero(&self) -> bool {
        Ball::contains_zero(self)
    }

    fn indeterminate() -> Self {
        Ball::indeterminate()
    }

    fn one() -> Self {
        Ball::one()
    }

    fn neg(&self) -> Self {
        Ball::neg(self)
    }

    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Ball::add(self, other, ctx)
    }

    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Ball::sub(self, other, ctx)
    }

    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Ball::mul(self, other, ctx)
    }

    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Ball::div(self, other, ctx)
    }

    fn addmul(&self, x: &Self, y: &Self, ctx: &Self::Ctx) -> Self {
        Ball::addmul(self, x, y, ctx)
    }

    fn mul_2exp(&self, e: i64) -> Self {
        Ball::mul_2exp(self, e)
    }

    fn add_error_mag(&mut self, err: &Mag) {
        self.add_error(err)
    }

    fn mag_bound(&self) -> Mag {
        self.get_mag()
    }
}
