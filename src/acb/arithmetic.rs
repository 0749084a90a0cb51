/*
    Arithmetic on complex balls
*/

use std::ops::Neg;

use super::*;
use crate::{ops::Round, BallContext, Number};

impl Acb {
    /// Rounds both parts to the precision of `ctx`.
    pub fn set_round(&self, ctx: &BallContext) -> Self {
        Self::new(self.re.set_round(ctx), self.im.set_round(ctx))
    }

    /// Adds this `Acb` and another.
    pub fn add(&self, other: &Self, ctx: &BallContext) -> Self {
        Self::new(self.re.add(&other.re, ctx), self.im.add(&other.im, ctx))
    }

    /// Subtracts another `Acb` from this one.
    pub fn sub(&self, other: &Self, ctx: &BallContext) -> Self {
        Self::new(self.re.sub(&other.re, ctx), self.im.sub(&other.im, ctx))
    }

    /// Multiplies this `Acb` and another.
    pub fn mul(&self, other: &Self, ctx: &BallContext) -> Self {
        if other.is_real() {
            return self.mul_ball(&other.re, ctx);
        }

        if self.is_real() {
            return other.mul_ball(&self.re, ctx);
        }

        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        let (a, b) = (&self.re, &self.im);
        let (c, d) = (&other.re, &other.im);
        let re = a.mul(c, ctx).submul(b, d, ctx);
        let im = a.mul(d, ctx).addmul(b, c, ctx);
        Self::new(re, im)
    }

    /// Computes `self + x * y`.
    pub fn addmul(&self, x: &Self, y: &Self, ctx: &BallContext) -> Self {
        self.add(&x.mul(y, ctx), ctx)
    }

    /// Computes `self - x * y`.
    pub fn submul(&self, x: &Self, y: &Self, ctx: &BallContext) -> Self {
        self.sub(&x.mul(y, ctx), ctx)
    }

    /// Divides this `Acb` by another.
    ///
    /// The quotient is `x conj(y) / |y|^2`; a divisor whose squared
    /// modulus contains zero yields the indeterminate complex ball.
    pub fn div(&self, other: &Self, ctx: &BallContext) -> Self {
        if other.is_real() {
            return self.div_ball(&other.re, ctx);
        }

        let num = self.mul(&other.conj(), ctx);
        let den = other.re.sqr(ctx).add(&other.im.sqr(ctx), ctx);
        if den.contains_zero() {
            return Self::indeterminate();
        }

        Self::new(num.re.div(&den, ctx), num.im.div(&den, ctx))
    }

    /// Returns `1 / self`.
    pub fn inv(&self, ctx: &BallContext) -> Self {
        Self::one().div(self, ctx)
    }

    /// Squares this `Acb`.
    pub fn sqr(&self, ctx: &BallContext) -> Self {
        if self.is_real() {
            return Self::from(self.re.sqr(ctx));
        }

        // (a + bi)^2 = (a^2 - b^2) + 2abi
        let re = self.re.sqr(ctx).sub(&self.im.sqr(ctx), ctx);
        let im = self.re.mul(&self.im, ctx).mul_2exp(1);
        Self::new(re, im)
    }

    /// Negates this `Acb`.
    pub fn neg(&self) -> Self {
        Self::new(self.re.neg(), self.im.neg())
    }

    /// Returns the complex conjugate.
    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), self.im.neg())
    }

    /// Multiplies this `Acb` by the imaginary unit. Exact.
    pub fn mul_onei(&self) -> Self {
        Self::new(self.im.neg(), self.re.clone())
    }

    /// Multiplies both parts by the real ball `b`.
    pub fn mul_ball(&self, b: &Ball, ctx: &BallContext) -> Self {
        Self::new(self.re.mul(b, ctx), self.im.mul(b, ctx))
    }

    /// Divides both parts by the real ball `b`.
    pub fn div_ball(&self, b: &Ball, ctx: &BallContext) -> Self {
        Self::new(self.re.div(b, ctx), self.im.div(b, ctx))
    }

    /// Multiplies this `Acb` by `2^e`.
    pub fn mul_2exp(&self, e: i64) -> Self {
        Self::new(self.re.mul_2exp(e), self.im.mul_2exp(e))
    }

    /// Raises this `Acb` to the power `n` by repeated squaring.
    pub fn pow_ui(&self, n: u64, ctx: &BallContext) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        match n {
            0 => Self::one(),
            1 => self.set_round(ctx),
            _ => {
                let bits = 64 - n.leading_zeros();
                let mut r = self.clone();
                for i in (0..bits - 1).rev() {
                    r = r.sqr(ctx);
                    if (n >> i) & 1 == 1 {
                        r = r.mul(self, ctx);
                    }
                }
                r
            }
        }
    }

    /// Computes the exponential of this `Acb`,
    /// `exp(a) (cos(b) + i sin(b))`.
    pub fn exp(&self, ctx: &BallContext) -> Self {
        let r = self.re.exp(ctx);
        if self.is_real() {
            return Self::from(r);
        }

        let re = r.mul(&self.im.cos(ctx), ctx);
        let im = r.mul(&self.im.sin(ctx), ctx);
        Self::new(re, im)
    }
}

// Implementing `Round<Acb>` for `Acb`
impl Round<Acb> for Acb {
    fn round(&self, ctx: &Self::Ctx) -> Acb {
        self.set_round(ctx)
    }
}

impl Neg for &Acb {
    type Output = Acb;

    fn neg(self) -> Acb {
        Acb::neg(self)
    }
}

// Implementing `Number` for `Acb`
impl Number for Acb {
    type Ctx = BallContext;

    fn is_zero(&self) -> bool {
        Acb::is_zero(self)
    }

    fn is_exact(&self) -> bool {
        Acb::is_exact(self)
    }

    fn is_finite(&self) -> bool {
        Acb::is_finite(self)
    }

    fn is_indeterminate(&self) -> bool {
        Acb::is_indeterminate(self)
    }

    fn contains_zero(&self) -> bool {
        Acb::contains_zero(self)
    }

    fn indeterminate() -> Self {
        Acb::indeterminate()
    }

    fn one() -> Self {
        Acb::one()
    }

    fn neg(&self) -> Self {
        Acb::neg(self)
    }

    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Acb::add(self, other, ctx)
    }

    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Acb::sub(self, other, ctx)
    }

    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Acb::mul(self, other, ctx)
    }

    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Acb::div(self, other, ctx)
    }

    fn addmul(&self, x: &Self, y: &Self, ctx: &Self::Ctx) -> Self {
        Acb::addmul(self, x, y, ctx)
    }

    fn mul_2exp(&self, e: i64) -> Self {
        Acb::mul_2exp(self, e)
    }

    fn add_error_mag(&mut self, err: &Mag) {
        Acb::add_error_mag(self, err)
    }

    fn mag_bound(&self) -> Mag {
        self.get_mag()
    }
}
