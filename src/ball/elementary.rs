/*
    Elementary functions
*/

use std::cmp::Ordering;

use rug::float::Round as Rnd;
use tracing::trace;

use super::round::{round_mid, rounding_error};
use super::*;
use crate::BallContext;

// Extra bits used when evaluating endpoints.
const ENDPOINT_GUARD_BITS: u32 = 8;

// Algebraic functions
impl Ball {
    /// Computes the square root of this `Ball`.
    ///
    /// A ball that straddles zero is clamped to its nonnegative part,
    /// giving an enclosure of `[0, sqrt(upper)]`. A ball lying entirely
    /// below zero yields the indeterminate ball.
    pub fn sqrt(&self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        if self.is_negative() {
            trace!(arg = %self, "square root of a negative ball");
            return Self::indeterminate();
        }

        if self.is_exact() {
            let (mid, err) = round_mid(self.mid.sqrt_ref(), ctx);
            return Self::round_finalize(mid, err);
        }

        if self.contains_negative() {
            // clamp the lower endpoint to zero
            let gctx = ctx.guarded(ENDPOINT_GUARD_BITS);
            let hi = self.upper(&gctx);
            let (s, _) = Float::with_val_round(ctx.prec(), hi.sqrt_ref(), Rnd::Up);
            return Self::from_interval(&Float::new(ctx.prec()), &s, ctx);
        }

        // sqrt(m) - sqrt(m - r) = r / (sqrt(m) + sqrt(m - r))
        let (mid, err) = round_mid(self.mid.sqrt_ref(), ctx);
        let m = Mag::from_float_lower(&self.mid);
        let den = m.sqrt_lower().add_lower(&m.sub_lower(&self.rad).sqrt_lower());
        let rad = self.rad.div(&den).add(&err);
        Self::round_finalize(mid, rad)
    }

    /// Raises this `Ball` to the power `n` by repeated squaring.
    /// The zeroth power of any determinate ball is exactly one.
    pub fn pow_ui(&self, n: u64, ctx: &BallContext) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        match n {
            0 => Self::one(),
            1 => self.set_round(ctx),
            2 => self.sqr(ctx),
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

    /// Raises this `Ball` to the signed power `n`.
    /// Negative powers of a ball containing zero are indeterminate.
    pub fn pow_si(&self, n: i64, ctx: &BallContext) -> Self {
        if n >= 0 {
            self.pow_ui(n as u64, ctx)
        } else {
            let gctx = ctx.guarded(ENDPOINT_GUARD_BITS);
            self.pow_ui(n.unsigned_abs(), &gctx).inv(ctx)
        }
    }
}

// Transcendental functions
impl Ball {
    // Evaluates a monotonically increasing function `f` by bounding
    // it at the endpoints of this ball.
    fn monotone<F>(&self, ctx: &BallContext, f: F) -> Self
    where
        F: Fn(&Float, u32, Rnd) -> (Float, Ordering),
    {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        if self.is_exact() {
            let (mid, dir) = f(&self.mid, ctx.prec(), ctx.rnd());
            let err = rounding_error(&mid, dir, ctx.prec(), ctx.rm());
            return Self::round_finalize(mid, err);
        }

        let gctx = ctx.guarded(ENDPOINT_GUARD_BITS);
        let (lo, _) = f(&self.lower(&gctx), gctx.prec(), Rnd::Down);
        let (hi, _) = f(&self.upper(&gctx), gctx.prec(), Rnd::Up);
        Self::from_interval(&lo, &hi, ctx)
    }

    /// Computes the exponential of this `Ball`.
    pub fn exp(&self, ctx: &BallContext) -> Self {
        self.monotone(ctx, |x, prec, rnd| Float::with_val_round(prec, x.exp_ref(), rnd))
    }

    /// Computes the natural logarithm of this `Ball`.
    /// A ball containing a nonpositive number yields the indeterminate ball.
    pub fn log(&self, ctx: &BallContext) -> Self {
        if !self.is_indeterminate() && !self.is_positive() {
            trace!(arg = %self, "logarithm of a ball containing nonpositive numbers");
            return Self::indeterminate();
        }

        self.monotone(ctx, |x, prec, rnd| Float::with_val_round(prec, x.ln_ref(), rnd))
    }

    /// Computes the arctangent of this `Ball`.
    pub fn atan(&self, ctx: &BallContext) -> Self {
        self.monotone(ctx, |x, prec, rnd| Float::with_val_round(prec, x.atan_ref(), rnd))
    }

    /// Computes the sine of this `Ball`.
    pub fn sin(&self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(self.mid.sin_ref(), ctx);
        Self::round_finalize(mid, self.lipschitz_rad().add(&err))
    }

    /// Computes the cosine of this `Ball`.
    pub fn cos(&self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() {
            return Self::indeterminate();
        }

        let (mid, err) = round_mid(self.mid.cos_ref(), ctx);
        Self::round_finalize(mid, self.lipschitz_rad().add(&err))
    }

    // Radius propagated through a 1-Lipschitz function bounded by 1.
    fn lipschitz_rad(&self) -> Mag {
        self.rad.min(Mag::pow2(1))
    }
}
