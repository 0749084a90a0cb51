/*
    Conversions
*/

use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use rug::{float::Round as Rnd, integer::Order, Integer, Rational};
use tracing::trace;

use super::round::{round_directed, round_mid};
use super::*;
use crate::BallContext;

// Converts a `BigInt` into an MPFR-compatible integer.
fn bigint_to_integer(n: &BigInt) -> Integer {
    let (sign, bytes) = n.to_bytes_le();
    let i = Integer::from_digits(&bytes, Order::Lsf);
    match sign {
        Sign::Minus => -i,
        _ => i,
    }
}

macro_rules! ball_from_exact {
    ($($t:ty => $prec:expr),* $(,)?) => {
        $(
            impl From<$t> for Ball {
                fn from(n: $t) -> Self {
                    Self {
                        mid: Float::with_val($prec, n),
                        rad: Mag::zero(),
                    }
                }
            }
        )*
    };
}

ball_from_exact! {
    i64 => 64,
    u64 => 64,
    i32 => 32,
    u32 => 32,
}

impl From<f64> for Ball {
    fn from(x: f64) -> Self {
        if x.is_nan() {
            Self::indeterminate()
        } else {
            Self {
                mid: Float::with_val(53, x),
                rad: Mag::zero(),
            }
        }
    }
}

impl From<Float> for Ball {
    fn from(x: Float) -> Self {
        Self::from_mid_rad(x, Mag::zero())
    }
}

impl From<Integer> for Ball {
    fn from(n: Integer) -> Self {
        let prec = n.significant_bits().max(SPECIAL_PREC);
        Self {
            mid: Float::with_val(prec, n),
            rad: Mag::zero(),
        }
    }
}

// Rounded constructors
impl Ball {
    /// Creates a `Ball` enclosing the integer `n`, rounded
    /// to the working precision of `ctx`.
    pub fn from_bigint(n: &BigInt, ctx: &BallContext) -> Self {
        let (mid, err) = round_mid(&bigint_to_integer(n), ctx);
        Self::round_finalize(mid, err)
    }

    /// Creates a `Ball` enclosing `num / den`.
    /// A zero denominator yields the indeterminate ball.
    pub fn from_ratio(num: &BigInt, den: &BigInt, ctx: &BallContext) -> Self {
        if den.is_zero() {
            trace!(%num, "rational with zero denominator");
            return Self::indeterminate();
        }

        let q = Rational::from((bigint_to_integer(num), bigint_to_integer(den)));
        Self::from_rational(&q, ctx)
    }

    /// Creates a `Ball` enclosing the rational `q`.
    pub fn from_rational(q: &Rational, ctx: &BallContext) -> Self {
        let (mid, err) = round_mid(q, ctx);
        Self::round_finalize(mid, err)
    }

    /// Creates a `Ball` enclosing `man * 2^exp`.
    pub fn from_mantissa_exp(man: &BigInt, exp: i64, ctx: &BallContext) -> Self {
        Self::from_bigint(man, ctx).mul_2exp(exp)
    }
}

// Bounds
impl Ball {
    /// Returns an upper bound for the absolute value of every
    /// point of this `Ball`.
    pub fn get_mag(&self) -> Mag {
        Mag::from_float(&self.mid).add(&self.rad)
    }

    /// Returns a lower bound for the absolute value of every
    /// point of this `Ball`.
    pub fn get_mag_lower(&self) -> Mag {
        if self.contains_zero() {
            Mag::zero()
        } else {
            Mag::from_float_lower(&self.mid).sub_lower(&self.rad)
        }
    }

    /// Returns `|mid| + rad` rounded up to the precision of `ctx`.
    pub fn get_abs_ubound(&self, ctx: &BallContext) -> Float {
        let m = Float::with_val(self.mid.prec(), self.mid.abs_ref());
        round_directed(&m + &self.rad.to_float(), ctx.prec(), Rnd::Up)
    }

    /// Returns `|mid| - rad` rounded down to the precision of `ctx`,
    /// or zero if this `Ball` contains zero.
    pub fn get_abs_lbound(&self, ctx: &BallContext) -> Float {
        if self.contains_zero() {
            return Float::new(ctx.prec());
        }

        let m = Float::with_val(self.mid.prec(), self.mid.abs_ref());
        round_directed(&m - &self.rad.to_float(), ctx.prec(), Rnd::Down)
    }

    /// Returns the lower endpoint `mid - rad` rounded towards `-infinity`.
    pub fn lower(&self, ctx: &BallContext) -> Float {
        round_directed(&self.mid - &self.rad.to_float(), ctx.prec(), Rnd::Down)
    }

    /// Returns the upper endpoint `mid + rad` rounded towards `+infinity`.
    pub fn upper(&self, ctx: &BallContext) -> Float {
        round_directed(&self.mid + &self.rad.to_float(), ctx.prec(), Rnd::Up)
    }

    /// Returns the largest integer not exceeding any point of this `Ball`.
    /// The result is wrapped in an option since the lower endpoint
    /// may be unbounded or out of range for `i64`.
    pub fn lower_i64(&self) -> Option<i64> {
        let lo = self.lower(&BallContext::new(64)).floor();
        if !lo.is_finite() {
            return None;
        }

        lo.to_integer().and_then(|n| n.to_i64())
    }

    /// Returns a `Ball` containing both this `Ball` and `other`.
    pub fn union(&self, other: &Self, ctx: &BallContext) -> Self {
        if self.is_indeterminate() || other.is_indeterminate() {
            return Self::indeterminate();
        }

        let lo = self.lower(ctx).min(&other.lower(ctx));
        let hi = self.upper(ctx).max(&other.upper(ctx));
        Self::from_interval(&lo, &hi, ctx)
    }
}
