/*
    Conversions to and from `Mag`
*/

use std::cmp::Ordering;

use rug::{
    float::{self, Special},
    Float, Rational,
};

use super::*;

// Conversions into `Mag`
impl Mag {
    /// Returns an upper bound for the integer `n`.
    pub fn from_u64(n: u64) -> Self {
        Self::from_parts(n as u128, 0, Bound::Upper)
    }

    /// Returns a lower bound for the integer `n`.
    pub fn from_u64_lower(n: u64) -> Self {
        Self::from_parts(n as u128, 0, Bound::Lower)
    }

    /// Returns an upper bound for `|x|`.
    /// NaN is bounded by infinity.
    pub fn from_f64(x: f64) -> Self {
        Self::from_f64_dir(x, Bound::Upper)
    }

    /// Returns a lower bound for `|x|`.
    /// NaN is bounded by zero.
    pub fn from_f64_lower(x: f64) -> Self {
        Self::from_f64_dir(x, Bound::Lower)
    }

    /// Returns an upper bound for `|x|`.
    /// NaN is bounded by infinity.
    pub fn from_float(x: &Float) -> Self {
        Self::from_float_dir(x, Bound::Upper)
    }

    /// Returns a lower bound for `|x|`.
    /// NaN is bounded by zero.
    pub fn from_float_lower(x: &Float) -> Self {
        Self::from_float_dir(x, Bound::Lower)
    }

    fn from_f64_dir(x: f64, bound: Bound) -> Self {
        if x.is_nan() {
            return match bound {
                Bound::Upper => Self::inf(),
                Bound::Lower => Self::zero(),
            };
        }

        if x.is_infinite() {
            return Self::inf();
        }

        // decode the IEEE-754 fields
        let bits = x.abs().to_bits();
        let biased = ((bits >> 52) & 0x7FF) as i64;
        let frac = bits & ((1 << 52) - 1);
        let (man, exp) = if biased == 0 {
            (frac, -1074)
        } else {
            (frac | (1 << 52), biased - 1075)
        };

        Self::from_parts(man as u128, exp, bound)
    }

    pub(crate) fn from_float_dir(x: &Float, bound: Bound) -> Self {
        if x.is_nan() {
            return match bound {
                Bound::Upper => Self::inf(),
                Bound::Lower => Self::zero(),
            };
        }

        if x.is_infinite() {
            return Self::inf();
        }

        if x.is_zero() {
            return Self::zero();
        }

        let (r, _) = Float::with_val_round(MAG_BITS, x.abs_ref(), bound.rnd());
        if r.is_infinite() {
            return Self::inf();
        }

        match r.to_integer_exp() {
            Some((man, exp)) => match man.to_u64() {
                Some(m) => Self::from_parts(m as u128, exp as i64, bound),
                None => Self::inf(),
            },
            None => Self::zero(),
        }
    }
}

// Conversions out of `Mag`
impl Mag {
    /// Converts this `Mag` to a `Float`.
    ///
    /// The conversion is exact when the exponent lies within the
    /// float exponent range; otherwise the result is rounded up
    /// (to infinity or to the smallest positive float).
    pub fn to_float(&self) -> Float {
        match self.num {
            MagNum::Zero => Float::new(MAG_BITS),
            MagNum::Infinity => Float::with_val(MAG_BITS, Special::Infinity),
            MagNum::Finite(exp, man) => {
                if exp > float::exp_max() as i64 {
                    Float::with_val(MAG_BITS, Special::Infinity)
                } else if exp < float::exp_min() as i64 {
                    let mut f = Float::new(MAG_BITS);
                    f.next_up();
                    f
                } else {
                    let mut f = Float::with_val(MAG_BITS, man);
                    f <<= (exp - MAG_BITS as i64) as i32;
                    f
                }
            }
        }
    }

    /// Converts this `Mag` to an exact rational.
    /// Returns `None` for infinity and for finite values whose
    /// binary exponent does not fit in an `i32`.
    pub fn to_rational(&self) -> Option<Rational> {
        match self.num {
            MagNum::Zero => Some(Rational::new()),
            MagNum::Infinity => None,
            MagNum::Finite(exp, man) => {
                let shift = i32::try_from(exp - MAG_BITS as i64).ok()?;
                Some(Rational::from(man) << shift)
            }
        }
    }

    /// Converts this `Mag` to an `f64`, rounding up.
    pub fn to_f64(&self) -> f64 {
        match self.num {
            MagNum::Zero => 0.0,
            MagNum::Infinity => f64::INFINITY,
            MagNum::Finite(_, _) => self.to_float().to_f64_round(float::Round::Up),
        }
    }

    /// Compares this `Mag` with `|x|`.
    /// A NaN `x` compares as greater than every magnitude.
    pub fn cmp_abs_float(&self, x: &Float) -> Ordering {
        if x.is_nan() {
            return Ordering::Less;
        }

        match self.num {
            MagNum::Zero => {
                if x.is_zero() {
                    Ordering::Equal
                } else {
                    Ordering::Less
                }
            }
            MagNum::Infinity => {
                if x.is_infinite() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            MagNum::Finite(exp, _) => {
                if x.is_infinite() {
                    Ordering::Less
                } else if x.is_zero() {
                    Ordering::Greater
                } else if exp > float::exp_max() as i64 {
                    Ordering::Greater
                } else if exp < float::exp_min() as i64 {
                    Ordering::Less
                } else {
                    self.to_float().cmp_abs(x).unwrap_or(Ordering::Less)
                }
            }
        }
    }
}
