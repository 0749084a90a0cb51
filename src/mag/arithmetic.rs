/*
    Arithmetic on magnitudes
*/

use std::ops::{Add, Mul};

use num_integer::Roots;
use rug::{float::Round as Rnd, Float};

use super::*;

// Beyond this exponent difference the smaller operand lies
// entirely below the last mantissa bit of the larger one.
const ALIGN_LIMIT: i64 = 90;

// Bounds on `log(2) * 2^MAG_BITS`.
const LOG2_MAN_UPPER: u128 = 744_261_118;
const LOG2_MAN_LOWER: u128 = 744_261_117;

// Exponents at which `log1p` switches from MPFR to closed-form bounds.
const LOG1P_SMALL_EXP: i64 = -60;
const LOG1P_LARGE_EXP: i64 = 1 << 20;

// Largest `n` for which `rfac_ui` multiplies out `n!`.
const RFAC_DIRECT_MAX: u64 = 64;

impl Bound {
    // Rounding direction to use when an intermediate is computed with MPFR.
    pub(crate) fn rnd(&self) -> Rnd {
        match self {
            Bound::Upper => Rnd::Up,
            Bound::Lower => Rnd::Down,
        }
    }
}

// Directed implementations
impl Mag {
    pub(crate) fn add_dir(&self, other: &Self, bound: Bound) -> Self {
        match (self.num, other.num) {
            (MagNum::Infinity, _) | (_, MagNum::Infinity) => Self::inf(),
            (MagNum::Zero, _) => *other,
            (_, MagNum::Zero) => *self,
            (MagNum::Finite(e1, m1), MagNum::Finite(e2, m2)) => {
                let ((eh, mh), (el, ml)) = if e1 >= e2 {
                    ((e1, m1), (e2, m2))
                } else {
                    ((e2, m2), (e1, m1))
                };

                let shift = eh - el;
                if shift > ALIGN_LIMIT {
                    // the smaller term is below one ulp of the larger
                    match bound {
                        Bound::Upper => Self::from_parts(
                            ((mh as u128) << 34) + 1,
                            eh - MAG_BITS as i64 - 34,
                            bound,
                        ),
                        Bound::Lower => Self {
                            num: MagNum::Finite(eh, mh),
                        },
                    }
                } else {
                    let sum = ((mh as u128) << shift) + ml as u128;
                    Self::from_parts(sum, el - MAG_BITS as i64, bound)
                }
            }
        }
    }

    pub(crate) fn sub_dir(&self, other: &Self, bound: Bound) -> Self {
        match (self.num, other.num) {
            (_, MagNum::Zero) => *self,
            (MagNum::Zero, _) => Self::zero(),
            (MagNum::Infinity, MagNum::Infinity) => match bound {
                Bound::Upper => Self::inf(),
                Bound::Lower => Self::zero(),
            },
            (MagNum::Infinity, _) => Self::inf(),
            (_, MagNum::Infinity) => Self::zero(),
            (MagNum::Finite(e1, m1), MagNum::Finite(e2, m2)) => {
                if *self <= *other {
                    return Self::zero();
                }

                let shift = e1 - e2;
                if shift > ALIGN_LIMIT {
                    match bound {
                        Bound::Upper => *self,
                        Bound::Lower => Self::from_parts(
                            ((m1 as u128) << 34) - 1,
                            e1 - MAG_BITS as i64 - 34,
                            bound,
                        ),
                    }
                } else {
                    let diff = ((m1 as u128) << shift) - m2 as u128;
                    Self::from_parts(diff, e2 - MAG_BITS as i64, bound)
                }
            }
        }
    }

    pub(crate) fn mul_dir(&self, other: &Self, bound: Bound) -> Self {
        match (self.num, other.num) {
            // zero means "exactly no error", even against an unbounded factor
            (MagNum::Zero, _) | (_, MagNum::Zero) => Self::zero(),
            (MagNum::Infinity, _) | (_, MagNum::Infinity) => Self::inf(),
            (MagNum::Finite(e1, m1), MagNum::Finite(e2, m2)) => Self::from_parts(
                m1 as u128 * m2 as u128,
                e1 + e2 - 2 * MAG_BITS as i64,
                bound,
            ),
        }
    }

    pub(crate) fn div_dir(&self, other: &Self, bound: Bound) -> Self {
        match (self.num, other.num) {
            (MagNum::Zero, MagNum::Zero) => match bound {
                Bound::Upper => Self::inf(),
                Bound::Lower => Self::zero(),
            },
            (_, MagNum::Zero) => Self::inf(),
            (MagNum::Zero, _) => Self::zero(),
            (MagNum::Infinity, MagNum::Infinity) => match bound {
                Bound::Upper => Self::inf(),
                Bound::Lower => Self::zero(),
            },
            (MagNum::Infinity, _) => Self::inf(),
            (_, MagNum::Infinity) => Self::zero(),
            (MagNum::Finite(e1, m1), MagNum::Finite(e2, m2)) => {
                let num = (m1 as u128) << 64;
                let den = m2 as u128;
                let mut q = num / den;
                if bound == Bound::Upper && num % den != 0 {
                    q += 1;
                }
                Self::from_parts(q, e1 - e2 - 64, bound)
            }
        }
    }

    pub(crate) fn pow_ui_dir(&self, mut n: u64, bound: Bound) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul_dir(&base, bound);
            }
            n >>= 1;
            if n > 0 {
                base = base.mul_dir(&base, bound);
            }
        }
        result
    }

    pub(crate) fn sqrt_dir(&self, bound: Bound) -> Self {
        match self.num {
            MagNum::Zero | MagNum::Infinity => *self,
            MagNum::Finite(e, m) => {
                // value is `m * 2^raw`; scale so the exponent is even
                let raw = e - MAG_BITS as i64;
                let s = if (raw - 60).rem_euclid(2) == 0 { 60 } else { 61 };
                let n = (m as u128) << s;
                let mut r = n.sqrt();
                if bound == Bound::Upper && r * r != n {
                    r += 1;
                }
                Self::from_parts(r, (raw - s) / 2, bound)
            }
        }
    }

    pub(crate) fn log1p_dir(&self, bound: Bound) -> Self {
        match self.num {
            MagNum::Zero | MagNum::Infinity => *self,
            MagNum::Finite(e, m) => {
                if e < LOG1P_SMALL_EXP {
                    // x (1 - x/2) <= log(1 + x) <= x
                    match bound {
                        Bound::Upper => *self,
                        Bound::Lower => Self::from_parts(
                            m as u128 * ((1u128 << MAG_BITS) - 1),
                            e - 2 * MAG_BITS as i64,
                            bound,
                        ),
                    }
                } else if e > LOG1P_LARGE_EXP {
                    // (e - 1) log(2) < log(1 + x) < (e + 1) log(2)
                    match bound {
                        Bound::Upper => {
                            let log2 = Self::from_parts(LOG2_MAN_UPPER, -(MAG_BITS as i64), bound);
                            Self::from_u64((e + 1) as u64).mul(&log2)
                        }
                        Bound::Lower => {
                            let log2 = Self::from_parts(LOG2_MAN_LOWER, -(MAG_BITS as i64), bound);
                            Self::from_u64_lower((e - 1) as u64).mul_lower(&log2)
                        }
                    }
                } else {
                    let x = self.to_float();
                    let (y, _) = Float::with_val_round(2 * MAG_BITS, x.ln_1p_ref(), bound.rnd());
                    Self::from_float_dir(&y, bound)
                }
            }
        }
    }

    pub(crate) fn mul_2exp(&self, e: i64) -> Self {
        match self.num {
            MagNum::Finite(exp, man) => Self::finish(man, exp.saturating_add(e), Bound::Upper),
            _ => *self,
        }
    }
}

// Public entry points
impl Mag {
    /// Returns an upper bound for `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        self.add_dir(other, Bound::Upper)
    }

    /// Returns a lower bound for `self + other`.
    pub fn add_lower(&self, other: &Self) -> Self {
        self.add_dir(other, Bound::Lower)
    }

    /// Returns an upper bound for `max(self - other, 0)`.
    pub fn sub(&self, other: &Self) -> Self {
        self.sub_dir(other, Bound::Upper)
    }

    /// Returns a lower bound for `max(self - other, 0)`.
    ///
    /// Used when an error term is subtracted from a quantity that
    /// later appears in a denominator.
    pub fn sub_lower(&self, other: &Self) -> Self {
        self.sub_dir(other, Bound::Lower)
    }

    /// Returns an upper bound for `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        self.mul_dir(other, Bound::Upper)
    }

    /// Returns a lower bound for `self * other`.
    pub fn mul_lower(&self, other: &Self) -> Self {
        self.mul_dir(other, Bound::Lower)
    }

    /// Returns an upper bound for `self + x * y`.
    pub fn addmul(&self, x: &Self, y: &Self) -> Self {
        self.add(&x.mul(y))
    }

    /// Returns an upper bound for `self / other`.
    pub fn div(&self, other: &Self) -> Self {
        self.div_dir(other, Bound::Upper)
    }

    /// Returns a lower bound for `self / other`.
    pub fn div_lower(&self, other: &Self) -> Self {
        self.div_dir(other, Bound::Lower)
    }

    /// Returns an upper bound for `self^n`.
    pub fn pow_ui(&self, n: u64) -> Self {
        self.pow_ui_dir(n, Bound::Upper)
    }

    /// Returns a lower bound for `self^n`.
    ///
    /// Needed when the power appears in a denominator.
    pub fn pow_ui_lower(&self, n: u64) -> Self {
        self.pow_ui_dir(n, Bound::Lower)
    }

    /// Returns an upper bound for `sqrt(self)`.
    pub fn sqrt(&self) -> Self {
        self.sqrt_dir(Bound::Upper)
    }

    /// Returns a lower bound for `sqrt(self)`.
    pub fn sqrt_lower(&self) -> Self {
        self.sqrt_dir(Bound::Lower)
    }

    /// Returns an upper bound for `log(1 + self)`.
    pub fn log1p(&self) -> Self {
        self.log1p_dir(Bound::Upper)
    }

    /// Returns a lower bound for `log(1 + self)`.
    pub fn log1p_lower(&self) -> Self {
        self.log1p_dir(Bound::Lower)
    }

    /// Returns an upper bound for `self * 2^e`.
    /// The result is exact unless the exponent leaves the supported range.
    pub fn mul_2exp_si(&self, e: i64) -> Self {
        self.mul_2exp(e)
    }

    /// Returns an upper bound for `log(n)`, computed as `log1p(n - 1)`.
    /// By convention `log(0)` is bounded by infinity.
    pub fn log_ui(n: u64) -> Self {
        match n {
            0 => Self::inf(),
            1 => Self::zero(),
            _ => Self::from_u64(n - 1).log1p(),
        }
    }

    /// Returns an upper bound for `1 / n!`.
    ///
    /// Small factorials are multiplied out. Past `RFAC_DIRECT_MAX` the
    /// bound comes from Stirling's inequality `n! >= sqrt(2 pi n) (n/e)^n`.
    pub fn rfac_ui(n: u64) -> Self {
        if n <= RFAC_DIRECT_MAX {
            let mut fac = Self::one();
            for k in 2..=n {
                fac = fac.mul_lower(&Self::from_u64_lower(k));
            }
            return Self::one().div(&fac);
        }

        // e < 2.718281829
        let e = Self::from_u64(2_718_281_829).div(&Self::from_u64_lower(1_000_000_000));
        let n_lo = Self::from_u64_lower(n);
        // 2 pi n >= 6 n
        let stirling = n_lo.mul_lower(&Self::from_u64_lower(6)).sqrt_lower();
        e.div(&n_lo).pow_ui(n).div(&stirling)
    }

    /// Returns an upper bound for `(1 + 1/m)^n`.
    pub fn binpow_uiui(m: u64, n: u64) -> Self {
        if m == 0 {
            return Self::inf();
        }

        if m > n {
            // exp(n/m) <= 1 + (n/m) + (n/m)^2 when n/m < 1
            let t = Self::from_u64(n).div(&Self::from_u64_lower(m));
            t.mul(&t).add(&t).add(&Self::one())
        } else {
            let t = Self::one().div(&Self::from_u64_lower(m));
            Self::one().add(&t).pow_ui(n)
        }
    }
}

impl Add<&Mag> for &Mag {
    type Output = Mag;

    fn add(self, other: &Mag) -> Mag {
        self.add_dir(other, Bound::Upper)
    }
}

impl Mul<&Mag> for &Mag {
    type Output = Mag;

    fn mul(self, other: &Mag) -> Mag {
        self.mul_dir(other, Bound::Upper)
    }
}
