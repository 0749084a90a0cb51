/*
    Magnitudes: unsigned upper bounds
*/

use std::cmp::Ordering;

mod arithmetic;
mod convert;

/// Number of bits in the mantissa of a `Mag`.
pub const MAG_BITS: u32 = 30;

// Exponents beyond this range saturate to infinity (or the
// smallest positive magnitude) so that exponent arithmetic never wraps.
pub(crate) const MAG_EXP_LIMIT: i64 = 1 << 60;

const MAG_MAN_MIN: u32 = 1 << (MAG_BITS - 1);
const MAG_MAN_LIMIT: u64 = 1 << MAG_BITS;

// Minimal encoding of a magnitude grouped by classification
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum MagNum {
    // exactly zero
    Zero,
    // finite, nonzero value `man * 2^(exp - MAG_BITS)`
    // with `2^(MAG_BITS - 1) <= man < 2^MAG_BITS`
    // => (exponent, mantissa)
    Finite(i64, u32),
    // unbounded
    Infinity,
}

/// Direction in which a magnitude operation rounds.
///
/// Every magnitude routine is written once against this flag; the
/// `_lower` entry points are thin wrappers passing `Bound::Lower`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Round towards `+infinity`; the result bounds the exact value from above.
    Upper,
    /// Round towards zero; the result bounds the exact value from below.
    Lower,
}

/** An unsigned floating-point bound with a fixed 30-bit mantissa.
 *
 * A `Mag` represents a non-negative extended real number: zero,
 * a finite positive value with an unbounded exponent, or `+infinity`.
 * Operations on magnitudes only ever round in one direction, so a
 * `Mag` produced by an operation is never smaller than the exact result
 * (or, for the `_lower` variants, never larger).
 *
 * `Mag` is the radius type of a `Ball`.
 *
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mag {
    num: MagNum,
}

// Constructors and getters
impl Mag {
    /// Returns the exact zero magnitude.
    pub const fn zero() -> Self {
        Self { num: MagNum::Zero }
    }

    /// Returns the magnitude `1`.
    pub const fn one() -> Self {
        Self {
            num: MagNum::Finite(1, MAG_MAN_MIN),
        }
    }

    /// Returns the infinite magnitude.
    pub const fn inf() -> Self {
        Self {
            num: MagNum::Infinity,
        }
    }

    /// Returns the magnitude `2^e`.
    pub fn pow2(e: i64) -> Self {
        Self::from_parts(MAG_MAN_MIN as u128, e.saturating_sub(MAG_BITS as i64 - 1), Bound::Upper)
    }

    /// Returns true if this `Mag` is zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.num, MagNum::Zero)
    }

    /// Returns true if this `Mag` is infinite.
    pub fn is_inf(&self) -> bool {
        matches!(self.num, MagNum::Infinity)
    }

    /// Returns true if this `Mag` is finite.
    pub fn is_finite(&self) -> bool {
        !self.is_inf()
    }

    /// Returns true if this `Mag` is zero or infinite.
    pub fn is_special(&self) -> bool {
        !matches!(self.num, MagNum::Finite(_, _))
    }

    /// Returns the exponent of this `Mag`, the smallest `e`
    /// such that the value is strictly less than `2^e`.
    /// The result is wrapped in an option since only finite,
    /// nonzero magnitudes have an exponent.
    pub fn exponent(&self) -> Option<i64> {
        match self.num {
            MagNum::Finite(exp, _) => Some(exp),
            _ => None,
        }
    }

    /// Returns the 30-bit integer mantissa of this `Mag`.
    /// The result is wrapped in an option since only finite,
    /// nonzero magnitudes have a mantissa.
    pub fn mantissa(&self) -> Option<u32> {
        match self.num {
            MagNum::Finite(_, man) => Some(man),
            _ => None,
        }
    }

    /// Compares this `Mag` with `2^e`.
    pub fn cmp_2exp(&self, e: i64) -> Ordering {
        match self.num {
            MagNum::Zero => Ordering::Less,
            MagNum::Infinity => Ordering::Greater,
            MagNum::Finite(exp, man) => {
                // value lies in [2^(exp-1), 2^exp)
                if e >= exp {
                    Ordering::Less
                } else if e == exp - 1 {
                    if man == MAG_MAN_MIN {
                        Ordering::Equal
                    } else {
                        Ordering::Greater
                    }
                } else {
                    Ordering::Greater
                }
            }
        }
    }

    // Builds a magnitude from the value `man * 2^exp`, rounding
    // the mantissa to `MAG_BITS` in the direction `bound`.
    pub(crate) fn from_parts(man: u128, exp: i64, bound: Bound) -> Self {
        if man == 0 {
            return Self::zero();
        }

        let bits = (128 - man.leading_zeros()) as i64;
        let shift = bits - MAG_BITS as i64;
        let (mut m, mut e) = if shift > 0 {
            let m = (man >> shift) as u64;
            let lost = man & ((1u128 << shift) - 1) != 0;
            if bound == Bound::Upper && lost {
                (m + 1, exp.saturating_add(shift))
            } else {
                (m, exp.saturating_add(shift))
            }
        } else {
            ((man as u64) << (-shift), exp.saturating_add(shift))
        };

        // carry out of the mantissa
        if m == MAG_MAN_LIMIT {
            m >>= 1;
            e = e.saturating_add(1);
        }

        Self::finish(m as u32, e.saturating_add(MAG_BITS as i64), bound)
    }

    // Clamps a normalized magnitude to the supported exponent range.
    fn finish(man: u32, exp: i64, bound: Bound) -> Self {
        if exp > MAG_EXP_LIMIT {
            match bound {
                Bound::Upper => Self::inf(),
                Bound::Lower => Self {
                    num: MagNum::Finite(MAG_EXP_LIMIT, MAG_MAN_MIN),
                },
            }
        } else if exp < -MAG_EXP_LIMIT {
            match bound {
                Bound::Upper => Self {
                    num: MagNum::Finite(-MAG_EXP_LIMIT, MAG_MAN_MIN),
                },
                Bound::Lower => Self::zero(),
            }
        } else {
            Self {
                num: MagNum::Finite(exp, man),
            }
        }
    }
}

// Implementing `Default` for `Mag`
impl Default for Mag {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Mag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mag {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.num, &other.num) {
            (MagNum::Zero, MagNum::Zero) => Ordering::Equal,
            (MagNum::Zero, _) => Ordering::Less,
            (_, MagNum::Zero) => Ordering::Greater,
            (MagNum::Infinity, MagNum::Infinity) => Ordering::Equal,
            (MagNum::Infinity, _) => Ordering::Greater,
            (_, MagNum::Infinity) => Ordering::Less,
            (MagNum::Finite(e1, m1), MagNum::Finite(e2, m2)) => e1.cmp(e2).then(m1.cmp(m2)),
        }
    }
}
