/*
    Comparison and containment
*/

use std::cmp::Ordering;

use rug::{float::Round as Rnd, Rational};

use super::round::round_directed;
use super::*;
use crate::ops::Enclosure;

// Working precision for distances between midpoints when an exact
// comparison is out of reach.
const DIST_PREC: u32 = 64;

// Sign predicates
impl Ball {
    /// Returns true if this `Ball` may contain zero, that is,
    /// if `|mid| <= rad`. The indeterminate ball contains zero.
    pub fn contains_zero(&self) -> bool {
        self.mid.is_nan() || self.rad.cmp_abs_float(&self.mid) != Ordering::Less
    }

    /// Returns true if every point of this `Ball` is nonzero.
    pub fn is_nonzero(&self) -> bool {
        !self.contains_zero()
    }

    /// Returns true if every point of this `Ball` is strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.mid.is_nan() && self.mid > 0 && self.rad.cmp_abs_float(&self.mid) == Ordering::Less
    }

    /// Returns true if every point of this `Ball` is nonnegative.
    pub fn is_nonnegative(&self) -> bool {
        !self.mid.is_nan() && self.mid >= 0 && self.rad.cmp_abs_float(&self.mid) != Ordering::Greater
    }

    /// Returns true if every point of this `Ball` is strictly negative.
    pub fn is_negative(&self) -> bool {
        !self.mid.is_nan() && self.mid < 0 && self.rad.cmp_abs_float(&self.mid) == Ordering::Less
    }

    /// Returns true if every point of this `Ball` is nonpositive.
    pub fn is_nonpositive(&self) -> bool {
        !self.mid.is_nan() && self.mid <= 0 && self.rad.cmp_abs_float(&self.mid) != Ordering::Greater
    }

    /// Returns true if this `Ball` contains some strictly positive number.
    pub fn contains_positive(&self) -> bool {
        self.mid.is_nan() || self.mid > 0 || self.rad.cmp_abs_float(&self.mid) == Ordering::Greater
    }

    /// Returns true if this `Ball` contains some nonnegative number.
    pub fn contains_nonnegative(&self) -> bool {
        self.mid.is_nan() || self.mid >= 0 || self.rad.cmp_abs_float(&self.mid) != Ordering::Less
    }

    /// Returns true if this `Ball` contains some strictly negative number.
    pub fn contains_negative(&self) -> bool {
        self.mid.is_nan() || self.mid < 0 || self.rad.cmp_abs_float(&self.mid) == Ordering::Greater
    }

    /// Returns true if this `Ball` contains some nonpositive number.
    pub fn contains_nonpositive(&self) -> bool {
        self.mid.is_nan() || self.mid <= 0 || self.rad.cmp_abs_float(&self.mid) != Ordering::Less
    }
}

// Containment
impl Ball {
    /// Returns true if the exact value `x` lies in this `Ball`.
    /// The indeterminate ball contains every value.
    pub fn contains_float(&self, x: &Float) -> bool {
        if self.mid.is_nan() {
            true
        } else if x.is_nan() {
            false
        } else if x.is_infinite() || self.mid.is_infinite() {
            self.rad.is_inf() || *x == self.mid
        } else {
            x.to_rational()
                .map_or(false, |q| self.contains_rational(&q))
        }
    }

    /// Returns true if the rational `q` lies in this `Ball`.
    pub fn contains_rational(&self, q: &Rational) -> bool {
        if self.mid.is_nan() || self.rad.is_inf() {
            return true;
        }

        let m = match self.mid.to_rational() {
            Some(m) => m,
            None => return false,
        };

        let d = Rational::from(q - &m).abs();
        match self.rad.to_rational() {
            Some(r) => d <= r,
            None => Mag::from_float(&round_directed(&d, DIST_PREC, Rnd::Up)) <= self.rad,
        }
    }

    /// Returns true if the integer `n` lies in this `Ball`.
    pub fn contains_i64(&self, n: i64) -> bool {
        self.contains_rational(&Rational::from(n))
    }

    /// Returns true if every point of `other` lies in this `Ball`.
    pub fn contains(&self, other: &Self) -> bool {
        if self.mid.is_nan() {
            return true;
        }

        if other.mid.is_nan() {
            return false;
        }

        if self.rad.is_inf() {
            return true;
        }

        if other.rad.is_inf() {
            return false;
        }

        if self.mid.is_infinite() || other.mid.is_infinite() {
            return self.mid == other.mid;
        }

        // |m2 - m1| + r2 <= r1
        match Self::exact_parts(self, other) {
            Some((m1, r1, m2, r2)) => Rational::from(&m2 - &m1).abs() + r2 <= r1,
            None => {
                let (_, d) = Self::dist_bounds(self, other);
                d.add(&other.rad) <= self.rad
            }
        }
    }

    /// Returns true if this `Ball` and `other` share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.mid.is_nan() || other.mid.is_nan() {
            return true;
        }

        if self.rad.is_inf() || other.rad.is_inf() {
            return true;
        }

        if self.mid.is_infinite() || other.mid.is_infinite() {
            return self.mid == other.mid;
        }

        // |m2 - m1| <= r1 + r2
        match Self::exact_parts(self, other) {
            Some((m1, r1, m2, r2)) => Rational::from(&m2 - &m1).abs() <= r1 + r2,
            None => {
                let (d, _) = Self::dist_bounds(self, other);
                d <= self.rad.add(&other.rad)
            }
        }
    }

    // Midpoints and radii of two finite balls as exact rationals.
    fn exact_parts(a: &Self, b: &Self) -> Option<(Rational, Rational, Rational, Rational)> {
        Some((
            a.mid.to_rational()?,
            a.rad.to_rational()?,
            b.mid.to_rational()?,
            b.rad.to_rational()?,
        ))
    }

    // Lower and upper bounds on the distance between two finite midpoints.
    // Containment tested against the upper bound never gives a false
    // positive, and overlap tested against the lower bound never gives
    // a false negative.
    fn dist_bounds(a: &Self, b: &Self) -> (Mag, Mag) {
        let lo = round_directed(&b.mid - &a.mid, DIST_PREC, Rnd::Zero);
        let hi = round_directed(&b.mid - &a.mid, DIST_PREC, Rnd::AwayZero);
        (Mag::from_float_lower(&lo), Mag::from_float(&hi))
    }
}

impl Enclosure for Ball {
    fn contains(&self, other: &Self) -> bool {
        Ball::contains(self, other)
    }

    fn overlaps(&self, other: &Self) -> bool {
        Ball::overlaps(self, other)
    }
}
