/*
    Complex balls
*/

use crate::{ball::PREC_EXACT, ops::Enclosure, Ball, Mag};

mod arithmetic;

/** A complex ball: a pair of real balls.
 *
 * The real and imaginary parts are independent enclosures, so an
 * `Acb` represents a rectangle in the complex plane rather than a
 * disk. Rounding errors of the two parts are tracked separately.
 *
 */
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Acb {
    re: Ball,
    im: Ball,
}

// Constructors and getters
impl Acb {
    /// Creates a complex ball from its real and imaginary parts.
    pub fn new(re: Ball, im: Ball) -> Self {
        Self { re, im }
    }

    /// Returns an exact zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns an exact one.
    pub fn one() -> Self {
        Self::from(Ball::one())
    }

    /// Returns the imaginary unit.
    pub fn i() -> Self {
        Self::new(Ball::zero(), Ball::one())
    }

    /// Returns the indeterminate complex ball.
    pub fn indeterminate() -> Self {
        Self::new(Ball::indeterminate(), Ball::indeterminate())
    }

    /// Returns the real part.
    pub fn re(&self) -> &Ball {
        &self.re
    }

    /// Returns the imaginary part.
    pub fn im(&self) -> &Ball {
        &self.im
    }

    /// Splits this `Acb` into its real and imaginary parts.
    pub fn into_parts(self) -> (Ball, Ball) {
        (self.re, self.im)
    }

    /// Returns true if this `Acb` is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Returns true if the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// Returns true if both parts are exact.
    pub fn is_exact(&self) -> bool {
        self.re.is_exact() && self.im.is_exact()
    }

    /// Returns true if both parts are finite.
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Returns true if either part is indeterminate.
    pub fn is_indeterminate(&self) -> bool {
        self.re.is_indeterminate() || self.im.is_indeterminate()
    }

    /// Returns true if this `Acb` may be zero.
    pub fn contains_zero(&self) -> bool {
        self.re.contains_zero() && self.im.contains_zero()
    }

    /// Returns true if every point of `other` lies in this `Acb`.
    pub fn contains(&self, other: &Self) -> bool {
        self.re.contains(&other.re) && self.im.contains(&other.im)
    }

    /// Returns true if this `Acb` and `other` share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.re.overlaps(&other.re) && self.im.overlaps(&other.im)
    }

    /// Inflates the radius of both parts by `err`.
    pub fn add_error_mag(&mut self, err: &Mag) {
        self.re.add_error(err);
        self.im.add_error(err);
    }

    /// Returns an upper bound for the absolute value of every
    /// point of this `Acb`.
    pub fn get_mag(&self) -> Mag {
        if self.im.is_zero() {
            self.re.get_mag()
        } else if self.re.is_zero() {
            self.im.get_mag()
        } else {
            let u = self.re.get_mag();
            let v = self.im.get_mag();
            u.mul(&u).add(&v.mul(&v)).sqrt()
        }
    }

    /// Returns the relative error of this `Acb` in bits, measured
    /// from the larger radius against the larger midpoint.
    pub fn rel_error_bits(&self) -> i64 {
        let rad = (*self.re.rad()).max(*self.im.rad());
        if rad.is_zero() {
            return -PREC_EXACT;
        }

        if rad.is_inf() || self.is_indeterminate() {
            return PREC_EXACT;
        }

        let mid_exp = [self.re.mid(), self.im.mid()]
            .iter()
            .filter(|m| m.is_normal())
            .filter_map(|m| m.get_exp())
            .max();

        match (rad.exponent(), mid_exp) {
            (Some(re), Some(me)) => re.saturating_add(1).saturating_sub(me as i64),
            _ => PREC_EXACT,
        }
    }

    /// Returns the number of accurate bits of this `Acb`.
    pub fn rel_accuracy_bits(&self) -> i64 {
        -self.rel_error_bits()
    }
}

impl Enclosure for Acb {
    fn contains(&self, other: &Self) -> bool {
        Acb::contains(self, other)
    }

    fn overlaps(&self, other: &Self) -> bool {
        Acb::overlaps(self, other)
    }
}

impl From<Ball> for Acb {
    fn from(re: Ball) -> Self {
        Self::new(re, Ball::zero())
    }
}

impl From<i64> for Acb {
    fn from(n: i64) -> Self {
        Self::from(Ball::from(n))
    }
}

impl From<(i64, i64)> for Acb {
    fn from((re, im): (i64, i64)) -> Self {
        Self::new(Ball::from(re), Ball::from(im))
    }
}
