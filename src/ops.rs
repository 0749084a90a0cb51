/*
    Operations
*/

use crate::Number;

pub trait Round<N: Number>: Number {
    /// Rounds the midpoint to the precision of `ctx`.
    /// The radius of the result absorbs the rounding error,
    /// so the result always contains `self`.
    fn round(&self, ctx: &Self::Ctx) -> N;
}

/// Set relations between enclosures.
pub trait Enclosure: Number {
    /// Returns true if every point of `other` is a point of `self`.
    fn contains(&self, other: &Self) -> bool;

    /// Returns true if `self` and `other` share at least one point.
    fn overlaps(&self, other: &Self) -> bool;
}
