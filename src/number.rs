/*
    Defines a number
*/

use crate::Mag;

/// The number type.
///
/// The central trait of this library.
/// A `Number` encodes an enclosure of some real or complex value:
/// every operation returns an enclosure that is guaranteed to contain
/// the exact result of the operation applied to any values contained
/// in the inputs.
pub trait Number: Clone + Default {
    /// The rounding context associated with this `Number`.
    type Ctx: Context;

    /// Returns true if this `Number` is exactly zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this `Number` carries no uncertainty.
    fn is_exact(&self) -> bool;

    /// Returns true if this `Number` has a finite midpoint and radius.
    fn is_finite(&self) -> bool;

    /// Returns true if this `Number` is the indeterminate value.
    fn is_indeterminate(&self) -> bool;

    /// Returns true if this `Number` may be zero.
    fn contains_zero(&self) -> bool;

    /// Returns the indeterminate value.
    fn indeterminate() -> Self;

    /// Returns an exact one.
    fn one() -> Self;

    /// Negates this `Number`. Negation is always exact.
    fn neg(&self) -> Self;

    /// Adds this `Number` and another, rounding the result
    /// according to the provided context.
    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Subtracts another `Number` from this one, rounding the result
    /// according to the provided context.
    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Multiplies this `Number` and another, rounding the result
    /// according to the provided context.
    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Divides this `Number` by another, rounding the result
    /// according to the provided context.
    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Computes `self + x * y`, rounding the result
    /// according to the provided context.
    fn addmul(&self, x: &Self, y: &Self, ctx: &Self::Ctx) -> Self;

    /// Multiplies this `Number` by `2^e` exactly.
    fn mul_2exp(&self, e: i64) -> Self;

    /// Inflates the radius of this `Number` by `err`.
    fn add_error_mag(&mut self, err: &Mag);

    /// Returns an upper bound on the absolute value of this `Number`.
    fn mag_bound(&self) -> Mag;
}

/// Rounding parameters for a family of numbers.
///
/// For any computer number system, most mathematical operators
/// can be decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// A `Context` describes the second operation, the rounding behavior that
/// should be used to apply a "fit-to-representation" on a real number output.
pub trait Context: Clone {
    /// The working precision in bits.
    fn prec(&self) -> u32;
}
