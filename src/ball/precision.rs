/*
    Accuracy diagnostics
*/

use super::*;

/// Sentinel returned by `Ball::rel_error_bits`.
///
/// An exact ball reports `-PREC_EXACT`; a ball carrying no information
/// (zero or non-finite midpoint with a nonzero radius, or an infinite
/// radius) reports `PREC_EXACT`.
pub const PREC_EXACT: i64 = i64::MAX;

impl Ball {
    /// Returns an estimate of the relative error of this `Ball` in bits,
    /// that is, `ceil(log2(rad)) - ceil(log2(|mid|))` up to one bit.
    ///
    /// Higher-level algorithms compare this against the working
    /// precision to decide when a computation has converged.
    pub fn rel_error_bits(&self) -> i64 {
        if self.rad.is_zero() {
            return -PREC_EXACT;
        }

        if self.rad.is_inf() || !self.mid.is_normal() {
            return PREC_EXACT;
        }

        match (self.rad.exponent(), self.mid.get_exp()) {
            (Some(re), Some(me)) => re.saturating_add(1).saturating_sub(me as i64),
            _ => PREC_EXACT,
        }
    }

    /// Returns the number of accurate bits of this `Ball`,
    /// the negation of `rel_error_bits`.
    pub fn rel_accuracy_bits(&self) -> i64 {
        -self.rel_error_bits()
    }
}
