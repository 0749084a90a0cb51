/*
    Rounding contexts
*/

use rug::float::Round as Rnd;

use crate::Context;

macro_rules! assert_valid_prec {
    ($p:expr) => {
        assert!(
            ($p >= 2) && ($p <= rug::float::prec_max()),
            "invalid working precision, must be 2 <= p <= {}: {}",
            rug::float::prec_max(),
            $p
        );
    };
}

/// Rounding modes for the midpoint of a ball.
///
/// The radius of a ball is always rounded up regardless of the mode;
/// the mode only decides where the midpoint lands, and therefore
/// how large the rounding error term is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    NearestEven,
    /// Round towards `+infinity` (ceiling).
    ToPositive,
    /// Round towards `-infinity` (floor).
    ToNegative,
    /// Round towards zero (down).
    ToZero,
    /// Round away from zero (up).
    AwayZero,
}

impl RoundingMode {
    /// Returns true if this mode rounds to nearest.
    /// The rounding error of such a mode is at most half an ULP.
    pub fn is_nearest(&self) -> bool {
        matches!(self, RoundingMode::NearestEven)
    }

    /// Returns the mode rounding in the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            RoundingMode::NearestEven => RoundingMode::NearestEven,
            RoundingMode::ToPositive => RoundingMode::ToNegative,
            RoundingMode::ToNegative => RoundingMode::ToPositive,
            RoundingMode::ToZero => RoundingMode::AwayZero,
            RoundingMode::AwayZero => RoundingMode::ToZero,
        }
    }
}

impl From<RoundingMode> for Rnd {
    fn from(rm: RoundingMode) -> Self {
        match rm {
            RoundingMode::NearestEven => Rnd::Nearest,
            RoundingMode::ToPositive => Rnd::Up,
            RoundingMode::ToNegative => Rnd::Down,
            RoundingMode::ToZero => Rnd::Zero,
            RoundingMode::AwayZero => Rnd::AwayZero,
        }
    }
}

/// Rounding context for balls.
///
/// Carries the working precision, the number of significant bits
/// the midpoint of a result is rounded to, and the rounding mode
/// used for the midpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BallContext {
    prec: u32,
    rm: RoundingMode,
}

impl BallContext {
    /// Creates a new rounding context with `prec` bits
    /// of working precision and `rm` set to `RoundingMode::NearestEven`.
    pub fn new(prec: u32) -> Self {
        assert_valid_prec!(prec);
        Self {
            prec,
            rm: RoundingMode::NearestEven,
        }
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Sets the working precision.
    pub fn with_prec(mut self, prec: u32) -> Self {
        assert_valid_prec!(prec);
        self.prec = prec;
        self
    }

    /// Returns a context with `extra` guard bits added.
    pub fn guarded(&self, extra: u32) -> Self {
        self.with_prec(self.prec.saturating_add(extra))
    }

    /// Returns the working precision in bits.
    pub fn prec(&self) -> u32 {
        self.prec
    }

    /// Returns the rounding mode.
    pub fn rm(&self) -> RoundingMode {
        self.rm
    }

    /// Returns the rounding mode as understood by MPFR.
    pub(crate) fn rnd(&self) -> Rnd {
        self.rm.into()
    }
}

impl Context for BallContext {
    fn prec(&self) -> u32 {
        self.prec
    }
}

impl Default for BallContext {
    fn default() -> Self {
        Self::new(53)
    }
}
