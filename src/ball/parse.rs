/*
    Parsing
*/

use std::str::FromStr;

use rug::float::Round as Rnd;

use super::round::round_mid;
use super::*;
use crate::{BallContext, ParseBallError};

// Precision the radius is read at before being bounded by a `Mag`.
const RADIUS_PARSE_PREC: u32 = 64;

impl Ball {
    /// Parses a `Ball` from a string, rounding the midpoint to the
    /// working precision of `ctx`.
    ///
    /// Accepted forms are `"x"`, `"x +/- r"` and `"[x +/- r]"` where
    /// `x` and `r` are decimal floating-point literals. The radius is
    /// rounded up so the result always contains the written interval.
    pub fn parse(s: &str, ctx: &BallContext) -> Result<Self, ParseBallError> {
        let mut s = s.trim();
        if let Some(inner) = s.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            s = inner.trim();
        }

        if s.is_empty() {
            return Err(ParseBallError::Empty);
        }

        let (mid_str, rad_str) = match s.split_once("+/-") {
            Some((m, r)) => (m.trim(), Some(r.trim())),
            None => (s, None),
        };

        let parsed =
            Float::parse(mid_str).map_err(|_| ParseBallError::InvalidMidpoint(mid_str.to_string()))?;
        let (mid, err) = round_mid(parsed, ctx);

        let rad = match rad_str {
            None => Mag::zero(),
            Some(r) => {
                let parsed =
                    Float::parse(r).map_err(|_| ParseBallError::InvalidRadius(r.to_string()))?;
                let (rad, _) = Float::with_val_round(RADIUS_PARSE_PREC, parsed, Rnd::Up);
                if rad.is_nan() {
                    return Err(ParseBallError::InvalidRadius(r.to_string()));
                }
                if rad.is_sign_negative() && !rad.is_zero() {
                    return Err(ParseBallError::NegativeRadius);
                }
                Mag::from_float(&rad)
            }
        };

        Ok(Self::round_finalize(mid, rad.add(&err)))
    }
}

impl FromStr for Ball {
    type Err = ParseBallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &BallContext::default())
    }
}
