/*
    Top-level
*/

mod acb;
mod ball;
mod error;
mod fmt;
mod mag;
mod number;
mod round;

pub mod consts;
pub mod ops;
pub mod vec;

pub use rug::Float;

pub use acb::Acb;
pub use ball::{Ball, PREC_EXACT};
pub use error::ParseBallError;
pub use fmt::RAD_DIGITS;
pub use mag::{Bound, Mag, MAG_BITS};
pub use number::*;
pub use round::*;
