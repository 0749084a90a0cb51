/*
    Cached mathematical constants
*/

use parking_lot::{const_mutex, Mutex};
use rug::{
    float::{Constant, Round as Rnd},
    Float,
};
use tracing::debug;

use crate::{Ball, BallContext};

// Extra bits carried by the endpoints of a constant.
const CONST_GUARD_BITS: u32 = 8;

/// A constant computed on demand and cached by precision.
///
/// The cache holds the most precise value computed so far. A request
/// at a precision no higher than the cached one is answered by
/// rounding the cached value; a request at a higher precision
/// recomputes the constant and replaces the cache.
///
/// Access is guarded by a mutex, so a `CachedConstant` may live in a
/// `static` and be shared between threads. Concurrent recomputation
/// is idempotent.
pub struct CachedConstant {
    name: &'static str,
    compute: fn(u32) -> Ball,
    state: Mutex<Option<(u32, Ball)>>,
}

impl CachedConstant {
    /// Creates an empty cache for the constant computed by `compute`.
    pub const fn new(name: &'static str, compute: fn(u32) -> Ball) -> Self {
        Self {
            name,
            compute,
            state: const_mutex(None),
        }
    }

    /// Returns the name of this constant.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns an enclosure of this constant at the working
    /// precision of `ctx`.
    pub fn get(&self, ctx: &BallContext) -> Ball {
        let mut state = self.state.lock();
        match state.as_ref() {
            Some((prec, value)) if *prec >= ctx.prec() => value.set_round(ctx),
            _ => {
                debug!(name = self.name, prec = ctx.prec(), "computing constant");
                let value = (self.compute)(ctx.prec());
                *state = Some((ctx.prec(), value.clone()));
                value.set_round(ctx)
            }
        }
    }

    /// Returns the precision of the cached value, if any.
    pub fn cached_prec(&self) -> Option<u32> {
        self.state.lock().as_ref().map(|(prec, _)| *prec)
    }

    /// Drops the cached value.
    pub fn clear(&self) {
        *self.state.lock() = None;
    }
}

// Encloses an MPFR constant between its directed roundings.
fn mpfr_constant(c: Constant, prec: u32) -> Ball {
    let ctx = BallContext::new(prec);
    let p = prec + CONST_GUARD_BITS;
    let (lo, _) = Float::with_val_round(p, c, Rnd::Down);
    let (hi, _) = Float::with_val_round(p, c, Rnd::Up);
    Ball::from_interval(&lo, &hi, &ctx)
}

fn compute_pi(prec: u32) -> Ball {
    mpfr_constant(Constant::Pi, prec)
}

fn compute_log2(prec: u32) -> Ball {
    mpfr_constant(Constant::Log2, prec)
}

fn compute_euler(prec: u32) -> Ball {
    mpfr_constant(Constant::Euler, prec)
}

fn compute_catalan(prec: u32) -> Ball {
    mpfr_constant(Constant::Catalan, prec)
}

fn compute_e(prec: u32) -> Ball {
    let ctx = BallContext::new(prec + CONST_GUARD_BITS);
    Ball::one().exp(&ctx)
}

fn compute_sqrt_pi(prec: u32) -> Ball {
    let ctx = BallContext::new(prec + CONST_GUARD_BITS);
    PI.get(&ctx).sqrt(&ctx)
}

fn compute_log10(prec: u32) -> Ball {
    let ctx = BallContext::new(prec + CONST_GUARD_BITS);
    Ball::from(10).log(&ctx)
}

/// The circle constant `pi`.
pub static PI: CachedConstant = CachedConstant::new("pi", compute_pi);
/// The natural logarithm of 2.
pub static LOG2: CachedConstant = CachedConstant::new("log2", compute_log2);
/// The Euler-Mascheroni constant.
pub static EULER: CachedConstant = CachedConstant::new("euler", compute_euler);
/// Catalan's constant.
pub static CATALAN: CachedConstant = CachedConstant::new("catalan", compute_catalan);
/// The base of the natural logarithm.
pub static E: CachedConstant = CachedConstant::new("e", compute_e);
/// The square root of `pi`.
pub static SQRT_PI: CachedConstant = CachedConstant::new("sqrt_pi", compute_sqrt_pi);
/// The natural logarithm of 10.
pub static LOG10: CachedConstant = CachedConstant::new("log10", compute_log10);

static ALL: [&CachedConstant; 7] = [&PI, &LOG2, &EULER, &CATALAN, &E, &SQRT_PI, &LOG10];

/// Returns an enclosure of `pi`.
pub fn const_pi(ctx: &BallContext) -> Ball {
    PI.get(ctx)
}

/// Returns an enclosure of `log(2)`.
pub fn const_log2(ctx: &BallContext) -> Ball {
    LOG2.get(ctx)
}

/// Returns an enclosure of Euler's constant.
pub fn const_euler(ctx: &BallContext) -> Ball {
    EULER.get(ctx)
}

/// Returns an enclosure of Catalan's constant.
pub fn const_catalan(ctx: &BallContext) -> Ball {
    CATALAN.get(ctx)
}

/// Returns an enclosure of `e`.
pub fn const_e(ctx: &BallContext) -> Ball {
    E.get(ctx)
}

/// Returns an enclosure of `sqrt(pi)`.
pub fn const_sqrt_pi(ctx: &BallContext) -> Ball {
    SQRT_PI.get(ctx)
}

/// Returns an enclosure of `log(10)`.
pub fn const_log10(ctx: &BallContext) -> Ball {
    LOG10.get(ctx)
}

/// Drops every cached constant.
pub fn cleanup() {
    for c in ALL.iter() {
        c.clear();
    }
}
