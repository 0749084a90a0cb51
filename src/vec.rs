/*
    Vectors of enclosures

    Every routine here is generic over `Number`, so the same code
    serves real and complex balls. Length mismatches are contract
    violations and panic.
*/

use rug::Float;

use crate::{
    ops::{Enclosure, Round},
    Ball, BallContext, Mag, Number,
};

macro_rules! assert_same_len {
    ($a:expr, $b:expr) => {
        assert_eq!(
            $a.len(),
            $b.len(),
            "vector lengths must agree: {} != {}",
            $a.len(),
            $b.len()
        );
    };
}

/// Returns a vector of `n` exact zeros.
pub fn zero<N: Number>(n: usize) -> Vec<N> {
    vec![N::default(); n]
}

/// Returns a vector of `n` indeterminate values.
pub fn indeterminate<N: Number>(n: usize) -> Vec<N> {
    vec![N::indeterminate(); n]
}

/// Returns true if every entry is exactly zero.
pub fn is_zero<N: Number>(v: &[N]) -> bool {
    v.iter().all(|x| x.is_zero())
}

/// Returns true if every entry is finite.
pub fn is_finite<N: Number>(v: &[N]) -> bool {
    v.iter().all(|x| x.is_finite())
}

/// Rounds every entry to the precision of `ctx`.
pub fn round<N: Round<N>>(v: &[N], ctx: &N::Ctx) -> Vec<N> {
    v.iter().map(|x| x.round(ctx)).collect()
}

/// Returns true if every entry of `a` contains the matching entry of `b`.
pub fn contains<N: Enclosure>(a: &[N], b: &[N]) -> bool {
    assert_same_len!(a, b);
    a.iter().zip(b).all(|(x, y)| x.contains(y))
}

/// Returns true if every entry of `a` overlaps the matching entry of `b`.
pub fn overlaps<N: Enclosure>(a: &[N], b: &[N]) -> bool {
    assert_same_len!(a, b);
    a.iter().zip(b).all(|(x, y)| x.overlaps(y))
}

/// Negates every entry.
pub fn neg<N: Number>(v: &[N]) -> Vec<N> {
    v.iter().map(|x| x.neg()).collect()
}

/// Adds two vectors entrywise.
pub fn add<N: Number>(a: &[N], b: &[N], ctx: &N::Ctx) -> Vec<N> {
    assert_same_len!(a, b);
    a.iter().zip(b).map(|(x, y)| x.add(y, ctx)).collect()
}

/// Subtracts two vectors entrywise.
pub fn sub<N: Number>(a: &[N], b: &[N], ctx: &N::Ctx) -> Vec<N> {
    assert_same_len!(a, b);
    a.iter().zip(b).map(|(x, y)| x.sub(y, ctx)).collect()
}

/// Multiplies every entry by `c`.
pub fn scalar_mul<N: Number>(v: &[N], c: &N, ctx: &N::Ctx) -> Vec<N> {
    v.iter().map(|x| x.mul(c, ctx)).collect()
}

/// Divides every entry by `c`.
pub fn scalar_div<N: Number>(v: &[N], c: &N, ctx: &N::Ctx) -> Vec<N> {
    v.iter().map(|x| x.div(c, ctx)).collect()
}

/// Computes `acc + c * v` entrywise.
pub fn scalar_addmul<N: Number>(acc: &[N], v: &[N], c: &N, ctx: &N::Ctx) -> Vec<N> {
    assert_same_len!(acc, v);
    acc.iter().zip(v).map(|(a, x)| a.addmul(x, c, ctx)).collect()
}

/// Multiplies every entry by `2^e`.
pub fn scalar_mul_2exp<N: Number>(v: &[N], e: i64) -> Vec<N> {
    v.iter().map(|x| x.mul_2exp(e)).collect()
}

/// Computes the dot product of `a` and `b`.
///
/// The sum is accumulated with `addmul` into an exact zero, so each
/// term is rounded once. An empty dot product is exactly zero.
pub fn dot<N: Number>(a: &[N], b: &[N], ctx: &N::Ctx) -> N {
    assert_same_len!(a, b);
    a.iter()
        .zip(b)
        .fold(N::default(), |acc, (x, y)| acc.addmul(x, y, ctx))
}

/// Computes the squared Euclidean norm `sum(v_i^2)`.
///
/// For complex entries this is the bilinear `sum(v_i * v_i)`, not the
/// Hermitian norm.
pub fn norm<N: Number>(v: &[N], ctx: &N::Ctx) -> N {
    dot(v, v, ctx)
}

/// Inflates the radius of each entry by the matching entry of `err`.
pub fn add_error_mag_vec<N: Number>(v: &mut [N], err: &[Mag]) {
    assert_same_len!(v, err);
    for (x, e) in v.iter_mut().zip(err) {
        x.add_error_mag(e);
    }
}

/// Returns `[1, x, x^2, ..., x^(n-1)]`.
///
/// Even powers are computed by squaring and odd powers by one
/// multiplication, keeping the error growth logarithmic in `n`.
pub fn set_powers<N: Number>(x: &N, n: usize, ctx: &N::Ctx) -> Vec<N> {
    let mut powers: Vec<N> = Vec::with_capacity(n);
    for i in 0..n {
        let p = match i {
            0 => N::one(),
            1 => x.clone(),
            _ if i % 2 == 0 => powers[i / 2].mul(&powers[i / 2], ctx),
            _ => powers[i - 1].mul(x, ctx),
        };
        powers.push(p);
    }
    powers
}

/// Returns an upper bound for the absolute value of every entry.
pub fn mag_bound<N: Number>(v: &[N]) -> Mag {
    v.iter().map(|x| x.mag_bound()).max().unwrap_or_default()
}

/// Returns an upper bound for the absolute value of every entry,
/// rounded up to the precision of `ctx`.
pub fn abs_ubound(v: &[Ball], ctx: &BallContext) -> Float {
    v.iter()
        .map(|x| x.get_abs_ubound(ctx))
        .fold(Float::new(ctx.prec()), |acc, b| {
            if acc.is_nan() {
                acc
            } else if b.is_nan() {
                b
            } else {
                acc.max(&b)
            }
        })
}

/// Returns the largest number of midpoint bits among the entries.
pub fn bits(v: &[Ball]) -> u32 {
    v.iter().map(|x| x.bits()).max().unwrap_or(0)
}

/// Trims every entry, discarding insignificant midpoint bits.
pub fn trim(v: &[Ball]) -> Vec<Ball> {
    v.iter().map(|x| x.trim()).collect()
}
