use std::cmp::Ordering;

use ball_arith::{ops::Round, *};
use num_bigint::BigInt;
use rug::{Float, Rational};

fn ball(mid: f64, rad: f64) -> Ball {
    Ball::from_mid_rad(Float::with_val(53, mid), Mag::from_f64(rad))
}

fn rad_rat(x: &Ball) -> Rational {
    x.rad().to_rational().expect("finite radius")
}

// Whether `p` lies in `x`, for points whose offset from the midpoint
// is exact at 64 bits. Stays clear of rationals near the exponent limits.
fn reaches(x: &Ball, p: &Float) -> bool {
    let d = Float::with_val(64, p - x.mid());
    x.rad().cmp_abs_float(&d) != Ordering::Less
}

#[test]
fn constructors() {
    assert!(Ball::zero().is_zero(), "zero");
    assert!(Ball::one().is_one(), "one");
    assert!(Ball::from(7).is_int(), "7 is an exact integer");
    assert!(!Ball::from(0.5).is_int(), "0.5 is not an integer");
    assert!(Ball::from(f64::NAN).is_indeterminate(), "NaN converts to indeterminate");
    assert!(!Ball::pos_inf().is_finite(), "+inf is not finite");
    assert!(Ball::neg_inf().is_exact(), "-inf is exact");
    assert!(Ball::zero_pm_inf().contains_i64(i64::MAX), "0 +/- inf is everything");
    assert_eq!(Ball::default(), Ball::zero(), "default is zero");
    assert_eq!(Ball::indeterminate(), Ball::indeterminate(), "indeterminate equals itself");

    let x = Ball::from_mid_rad(Float::with_val(53, f64::NAN), Mag::zero());
    assert!(x.is_indeterminate() && x.rad().is_inf(), "NaN midpoint forces an infinite radius");

    let (mid, rad) = ball(1.5, 0.25).into_parts();
    assert_eq!(mid, 1.5);
    assert_eq!(rad, Mag::from_f64(0.25));
}

#[test]
fn rounded_constructors() {
    let ctx = BallContext::new(53);

    let third = Ball::from_ratio(&BigInt::from(1), &BigInt::from(3), &ctx);
    assert!(third.contains_rational(&Rational::from((1, 3))), "1/3 enclosure: {}", third);
    assert!(!third.is_exact(), "1/3 is not a binary fraction");

    let bad = Ball::from_ratio(&BigInt::from(1), &BigInt::from(0), &ctx);
    assert!(bad.is_indeterminate(), "zero denominator");

    let n = (BigInt::from(1) << 100) + 1;
    let x = Ball::from_bigint(&n, &ctx);
    let exact = Rational::from(rug::Integer::from(rug::Integer::u_pow_u(2, 100)) + 1);
    assert!(x.contains_rational(&exact), "2^100 + 1 at 53 bits: {}", x);
    assert!(!x.is_exact(), "2^100 + 1 needs 101 bits");

    let y = Ball::from_mantissa_exp(&BigInt::from(3), -2, &ctx);
    assert_eq!(y, Ball::from(0.75), "3 * 2^-2");

    let z = Ball::from_rational(&Rational::from((5, 4)), &ctx);
    assert_eq!(z, Ball::from(1.25), "5/4 is exact");

    let i = Ball::from(rug::Integer::from(-12345));
    assert_eq!(i, Ball::from(-12345), "integer conversion");
}

#[test]
fn interval_constructor() {
    let ctx = BallContext::new(53);
    let a = Float::with_val(53, 1);
    let b = Float::with_val(53, 2);
    let x = Ball::from_interval(&a, &b, &ctx);
    assert!(x.contains_float(&a) && x.contains_float(&b), "endpoints of [1, 2]: {}", x);
    assert!(x.contains_rational(&Rational::from((3, 2))), "midpoint of [1, 2]");
    assert!(Ball::from_interval(&b, &a, &ctx).is_indeterminate(), "reversed interval");

    // the midpoint is rounded to very few bits, the radius compensates
    let ctx = BallContext::new(2);
    let a = Float::with_val(53, 1.125);
    let b = Float::with_val(53, 1.375);
    let x = Ball::from_interval(&a, &b, &ctx);
    assert!(x.contains_float(&a) && x.contains_float(&b), "endpoints at 2 bits: {}", x);
}

// Dividing by a ball that contains zero is indeterminate at any precision.
#[test]
fn div_by_zero_ball() {
    for prec in [2, 53, 200] {
        let ctx = BallContext::new(prec);
        let x = ball(1.0, 0.0);
        let y = ball(0.0, 0.5);
        assert!(x.div(&y, &ctx).is_indeterminate(), "1 / (0 +/- 0.5) at {} bits", prec);
        assert!(y.inv(&ctx).is_indeterminate(), "1 / (0 +/- 0.5) at {} bits", prec);
    }

    let ctx = BallContext::default();
    assert!(Ball::one().div(&Ball::zero(), &ctx).is_indeterminate(), "1 / 0");
    assert!(Ball::one().div_i64(0, &ctx).is_indeterminate(), "1 / 0 (i64)");
}

// First-order error propagation through squaring.
#[test]
fn square_propagates_error() {
    let ctx = BallContext::new(53);
    let x = ball(2.0, 0.01);
    for y in [x.sqr(&ctx), x.mul(&x, &ctx)] {
        assert!(y.contains_i64(4), "(2 +/- 0.01)^2 must contain 4: {}", y);
        assert!(rad_rat(&y) >= Rational::from((4, 100)), "radius below 2 * 2 * 0.01: {}", y);
    }
}

#[test]
fn exact_arithmetic() {
    let ctx = BallContext::new(53);
    let a = Ball::from(3);
    let b = Ball::from(4);
    assert_eq!(a.add(&b, &ctx), Ball::from(7), "3 + 4");
    assert_eq!(a.sub(&b, &ctx), Ball::from(-1), "3 - 4");
    assert_eq!(a.mul(&b, &ctx), Ball::from(12), "3 * 4");
    assert_eq!(a.div(&b, &ctx), Ball::from(0.75), "3 / 4");
    assert_eq!(a.sqr(&ctx), Ball::from(9), "3^2");
    assert_eq!(Ball::from(10).addmul(&a, &b, &ctx), Ball::from(22), "10 + 3 * 4");
    assert_eq!(Ball::from(10).submul(&a, &b, &ctx), Ball::from(-2), "10 - 3 * 4");
    assert_eq!(a.add_i64(5, &ctx), Ball::from(8), "3 + 5");
    assert_eq!(a.mul_i64(-5, &ctx), Ball::from(-15), "3 * -5");
    assert_eq!(a.neg(), Ball::from(-3), "-3");
    assert_eq!(-&a, Ball::from(-3), "-3 (op)");
    assert_eq!(Ball::from(-3).abs(), a, "|-3|");
    assert_eq!(a.mul_2exp(-1), Ball::from(1.5), "3 / 2");
    assert_eq!(a.pow_ui(4, &ctx), Ball::from(81), "3^4");
    assert_eq!(Ball::from(2).pow_si(-2, &ctx), Ball::from(0.25), "2^-2");
    assert_eq!(a.pow_ui(0, &ctx), Ball::one(), "3^0");

    for r in [a.add(&b, &ctx), a.mul(&b, &ctx), a.pow_ui(4, &ctx)] {
        assert!(r.is_exact(), "exact operands yield an exact result: {}", r);
    }
}

#[test]
fn rounding_error_is_counted() {
    for rm in [
        RoundingMode::NearestEven,
        RoundingMode::ToPositive,
        RoundingMode::ToNegative,
        RoundingMode::ToZero,
        RoundingMode::AwayZero,
    ] {
        let ctx = BallContext::new(24).rounding_mode(rm);
        let x = Ball::one().div(&Ball::from(3), &ctx);
        assert!(x.contains_rational(&Rational::from((1, 3))), "1/3 under {:?}: {}", rm, x);
        assert!(!x.is_exact(), "1/3 under {:?} must carry an error", rm);

        let y = Ball::from(1 << 30).add(&Ball::one(), &ctx);
        assert!(y.contains_i64((1 << 30) + 1), "2^30 + 1 at 24 bits under {:?}", rm);
    }

    let ctx = BallContext::new(53);
    let x = Ball::from(0.1).set_round(&BallContext::new(10));
    assert!(x.contains_float(&Float::with_val(53, 0.1)), "rounded 0.1: {}", x);
    assert!(x.round(&ctx).contains(&x), "re-rounding at a higher precision is exact");
}

const MODES: [RoundingMode; 5] = [
    RoundingMode::NearestEven,
    RoundingMode::ToPositive,
    RoundingMode::ToNegative,
    RoundingMode::ToZero,
    RoundingMode::AwayZero,
];

#[test]
fn overflow_gives_infinite_radius() {
    for rm in MODES {
        let ctx = BallContext::new(53).rounding_mode(rm);
        let mut big = Float::with_val(53, 1);
        big <<= rug::float::exp_max() - 2;
        let huge = Ball::from(big);
        assert!(huge.is_finite(), "2^(emax - 2) is finite");

        // the midpoint is clamped to the largest float when rounding towards zero
        for y in [huge.mul(&huge, &ctx), huge.neg().mul(&huge, &ctx), huge.sqr(&ctx)] {
            assert!(!y.is_finite(), "{:?}: overflowed product must not be finite: {}", rm, y);
            assert!(y.rad().is_inf(), "{:?}: overflowed product has an unbounded error", rm);
        }

        let s = huge.add(&huge, &ctx).add(&huge, &ctx).add(&huge, &ctx);
        assert!(s.rad().is_inf(), "{:?}: overflowed sum has an unbounded error: {}", rm, s);
    }

    let huge = Ball::from(0.75).mul_2exp(rug::float::exp_max() as i64);
    assert!(huge.is_finite(), "0.75 * 2^emax is finite");
    let z = huge.mul_2exp(1);
    assert!(!z.is_finite() && z.rad().is_inf(), "shift past emax: {}", z);
    let z = huge.mul_2exp(i64::MAX);
    assert!(z.rad().is_inf(), "overflowed shift has an unbounded error");
}

#[test]
fn underflow_keeps_the_exact_value() {
    // 2^(emin - 1) is the smallest positive float
    let mut small = Float::with_val(53, 1);
    small <<= rug::float::exp_min() - 1;
    let tiny = Ball::from(small.clone());
    assert!(tiny.is_positive(), "2^(emin - 1) is positive");

    for rm in MODES {
        let ctx = BallContext::new(53).rounding_mode(rm);
        // the exact square 2^(2 emin - 2) lies strictly between 0 and 2^(emin - 1)
        for y in [tiny.mul(&tiny, &ctx), tiny.sqr(&ctx), tiny.div_i64(3, &ctx)] {
            assert!(!y.is_exact(), "{:?}: underflow is inexact: {}", rm, y);
            assert!(y.contains_zero(), "{:?}: underflowed result must reach 0: {}", rm, y);
            assert!(reaches(&y, &small), "{:?}: underflowed result must reach 2^(emin - 1): {}", rm, y);
        }

        let y = tiny.neg().mul(&tiny, &ctx);
        assert!(y.contains_zero(), "{:?}: negative underflow must reach 0: {}", rm, y);
        assert!(reaches(&y, &-small.clone()), "{:?}: negative underflow: {}", rm, y);
    }

    let z = tiny.mul_2exp(-10);
    assert!(z.mid().is_zero() && !z.is_exact(), "shift below emin flushes to zero: {}", z);
    assert!(reaches(&z, &small), "flushed shift still reaches 2^(emin - 1)");
    let z = tiny.neg().mul_2exp(i64::MIN);
    assert!(z.contains_zero() && !z.rad().is_inf(), "shift underflow stays bounded: {}", z);

    // shifting back and forth inside the range is exact
    let w = tiny.mul_2exp(100).mul_2exp(-100);
    assert_eq!(w, tiny, "exact round trip above emin");
}

#[test]
fn huge_radius_comparisons() {
    // radii whose exponent leaves the `i32` range have no rational value
    let wide = Ball::from_mid_rad(Float::with_val(53, 1), Mag::pow2(1 << 40));
    let narrow = Ball::from_mid_rad(Float::with_val(53, 1), Mag::pow2(-(1 << 40)));
    let five = Ball::from(5);

    assert!(wide.contains(&five), "wide ball contains 5");
    assert!(!five.contains(&wide), "5 does not contain the wide ball");
    assert!(wide.overlaps(&five) && five.overlaps(&wide), "wide ball overlaps 5");
    assert!(wide.contains_i64(-1_000_000), "wide ball contains -10^6");
    assert!(wide.contains(&narrow), "wide ball contains the narrow one");

    assert!(narrow.contains_i64(1), "narrow ball contains its midpoint");
    assert!(!narrow.contains_i64(5), "narrow ball excludes 5");
    assert!(!narrow.overlaps(&five), "narrow ball is disjoint from 5");
    assert!(!narrow.contains(&wide), "narrow ball does not contain the wide one");
    assert!(narrow.contains(&Ball::one()), "narrow ball contains 1");
}

#[test]
fn indeterminate_absorbs() {
    let ctx = BallContext::new(53);
    let nan = Ball::indeterminate();
    let x = ball(1.5, 0.25);
    let zero = Ball::zero();

    let results = [
        nan.add(&x, &ctx),
        x.sub(&nan, &ctx),
        nan.mul(&zero, &ctx),
        zero.mul(&nan, &ctx),
        x.div(&nan, &ctx),
        nan.div(&x, &ctx),
        zero.addmul(&nan, &zero, &ctx),
        nan.sqr(&ctx),
        nan.sqrt(&ctx),
        nan.exp(&ctx),
        nan.log(&ctx),
        nan.sin(&ctx),
        nan.cos(&ctx),
        nan.atan(&ctx),
        nan.pow_ui(3, &ctx),
        nan.pow_ui(0, &ctx),
        nan.pow_si(0, &ctx),
        nan.pow_si(-2, &ctx),
        nan.mul_2exp(3),
        nan.set_round(&ctx),
        nan.union(&x, &ctx),
    ];

    for (i, r) in results.iter().enumerate() {
        assert!(r.is_indeterminate(), "operation {} did not absorb: {}", i, r);
    }
}

#[test]
fn square_roots() {
    let ctx = BallContext::new(53);
    assert_eq!(Ball::from(4).sqrt(&ctx), Ball::from(2), "sqrt(4)");
    assert_eq!(Ball::zero().sqrt(&ctx), Ball::zero(), "sqrt(0)");

    let s = Ball::from(2).sqrt(&ctx);
    assert!(s.sqr(&ctx).contains_i64(2), "sqrt(2)^2 must contain 2: {}", s);

    let s = ball(2.0, 0.5).sqrt(&ctx);
    let mut lo = Float::with_val(53, 1.5).sqrt();
    let mut hi = Float::with_val(53, 2.5).sqrt();
    lo.next_up();
    hi.next_down();
    assert!(s.contains_float(&lo), "sqrt(1.5) in {}", s);
    assert!(s.contains_float(&hi), "sqrt(2.5) in {}", s);

    // straddling zero clamps the lower endpoint
    let s = ball(0.0, 1.0).sqrt(&ctx);
    assert!(s.contains_i64(0) && s.contains_i64(1), "sqrt([-1, 1]) covers [0, 1]: {}", s);

    let s = ball(-1.0, 1.5).sqrt(&ctx);
    assert!(s.contains_i64(0), "sqrt([-2.5, 0.5]) covers 0: {}", s);

    assert!(Ball::from(-4).sqrt(&ctx).is_indeterminate(), "sqrt(-4)");
    assert!(ball(-5.0, 1.0).sqrt(&ctx).is_indeterminate(), "sqrt([-6, -4])");
}

#[test]
fn transcendental_functions() {
    let ctx = BallContext::new(64);
    assert_eq!(Ball::zero().exp(&ctx), Ball::one(), "exp(0)");
    assert_eq!(Ball::one().log(&ctx), Ball::zero(), "log(1)");
    assert_eq!(Ball::zero().sin(&ctx), Ball::zero(), "sin(0)");
    assert_eq!(Ball::zero().cos(&ctx), Ball::one(), "cos(0)");
    assert_eq!(Ball::zero().atan(&ctx), Ball::zero(), "atan(0)");

    let x = ball(0.75, 1.0 / 1024.0);
    let y = x.exp(&ctx).log(&ctx);
    assert!(y.contains(&x), "log(exp(x)) must contain x: {} vs {}", y, x);

    let x = Ball::from(0.5);
    let s = x.sin(&ctx);
    let c = x.cos(&ctx);
    let one = s.sqr(&ctx).add(&c.sqr(&ctx), &ctx);
    assert!(one.contains_i64(1), "sin^2 + cos^2 = 1: {}", one);

    let pi = Ball::one().atan(&ctx).mul_2exp(2);
    assert!(pi.overlaps(&consts::const_pi(&ctx)), "4 atan(1) = pi: {}", pi);

    let wide = ball(0.0, 100.0);
    assert!(wide.sin(&ctx).contains_i64(1), "sin of a wide ball");

    assert!(Ball::from(-1).log(&ctx).is_indeterminate(), "log(-1)");
    assert!(ball(0.5, 1.0).log(&ctx).is_indeterminate(), "log([-0.5, 1.5])");
}

#[test]
fn error_inflation() {
    let mut x = Ball::from(1);
    x.add_error_2exp(-3);
    assert!(rad_rat(&x) >= Rational::from((1, 8)), "2^-3 error");
    x.add_error(&Mag::from_u64(1));
    assert!(x.contains_rational(&Rational::from((17, 8))), "1 +/- 1.125 contains 17/8");
    x.add_error_float(&Float::with_val(53, -0.5));
    assert!(x.contains_rational(&Rational::from((-5, 8))), "1 +/- 1.625 contains -5/8");
    x.add_error_ball(&ball(-1.0, 1.0));
    assert!(x.contains_i64(-2), "1 +/- 3.625 contains -2");

    let mut y = Ball::from(2);
    y.set_rad(Mag::one());
    y.set_mid(Float::with_val(53, 5));
    assert_eq!(y, ball(5.0, 1.0));
    assert_eq!(y.get_mid(), Ball::from(5));
}

// A truncated series plus a remainder bound computed with magnitudes
// encloses the exact sum.
#[test]
fn geometric_remainder_bound() {
    let ctx = BallContext::new(30);
    let n = 12;

    // sum_{k < n} 2^-k, each term rounded at 30 bits
    let half = Ball::from(0.5);
    let mut sum = Ball::zero();
    let mut term = Ball::one();
    for _ in 0..n {
        sum = sum.add(&term, &ctx);
        term = term.mul(&half, &ctx);
    }

    // sum_{k >= n} x^k <= x^n / (1 - x)
    let x = Mag::pow2(-1);
    let tail = x.pow_ui(n).div(&Mag::one().sub_lower(&x));
    sum.add_error(&tail);
    assert!(sum.contains_i64(2), "geometric series with tail bound: {}", sum);
}

#[test]
fn bounds() {
    let ctx = BallContext::new(53);
    let x = ball(-2.5, 1.0);
    assert_eq!(x.lower(&ctx), -3.5);
    assert_eq!(x.upper(&ctx), -1.5);
    assert_eq!(x.get_abs_ubound(&ctx), 3.5);
    assert_eq!(x.get_abs_lbound(&ctx), 1.5);
    assert_eq!(x.lower_i64(), Some(-4));
    assert_eq!(x.get_mag().to_f64(), 3.5);
    assert_eq!(x.get_mag_lower().to_f64(), 1.5);

    let y = ball(0.5, 1.0);
    assert!(y.get_mag_lower().is_zero(), "a ball containing zero has no lower bound");
    assert_eq!(y.get_abs_lbound(&ctx), 0);
    assert_eq!(Ball::pos_inf().lower_i64(), None);

    let u = x.union(&ball(3.0, 0.5), &ctx);
    assert!(u.contains(&x), "union contains the first operand: {}", u);
    assert!(u.contains(&ball(3.0, 0.5)), "union contains the second operand: {}", u);
}

#[test]
fn precision_diagnostics() {
    assert_eq!(Ball::from(3).rel_error_bits(), -PREC_EXACT, "exact ball");
    assert_eq!(Ball::indeterminate().rel_error_bits(), PREC_EXACT, "indeterminate ball");
    assert_eq!(Ball::zero_pm_inf().rel_error_bits(), PREC_EXACT, "infinite radius");
    assert_eq!(ball(0.0, 1.0).rel_error_bits(), PREC_EXACT, "zero midpoint");

    let x = Ball::from_mid_rad(Float::with_val(53, 1), Mag::pow2(-10));
    assert_eq!(x.rel_error_bits(), -9, "1 +/- 2^-10");
    assert_eq!(x.rel_accuracy_bits(), 9, "1 +/- 2^-10");

    let ctx = BallContext::new(128);
    let third = Ball::one().div(&Ball::from(3), &ctx);
    assert!(third.rel_accuracy_bits() >= 120, "1/3 at 128 bits: {}", third.rel_accuracy_bits());
    assert!(third.bits() > 100, "1/3 uses the full precision");

    let mut wide = third.clone();
    wide.add_error_2exp(-20);
    let trimmed = wide.trim();
    assert!(trimmed.bits() < 30, "trim drops insignificant bits: {}", trimmed.bits());
    assert!(trimmed.contains(&wide), "trim keeps the enclosure");
}

#[test]
fn context() {
    let ctx = BallContext::default();
    assert_eq!(ctx.prec(), 53);
    assert_eq!(ctx.rm(), RoundingMode::NearestEven);
    assert_eq!(ctx.guarded(10).prec(), 63);
    assert_eq!(ctx.with_prec(100).prec(), 100);
    assert_eq!(RoundingMode::ToPositive.opposite(), RoundingMode::ToNegative);
    assert!(RoundingMode::NearestEven.is_nearest());
}

#[test]
#[should_panic]
fn invalid_precision() {
    let _ = BallContext::new(1);
}
