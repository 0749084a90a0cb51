use ball_arith::*;
use rug::{Float, Rational};

fn ball(mid: f64, rad: f64) -> Ball {
    Ball::from_mid_rad(Float::with_val(53, mid), Mag::from_f64(rad))
}

#[test]
fn constructors() {
    assert!(Acb::zero().is_zero(), "zero");
    assert!(Acb::one().is_real(), "one is real");
    assert!(!Acb::i().is_real(), "i is not real");
    assert!(Acb::indeterminate().is_indeterminate(), "indeterminate");
    assert_eq!(Acb::from(3), Acb::new(Ball::from(3), Ball::zero()));
    assert_eq!(Acb::from((1, -2)).im(), &Ball::from(-2));

    let (re, im) = Acb::from((5, 6)).into_parts();
    assert_eq!(re, Ball::from(5));
    assert_eq!(im, Ball::from(6));
}

#[test]
fn exact_arithmetic() {
    let ctx = BallContext::new(53);
    let x = Acb::from((1, 2));
    let y = Acb::from((3, 4));

    assert_eq!(Acb::i().mul(&Acb::i(), &ctx), Acb::from(-1), "i * i");
    assert_eq!(x.add(&y, &ctx), Acb::from((4, 6)), "(1 + 2i) + (3 + 4i)");
    assert_eq!(x.sub(&y, &ctx), Acb::from((-2, -2)), "(1 + 2i) - (3 + 4i)");
    assert_eq!(x.mul(&y, &ctx), Acb::from((-5, 10)), "(1 + 2i)(3 + 4i)");
    assert_eq!(Acb::from((1, 1)).sqr(&ctx), Acb::from((0, 2)), "(1 + i)^2");
    assert_eq!(x.conj(), Acb::from((1, -2)), "conj(1 + 2i)");
    assert_eq!(x.neg(), Acb::from((-1, -2)), "-(1 + 2i)");
    assert_eq!(-&x, Acb::from((-1, -2)), "-(1 + 2i) (op)");
    assert_eq!(x.mul_onei(), Acb::from((-2, 1)), "i(1 + 2i)");
    assert_eq!(x.mul_2exp(1), Acb::from((2, 4)), "2(1 + 2i)");
    assert_eq!(x.mul_ball(&Ball::from(3), &ctx), Acb::from((3, 6)), "3(1 + 2i)");
    assert_eq!(Acb::from((4, 6)).div_ball(&Ball::from(2), &ctx), Acb::from((2, 3)));
    assert_eq!(x.pow_ui(2, &ctx), x.sqr(&ctx), "(1 + 2i)^2");
    assert_eq!(Acb::i().pow_ui(4, &ctx), Acb::one(), "i^4");
    assert_eq!(x.pow_ui(0, &ctx), Acb::one(), "(1 + 2i)^0");
    let half = Acb::new(Ball::indeterminate(), Ball::one());
    assert!(half.pow_ui(0, &ctx).is_indeterminate(), "indeterminate^0 stays indeterminate");
    assert!(Acb::indeterminate().pow_ui(5, &ctx).is_indeterminate(), "indeterminate^5");
    assert_eq!(
        Acb::from((1, 0)).addmul(&x, &y, &ctx),
        Acb::from((-4, 10)),
        "1 + (1 + 2i)(3 + 4i)"
    );
    assert_eq!(
        Acb::from((1, 0)).submul(&x, &y, &ctx),
        Acb::from((6, -10)),
        "1 - (1 + 2i)(3 + 4i)"
    );
    assert!(x.mul(&y, &ctx).is_exact(), "exact operands yield an exact product");
}

#[test]
fn division() {
    let ctx = BallContext::new(53);
    let q = Acb::from((-5, 10)).div(&Acb::from((3, 4)), &ctx);
    assert!(q.contains(&Acb::from((1, 2))), "(-5 + 10i) / (3 + 4i) = 1 + 2i: {}", q);

    let r = Acb::from((1, 1)).inv(&ctx);
    assert!(
        r.re().contains_rational(&Rational::from((1, 2)))
            && r.im().contains_rational(&Rational::from((-1, 2))),
        "1 / (1 + i): {}",
        r
    );

    let z = Acb::new(ball(0.0, 1.0), ball(0.0, 1.0));
    assert!(Acb::one().div(&z, &ctx).is_indeterminate(), "division by a box around zero");
    assert!(Acb::one().div(&Acb::zero(), &ctx).is_indeterminate(), "division by zero");
}

#[test]
fn exponential() {
    let ctx = BallContext::new(64);
    let ipi = Acb::new(Ball::zero(), consts::const_pi(&ctx));
    let e = ipi.exp(&ctx);
    assert!(e.re().contains_i64(-1), "re(exp(i pi)) = -1: {}", e);
    assert!(e.im().contains_zero(), "im(exp(i pi)) = 0: {}", e);

    assert_eq!(Acb::zero().exp(&ctx), Acb::one(), "exp(0)");
}

#[test]
fn magnitude_bounds() {
    let m = Acb::from((3, 4)).get_mag();
    let r = m.to_rational().unwrap();
    assert!(r >= 5, "|3 + 4i| >= 5");
    assert!(r <= Rational::from((5001, 1000)), "|3 + 4i| bound too loose");

    assert_eq!(Acb::from((0, -7)).get_mag(), Mag::from_u64(7), "purely imaginary");
    assert_eq!(Acb::from(-7).get_mag(), Mag::from_u64(7), "purely real");

    let mut z = Acb::from((1, 1));
    z.add_error_mag(&Mag::pow2(-4));
    assert!(!z.re().is_exact() && !z.im().is_exact(), "both parts inflated");
}

#[test]
fn predicates() {
    let z = Acb::new(ball(0.0, 1.0), ball(0.5, 1.0));
    assert!(z.contains_zero(), "box around zero");
    assert!(!Acb::from((0, 1)).contains_zero(), "i is not zero");
    assert!(z.contains(&Acb::from((0, 1))), "box contains i");
    assert!(z.overlaps(&Acb::new(ball(1.0, 0.0), ball(-0.5, 0.0))), "corner touches");
    assert!(!z.overlaps(&Acb::from((3, 0))), "far point");
    assert!(Acb::from((1, 2)).is_finite(), "finite");
}

#[test]
fn precision_diagnostics() {
    assert_eq!(Acb::from((1, 2)).rel_error_bits(), -PREC_EXACT, "exact");
    assert_eq!(Acb::indeterminate().rel_error_bits(), PREC_EXACT, "indeterminate");

    let z = Acb::new(
        Ball::from_mid_rad(Float::with_val(53, 1), Mag::pow2(-20)),
        Ball::from_mid_rad(Float::with_val(53, 3), Mag::pow2(-10)),
    );
    // largest radius < 2^-9 against largest midpoint < 2^2
    assert_eq!(z.rel_error_bits(), -10);
    assert_eq!(z.rel_accuracy_bits(), 10);
}

#[test]
fn display() {
    assert_eq!(Acb::from((1, 2)).to_string(), "(1 +/- 0) + (2 +/- 0)*I");
}
