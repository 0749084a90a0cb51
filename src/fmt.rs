/*
    Formatting
*/

use std::fmt;

use rug::{float::Round as Rnd, Float};

use crate::{Acb, Ball, Mag};

/// Number of significant digits used when printing a radius.
pub const RAD_DIGITS: usize = 5;

// Formats a float as `d.ddd` or `d.ddde<exp>`, using at most `digits`
// significant digits (or as many as needed when `None`).
fn fmt_float(x: &Float, digits: Option<usize>, rnd: Rnd) -> String {
    if x.is_nan() {
        return String::from("nan");
    }

    if x.is_infinite() {
        return String::from(if x.is_sign_negative() { "-inf" } else { "inf" });
    }

    if x.is_zero() {
        return String::from("0");
    }

    let (neg, s, exp) = x.to_sign_string_exp_round(10, digits, rnd);
    let s = s.trim_end_matches('0');
    let (lead, rest) = s.split_at(1);

    let mut out = String::new();
    if neg {
        out.push('-');
    }
    out.push_str(lead);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }

    // the string is `0.ddd * 10^exp`
    let e = exp.unwrap_or(1) - 1;
    if e != 0 {
        out.push_str(&format!("e{}", e));
    }
    out
}

impl Mag {
    /// Returns a decimal string for this `Mag` with `digits` significant
    /// digits, rounded up.
    pub fn to_string_digits(&self, digits: usize) -> String {
        if self.is_inf() {
            String::from("inf")
        } else {
            fmt_float(&self.to_float(), Some(digits.max(1)), Rnd::Up)
        }
    }
}

impl Ball {
    /// Returns a decimal string `mid +/- rad` with `digits`
    /// significant digits for the midpoint.
    pub fn to_string_digits(&self, digits: usize) -> String {
        format!(
            "{} +/- {}",
            fmt_float(self.mid(), Some(digits.max(1)), Rnd::Nearest),
            self.rad().to_string_digits(RAD_DIGITS)
        )
    }
}

impl fmt::Display for Mag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_digits(RAD_DIGITS))
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} +/- {}",
            fmt_float(self.mid(), None, Rnd::Nearest),
            self.rad()
        )
    }
}

impl fmt::Display for Acb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) + ({})*I", self.re(), self.im())
    }
}
