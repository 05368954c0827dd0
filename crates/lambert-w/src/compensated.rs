//! Double-double arithmetic for the final rounding correction.
//!
//! A [`Double`] is the unevaluated sum `hi + lo` of two doubles with
//! `|lo| <= ulp(hi) / 2`, carrying about 106 significant bits. Sums and
//! products are built on the error-free transformations [`two_sum`] and
//! [`two_prod`].

use std::{
    f64::consts::LN_2,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// `ln 2 - LN_2`, the low-order part of `ln 2`.
const LN_2_LO: f64 = 2.319_046_813_846_299_6e-17;

/// Taylor terms of `e^r` for `|r| <= ln(2) / 2`.
const EXP_TERMS: u32 = 27;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Double {
    hi: f64,
    lo: f64,
}

impl Double {
    pub(crate) const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// Rounds to the nearest double.
    pub(crate) fn to_f64(self) -> f64 {
        self.hi + self.lo
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }
}

/// Returns `a + b` exactly.
fn two_sum(a: f64, b: f64) -> Double {
    let hi = a + b;
    let b_virtual = hi - a;
    let lo = (a - (hi - b_virtual)) + (b - b_virtual);
    Double { hi, lo }
}

/// Returns `a + b` exactly, given `|a| >= |b|`.
fn quick_two_sum(a: f64, b: f64) -> Double {
    let hi = a + b;
    Double {
        hi,
        lo: b - (hi - a),
    }
}

/// Returns `a·b` exactly.
fn two_prod(a: f64, b: f64) -> Double {
    let hi = a * b;
    Double {
        hi,
        lo: a.mul_add(b, -hi),
    }
}

impl Neg for Double {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add for Double {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let high = two_sum(self.hi, rhs.hi);
        let low = two_sum(self.lo, rhs.lo);
        let sum = quick_two_sum(high.hi, high.lo + low.hi);
        quick_two_sum(sum.hi, sum.lo + low.lo)
    }
}

impl Sub for Double {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul for Double {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let product = two_prod(self.hi, rhs.hi);
        quick_two_sum(
            product.hi,
            product.lo + (self.hi * rhs.lo + self.lo * rhs.hi),
        )
    }
}

impl Mul<f64> for Double {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        let product = two_prod(self.hi, rhs);
        quick_two_sum(product.hi, product.lo + self.lo * rhs)
    }
}

impl Div<f64> for Double {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        let first = self.hi / rhs;
        let product = two_prod(first, rhs);
        let remainder = two_sum(self.hi, -product.hi);
        let second = (remainder.hi + (remainder.lo - product.lo + self.lo)) / rhs;
        quick_two_sum(first, second)
    }
}

/// Returns `(k, m)` with `e^v = 2^k · m` and `m` within `[1/√2, √2]`.
///
/// `v` must be finite with `|v| < 1500`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn exp_scaled(v: f64) -> (i32, Double) {
    let k = (v / LN_2).round();
    let reduction = two_prod(k, LN_2);
    let r = two_sum(v, -reduction.hi) - Double::from(reduction.lo) - two_prod(k, LN_2_LO);

    let m = (1..=EXP_TERMS)
        .rev()
        .fold(Double::ONE, |acc, n| Double::ONE + r * acc / f64::from(n));

    (k as i32, m)
}

/// Returns `x · 2^k` for `|k| <= 2044`, exact unless the result is subnormal.
pub(crate) fn scale_by_pow2(x: f64, k: i32) -> f64 {
    let half = k / 2;
    x * pow2(half) * pow2(k - half)
}

/// Returns `2^n` for a normal exponent `n`.
#[allow(clippy::cast_sign_loss)]
fn pow2(n: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&n));
    f64::from_bits(((n + 1023) as u64) << 52)
}
