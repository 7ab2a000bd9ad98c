// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::ToPrimitive;
use rug::Rational;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

/// Arbitrary precision rational scalar.
///
/// Its tolerance is exactly zero, so every predicate evaluated over `Exact`
/// is an exact algebraic test. Division by zero panics inside `rug`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exact(pub Rational);

impl Exact {
    /// Exact value of a finite `f64`; `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Rational::from_f64(value).map(Exact)
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl Scalar for Exact {
    fn tolerance() -> Self {
        Exact::zero()
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        Exact(Rational::from((num, den)))
    }

    fn near_zero_within(&self, tol: &Self) -> bool {
        self.0.clone().abs() <= tol.0
    }
}

impl<'a, 'b> Add<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn add(self, rhs: &'b Exact) -> Exact {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        Exact(result)
    }
}

impl Add for Exact {
    type Output = Exact;
    fn add(mut self, rhs: Exact) -> Exact {
        self.0 += rhs.0;
        self
    }
}

impl<'a, 'b> Sub<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn sub(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result -= &rhs.0;
        Exact(result)
    }
}

impl Sub for Exact {
    type Output = Exact;
    fn sub(mut self, rhs: Exact) -> Exact {
        self.0 -= rhs.0;
        self
    }
}

impl<'a, 'b> Mul<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn mul(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result *= &rhs.0;
        Exact(result)
    }
}

impl Mul for Exact {
    type Output = Exact;
    fn mul(mut self, rhs: Exact) -> Exact {
        self.0 *= rhs.0;
        self
    }
}

impl<'a, 'b> Div<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn div(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result /= &rhs.0;
        Exact(result)
    }
}

impl Div for Exact {
    type Output = Exact;
    fn div(mut self, rhs: Exact) -> Exact {
        self.0 /= rhs.0;
        self
    }
}

impl Neg for Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl<'a> Neg for &'a Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact(-self.0.clone())
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Exact(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }
}

impl One for Exact {
    fn one() -> Self {
        Exact(Rational::from(1))
    }
}

impl Abs for Exact {
    fn abs(&self) -> Self {
        Exact(self.0.clone().abs())
    }
}

impl From<i32> for Exact {
    fn from(value: i32) -> Self {
        Exact(Rational::from(value))
    }
}

impl From<Rational> for Exact {
    fn from(value: Rational) -> Self {
        Exact(value)
    }
}

impl ToPrimitive for Exact {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().trunc().numer().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.clone().trunc().numer().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_exact() {
        let third = Exact::from_num_den(1, 3);
        let sum = &(&third + &third) + &third;
        assert_eq!(sum, Exact::one());
        assert!((&sum - &Exact::one()).is_zero());
    }

    #[test]
    fn zero_tolerance() {
        let tiny = Exact::from_num_den(1, 1_000_000_000);
        assert!(!tiny.is_zero());
        assert!(tiny.is_positive());
        assert!(!(-tiny).is_positive());
        assert!(Exact::tolerance().is_zero());
    }

    #[test]
    fn conversions() {
        assert_eq!(Exact::from_f64(0.5), Some(Exact::from_num_den(1, 2)));
        assert_eq!(Exact::from_f64(f64::NAN), None);
        assert_eq!(Exact::from_num_den(7, 2).to_i64(), Some(3));
        assert_eq!(Exact::from_num_den(-7, 2).to_i64(), Some(-3));
        assert_eq!(Exact::from(3).to_string(), "3");
    }
}
