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

use num_traits::ToPrimitive;

use crate::{
    geometry::util::EPS,
    operations::{Abs, One, Zero},
};

use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Field-like number type the line algebra is generic over.
///
/// The near-zero test lives in [`Zero::is_zero`]; `tolerance` reports the
/// threshold it uses (zero for exact types).
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + Abs
    + ToPrimitive
    + From<i32>
{
    fn tolerance() -> Self;

    fn from_num_den(num: i32, den: i32) -> Self;

    /// Near-zero test against a caller supplied threshold instead of
    /// [`Scalar::tolerance`].
    fn near_zero_within(&self, tol: &Self) -> bool {
        self.abs() <= *tol
    }
}

impl Scalar for f64 {
    fn tolerance() -> Self {
        EPS
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }
}
