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

use crate::{error::PluckerError, geometry::point_3::Point3, numeric::scalar::Scalar};
use std::ops::Div;

/// Point in homogeneous coordinates `(x, y, z, w)`. Points with `w == 0`
/// lie at infinity and have no Euclidean image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point4<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Point4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn from_vals<V>(vals: [V; 4]) -> Self
    where
        V: Into<T>,
    {
        let [x, y, z, w] = vals.map(|v| v.into());
        Self { x, y, z, w }
    }

    pub fn is_at_infinity(&self) -> bool {
        self.w.is_zero()
    }
}

impl<T> Point4<T>
where
    T: Scalar,
    for<'a> &'a T: Div<&'a T, Output = T>,
{
    /// Perspective division. `w` must be nonzero; with `f64` a zero weight
    /// gives infinite or NaN coordinates.
    pub fn normalize(&self) -> Point3<T> {
        Point3 {
            x: &self.x / &self.w,
            y: &self.y / &self.w,
            z: &self.z / &self.w,
        }
    }

    pub fn try_normalize(&self) -> Result<Point3<T>, PluckerError> {
        if self.is_at_infinity() {
            return Err(PluckerError::PointAtInfinity);
        }
        Ok(self.normalize())
    }
}

impl<T: Scalar> From<[T; 4]> for Point4<T> {
    fn from(coords: [T; 4]) -> Self {
        let [x, y, z, w] = coords;
        Point4 { x, y, z, w }
    }
}
