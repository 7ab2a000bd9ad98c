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

use crate::{
    geometry::{point_4::Point4, vector_3::Vector3},
    numeric::scalar::Scalar,
};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn from_vals<V>(vals: [V; 3]) -> Self
    where
        V: Into<T>,
    {
        let [x, y, z] = vals.map(|v| v.into());
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Lifts the point into homogeneous space with unit weight.
    pub fn to_homogeneous(&self) -> Point4<T> {
        Point4::new(self.x.clone(), self.y.clone(), self.z.clone(), T::one())
    }

    pub fn as_vector(&self) -> Vector3<T> {
        Vector3::new(self.x.clone(), self.y.clone(), self.z.clone())
    }
}

impl<T> Point3<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T>,
{
    pub fn add_vector(&self, v: &Vector3<T>) -> Self {
        Point3 {
            x: &self.x + &v.x,
            y: &self.y + &v.y,
            z: &self.z + &v.z,
        }
    }

    pub fn vector_to(&self, other: &Self) -> Vector3<T> {
        Vector3 {
            x: &other.x - &self.x,
            y: &other.y - &self.y,
            z: &other.z - &self.z,
        }
    }

    /// Componentwise near-equality under the scalar's tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.vector_to(other).is_zero()
    }
}

impl<T: Scalar> From<Point3<T>> for Point4<T> {
    fn from(p: Point3<T>) -> Self {
        Point4::new(p.x, p.y, p.z, T::one())
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(coords: [T; 3]) -> Self {
        let [x, y, z] = coords;
        Point3 { x, y, z }
    }
}

impl<T: Scalar> From<Point3<T>> for [T; 3] {
    fn from(p: Point3<T>) -> Self {
        [p.x, p.y, p.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lift_has_unit_weight() {
        let p = Point3::<f64>::from_vals([1.0, 2.0, 3.0]);
        let h: Point4<f64> = p.clone().into();
        assert_eq!(h, Point4::from_vals([1.0, 2.0, 3.0, 1.0]));
        assert_eq!(p.to_homogeneous(), h);
    }

    #[test]
    fn vector_between_points() {
        let a = Point3::<f64>::from_vals([1.0, 1.0, 1.0]);
        let b = Point3::<f64>::from_vals([2.0, 3.0, 4.0]);
        let ab = a.vector_to(&b);
        assert_eq!(ab, Vector3::from_vals([1.0, 2.0, 3.0]));
        assert!(a.add_vector(&ab).approx_eq(&b));
    }
}
