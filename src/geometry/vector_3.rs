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

use crate::numeric::scalar::Scalar;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub trait VectorOps<T, C>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn cross(&self, other: &Self) -> C;
    fn norm_squared(&self) -> T;
    fn scale(&self, s: &T) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
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

    pub fn zero() -> Self {
        Vector3 {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Every component passes the scalar near-zero test.
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<T> VectorOps<T, Vector3<T>> for Vector3<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    fn dot(&self, other: &Vector3<T>) -> T {
        &(&(&self.x * &other.x) + &(&self.y * &other.y)) + &(&self.z * &other.z)
    }

    fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: &(&self.y * &other.z) - &(&self.z * &other.y),
            y: &(&self.z * &other.x) - &(&self.x * &other.z),
            z: &(&self.x * &other.y) - &(&self.y * &other.x),
        }
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn scale(&self, s: &T) -> Self {
        Vector3 {
            x: &self.x * s,
            y: &self.y * s,
            z: &self.z * s,
        }
    }
}

impl<'a, 'b, T> Add<&'b Vector3<T>> for &'a Vector3<T>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Vector3<T>;
    fn add(self, rhs: &'b Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
            z: &self.z + &rhs.z,
        }
    }
}

impl<T> Add for Vector3<T>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Vector3<T>;
    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        &self + &rhs
    }
}

impl<'a, 'b, T> Sub<&'b Vector3<T>> for &'a Vector3<T>
where
    T: Scalar,
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Vector3<T>;
    fn sub(self, rhs: &'b Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

impl<T> Sub for Vector3<T>
where
    T: Scalar,
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Vector3<T>;
    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Vector3<T> {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
