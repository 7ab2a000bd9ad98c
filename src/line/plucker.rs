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

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::{
    error::PluckerError,
    geometry::{Point3, Point4, Vector3, VectorOps},
    line::line_pass::LinePass,
    numeric::scalar::Scalar,
};

/// Plücker coordinates `(p01, p02, p03, p23, p31, p12)` of a directed line,
/// defined up to a positive scale factor.
///
/// Axis 0 is the homogeneous weight and axes 1, 2, 3 are `x, y, z`. The
/// first three components form the direction part `U`, the last three the
/// moment part `V`. For a line through `p` with direction `d`, `U = d` and
/// `V = d × p`.
///
/// Only coordinates on the Klein quadric (`U·V == 0`) describe real lines;
/// see [`Plucker::is_line`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plucker<T: Scalar> {
    pub(crate) coords: [T; 6],
}

impl<T: Scalar> Plucker<T> {
    pub fn new(p01: T, p02: T, p03: T, p23: T, p31: T, p12: T) -> Self {
        Plucker {
            coords: [p01, p02, p03, p23, p31, p12],
        }
    }

    pub fn from_vals<V>(vals: [V; 6]) -> Self
    where
        V: Into<T>,
    {
        Plucker {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn zero() -> Self {
        Plucker {
            coords: std::array::from_fn(|_| T::zero()),
        }
    }

    pub fn coords(&self) -> &[T; 6] {
        &self.coords
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.is_zero())
    }

    fn to_uv(&self) -> (Vector3<T>, Vector3<T>) {
        let [p01, p02, p03, p23, p31, p12] = self.coords.clone();
        (Vector3::new(p01, p02, p03), Vector3::new(p23, p31, p12))
    }

    /// Direction part `U = (p01, p02, p03)`.
    pub fn direction(&self) -> Vector3<T> {
        self.to_uv().0
    }

    /// Moment part `V = (p23, p31, p12)`.
    pub fn moment(&self) -> Vector3<T> {
        self.to_uv().1
    }

    /// Applies `f` to each of the six components.
    pub fn map<U, F>(self, f: F) -> Plucker<U>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        Plucker {
            coords: self.coords.map(f),
        }
    }

    /// The same line with the opposite orientation.
    pub fn reversed(self) -> Self {
        -self
    }
}

impl<T> Plucker<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// The line through `point` running along `direction`.
    pub fn from_point_direction(point: &Point3<T>, direction: &Vector3<T>) -> Self {
        let v = direction.cross(&point.as_vector());
        let u = direction.clone();
        Plucker::new(u.x, u.y, u.z, v.x, v.y, v.z)
    }

    /// `U_a·V_b + U_b·V_a`, the side product of two lines. Zero exactly
    /// when the lines are coplanar.
    fn side(&self, other: &Self) -> T {
        let (ua, va) = self.to_uv();
        let (ub, vb) = other.to_uv();
        &ua.dot(&vb) + &ub.dot(&va)
    }

    /// Symmetric bilinear form polar to the Klein quadric
    /// `Q(p) = p01 p23 + p02 p31 + p03 p12`, so that `bilinear(p, p) == Q(p)`.
    ///
    /// This is half the unnormalized pairing `a01 b23 + a23 b01 + …`, so
    /// [`Plucker::squared_error`] is `Q(p)` rather than `2 Q(p)`.
    pub fn bilinear(&self, other: &Self) -> T {
        &self.side(other) / &T::from(2)
    }

    pub fn squared_error(&self) -> T {
        self.bilinear(self)
    }

    /// `bilinear(p, p)` vanishes for a nonzero `p`: an isotropic vector of
    /// the quadric.
    pub fn isotropic(&self) -> bool {
        !self.is_zero() && self.on_quadric(self.bilinear(self))
    }

    /// `U·V` vanishes for a nonzero `p`, i.e. the coordinate lies on the
    /// Klein quadric. Always agrees with [`Plucker::isotropic`].
    pub fn is_line(&self) -> bool {
        let (u, v) = self.to_uv();
        !self.is_zero() && self.on_quadric(u.dot(&v))
    }

    /// `|q| <= tol·|U|·|V|`, compared squared. The bound follows the size of
    /// the coordinate, since rounding in `U·V` grows with `|U|·|V|`.
    fn on_quadric(&self, q: T) -> bool {
        let (u, v) = self.to_uv();
        let tol = T::tolerance();
        let bound = &(&tol * &tol) * &(&u.norm_squared() * &v.norm_squared());
        (&q * &q).near_zero_within(&bound)
    }

    pub fn has_direction(&self) -> bool {
        !self.direction().is_zero()
    }

    pub fn parallel(&self, other: &Self) -> bool {
        self.direction().cross(&other.direction()).is_zero()
    }

    /// Classifies how `other` passes `self` when sighted along `self`.
    ///
    /// The side product is symmetric, so swapping the arguments keeps the
    /// result; reversing either line swaps the two handed variants.
    pub fn passes(&self, other: &Self) -> LinePass {
        let s = self.side(other);
        if s.is_zero() {
            LinePass::Coplanar
        } else if s.is_positive() {
            LinePass::Counterclockwise
        } else {
            LinePass::Clockwise
        }
    }

    /// The lines meet in exactly one point. Parallel lines never intersect,
    /// even when coplanar.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.parallel(other) && self.passes(other) == LinePass::Coplanar
    }

    /// Both coordinates are nonzero multiples of each other.
    pub fn coincides_unoriented(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return false;
        }
        for i in 0..6 {
            for j in (i + 1)..6 {
                let minor = &(&self.coords[i] * &other.coords[j])
                    - &(&self.coords[j] * &other.coords[i]);
                if !minor.is_zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Same line and same orientation: a positive multiple.
    pub fn coincides(&self, other: &Self) -> bool {
        if !self.coincides_unoriented(other) {
            return false;
        }
        let mut dot = T::zero();
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            dot = &dot + &(a * b);
        }
        dot > T::zero()
    }

    /// Squared distance from the origin to the line, `V·V / U·U`.
    ///
    /// The direction part must be nonzero. For `f64` a zero direction
    /// yields infinity or NaN; exact scalars panic on the division.
    pub fn quadrance_to_origin(&self) -> T {
        let (u, v) = self.to_uv();
        &v.norm_squared() / &u.norm_squared()
    }

    /// Point of the line nearest to the origin: the homogeneous point
    /// `(V × U, U·U)` after perspective division. Same precondition as
    /// [`Plucker::quadrance_to_origin`].
    pub fn closest_to_origin(&self) -> Point3<T> {
        let (u, v) = self.to_uv();
        let c = v.cross(&u);
        Point4::new(c.x, c.y, c.z, u.norm_squared()).normalize()
    }

    pub fn try_quadrance_to_origin(&self) -> Result<T, PluckerError> {
        self.check_direction()?;
        Ok(self.quadrance_to_origin())
    }

    pub fn try_closest_to_origin(&self) -> Result<Point3<T>, PluckerError> {
        self.check_direction()?;
        Ok(self.closest_to_origin())
    }

    fn check_direction(&self) -> Result<(), PluckerError> {
        if self.has_direction() {
            Ok(())
        } else {
            log::debug!("origin query on a coordinate without direction: {:?}", self);
            Err(PluckerError::NoDirection)
        }
    }
}

fn minor<T>(a: &T, b: &T, c: &T, d: &T) -> T
where
    T: Scalar,
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    &(a * b) - &(c * d)
}

/// Line through two homogeneous points, directed from `p2` toward `p1`.
///
/// Each component is a 2×2 minor of the stacked matrix `[p1; p2]`.
/// Coincident points give the zero coordinate, which describes no line.
pub fn plucker<T>(p1: &Point4<T>, p2: &Point4<T>) -> Plucker<T>
where
    T: Scalar,
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let p = Plucker::new(
        minor::<T>(&p1.x, &p2.w, &p1.w, &p2.x),
        minor::<T>(&p1.y, &p2.w, &p1.w, &p2.y),
        minor::<T>(&p1.z, &p2.w, &p1.w, &p2.z),
        minor::<T>(&p1.y, &p2.z, &p1.z, &p2.y),
        minor::<T>(&p1.z, &p2.x, &p1.x, &p2.z),
        minor::<T>(&p1.x, &p2.y, &p1.y, &p2.x),
    );
    if p.is_zero() {
        log::trace!("coincident points {:?} and {:?} span no line", p1, p2);
    }
    p
}

/// [`plucker`] for Euclidean points, lifted with unit weight.
pub fn plucker_3d<T>(p1: &Point3<T>, p2: &Point3<T>) -> Plucker<T>
where
    T: Scalar,
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    plucker::<T>(&p1.to_homogeneous(), &p2.to_homogeneous())
}

impl<T: Scalar> Index<usize> for Plucker<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Scalar> From<[T; 6]> for Plucker<T> {
    fn from(coords: [T; 6]) -> Self {
        Plucker { coords }
    }
}

impl<T: Scalar> From<Plucker<T>> for [T; 6] {
    fn from(p: Plucker<T>) -> Self {
        p.coords
    }
}

impl<'s, T: Scalar> TryFrom<&'s [T]> for Plucker<T> {
    type Error = PluckerError;

    fn try_from(values: &'s [T]) -> Result<Self, PluckerError> {
        if values.len() != 6 {
            return Err(PluckerError::WrongLength { len: values.len() });
        }
        Ok(Plucker {
            coords: std::array::from_fn(|i| values[i].clone()),
        })
    }
}

impl<'a, 'b, T> Add<&'b Plucker<T>> for &'a Plucker<T>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Plucker<T>;
    fn add(self, rhs: &'b Plucker<T>) -> Plucker<T> {
        Plucker {
            coords: std::array::from_fn(|i| &self.coords[i] + &rhs.coords[i]),
        }
    }
}

impl<T> Add for Plucker<T>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Plucker<T>;
    fn add(self, rhs: Plucker<T>) -> Plucker<T> {
        &self + &rhs
    }
}

impl<'a, 'b, T> Sub<&'b Plucker<T>> for &'a Plucker<T>
where
    T: Scalar,
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Plucker<T>;
    fn sub(self, rhs: &'b Plucker<T>) -> Plucker<T> {
        Plucker {
            coords: std::array::from_fn(|i| &self.coords[i] - &rhs.coords[i]),
        }
    }
}

impl<T> Sub for Plucker<T>
where
    T: Scalar,
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Plucker<T>;
    fn sub(self, rhs: Plucker<T>) -> Plucker<T> {
        &self - &rhs
    }
}

impl<'a, 'b, T> Mul<&'b T> for &'a Plucker<T>
where
    T: Scalar,
    for<'c> &'c T: Mul<&'c T, Output = T>,
{
    type Output = Plucker<T>;
    fn mul(self, s: &'b T) -> Plucker<T> {
        Plucker {
            coords: std::array::from_fn(|i| &self.coords[i] * s),
        }
    }
}

impl<T> Mul<T> for Plucker<T>
where
    T: Scalar,
    for<'c> &'c T: Mul<&'c T, Output = T>,
{
    type Output = Plucker<T>;
    fn mul(self, s: T) -> Plucker<T> {
        &self * &s
    }
}

impl<T: Scalar> Neg for Plucker<T> {
    type Output = Plucker<T>;
    fn neg(self) -> Plucker<T> {
        self.map(|c| -c)
    }
}
