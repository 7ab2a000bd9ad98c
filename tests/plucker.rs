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

use plucker::{Exact, LinePass, Plucker, Point3, Scalar, plucker_3d};

fn line<T: Scalar>(a: [i32; 3], b: [i32; 3]) -> Plucker<T>
where
    for<'a> &'a T: std::ops::Sub<&'a T, Output = T> + std::ops::Mul<&'a T, Output = T>,
{
    plucker_3d::<T>(&Point3::<T>::from_vals(a), &Point3::<T>::from_vals(b))
}

#[test]
fn parallel_lines_do_not_intersect() {
    let a: Plucker<f64> = line::<f64>([0, 0, 0], [1, 0, 0]);
    let b: Plucker<f64> = line::<f64>([0, 1, 0], [1, 1, 0]);

    assert!(a.parallel(&b));
    assert!(!a.intersects(&b));
    // parallel lines share a plane
    assert_eq!(a.passes(&b), LinePass::Coplanar);
}

#[test]
fn axes_cross_at_origin() {
    let x: Plucker<f64> = line::<f64>([0, 0, 0], [1, 0, 0]);
    let y: Plucker<f64> = line::<f64>([0, 0, 0], [0, 1, 0]);

    assert!(!x.parallel(&y));
    assert!(x.intersects(&y));
    assert!(y.intersects(&x));
    assert_eq!(x.quadrance_to_origin(), 0.0);
    assert_eq!(y.quadrance_to_origin(), 0.0);
    assert!(x.closest_to_origin().approx_eq(&Point3::origin()));
}

#[test]
fn skew_lines() {
    let x: Plucker<f64> = line::<f64>([0, 0, 0], [1, 0, 0]);
    let s: Plucker<f64> = line::<f64>([0, 0, 1], [0, 1, 1]);

    assert!(!x.parallel(&s));
    assert!(!x.intersects(&s));
    assert_ne!(x.passes(&s), LinePass::Coplanar);
    assert_eq!(s.quadrance_to_origin(), 1.0);
    assert!(s.closest_to_origin().approx_eq(&Point3::from_vals([0.0, 0.0, 1.0])));
}

#[test]
fn skew_handedness_flips_with_orientation() {
    let x: Plucker<f64> = line::<f64>([1, 0, 0], [0, 0, 0]);
    let s: Plucker<f64> = line::<f64>([0, 1, 1], [0, 0, 1]);
    let forward = x.passes(&s);

    assert_eq!(forward, LinePass::Counterclockwise);
    assert_eq!(s.passes(&x), forward);
    assert_eq!(x.passes(&s.clone().reversed()), LinePass::Clockwise);
    assert_eq!(x.clone().reversed().passes(&s), LinePass::Clockwise);
}

#[test]
fn line_is_parallel_to_itself() {
    let a: Plucker<f64> = line::<f64>([1, 2, 3], [-4, 5, 7]);
    assert!(a.parallel(&a));
    assert!(!a.intersects(&a));
    assert!(a.coincides(&a));
}

#[test]
fn scenarios_hold_exactly() {
    let x: Plucker<Exact> = line::<Exact>([0, 0, 0], [1, 0, 0]);
    let x_shift: Plucker<Exact> = line::<Exact>([0, 1, 0], [1, 1, 0]);
    let y: Plucker<Exact> = line::<Exact>([0, 0, 0], [0, 1, 0]);
    let skew: Plucker<Exact> = line::<Exact>([0, 0, 1], [0, 1, 1]);

    assert!(x.parallel(&x_shift));
    assert!(!x.intersects(&x_shift));
    assert!(x.intersects(&y));
    assert_eq!(x.quadrance_to_origin(), Exact::from(0));
    assert_eq!(y.quadrance_to_origin(), Exact::from(0));
    assert!(!x.parallel(&skew));
    assert!(!x.intersects(&skew));
    assert_eq!(skew.closest_to_origin(), Point3::from_vals([0, 0, 1]));
}

#[test]
fn constructed_lines_lie_on_the_quadric() {
    let a: Plucker<f64> = line::<f64>([3, -1, 2], [7, 8, -9]);
    assert!(a.is_line());
    assert!(a.isotropic());
    assert!(a.squared_error().abs() < 1e-10);

    // U·V = 1 for this tuple
    let off = Plucker::<f64>::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    assert!(!off.is_line());
    assert!(!off.isotropic());
    assert_eq!(off.squared_error(), 1.0);
}

#[test]
fn checked_origin_queries() {
    let a: Plucker<f64> = line::<f64>([0, 3, 4], [1, 3, 4]);
    assert_eq!(a.try_quadrance_to_origin(), Ok(25.0));
    assert!(
        a.try_closest_to_origin()
            .unwrap()
            .approx_eq(&Point3::from_vals([0.0, 3.0, 4.0]))
    );

    let none = Plucker::<f64>::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    assert!(none.try_closest_to_origin().is_err());
    assert!(none.quadrance_to_origin().is_infinite());
}
