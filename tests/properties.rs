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

use plucker::{Exact, LinePass, Plucker, Point3, VectorOps, plucker_3d};
use rand::{Rng, SeedableRng, rngs::StdRng};

const ROUNDS: usize = 500;
const EXTENTS: [f64; 4] = [10.0, 100.0, 1e3, 1e4];

fn float_point(rng: &mut StdRng, extent: f64) -> Point3<f64> {
    Point3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
    )
}

fn exact_point(rng: &mut StdRng) -> Point3<Exact> {
    let mut c = || -> i32 { rng.random_range(-20..=20) };
    Point3::from_vals([c(), c(), c()])
}

fn any_tuple(rng: &mut StdRng) -> Plucker<f64> {
    Plucker::from_vals(std::array::from_fn::<f64, 6, _>(|_| {
        rng.random_range(-1.0..1.0)
    }))
}

#[test]
fn isotropic_agrees_with_is_line() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let p = any_tuple(&mut rng);
        assert_eq!(p.isotropic(), p.is_line());
        assert_eq!(p.bilinear(&p), p.squared_error());

        for extent in EXTENTS {
            let l = plucker_3d::<f64>(
                &float_point(&mut rng, extent),
                &float_point(&mut rng, extent),
            );
            assert_eq!(l.isotropic(), l.is_line());
        }
    }
    // U = (1, 0, 0), V = (s, 1, 0): U·V = s against |U|·|V| ≈ 1
    for s in [0.4e-10, 0.9e-10, 1.0e-10, 1.1e-10, 2.0e-10] {
        let p = Plucker::<f64>::new(1.0, 0.0, 0.0, s, 1.0, 0.0);
        assert_eq!(p.isotropic(), p.is_line());
    }
    assert!(Plucker::<f64>::new(1.0, 0.0, 0.0, 0.4e-10, 1.0, 0.0).is_line());
    assert!(!Plucker::<f64>::new(1.0, 0.0, 0.0, 2.0e-10, 1.0, 0.0).is_line());
}

#[test]
fn two_distinct_points_make_a_line() {
    let mut rng = StdRng::seed_from_u64(11);
    for extent in EXTENTS {
        for _ in 0..ROUNDS {
            let a = float_point(&mut rng, extent);
            let b = float_point(&mut rng, extent);
            let l = plucker_3d::<f64>(&a, &b);
            assert!(l.is_line(), "extent {}: {:?}", extent, l);
            assert!(l.parallel(&l));
            assert!(!l.intersects(&l));
        }
    }
}

#[test]
fn intersection_is_coplanar_and_not_parallel() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..ROUNDS {
        let a = plucker_3d::<Exact>(&exact_point(&mut rng), &exact_point(&mut rng));
        let b = plucker_3d::<Exact>(&exact_point(&mut rng), &exact_point(&mut rng));
        let coplanar = a.passes(&b) == LinePass::Coplanar;
        let parallel = a.parallel(&b);

        if parallel {
            assert!(!a.intersects(&b));
        }
        assert_eq!(a.intersects(&b), coplanar && !parallel);
        assert_eq!(a.passes(&b), b.passes(&a));
        assert_eq!(a.passes(&b.clone().reversed()), a.passes(&b).reversed());
    }
}

#[test]
fn lines_through_a_shared_point_intersect() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let c = exact_point(&mut rng);
        let a = plucker_3d::<Exact>(&exact_point(&mut rng), &c);
        let b = plucker_3d::<Exact>(&exact_point(&mut rng), &c);
        if !a.has_direction() || !b.has_direction() {
            continue;
        }

        assert_eq!(a.passes(&b), LinePass::Coplanar);
        assert_eq!(a.intersects(&b), !a.parallel(&b));
    }
}

#[test]
fn closest_point_is_on_the_line_at_the_quadrance() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let a = exact_point(&mut rng);
        let b = exact_point(&mut rng);
        let l = plucker_3d::<Exact>(&a, &b);
        let Ok(c) = l.try_closest_to_origin() else {
            assert_eq!(a, b);
            continue;
        };

        let q = l.quadrance_to_origin();
        assert_eq!(c.as_vector().dot(&c.as_vector()), q);
        // the closest point spans the same line with either end point
        let through_c = plucker_3d::<Exact>(&a, &c);
        assert!(!through_c.has_direction() || through_c.coincides_unoriented(&l));
    }
}
