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

//! Plücker coordinates of lines in 3D space and the predicates built on
//! them: parallelism, intersection, passing orientation and origin queries.
//!
//! Everything is generic over [`Scalar`]. With `f64` the predicates use a
//! tolerance based near-zero test; with [`Exact`] they are exact.

pub mod error;
pub mod geometry;
pub mod line;
pub mod numeric;
pub mod operations;

pub use error::PluckerError;
pub use geometry::{Point3, Point4, Vector3, VectorOps};
pub use line::basis;
pub use line::plucker::{plucker, plucker_3d};
pub use line::{Anti, Basis, BasisElement, LinePass, Plucker};
pub use numeric::{Exact, Scalar};
