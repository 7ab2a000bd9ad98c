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

//! Named access to the six Plücker components.
//!
//! The primary elements `p01 p02 p03 p23 p31 p12` address storage directly.
//! Swapping the two axes of an element negates it, so each dual element
//! (`p10 p20 p30 p32 p13 p21`) is its primary seen through [`Anti`], which
//! negates on read and on write.

use crate::{line::plucker::Plucker, numeric::scalar::Scalar};

pub trait BasisElement: Copy {
    fn get<T: Scalar>(&self, p: &Plucker<T>) -> T;
    fn set<T: Scalar>(&self, p: &mut Plucker<T>, value: T);
}

/// Primary basis elements, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    P01,
    P02,
    P03,
    P23,
    P31,
    P12,
}

impl Basis {
    pub const ALL: [Basis; 6] = [
        Basis::P01,
        Basis::P02,
        Basis::P03,
        Basis::P23,
        Basis::P31,
        Basis::P12,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl BasisElement for Basis {
    fn get<T: Scalar>(&self, p: &Plucker<T>) -> T {
        p.coords[self.index()].clone()
    }

    fn set<T: Scalar>(&self, p: &mut Plucker<T>, value: T) {
        p.coords[self.index()] = value;
    }
}

/// The element with its two axes swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anti<E>(pub E);

impl<E: BasisElement> BasisElement for Anti<E> {
    fn get<T: Scalar>(&self, p: &Plucker<T>) -> T {
        -self.0.get(p)
    }

    fn set<T: Scalar>(&self, p: &mut Plucker<T>, value: T) {
        self.0.set(p, -value);
    }
}

pub const P01: Basis = Basis::P01;
pub const P02: Basis = Basis::P02;
pub const P03: Basis = Basis::P03;
pub const P23: Basis = Basis::P23;
pub const P31: Basis = Basis::P31;
pub const P12: Basis = Basis::P12;

pub const P10: Anti<Basis> = Anti(Basis::P01);
pub const P20: Anti<Basis> = Anti(Basis::P02);
pub const P30: Anti<Basis> = Anti(Basis::P03);
pub const P32: Anti<Basis> = Anti(Basis::P23);
pub const P13: Anti<Basis> = Anti(Basis::P31);
pub const P21: Anti<Basis> = Anti(Basis::P12);

macro_rules! accessors {
    ($($elem:ident => $get:ident, $set:ident, $with:ident;)*) => {
        impl<T: Scalar> Plucker<T> {
            $(
                pub fn $get(&self) -> T {
                    $elem.get(self)
                }

                pub fn $set(&mut self, value: T) {
                    $elem.set(self, value);
                }

                pub fn $with(mut self, value: T) -> Self {
                    $elem.set(&mut self, value);
                    self
                }
            )*
        }
    };
}

accessors! {
    P01 => p01, set_p01, with_p01;
    P02 => p02, set_p02, with_p02;
    P03 => p03, set_p03, with_p03;
    P23 => p23, set_p23, with_p23;
    P31 => p31, set_p31, with_p31;
    P12 => p12, set_p12, with_p12;
    P10 => p10, set_p10, with_p10;
    P20 => p20, set_p20, with_p20;
    P30 => p30, set_p30, with_p30;
    P32 => p32, set_p32, with_p32;
    P13 => p13, set_p13, with_p13;
    P21 => p21, set_p21, with_p21;
}

impl<T: Scalar> Plucker<T> {
    /// Reads any basis element, primary or dual.
    pub fn get<E: BasisElement>(&self, elem: E) -> T {
        elem.get(self)
    }

    /// Returns a copy with `elem` set to `value`.
    pub fn with<E: BasisElement>(mut self, elem: E, value: T) -> Self {
        elem.set(&mut self, value);
        self
    }
}
