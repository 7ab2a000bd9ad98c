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

/// How one line passes another when sighted along the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePass {
    /// The lines lie in a common plane: they meet, or they are parallel.
    Coplanar,
    Clockwise,
    Counterclockwise,
}

impl LinePass {
    /// Classification seen with one of the two lines flipped.
    pub fn reversed(self) -> Self {
        match self {
            LinePass::Coplanar => LinePass::Coplanar,
            LinePass::Clockwise => LinePass::Counterclockwise,
            LinePass::Counterclockwise => LinePass::Clockwise,
        }
    }

    pub fn is_coplanar(self) -> bool {
        self == LinePass::Coplanar
    }
}
