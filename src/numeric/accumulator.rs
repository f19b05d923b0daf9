// Copyright (c) 2024-2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The accumulator module contains a compensated sum of `f64` values.

#![allow(clippy::float_cmp)]

use super::two_sum;

/// A sum of `f64` values which retains the rounding error of each addition.
///
/// The value is `s + t` where `t` is the accumulated rounding error, so
/// adding many small values to a large sum does not drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accumulator {
    /// The rounded sum.
    s: f64,
    /// The rounding error of the sum.
    t: f64,
}

impl Accumulator {
    /// Construct an `Accumulator` with the initial value `y`.
    #[must_use]
    pub const fn new(y: f64) -> Self {
        Self { s: y, t: 0.0 }
    }

    /// The rounded value of the sum.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.s
    }

    /// Add `y` to the sum.
    pub fn add(&mut self, y: f64) {
        let (z, u) = two_sum(y, self.t);
        let (s, t) = two_sum(z, self.s);
        self.s = s;
        // if the sum is zero, the error becomes the sum
        if s == 0.0 {
            self.s = u;
            self.t = t;
        } else {
            self.t = t + u;
        }
    }

    /// Calculate the value of the sum plus `y` without changing the sum.
    #[must_use]
    pub fn sum(&self, y: f64) -> f64 {
        let mut acc = *self;
        acc.add(y);
        acc.s
    }

    /// Negate the sum.
    pub fn negate(&mut self) {
        self.s = -self.s;
        self.t = -self.t;
    }

    /// Reduce the sum to the range [-y/2, y/2] by taking the remainder modulo `y`.
    pub fn remainder(&mut self, y: f64) {
        self.s = libm::remainder(self.s, y);
        self.add(0.0);
    }
}
