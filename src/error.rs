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

//! The error module contains the errors returned by the checked functions.
//!
//! The geodesic calculations themselves do not fail: invalid inputs result
//! in NaN outputs.

use crate::Capabilities;
use thiserror::Error;

/// The errors of the checked `Ellipsoid` and `GeodesicLine` functions.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeodesicError {
    /// The Semimajor axis is not finite and positive.
    #[error("invalid semimajor axis: {0}, it must be finite and positive")]
    InvalidSemimajorAxis(f64),
    /// The flattening is not finite or it is not less than one.
    #[error("invalid flattening: {0}, it must be finite and less than 1")]
    InvalidFlattening(f64),
    /// A `GeodesicLine` was asked for outputs it was not constructed to provide.
    #[error("the geodesic line does not have the capabilities: {missing:?}")]
    MissingCapabilities {
        /// The capabilities that were requested but not available.
        missing: Capabilities,
    },
}
