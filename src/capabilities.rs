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

//! The capabilities module contains the `Capabilities` bit set.
//!
//! A `Capabilities` value selects both the outputs requested from a geodesic
//! calculation and the series coefficients that a `GeodesicLine` must
//! evaluate to provide them.
//! Each output flag includes the series flags that it depends upon.

use core::ops::{BitAnd, BitOr, BitOrAssign};

/// The series `C1` flag.
const CAP_C1: u32 = 1 << 0;
/// The series `C1p` flag.
const CAP_C1P: u32 = 1 << 1;
/// The series `C2` flag.
const CAP_C2: u32 = 1 << 2;
/// The series `C3` flag.
const CAP_C3: u32 = 1 << 3;
/// The series `C4` flag.
const CAP_C4: u32 = 1 << 4;
/// All of the series flags.
const CAP_ALL: u32 = 0x1F;
/// All of the output flags.
const OUT_ALL: u32 = 0x7F80;

/// A set of geodesic capabilities.
///
/// # Examples
/// ```
/// use ellipsoid_geodesic::Capabilities;
///
/// let caps = Capabilities::LATITUDE | Capabilities::LONGITUDE;
/// assert!(caps.contains(Capabilities::LONGITUDE));
/// assert!(!caps.contains(Capabilities::DISTANCE));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u32);

impl Capabilities {
    /// No capabilities.
    pub const NONE: Self = Self(0);
    /// Calculate the latitude.
    pub const LATITUDE: Self = Self(1 << 7);
    /// Calculate the longitude.
    pub const LONGITUDE: Self = Self((1 << 8) | CAP_C3);
    /// Calculate the azimuth.
    pub const AZIMUTH: Self = Self(1 << 9);
    /// Calculate the distance.
    pub const DISTANCE: Self = Self((1 << 10) | CAP_C1);
    /// Allow the distance to be used as an input.
    pub const DISTANCE_IN: Self = Self((1 << 11) | CAP_C1 | CAP_C1P);
    /// Calculate the reduced length, m12.
    pub const REDUCED_LENGTH: Self = Self((1 << 12) | CAP_C1 | CAP_C2);
    /// Calculate the geodesic scales, M12 and M21.
    pub const GEODESIC_SCALE: Self = Self((1 << 13) | CAP_C1 | CAP_C2);
    /// Calculate the area, S12.
    pub const AREA: Self = Self((1 << 14) | CAP_C4);
    /// Unroll the longitude instead of reducing it to [-180°, 180°].
    pub const LONG_UNROLL: Self = Self(1 << 15);
    /// All capabilities.
    pub const ALL: Self = Self(OUT_ALL | CAP_ALL);

    /// The underlying bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether no capabilities are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any output bit of `other` is set in `self`.
    ///
    /// The series bits are ignored, so `DISTANCE` does not intersect
    /// `REDUCED_LENGTH` although both need the `C1` series.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 & OUT_ALL != 0
    }

    /// The union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// The bits of `other` that are not set in `self`.
    #[must_use]
    pub const fn missing(self, other: Self) -> Self {
        Self(other.0 & !self.0)
    }

    /// The output bits, without the series bits.
    #[must_use]
    pub const fn outputs(self) -> Self {
        Self(self.0 & OUT_ALL)
    }

    /// Whether the `C1` series is required.
    #[must_use]
    pub(crate) const fn has_c1(self) -> bool {
        self.0 & CAP_C1 != 0
    }

    /// Whether the `C1p` series is required.
    #[must_use]
    pub(crate) const fn has_c1p(self) -> bool {
        self.0 & CAP_C1P != 0
    }

    /// Whether the `C2` series is required.
    #[must_use]
    pub(crate) const fn has_c2(self) -> bool {
        self.0 & CAP_C2 != 0
    }

    /// Whether the `C3` series is required.
    #[must_use]
    pub(crate) const fn has_c3(self) -> bool {
        self.0 & CAP_C3 != 0
    }

    /// Whether the `C4` series is required.
    #[must_use]
    pub(crate) const fn has_c4(self) -> bool {
        self.0 & CAP_C4 != 0
    }
}

impl BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Capabilities {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
