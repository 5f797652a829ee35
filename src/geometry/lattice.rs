//! Exact lattice coordinates for Kagome nodes.
//!
//! Every node position in a Kagome star grid is an integer combination of
//! half a strut horizontally and half a triangle height vertically:
//!
//! ```text
//! x = i * strut_length / 2
//! y = j * strut_length * sqrt(3) / 2
//! ```
//!
//! Nodes are therefore located by the integer pair `(i, j)`. Location
//! equality is exact integer equality; floats only appear when positions are
//! emitted through [`LatticeScale::position`]. There is no tolerance anywhere.

use crate::mesh_error::MeshError;
use std::fmt;

/// Integer lattice site `(i, j)` in half-strut / half-height units.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct LatticeSite {
    /// Horizontal coordinate in units of `strut_length / 2`.
    pub i: i64,
    /// Vertical coordinate in units of `strut_length * sqrt(3) / 2`.
    pub j: i64,
}

impl LatticeSite {
    pub const ORIGIN: LatticeSite = LatticeSite { i: 0, j: 0 };

    #[inline]
    pub const fn new(i: i64, j: i64) -> Self {
        LatticeSite { i, j }
    }

    /// Componentwise sum.
    #[inline]
    pub const fn offset(self, by: LatticeSite) -> Self {
        LatticeSite {
            i: self.i + by.i,
            j: self.j + by.j,
        }
    }

    /// Componentwise negation.
    #[inline]
    pub const fn negated(self) -> Self {
        LatticeSite {
            i: -self.i,
            j: -self.j,
        }
    }

    /// On the symmetry plane `y == 0`.
    #[inline]
    pub const fn is_on_plane(self) -> bool {
        self.j == 0
    }

    /// Strictly above the symmetry plane.
    #[inline]
    pub const fn is_above_plane(self) -> bool {
        self.j > 0
    }
}

impl fmt::Display for LatticeSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Conversion from lattice sites to physical coordinates.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatticeScale {
    strut_length: f64,
}

impl LatticeScale {
    /// Validate `strut_length` (finite, `> 0`).
    pub fn try_new(strut_length: f64) -> Result<Self, MeshError> {
        if !strut_length.is_finite() || strut_length <= 0.0 {
            return Err(MeshError::InvalidStrutLength(strut_length));
        }
        Ok(Self { strut_length })
    }

    #[inline]
    pub fn strut_length(&self) -> f64 {
        self.strut_length
    }

    /// Physical `x` of a horizontal lattice unit.
    #[inline]
    pub fn half_strut(&self) -> f64 {
        0.5 * self.strut_length
    }

    /// Physical `y` of a vertical lattice unit (half a triangle height).
    #[inline]
    pub fn half_height(&self) -> f64 {
        3f64.sqrt() / 2.0 * self.strut_length
    }

    /// Physical `[x, y]` of `site`.
    #[inline]
    pub fn position(&self, site: LatticeSite) -> [f64; 2] {
        [
            site.i as f64 * self.half_strut(),
            site.j as f64 * self.half_height(),
        ]
    }
}
