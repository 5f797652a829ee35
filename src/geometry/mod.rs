//! Geometry for kagome-mesh.
//!
//! [`lattice`] holds the exact integer coordinate system every node lives on;
//! [`metrics`] provides float-side helpers (bounding boxes, strut lengths)
//! over the physical positions derived from it.

pub mod lattice;
pub mod metrics;

pub use lattice::{LatticeScale, LatticeSite};
