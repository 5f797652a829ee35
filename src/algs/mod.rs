//! Mesh construction and surgery algorithms.
//!
//! - [`dedup`]: pooling of raw star output and node deduplication
//! - [`rewire`]: element endpoint repair and element deduplication
//! - [`recenter`]: translation of the grid onto the origin
//! - [`crack`]: node splitting along the symmetry plane

pub mod crack;
pub mod dedup;
pub mod recenter;
pub mod rewire;

pub use crack::inject_crack;
pub use dedup::{RawPool, deduplicate_nodes};
pub use recenter::{grid_center, recenter};
pub use rewire::rewire_elements;
