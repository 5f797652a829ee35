//! Mesh topology primitives.
//!
//! - [`point`]: `NodeId` / `ElementId` arena handles
//! - [`node`]: nodes and their lattice sites
//! - [`element`]: two-node struts referencing nodes by handle

pub mod element;
pub mod node;
pub mod point;

pub use element::Element;
pub use node::Node;
pub use point::{ElementId, NodeId};
