//! `NodeId` / `ElementId`: strong, zero-cost handles into the mesh arenas
//!
//! Nodes and elements live in plain `Vec`s owned by the mesh and are never
//! removed, so a handle is simply the position of its entity. Keeping the two
//! handle types distinct stops node and element indices from being mixed up,
//! and separates "which object is this" (the id) from "where is it"
//! (its [`LatticeSite`](crate::geometry::LatticeSite)).
//!
//! The position is also the 0-based index used by the solver deck writers,
//! which print `index + 1`.

use std::fmt;

/// Handle of a node in [`KagomeMesh::nodes`](crate::mesh::KagomeMesh::nodes).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(usize);

/// Handle of an element in [`KagomeMesh::elements`](crate::mesh::KagomeMesh::elements).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct ElementId(usize);

impl NodeId {
    /// Wrap a raw arena position.
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Arena position of this node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based number used by finite-element decks.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl ElementId {
    /// Wrap a raw position in the element list.
    #[inline]
    pub const fn new(index: usize) -> Self {
        ElementId(index)
    }

    /// Position of this element.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based number used by finite-element decks.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementId").field(&self.0).finish()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
