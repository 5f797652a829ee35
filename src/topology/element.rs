//! Element: a two-node strut connecting mesh nodes.
//!
//! An element stores *handles* into the mesh node arena rather than node
//! copies, so the mesh can rewire its endpoints (after deduplication, or when
//! a crack splits a node) without any aliasing between pre- and post-dedup
//! node objects. Equality is over the ordered `(start, end)` pair.

use crate::topology::point::NodeId;

/// A directed strut from `start` to `end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// First node of the strut.
    pub start: NodeId,
    /// Second node of the strut.
    pub end: NodeId,
}

impl Element {
    /// Construct an element from `start` → `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kagome_mesh::topology::element::Element;
    /// use kagome_mesh::topology::point::NodeId;
    /// let e = Element::new(NodeId::new(1), NodeId::new(2));
    /// assert_eq!(e.endpoints(), (NodeId::new(1), NodeId::new(2)));
    /// assert_ne!(e, Element::new(NodeId::new(2), NodeId::new(1)));
    /// ```
    #[inline]
    pub const fn new(start: NodeId, end: NodeId) -> Self {
        Element { start, end }
    }

    /// Returns the `(start, end)` endpoints.
    #[inline]
    pub const fn endpoints(&self) -> (NodeId, NodeId) {
        (self.start, self.end)
    }

    /// True if either endpoint is `node`.
    #[inline]
    pub fn has_node(&self, node: NodeId) -> bool {
        self.start == node || self.end == node
    }

    /// Replace the endpoint equal to `from` with `to`.
    ///
    /// The start endpoint is checked first. Returns `false` (and leaves the
    /// element untouched) if neither endpoint is `from`.
    pub fn replace_endpoint(&mut self, from: NodeId, to: NodeId) -> bool {
        if self.start == from {
            self.start = to;
            true
        } else if self.end == from {
            self.end = to;
            true
        } else {
            false
        }
    }
}
