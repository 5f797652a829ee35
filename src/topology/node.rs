//! Node: a lattice site owned by the mesh node arena.

use crate::geometry::LatticeSite;
use crate::topology::point::NodeId;

/// A mesh node.
///
/// Identity is the node's [`NodeId`]; location is its [`LatticeSite`]. Two
/// distinct nodes may share a site only after a crack split one of them, in
/// which case the copy remembers the node it was split from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    site: LatticeSite,
    split_from: Option<NodeId>,
}

impl Node {
    /// A node generated by a star tile.
    #[inline]
    pub const fn new(site: LatticeSite) -> Self {
        Node {
            site,
            split_from: None,
        }
    }

    /// A crack copy of `original`, sitting at the same location.
    #[inline]
    pub const fn split_copy(site: LatticeSite, original: NodeId) -> Self {
        Node {
            site,
            split_from: Some(original),
        }
    }

    /// Location of the node.
    #[inline]
    pub const fn site(&self) -> LatticeSite {
        self.site
    }

    /// The node this one was split from, if it is a crack copy.
    #[inline]
    pub const fn split_from(&self) -> Option<NodeId> {
        self.split_from
    }

    /// Exact location equality.
    #[inline]
    pub fn same_location(&self, other: &Node) -> bool {
        self.site == other.site
    }

    pub(crate) fn translate(&mut self, by: LatticeSite) {
        self.site = self.site.offset(by);
    }
}
