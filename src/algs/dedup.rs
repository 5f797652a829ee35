//! Node deduplication across independently generated star tiles.
//!
//! Stars are generated in isolation, so neighbouring tiles each produce their
//! own copy of every shared vertex. All raw nodes and edges are pooled in
//! tile-generation order ([`RawPool`]), then [`deduplicate_nodes`] keeps the
//! first node seen at each lattice site and drops the rest.
//!
//! Location equality is exact (integer lattice sites), so an exact-keyed
//! hash index gives the same result as scanning the canonical list for every
//! insertion, without the quadratic cost.

use crate::geometry::LatticeSite;
use crate::mesh_generation::star::Star;
use crate::topology::node::Node;
use crate::topology::point::NodeId;
use hashbrown::HashMap;

/// Index of a node in the raw (pre-dedup) pool.
pub type RawNodeIndex = usize;

/// A raw edge referencing two raw pool nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawEdge {
    pub start: RawNodeIndex,
    pub end: RawNodeIndex,
}

/// Nodes and edges of all harvested stars, before any merging.
#[derive(Clone, Debug, Default)]
pub struct RawPool {
    sites: Vec<LatticeSite>,
    edges: Vec<RawEdge>,
}

impl RawPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the pool for `stars` tiles.
    pub fn with_star_capacity(stars: usize) -> Self {
        use crate::mesh_generation::star::{STAR_EDGE_COUNT, STAR_NODE_COUNT};
        RawPool {
            sites: Vec::with_capacity(stars * STAR_NODE_COUNT),
            edges: Vec::with_capacity(stars * STAR_EDGE_COUNT),
        }
    }

    /// Append all nodes and edges of `star`; edges are re-based onto the
    /// pool's raw indices.
    pub fn harvest(&mut self, star: &Star) {
        let base = self.sites.len();
        self.sites.extend_from_slice(star.sites());
        self.edges.extend(star.edges().iter().map(|e| RawEdge {
            start: base + e.start,
            end: base + e.end,
        }));
    }

    /// Push a single raw node; returns its raw index.
    pub fn push_site(&mut self, site: LatticeSite) -> RawNodeIndex {
        self.sites.push(site);
        self.sites.len() - 1
    }

    /// Push a single raw edge.
    pub fn push_edge(&mut self, start: RawNodeIndex, end: RawNodeIndex) {
        self.edges.push(RawEdge { start, end });
    }

    #[inline]
    pub fn sites(&self) -> &[LatticeSite] {
        &self.sites
    }

    #[inline]
    pub fn edges(&self) -> &[RawEdge] {
        &self.edges
    }
}

/// Result of node deduplication.
#[derive(Clone, Debug, Default)]
pub struct NodeDedup {
    /// Canonical nodes, in first-seen order.
    pub(crate) nodes: Vec<Node>,
    /// For each raw node: `Some(id)` if that raw node itself became canonical.
    pub(crate) kept: Vec<Option<NodeId>>,
    /// Site → canonical node.
    pub(crate) by_site: HashMap<LatticeSite, NodeId>,
}

impl NodeDedup {
    /// Canonical node list.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Identity check: did raw node `raw` become canonical, and as which id?
    #[inline]
    pub fn canonical_identity(&self, raw: RawNodeIndex) -> Option<NodeId> {
        self.kept.get(raw).copied().flatten()
    }

    /// Location lookup: the canonical node sitting at `site`, if any.
    #[inline]
    pub fn canonical_at(&self, site: LatticeSite) -> Option<NodeId> {
        self.by_site.get(&site).copied()
    }

    /// Consume into the canonical node list.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

/// Merge all raw nodes that share a site, keeping the first one seen.
pub fn deduplicate_nodes(pool: &RawPool) -> NodeDedup {
    let mut dedup = NodeDedup {
        nodes: Vec::new(),
        kept: Vec::with_capacity(pool.sites().len()),
        by_site: HashMap::with_capacity(pool.sites().len()),
    };
    for &site in pool.sites() {
        if dedup.by_site.contains_key(&site) {
            dedup.kept.push(None);
            continue;
        }
        let id = NodeId::new(dedup.nodes.len());
        dedup.nodes.push(Node::new(site));
        dedup.by_site.insert(site, id);
        dedup.kept.push(Some(id));
    }
    log::debug!(
        "node dedup: {} raw nodes -> {} canonical",
        pool.sites().len(),
        dedup.nodes.len()
    );
    dedup
}
