//! Topology rewiring after node deduplication.
//!
//! Raw edges still reference raw pool nodes, some of which were dropped as
//! duplicates. Rewiring maps every endpoint onto the canonical node list and
//! then removes elements whose ordered `(start, end)` pair already occurred.

use crate::algs::dedup::{NodeDedup, RawNodeIndex, RawPool};
use crate::mesh_error::MeshError;
use crate::topology::element::Element;
use crate::topology::point::NodeId;
use itertools::Itertools;

/// Resolve a raw node to its canonical node.
///
/// A raw node that itself became canonical resolves to its own id; any other
/// raw node resolves to the canonical node at the same site. A raw node with
/// no canonical node at its site means tile generation produced geometry the
/// deduplication never saw, and a raw index outside the pool is
/// [`MeshError::UnknownRawNode`].
pub fn resolve_canonical(
    pool: &RawPool,
    dedup: &NodeDedup,
    raw: RawNodeIndex,
) -> Result<NodeId, MeshError> {
    if let Some(id) = dedup.canonical_identity(raw) {
        return Ok(id);
    }
    let site = *pool
        .sites()
        .get(raw)
        .ok_or(MeshError::UnknownRawNode(raw))?;
    dedup
        .canonical_at(site)
        .ok_or(MeshError::MissingCanonicalNode { site })
}

/// Rewire all raw edges onto canonical nodes and drop repeated elements,
/// preserving first-occurrence order.
pub fn rewire_elements(pool: &RawPool, dedup: &NodeDedup) -> Result<Vec<Element>, MeshError> {
    let rewired: Vec<Element> = pool
        .edges()
        .iter()
        .map(|edge| {
            Ok(Element::new(
                resolve_canonical(pool, dedup, edge.start)?,
                resolve_canonical(pool, dedup, edge.end)?,
            ))
        })
        .collect::<Result<_, MeshError>>()?;

    let raw_count = rewired.len();
    let elements: Vec<Element> = rewired.into_iter().unique().collect();
    log::debug!(
        "rewire: {raw_count} raw elements -> {} unique",
        elements.len()
    );
    Ok(elements)
}
