//! MeshError: Unified error type for kagome-mesh public APIs
//!
//! Construction is a deterministic pure computation, so the only failures are
//! invalid inputs, internal integrity violations, and I/O in the writers.

use crate::geometry::LatticeSite;
use crate::topology::point::{ElementId, NodeId};
use thiserror::Error;

/// Unified error type for kagome-mesh operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Grid must have at least one tile in each direction.
    #[error("Invalid grid dimensions {x_count}x{y_count}: both counts must be positive")]
    InvalidGridDimensions { x_count: usize, y_count: usize },
    /// Strut length must be finite and strictly positive.
    #[error("Invalid strut length {0}: must be finite and > 0")]
    InvalidStrutLength(f64),
    /// A raw edge references an index outside the raw node pool.
    #[error("Topology error: raw node {0} is not in the pool")]
    UnknownRawNode(usize),
    /// Rewiring found a raw node with no canonical node at its location.
    #[error("Topology error: no canonical node at site {site} (geometry generation defect)")]
    MissingCanonicalNode { site: LatticeSite },
    /// An above-plane element did not reference the node it was gathered for.
    /// Incidence is gathered by node identity, so a well-formed mesh never
    /// reaches this.
    #[error("Crack error: element {element} above the plane does not reference node {node}")]
    CrackRewireInconsistent { element: ElementId, node: NodeId },
    /// Crack injection may only run once per mesh.
    #[error("Crack error: mesh has already been cracked")]
    CrackAlreadyApplied,
    /// Node id outside the node arena.
    #[error("Node {0} is not a member of the mesh")]
    UnknownNode(NodeId),
    /// Element id outside the element list.
    #[error("Element {0} is not a member of the mesh")]
    UnknownElement(ElementId),
    /// A structural invariant of the mesh does not hold.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// Failure while writing mesh output.
    #[error("Mesh I/O error: {0}")]
    MeshIo(String),
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::MeshIo(err.to_string())
    }
}
