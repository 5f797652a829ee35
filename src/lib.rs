#![cfg_attr(docsrs, feature(doc_cfg))]
//! # kagome-mesh
//!
//! kagome-mesh builds planar Kagome lattice beam meshes for structural
//! analysis. A grid of hexagram ("star") tiles is generated tile by tile,
//! nodes shared between neighbouring tiles are merged into one canonical
//! node list, element endpoints are repaired to reference only canonical
//! nodes, and the grid is centred on the origin. Optionally, a straight crack
//! is injected along `y = 0` by splitting nodes and rewiring the struts above
//! them.
//!
//! ## Features
//! - Exact integer lattice coordinates: no floating-point location matching
//! - Arena-backed nodes and elements addressed by strong handles
//! - One-shot crack injection with explicit error semantics
//! - Abaqus `.inp` deck and legacy VTK writers
//!
//! ## Usage
//!
//! ```rust
//! use kagome_mesh::prelude::*;
//!
//! let mut mesh = KagomeMesh::new(2, 1, 1.0)?;
//! assert_eq!(mesh.node_count(), 22);
//! assert_eq!(mesh.element_count(), 36);
//!
//! let cracked = mesh.create_crack(2)?.to_vec();
//! assert_eq!(cracked.len(), 2);
//! assert_eq!(mesh.node_count(), 24);
//!
//! let deck = AbaqusWriter::default().write_to_string(&mesh)?;
//! assert!(deck.starts_with("*HEADING"));
//! # Ok::<(), kagome_mesh::mesh_error::MeshError>(())
//! ```
//!
//! ## Invariants
//!
//! After construction no two nodes share a location, every element endpoint
//! is a node of the mesh, and no two elements share an ordered endpoint pair.
//! After a crack, each split location holds exactly the original node (kept
//! by on/below-plane struts) and its copy (used by the struts above). Debug
//! builds, and builds with `strict-invariants` or `check-invariants`, check
//! these after every stage via [`DebugInvariants`].

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod mesh_generation;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{LatticeScale, LatticeSite};
    pub use crate::io::{AbaqusWriter, MeshWriter, VtkWriter};
    pub use crate::mesh::{GridSize, KagomeMesh};
    pub use crate::mesh_error::MeshError;
    pub use crate::mesh_generation::{KagomeConfig, kagome_mesh};
    pub use crate::topology::{Element, ElementId, Node, NodeId};
}
