//! `KagomeMesh`: the canonical node/element store of a Kagome lattice.
//!
//! The mesh owns a node arena and an element list. Elements reference nodes
//! by [`NodeId`], which is the node's position in the arena and never
//! changes: nodes are only ever appended (by construction, or by a crack
//! splitting a node), never removed.
//!
//! Lifecycle: pooled → deduplicated → rewired → recentered → (optionally)
//! cracked. The first four stages run inside [`KagomeMesh::new`]; cracking is
//! a separate, one-shot [`KagomeMesh::create_crack`].

use crate::algs::crack::inject_crack;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::{LatticeScale, LatticeSite};
use crate::mesh_error::MeshError;
use crate::mesh_generation::build_kagome;
use crate::topology::element::Element;
use crate::topology::node::Node;
use crate::topology::point::{ElementId, NodeId};
use hashbrown::{HashMap, HashSet};

/// Number of star tiles along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    pub x_count: usize,
    pub y_count: usize,
}

impl GridSize {
    /// Validate that both counts are positive.
    pub fn try_new(x_count: usize, y_count: usize) -> Result<Self, MeshError> {
        if x_count == 0 || y_count == 0 {
            return Err(MeshError::InvalidGridDimensions { x_count, y_count });
        }
        Ok(Self { x_count, y_count })
    }

    /// Total number of star tiles.
    #[inline]
    pub fn star_count(&self) -> usize {
        self.x_count * self.y_count
    }
}

/// A Kagome lattice beam mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct KagomeMesh {
    pub(crate) grid: GridSize,
    pub(crate) scale: LatticeScale,
    pub(crate) nodes: Vec<Node>,
    pub(crate) elements: Vec<Element>,
    pub(crate) cracked_nodes: Vec<NodeId>,
    pub(crate) split_nodes: Vec<NodeId>,
    pub(crate) crack_applied: bool,
}

impl KagomeMesh {
    /// Build an `x_count` × `y_count` grid of stars with the given strut
    /// length, centred on the origin.
    ///
    /// # Errors
    /// [`MeshError::InvalidGridDimensions`] or [`MeshError::InvalidStrutLength`]
    /// for bad inputs; [`MeshError::MissingCanonicalNode`] if rewiring finds
    /// a node the deduplication never saw.
    pub fn new(x_count: usize, y_count: usize, strut_length: f64) -> Result<Self, MeshError> {
        let grid = GridSize::try_new(x_count, y_count)?;
        let scale = LatticeScale::try_new(strut_length)?;
        build_kagome(grid, scale)
    }

    pub(crate) fn from_parts(
        grid: GridSize,
        scale: LatticeScale,
        nodes: Vec<Node>,
        elements: Vec<Element>,
    ) -> Self {
        let mesh = KagomeMesh {
            grid,
            scale,
            nodes,
            elements,
            cracked_nodes: Vec::new(),
            split_nodes: Vec::new(),
            crack_applied: false,
        };
        mesh.debug_assert_invariants();
        mesh
    }

    /// Split the first `crack_length` on-plane nodes (ascending `x`) and move
    /// the elements above them onto the copies. See
    /// [`inject_crack`](crate::algs::crack::inject_crack).
    pub fn create_crack(&mut self, crack_length: usize) -> Result<&[NodeId], MeshError> {
        inject_crack(self, crack_length)?;
        self.debug_assert_invariants();
        Ok(&self.cracked_nodes)
    }

    #[inline]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[inline]
    pub fn scale(&self) -> &LatticeScale {
        &self.scale
    }

    /// Canonical node list; position = [`NodeId`].
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Canonical element list; position = [`ElementId`].
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Nodes split by the crack, ascending in `x`. Empty until cracked.
    #[inline]
    pub fn cracked_nodes(&self) -> &[NodeId] {
        &self.cracked_nodes
    }

    /// Copies created by the crack, parallel to [`cracked_nodes`](Self::cracked_nodes).
    #[inline]
    pub fn split_nodes(&self) -> &[NodeId] {
        &self.split_nodes
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// True once [`create_crack`](Self::create_crack) has run.
    #[inline]
    pub fn is_cracked(&self) -> bool {
        self.crack_applied
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, MeshError> {
        self.nodes.get(id.index()).ok_or(MeshError::UnknownNode(id))
    }

    pub fn element(&self, id: ElementId) -> Result<&Element, MeshError> {
        self.elements
            .get(id.index())
            .ok_or(MeshError::UnknownElement(id))
    }

    /// Physical `[x, y]` of a node.
    pub fn position(&self, id: NodeId) -> Result<[f64; 2], MeshError> {
        Ok(self.scale.position(self.node(id)?.site()))
    }

    /// Physical positions of all nodes, in node-list order.
    pub fn positions(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.nodes.iter().map(|n| self.scale.position(n.site()))
    }

    /// Elements with `node` as start or end.
    ///
    /// Computed on demand by scanning the element list; the mesh keeps no
    /// node → element back-references.
    pub fn incident_elements(&self, node: NodeId) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_node(node))
            .map(|(idx, _)| ElementId::new(idx))
            .collect()
    }

    /// Canonical node at `site` that was not created by a crack split.
    pub fn node_at(&self, site: LatticeSite) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.site() == site && n.split_from().is_none())
            .map(NodeId::new)
    }

    fn site_of(&self, id: NodeId) -> Result<LatticeSite, MeshError> {
        Ok(self.node(id)?.site())
    }
}

impl DebugInvariants for KagomeMesh {
    fn validate_invariants(&self) -> Result<(), MeshError> {
        // Every element endpoint is a member of the node list.
        for (idx, e) in self.elements.iter().enumerate() {
            for end in [e.start, e.end] {
                if end.index() >= self.nodes.len() {
                    return Err(MeshError::InvariantViolation(format!(
                        "element {idx} references node {end} outside the node list"
                    )));
                }
            }
        }

        // No repeated ordered pairs.
        let mut seen = HashSet::with_capacity(self.elements.len());
        for (idx, e) in self.elements.iter().enumerate() {
            if !seen.insert(e.endpoints()) {
                return Err(MeshError::InvariantViolation(format!(
                    "element {idx} repeats ({}, {})",
                    e.start, e.end
                )));
            }
        }

        // One node per site, except that a split copy may share its
        // original's site.
        let mut by_site: HashMap<LatticeSite, NodeId> = HashMap::with_capacity(self.nodes.len());
        for (idx, node) in self.nodes.iter().enumerate() {
            let id = NodeId::new(idx);
            match node.split_from() {
                None => {
                    if let Some(other) = by_site.insert(node.site(), id) {
                        return Err(MeshError::InvariantViolation(format!(
                            "nodes {other} and {id} share site {}",
                            node.site()
                        )));
                    }
                }
                Some(original) => {
                    if !self.cracked_nodes.contains(&original)
                        || self.site_of(original)? != node.site()
                    {
                        return Err(MeshError::InvariantViolation(format!(
                            "split node {id} does not mirror a cracked node"
                        )));
                    }
                }
            }
        }

        if self.cracked_nodes.len() != self.split_nodes.len() {
            return Err(MeshError::InvariantViolation(format!(
                "{} cracked nodes but {} split copies",
                self.cracked_nodes.len(),
                self.split_nodes.len()
            )));
        }

        // Original keeps only on/below-plane struts, its copy only upper ones.
        for (&original, &split) in self.cracked_nodes.iter().zip(&self.split_nodes) {
            for (role, node, want_above) in [("original", original, false), ("split", split, true)]
            {
                for eid in self.incident_elements(node) {
                    let e = self.elements[eid.index()];
                    let above = self.site_of(e.start)?.is_above_plane()
                        || self.site_of(e.end)?.is_above_plane();
                    if above != want_above {
                        return Err(MeshError::InvariantViolation(format!(
                            "{role} node {node} carries element {eid} on the wrong side of the crack"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(
            KagomeMesh::new(0, 3, 1.0),
            Err(MeshError::InvalidGridDimensions {
                x_count: 0,
                y_count: 3
            })
        );
    }

    #[test]
    fn rejects_bad_strut() {
        assert_eq!(
            KagomeMesh::new(1, 1, -2.0),
            Err(MeshError::InvalidStrutLength(-2.0))
        );
    }

    #[test]
    fn single_star_counts() {
        let mesh = KagomeMesh::new(1, 1, 2.0).unwrap();
        assert_eq!(mesh.node_count(), 12);
        assert_eq!(mesh.element_count(), 18);
        assert!(mesh.cracked_nodes().is_empty());
        assert!(!mesh.is_cracked());
        mesh.validate_invariants().unwrap();
    }

    #[test]
    fn incident_elements_of_star_apex() {
        let mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        // Apex (local 0) belongs only to triangle (0, 2, 3).
        assert_eq!(
            mesh.incident_elements(NodeId::new(0)),
            vec![ElementId::new(0), ElementId::new(1)]
        );
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        assert_eq!(
            mesh.node(NodeId::new(12)).err(),
            Some(MeshError::UnknownNode(NodeId::new(12)))
        );
        assert_eq!(
            mesh.element(ElementId::new(18)).err(),
            Some(MeshError::UnknownElement(ElementId::new(18)))
        );
    }

    #[test]
    fn node_at_ignores_split_copies() {
        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        mesh.create_crack(1).unwrap();
        assert_eq!(mesh.node_at(LatticeSite::new(-2, 0)), Some(NodeId::new(5)));
        assert_eq!(mesh.node_at(LatticeSite::new(100, 0)), None);
    }

    #[test]
    fn validation_catches_duplicate_sites() {
        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        mesh.nodes.push(Node::new(LatticeSite::new(0, 2)));
        assert!(matches!(
            mesh.validate_invariants(),
            Err(MeshError::InvariantViolation(_))
        ));
    }

    #[test]
    fn validation_catches_dangling_and_repeated_elements() {
        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        let first = mesh.elements[0];
        mesh.elements.push(first);
        assert!(mesh.validate_invariants().is_err());

        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        mesh.elements[0].end = NodeId::new(40);
        assert!(mesh.validate_invariants().is_err());
    }

    #[test]
    fn validation_catches_split_on_wrong_side() {
        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        mesh.create_crack(1).unwrap();
        // Move a lower strut onto the split copy.
        mesh.elements[12].start = NodeId::new(12);
        assert!(mesh.validate_invariants().is_err());
    }
}
