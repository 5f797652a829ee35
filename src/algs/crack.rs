//! Crack injection along the symmetry plane `y == 0`.
//!
//! A crack of length `k` splits the `k` left-most on-plane nodes. Each split
//! node gets a copy at the same site; elements reaching above the plane are
//! moved onto the copy, while on-plane and below-plane elements keep the
//! original. The upper and lower faces are thereby disconnected along the
//! crack, and the remaining on-plane nodes form the intact ligament ahead of
//! the crack tip. No element is created or removed.

use crate::mesh::KagomeMesh;
use crate::mesh_error::MeshError;
use crate::topology::node::Node;
use crate::topology::point::{ElementId, NodeId};
use itertools::Itertools;

/// Nodes on the symmetry plane, sorted by ascending `x`.
pub fn on_plane_nodes(mesh: &KagomeMesh) -> Vec<NodeId> {
    mesh.nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.site().is_on_plane())
        .map(|(idx, node)| (NodeId::new(idx), node.site().i))
        .sorted_by_key(|&(_, i)| i)
        .map(|(id, _)| id)
        .collect()
}

/// True if either endpoint of `element` lies strictly above the plane.
fn reaches_above(mesh: &KagomeMesh, element: ElementId) -> bool {
    let e = mesh.elements[element.index()];
    mesh.nodes[e.start.index()].site().is_above_plane()
        || mesh.nodes[e.end.index()].site().is_above_plane()
}

/// Keep the candidates reaching above the plane; each must reference `node`.
fn above_plane_elements(
    mesh: &KagomeMesh,
    node: NodeId,
    candidates: Vec<ElementId>,
) -> Result<Vec<ElementId>, MeshError> {
    let above: Vec<ElementId> = candidates
        .into_iter()
        .filter(|&e| reaches_above(mesh, e))
        .collect();
    match above
        .iter()
        .find(|e| !mesh.elements[e.index()].has_node(node))
    {
        Some(&element) => Err(MeshError::CrackRewireInconsistent { element, node }),
        None => Ok(above),
    }
}

/// Split the first `crack_length` on-plane nodes and rewire the elements
/// above them.
///
/// A `crack_length` larger than the number of on-plane nodes is truncated to
/// that number. Returns the cracked (original) nodes in ascending `x`.
///
/// # Errors
/// - [`MeshError::CrackAlreadyApplied`] if the mesh was cracked before
///   (including with length zero).
/// - [`MeshError::CrackRewireInconsistent`] if an element gathered as
///   incident to a cracked node does not reference it. The mesh is left
///   unchanged in that case.
pub fn inject_crack(mesh: &mut KagomeMesh, crack_length: usize) -> Result<&[NodeId], MeshError> {
    if mesh.crack_applied {
        return Err(MeshError::CrackAlreadyApplied);
    }

    let mut cracked = on_plane_nodes(mesh);
    if crack_length > cracked.len() {
        log::debug!(
            "crack length {crack_length} exceeds {} on-plane nodes; truncating",
            cracked.len()
        );
    }
    cracked.truncate(crack_length);

    // Plan every rewire before touching the mesh so a consistency failure
    // leaves it intact.
    let mut plan: Vec<(NodeId, Vec<ElementId>)> = Vec::with_capacity(cracked.len());
    for &node in &cracked {
        let above = above_plane_elements(mesh, node, mesh.incident_elements(node))?;
        plan.push((node, above));
    }

    for (node, above) in plan {
        let site = mesh.nodes[node.index()].site();
        let split = NodeId::new(mesh.nodes.len());
        for element in above {
            if !mesh.elements[element.index()].replace_endpoint(node, split) {
                return Err(MeshError::CrackRewireInconsistent { element, node });
            }
        }
        mesh.nodes.push(Node::split_copy(site, node));
        mesh.split_nodes.push(split);
        log::trace!("split node {node} at {site} into {split}");
    }

    log::debug!("crack injected: {} nodes split", cracked.len());
    mesh.cracked_nodes = cracked;
    mesh.crack_applied = true;
    Ok(&mesh.cracked_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatticeSite;
    use crate::topology::element::Element;

    #[test]
    fn single_star_crack_moves_upper_struts() {
        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        let cracked = inject_crack(&mut mesh, 1).unwrap().to_vec();
        // Local node 5 sits at the far left of the plane.
        assert_eq!(cracked, vec![NodeId::new(5)]);
        assert_eq!(mesh.node_count(), 13);

        let split = NodeId::new(12);
        assert_eq!(mesh.node(split).unwrap().site(), LatticeSite::new(-2, 0));
        assert_eq!(mesh.node(split).unwrap().split_from(), Some(NodeId::new(5)));
        // Triangle (1, 2, 5) is above the plane; triangle (5, 7, 8) is below.
        assert_eq!(mesh.elements()[16], Element::new(NodeId::new(1), split));
        assert_eq!(mesh.elements()[17], Element::new(NodeId::new(2), split));
        assert_eq!(
            mesh.elements()[12],
            Element::new(NodeId::new(5), NodeId::new(7))
        );
        assert_eq!(
            mesh.elements()[13],
            Element::new(NodeId::new(5), NodeId::new(8))
        );
    }

    #[test]
    fn second_crack_is_rejected() {
        let mut mesh = KagomeMesh::new(2, 1, 1.0).unwrap();
        inject_crack(&mut mesh, 0).unwrap();
        assert_eq!(
            inject_crack(&mut mesh, 1).map(|c| c.len()),
            Err(MeshError::CrackAlreadyApplied)
        );
    }

    #[test]
    fn oversized_crack_is_truncated() {
        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        let cracked = inject_crack(&mut mesh, 50).unwrap().to_vec();
        assert_eq!(cracked, vec![NodeId::new(5), NodeId::new(6)]);
        assert_eq!(mesh.node_count(), 14);
        assert_eq!(mesh.split_nodes(), &[NodeId::new(12), NodeId::new(13)]);
    }

    #[test]
    fn on_plane_nodes_are_sorted_by_x() {
        let mesh = KagomeMesh::new(3, 1, 1.0).unwrap();
        let xs: Vec<i64> = on_plane_nodes(&mesh)
            .into_iter()
            .map(|id| mesh.node(id).unwrap().site().i)
            .collect();
        assert_eq!(xs, vec![-8, -4, -2, 2, 4, 8]);
    }

    #[test]
    fn above_element_without_the_node_is_inconsistent() {
        let mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        let node = NodeId::new(5);
        // Element 0 joins the apex to local node 2, both above the plane.
        let candidates = vec![ElementId::new(16), ElementId::new(0)];
        assert_eq!(
            above_plane_elements(&mesh, node, candidates),
            Err(MeshError::CrackRewireInconsistent {
                element: ElementId::new(0),
                node
            })
        );

        let above = above_plane_elements(&mesh, node, mesh.incident_elements(node)).unwrap();
        assert_eq!(above, vec![ElementId::new(16), ElementId::new(17)]);
    }
}
