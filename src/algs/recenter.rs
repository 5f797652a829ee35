//! Recentering of a star grid on the origin.

use crate::geometry::LatticeSite;
use crate::mesh_generation::{TILE_PITCH_I, TILE_PITCH_J};
use crate::topology::node::Node;

/// Geometric centre of an `x_count` × `y_count` star grid whose first star is
/// centred at the origin.
///
/// The grid spans `(count - 1)` pitches in each direction and every star is
/// symmetric about its own centre, so the grid centre is half that span. The
/// pitches are even in lattice units, which keeps the centre on a site.
pub fn grid_center(x_count: usize, y_count: usize) -> LatticeSite {
    let span = |count: usize, pitch: i64| (count.saturating_sub(1) as i64) * pitch / 2;
    LatticeSite::new(span(x_count, TILE_PITCH_I), span(y_count, TILE_PITCH_J))
}

/// Translate every node so that `center` moves to the origin.
///
/// Not idempotent: each call shifts again.
pub fn recenter(nodes: &mut [Node], center: LatticeSite) {
    let shift = center.negated();
    for node in nodes {
        node.translate(shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_star_needs_no_shift() {
        assert_eq!(grid_center(1, 1), LatticeSite::ORIGIN);
    }

    #[test]
    fn center_is_half_the_grid_span() {
        assert_eq!(grid_center(3, 1), LatticeSite::new(6, 0));
        assert_eq!(grid_center(2, 2), LatticeSite::new(3, 2));
        assert_eq!(grid_center(10, 10), LatticeSite::new(27, 18));
    }

    #[test]
    fn recenter_shifts_every_node_once() {
        let mut nodes = vec![Node::new(LatticeSite::new(3, 2)), Node::new(LatticeSite::new(0, 0))];
        recenter(&mut nodes, LatticeSite::new(3, 2));
        assert_eq!(nodes[0].site(), LatticeSite::ORIGIN);
        assert_eq!(nodes[1].site(), LatticeSite::new(-3, -2));

        recenter(&mut nodes, LatticeSite::new(3, 2));
        assert_eq!(nodes[0].site(), LatticeSite::new(-3, -2));
    }
}
