//! Hexagram ("star") tile generator.
//!
//! A star is six equilateral triangles arranged around a centre point, laid
//! out in five rows of 1, 4, 2, 4 and 1 nodes:
//!
//! ```text
//!              0
//!      1    2     3    4
//!         5         6
//!      7    8     9    10
//!              11
//! ```
//!
//! The local node offsets and the 18-edge adjacency are fixed tables; a star
//! only translates them to its centre. Stars never deduplicate anything, and
//! are discarded once the mesh has harvested their nodes and edges.

use crate::geometry::{LatticeScale, LatticeSite};

/// Number of nodes in one star.
pub const STAR_NODE_COUNT: usize = 12;
/// Number of edges in one star (six triangles, three edges each).
pub const STAR_EDGE_COUNT: usize = 18;

/// Local node offsets from the star centre, in lattice units.
pub const STAR_NODE_OFFSETS: [LatticeSite; STAR_NODE_COUNT] = [
    // first row
    LatticeSite::new(0, 2),
    // second row
    LatticeSite::new(-3, 1),
    LatticeSite::new(-1, 1),
    LatticeSite::new(1, 1),
    LatticeSite::new(3, 1),
    // third row
    LatticeSite::new(-2, 0),
    LatticeSite::new(2, 0),
    // fourth row
    LatticeSite::new(-3, -1),
    LatticeSite::new(-1, -1),
    LatticeSite::new(1, -1),
    LatticeSite::new(3, -1),
    // fifth row
    LatticeSite::new(0, -2),
];

/// The six triangles of a star, clockwise from the top.
pub const STAR_TRIANGLES: [[usize; 3]; 6] = [
    [0, 2, 3],
    [3, 4, 6],
    [6, 9, 10],
    [8, 9, 11],
    [5, 7, 8],
    [1, 2, 5],
];

/// Local edge between two star nodes, by local index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalEdge {
    pub start: usize,
    pub end: usize,
}

/// The 18 star edges: triangle `[a, b, c]` yields `a-b`, `a-c`, `b-c`.
pub const STAR_EDGES: [LocalEdge; STAR_EDGE_COUNT] = triangle_edges(&STAR_TRIANGLES);

const fn triangle_edges(triangles: &[[usize; 3]; 6]) -> [LocalEdge; STAR_EDGE_COUNT] {
    let mut edges = [LocalEdge { start: 0, end: 0 }; STAR_EDGE_COUNT];
    let mut t = 0;
    while t < triangles.len() {
        let [a, b, c] = triangles[t];
        edges[3 * t] = LocalEdge { start: a, end: b };
        edges[3 * t + 1] = LocalEdge { start: a, end: c };
        edges[3 * t + 2] = LocalEdge { start: b, end: c };
        t += 1;
    }
    edges
}

/// One star tile placed at `center`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Star {
    sites: [LatticeSite; STAR_NODE_COUNT],
}

impl Star {
    /// Place a star at `center`.
    pub fn new(center: LatticeSite) -> Self {
        let sites = STAR_NODE_OFFSETS.map(|offset| center.offset(offset));
        Star { sites }
    }

    /// The 12 local node sites, in local index order.
    #[inline]
    pub fn sites(&self) -> &[LatticeSite; STAR_NODE_COUNT] {
        &self.sites
    }

    /// The 18 local edges; identical for every star.
    #[inline]
    pub fn edges(&self) -> &'static [LocalEdge; STAR_EDGE_COUNT] {
        &STAR_EDGES
    }

    /// Physical positions of the 12 local nodes.
    pub fn positions(&self, scale: &LatticeScale) -> [[f64; 2]; STAR_NODE_COUNT] {
        self.sites.map(|site| scale.position(site))
    }
}
