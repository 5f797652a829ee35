//! Kagome lattice generation from a grid of star tiles.
//!
//! Stars are laid out row-major (outer loop over rows, inner over columns).
//! Horizontally adjacent stars touch at two vertices, vertically adjacent
//! stars at their apexes, so the tiles close up into a Kagome lattice of
//! corner-sharing triangles.

pub mod star;

use crate::algs::dedup::{RawPool, deduplicate_nodes};
use crate::algs::recenter::{grid_center, recenter};
use crate::algs::rewire::rewire_elements;
use crate::geometry::{LatticeScale, LatticeSite};
use crate::mesh::{GridSize, KagomeMesh};
use crate::mesh_error::MeshError;
use star::Star;

/// Horizontal tile pitch in lattice units (three struts).
pub const TILE_PITCH_I: i64 = 6;
/// Vertical tile pitch in lattice units (`2 * sqrt(3)` struts).
pub const TILE_PITCH_J: i64 = 4;

/// Centre of the star at (`row`, `col`) before recentering.
pub fn star_center(row: usize, col: usize) -> LatticeSite {
    LatticeSite::new(col as i64 * TILE_PITCH_I, row as i64 * TILE_PITCH_J)
}

/// Generate every star of the grid and pool its nodes and edges in
/// generation order.
pub fn pool_stars(grid: GridSize) -> RawPool {
    let mut pool = RawPool::with_star_capacity(grid.star_count());
    for row in 0..grid.y_count {
        for col in 0..grid.x_count {
            pool.harvest(&Star::new(star_center(row, col)));
        }
    }
    pool
}

pub(crate) fn build_kagome(grid: GridSize, scale: LatticeScale) -> Result<KagomeMesh, MeshError> {
    let pool = pool_stars(grid);
    let dedup = deduplicate_nodes(&pool);
    let elements = rewire_elements(&pool, &dedup)?;
    let mut nodes = dedup.into_nodes();
    recenter(&mut nodes, grid_center(grid.x_count, grid.y_count));
    log::debug!(
        "kagome {}x{}: {} nodes, {} elements",
        grid.x_count,
        grid.y_count,
        nodes.len(),
        elements.len()
    );
    Ok(KagomeMesh::from_parts(grid, scale, nodes, elements))
}

/// Generate an `x_count` × `y_count` Kagome mesh with struts of
/// `strut_length`, centred on the origin.
pub fn kagome_mesh(
    x_count: usize,
    y_count: usize,
    strut_length: f64,
) -> Result<KagomeMesh, MeshError> {
    KagomeMesh::new(x_count, y_count, strut_length)
}

/// Build options for a (possibly cracked) Kagome mesh.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KagomeConfig {
    /// Stars along `x`.
    pub x_count: usize,
    /// Stars along `y`.
    pub y_count: usize,
    pub strut_length: f64,
    /// Number of on-plane nodes to split; `None` leaves the mesh intact.
    pub crack_length: Option<usize>,
}

impl Default for KagomeConfig {
    fn default() -> Self {
        Self {
            x_count: 10,
            y_count: 10,
            strut_length: 2.0,
            crack_length: None,
        }
    }
}

impl KagomeConfig {
    /// Check the inputs without building anything.
    pub fn validate(&self) -> Result<(), MeshError> {
        GridSize::try_new(self.x_count, self.y_count)?;
        LatticeScale::try_new(self.strut_length)?;
        Ok(())
    }

    /// Build the mesh and, if requested, inject the crack.
    pub fn build(&self) -> Result<KagomeMesh, MeshError> {
        let mut mesh = KagomeMesh::new(self.x_count, self.y_count, self.strut_length)?;
        if let Some(len) = self.crack_length {
            mesh.create_crack(len)?;
        }
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_pooled_row_major() {
        let pool = pool_stars(GridSize::try_new(2, 2).unwrap());
        assert_eq!(pool.sites().len(), 48);
        // Third star is row 1, col 0: its apex sits at (0, 4 + 2).
        assert_eq!(pool.sites()[24], LatticeSite::new(0, 6));
        assert_eq!(pool.sites()[12], LatticeSite::new(6, 2));
    }

    #[test]
    fn config_defaults_match_reference_run() {
        let cfg = KagomeConfig::default();
        assert_eq!((cfg.x_count, cfg.y_count), (10, 10));
        assert_eq!(cfg.strut_length, 2.0);
        assert_eq!(cfg.crack_length, None);
        cfg.validate().unwrap();
    }

    #[test]
    fn config_validation_reports_first_problem() {
        let cfg = KagomeConfig {
            y_count: 0,
            strut_length: 0.0,
            ..KagomeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(MeshError::InvalidGridDimensions {
                x_count: 10,
                y_count: 0
            })
        );
    }

    #[test]
    fn config_build_applies_crack() {
        let cfg = KagomeConfig {
            x_count: 3,
            y_count: 1,
            strut_length: 1.0,
            crack_length: Some(2),
        };
        let mesh = cfg.build().unwrap();
        assert!(mesh.is_cracked());
        assert_eq!(mesh.cracked_nodes().len(), 2);
        assert_eq!(mesh.node_count(), kagome_mesh(3, 1, 1.0).unwrap().node_count() + 2);
    }
}
