//! Mesh output.
//!
//! Writers are read-only consumers of a finished [`KagomeMesh`]: they format
//! the current node and element lists and never feed anything back.

pub mod abaqus;
pub mod vtk;

use crate::mesh::KagomeMesh;
use crate::mesh_error::MeshError;
use std::io::Write;

pub use abaqus::AbaqusWriter;
pub use vtk::VtkWriter;

/// Trait for writers that serialize a Kagome mesh.
pub trait MeshWriter {
    /// Write `mesh` to `writer`.
    fn write<W: Write>(&self, writer: W, mesh: &KagomeMesh) -> Result<(), MeshError>;

    /// Convenience: write into an in-memory string.
    fn write_to_string(&self, mesh: &KagomeMesh) -> Result<String, MeshError> {
        let mut buf = Vec::new();
        self.write(&mut buf, mesh)?;
        String::from_utf8(buf).map_err(|e| MeshError::MeshIo(e.to_string()))
    }
}
