//! Legacy VTK (`.vtk`) writer for visual inspection of Kagome meshes.
//!
//! Writes an ASCII `UNSTRUCTURED_GRID` with one VTK line cell (type 3) per
//! element, plus point data:
//! - `cracked` (int): 1 for nodes split by the crack and their copies, 0
//!   otherwise, so viewers can colour the crack faces distinctly.
//! - `node_id` (int): position in the node list.

use crate::io::MeshWriter;
use crate::mesh::KagomeMesh;
use crate::mesh_error::MeshError;
use std::io::Write;

const VTK_LINE: u8 = 3;

/// Legacy VTK writer.
#[derive(Debug, Default, Clone)]
pub struct VtkWriter;

impl VtkWriter {
    fn write_int_scalars<W: Write>(
        writer: &mut W,
        name: &str,
        values: impl Iterator<Item = usize>,
    ) -> Result<(), MeshError> {
        writeln!(writer, "SCALARS {name} int 1")?;
        writeln!(writer, "LOOKUP_TABLE default")?;
        for value in values {
            writeln!(writer, "{value}")?;
        }
        Ok(())
    }
}

impl MeshWriter for VtkWriter {
    fn write<W: Write>(&self, mut writer: W, mesh: &KagomeMesh) -> Result<(), MeshError> {
        let mut cracked = vec![false; mesh.node_count()];
        for id in mesh.cracked_nodes().iter().chain(mesh.split_nodes()) {
            cracked[id.index()] = true;
        }

        writeln!(writer, "# vtk DataFile Version 3.0")?;
        writeln!(writer, "kagome-mesh")?;
        writeln!(writer, "ASCII")?;
        writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;
        writeln!(writer, "POINTS {} double", mesh.node_count())?;
        for [x, y] in mesh.positions() {
            writeln!(writer, "{x} {y} 0")?;
        }

        writeln!(
            writer,
            "CELLS {} {}",
            mesh.element_count(),
            3 * mesh.element_count()
        )?;
        for element in mesh.elements() {
            writeln!(writer, "2 {} {}", element.start.index(), element.end.index())?;
        }

        writeln!(writer, "CELL_TYPES {}", mesh.element_count())?;
        for _ in mesh.elements() {
            writeln!(writer, "{VTK_LINE}")?;
        }

        writeln!(writer, "POINT_DATA {}", mesh.node_count())?;
        Self::write_int_scalars(&mut writer, "cracked", cracked.iter().map(|&c| usize::from(c)))?;
        Self::write_int_scalars(&mut writer, "node_id", 0..mesh.node_count())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_counts() {
        let mesh = KagomeMesh::new(2, 1, 1.0).unwrap();
        let out = VtkWriter.write_to_string(&mesh).unwrap();
        assert!(out.starts_with("# vtk DataFile Version 3.0\n"));
        assert!(out.contains("POINTS 22 double\n"));
        assert!(out.contains("CELLS 36 108\n"));
        assert!(out.contains("CELL_TYPES 36\n"));
        assert!(out.contains("POINT_DATA 22\n"));
    }

    #[test]
    fn cracked_nodes_are_flagged() {
        let mut mesh = KagomeMesh::new(1, 1, 1.0).unwrap();
        mesh.create_crack(1).unwrap();
        let out = VtkWriter.write_to_string(&mesh).unwrap();
        let flags: Vec<&str> = out
            .lines()
            .skip_while(|l| *l != "SCALARS cracked int 1")
            .skip(2)
            .take(mesh.node_count())
            .collect();
        assert_eq!(flags.len(), 13);
        assert_eq!(flags[5], "1");
        assert_eq!(flags[12], "1");
        assert_eq!(flags.iter().filter(|f| **f == "1").count(), 2);
    }
}
