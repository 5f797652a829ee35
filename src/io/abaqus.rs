//! Abaqus keyword deck (`.inp`) writer for Kagome beam meshes.
//!
//! # Layout
//! - `*HEADING` followed by a `**` comment title.
//! - `*NODE, NSET=BEAMS`: `<k>, <x>, <y>, 0` per node, 1-based, in node-list
//!   order (split crack copies included, at the end).
//! - `*ELEMENT, ELSET=BEAM_ELEMENTS, TYPE=B23`: `<k>, <start>, <end>` per
//!   element, with 1-based node numbers.
//! - Fixed material, rectangular beam section and a static perturbation step.
//!
//! # Limitations
//! - Material constants and section dimensions are literal, not parameters.
//! - No boundary conditions or loads are emitted.
//!
//! Coordinates use the shortest round-trip float form with a decimal point
//! (`3.0`, not `3`).

use crate::io::MeshWriter;
use crate::mesh::KagomeMesh;
use crate::mesh_error::MeshError;
use std::io::Write;

/// Default `**` title line under `*HEADING`.
pub const DEFAULT_TITLE: &str = "KAGOME ANALYSIS";

const TRAILER: &[&str] = &[
    "*MATERIAL, NAME=K_MAT",
    "*ELASTIC",
    "2E9, 0.3",
    "*BEAM SECTION, SECTION = RECT, ELSET= BEAM_ELEMENTS, MATERIAL=K_MAT, poisson = 0.3 ",
    "0.313, 0.313",
    "*Step, name=Step=1, nlgeom=NO, perturbation",
    "*Static",
];

/// Abaqus `.inp` writer.
#[derive(Debug, Clone)]
pub struct AbaqusWriter {
    title: String,
}

impl Default for AbaqusWriter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl AbaqusWriter {
    pub fn new(title: impl Into<String>) -> Self {
        AbaqusWriter {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl MeshWriter for AbaqusWriter {
    fn write<W: Write>(&self, mut writer: W, mesh: &KagomeMesh) -> Result<(), MeshError> {
        writeln!(writer, "*HEADING")?;
        writeln!(writer, "**{}", self.title)?;

        writeln!(writer, "*NODE, NSET=BEAMS")?;
        for (idx, [x, y]) in mesh.positions().enumerate() {
            writeln!(writer, "{}, {x:?}, {y:?}, 0", idx + 1)?;
        }

        writeln!(writer, "*ELEMENT, ELSET=BEAM_ELEMENTS, TYPE=B23")?;
        for (idx, element) in mesh.elements().iter().enumerate() {
            writeln!(
                writer,
                "{}, {}, {}",
                idx + 1,
                element.start.ordinal(),
                element.end.ordinal()
            )?;
        }

        for line in TRAILER {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_sections_appear_in_order() {
        let mesh = KagomeMesh::new(1, 1, 2.0).unwrap();
        let deck = AbaqusWriter::default().write_to_string(&mesh).unwrap();
        let lines: Vec<&str> = deck.lines().collect();

        assert_eq!(lines[0], "*HEADING");
        assert_eq!(lines[1], "**KAGOME ANALYSIS");
        assert_eq!(lines[2], "*NODE, NSET=BEAMS");
        assert_eq!(lines[3 + 12], "*ELEMENT, ELSET=BEAM_ELEMENTS, TYPE=B23");
        assert_eq!(lines.len(), 3 + 12 + 1 + 18 + TRAILER.len());
        assert_eq!(*lines.last().unwrap(), "*Static");
    }

    #[test]
    fn node_and_element_lines_are_one_based() {
        let mesh = KagomeMesh::new(1, 1, 2.0).unwrap();
        let deck = AbaqusWriter::new("T").write_to_string(&mesh).unwrap();
        let lines: Vec<&str> = deck.lines().collect();
        // Local node 1 sits at (-1.5 * strut, sqrt(3)/2 * strut).
        let [x, y] = mesh.scale().position(mesh.nodes()[1].site());
        assert_eq!(lines[4], format!("2, {x:?}, {y:?}, 0"));
        assert_eq!(lines[16], "1, 1, 3");
        assert_eq!(lines[16 + 17], "18, 3, 6");
    }

    #[test]
    fn whole_coordinates_keep_a_decimal_point() {
        let mesh = KagomeMesh::new(1, 1, 2.0).unwrap();
        let deck = AbaqusWriter::default().write_to_string(&mesh).unwrap();
        let lines: Vec<&str> = deck.lines().collect();
        // Local node 5 sits at (-strut, 0) = (-2.0, 0.0).
        assert_eq!(lines[3 + 5], "6, -2.0, 0.0, 0");
    }
}
