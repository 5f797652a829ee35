//! Build a cracked 10x10 Kagome lattice and write it as an Abaqus deck and a
//! VTK file for inspection.
//!
//! Usage: `cargo run --example kagome_crack [OUT_DIR]`

use kagome_mesh::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    let config = KagomeConfig {
        crack_length: Some(3),
        ..KagomeConfig::default()
    };
    let mesh = config.build()?;
    mesh.validate_invariants()?;

    println!("strut length: {}", mesh.scale().strut_length());
    println!("node count: {}", mesh.node_count());
    println!("element count: {}", mesh.element_count());
    for &id in mesh.cracked_nodes() {
        let [x, y] = mesh.position(id)?;
        println!("cracked node {}: ({x}, {y})", id.ordinal());
    }

    let stem = format!(
        "kagome_{}x{}_{}",
        config.x_count,
        config.y_count,
        config.crack_length.unwrap_or(0)
    );
    let inp = out_dir.join(format!("{stem}.inp"));
    AbaqusWriter::default().write(BufWriter::new(File::create(&inp)?), &mesh)?;
    let vtk = out_dir.join(format!("{stem}.vtk"));
    VtkWriter.write(BufWriter::new(File::create(&vtk)?), &mesh)?;

    println!("wrote {} and {}", inp.display(), vtk.display());
    Ok(())
}
