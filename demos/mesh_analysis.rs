//! Example: STL Mesh Analysis
//!
//! This example demonstrates the geometry pass in isolation:
//! - Decoding an STL file (binary or ASCII, detected structurally)
//! - Computing signed and enclosed volume
//! - Calculating surface area and the bounding box
//!
//! These measurements help with:
//! - Detecting inverted meshes (negative signed volume)
//! - Checking a part fits the build volume before quoting
//! - Sanity-checking exporter output

use stlquote::{mesh_ops, parser};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <stl_file>", args[0]);
        eprintln!();
        eprintln!("Example: {} part.stl", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    println!("Analyzing STL file: {}", filename);
    println!();

    let data = fs::read(filename)?;
    let mesh = parser::parse_stl(&data)?;
    mesh.validate()?;

    println!("Mesh Information:");
    println!("  Triangles: {}", mesh.len());
    println!();

    let signed_volume = mesh_ops::signed_volume(&mesh);
    println!("  Signed Volume: {:.6} mm³", signed_volume);
    if signed_volume < 0.0 {
        println!("    ⚠️  WARNING: Negative volume detected - mesh may be inverted!");
    } else {
        println!("    ✓ Positive volume - mesh orientation is correct");
    }

    println!(
        "  Enclosed Volume: {:.6} cm³",
        mesh_ops::geometric_volume(&mesh)
    );
    println!(
        "  Surface Area: {:.3} mm²",
        mesh_ops::surface_area(&mesh)
    );

    let bbox = mesh_ops::bounding_box(&mesh)?;
    let size = bbox.size();
    println!("  Bounding Box:");
    println!(
        "    Min: ({:.2}, {:.2}, {:.2})",
        bbox.min.x, bbox.min.y, bbox.min.z
    );
    println!(
        "    Max: ({:.2}, {:.2}, {:.2})",
        bbox.max.x, bbox.max.y, bbox.max.z
    );
    println!(
        "    Dimensions: {:.2} x {:.2} x {:.2} mm",
        size.x, size.y, size.z
    );

    Ok(())
}
