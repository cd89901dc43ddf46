//! # stlquote
//!
//! A pure Rust STL geometry-analysis and 3D-print quoting engine.
//!
//! This library ingests an STL file as a byte buffer, reconstructs its
//! triangulated surface, and derives the manufacturing estimates used to
//! quote price and feasibility before an order is accepted: volume,
//! surface area, bounding dimensions, material weight, and print duration.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Binary and ASCII STL decoding with structural encoding detection
//! - Single-pass geometric analysis (volume, surface area, bounding box)
//! - Shell-plus-infill print estimation (material volume, weight, time)
//! - Filament catalog with per-material densities and pricing
//!
//! The engine is synchronous, stateless, and performs no I/O: callers
//! supply bytes already read from an upload and persist the result
//! themselves. Concurrent calls on independent buffers are safe without
//! locking.
//!
//! ## Example
//!
//! ```no_run
//! use stlquote::{process_stl_file, Material};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("model.stl")?;
//! let params = Material::Pla.parameters();
//!
//! let result = process_stl_file(&data, &params)?;
//!
//! println!("Volume: {:.2} cm³", result.geometric_volume);
//! println!("Weight: {:.1} g", result.weight);
//! println!("Print time: {:.0} s", result.print_time);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod estimator;
pub mod material;
pub mod mesh_ops;
pub mod model;
pub mod parser;

pub use error::{Error, Result};
pub use estimator::{ProcessParameters, estimate_print_time, format_duration, printed_volume};
pub use material::{Material, estimate_price};
pub use model::{BoundingBox, CalculationResult, Mesh, Triangle, Vertex};

use std::time::Instant;

/// Analyze an STL byte buffer and derive manufacturing estimates
///
/// Runs the full pipeline: validate parameters, decode the STL (binary or
/// ASCII), validate the mesh, measure geometry, and estimate the print.
/// The returned record includes the wall-clock `processing_time` of the
/// whole operation in milliseconds.
///
/// Any failure propagates immediately as a typed [`Error`]; there are no
/// partial results and no retries. Given the same inputs the result is
/// identical apart from `processing_time`.
///
/// # Arguments
///
/// * `data` - Raw STL file bytes, either encoding
/// * `params` - Process parameters; see [`ProcessParameters::new`] for the
///   defaults and [`Material::parameters`] for catalog presets
///
/// # Example
///
/// ```no_run
/// use stlquote::{process_stl_file, ProcessParameters};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = std::fs::read("model.stl")?;
/// let result = process_stl_file(&data, &ProcessParameters::new(1.25))?;
/// println!("{:.1} g, {:.0} s", result.weight, result.print_time);
/// # Ok(())
/// # }
/// ```
pub fn process_stl_file(data: &[u8], params: &ProcessParameters) -> Result<CalculationResult> {
    let started = Instant::now();

    // Bad parameters abort before any mesh work happens
    params.validate()?;

    let mesh = parser::parse_stl(data)?;
    mesh.validate()?;

    let geometric_volume = mesh_ops::geometric_volume(&mesh);
    let surface_area = mesh_ops::surface_area(&mesh);
    let bbox = mesh_ops::bounding_box(&mesh)?;

    let printed_volume = estimator::printed_volume(geometric_volume, surface_area, &bbox, params);
    let weight = printed_volume * params.density;
    let print_time = estimator::estimate_print_time(printed_volume, params);

    Ok(CalculationResult {
        dimensions: bbox.size(),
        geometric_volume,
        printed_volume,
        surface_area,
        weight,
        print_time,
        processing_time: started.elapsed().as_secs_f64() * 1000.0,
    })
}
