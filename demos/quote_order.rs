//! Example: Quote an STL upload against the material catalog
//!
//! Runs the full pipeline the order-intake boundary uses: decode, measure,
//! estimate, then price the part for every stocked material.

use stlquote::{Material, estimate_price, format_duration, process_stl_file};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <stl_file>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    let data = fs::read(filename)?;

    println!("Quoting: {}", filename);
    println!();

    for material in Material::ALL {
        let result = process_stl_file(&data, &material.parameters())?;
        let price = estimate_price(result.weight, material);

        println!("{}", material.name());
        println!(
            "  Dimensions: {:.1} x {:.1} x {:.1} mm",
            result.dimensions.x, result.dimensions.y, result.dimensions.z
        );
        println!("  Material: {:.2} cm³ deposited, {:.1} g", result.printed_volume, result.weight);
        println!("  Print time: {}", format_duration(result.print_time));
        println!("  Price: ${:.2}", price);
        println!("  (analyzed in {:.2} ms)", result.processing_time);
        println!();
    }

    Ok(())
}
