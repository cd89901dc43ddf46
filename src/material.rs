//! Filament material catalog used for quoting
//!
//! The print shop quotes against a fixed set of stocked filaments, each
//! with a nominal density (driving the weight estimate) and a per-gram
//! price. The catalog lives in the engine so that a quote derived from a
//! material id is reproducible, not dependent on whatever the front end
//! happened to send.

use crate::estimator::ProcessParameters;

/// A stocked filament material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Polylactic acid — the default, beginner-friendly material
    Pla,
    /// Acrylonitrile butadiene styrene — functional parts
    Abs,
    /// Polyethylene terephthalate glycol — chemical-resistant, clear
    Petg,
    /// Thermoplastic polyurethane — flexible, rubber-like
    Tpu,
}

impl Material {
    /// All stocked materials, in catalog order
    pub const ALL: [Material; 4] = [Material::Pla, Material::Abs, Material::Petg, Material::Tpu];

    /// Get a human-readable name for this material
    pub fn name(&self) -> &'static str {
        match self {
            Material::Pla => "PLA (Polylactic Acid)",
            Material::Abs => "ABS (Acrylonitrile Butadiene Styrene)",
            Material::Petg => "PETG (Polyethylene Terephthalate Glycol)",
            Material::Tpu => "TPU (Thermoplastic Polyurethane)",
        }
    }

    /// Get the catalog id for this material
    pub fn id(&self) -> &'static str {
        match self {
            Material::Pla => "pla",
            Material::Abs => "abs",
            Material::Petg => "petg",
            Material::Tpu => "tpu",
        }
    }

    /// Get a material from its catalog id
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "pla" => Some(Material::Pla),
            "abs" => Some(Material::Abs),
            "petg" => Some(Material::Petg),
            "tpu" => Some(Material::Tpu),
            _ => None,
        }
    }

    /// Nominal filament density in g/cm³
    pub fn density(&self) -> f64 {
        match self {
            Material::Pla => 1.25,
            Material::Abs => 1.04,
            Material::Petg => 1.27,
            Material::Tpu => 1.21,
        }
    }

    /// Quoted price per gram of deposited material, in USD
    pub fn price_per_gram(&self) -> f64 {
        match self {
            Material::Pla => 0.05,
            Material::Abs => 0.07,
            Material::Petg => 0.08,
            Material::Tpu => 0.12,
        }
    }

    /// Default process parameters for this material
    ///
    /// Density comes from the catalog; every other field keeps the
    /// engine-wide default. Callers tune from here with the `with_*`
    /// builder methods.
    pub fn parameters(&self) -> ProcessParameters {
        ProcessParameters::new(self.density())
    }
}

/// Quote a price in USD for the given part weight and material
///
/// Weight in grams times the material's per-gram rate. Setup fees,
/// minimum-order rules, and discounts are order-boundary concerns and stay
/// out of the engine.
pub fn estimate_price(weight: f64, material: Material) -> f64 {
    weight * material.price_per_gram()
}
