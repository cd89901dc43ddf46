//! Manufacturing estimation from geometric measurements
//!
//! Combines the geometry pass output with process parameters into the
//! numbers a quote needs: deposited material volume, weight, and print
//! duration. The estimates are intentionally coarse — they model a
//! shell-plus-infill FDM print with a constant volumetric flow rate, which
//! is accurate enough for pricing but not for scheduling a printer.

use crate::error::{Error, Result};
use crate::model::BoundingBox;

/// Cubic millimeters per cubic centimeter
const MM3_PER_CM3: f64 = 1000.0;

/// Process parameters for print estimation
///
/// Construct with [`ProcessParameters::new`], which fills every optional
/// field with its default, then override individual fields through the
/// `with_*` methods. The record is fully populated from the start, so
/// [`validate`](ProcessParameters::validate) is total: it checks every
/// field, not just the ones a caller happened to set.
///
/// # Example
///
/// ```
/// use stlquote::ProcessParameters;
///
/// let params = ProcessParameters::new(1.25)
///     .with_layer_height(0.28)
///     .with_infill_percentage(0.35);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessParameters {
    /// Filament density in g/cm³ (required, > 0)
    pub density: f64,
    /// Layer height in mm (> 0)
    pub layer_height: f64,
    /// Print head speed in mm/s (> 0)
    pub print_speed: f64,
    /// Nozzle diameter in mm (> 0)
    pub nozzle_diameter: f64,
    /// Infill fraction in [0, 1]
    pub infill_percentage: f64,
    /// Perimeter shell thickness in mm (> 0)
    pub wall_thickness: f64,
    /// Combined top and bottom layer thickness in mm (> 0)
    pub top_bottom_thickness: f64,
}

impl ProcessParameters {
    /// Default layer height in mm
    pub const DEFAULT_LAYER_HEIGHT: f64 = 0.2;
    /// Default print speed in mm/s
    pub const DEFAULT_PRINT_SPEED: f64 = 50.0;
    /// Default nozzle diameter in mm
    pub const DEFAULT_NOZZLE_DIAMETER: f64 = 0.4;
    /// Default infill fraction
    pub const DEFAULT_INFILL_PERCENTAGE: f64 = 0.2;
    /// Default wall thickness in mm (two 0.4 mm perimeters)
    pub const DEFAULT_WALL_THICKNESS: f64 = 0.8;
    /// Default top/bottom thickness in mm (four 0.2 mm layers)
    pub const DEFAULT_TOP_BOTTOM_THICKNESS: f64 = 0.8;

    /// Create parameters for the given filament density with every other
    /// field at its default
    pub fn new(density: f64) -> Self {
        Self {
            density,
            layer_height: Self::DEFAULT_LAYER_HEIGHT,
            print_speed: Self::DEFAULT_PRINT_SPEED,
            nozzle_diameter: Self::DEFAULT_NOZZLE_DIAMETER,
            infill_percentage: Self::DEFAULT_INFILL_PERCENTAGE,
            wall_thickness: Self::DEFAULT_WALL_THICKNESS,
            top_bottom_thickness: Self::DEFAULT_TOP_BOTTOM_THICKNESS,
        }
    }

    /// Set the layer height in mm
    pub fn with_layer_height(mut self, layer_height: f64) -> Self {
        self.layer_height = layer_height;
        self
    }

    /// Set the print speed in mm/s
    pub fn with_print_speed(mut self, print_speed: f64) -> Self {
        self.print_speed = print_speed;
        self
    }

    /// Set the nozzle diameter in mm
    pub fn with_nozzle_diameter(mut self, nozzle_diameter: f64) -> Self {
        self.nozzle_diameter = nozzle_diameter;
        self
    }

    /// Set the infill fraction in [0, 1]
    pub fn with_infill_percentage(mut self, infill_percentage: f64) -> Self {
        self.infill_percentage = infill_percentage;
        self
    }

    /// Set the wall thickness in mm
    pub fn with_wall_thickness(mut self, wall_thickness: f64) -> Self {
        self.wall_thickness = wall_thickness;
        self
    }

    /// Set the combined top/bottom thickness in mm
    pub fn with_top_bottom_thickness(mut self, top_bottom_thickness: f64) -> Self {
        self.top_bottom_thickness = top_bottom_thickness;
        self
    }

    /// Check every field against its domain
    ///
    /// Returns the first violation as [`Error::InvalidParameter`], naming
    /// the field, the offending value, and the constraint. The pipeline
    /// runs this before touching the mesh, so a bad parameter aborts the
    /// call with no computation performed.
    pub fn validate(&self) -> Result<()> {
        require_positive("density", self.density)?;
        require_positive("layer_height", self.layer_height)?;
        require_positive("print_speed", self.print_speed)?;
        require_positive("nozzle_diameter", self.nozzle_diameter)?;
        // A NaN fraction fails the range test and is rejected with the rest
        let infill_in_range = self.infill_percentage >= 0.0 && self.infill_percentage <= 1.0;
        if !infill_in_range {
            return Err(Error::invalid_parameter(
                "infill_percentage",
                self.infill_percentage,
                "in [0, 1]",
            ));
        }
        require_positive("wall_thickness", self.wall_thickness)?;
        require_positive("top_bottom_thickness", self.top_bottom_thickness)?;
        Ok(())
    }
}

/// Reject zero, negative, and NaN values for a strictly positive field
fn require_positive(field: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(field, value, "> 0"))
    }
}

/// Estimate the deposited material volume in cm³
///
/// Decomposes the part into perimeter walls, top/bottom layers, and an
/// infilled core:
///
/// ```text
/// wall       = surface_area(mm²) × wall_thickness(mm) / 1000
/// top_bottom = size.x × size.y (mm²) × top_bottom_thickness(mm) / 1000
/// core       = max(0, geometric_volume − wall − top_bottom)
/// printed    = wall + top_bottom + core × infill_percentage
/// ```
///
/// The top/bottom term uses the bounding box's XY footprint rather than the
/// actual top/bottom-facing surface, which overestimates for non-box-like
/// shapes (spheres, tapers). Known modeling approximation; quotes for such
/// shapes carry the bias.
///
/// Assumes `params` has already passed
/// [`validate`](ProcessParameters::validate).
pub fn printed_volume(
    geometric_volume: f64,
    surface_area: f64,
    bbox: &BoundingBox,
    params: &ProcessParameters,
) -> f64 {
    let wall_volume = surface_area * params.wall_thickness / MM3_PER_CM3;

    let size = bbox.size();
    let top_bottom_area = size.x * size.y;
    let top_bottom_volume = top_bottom_area * params.top_bottom_thickness / MM3_PER_CM3;

    let core_volume = (geometric_volume - wall_volume - top_bottom_volume).max(0.0);
    let infill_volume = core_volume * params.infill_percentage;

    wall_volume + top_bottom_volume + infill_volume
}

/// Estimate the print duration in seconds
///
/// Constant-flow approximation: the nozzle continuously deposits
/// `nozzle_diameter × layer_height × print_speed` mm³/s. Travel moves,
/// acceleration, and retraction are ignored, so real prints run longer;
/// the figure is intended for quoting, not scheduling.
///
/// Assumes `params` has already passed
/// [`validate`](ProcessParameters::validate).
pub fn estimate_print_time(printed_volume: f64, params: &ProcessParameters) -> f64 {
    let flow_rate = params.nozzle_diameter * params.layer_height * params.print_speed;
    printed_volume * MM3_PER_CM3 / flow_rate
}

/// Format a duration in seconds as hours and minutes, e.g. "2h 05m"
///
/// Sub-minute remainders are truncated, matching how the order front end
/// presents print times.
pub fn format_duration(seconds: f64) -> String {
    let total_minutes = (seconds / 60.0).floor() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{}h {:02}m", hours, minutes)
}
