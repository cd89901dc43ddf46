//! Data structures representing decoded STL meshes and analysis results

use crate::error::{Error, Result};

/// A vertex in 3D space, coordinates in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Whether all three coordinates are finite (not NaN, not infinite)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A triangle defined by three vertices in file-declared winding order
///
/// STL stores a flat triangle soup with no vertex sharing, so triangles
/// carry their vertices directly instead of indexing into a vertex pool.
/// Consistent winding across the mesh is required for volume sign
/// correctness but is not independently verified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The three corner vertices
    pub vertices: [Vertex; 3],
}

impl Triangle {
    /// Create a new triangle from three vertices
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// An ordered sequence of triangles decoded from an STL file
///
/// Meshes are transient: created by the parser, consumed by the geometry
/// pass, never persisted or cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// The triangles in file order
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles in the mesh
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh contains no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Validate the mesh invariants
    ///
    /// Returns `EmptyMesh` if the mesh has no triangles and
    /// `InvalidGeometry` if any vertex coordinate is NaN or infinite.
    /// Binary decoding can produce IEEE-754 specials from garbage bytes and
    /// the text decoder accepts tokens like "nan", so finiteness is checked
    /// here rather than trusted from the decoders.
    pub fn validate(&self) -> Result<()> {
        if self.triangles.is_empty() {
            return Err(Error::EmptyMesh);
        }
        for (i, triangle) in self.triangles.iter().enumerate() {
            if !triangle.vertices.iter().all(Vertex::is_finite) {
                return Err(Error::non_finite_coordinate(i));
            }
        }
        Ok(())
    }
}

/// The minimal axis-aligned box containing all mesh vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vertex,
    /// Maximum corner
    pub max: Vertex,
}

impl BoundingBox {
    /// Extent of the box along each axis (max − min), in millimeters
    pub fn size(&self) -> Vertex {
        Vertex::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }
}

/// The complete analysis output for one STL buffer
///
/// Owned solely by the caller after return; the engine keeps no copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Bounding box extent along each axis, in millimeters
    pub dimensions: Vertex,
    /// Enclosed volume of the mesh, in cm³
    pub geometric_volume: f64,
    /// Estimated deposited material volume (shell + infill), in cm³
    pub printed_volume: f64,
    /// Total triangle surface area, in mm²
    pub surface_area: f64,
    /// Estimated part weight, in grams
    pub weight: f64,
    /// Estimated print duration, in seconds
    pub print_time: f64,
    /// Wall-clock time spent in the engine, in milliseconds
    pub processing_time: f64,
}
