//! Triangle mesh operations
//!
//! This module provides the geometric measurements behind a quote:
//! - Enclosed volume (divergence theorem)
//! - Surface area
//! - Axis-aligned bounding box
//!
//! Every operation is a pure single pass over the triangle sequence, O(n)
//! time and O(1) extra space, so latency scales linearly with triangle
//! count. Input size limits are the calling boundary's job.

use crate::error::{Error, Result};
use crate::model::{BoundingBox, Mesh, Vertex};
use nalgebra::Vector3;

/// Cubic millimeters per cubic centimeter
const MM3_PER_CM3: f64 = 1000.0;

fn to_vector(v: &Vertex) -> Vector3<f64> {
    Vector3::new(v.x, v.y, v.z)
}

/// Compute the signed volume of a mesh in mm³ using the divergence theorem
///
/// Each triangle contributes the signed volume of the tetrahedron it spans
/// with the origin, `v0 · (v1 × v2) / 6`. For a watertight mesh with
/// consistent outward winding the sum is the enclosed volume; inverted
/// winding flips the sign. The mesh is not validated against this
/// precondition — an open or inconsistently wound surface yields a
/// meaningless sum.
pub fn signed_volume(mesh: &Mesh) -> f64 {
    let mut volume = 0.0_f64;
    for triangle in &mesh.triangles {
        let [v0, v1, v2] = &triangle.vertices;
        volume += to_vector(v0).dot(&to_vector(v1).cross(&to_vector(v2)));
    }
    volume / 6.0
}

/// Compute the enclosed volume of a mesh in cm³
///
/// The absolute value of [`signed_volume`], converted from mm³, so a fully
/// inverted but otherwise watertight mesh still quotes correctly.
pub fn geometric_volume(mesh: &Mesh) -> f64 {
    signed_volume(mesh).abs() / MM3_PER_CM3
}

/// Compute the total surface area of a mesh in mm²
///
/// Sums `|(v1 − v0) × (v2 − v0)| / 2` over all triangles. Degenerate
/// triangles contribute zero area.
pub fn surface_area(mesh: &Mesh) -> f64 {
    let mut area = 0.0_f64;
    for triangle in &mesh.triangles {
        let [v0, v1, v2] = &triangle.vertices;
        let edge1 = to_vector(v1) - to_vector(v0);
        let edge2 = to_vector(v2) - to_vector(v0);
        area += edge1.cross(&edge2).norm() / 2.0;
    }
    area
}

/// Compute the axis-aligned bounding box of a mesh
///
/// Folds per-axis min/max over every vertex. Returns [`Error::EmptyMesh`]
/// for a mesh with no triangles, which has no meaningful bounds.
pub fn bounding_box(mesh: &Mesh) -> Result<BoundingBox> {
    if mesh.is_empty() {
        return Err(Error::EmptyMesh);
    }

    let mut min = Vertex::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Vertex::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

    for triangle in &mesh.triangles {
        for vertex in &triangle.vertices {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }
    }

    Ok(BoundingBox { min, max })
}
