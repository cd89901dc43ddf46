//! Shared utilities for integration tests
//!
//! Builders for STL buffers in both encodings plus the fixture meshes the
//! suites measure against. Coordinates are kept on values exactly
//! representable in f32 so a mesh round-trips bit-identically through
//! either encoding.

#![allow(dead_code)]

/// A triangle as three corner positions
pub type Tri = [[f32; 3]; 3];

/// Serialize triangles into a binary STL buffer
///
/// Zero-filled header, little-endian triangle count, then 50-byte records
/// with zeroed normals and attribute bytes.
pub fn binary_stl(triangles: &[Tri]) -> Vec<u8> {
    let mut data = Vec::with_capacity(84 + triangles.len() * 50);
    data.extend_from_slice(&[0u8; 80]);
    data.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for triangle in triangles {
        data.extend_from_slice(&[0u8; 12]);
        for vertex in triangle {
            for coordinate in vertex {
                data.extend_from_slice(&coordinate.to_le_bytes());
            }
        }
        data.extend_from_slice(&[0u8; 2]);
    }
    data
}

/// Serialize triangles into an ASCII STL document
pub fn ascii_stl(name: &str, triangles: &[Tri]) -> String {
    let mut text = format!("solid {}\n", name);
    for triangle in triangles {
        text.push_str("  facet normal 0 0 0\n    outer loop\n");
        for vertex in triangle {
            text.push_str(&format!(
                "      vertex {} {} {}\n",
                vertex[0], vertex[1], vertex[2]
            ));
        }
        text.push_str("    endloop\n  endfacet\n");
    }
    text.push_str(&format!("endsolid {}\n", name));
    text
}

/// Axis-aligned cube with the given edge length, min corner at the origin,
/// consistent outward winding (12 triangles)
pub fn cube(size: f32) -> Vec<Tri> {
    let s = size;
    vec![
        // Bottom (z = 0)
        [[0.0, 0.0, 0.0], [0.0, s, 0.0], [s, s, 0.0]],
        [[0.0, 0.0, 0.0], [s, s, 0.0], [s, 0.0, 0.0]],
        // Top (z = s)
        [[0.0, 0.0, s], [s, 0.0, s], [s, s, s]],
        [[0.0, 0.0, s], [s, s, s], [0.0, s, s]],
        // Front (y = 0)
        [[0.0, 0.0, 0.0], [s, 0.0, 0.0], [s, 0.0, s]],
        [[0.0, 0.0, 0.0], [s, 0.0, s], [0.0, 0.0, s]],
        // Back (y = s)
        [[0.0, s, 0.0], [0.0, s, s], [s, s, s]],
        [[0.0, s, 0.0], [s, s, s], [s, s, 0.0]],
        // Left (x = 0)
        [[0.0, 0.0, 0.0], [0.0, 0.0, s], [0.0, s, s]],
        [[0.0, 0.0, 0.0], [0.0, s, s], [0.0, s, 0.0]],
        // Right (x = s)
        [[s, 0.0, 0.0], [s, s, 0.0], [s, s, s]],
        [[s, 0.0, 0.0], [s, s, s], [s, 0.0, s]],
    ]
}

/// Unit right tetrahedron at the origin, outward winding (4 triangles)
///
/// Analytic volume 1/6 mm³, surface area 3/2 + √3/2 mm².
pub fn tetrahedron() -> Vec<Tri> {
    vec![
        [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]],
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    ]
}

/// Build a `Mesh` value directly from triangle positions
pub fn mesh_from(triangles: &[Tri]) -> stlquote::Mesh {
    stlquote::Mesh {
        triangles: triangles
            .iter()
            .map(|t| stlquote::Triangle::new(vertex(t[0]), vertex(t[1]), vertex(t[2])))
            .collect(),
    }
}

fn vertex(v: [f32; 3]) -> stlquote::Vertex {
    stlquote::Vertex::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]))
}
