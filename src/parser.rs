//! STL decoding for binary and ASCII encodings
//!
//! STL has two historical encodings and no reliable magic bytes, so
//! encoding detection is structural: a buffer is treated as binary STL
//! exactly when its length equals `84 + n * 50`, where `n` is the
//! little-endian `u32` triangle count at byte offset 80. Anything else is
//! handed to the ASCII decoder. The check runs up front and routes the
//! buffer once; binary decoding failures are never retried as ASCII, so a
//! broken binary file cannot masquerade as a text-parse problem.
//!
//! Known limitation: the dispatch relies purely on size arithmetic. A
//! corrupted binary file whose length happens to satisfy `84 + n * 50`
//! decodes as garbage geometry instead of failing, and a size-mismatched
//! binary file falls through to the tolerant text scan, which may extract
//! nonsense vertices from its bytes. Callers that need stronger guarantees
//! must bound and verify uploads at the boundary.
//!
//! Binary layout per triangle record (50 bytes):
//!
//! | bytes  | content                                |
//! |--------|----------------------------------------|
//! | 0-11   | face normal, 3 × f32 LE (ignored)      |
//! | 12-47  | 3 vertices, each 3 × f32 LE            |
//! | 48-49  | attribute byte count (ignored)         |

use crate::error::{Error, Result};
use crate::model::{Mesh, Triangle, Vertex};

/// Length of the ignored binary STL header
const HEADER_LEN: usize = 80;
/// Length of the little-endian u32 triangle count following the header
const COUNT_LEN: usize = 4;
/// Length of one binary triangle record
const TRIANGLE_RECORD_LEN: usize = 50;
/// Length of the ignored face normal inside a record
const NORMAL_LEN: usize = 12;
/// Length of one encoded vertex (3 × f32)
const VERTEX_LEN: usize = 12;
/// Length of the ignored attribute byte count trailing a record
const ATTRIBUTE_LEN: usize = 2;

/// Decode an STL byte buffer into a mesh
///
/// Dispatches on the binary structural check described in the module docs:
/// an exact size match selects the binary decoder, anything else the ASCII
/// decoder. Either path returns [`Error::EmptyMesh`] when zero triangles
/// result.
pub fn parse_stl(data: &[u8]) -> Result<Mesh> {
    match declared_binary_len(data) {
        Some(expected) if expected == data.len() => parse_binary_stl(data),
        _ => parse_ascii_stl(data),
    }
}

/// Buffer length implied by the header-declared triangle count
///
/// Returns `None` when the buffer is too short to carry a count or the
/// implied length overflows `usize`.
fn declared_binary_len(data: &[u8]) -> Option<usize> {
    if data.len() < HEADER_LEN + COUNT_LEN {
        return None;
    }
    let count = u32::from_le_bytes([data[80], data[81], data[82], data[83]]);
    (count as usize)
        .checked_mul(TRIANGLE_RECORD_LEN)?
        .checked_add(HEADER_LEN + COUNT_LEN)
}

/// Decode a binary STL buffer
///
/// The 80-byte header is ignored per the format; exporters put free-form
/// text there. Face normals and attribute byte counts are skipped — the
/// geometry pass derives everything from vertex positions.
///
/// Returns [`Error::MalformedBinary`] when the buffer is undersized or its
/// length disagrees with the declared triangle count, and
/// [`Error::EmptyMesh`] when the count is zero.
pub fn parse_binary_stl(data: &[u8]) -> Result<Mesh> {
    if data.len() < HEADER_LEN + COUNT_LEN {
        return Err(Error::MalformedBinary(format!(
            "Buffer of {} bytes is smaller than the {}-byte header",
            data.len(),
            HEADER_LEN + COUNT_LEN
        )));
    }

    let expected = declared_binary_len(data)
        .ok_or_else(|| Error::MalformedBinary("Declared triangle count overflows".to_string()))?;
    if expected != data.len() {
        return Err(Error::binary_size_mismatch(expected, data.len()));
    }

    let count = (data.len() - HEADER_LEN - COUNT_LEN) / TRIANGLE_RECORD_LEN;
    if count == 0 {
        return Err(Error::EmptyMesh);
    }

    let mut triangles = Vec::with_capacity(count);
    let mut offset = HEADER_LEN + COUNT_LEN;

    for _ in 0..count {
        offset += NORMAL_LEN;

        let mut corners = [Vertex::new(0.0, 0.0, 0.0); 3];
        for corner in &mut corners {
            *corner = read_vertex(data, offset);
            offset += VERTEX_LEN;
        }

        offset += ATTRIBUTE_LEN;
        triangles.push(Triangle { vertices: corners });
    }

    Ok(Mesh { triangles })
}

/// Decode an ASCII STL buffer
///
/// Scans the token stream for `vertex` keywords and reads the three
/// coordinates following each one; every 3 consecutive vertices form a
/// triangle, matching how `facet` blocks lay them out. The surrounding
/// `solid`/`facet`/`loop` keywords are not required, so fragments and
/// concatenated solids still decode. A trailing incomplete vertex group is
/// discarded.
///
/// Returns [`Error::Parse`] when a coordinate token cannot be converted to
/// a float and [`Error::EmptyMesh`] when no complete triangle results.
pub fn parse_ascii_stl(data: &[u8]) -> Result<Mesh> {
    let text = String::from_utf8_lossy(data);

    let mut triangles = Vec::new();
    let mut pending: Vec<Vertex> = Vec::with_capacity(3);
    let mut tokens = text.split_whitespace();

    while let Some(token) = tokens.next() {
        if token != "vertex" {
            continue;
        }

        let x = parse_coordinate(tokens.next(), "vertex x coordinate")?;
        let y = parse_coordinate(tokens.next(), "vertex y coordinate")?;
        let z = parse_coordinate(tokens.next(), "vertex z coordinate")?;
        pending.push(Vertex::new(x, y, z));

        if pending.len() == 3 {
            triangles.push(Triangle::new(pending[0], pending[1], pending[2]));
            pending.clear();
        }
    }

    if triangles.is_empty() {
        return Err(Error::EmptyMesh);
    }

    Ok(Mesh { triangles })
}

/// Parse one coordinate token, or fail with field context
fn parse_coordinate(token: Option<&str>, field: &str) -> Result<f64> {
    let token = token.ok_or_else(|| {
        Error::Parse(format!("Unexpected end of input while reading {}", field))
    })?;
    token
        .parse::<f64>()
        .map_err(|_| Error::parse_error_with_context(field, token))
}

/// Read one vertex (3 × f32 LE) at `offset`, widening to f64
///
/// Callers guarantee `offset + 12 <= data.len()` via the structural size
/// check, so indexing cannot go out of bounds.
fn read_vertex(data: &[u8], offset: usize) -> Vertex {
    Vertex::new(
        read_f32(data, offset),
        read_f32(data, offset + 4),
        read_f32(data, offset + 8),
    )
}

fn read_f32(data: &[u8], offset: usize) -> f64 {
    f64::from(f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialize triangles into a binary STL buffer with the given header
    fn binary_stl(header: &[u8], triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
        let mut data = Vec::with_capacity(84 + triangles.len() * 50);
        let mut padded_header = [0u8; 80];
        padded_header[..header.len().min(80)]
            .copy_from_slice(&header[..header.len().min(80)]);
        data.extend_from_slice(&padded_header);
        data.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

        for triangle in triangles {
            data.extend_from_slice(&[0u8; 12]); // normal, ignored
            for vertex in triangle {
                for coordinate in vertex {
                    data.extend_from_slice(&coordinate.to_le_bytes());
                }
            }
            data.extend_from_slice(&0xFFFFu16.to_le_bytes()); // attribute, ignored
        }
        data
    }

    const ONE_TRIANGLE: [[[f32; 3]; 3]; 1] =
        [[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]]];

    #[test]
    fn test_parse_binary_single_triangle() {
        let data = binary_stl(b"exported by test", &ONE_TRIANGLE);
        let mesh = parse_stl(&data).unwrap();

        assert_eq!(mesh.len(), 1);
        assert_eq!(mesh.triangles[0].vertices[1], Vertex::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_binary_header_content_is_ignored() {
        // A binary file whose header starts with "solid" must still take
        // the binary path: dispatch is size-based, not content-based
        let data = binary_stl(b"solid exported-from-cad", &ONE_TRIANGLE);
        let mesh = parse_stl(&data).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn test_binary_zero_triangles_is_empty_mesh() {
        let data = binary_stl(b"", &[]);
        assert_eq!(data.len(), 84);
        assert!(matches!(parse_stl(&data), Err(Error::EmptyMesh)));
    }

    #[test]
    fn test_binary_size_mismatch_falls_back_to_ascii() {
        // Truncate one byte: the structural check fails, the buffer goes to
        // the text decoder, and with no vertex tokens the mesh is empty
        let mut data = binary_stl(b"", &ONE_TRIANGLE);
        data.pop();
        assert!(matches!(parse_stl(&data), Err(Error::EmptyMesh)));
    }

    #[test]
    fn test_parse_binary_stl_rejects_size_mismatch() {
        let mut data = binary_stl(b"", &ONE_TRIANGLE);
        data.pop();

        let err = parse_binary_stl(&data).unwrap_err();
        assert!(matches!(err, Error::MalformedBinary(_)));
        assert!(err.to_string().contains("134"));
        assert!(err.to_string().contains("133"));
    }

    #[test]
    fn test_parse_binary_stl_rejects_undersized_buffer() {
        let err = parse_binary_stl(&[0u8; 40]).unwrap_err();
        assert!(matches!(err, Error::MalformedBinary(_)));
    }

    #[test]
    fn test_parse_ascii_full_solid() {
        let text = "\
solid cube_fragment
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 10 0 0
      vertex 0 10 0
    endloop
  endfacet
  facet normal 0 0 1
    outer loop
      vertex 10 0 0
      vertex 10 10 0
      vertex 0 10 0
    endloop
  endfacet
endsolid cube_fragment
";
        let mesh = parse_stl(text.as_bytes()).unwrap();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.triangles[1].vertices[1], Vertex::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_parse_ascii_scientific_notation() {
        let text = "vertex 1e1 -2.5e-1 +3E0 vertex 0 0 0 vertex 1 1 1";
        let mesh = parse_ascii_stl(text.as_bytes()).unwrap();
        assert_eq!(mesh.triangles[0].vertices[0], Vertex::new(10.0, -0.25, 3.0));
    }

    #[test]
    fn test_parse_ascii_without_solid_keywords() {
        // Bare vertex statements decode too; the scan keys on the vertex
        // keyword alone
        let text = "vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n";
        let mesh = parse_ascii_stl(text.as_bytes()).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn test_parse_ascii_discards_trailing_incomplete_group() {
        let text = "\
vertex 0 0 0
vertex 1 0 0
vertex 0 1 0
vertex 5 5 5
";
        let mesh = parse_ascii_stl(text.as_bytes()).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn test_parse_ascii_bad_token_is_parse_error() {
        let text = "vertex 0 0 abc";
        let err = parse_ascii_stl(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("vertex z coordinate"));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_parse_ascii_truncated_vertex_is_parse_error() {
        let text = "vertex 1 2";
        let err = parse_ascii_stl(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("vertex z coordinate"));
    }

    #[test]
    fn test_parse_ascii_empty_text_is_empty_mesh() {
        assert!(matches!(
            parse_ascii_stl(b"solid nothing\nendsolid nothing\n"),
            Err(Error::EmptyMesh)
        ));
        assert!(matches!(parse_stl(b""), Err(Error::EmptyMesh)));
    }

    #[test]
    fn test_binary_f32_values_widen_exactly() {
        let data = binary_stl(b"", &[[[0.5, -0.25, 1.75], [2.0, 3.0, 4.0], [5.0, 6.0, 7.0]]]);
        let mesh = parse_stl(&data).unwrap();

        // Values exactly representable in f32 survive widening untouched
        assert_eq!(mesh.triangles[0].vertices[0], Vertex::new(0.5, -0.25, 1.75));
    }
}
