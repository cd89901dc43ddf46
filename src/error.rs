//! Error types for STL analysis
//!
//! This module provides error handling for STL decoding and quote
//! calculation. All errors include error codes for categorization and
//! enough context to surface a useful message at the order-intake boundary.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: STL decoding errors
//! - **E2xxx**: Mesh validation errors
//! - **E3xxx**: Process parameter errors
//!
//! ## Error Codes
//!
//! - `E1001`: Binary STL layout inconsistent with buffer size
//! - `E1002`: Non-numeric vertex token in ASCII STL
//! - `E2001`: No triangles decoded from either encoding
//! - `E2002`: Non-finite vertex coordinate
//! - `E3001`: Process parameter outside its domain
//!
//! Every error is terminal for the call that produced it: the engine never
//! retries or returns partial results.

use thiserror::Error;

/// Result type for STL analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding an STL file or computing a quote
#[derive(Error, Debug)]
pub enum Error {
    /// Binary STL layout inconsistent with the buffer size
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Truncated upload
    /// - Triangle count field corrupted
    /// - File is not an STL at all
    ///
    /// At the dispatch layer a size mismatch routes the buffer to the ASCII
    /// decoder instead of surfacing this error; it is returned only when the
    /// binary decoder is invoked directly.
    #[error("[E1001] Malformed binary STL: {0}")]
    MalformedBinary(String),

    /// Failed to convert a vertex token to a number in ASCII mode
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Corrupted or hand-edited ASCII STL
    /// - Locale-formatted numbers (e.g. "1,5" instead of "1.5")
    /// - A binary file misrouted to the text decoder
    #[error("[E1002] Parse error: {0}")]
    Parse(String),

    /// No triangles were decoded from either encoding
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Binary header declaring zero triangles
    /// - ASCII file with no `vertex` statements
    /// - Empty upload
    #[error("[E2001] No valid triangles found in STL data")]
    EmptyMesh,

    /// A decoded vertex coordinate is NaN or infinite
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Exporter bugs writing NaN coordinates
    /// - Garbage bytes decoded as IEEE-754 specials
    #[error("[E2002] Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A process parameter is outside its stated domain
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Zero or negative density, layer height, speed, or thickness
    /// - Infill fraction outside [0, 1]
    ///
    /// Parameters are validated before any geometry work begins, so this
    /// error guarantees no computation was performed.
    #[error("[E3001] Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::Parse(format!("Failed to parse floating-point number: {}", err))
    }
}

impl Error {
    /// Create a Parse error with context about what was being parsed
    ///
    /// # Arguments
    /// * `field_name` - The name of the field being parsed (e.g., "vertex x coordinate")
    /// * `value` - The value that failed to parse
    pub fn parse_error_with_context(field_name: &str, value: &str) -> Self {
        Error::Parse(format!(
            "Failed to parse '{}': expected a floating-point number, got '{}'",
            field_name, value
        ))
    }

    /// Create an InvalidParameter error naming the field, value, and constraint
    ///
    /// # Arguments
    /// * `field` - The parameter name (e.g., "density")
    /// * `value` - The offending value
    /// * `constraint` - The domain the value must lie in (e.g., "> 0")
    pub fn invalid_parameter(field: &str, value: f64, constraint: &str) -> Self {
        Error::InvalidParameter(format!("'{}' must be {}, got {}", field, constraint, value))
    }

    /// Create an InvalidGeometry error for a non-finite coordinate
    ///
    /// # Arguments
    /// * `triangle_index` - Index of the triangle containing the bad vertex
    pub fn non_finite_coordinate(triangle_index: usize) -> Self {
        Error::InvalidGeometry(format!(
            "Non-finite vertex coordinate in triangle {}",
            triangle_index
        ))
    }

    /// Create a MalformedBinary error describing a size mismatch
    ///
    /// # Arguments
    /// * `expected` - Byte length implied by the declared triangle count
    /// * `actual` - Actual buffer length
    pub fn binary_size_mismatch(expected: usize, actual: usize) -> Self {
        Error::MalformedBinary(format!("Expected {} bytes, got {}", expected, actual))
    }
}
