//! Error types for the chest mesher.

use thiserror::Error;

/// Result type alias using MesherError.
pub type Result<T> = std::result::Result<T, MesherError>;

/// Main error type for chest geometry operations.
#[derive(Error, Debug)]
pub enum MesherError {
    /// The prerequisite renderer setup step failed; no renderer was built.
    #[error("Renderer setup failed: {0}")]
    Setup(String),

    /// Box extents are inverted or leave the unit cube.
    #[error("Invalid box extents: {0}")]
    InvalidBox(String),

    /// Rotation angle is not a multiple of 90 degrees.
    #[error("Invalid rotation: {0} degrees (expected 0, 90, 180 or 270)")]
    InvalidRotation(i32),

    /// Texture index does not fit in the renderer's texture slots.
    #[error("Texture index {0} out of range (maximum slot count is 16)")]
    TextureIndexOutOfRange(u8),

    /// Malformed input data (scene files, CLI arguments).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failed to parse or write JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to export mesh.
    #[error("Export error: {0}")]
    Export(String),
}
