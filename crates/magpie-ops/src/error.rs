//! Error types for pixel operations.

use thiserror::Error;

/// Error type for pixel operations.
///
/// Every variant is raised before any output byte is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Mode id, mode name or compositing flag outside its enumeration.
    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    /// Buffers don't share a supported alpha representation.
    #[error("unsupported buffer layout: {0}")]
    UnsupportedLayout(String),

    /// Buffer construction or addressing failed.
    #[error(transparent)]
    Core(#[from] magpie_core::Error),
}

/// Result type for pixel operations.
pub type OpsResult<T> = Result<T, OpsError>;
