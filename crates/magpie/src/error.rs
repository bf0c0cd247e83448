//! Error types for the high-level API.

use thiserror::Error;

/// Result type for the high-level API.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Context`](crate::Context) and [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum Error {
    /// Operator or buffer layout rejected before any pixel was touched.
    #[error(transparent)]
    Ops(#[from] magpie_ops::OpsError),

    /// Buffer construction or addressing failed.
    #[error(transparent)]
    Core(#[from] magpie_core::Error),

    /// Invalid or missing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
