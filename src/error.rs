//! Error taxonomy for bundle lookups.
//!
//! Missing artifacts are never errors: lookups that find nothing yield empty output. Only
//! failures on a file that was located (unreadable, unparsable) surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading build artifacts or configuration.
#[derive(Debug, Error)]
pub enum EmbedError {
  /// An artifact exists but could not be read.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// A build manifest exists but is not a valid manifest document.
  #[error("failed to parse build manifest {}: {source}", .path.display())]
  ManifestParse {
    /// Manifest path that failed to parse.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// A configuration file exists but could not be parsed.
  #[error("failed to parse configuration {}: {source}", .path.display())]
  Config {
    /// Configuration path that failed to parse.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

/// Result alias used by the library entry points.
pub type EmbedResult<T> = Result<T, EmbedError>;
