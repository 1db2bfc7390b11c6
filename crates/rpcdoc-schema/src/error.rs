use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an endpoint schema.
#[derive(Debug, Error)]
pub enum SchemaError {
  /// The schema file could not be read from disk.
  #[error("failed to read schema file `{path}`: {source}")]
  ReadFile {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The schema is not valid JSON or does not match the endpoint layout.
  #[error("failed to parse schema `{path}`: {source}")]
  Parse {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },
}
