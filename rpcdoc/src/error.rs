use std::io;

use rpcdoc_schema::SchemaError;
use thiserror::Error;

/// Top-level error type for the rpcdoc crate.
#[derive(Debug, Error)]
pub enum RpcdocError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Template error: {0}")]
  Template(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error(transparent)]
  Schema(#[from] SchemaError),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("Invalid date: {0}")]
  Date(#[from] jiff::Error),
}

impl From<tera::Error> for RpcdocError {
  fn from(e: tera::Error) -> Self {
    Self::Template(e.to_string())
  }
}
