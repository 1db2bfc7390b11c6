//! `rpcdoc-schema`.
//!
//! Data model for the HTTP RPC endpoints documented by rpcdoc, and a loader
//! for the JSON schema files describing them. A schema file is either an
//! object with `version` and `endpoints` keys or a bare array of endpoints.
//!
//! # Example
//!
//! ```no_run
//! use rpcdoc_schema::load_endpoints;
//!
//! let schema = load_endpoints("endpoints.json").unwrap();
//! for endpoint in &schema.endpoints {
//!   println!("{}: {} arguments", endpoint.name, endpoint.arguments.len());
//! }
//! ```

pub mod error;
mod types;

use std::path::Path;

pub use error::SchemaError;
use log::{debug, warn};
use serde::Deserialize;
pub use types::{
  Argument,
  ArgumentType,
  DEFAULT_RESPONSE,
  Endpoint,
  Schema,
};

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
  Document(Schema),
  Endpoints(Vec<Endpoint>),
}

impl From<SchemaFile> for Schema {
  fn from(file: SchemaFile) -> Self {
    match file {
      SchemaFile::Document(schema) => schema,
      SchemaFile::Endpoints(endpoints) => {
        Self {
          version: None,
          endpoints,
        }
      },
    }
  }
}

/// Load an endpoint schema from a JSON file.
///
/// Arguments and options that carry no `endpoint` back-reference are linked
/// to the endpoint that lists them.
///
/// # Errors
///
/// Returns [`SchemaError::ReadFile`] if the file cannot be read and
/// [`SchemaError::Parse`] if it is not a valid schema.
pub fn load_endpoints(path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
  let path = path.as_ref();
  let src = std::fs::read_to_string(path).map_err(|source| {
    SchemaError::ReadFile {
      path: path.to_path_buf(),
      source,
    }
  })?;

  parse_endpoints(&src).map_err(|source| {
    SchemaError::Parse {
      path: path.to_path_buf(),
      source,
    }
  })
}

/// Parse an endpoint schema from JSON text.
///
/// Unknown keys are ignored, so a misspelled `endpoints` key yields an empty
/// schema; a warning is logged in that case.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if `src` is not a valid
/// schema.
pub fn parse_endpoints(src: &str) -> Result<Schema, serde_json::Error> {
  let file: SchemaFile = serde_json::from_str(src)?;
  let mut schema = Schema::from(file);

  for endpoint in &mut schema.endpoints {
    endpoint.link_arguments();
  }

  if schema.endpoints.is_empty() {
    warn!(
      "Schema contains no endpoints; check that the document has an \
       `endpoints` array"
    );
  } else {
    debug!("Parsed {} endpoints from schema", schema.endpoints.len());
  }
  Ok(schema)
}
