use thiserror::Error;

/// Error type for config template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
  /// The requested configuration format is not supported. Contains the name
  /// of the unsupported format.
  #[error("Unsupported config format: {0}")]
  UnsupportedFormat(String),
}

/// Default configuration template in TOML, commented so that every field is
/// explained.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# rpcdoc Configuration File

# JSON file describing the endpoints to document
schema = "endpoints.json"

# File to write the reference to (prints to stdout when unset)
output = "http-api.md"

# Version shown in the intro (defaults to the schema's "version" field)
# api_version = "0.27.0"

# Fixed generation date for reproducible output (defaults to today)
# date = "2024-01-01"

# Tera template replacing the built-in intro, see `rpcdoc export-intro`
# intro_template = "intro.md"

# Endpoints to leave out of the document
# exclude = ["/api/v0/shutdown"]

# Whether to sort endpoints by name
sort_endpoints = true
"#;

/// Default configuration template in JSON format.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "schema": "endpoints.json",
  "output": "http-api.md",
  "exclude": [],
  "sort_endpoints": true
}
"#;

/// Get the correct configuration template based on the requested format.
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedFormat`] for anything but TOML and
/// JSON.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
