use std::fmt;

use serde::{Deserialize, Serialize};

/// Response text used when the schema does not describe a response body.
pub const DEFAULT_RESPONSE: &str =
  "This endpoint returns a `text/plain` response body.";

/// Type tag of an endpoint argument or option.
///
/// [`ArgumentType::File`] is the only variant with special rendering: file
/// arguments travel in the multipart request body instead of the query
/// string. Unknown tags are kept verbatim in [`ArgumentType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArgumentType {
  File,
  #[default]
  String,
  Bool,
  Int,
  Uint,
  Int64,
  Uint64,
  Float,
  Array,
  Other(String),
}

impl ArgumentType {
  /// The tag as it appears in the schema and in rendered output.
  #[must_use]
  pub fn as_str(&self) -> &str {
    match self {
      Self::File => "file",
      Self::String => "string",
      Self::Bool => "bool",
      Self::Int => "int",
      Self::Uint => "uint",
      Self::Int64 => "int64",
      Self::Uint64 => "uint64",
      Self::Float => "float",
      Self::Array => "array",
      Self::Other(tag) => tag,
    }
  }
}

impl From<&str> for ArgumentType {
  fn from(tag: &str) -> Self {
    match tag {
      "file" => Self::File,
      "string" => Self::String,
      "bool" => Self::Bool,
      "int" => Self::Int,
      "uint" => Self::Uint,
      "int64" => Self::Int64,
      "uint64" => Self::Uint64,
      "float" => Self::Float,
      "array" => Self::Array,
      other => Self::Other(other.to_string()),
    }
  }
}

impl From<String> for ArgumentType {
  fn from(tag: String) -> Self {
    Self::from(tag.as_str())
  }
}

impl From<ArgumentType> for String {
  fn from(kind: ArgumentType) -> Self {
    kind.as_str().to_string()
  }
}

impl fmt::Display for ArgumentType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A positional argument or named option accepted by an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Argument {
  /// Argument name (e.g. "ipfs-path", "encoding")
  pub name: String,

  /// Argument type tag
  #[serde(rename = "type")]
  pub kind: ArgumentType,

  /// Free-text description, may contain a trailing "Default: x." clause
  pub description: String,

  /// Default value, if any
  pub default: Option<String>,

  /// Whether the caller must supply the argument
  pub required: bool,

  /// Name of the endpoint this argument belongs to
  pub endpoint: String,
}

impl Argument {
  /// Whether the argument is transmitted as multipart request body.
  #[must_use]
  pub const fn is_file(&self) -> bool {
    matches!(self.kind, ArgumentType::File)
  }

  /// Default value, treating an empty string as absent.
  #[must_use]
  pub fn default_value(&self) -> Option<&str> {
    self.default.as_deref().filter(|value| !value.is_empty())
  }
}

/// One HTTP RPC route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
  /// Full route path (e.g. "/api/v0/add")
  pub name: String,

  /// Free-text description of the command
  pub description: String,

  /// Positional arguments, in order
  pub arguments: Vec<Argument>,

  /// Named options, in order
  pub options: Vec<Argument>,

  /// Literal response body shown in the reference
  pub response: String,
}

impl Default for Endpoint {
  fn default() -> Self {
    Self {
      name:        String::new(),
      description: String::new(),
      arguments:   Vec::new(),
      options:     Vec::new(),
      response:    DEFAULT_RESPONSE.to_string(),
    }
  }
}

impl Endpoint {
  /// Whether any positional argument is file-typed.
  #[must_use]
  pub fn has_file_argument(&self) -> bool {
    self.arguments.iter().any(Argument::is_file)
  }

  /// Point every argument and option without a back-reference at this
  /// endpoint.
  pub fn link_arguments(&mut self) {
    let name = &self.name;
    for arg in self.arguments.iter_mut().chain(self.options.iter_mut()) {
      if arg.endpoint.is_empty() {
        arg.endpoint.clone_from(name);
      }
    }
  }
}

/// A loaded endpoint schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
  /// Version of the API the schema was extracted from
  pub version: Option<String>,

  /// Endpoints in document order
  pub endpoints: Vec<Endpoint>,
}

impl Schema {
  /// Drop every endpoint whose name appears in `exclude`.
  ///
  /// Returns the names from `exclude` that matched nothing.
  pub fn retain_endpoints<'a>(&mut self, exclude: &'a [String]) -> Vec<&'a str> {
    let unmatched = exclude
      .iter()
      .filter(|name| !self.endpoints.iter().any(|e| &e.name == *name))
      .map(String::as_str)
      .collect();

    self
      .endpoints
      .retain(|endpoint| !exclude.contains(&endpoint.name));
    unmatched
  }

  /// Order endpoints by route name.
  pub fn sort_endpoints(&mut self) {
    self.endpoints.sort_by(|a, b| a.name.cmp(&b.name));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn argument_type_keeps_unknown_tags() {
    let kind = ArgumentType::from("duration");
    assert_eq!(kind, ArgumentType::Other("duration".to_string()));
    assert_eq!(kind.to_string(), "duration");
    assert_eq!(ArgumentType::from("file"), ArgumentType::File);
  }

  #[test]
  fn empty_default_is_absent() {
    let arg = Argument {
      default: Some(String::new()),
      ..Argument::default()
    };
    assert_eq!(arg.default_value(), None);
  }

  #[test]
  fn link_arguments_preserves_existing_reference() {
    let mut endpoint = Endpoint {
      name: "/api/v0/add".to_string(),
      arguments: vec![Argument {
        name: "path".to_string(),
        endpoint: "/api/v0/other".to_string(),
        ..Argument::default()
      }],
      options: vec![Argument {
        name: "quiet".to_string(),
        ..Argument::default()
      }],
      ..Endpoint::default()
    };
    endpoint.link_arguments();
    assert_eq!(endpoint.arguments[0].endpoint, "/api/v0/other");
    assert_eq!(endpoint.options[0].endpoint, "/api/v0/add");
  }

  #[test]
  fn retain_reports_unmatched_names() {
    let mut schema = Schema {
      version:   None,
      endpoints: vec![
        Endpoint {
          name: "/api/v0/id".to_string(),
          ..Endpoint::default()
        },
        Endpoint {
          name: "/api/v0/add".to_string(),
          ..Endpoint::default()
        },
      ],
    };
    let exclude = vec!["/api/v0/id".to_string(), "/api/v0/nope".to_string()];
    let unmatched = schema.retain_endpoints(&exclude);
    assert_eq!(unmatched, vec!["/api/v0/nope"]);
    assert_eq!(schema.endpoints.len(), 1);
    assert_eq!(schema.endpoints[0].name, "/api/v0/add");
  }
}
