#![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

use std::fs;

use rpcdoc_schema::{
  ArgumentType,
  DEFAULT_RESPONSE,
  SchemaError,
  load_endpoints,
  parse_endpoints,
};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_load_document_with_version() {
  let temp_dir = tempdir().expect("tempdir");
  let schema_path = temp_dir.path().join("endpoints.json");

  let schema = json!({
      "version": "0.4.22",
      "endpoints": [
          {
              "name": "/api/v0/add",
              "description": "Add a file or directory to IPFS.",
              "arguments": [
                  {
                      "name": "path",
                      "type": "file",
                      "description": "The path to a file to be added to IPFS.",
                      "required": true
                  }
              ],
              "options": [
                  {
                      "name": "quiet",
                      "type": "bool",
                      "description": "Write minimal output."
                  }
              ],
              "response": "{\n  \"Hash\": \"<string>\"\n}"
          }
      ]
  });

  fs::write(&schema_path, schema.to_string()).expect("write schema");

  let loaded = load_endpoints(&schema_path).expect("load schema");

  assert_eq!(loaded.version.as_deref(), Some("0.4.22"));
  assert_eq!(loaded.endpoints.len(), 1);

  let add = &loaded.endpoints[0];
  assert_eq!(add.arguments[0].kind, ArgumentType::File);
  assert!(add.arguments[0].required);
  assert_eq!(add.arguments[0].endpoint, "/api/v0/add");
  assert_eq!(add.options[0].kind, ArgumentType::Bool);
  assert_eq!(add.options[0].endpoint, "/api/v0/add");
  assert!(add.response.contains("\"Hash\""));
}

#[test]
fn test_parse_bare_array_keeps_order_and_defaults() {
  let schema = json!([
      { "name": "/api/v0/version", "description": "Show version." },
      { "name": "/api/v0/id", "description": "Show node id." }
  ]);

  let parsed = parse_endpoints(&schema.to_string()).expect("parse schema");

  assert_eq!(parsed.version, None);
  let names: Vec<_> = parsed.endpoints.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(names, ["/api/v0/version", "/api/v0/id"]);
  assert_eq!(parsed.endpoints[0].response, DEFAULT_RESPONSE);
  assert!(parsed.endpoints[0].arguments.is_empty());
}

#[test]
fn test_sort_endpoints_by_name() {
  let schema = json!([
      { "name": "/api/v0/version" },
      { "name": "/api/v0/add" },
      { "name": "/api/v0/id" }
  ]);

  let mut parsed = parse_endpoints(&schema.to_string()).expect("parse schema");
  parsed.sort_endpoints();

  let names: Vec<_> = parsed.endpoints.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(names, ["/api/v0/add", "/api/v0/id", "/api/v0/version"]);
}

#[test]
fn test_missing_file_reports_path() {
  let temp_dir = tempdir().expect("tempdir");
  let schema_path = temp_dir.path().join("missing.json");

  let err = load_endpoints(&schema_path).expect_err("missing file must fail");

  assert!(matches!(err, SchemaError::ReadFile { .. }));
  assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_invalid_json_is_parse_error() {
  let temp_dir = tempdir().expect("tempdir");
  let schema_path = temp_dir.path().join("broken.json");
  fs::write(&schema_path, "{ \"endpoints\": [").expect("write schema");

  let err = load_endpoints(&schema_path).expect_err("broken json must fail");

  assert!(matches!(err, SchemaError::Parse { .. }));
}

#[test]
fn test_misspelled_endpoints_key_yields_empty_schema() {
  let schema = json!({
      "version": "0.27.0",
      "endpoint": [{ "name": "/api/v0/id" }]
  });

  let parsed = parse_endpoints(&schema.to_string()).expect("parse schema");

  assert_eq!(parsed.version.as_deref(), Some("0.27.0"));
  assert!(parsed.endpoints.is_empty());
}
