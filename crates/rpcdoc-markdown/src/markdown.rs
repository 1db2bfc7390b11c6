use std::sync::LazyLock;

use html_escape::encode_text;
use log::error;
use regex::Regex;
use rpcdoc_schema::{Argument, ArgumentType, Endpoint};

use crate::{
  formatter::Formatter,
  intro::{IntroContext, render_intro},
  utils::never_matching_regex,
};

/// Prefix stripped from endpoint names in the index.
pub const API_PREFIX: &str = "/api/v0";

/// Endpoint whose file argument also accepts directory trees.
pub const ADD_ENDPOINT: &str = "/api/v0/add";

/// Base URL used in cURL examples.
pub const EXAMPLE_BASE_URL: &str = "http://127.0.0.1:5001";

const DIRECTORY_UPLOAD_DOC: &str =
  include_str!("../templates/directory_upload.md");

// Defaults are rendered separately, so drop them from descriptions.
static DEFAULT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r" Default: [a-zA-Z0-9_-]+ ?\.").unwrap_or_else(|e| {
    error!("Failed to compile DEFAULT_CLAUSE regex: {e}");
    never_matching_regex()
  })
});

/// Markdown output in the layout of the IPFS documentation site.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

/// Index anchor for an endpoint: leading slash dropped, remaining slashes
/// turned into dashes.
#[must_use]
pub fn endpoint_anchor(name: &str) -> String {
  name.strip_prefix('/').unwrap_or(name).replace('/', "-")
}

/// HTML-escape free text the way the IPFS docs site expects: `&`, `<`, `>`
/// as named entities, quotes as the numeric `&#34;` and `&#39;`.
#[must_use]
pub fn escape_description(text: &str) -> String {
  // encode_text leaves quotes alone, so no entity gets escaped twice
  encode_text(text).replace('"', "&#34;").replace('\'', "&#39;")
}

/// Remove `Default: value.` clauses from an argument description.
#[must_use]
pub fn strip_default_clause(description: &str) -> String {
  DEFAULT_CLAUSE.replace_all(description, "").into_owned()
}

fn render_argument(arg: &Argument, positional: bool) -> Option<String> {
  // File arguments are documented by the request body section
  if arg.is_file() {
    return None;
  }

  let alias = if positional { "arg" } else { arg.name.as_str() };
  let description = strip_default_clause(&arg.description);

  let mut line = format!(
    "- `{alias}` [{}]: {}",
    arg.kind,
    escape_description(&description)
  );
  if let Some(default) = arg.default_value() {
    line.push_str(&format!(" Default: `{default}`."));
  }
  line.push_str(if arg.required {
    " Required: **yes**."
  } else {
    " Required: no."
  });
  line.push('\n');

  Some(line)
}

impl Formatter for MarkdownFormatter {
  fn generate_intro(&self, ctx: &IntroContext) -> String {
    render_intro(ctx)
  }

  fn generate_index(&self, endpoints: &[Endpoint]) -> String {
    let mut buf = String::from("## Index\n\n");

    for endpoint in endpoints {
      let label = endpoint
        .name
        .strip_prefix(API_PREFIX)
        .unwrap_or(&endpoint.name);
      buf.push_str(&format!(
        "  *  [{label}](#{})\n",
        endpoint_anchor(&endpoint.name)
      ));
    }

    buf.push_str("\n\n## Endpoints\n\n");
    buf
  }

  fn generate_endpoint_block(&self, endpoint: &Endpoint) -> String {
    format!(
      "\n## {}\n\n{}\n\n\n",
      endpoint.name,
      escape_description(&endpoint.description)
    )
  }

  fn generate_arguments_block(
    &self,
    args: &[Argument],
    opts: &[Argument],
  ) -> String {
    let mut buf = String::from("### Arguments\n\n");

    if args.is_empty() && opts.is_empty() {
      buf.push_str("This endpoint takes no arguments.\n");
    }

    let positional = args.iter().map(|arg| (arg, true));
    let named = opts.iter().map(|opt| (opt, false));
    for line in positional
      .chain(named)
      .filter_map(|(arg, is_positional)| render_argument(arg, is_positional))
    {
      buf.push_str(&line);
    }

    buf.push('\n');
    buf
  }

  fn generate_body_block(&self, args: &[Argument]) -> String {
    let Some(body_arg) = args.iter().find(|arg| arg.is_file()) else {
      return String::new();
    };

    let mut buf = format!(
      "\n### Request Body\n\nArgument `{}` is of file type. This endpoint \
       expects one or several files (depending on the command) in the body \
       of the request as 'multipart/form-data'.\n\n",
      body_arg.name
    );

    if body_arg.endpoint == ADD_ENDPOINT {
      buf.push_str("\n\n");
      buf.push_str(DIRECTORY_UPLOAD_DOC);
      buf.push('\n');
    }

    buf
  }

  fn generate_response_block(&self, response: &str) -> String {
    format!(
      "\n### Response\n\nOn success, the call to this endpoint will return \
       with 200 and the following body:\n\n```json\n{response}\n```\n\n"
    )
  }

  fn generate_example_block(&self, endpoint: &Endpoint) -> String {
    let mut query = Vec::new();
    let mut has_file_arg = false;

    for arg in &endpoint.arguments {
      match arg.kind {
        ArgumentType::File => has_file_arg = true,
        _ => query.push(format!("arg=<{}>", arg.name)),
      }
    }

    for opt in &endpoint.options {
      query.push(format!(
        "{}={}",
        opt.name,
        opt.default_value().unwrap_or("<value>")
      ));
    }

    let mut buf = String::from("### cURL Example\n\n`curl -X POST ");
    if has_file_arg {
      buf.push_str("-F file=@myfile ");
    }

    buf.push_str(&format!("\"{EXAMPLE_BASE_URL}{}", endpoint.name));
    if !query.is_empty() {
      buf.push('?');
      buf.push_str(&query.join("&"));
    }
    buf.push('"');

    buf.push_str("`\n\n---\n");
    buf
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anchor_replaces_inner_slashes() {
    assert_eq!(endpoint_anchor("/api/v0/files/write"), "api-v0-files-write");
    assert_eq!(endpoint_anchor("api/v0/id"), "api-v0-id");
  }

  #[test]
  fn default_clause_is_stripped() {
    assert_eq!(
      strip_default_clause("Chunking algorithm. Default: size-262144."),
      "Chunking algorithm."
    );
    assert_eq!(
      strip_default_clause("Hash function. Default: sha2_256 ."),
      "Hash function."
    );
    assert_eq!(
      strip_default_clause("Default value is set elsewhere."),
      "Default value is set elsewhere."
    );
  }

  #[test]
  fn description_escaping_covers_quotes() {
    assert_eq!(
      escape_description(r#"Say "hi" & 'bye' <b>"#),
      "Say &#34;hi&#34; &amp; &#39;bye&#39; &lt;b&gt;"
    );
  }

  #[test]
  fn file_argument_renders_nothing() {
    let arg = Argument {
      name: "path".to_string(),
      kind: ArgumentType::File,
      ..Argument::default()
    };
    assert_eq!(render_argument(&arg, true), None);
  }

  #[test]
  fn unknown_type_is_rendered_literally() {
    let arg = Argument {
      name: "timeout".to_string(),
      kind: ArgumentType::from("duration"),
      description: "How long to wait.".to_string(),
      ..Argument::default()
    };
    assert_eq!(
      render_argument(&arg, false).as_deref(),
      Some("- `timeout` [duration]: How long to wait. Required: no.\n")
    );
  }
}
