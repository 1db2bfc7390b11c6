use std::{
  fs,
  io::{self, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, eyre};
use log::{info, warn};
use rpcdoc_markdown::{
  IntroContext,
  MarkdownFormatter,
  generate_body,
  generate_docs,
};
use rpcdoc_schema::{Endpoint, load_endpoints};

use crate::{config::Config, error::RpcdocError, template};

/// Version shown in the intro when neither config nor schema provide one.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Load the schema named by `config`, render the reference and write it out.
///
/// # Errors
///
/// Returns an error if the schema cannot be loaded, the intro template fails
/// to render, or the output cannot be written.
pub fn generate_reference(config: &Config) -> Result<()> {
  info!("Starting reference generation...");

  let schema_path = config
    .schema
    .as_deref()
    .ok_or_else(|| eyre!("No endpoint schema configured"))?;

  let mut schema = load_endpoints(schema_path)?;
  info!(
    "Loaded {} endpoints from {}",
    schema.endpoints.len(),
    schema_path.display()
  );

  for name in schema.retain_endpoints(&config.exclude) {
    warn!("Excluded endpoint not present in schema: {name}");
  }

  if config.should_sort() {
    schema.sort_endpoints();
  }

  let version = config
    .api_version
    .clone()
    .or_else(|| schema.version.clone())
    .unwrap_or_else(|| UNKNOWN_VERSION.to_string());

  let ctx = match config.intro_date()? {
    Some(date) => IntroContext::new(date, version),
    None => IntroContext::today(version),
  };

  let document = render_document(config, &ctx, &schema.endpoints)?;
  write_document(config.output.as_deref(), &document)?;

  info!(
    "Reference for {} endpoints generated successfully",
    schema.endpoints.len()
  );
  Ok(())
}

/// Render the document, using the configured intro template when set.
///
/// # Errors
///
/// Returns an error if the custom intro template fails to render.
pub fn render_document(
  config: &Config,
  ctx: &IntroContext,
  endpoints: &[Endpoint],
) -> Result<String, RpcdocError> {
  let formatter = MarkdownFormatter;

  match config.intro_template {
    Some(ref path) => {
      info!("Using intro template: {}", path.display());
      let mut document =
        template::render_intro_template(path, ctx, endpoints.len())?;
      document.push_str(&generate_body(&formatter, endpoints));
      Ok(document)
    },
    None => Ok(generate_docs(&formatter, ctx, endpoints)),
  }
}

fn write_document(output: Option<&Path>, document: &str) -> Result<()> {
  match output {
    Some(path) => {
      if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
        }
      }

      fs::write(path, document).wrap_err_with(|| {
        format!("Failed to write reference to {}", path.display())
      })?;
      info!("Reference written to {}", path.display());
    },
    None => {
      let mut stdout = io::stdout().lock();
      stdout
        .write_all(document.as_bytes())
        .wrap_err("Failed to write reference to stdout")?;
      stdout.flush()?;
    },
  }

  Ok(())
}
