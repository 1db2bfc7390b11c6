use std::{fs, path::Path};

use log::info;
use rpcdoc_markdown::{INTRO_TEMPLATE, IntroContext};
use tera::Tera;

use crate::error::RpcdocError;

/// Render a custom intro template read from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to render.
pub fn render_intro_template(
  path: &Path,
  ctx: &IntroContext,
  endpoint_count: usize,
) -> Result<String, RpcdocError> {
  let source = fs::read_to_string(path)?;
  render_intro_source(&source, ctx, endpoint_count)
}

/// Render intro template source with the `date`, `version` and
/// `endpoint_count` variables.
///
/// # Errors
///
/// Returns [`RpcdocError::Template`] if tera rejects the template.
pub fn render_intro_source(
  source: &str,
  ctx: &IntroContext,
  endpoint_count: usize,
) -> Result<String, RpcdocError> {
  let mut tera_context = tera::Context::new();
  tera_context.insert("date", &ctx.date_string());
  tera_context.insert("version", &ctx.version);
  tera_context.insert("endpoint_count", &endpoint_count);

  // Markdown output, no HTML autoescaping
  Ok(Tera::one_off(source, &tera_context, false)?)
}

/// Write the built-in intro to `path` as a starting point for a custom
/// template.
///
/// # Errors
///
/// Returns [`RpcdocError::Config`] if `path` exists and `force` is not set,
/// or an I/O error if the parent directory or the file cannot be created.
pub fn export_intro(path: &Path, force: bool) -> Result<(), RpcdocError> {
  if path.exists() && !force {
    return Err(RpcdocError::Config(format!(
      "File already exists: {}. Use --force to overwrite.",
      path.display()
    )));
  }

  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent)?;
    }
  }

  fs::write(path, INTRO_TEMPLATE)?;
  info!("Exported intro template to {}", path.display());
  Ok(())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

  use jiff::civil::date;
  use rpcdoc_markdown::render_intro;

  use super::*;

  #[test]
  fn builtin_intro_renders_through_tera() {
    let ctx = IntroContext::new(date(2024, 5, 1), "0.28.0");

    let rendered =
      render_intro_source(INTRO_TEMPLATE, &ctx, 3).expect("render intro");

    assert_eq!(rendered.trim_end(), render_intro(&ctx).trim_end());
  }

  #[test]
  fn custom_template_sees_endpoint_count() {
    let ctx = IntroContext::new(date(2024, 5, 1), "0.28.0");

    let rendered = render_intro_source(
      "# API {{ version }} ({{ endpoint_count }} commands, {{ date }})",
      &ctx,
      42,
    )
    .expect("render intro");

    assert_eq!(rendered, "# API 0.28.0 (42 commands, 2024-05-01)");
  }

  #[test]
  fn broken_template_is_template_error() {
    let ctx = IntroContext::new(date(2024, 5, 1), "0.28.0");

    let err = render_intro_source("{{ version", &ctx, 0)
      .expect_err("unclosed tag must fail");

    assert!(matches!(err, RpcdocError::Template(_)));
  }
}
