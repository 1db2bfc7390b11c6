use jiff::{Zoned, civil::Date};

/// Built-in document preamble. Doubles as a tera template, so the
/// placeholders use tera syntax.
pub const INTRO_TEMPLATE: &str = include_str!("../templates/intro.md");

const DATE_PLACEHOLDER: &str = "{{ date }}";
const VERSION_PLACEHOLDER: &str = "{{ version }}";

/// Clock and version values interpolated into the intro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroContext {
  /// Generation date, rendered as `YYYY-MM-DD`
  pub date: Date,

  /// API version string, rendered verbatim
  pub version: String,
}

impl IntroContext {
  #[must_use]
  pub fn new(date: Date, version: impl Into<String>) -> Self {
    Self {
      date,
      version: version.into(),
    }
  }

  /// Context dated with the current local date.
  #[must_use]
  pub fn today(version: impl Into<String>) -> Self {
    Self::new(Zoned::now().date(), version)
  }

  #[must_use]
  pub fn date_string(&self) -> String {
    self.date.strftime("%Y-%m-%d").to_string()
  }
}

/// Fill the built-in intro with the date and version from `ctx`.
#[must_use]
pub fn render_intro(ctx: &IntroContext) -> String {
  INTRO_TEMPLATE
    .replace(DATE_PLACEHOLDER, &ctx.date_string())
    .replace(VERSION_PLACEHOLDER, &ctx.version)
}

#[cfg(test)]
mod tests {
  use jiff::civil::date;

  use super::*;

  #[test]
  fn date_is_zero_padded() {
    let ctx = IntroContext::new(date(2024, 3, 7), "0.27.0");
    assert_eq!(ctx.date_string(), "2024-03-07");
  }

  #[test]
  fn intro_has_no_placeholders_left() {
    let intro = render_intro(&IntroContext::new(date(2024, 3, 7), "0.27.0"));
    assert!(!intro.contains("{{"));
    assert!(intro.contains("_Generated on 2024-03-07, from go-ipfs v0.27.0._"));
  }
}
