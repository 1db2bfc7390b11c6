//! `rpcdoc-markdown`.
//!
//! Turns a list of [`Endpoint`](rpcdoc_schema::Endpoint) descriptors into a
//! Markdown API reference. Each block of the document comes from one
//! [`Formatter`] method; [`generate_docs`] stitches them together in order:
//! intro, index, then endpoint, arguments, request body, response and
//! example sections for every endpoint.
//!
//! # Example
//!
//! ```no_run
//! use rpcdoc_markdown::{IntroContext, MarkdownFormatter, generate_docs};
//!
//! let schema = rpcdoc_schema::load_endpoints("endpoints.json").unwrap();
//! let ctx = IntroContext::today("0.27.0");
//! let doc = generate_docs(&MarkdownFormatter, &ctx, &schema.endpoints);
//! std::fs::write("api.md", doc).unwrap();
//! ```

pub mod formatter;
pub mod intro;
pub mod markdown;
mod utils;

pub use formatter::{Formatter, generate_body, generate_docs};
pub use intro::{INTRO_TEMPLATE, IntroContext, render_intro};
pub use markdown::{
  ADD_ENDPOINT,
  API_PREFIX,
  EXAMPLE_BASE_URL,
  MarkdownFormatter,
  endpoint_anchor,
  escape_description,
  strip_default_clause,
};
