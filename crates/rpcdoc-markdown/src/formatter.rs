use log::debug;
use rpcdoc_schema::{Argument, Endpoint};

use crate::intro::IntroContext;

/// Renders the fragments of an API reference document.
///
/// Every method is total and deterministic over its input. Callers assemble
/// the fragments in document order, see [`generate_docs`].
pub trait Formatter {
  /// Document preamble, dated and versioned from `ctx`.
  fn generate_intro(&self, ctx: &IntroContext) -> String;

  /// Linked list of all endpoints, followed by the endpoints heading.
  fn generate_index(&self, endpoints: &[Endpoint]) -> String;

  /// Heading and description of a single endpoint.
  fn generate_endpoint_block(&self, endpoint: &Endpoint) -> String;

  /// Positional arguments and options, file arguments excluded.
  fn generate_arguments_block(
    &self,
    args: &[Argument],
    opts: &[Argument],
  ) -> String;

  /// Request body section for the first file argument, or nothing.
  fn generate_body_block(&self, args: &[Argument]) -> String;

  /// Response body section.
  fn generate_response_block(&self, response: &str) -> String;

  /// Example invocation of the endpoint.
  fn generate_example_block(&self, endpoint: &Endpoint) -> String;
}

/// Render the index and every endpoint section, without the intro.
pub fn generate_body<F: Formatter + ?Sized>(
  formatter: &F,
  endpoints: &[Endpoint],
) -> String {
  let mut buf = formatter.generate_index(endpoints);

  for endpoint in endpoints {
    debug!("Rendering endpoint {}", endpoint.name);
    buf.push_str(&formatter.generate_endpoint_block(endpoint));
    buf.push_str(
      &formatter.generate_arguments_block(&endpoint.arguments, &endpoint.options),
    );
    buf.push_str(&formatter.generate_body_block(&endpoint.arguments));
    buf.push_str(&formatter.generate_response_block(&endpoint.response));
    buf.push_str(&formatter.generate_example_block(endpoint));
  }

  debug!("Rendered {} endpoints", endpoints.len());
  buf
}

/// Render the complete reference document.
pub fn generate_docs<F: Formatter + ?Sized>(
  formatter: &F,
  ctx: &IntroContext,
  endpoints: &[Endpoint],
) -> String {
  let mut buf = formatter.generate_intro(ctx);
  buf.push_str(&generate_body(formatter, endpoints));
  buf
}
