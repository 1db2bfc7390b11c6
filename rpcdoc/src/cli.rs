use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for rpcdoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "rpcdoc: Markdown reference generator for HTTP RPC APIs"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`]). Without one, the document is
  /// generated from the configuration file alone.
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,
}

/// All supported subcommands for the rpcdoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new rpcdoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "rpcdoc.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Export the built-in intro as a template for customization.
  ExportIntro {
    /// Path to write the intro template to.
    #[arg(short, long, default_value = "intro.md")]
    output: PathBuf,

    /// Whether to overwrite an existing file.
    #[arg(long)]
    force: bool,
  },

  /// Render the API reference document.
  Generate {
    /// Path to the JSON file describing the endpoints.
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// File to write the document to. Prints to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Version string shown in the intro. Defaults to the schema's
    /// `version` field.
    #[arg(long = "api-version")]
    api_version: Option<String>,

    /// Fixed generation date (YYYY-MM-DD) for reproducible output.
    #[arg(long)]
    date: Option<String>,

    /// Path to a tera template replacing the built-in intro.
    #[arg(long = "intro-template")]
    intro_template: Option<PathBuf>,

    /// Endpoint to leave out of the document (can be specified multiple
    /// times)
    #[arg(short = 'x', long, action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Keep endpoints in schema order instead of sorting them by name.
    #[arg(long = "no-sort")]
    no_sort: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
