pub mod templates;

use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use jiff::civil::Date;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
  cli::{Cli, Commands},
  error::RpcdocError,
};

/// Configuration options for rpcdoc
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Path to the endpoint schema JSON file
  pub schema: Option<PathBuf>,

  /// File the document is written to, stdout when unset
  pub output: Option<PathBuf>,

  /// Version string shown in the intro
  pub api_version: Option<String>,

  /// Fixed generation date in `YYYY-MM-DD` form
  pub date: Option<String>,

  /// Path to a tera template replacing the built-in intro
  pub intro_template: Option<PathBuf>,

  /// Endpoint names left out of the document
  pub exclude: Vec<String>,

  /// Whether to sort endpoints by name (defaults to true)
  pub sort_endpoints: Option<bool>,
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unknown extension,
  /// or does not parse.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RpcdocError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let ext = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match ext.as_deref() {
      Some("json") => Ok(serde_json::from_str(&content)?),
      Some("toml") => Ok(toml::from_str(&content)?),
      Some(_) => {
        Err(RpcdocError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(RpcdocError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load config from files and CLI arguments.
  ///
  /// Explicit `--config-file` paths are merged in order. Without any, a
  /// config file is looked up in the usual locations.
  ///
  /// # Errors
  ///
  /// Returns an error if a config file fails to load or the merged
  /// configuration does not validate.
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = Self::default();

    if cli.config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        info!("Using discovered config file: {}", discovered.display());
        let file_config = Self::from_file(&discovered).wrap_err_with(|| {
          format!(
            "Failed to load discovered config from {}",
            discovered.display()
          )
        })?;
        config.merge(file_config);
      }
    } else {
      for path in &cli.config_files {
        let file_config = Self::from_file(path).wrap_err_with(|| {
          format!("Failed to load config from {}", path.display())
        })?;
        config.merge(file_config);
      }
    }

    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
  }

  /// Merge `other` on top of this config. Scalars set in `other` win, lists
  /// are appended.
  pub fn merge(&mut self, other: Self) {
    let Self {
      schema,
      output,
      api_version,
      date,
      intro_template,
      exclude,
      sort_endpoints,
    } = other;

    if schema.is_some() {
      self.schema = schema;
    }
    if output.is_some() {
      self.output = output;
    }
    if api_version.is_some() {
      self.api_version = api_version;
    }
    if date.is_some() {
      self.date = date;
    }
    if intro_template.is_some() {
      self.intro_template = intro_template;
    }
    self.exclude.extend(exclude);
    if sort_endpoints.is_some() {
      self.sort_endpoints = sort_endpoints;
    }
  }

  /// Merge CLI arguments into this config, prioritizing CLI values when
  /// present
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(Commands::Generate {
      schema,
      output,
      api_version,
      date,
      intro_template,
      exclude,
      no_sort,
    }) = &cli.command
    {
      if let Some(schema) = schema {
        self.schema = Some(schema.clone());
      }

      if let Some(output) = output {
        self.output = Some(output.clone());
      }

      if let Some(api_version) = api_version {
        self.api_version = Some(api_version.clone());
      }

      if let Some(date) = date {
        self.date = Some(date.clone());
      }

      if let Some(intro_template) = intro_template {
        self.intro_template = Some(intro_template.clone());
      }

      // Append excludes rather than replacing them
      self.exclude.extend(exclude.iter().cloned());

      if *no_sort {
        self.sort_endpoints = Some(false);
      }
    }
  }

  /// Whether endpoints should be sorted by name before rendering.
  #[must_use]
  pub fn should_sort(&self) -> bool {
    self.sort_endpoints.unwrap_or(true)
  }

  /// The configured generation date, if any.
  ///
  /// # Errors
  ///
  /// Returns [`RpcdocError::Date`] if the date is not `YYYY-MM-DD`.
  pub fn intro_date(&self) -> Result<Option<Date>, RpcdocError> {
    self
      .date
      .as_deref()
      .map(str::parse::<Date>)
      .transpose()
      .map_err(RpcdocError::from)
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let config_filenames = [
      "rpcdoc.toml",
      "rpcdoc.json",
      ".rpcdoc.toml",
      ".rpcdoc.json",
      ".config/rpcdoc.toml",
    ];

    let current_dir = std::env::current_dir().ok()?;

    for filename in &config_filenames {
      let config_path = current_dir.join(filename);
      if config_path.exists() {
        return Some(config_path);
      }
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
      let config_path = PathBuf::from(xdg_config_home).join("rpcdoc.toml");
      if config_path.exists() {
        return Some(config_path);
      }
    }

    None
  }

  /// Validate the merged configuration.
  ///
  /// # Errors
  ///
  /// Returns [`RpcdocError::Config`] listing every problem found.
  pub fn validate(&self) -> Result<(), RpcdocError> {
    let mut errors = Vec::new();

    match self.schema {
      None => {
        errors.push(
          "No endpoint schema given. Use 'rpcdoc generate --schema' or set \
           `schema` in a config file."
            .to_string(),
        );
      },
      Some(ref schema) if !schema.is_file() => {
        errors.push(format!(
          "Schema file does not exist: {}",
          schema.display()
        ));
      },
      Some(_) => {},
    }

    if let Some(ref intro_template) = self.intro_template {
      if !intro_template.is_file() {
        errors.push(format!(
          "Intro template does not exist: {}",
          intro_template.display()
        ));
      }
    }

    if let Err(e) = self.intro_date() {
      errors.push(e.to_string());
    }

    if !errors.is_empty() {
      return Err(RpcdocError::Config(format!(
        "Configuration validation errors:\n{}",
        errors.join("\n")
      )));
    }

    Ok(())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unknown or the file cannot be written.
  pub fn generate_default_config(format: &str, path: &Path) -> Result<()> {
    let config_content = templates::get_template(format)?;

    fs::write(path, config_content).wrap_err_with(|| {
      format!("Failed to write default config to {}", path.display())
    })?;

    info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
