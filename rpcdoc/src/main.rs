use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use rpcdoc::{
  cli::{Cli, Commands},
  config::Config,
  generate,
  template,
};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Some(Commands::Init {
      output,
      format,
      force,
    }) => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
          info!("Created directory: {}", parent.display());
        }
      }

      Config::generate_default_config(format, output).wrap_err_with(|| {
        format!(
          "Failed to generate configuration file: {}",
          output.display()
        )
      })?;

      info!(
        "Configuration file created successfully. Point `schema` at your \
         endpoint description and run `rpcdoc`."
      );
      return Ok(());
    },

    Some(Commands::ExportIntro { output, force }) => {
      template::export_intro(output, *force).wrap_err_with(|| {
        format!("Failed to export intro template to {}", output.display())
      })?;
      return Ok(());
    },

    // Generate flags are merged in Config::load
    Some(Commands::Generate { .. }) | None => {},
  }

  let config = Config::load(&cli)?;

  generate::generate_reference(&config)
}
