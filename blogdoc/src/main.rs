use std::fs;

use blogdoc::{
  batch::convert_directory,
  cli::{Cli, Commands},
  commands::{run_normalize, run_parse, run_render},
};
use blogdoc_config::Config;
use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};

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

  // Writing a config must not depend on loading one
  if let Commands::Init {
    output,
    format,
    force,
  } = &cli.command
  {
    if output.exists() && !force {
      bail!(
        "Configuration file already exists: {}. Use --force to overwrite.",
        output.display()
      );
    }

    if let Some(parent) = output.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }

    Config::generate_default_config(format, output).wrap_err_with(|| {
      format!("Failed to generate configuration file: {}", output.display())
    })?;
    return Ok(());
  }

  let mut config = Config::load(&cli.config_files, &cli.config_overrides)?;

  match cli.command {
    Commands::Parse { input, output } => {
      run_parse(&config, &input, output.as_deref())
    },
    Commands::Render { input, output } => {
      run_render(&config, &input, output.as_deref())
    },
    Commands::Normalize { input, output } => {
      run_normalize(&config, &input, output.as_deref())
    },
    Commands::Batch {
      input_dir,
      output_dir,
      jobs,
      to,
    } => {
      // CLI arguments take precedence over the config file
      if input_dir.is_some() {
        config.input_dir = input_dir;
      }
      if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
      }
      if jobs.is_some() {
        config.jobs = jobs;
      }

      let report = convert_directory(&config, to)?;
      if !report.is_success() {
        bail!(
          "{} of {} files failed to convert",
          report.failed.len(),
          report.failed.len() + report.converted.len()
        );
      }
      Ok(())
    },
    Commands::Init { .. } => Ok(()),
  }
}
