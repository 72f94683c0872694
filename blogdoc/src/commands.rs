//! Single-file conversions behind the `parse`, `render` and `normalize`
//! subcommands.
use std::path::Path;

use blogdoc_config::Config;
use blogdoc_convert::{Document, DocumentConverter};
use color_eyre::eyre::{Context, Result};
use log::{debug, info};

use crate::utils::{read_input, write_output};

/// Convert markup into document JSON.
pub fn parse_markup(
  html: &str,
  converter: &DocumentConverter,
  pretty: bool,
) -> Result<String> {
  let document = converter.parse(html);
  debug!("Parsed {} top-level nodes", document.children.len());

  let json = if pretty {
    document.to_json_pretty()
  } else {
    document.to_json()
  };
  Ok(json?)
}

/// Convert document JSON into markup.
pub fn render_document(
  json: &str,
  converter: &DocumentConverter,
) -> Result<String> {
  let document = Document::from_json(json)?;
  debug!("Rendering {} top-level nodes", document.children.len());
  Ok(converter.serialize(&document))
}

/// Handle `blogdoc parse`.
pub fn run_parse(
  config: &Config,
  input: &Path,
  output: Option<&Path>,
) -> Result<()> {
  let converter = DocumentConverter::new(config.converter_options());
  let html = read_input(input)?;
  let json = parse_markup(&html, &converter, config.pretty_json)
    .wrap_err_with(|| format!("Failed to parse {}", input.display()))?;

  write_output(output, &json)?;
  if let Some(output) = output {
    info!("Wrote document to {}", output.display());
  }
  Ok(())
}

/// Handle `blogdoc render`.
pub fn run_render(
  config: &Config,
  input: &Path,
  output: Option<&Path>,
) -> Result<()> {
  let converter = DocumentConverter::new(config.converter_options());
  let json = read_input(input)?;
  let html = render_document(&json, &converter)
    .wrap_err_with(|| format!("Failed to render {}", input.display()))?;

  write_output(output, &html)?;
  if let Some(output) = output {
    info!("Wrote markup to {}", output.display());
  }
  Ok(())
}

/// Handle `blogdoc normalize`.
pub fn run_normalize(
  config: &Config,
  input: &Path,
  output: Option<&Path>,
) -> Result<()> {
  let converter = DocumentConverter::new(config.converter_options());
  let html = read_input(input)?;
  let normalized = converter.normalize(&html);

  write_output(output, &normalized)?;
  if let Some(output) = output {
    info!("Wrote normalized markup to {}", output.display());
  }
  Ok(())
}
