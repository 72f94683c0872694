//! Parallel conversion of whole directory trees.
//!
//! Every file is converted independently on a rayon pool. A file that fails
//! to read, convert or write is logged and reported, never fatal to the rest
//! of the batch.
use std::{
  collections::HashMap,
  path::{Path, PathBuf},
};

use blogdoc_config::Config;
use blogdoc_convert::DocumentConverter;
use color_eyre::eyre::{Context, Result, bail};
use log::{info, warn};
use rayon::prelude::*;

use crate::{
  cli::Target,
  commands::{parse_markup, render_document},
  utils::{collect_files, read_input, write_output},
};

/// Outcome of a batch conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
  /// Output files written, in input order.
  pub converted: Vec<PathBuf>,
  /// Input files that could not be converted, with the reason.
  pub failed:    Vec<(PathBuf, String)>,
}

impl BatchReport {
  /// Whether every input file was converted.
  #[must_use]
  pub const fn is_success(&self) -> bool {
    self.failed.is_empty()
  }
}

/// Convert every matching file under `config.input_dir` into `target`,
/// mirroring the directory layout below `config.output_dir`.
///
/// # Errors
///
/// Returns an error if no input directory is configured, it does not exist,
/// or the thread pool cannot be created. Per-file failures end up in the
/// returned [`BatchReport`] instead.
pub fn convert_directory(
  config: &Config,
  target: Target,
) -> Result<BatchReport> {
  let Some(input_dir) = config.input_dir.as_deref() else {
    bail!(
      "No input directory given. Pass --input-dir or set input_dir in the \
       config."
    );
  };
  if !input_dir.is_dir() {
    bail!("Input directory does not exist: {}", input_dir.display());
  }

  let files = collect_files(input_dir, target.source_extensions());
  info!(
    "Converting {} files from {} into {}",
    files.len(),
    input_dir.display(),
    config.output_dir.display()
  );

  let thread_count = config.jobs.unwrap_or_else(num_cpus::get);
  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build()
    .wrap_err("Failed to build conversion thread pool")?;

  let mut report = BatchReport::default();
  let mut jobs = Vec::with_capacity(files.len());
  for (output, sources) in group_by_output(input_dir, config, &files, target) {
    if let [file] = sources.as_slice() {
      jobs.push((*file, output));
      continue;
    }
    for file in &sources {
      let reason = format!(
        "{} is also produced by {} other input file(s)",
        output.display(),
        sources.len() - 1
      );
      warn!("Skipping {}: {reason}", file.display());
      report.failed.push(((*file).clone(), reason));
    }
  }
  jobs.sort();

  let converter = DocumentConverter::new(config.converter_options());
  let results: Vec<_> = pool.install(|| {
    jobs
      .par_iter()
      .map(|(file, output)| {
        let result =
          convert_file(&converter, file, output, target, config.pretty_json);
        (*file, output, result)
      })
      .collect()
  });

  for (file, output, result) in results {
    match result {
      Ok(()) => report.converted.push(output.clone()),
      Err(e) => {
        warn!("Skipping {}: {e:#}", file.display());
        report.failed.push((file.clone(), format!("{e:#}")));
      },
    }
  }
  report.failed.sort();

  info!(
    "Converted {} files, {} failed",
    report.converted.len(),
    report.failed.len()
  );
  Ok(report)
}

/// Where the conversion of `file` is written: the same relative path below
/// `output_dir`, with the target's extension.
#[must_use]
pub fn output_path(
  input_dir: &Path,
  output_dir: &Path,
  file: &Path,
  target: Target,
) -> PathBuf {
  let relative = file.strip_prefix(input_dir).unwrap_or(file);
  output_dir.join(relative).with_extension(target.extension())
}

/// Input files keyed by the output path they would be written to.
fn group_by_output<'a>(
  input_dir: &Path,
  config: &Config,
  files: &'a [PathBuf],
  target: Target,
) -> HashMap<PathBuf, Vec<&'a PathBuf>> {
  let mut groups: HashMap<PathBuf, Vec<&PathBuf>> = HashMap::new();
  for file in files {
    groups
      .entry(output_path(input_dir, &config.output_dir, file, target))
      .or_default()
      .push(file);
  }
  groups
}

fn convert_file(
  converter: &DocumentConverter,
  input: &Path,
  output: &Path,
  target: Target,
  pretty: bool,
) -> Result<()> {
  let content = read_input(input)?;
  let converted = match target {
    Target::Json => parse_markup(&content, converter, pretty)?,
    Target::Html => render_document(&content, converter)?,
  };
  write_output(Some(output), &converted)
}
