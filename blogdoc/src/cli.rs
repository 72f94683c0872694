use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command line interface for blogdoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Convert blog posts between editor documents and HTML"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append, global = true)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append, global = true)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the blogdoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new blogdoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "blogdoc.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Parse HTML markup into editor document JSON.
  Parse {
    /// Markup file to read, or `-` for standard input.
    input: PathBuf,

    /// File to write the document to. Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Render editor document JSON to HTML markup.
  Render {
    /// Document file to read, or `-` for standard input.
    input: PathBuf,

    /// File to write the markup to. Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Pass HTML markup through the document model and render it back.
  Normalize {
    /// Markup file to read, or `-` for standard input.
    input: PathBuf,

    /// File to write the markup to. Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Convert every file in a directory tree in parallel.
  Batch {
    /// Directory containing the files to convert.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory to write converted files to.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of threads to use for parallel processing.
    #[arg(short = 'p', long = "jobs")]
    jobs: Option<usize>,

    /// Format to convert into.
    #[arg(short, long, value_enum, default_value_t = Target::Json)]
    to: Target,
  },
}

/// Output format of a batch conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
  /// Read `.html` files, write document `.json` files.
  Json,
  /// Read document `.json` files, write `.html` files.
  Html,
}

impl Target {
  /// Extensions of the files a conversion into this target reads.
  #[must_use]
  pub const fn source_extensions(self) -> &'static [&'static str] {
    match self {
      Self::Json => &["html", "htm"],
      Self::Html => &["json"],
    }
  }

  /// Extension of the files a conversion into this target writes.
  #[must_use]
  pub const fn extension(self) -> &'static str {
    match self {
      Self::Json => "json",
      Self::Html => "html",
    }
  }
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
