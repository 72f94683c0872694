#![allow(clippy::panic, reason = "Fine in tests")]
use std::path::PathBuf;

use blogdoc::cli::{Cli, Commands, Target};
use clap::Parser;

#[test]
fn test_batch_arguments() {
  let cli = Cli::try_parse_from([
    "blogdoc", "-v", "batch", "-i", "posts", "-p", "4", "--to", "html",
  ])
  .unwrap_or_else(|e| panic!("arguments should parse: {e}"));

  assert!(cli.verbose);
  let Commands::Batch {
    input_dir,
    output_dir,
    jobs,
    to,
  } = cli.command
  else {
    panic!("expected the batch subcommand");
  };
  assert_eq!(input_dir, Some(PathBuf::from("posts")));
  assert_eq!(output_dir, None);
  assert_eq!(jobs, Some(4));
  assert_eq!(to, Target::Html);
}

#[test]
fn test_global_config_flags_after_subcommand() {
  let cli = Cli::try_parse_from([
    "blogdoc",
    "parse",
    "post.html",
    "-c",
    "a.toml",
    "--config",
    "pretty_json=false",
    "-c",
    "b.toml",
  ])
  .unwrap_or_else(|e| panic!("arguments should parse: {e}"));

  assert_eq!(cli.config_files, vec![
    PathBuf::from("a.toml"),
    PathBuf::from("b.toml")
  ]);
  assert_eq!(cli.config_overrides, vec!["pretty_json=false".to_string()]);
  assert!(matches!(
    cli.command,
    Commands::Parse { ref input, output: None } if input == &PathBuf::from("post.html")
  ));
}

#[test]
fn test_init_rejects_unknown_format() {
  assert!(
    Cli::try_parse_from(["blogdoc", "init", "--format", "yaml"]).is_err()
  );
}

#[test]
fn test_batch_defaults_to_json() {
  let cli = Cli::try_parse_from(["blogdoc", "batch"])
    .unwrap_or_else(|e| panic!("arguments should parse: {e}"));
  assert!(matches!(cli.command, Commands::Batch {
    to: Target::Json,
    ..
  }));
}
