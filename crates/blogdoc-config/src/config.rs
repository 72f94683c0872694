use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use blogdoc_convert::ConverterOptions;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, render::RenderConfig};

/// Configuration for the blogdoc converter CLI.
///
/// [`Config`] holds the options shared by all subcommands: where batch
/// conversions read from and write to, how many worker threads to use, how
/// JSON is written and which classes the rendered markup carries. Fields are
/// typically loaded from a TOML or JSON config file, but can also be set via
/// CLI arguments or `--config KEY=VALUE` overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directory scanned by batch conversions.
  pub input_dir: Option<PathBuf>,

  /// Directory batch conversions write to.
  pub output_dir: PathBuf,

  /// Number of threads to use for parallel processing.
  pub jobs: Option<usize>,

  /// Whether document JSON is written indented.
  pub pretty_json: bool,

  /// Classes attached to rendered markup.
  pub render: RenderConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input_dir:   None,
      output_dir:  PathBuf::from("build"),
      jobs:        None,
      pretty_json: true,
      render:      RenderConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };

    match ext.to_lowercase().as_str() {
      "json" => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      "toml" => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from files and `KEY=VALUE` overrides.
  ///
  /// Explicit config files are merged in order, later files overriding
  /// earlier ones. Without any, a config file is looked up in the usual
  /// locations and the defaults are used if none exists.
  ///
  /// # Errors
  ///
  /// Returns an error if a config file cannot be loaded or an override is
  /// invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first)?;

      for config_path in rest {
        merged_config.merge(Self::from_file(config_path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load discovered config from {}: {}",
          discovered_config.display(),
          e
        ))
      })?
    } else {
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    if config.jobs == Some(0) {
      return Err(ConfigError::Config(
        "The number of jobs must be at least 1".to_string(),
      ));
    }

    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// Keys are field names, with `render.` prefixing the class options, for
  /// example `render.image_class=rounded` or `jobs=4`. An empty value clears
  /// optional fields.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    if let Some(render_key) = key.strip_prefix("render.") {
      return self.render.apply_override(render_key, value);
    }

    match key {
      "input_dir" => {
        self.input_dir = (!value.is_empty()).then(|| PathBuf::from(value));
      },
      "output_dir" => self.output_dir = PathBuf::from(value),
      "jobs" => {
        self.jobs = if value.is_empty() {
          None
        } else {
          Some(value.parse().map_err(|e| {
            ConfigError::Config(format!("Invalid value for 'jobs': {e}"))
          })?)
        };
      },
      "pretty_json" => {
        self.pretty_json = value.parse().map_err(|_| {
          ConfigError::Config(format!(
            "Invalid value for 'pretty_json': '{value}'. Expected true or \
             false"
          ))
        })?;
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for \
           supported keys."
        )));
      },
    }

    Ok(())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - Plain fields and the render section: Other's value always replaces
  pub fn merge(&mut self, other: Self) {
    if other.input_dir.is_some() {
      self.input_dir = other.input_dir;
    }
    if other.jobs.is_some() {
      self.jobs = other.jobs;
    }
    self.output_dir = other.output_dir;
    self.pretty_json = other.pretty_json;
    self.render = other.render;
  }

  /// Converter options derived from the render section.
  #[must_use]
  pub fn converter_options(&self) -> ConverterOptions {
    ConverterOptions::from(&self.render)
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let config_filenames = [
          "blogdoc.toml",
          "blogdoc.json",
          ".blogdoc.toml",
          ".blogdoc.json",
        ];

        let current_dir = std::env::current_dir().ok()?;
        for filename in &config_filenames {
          let config_path = current_dir.join(filename);
          if config_path.exists() {
            return Some(config_path);
          }
        }

        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
          let xdg_config_dir = PathBuf::from(xdg_config_home);
          for filename in &["blogdoc.toml", "blogdoc.json"] {
            let config_path = xdg_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        None
      })
      .clone()
  }

  /// Generate a default configuration file in the given format.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported, or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let defaults = Self::default();
    let config_content = match format {
      "toml" => {
        format!(
          "# blogdoc configuration\n#\n# Every key may also be set with \
           `--config KEY=VALUE`,\n# using `render.<key>` for the render \
           section.\n\n{}",
          toml::to_string_pretty(&defaults)?
        )
      },
      "json" => serde_json::to_string_pretty(&defaults)?,
      _ => {
        return Err(ConfigError::Config(format!(
          "Unsupported config format: {format}"
        )));
      },
    };

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::unwrap_used,
    clippy::field_reassign_with_default,
    reason = "Fine in tests"
  )]

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_from_toml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blogdoc.toml");
    fs::write(
      &path,
      r#"
input_dir = "posts"
jobs = 2

[render]
image_class = ""
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.input_dir, Some(PathBuf::from("posts")));
    assert_eq!(config.jobs, Some(2));
    assert_eq!(config.output_dir, PathBuf::from("build"));
    assert!(config.pretty_json);
    assert_eq!(config.render.image_class, "");
    assert_eq!(
      config.render.bullet_list_class,
      RenderConfig::default().bullet_list_class
    );
  }

  #[test]
  fn test_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blogdoc.json");
    fs::write(
      &path,
      r#"{"output_dir": "out", "pretty_json": false, "render": {"blockquote_class": "quote"}}"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert!(!config.pretty_json);
    assert_eq!(config.render.blockquote_class, "quote");
  }

  #[test]
  fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blogdoc.yaml");
    fs::write(&path, "jobs: 1").unwrap();
    assert!(Config::from_file(&path).is_err());

    let bare = dir.path().join("blogdoc");
    fs::write(&bare, "").unwrap();
    assert!(Config::from_file(&bare).is_err());
  }

  #[test]
  fn test_read_and_parse_errors_name_the_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = Config::from_file(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Config(_)));
    assert!(err.to_string().contains("missing.toml"), "got {err}");

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "jobs = [").unwrap();
    let err = Config::from_file(&broken).unwrap_err();
    assert!(matches!(err, ConfigError::Config(_)));
    assert!(err.to_string().contains("broken.toml"), "got {err}");
  }

  #[test]
  fn test_load_merges_in_order() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.toml");
    let second = dir.path().join("b.toml");
    fs::write(&first, "input_dir = \"posts\"\njobs = 4\n").unwrap();
    fs::write(&second, "output_dir = \"site\"\n").unwrap();

    let config = Config::load(&[first, second], &[]).unwrap();
    assert_eq!(config.input_dir, Some(PathBuf::from("posts")));
    assert_eq!(config.jobs, Some(4));
    assert_eq!(config.output_dir, PathBuf::from("site"));
  }

  #[test]
  fn test_load_applies_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.toml");
    fs::write(&path, "jobs = 4\n").unwrap();

    let config = Config::load(&[path], &[
      "jobs=".to_string(),
      "render.image_class = framed".to_string(),
      "pretty_json=false".to_string(),
    ])
    .unwrap();
    assert_eq!(config.jobs, None);
    assert_eq!(config.render.image_class, "framed");
    assert!(!config.pretty_json);
    assert_eq!(config.converter_options().image_class, "framed");
  }

  #[test]
  fn test_load_rejects_zero_jobs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.toml");
    fs::write(&path, "jobs = 0\n").unwrap();
    assert!(Config::load(&[path], &[]).is_err());
  }

  #[test]
  fn test_invalid_overrides() {
    let mut config = Config::default();
    assert!(config.apply_overrides(&["jobs".to_string()]).is_err());
    assert!(config.apply_overrides(&["jobs=many".to_string()]).is_err());
    assert!(config.apply_overrides(&["pretty_json=yes".to_string()]).is_err());
    assert!(config.apply_overrides(&["title=x".to_string()]).is_err());
    assert!(config.apply_overrides(&["render.nope=x".to_string()]).is_err());
  }

  #[test]
  fn test_merge_keeps_unset_options() {
    let mut base = Config::default();
    base.input_dir = Some(PathBuf::from("posts"));
    base.jobs = Some(3);

    let mut other = Config::default();
    other.output_dir = PathBuf::from("public");
    base.merge(other);

    assert_eq!(base.input_dir, Some(PathBuf::from("posts")));
    assert_eq!(base.jobs, Some(3));
    assert_eq!(base.output_dir, PathBuf::from("public"));
  }

  #[test]
  fn test_generate_default_config_round_trips() {
    let dir = tempdir().unwrap();

    for format in ["toml", "json"] {
      let path = dir.path().join(format!("blogdoc.{format}"));
      Config::generate_default_config(format, &path).unwrap();
      assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    let path = dir.path().join("blogdoc.yaml");
    assert!(Config::generate_default_config("yaml", &path).is_err());
  }
}
