use blogdoc_convert::{
  ConverterOptions,
  options::{
    DEFAULT_BLOCKQUOTE_CLASS,
    DEFAULT_BULLET_LIST_CLASS,
    DEFAULT_IMAGE_CLASS,
    DEFAULT_ORDERED_LIST_CLASS,
    DEFAULT_TASK_ITEM_CLASS,
    DEFAULT_TASK_LIST_CLASS,
  },
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Classes attached to rendered markup.
///
/// Set a class to an empty string to drop the attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
  pub bullet_list_class:  String,
  pub ordered_list_class: String,
  pub task_list_class:    String,
  pub task_item_class:    String,
  pub blockquote_class:   String,
  pub image_class:        String,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      bullet_list_class:  DEFAULT_BULLET_LIST_CLASS.to_string(),
      ordered_list_class: DEFAULT_ORDERED_LIST_CLASS.to_string(),
      task_list_class:    DEFAULT_TASK_LIST_CLASS.to_string(),
      task_item_class:    DEFAULT_TASK_ITEM_CLASS.to_string(),
      blockquote_class:   DEFAULT_BLOCKQUOTE_CLASS.to_string(),
      image_class:        DEFAULT_IMAGE_CLASS.to_string(),
    }
  }
}

impl RenderConfig {
  /// Apply a single `render.<key>` override. `key` excludes the prefix.
  ///
  /// # Errors
  ///
  /// Returns an error if the key is not a render option.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    let slot = match key {
      "bullet_list_class" => &mut self.bullet_list_class,
      "ordered_list_class" => &mut self.ordered_list_class,
      "task_list_class" => &mut self.task_list_class,
      "task_item_class" => &mut self.task_item_class,
      "blockquote_class" => &mut self.blockquote_class,
      "image_class" => &mut self.image_class,
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: 'render.{key}'. See documentation for \
           supported keys."
        )));
      },
    };

    value.clone_into(slot);
    Ok(())
  }
}

impl From<&RenderConfig> for ConverterOptions {
  fn from(render: &RenderConfig) -> Self {
    Self {
      bullet_list_class:  render.bullet_list_class.clone(),
      ordered_list_class: render.ordered_list_class.clone(),
      task_list_class:    render.task_list_class.clone(),
      task_item_class:    render.task_item_class.clone(),
      blockquote_class:   render.blockquote_class.clone(),
      image_class:        render.image_class.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_defaults_match_converter() {
    let options = ConverterOptions::from(&RenderConfig::default());
    assert_eq!(options, ConverterOptions::default());
  }

  #[test]
  fn test_apply_override() {
    let mut render = RenderConfig::default();
    render.apply_override("image_class", "").unwrap();
    render.apply_override("task_list_class", "tasks").unwrap();
    assert_eq!(render.image_class, "");
    assert_eq!(render.task_list_class, "tasks");
    assert!(render.apply_override("table_class", "x").is_err());
  }
}
