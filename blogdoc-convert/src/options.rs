//! Options controlling the markup emitted by the converter.
//!
//! The parser ignores presentation attributes, so changing any of these only
//! affects serialization and never breaks a round trip.
//!
//! # Examples
//!
//! ```
//! use blogdoc_convert::{ConverterOptionsBuilder, DocumentConverter};
//!
//! let options = ConverterOptionsBuilder::new()
//!   .bullet_list_class("list-disc")
//!   .image_class("")
//!   .build();
//!
//! let converter = DocumentConverter::new(options);
//! ```

/// CSS classes attached to rendered block elements.
///
/// An empty string omits the `class` attribute entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
  /// Class of `<ul>` elements rendered from bullet lists.
  pub bullet_list_class: String,

  /// Class of `<ol>` elements rendered from ordered lists.
  pub ordered_list_class: String,

  /// Class of `<ul data-type="taskList">` elements.
  pub task_list_class: String,

  /// Class of `<li data-type="taskItem">` elements.
  pub task_item_class: String,

  /// Class of `<blockquote>` elements.
  pub blockquote_class: String,

  /// Class of `<img>` elements.
  pub image_class: String,
}

pub const DEFAULT_BULLET_LIST_CLASS: &str =
  "list-disc list-outside leading-3 -mt-2 tight";
pub const DEFAULT_ORDERED_LIST_CLASS: &str =
  "list-decimal list-outside leading-3 -mt-2 tight";
pub const DEFAULT_TASK_LIST_CLASS: &str = "not-prose pl-2";
pub const DEFAULT_TASK_ITEM_CLASS: &str = "flex gap-2 items-start my-4";
pub const DEFAULT_BLOCKQUOTE_CLASS: &str = "border-l-4 border-primary";
pub const DEFAULT_IMAGE_CLASS: &str = "rounded-lg border border-muted";

impl ConverterOptions {
  /// Options with every class cleared, producing bare semantic markup.
  #[must_use]
  pub const fn plain() -> Self {
    Self {
      bullet_list_class:  String::new(),
      ordered_list_class: String::new(),
      task_list_class:    String::new(),
      task_item_class:    String::new(),
      blockquote_class:   String::new(),
      image_class:        String::new(),
    }
  }
}

impl Default for ConverterOptions {
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

/// Builder for constructing `ConverterOptions` with method chaining.
#[derive(Debug, Clone)]
pub struct ConverterOptionsBuilder {
  options: ConverterOptions,
}

impl ConverterOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: ConverterOptions::default(),
    }
  }

  /// Set the class of bullet lists.
  #[must_use]
  pub fn bullet_list_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.bullet_list_class = class.into();
    self
  }

  /// Set the class of ordered lists.
  #[must_use]
  pub fn ordered_list_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.ordered_list_class = class.into();
    self
  }

  /// Set the class of task lists.
  #[must_use]
  pub fn task_list_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.task_list_class = class.into();
    self
  }

  /// Set the class of task items.
  #[must_use]
  pub fn task_item_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.task_item_class = class.into();
    self
  }

  /// Set the class of block quotes.
  #[must_use]
  pub fn blockquote_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.blockquote_class = class.into();
    self
  }

  /// Set the class of images.
  #[must_use]
  pub fn image_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.image_class = class.into();
    self
  }

  /// Build the final `ConverterOptions`.
  #[must_use]
  pub fn build(self) -> ConverterOptions {
    self.options
  }
}

impl Default for ConverterOptionsBuilder {
  fn default() -> Self {
    Self::new()
  }
}
