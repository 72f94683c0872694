//! Structured document model shared with the rich-text editor.
//!
//! The serde representation matches the JSON the editor exchanges with the
//! front end:
//!
//! ```json
//! {
//!   "type": "doc",
//!   "content": [
//!     { "type": "heading", "attrs": { "level": 2 }, "content": [
//!       { "type": "text", "text": "Hello" }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Node kinds the converter does not know about deserialize into
//! [`Node::Unknown`] instead of failing, so partially-constructed editor
//! state can always be loaded and rendered.
use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, DocumentResult};

/// Root discriminator of a [`Document`]. Only `"doc"` exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
  #[default]
  #[serde(rename = "doc")]
  Doc,
}

/// Root of a structured rich-text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  #[serde(rename = "type", default)]
  pub kind:     DocumentKind,
  #[serde(rename = "content", default)]
  pub children: Vec<Node>,
}

impl Document {
  /// Create a document owning the given top-level nodes.
  #[must_use]
  pub const fn new(children: Vec<Node>) -> Self {
    Self {
      kind: DocumentKind::Doc,
      children,
    }
  }

  /// Whether the document has no top-level nodes.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.children.is_empty()
  }

  /// Deserialize a document from editor JSON.
  ///
  /// # Errors
  ///
  /// Returns [`DocumentError::Json`] if the input is not valid JSON or does
  /// not have the shape of a document.
  pub fn from_json(json: &str) -> DocumentResult<Self> {
    serde_json::from_str(json).map_err(DocumentError::from)
  }

  /// Serialize the document to compact editor JSON.
  ///
  /// # Errors
  ///
  /// Returns [`DocumentError::Json`] if serialization fails.
  pub fn to_json(&self) -> DocumentResult<String> {
    serde_json::to_string(self).map_err(DocumentError::from)
  }

  /// Serialize the document to indented editor JSON.
  ///
  /// # Errors
  ///
  /// Returns [`DocumentError::Json`] if serialization fails.
  pub fn to_json_pretty(&self) -> DocumentResult<String> {
    serde_json::to_string_pretty(self).map_err(DocumentError::from)
  }

  /// Plain text of every top-level node, one entry per node that has any.
  #[must_use]
  pub fn plain_text(&self) -> Vec<String> {
    self
      .children
      .iter()
      .map(Node::plain_text)
      .filter(|text| !text.is_empty())
      .collect()
  }
}

/// One typed node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
  Paragraph {
    #[serde(default)]
    content: Vec<Self>,
  },
  Heading {
    #[serde(default)]
    attrs:   HeadingAttrs,
    #[serde(default)]
    content: Vec<Self>,
  },
  BulletList {
    #[serde(default)]
    attrs:   BulletListAttrs,
    #[serde(default)]
    content: Vec<Self>,
  },
  OrderedList {
    #[serde(default)]
    attrs:   OrderedListAttrs,
    #[serde(default)]
    content: Vec<Self>,
  },
  TaskList {
    #[serde(default)]
    content: Vec<Self>,
  },
  ListItem {
    #[serde(default)]
    content: Vec<Self>,
  },
  TaskItem {
    #[serde(default)]
    attrs:   TaskItemAttrs,
    #[serde(default)]
    content: Vec<Self>,
  },
  #[serde(rename = "blockquote")]
  BlockQuote {
    #[serde(default)]
    content: Vec<Self>,
  },
  CodeBlock {
    #[serde(default)]
    attrs:   CodeBlockAttrs,
    #[serde(default)]
    content: Vec<Self>,
  },
  Image {
    #[serde(default)]
    attrs: ImageAttrs,
  },
  #[serde(rename = "youtube")]
  YoutubeEmbed {
    #[serde(default)]
    attrs: YoutubeAttrs,
  },
  #[serde(rename = "twitter")]
  TwitterEmbed {
    #[serde(default)]
    attrs: TwitterAttrs,
  },
  Text {
    #[serde(default)]
    text: String,
  },
  /// Any node kind outside the supported set. Renders to nothing.
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
  pub level: u8,
}

impl Default for HeadingAttrs {
  fn default() -> Self {
    Self { level: 1 }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletListAttrs {
  #[serde(default)]
  pub tight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedListAttrs {
  #[serde(default = "default_list_start")]
  pub start: u32,
  #[serde(default)]
  pub tight: bool,
}

const fn default_list_start() -> u32 {
  1
}

impl Default for OrderedListAttrs {
  fn default() -> Self {
    Self {
      start: default_list_start(),
      tight: false,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItemAttrs {
  #[serde(default)]
  pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
  #[serde(default)]
  pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttrs {
  #[serde(default)]
  pub src:    String,
  #[serde(default)]
  pub alt:    Option<String>,
  #[serde(default)]
  pub title:  Option<String>,
  #[serde(default)]
  pub width:  Option<String>,
  #[serde(default)]
  pub height: Option<String>,
}

/// Fallback width of an embedded video when the markup carries none.
pub const DEFAULT_EMBED_WIDTH: u32 = 640;

/// Fallback height of an embedded video when the markup carries none.
pub const DEFAULT_EMBED_HEIGHT: u32 = 480;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeAttrs {
  #[serde(default)]
  pub src:    String,
  #[serde(default)]
  pub start:  u32,
  #[serde(default = "default_embed_width")]
  pub width:  u32,
  #[serde(default = "default_embed_height")]
  pub height: u32,
}

const fn default_embed_width() -> u32 {
  DEFAULT_EMBED_WIDTH
}

const fn default_embed_height() -> u32 {
  DEFAULT_EMBED_HEIGHT
}

impl Default for YoutubeAttrs {
  fn default() -> Self {
    Self {
      src:    String::new(),
      start:  0,
      width:  DEFAULT_EMBED_WIDTH,
      height: DEFAULT_EMBED_HEIGHT,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterAttrs {
  #[serde(default)]
  pub src: String,
}

impl Node {
  /// Inline text leaf.
  #[must_use]
  pub fn text(value: impl Into<String>) -> Self {
    Self::Text { text: value.into() }
  }

  /// Paragraph holding a single text leaf.
  #[must_use]
  pub fn paragraph(text: impl Into<String>) -> Self {
    Self::Paragraph {
      content: vec![Self::text(text)],
    }
  }

  /// Paragraph with no inline content.
  #[must_use]
  pub const fn empty_paragraph() -> Self {
    Self::Paragraph {
      content: Vec::new(),
    }
  }

  /// Heading of the given level holding a single text leaf.
  #[must_use]
  pub fn heading(level: u8, text: impl Into<String>) -> Self {
    Self::Heading {
      attrs:   HeadingAttrs { level },
      content: vec![Self::text(text)],
    }
  }

  /// Code block with an optional language tag.
  #[must_use]
  pub fn code_block(language: Option<&str>, text: impl Into<String>) -> Self {
    Self::CodeBlock {
      attrs:   CodeBlockAttrs {
        language: language.map(ToOwned::to_owned),
      },
      content: vec![Self::text(text)],
    }
  }

  /// List item wrapping one paragraph.
  #[must_use]
  pub fn list_item(paragraph: Self) -> Self {
    Self::ListItem {
      content: vec![paragraph],
    }
  }

  /// Task item wrapping one paragraph.
  #[must_use]
  pub fn task_item(checked: bool, paragraph: Self) -> Self {
    Self::TaskItem {
      attrs:   TaskItemAttrs { checked },
      content: vec![paragraph],
    }
  }

  /// Child nodes, empty for leaves and embeds.
  #[must_use]
  pub fn children(&self) -> &[Self] {
    match self {
      Self::Paragraph { content }
      | Self::Heading { content, .. }
      | Self::BulletList { content, .. }
      | Self::OrderedList { content, .. }
      | Self::TaskList { content }
      | Self::ListItem { content }
      | Self::TaskItem { content, .. }
      | Self::BlockQuote { content }
      | Self::CodeBlock { content, .. } => content,
      Self::Image { .. }
      | Self::YoutubeEmbed { .. }
      | Self::TwitterEmbed { .. }
      | Self::Text { .. }
      | Self::Unknown => &[],
    }
  }

  /// Concatenated text of every descendant leaf, in document order.
  #[must_use]
  pub fn plain_text(&self) -> String {
    let mut out = String::new();
    self.collect_text(&mut out);
    out
  }

  fn collect_text(&self, out: &mut String) {
    if let Self::Text { text } = self {
      out.push_str(text);
      return;
    }
    for child in self.children() {
      child.collect_text(out);
    }
  }
}
