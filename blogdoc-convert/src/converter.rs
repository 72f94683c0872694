//! The converter facade tying parser, serializer and options together.
//!
//! Both directions are pure: a [`DocumentConverter`] holds only its options,
//! so one instance can be shared freely between threads.
use crate::{
  document::{Document, Node},
  options::ConverterOptions,
  parse::parse_markup,
  serialize::{serialize_document, serialize_node},
};

/// Converts between HTML markup and structured documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter {
  options: ConverterOptions,
}

impl DocumentConverter {
  /// Create a new `DocumentConverter` with the given options.
  #[must_use]
  pub const fn new(options: ConverterOptions) -> Self {
    Self { options }
  }

  /// Access converter options.
  #[must_use]
  pub const fn options(&self) -> &ConverterOptions {
    &self.options
  }

  /// Parse markup into a document. Unsupported content is dropped.
  #[must_use]
  pub fn parse(&self, html: &str) -> Document {
    parse_markup(html)
  }

  /// Render a document to markup.
  #[must_use]
  pub fn serialize(&self, document: &Document) -> String {
    serialize_document(document, &self.options)
  }

  /// Render a single subtree to markup.
  #[must_use]
  pub fn serialize_node(&self, node: &Node) -> String {
    serialize_node(node, &self.options)
  }

  /// Pass markup through the document model, yielding the markup the editor
  /// would store after loading and saving it unchanged.
  #[must_use]
  pub fn normalize(&self, html: &str) -> String {
    self.serialize(&self.parse(html))
  }
}

/// Parse an HTML string into a [`Document`].
///
/// # Examples
///
/// ```
/// use blogdoc_convert::{Node, parse_markup_to_document};
///
/// let doc = parse_markup_to_document("<p>Hello</p><table></table>");
/// assert_eq!(doc.children, vec![Node::paragraph("Hello")]);
/// ```
#[must_use]
pub fn parse_markup_to_document(html: &str) -> Document {
  parse_markup(html)
}

/// Render a [`Document`] to an HTML string using the default options.
///
/// # Examples
///
/// ```
/// use blogdoc_convert::{Document, Node, serialize_document_to_markup};
///
/// let doc = Document::new(vec![Node::paragraph("Hello")]);
/// assert_eq!(serialize_document_to_markup(&doc), "<p>Hello</p>");
/// ```
#[must_use]
pub fn serialize_document_to_markup(document: &Document) -> String {
  serialize_document(document, &ConverterOptions::default())
}
