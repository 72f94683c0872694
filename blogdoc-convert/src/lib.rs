//! # blogdoc-convert - rich-text documents to HTML and back
//!
//! Converts between the structured document model used by the blog's
//! rich-text editor and the HTML markup the backend stores.
//!
//! ## Quick Start
//!
//! ```rust
//! use blogdoc_convert::{parse_markup_to_document, serialize_document_to_markup};
//!
//! let doc = parse_markup_to_document("<h2>Title</h2><p>Body text</p>");
//! let html = serialize_document_to_markup(&doc);
//!
//! assert_eq!(html, "<h2>Title</h2><p>Body text</p>");
//! ```
//!
//! ## Behavior
//!
//! - **Best effort**: neither direction fails. Unsupported or empty markup is
//!   dropped while parsing, unknown nodes render as nothing.
//! - **Collapsed text**: block text is flattened into a single text leaf,
//!   inline formatting is not preserved.
//! - **Lossless subset**: any document built from the supported node kinds
//!   with non-empty text survives `parse(serialize(doc))` unchanged.
//!
//! ## Configuration
//!
//! ```rust
//! use blogdoc_convert::{ConverterOptions, DocumentConverter, Node, Document};
//!
//! let converter = DocumentConverter::new(ConverterOptions::plain());
//! let doc = Document::new(vec![Node::paragraph("x")]);
//! assert_eq!(converter.serialize(&doc), "<p>x</p>");
//! ```

pub mod converter;
pub mod document;
pub mod error;
pub mod options;
pub mod parse;
pub mod serialize;
pub mod utils;

pub use crate::{
  converter::{
    DocumentConverter,
    parse_markup_to_document,
    serialize_document_to_markup,
  },
  document::{Document, DocumentKind, Node},
  error::{DocumentError, DocumentResult},
  options::{ConverterOptions, ConverterOptionsBuilder},
};
