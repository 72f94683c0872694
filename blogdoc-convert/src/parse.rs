//! Markup to document conversion.
//!
//! Only the top-level children of `<body>` are considered, and each maps to
//! at most one [`Node`]. Anything the converter does not recognize, including
//! blocks that carry no text, is dropped without error.
use kuchikikiki::{ElementData, NodeRef};
use log::{debug, trace};
use tendril::TendrilSink;

use crate::{
  document::{
    BulletListAttrs,
    DEFAULT_EMBED_HEIGHT,
    DEFAULT_EMBED_WIDTH,
    Document,
    ImageAttrs,
    Node,
    OrderedListAttrs,
    TwitterAttrs,
    YoutubeAttrs,
  },
  utils::{extract_text, non_empty_attr, parse_dimension},
};

/// Parse an HTML string into a [`Document`].
///
/// The result is best-effort: unsupported or empty elements are omitted.
#[must_use]
pub fn parse_markup(html: &str) -> Document {
  let dom = kuchikikiki::parse_html().one(html);

  let Ok(body) = dom.select_first("body") else {
    return Document::default();
  };

  let children = body
    .as_node()
    .children()
    .filter_map(|node| parse_top_level(&node))
    .collect();

  Document::new(children)
}

fn parse_top_level(node: &NodeRef) -> Option<Node> {
  let element = node.as_element()?;
  let tag = element.name.local.as_ref();

  let parsed = match tag {
    "p" => extract_text(node.children()).map(Node::paragraph),
    "h1" => extract_text(node.children()).map(|text| Node::heading(1, text)),
    "h2" => extract_text(node.children()).map(|text| Node::heading(2, text)),
    "h3" => extract_text(node.children()).map(|text| Node::heading(3, text)),
    "ul" if attr_equals(element, "data-type", "taskList") => {
      Some(parse_task_list(node))
    },
    "ul" => Some(parse_bullet_list(node)),
    "ol" => Some(parse_ordered_list(node)),
    "blockquote" => {
      extract_text(node.children()).map(|text| {
        Node::BlockQuote {
          content: vec![Node::paragraph(text)],
        }
      })
    },
    "pre" => {
      extract_text(node.children()).map(|text| {
        Node::code_block(code_language(node).as_deref(), text)
      })
    },
    "img" => Some(parse_image(element)),
    "iframe" => parse_youtube(element),
    "a" => parse_twitter(element),
    _ => {
      trace!("Skipping unsupported top-level <{tag}>");
      return None;
    },
  };

  if parsed.is_none() {
    debug!("Dropping <{tag}> without usable content");
  }

  parsed
}

fn attr_equals(element: &ElementData, name: &str, expected: &str) -> bool {
  element.attributes.borrow().get(name) == Some(expected)
}

/// Direct `<li>` children of a list element. Other children are ignored.
fn list_items(list: &NodeRef) -> impl Iterator<Item = NodeRef> {
  list.children().filter(|child| {
    child
      .as_element()
      .is_some_and(|element| element.name.local.as_ref() == "li")
  })
}

/// Paragraph holding the collapsed text of an item, or nothing if it has none.
fn item_paragraph(item: &NodeRef) -> Node {
  extract_text(item.children())
    .map_or_else(Node::empty_paragraph, Node::paragraph)
}

fn parse_task_list(list: &NodeRef) -> Node {
  let content = list_items(list)
    .map(|item| {
      let checked = item
        .as_element()
        .is_some_and(|element| attr_equals(element, "data-checked", "true"));
      Node::task_item(checked, item_paragraph(&item))
    })
    .collect();

  Node::TaskList { content }
}

fn parse_bullet_list(list: &NodeRef) -> Node {
  let content = list_items(list)
    .map(|item| Node::list_item(item_paragraph(&item)))
    .collect();

  Node::BulletList {
    attrs: BulletListAttrs { tight: true },
    content,
  }
}

// The source `start` attribute is not read; parsed lists always restart at 1.
fn parse_ordered_list(list: &NodeRef) -> Node {
  let content = list_items(list)
    .map(|item| Node::list_item(item_paragraph(&item)))
    .collect();

  Node::OrderedList {
    attrs: OrderedListAttrs {
      start: 1,
      tight: true,
    },
    content,
  }
}

/// Language named by a `language-*` class on the `<code>` inside a `<pre>`.
fn code_language(pre: &NodeRef) -> Option<String> {
  let code = pre.select_first("code").ok()?;
  let attributes = code.attributes.borrow();

  attributes
    .get("class")?
    .split_whitespace()
    .find_map(|class| class.strip_prefix("language-"))
    .filter(|language| !language.is_empty())
    .map(ToString::to_string)
}

fn parse_image(element: &ElementData) -> Node {
  let src = element
    .attributes
    .borrow()
    .get("src")
    .unwrap_or_default()
    .to_string();

  Node::Image {
    attrs: ImageAttrs {
      src,
      alt: non_empty_attr(element, "alt"),
      title: non_empty_attr(element, "title"),
      width: non_empty_attr(element, "width"),
      height: non_empty_attr(element, "height"),
    },
  }
}

// The playback offset cannot be recovered from markup, so `start` is 0.
fn parse_youtube(element: &ElementData) -> Option<Node> {
  let attributes = element.attributes.borrow();
  let src = attributes.get("src")?;

  if !src.contains("youtube.com") {
    trace!("Skipping non-YouTube iframe: {src}");
    return None;
  }

  Some(Node::YoutubeEmbed {
    attrs: YoutubeAttrs {
      src:    src.to_string(),
      start:  0,
      width:  parse_dimension(attributes.get("width"), DEFAULT_EMBED_WIDTH),
      height: parse_dimension(attributes.get("height"), DEFAULT_EMBED_HEIGHT),
    },
  })
}

fn parse_twitter(element: &ElementData) -> Option<Node> {
  let attributes = element.attributes.borrow();
  let href = attributes.get("href")?;

  if !href.contains("twitter.com") {
    trace!("Skipping non-Twitter link: {href}");
    return None;
  }

  Some(Node::TwitterEmbed {
    attrs: TwitterAttrs {
      src: href.to_string(),
    },
  })
}
