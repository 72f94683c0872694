//! Document to markup conversion.
//!
//! Serialization is a structural fold: each node renders its children in
//! order with no separators and wraps them in its own element. Unknown nodes
//! render to an empty string so partially-built editor state never fails.
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
  document::{Document, ImageAttrs, Node, YoutubeAttrs},
  options::ConverterOptions,
};

/// Render a whole document to HTML.
#[must_use]
pub fn serialize_document(
  document: &Document,
  options: &ConverterOptions,
) -> String {
  let mut out = String::new();
  write_nodes(&document.children, options, &mut out);
  out
}

/// Render a single node (and its subtree) to HTML.
#[must_use]
pub fn serialize_node(node: &Node, options: &ConverterOptions) -> String {
  let mut out = String::new();
  write_node(node, options, &mut out);
  out
}

fn write_nodes(nodes: &[Node], options: &ConverterOptions, out: &mut String) {
  for node in nodes {
    write_node(node, options, out);
  }
}

fn write_node(node: &Node, options: &ConverterOptions, out: &mut String) {
  match node {
    Node::Paragraph { content } => {
      out.push_str("<p>");
      write_nodes(content, options, out);
      out.push_str("</p>");
    },
    Node::Heading { attrs, content } => {
      let level = attrs.level.clamp(1, 6);
      out.push_str(&format!("<h{level}>"));
      write_nodes(content, options, out);
      out.push_str(&format!("</h{level}>"));
    },
    Node::BulletList { content, .. } => {
      out.push_str(&format!("<ul{}>", class_attr(&options.bullet_list_class)));
      write_nodes(content, options, out);
      out.push_str("</ul>");
    },
    Node::OrderedList { attrs, content } => {
      let start = if attrs.start == 1 {
        String::new()
      } else {
        format!(" start=\"{}\"", attrs.start)
      };
      out.push_str(&format!(
        "<ol{}{start}>",
        class_attr(&options.ordered_list_class)
      ));
      write_nodes(content, options, out);
      out.push_str("</ol>");
    },
    Node::ListItem { content } => {
      out.push_str("<li>");
      write_nodes(content, options, out);
      out.push_str("</li>");
    },
    Node::TaskList { content } => {
      out.push_str(&format!(
        "<ul{} data-type=\"taskList\">",
        class_attr(&options.task_list_class)
      ));
      write_nodes(content, options, out);
      out.push_str("</ul>");
    },
    Node::TaskItem { attrs, content } => {
      let checked = if attrs.checked {
        " checked=\"checked\""
      } else {
        ""
      };
      out.push_str(&format!(
        "<li{} data-checked=\"{}\" data-type=\"taskItem\"><label><input \
         type=\"checkbox\"{checked}><span></span></label><div>",
        class_attr(&options.task_item_class),
        attrs.checked
      ));
      write_nodes(content, options, out);
      out.push_str("</div></li>");
    },
    Node::BlockQuote { content } => {
      out.push_str(&format!(
        "<blockquote{}>",
        class_attr(&options.blockquote_class)
      ));
      write_nodes(content, options, out);
      out.push_str("</blockquote>");
    },
    Node::CodeBlock { attrs, content } => {
      match attrs.language.as_deref().filter(|lang| !lang.is_empty()) {
        Some(language) => {
          out.push_str(&format!(
            "<pre><code class=\"language-{}\">",
            encode_double_quoted_attribute(language)
          ));
        },
        None => out.push_str("<pre><code>"),
      }
      write_nodes(content, options, out);
      out.push_str("</code></pre>");
    },
    Node::Image { attrs } => write_image(attrs, options, out),
    Node::YoutubeEmbed { attrs } => write_youtube(attrs, out),
    Node::TwitterEmbed { attrs } => {
      let src = encode_double_quoted_attribute(&attrs.src);
      out.push_str(&format!(
        "<a href=\"{src}\">{}</a>",
        encode_text(&attrs.src)
      ));
    },
    Node::Text { text } => out.push_str(&encode_text(text)),
    Node::Unknown => {},
  }
}

fn write_image(
  attrs: &ImageAttrs,
  options: &ConverterOptions,
  out: &mut String,
) {
  out.push_str(&format!(
    "<img{} src=\"{}\" alt=\"{}\"",
    class_attr(&options.image_class),
    encode_double_quoted_attribute(&attrs.src),
    encode_double_quoted_attribute(attrs.alt.as_deref().unwrap_or_default())
  ));

  for (name, value) in [
    ("title", &attrs.title),
    ("width", &attrs.width),
    ("height", &attrs.height),
  ] {
    if let Some(value) = value {
      out.push_str(&format!(
        " {name}=\"{}\"",
        encode_double_quoted_attribute(value)
      ));
    }
  }

  out.push('>');
}

fn write_youtube(attrs: &YoutubeAttrs, out: &mut String) {
  out.push_str(&format!(
    "<iframe src=\"{}\" width=\"{}\" height=\"{}\" frameborder=\"0\" \
     allowfullscreen></iframe>",
    encode_double_quoted_attribute(&attrs.src),
    attrs.width,
    attrs.height
  ));
}

/// ` class="..."`, or nothing for an empty class list.
fn class_attr(class: &str) -> String {
  if class.is_empty() {
    String::new()
  } else {
    format!(" class=\"{}\"", encode_double_quoted_attribute(class))
  }
}
