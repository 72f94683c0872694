//! Helpers shared by the markup parser.
use kuchikikiki::{ElementData, NodeRef, iter::NodeIterator};

/// Collapse the text of a sequence of sibling nodes into one string.
///
/// Every descendant text run is trimmed, empty runs are skipped and the rest
/// are joined with a single space. Returns `None` when no text remains, which
/// callers treat as "drop this block".
///
/// The walk uses the tree's sibling and parent links, so arbitrarily deep
/// nesting does not grow the call stack.
pub fn extract_text<I>(children: I) -> Option<String>
where
  I: IntoIterator<Item = NodeRef>,
{
  let runs: Vec<String> = children
    .into_iter()
    .flat_map(|child| child.inclusive_descendants().text_nodes())
    .filter_map(|text| {
      let text = text.borrow();
      let trimmed = text.trim();
      (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
    .collect();

  if runs.is_empty() {
    None
  } else {
    Some(runs.join(" "))
  }
}

/// Read an attribute, treating an empty value the same as a missing one.
pub fn non_empty_attr(element: &ElementData, name: &str) -> Option<String> {
  element
    .attributes
    .borrow()
    .get(name)
    .filter(|value| !value.is_empty())
    .map(ToString::to_string)
}

/// Parse an embed dimension the way browsers read `width="800px"`.
///
/// Leading whitespace is skipped and the longest run of ASCII digits is used.
/// Missing, unparsable and zero values all yield `default`.
pub fn parse_dimension(value: Option<&str>, default: u32) -> u32 {
  let Some(value) = value else {
    return default;
  };

  let digits: String = value
    .trim_start()
    .chars()
    .take_while(char::is_ascii_digit)
    .collect();

  match digits.parse::<u32>() {
    Ok(0) | Err(_) => default,
    Ok(n) => n,
  }
}

#[cfg(test)]
mod tests {
  use tendril::TendrilSink;

  use super::*;

  fn body_children(html: &str) -> Vec<NodeRef> {
    let document = kuchikikiki::parse_html().one(html);
    document
      .select_first("body")
      .map(|body| body.as_node().children().collect())
      .unwrap_or_default()
  }

  #[test]
  fn test_extract_text_joins_runs() {
    let nodes = body_children("<p>Hello <b>big</b>   <i> world </i></p>");
    assert_eq!(
      extract_text(nodes[0].children()),
      Some("Hello big world".to_string())
    );
  }

  #[test]
  fn test_extract_text_empty_is_none() {
    let nodes = body_children("<p><span></span>   </p>");
    assert_eq!(extract_text(nodes[0].children()), None);
    assert_eq!(extract_text(Vec::new()), None);
  }

  #[test]
  fn test_extract_text_skips_empty_runs() {
    let nodes = body_children("<p><span></span>a<br>b</p>");
    assert_eq!(extract_text(nodes[0].children()), Some("a b".to_string()));
  }

  #[test]
  fn test_extract_text_deeply_nested() {
    let depth = 50_500;
    let html = format!(
      "<p>{}deep{}</p>",
      "<span>".repeat(depth),
      "</span>".repeat(depth)
    );
    let nodes = body_children(&html);
    assert_eq!(extract_text(nodes[0].children()), Some("deep".to_string()));
  }

  #[test]
  fn test_parse_dimension() {
    assert_eq!(parse_dimension(Some("800"), 640), 800);
    assert_eq!(parse_dimension(Some(" 450px"), 480), 450);
    assert_eq!(parse_dimension(Some("100%"), 640), 100);
    assert_eq!(parse_dimension(Some("auto"), 640), 640);
    assert_eq!(parse_dimension(Some(""), 480), 480);
    assert_eq!(parse_dimension(Some("0"), 480), 480);
    assert_eq!(parse_dimension(None, 640), 640);
  }
}
