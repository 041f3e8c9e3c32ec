//! Convert inline text nodes to HTML leaf nodes
//!
//! | text type | tag    | value | props                |
//! |-----------|--------|-------|----------------------|
//! | text      | none   | text  | none                 |
//! | bold      | `b`    | text  | none                 |
//! | italic    | `i`    | text  | none                 |
//! | code      | `code` | text  | none                 |
//! | link      | `a`    | text  | `href`               |
//! | image     | `img`  | `""`  | `src`, `alt` (text)  |

use leafmark_core::{TextNode, TextType};

use crate::node::{HtmlNode, LeafNode};
use crate::{HtmlError, Result};

/// Convert a [`TextNode`] to the [`LeafNode`] that renders it.
///
/// A missing URL on a link or image becomes an empty attribute value.
///
/// # Errors
///
/// [`HtmlError::UnknownTextType`] for a text type this table does not cover.
pub fn text_node_to_html_node(text_node: &TextNode) -> Result<LeafNode> {
    let text = text_node.text();
    let url = match text_node.url() {
        Some(url) => url,
        None => {
            if text_node.text_type().takes_url() {
                tracing::debug!(
                    "{} node {:?} has no url",
                    text_node.text_type(),
                    text
                );
            }
            ""
        }
    };

    let leaf = match text_node.text_type() {
        TextType::Text => LeafNode::text(text),
        TextType::Bold => LeafNode::element("b", text),
        TextType::Italic => LeafNode::element("i", text),
        TextType::Code => LeafNode::element("code", text),
        TextType::Link => LeafNode::element("a", text).with_prop("href", url),
        TextType::Image => LeafNode::element("img", "")
            .with_prop("src", url)
            .with_prop("alt", text),
        other => {
            tracing::debug!("No HTML mapping for text type {}", other);
            return Err(HtmlError::UnknownTextType(other));
        }
    };

    tracing::trace!("Converted {:?} to {:?}", text_node, leaf);
    Ok(leaf)
}

impl TryFrom<&TextNode> for LeafNode {
    type Error = HtmlError;

    fn try_from(text_node: &TextNode) -> Result<Self> {
        text_node_to_html_node(text_node)
    }
}

impl TryFrom<&TextNode> for HtmlNode {
    type Error = HtmlError;

    fn try_from(text_node: &TextNode) -> Result<Self> {
        text_node_to_html_node(text_node).map(HtmlNode::Leaf)
    }
}
