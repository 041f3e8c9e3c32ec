//! Delimiter-based re-tokenization of inline text
//!
//! Splits plain text runs on a literal delimiter such as `**` or `` ` ``,
//! turning the delimited parts into runs of a given style.

use crate::text::{TextNode, TextType};
use crate::{Result, TextError};

/// Split plain text nodes on `delimiter`, styling the delimited parts.
///
/// Nodes that are not plain text, and plain nodes without the delimiter,
/// are passed through unchanged. A plain node containing the delimiter is
/// split on every occurrence; segments alternate between plain text (even
/// positions) and `text_type` (odd positions). Empty segments are kept.
///
/// Only one delimiter/style pair is handled per call. Callers chain calls
/// for bold, italic, code and so on.
///
/// # Errors
///
/// - [`TextError::EmptyDelimiter`] if `delimiter` is empty.
/// - [`TextError::UnbalancedDelimiter`] if a node splits into an odd number
///   of segments. No partial output is returned.
///
/// # Example
///
/// ```rust
/// use leafmark_core::{split_nodes_delimiter, TextNode, TextType};
///
/// let nodes = vec![TextNode::new("a*b*c*d", TextType::Text)];
/// let split = split_nodes_delimiter(&nodes, "*", TextType::Italic).unwrap();
///
/// assert_eq!(split, vec![
///     TextNode::new("a", TextType::Text),
///     TextNode::new("b", TextType::Italic),
///     TextNode::new("c", TextType::Text),
///     TextNode::new("d", TextType::Italic),
/// ]);
/// ```
pub fn split_nodes_delimiter(
    old_nodes: &[TextNode],
    delimiter: &str,
    text_type: TextType,
) -> Result<Vec<TextNode>> {
    if delimiter.is_empty() {
        tracing::debug!(
            "Refusing to split {} nodes on an empty delimiter",
            old_nodes.len()
        );
        return Err(TextError::EmptyDelimiter);
    }

    let mut new_nodes = Vec::with_capacity(old_nodes.len());

    for node in old_nodes {
        if !node.is_plain() || !node.text().contains(delimiter) {
            new_nodes.push(node.clone());
            continue;
        }

        let segments: Vec<&str> = node.text().split(delimiter).collect();
        if segments.len() % 2 == 1 {
            tracing::debug!(
                "Unbalanced delimiter {:?} in {:?} ({} segments)",
                delimiter,
                node.text(),
                segments.len()
            );
            return Err(TextError::UnbalancedDelimiter {
                text: node.text().to_string(),
                delimiter: delimiter.to_string(),
            });
        }

        tracing::debug!(
            "Split {:?} on {:?} into {} {} segments",
            node.text(),
            delimiter,
            segments.len(),
            text_type
        );

        new_nodes.extend(segments.into_iter().enumerate().map(|(i, segment)| {
            if i % 2 == 0 {
                TextNode::new(segment, TextType::Text)
            } else {
                TextNode::new(segment, text_type)
            }
        }));
    }

    Ok(new_nodes)
}
