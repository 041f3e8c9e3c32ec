//! # leafmark
//!
//! Convert inline text nodes to an HTML node tree and render it.
//!
//! ## Design
//!
//! The inline text model lives in `leafmark-core` and is re-exported here.
//! This crate adds the HTML side:
//!
//! - **[`LeafNode`]**: a single value, optionally wrapped in a tag
//! - **[`ParentNode`]**: a tag wrapping an ordered list of children
//! - **[`text_node_to_html_node`]**: the mapping from a [`TextNode`] to a leaf
//!
//! Rendering is plain string concatenation: nothing is escaped and no
//! whitespace is inserted between children.
//!
//! ## Example
//!
//! ```rust
//! use leafmark::{split_nodes_delimiter, HtmlNode, ParentNode, TextNode, TextType, ToHtml};
//!
//! let nodes = vec![TextNode::new("A **bold", TextType::Text)];
//! let nodes = split_nodes_delimiter(&nodes, "**", TextType::Bold).unwrap();
//!
//! let children = nodes
//!     .iter()
//!     .map(HtmlNode::try_from)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let p = ParentNode::new("p", children);
//! let div = ParentNode::new("div", vec![p.into()]);
//! assert_eq!(div.to_html().unwrap(), "<div><p>A <b>bold</b></p></div>");
//! ```

mod convert;
pub mod node;

pub use convert::text_node_to_html_node;
pub use leafmark_core::{split_nodes_delimiter, TextError, TextNode, TextType};
pub use node::{HtmlNode, LeafNode, ParentNode, Props, ToHtml};

/// Error type for rendering and conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("This node type cannot be rendered to HTML")]
    NotImplemented,

    #[error("A LeafNode must have a value.")]
    MissingValue,

    #[error("ParentNode object must have tag.")]
    MissingTag,

    #[error("ParentNode object must have children nodes.")]
    MissingChildren,

    #[error("TextNode does not have a valid TextType: {0}")]
    UnknownTextType(TextType),

    #[error(transparent)]
    Text(#[from] TextError),
}

pub type Result<T> = std::result::Result<T, HtmlError>;
