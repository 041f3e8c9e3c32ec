//! leafmark-core - inline text model and delimiter splitting
//!
//! This crate provides the typed inline text representation used by
//! `leafmark`, together with the delimiter splitter that re-tokenizes plain
//! text runs into styled ones.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────────────┐
//! Vec<TextNode> ──▶│ split_nodes_delimiter │──▶ Vec<TextNode> ──▶ leafmark (HTML)
//!                  └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use leafmark_core::{split_nodes_delimiter, TextNode, TextType};
//!
//! let nodes = vec![TextNode::new("run `cargo", TextType::Text)];
//! let nodes = split_nodes_delimiter(&nodes, "`", TextType::Code).unwrap();
//!
//! assert_eq!(nodes[1], TextNode::new("cargo", TextType::Code));
//! ```

mod split;
mod text;

pub use split::split_nodes_delimiter;
pub use text::{TextNode, TextType};

/// Error type for inline text operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("The text type must be one of text, bold, italic, code, link or image, got {0:?}")]
    InvalidTextType(String),

    #[error("Cannot split on an empty delimiter")]
    EmptyDelimiter,

    #[error("Invalid Markdown syntax: unbalanced {delimiter:?} in {text:?}")]
    UnbalancedDelimiter { text: String, delimiter: String },
}

pub type Result<T> = std::result::Result<T, TextError>;
