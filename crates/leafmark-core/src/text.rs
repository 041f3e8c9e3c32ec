//! Inline text model
//!
//! A [`TextNode`] is a run of inline text tagged with its semantic style.
//! It is the unit produced by an inline tokenizer and consumed by both the
//! delimiter splitter and the HTML converter.

use std::fmt;
use std::str::FromStr;

use crate::{Result, TextError};

/// The semantic style of an inline text run
///
/// New styles may be added; code matching on this enum outside this crate
/// must keep a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum TextType {
    /// Plain text
    Text,
    /// Strong emphasis
    Bold,
    /// Emphasis
    Italic,
    /// Inline code
    Code,
    /// Hyperlink, `url` is the href
    Link,
    /// Image, `url` is the source and the text is the alt text
    Image,
}

impl TextType {
    /// All styles, in declaration order
    pub const ALL: [TextType; 6] = [
        TextType::Text,
        TextType::Bold,
        TextType::Italic,
        TextType::Code,
        TextType::Link,
        TextType::Image,
    ];

    /// Canonical lowercase name of the style
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }

    /// Whether the style uses the node's `url`
    pub fn takes_url(&self) -> bool {
        matches!(self, TextType::Link | TextType::Image)
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextType {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        TextType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TextError::InvalidTextType(s.to_string()))
    }
}

/// A run of inline text with its style and optional target URL.
///
/// Immutable once built; equality is structural.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextNode {
    text: String,
    text_type: TextType,
    #[cfg_attr(feature = "serde", serde(default))]
    url: Option<String>,
}

impl TextNode {
    /// Create a text node without a URL
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    /// Create a text node with a target URL (for links and images)
    pub fn with_url(text: impl Into<String>, text_type: TextType, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: Some(url.into()),
        }
    }

    /// Create a text node from a style name such as `"bold"`.
    ///
    /// Fails with [`TextError::InvalidTextType`] when the name is not one of
    /// the known styles.
    pub fn parse(text: impl Into<String>, text_type: &str, url: Option<&str>) -> Result<Self> {
        let text_type = text_type.parse()?;
        Ok(Self {
            text: text.into(),
            text_type,
            url: url.map(str::to_string),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_type(&self) -> TextType {
        self.text_type
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Check if this is a plain text run
    pub fn is_plain(&self) -> bool {
        self.text_type == TextType::Text
    }
}

impl fmt::Debug for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextNode({:?}, {:?}, ", self.text, self.text_type.as_str())?;
        match &self.url {
            Some(url) => write!(f, "{:?})", url),
            None => f.write_str("None)"),
        }
    }
}
