//! HTML node tree and rendering.
//!
//! A tree is built from two kinds of nodes: [`LeafNode`]s hold a single value
//! and no children, [`ParentNode`]s hold an ordered list of children and no
//! value. Both render to an HTML string through the [`ToHtml`] trait.
//!
//! Rendering does not escape anything: values and attribute values are
//! written verbatim. Void elements such as `img` are not special-cased and
//! always get a closing tag.

use std::fmt;

use indexmap::IndexMap;

use crate::{HtmlError, Result};

/// HTML attributes, rendered in insertion order
pub type Props = IndexMap<String, String>;

/// Something that can be rendered to an HTML string.
///
/// Implementors must provide the tag and attribute accessors. The provided
/// [`ToHtml::to_html`] always fails with [`HtmlError::NotImplemented`], so a
/// node type has to override it before it can be rendered.
pub trait ToHtml {
    /// The element's tag name, `None` for raw text
    fn tag(&self) -> Option<&str>;

    /// The element's attributes
    fn props(&self) -> Option<&Props>;

    /// Render this node (and its descendants) to HTML
    fn to_html(&self) -> Result<String> {
        Err(HtmlError::NotImplemented)
    }

    /// Render the attributes as ` key="value"` pairs, one leading space each
    fn props_to_html(&self) -> String {
        let Some(props) = self.props() else {
            return String::new();
        };

        let mut result = String::new();
        for (name, value) in props {
            result.push(' ');
            result.push_str(name);
            result.push_str("=\"");
            result.push_str(value);
            result.push('"');
        }
        result
    }
}

/// A node without children, holding a single value.
///
/// Without a tag the value is rendered as raw text.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub props: Option<Props>,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: Option<&str>, props: Option<Props>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            props,
        }
    }

    /// Create a raw text leaf
    pub fn text(value: &str) -> Self {
        Self::new(None, Some(value), None)
    }

    /// Create a leaf element with a tag and value
    pub fn element(tag: &str, value: &str) -> Self {
        Self::new(Some(tag), Some(value), None)
    }

    /// Add an attribute, builder style
    pub fn with_prop(mut self, name: &str, value: &str) -> Self {
        self.set_prop(name, value);
        self
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_prop(&mut self, name: &str, value: &str) {
        set_prop(&mut self.props, name, value);
    }
}

impl ToHtml for LeafNode {
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    fn to_html(&self) -> Result<String> {
        let Some(value) = self.value.as_deref() else {
            tracing::debug!("Cannot render leaf {:?} without a value", self.tag);
            return Err(HtmlError::MissingValue);
        };

        match self.tag.as_deref() {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!("<{tag}{}>{value}</{tag}>", self.props_to_html())),
        }
    }
}

impl fmt::Debug for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_positional(
            f,
            "LeafNode",
            self.tag.as_deref(),
            self.value.as_deref(),
            None,
            self.props.as_ref(),
        )
    }
}

/// A node with an ordered list of children and no value of its own.
///
/// Both `tag` and `children` must be set for the node to render; an empty
/// list of children is fine.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub props: Option<Props>,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            props: None,
        }
    }

    pub fn with_props(tag: &str, children: Vec<HtmlNode>, props: Props) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            props: Some(props),
        }
    }

    /// Append a child node
    pub fn add_child(&mut self, child: impl Into<HtmlNode>) {
        if let Some(ref mut children) = self.children {
            children.push(child.into());
        } else {
            self.children = Some(vec![child.into()]);
        }
    }

    /// Add an attribute, builder style
    pub fn with_prop(mut self, name: &str, value: &str) -> Self {
        self.set_prop(name, value);
        self
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_prop(&mut self, name: &str, value: &str) {
        set_prop(&mut self.props, name, value);
    }
}

impl ToHtml for ParentNode {
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    fn to_html(&self) -> Result<String> {
        let Some(tag) = self.tag.as_deref() else {
            tracing::debug!("Cannot render parent without a tag");
            return Err(HtmlError::MissingTag);
        };
        let Some(children) = self.children.as_ref() else {
            tracing::debug!("Cannot render <{}> without children", tag);
            return Err(HtmlError::MissingChildren);
        };

        let mut html = format!("<{tag}{}>", self.props_to_html());
        for child in children {
            html.push_str(&child.to_html()?);
        }
        html.push_str("</");
        html.push_str(tag);
        html.push('>');

        Ok(html)
    }
}

impl fmt::Debug for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_positional(
            f,
            "ParentNode",
            self.tag.as_deref(),
            None,
            self.children.as_deref(),
            self.props.as_ref(),
        )
    }
}

/// A node in an HTML tree
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf(_))
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, HtmlNode::Parent(_))
    }

    /// The leaf's value; parents never have one
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// The parent's children; leaves never have any
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf(_) => None,
            HtmlNode::Parent(parent) => parent.children.as_deref(),
        }
    }
}

impl ToHtml for HtmlNode {
    fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => parent.tag(),
        }
    }

    fn props(&self) -> Option<&Props> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.props(),
            HtmlNode::Parent(parent) => parent.props(),
        }
    }

    fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }
}

impl fmt::Debug for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => fmt::Debug::fmt(leaf, f),
            HtmlNode::Parent(parent) => fmt::Debug::fmt(parent, f),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn set_prop(props: &mut Option<Props>, name: &str, value: &str) {
    props
        .get_or_insert_with(Props::new)
        .insert(name.to_string(), value.to_string());
}

/// Write `Name(tag, value, children, props)` with `None` for absent fields
fn fmt_positional(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    tag: Option<&str>,
    value: Option<&str>,
    children: Option<&[HtmlNode]>,
    props: Option<&Props>,
) -> fmt::Result {
    write!(f, "{name}(")?;
    fmt_opt(f, tag)?;
    f.write_str(", ")?;
    fmt_opt(f, value)?;
    f.write_str(", ")?;
    match children {
        Some(children) => f.debug_list().entries(children).finish()?,
        None => f.write_str("None")?,
    }
    f.write_str(", ")?;
    match props {
        Some(props) => f.debug_map().entries(props).finish()?,
        None => f.write_str("None")?,
    }
    f.write_str(")")
}

fn fmt_opt(f: &mut fmt::Formatter<'_>, value: Option<&str>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{value:?}"),
        None => f.write_str("None"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn props(pairs: &[(&str, &str)]) -> Props {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// A node type that only provides the accessors
    struct BareNode {
        tag: Option<String>,
        props: Option<Props>,
    }

    impl ToHtml for BareNode {
        fn tag(&self) -> Option<&str> {
            self.tag.as_deref()
        }

        fn props(&self) -> Option<&Props> {
            self.props.as_ref()
        }
    }

    #[test]
    fn test_default_to_html_is_not_implemented() {
        let node = BareNode {
            tag: Some("p".to_string()),
            props: None,
        };
        assert_eq!(node.to_html(), Err(HtmlError::NotImplemented));
    }

    #[test]
    fn test_props_to_html_none_and_empty() {
        let node = BareNode {
            tag: Some("p".to_string()),
            props: None,
        };
        assert_eq!(node.props_to_html(), "");

        let node = BareNode {
            tag: Some("p".to_string()),
            props: Some(Props::new()),
        };
        assert_eq!(node.props_to_html(), "");
    }

    #[test]
    fn test_props_to_html_keeps_insertion_order() {
        let attrs = props(&[("src", "i.png"), ("alt", "pic")]);
        let node = LeafNode::new(Some("img"), Some(""), Some(attrs));
        assert_eq!(node.props_to_html(), r#" src="i.png" alt="pic""#);

        let attrs = props(&[("alt", "pic"), ("src", "i.png")]);
        let node = LeafNode::new(Some("img"), Some(""), Some(attrs));
        assert_eq!(node.props_to_html(), r#" alt="pic" src="i.png""#);
    }

    #[test]
    fn test_leaf_without_tag() {
        assert_eq!(
            LeafNode::text("Just some text.").to_html().unwrap(),
            "Just some text."
        );
        assert_eq!(LeafNode::text("x").to_html().unwrap(), "x");
    }

    #[test]
    fn test_leaf_with_tag() {
        let node = LeafNode::element("p", "This is a paragraph.");
        assert_eq!(node.to_html().unwrap(), "<p>This is a paragraph.</p>");
    }

    #[test]
    fn test_leaf_with_props() {
        let node = LeafNode::element("a", "Click me!")
            .with_prop("href", "https://www.google.com")
            .with_prop("target", "_blank");
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="https://www.google.com" target="_blank">Click me!</a>"#
        );
    }

    #[test]
    fn test_leaf_empty_value_renders() {
        assert_eq!(LeafNode::element("p", "").to_html().unwrap(), "<p></p>");
        assert_eq!(LeafNode::text("").to_html().unwrap(), "");
    }

    #[test]
    fn test_leaf_missing_value() {
        let node = LeafNode::new(Some("p"), None, None);
        assert_eq!(node.to_html(), Err(HtmlError::MissingValue));
        assert_eq!(LeafNode::default().to_html(), Err(HtmlError::MissingValue));
    }

    #[test]
    fn test_leaf_does_not_escape() {
        let node = LeafNode::element("p", "<Hello & World>");
        assert_eq!(node.to_html().unwrap(), "<p><Hello & World></p>");

        let node = LeafNode::element("a", "Link").with_prop("href", "https://example.com?a=1&b=2");
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="https://example.com?a=1&b=2">Link</a>"#
        );
    }

    #[test]
    fn test_leaf_mutation_after_construction() {
        let mut node = LeafNode::text("hello");
        assert_eq!(node.to_html().unwrap(), "hello");

        node.tag = Some("em".to_string());
        assert_eq!(node.to_html().unwrap(), "<em>hello</em>");

        node.value = None;
        assert_eq!(node.to_html(), Err(HtmlError::MissingValue));
    }

    #[test]
    fn test_set_prop_replaces_in_place() {
        let mut node = LeafNode::element("a", "x")
            .with_prop("href", "/one")
            .with_prop("title", "t");
        node.set_prop("href", "/two");
        assert_eq!(node.props_to_html(), r#" href="/two" title="t""#);
    }

    #[test]
    fn test_leaf_equality() {
        assert_eq!(
            LeafNode::element("b", "x"),
            LeafNode::new(Some("b"), Some("x"), None)
        );
        assert_ne!(LeafNode::element("b", "x"), LeafNode::element("i", "x"));
        assert_ne!(LeafNode::element("b", "x"), LeafNode::element("b", "y"));
        assert_ne!(
            LeafNode::element("b", "x"),
            LeafNode::element("b", "x").with_prop("class", "c")
        );
    }

    #[test]
    fn test_parent_empty_children() {
        assert_eq!(
            ParentNode::new("div", vec![]).to_html().unwrap(),
            "<div></div>"
        );
    }

    #[test]
    fn test_parent_renders_children_in_order() {
        let node = ParentNode::new(
            "p",
            vec![
                LeafNode::element("b", "Bold text").into(),
                LeafNode::text("Normal text").into(),
                LeafNode::element("i", "italic text").into(),
                LeafNode::text("Normal text").into(),
            ],
        );
        assert_eq!(
            node.to_html().unwrap(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_parent_nested() {
        let p = ParentNode::new(
            "p",
            vec![LeafNode::text("A").into(), LeafNode::element("b", "bold").into()],
        );
        let div = ParentNode::new("div", vec![p.into()]);
        assert_eq!(div.to_html().unwrap(), "<div><p>A<b>bold</b></p></div>");
    }

    #[test]
    fn test_parent_with_props() {
        let node = ParentNode::with_props(
            "div",
            vec![LeafNode::text("hi").into()],
            props(&[("id", "main"), ("class", "container")]),
        );
        assert_eq!(
            node.to_html().unwrap(),
            r#"<div id="main" class="container">hi</div>"#
        );
    }

    #[test]
    fn test_parent_missing_tag() {
        let node = ParentNode {
            tag: None,
            children: Some(vec![LeafNode::text("x").into()]),
            props: None,
        };
        assert_eq!(node.to_html(), Err(HtmlError::MissingTag));
    }

    #[test]
    fn test_parent_missing_children() {
        let node = ParentNode {
            tag: Some("div".to_string()),
            children: None,
            props: None,
        };
        assert_eq!(node.to_html(), Err(HtmlError::MissingChildren));
    }

    #[test]
    fn test_parent_missing_tag_checked_first() {
        assert_eq!(ParentNode::default().to_html(), Err(HtmlError::MissingTag));
    }

    #[test]
    fn test_parent_propagates_child_error() {
        let inner = ParentNode::new("span", vec![LeafNode::new(Some("b"), None, None).into()]);
        let outer = ParentNode::new("div", vec![LeafNode::text("ok").into(), inner.into()]);
        assert_eq!(outer.to_html(), Err(HtmlError::MissingValue));
    }

    #[test]
    fn test_add_child() {
        let mut node = ParentNode::default();
        node.tag = Some("ul".to_string());
        node.add_child(LeafNode::element("li", "one"));
        node.add_child(LeafNode::element("li", "two"));
        assert_eq!(node.to_html().unwrap(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_html_node_accessors() {
        let leaf: HtmlNode = LeafNode::element("b", "x").with_prop("class", "c").into();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.tag(), Some("b"));
        assert_eq!(leaf.value(), Some("x"));
        assert_eq!(leaf.children(), None);
        assert_eq!(leaf.props_to_html(), r#" class="c""#);

        let parent: HtmlNode = ParentNode::new("div", vec![leaf.clone()]).into();
        assert!(parent.is_parent());
        assert_eq!(parent.tag(), Some("div"));
        assert_eq!(parent.value(), None);
        assert_eq!(parent.children(), Some(&[leaf][..]));
        assert_eq!(
            parent.to_html().unwrap(),
            r#"<div><b class="c">x</b></div>"#
        );
    }

    #[test]
    fn test_debug_leaf() {
        let node = LeafNode::element("span", "Content").with_prop("class", "bold");
        assert_eq!(
            format!("{:?}", node),
            r#"LeafNode("span", "Content", None, {"class": "bold"})"#
        );
        assert_eq!(
            format!("{:?}", LeafNode::default()),
            "LeafNode(None, None, None, None)"
        );
    }

    #[test]
    fn test_debug_parent() {
        let node = ParentNode::new("p", vec![LeafNode::element("strong", "text").into()])
            .with_prop("class", "text-class");
        assert_eq!(
            format!("{:?}", HtmlNode::from(node)),
            r#"ParentNode("p", None, [LeafNode("strong", "text", None, None)], {"class": "text-class"})"#
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let leaf = LeafNode::element("b", "x").with_prop("class", "c");
        let tree = HtmlNode::from(ParentNode::new("p", vec![leaf.into()]));

        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"Parent":{"tag":"p","children":[{"Leaf":{"tag":"b","value":"x","props":{"class":"c"}}}],"props":null}}"#
        );

        let decoded: HtmlNode = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, tree);
        assert_eq!(decoded.to_html().unwrap(), r#"<p><b class="c">x</b></p>"#);
    }
}
