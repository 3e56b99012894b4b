//! Document tree node types.
//!
//! The tree is intentionally small: it exists to carry directives, the
//! images nested inside them, and the surrounding prose through the
//! transformation pass. All types serialize to JSON for the rendering
//! layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute map for an authored directive (`key=value` / bare keys).
pub type AttrMap = BTreeMap<String, String>;

/// A node in the parsed document tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An authored container directive, not yet (or never) transformed.
    Directive(DirectiveNode),
    /// A component invocation produced by the transformer.
    Component(ComponentNode),
    /// A markdown image.
    Image(ImageNode),
    /// Verbatim markdown prose.
    Text(TextNode),
}

/// A container directive tagged with its name and raw attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectiveNode {
    pub name: String,
    #[serde(default)]
    pub attributes: AttrMap,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl DirectiveNode {
    /// Look up a string attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Boolean attribute: recognized only when the literal value is
    /// `"true"`; any other value reads as absent.
    pub fn flag(&self, name: &str) -> bool {
        self.attr(name) == Some("true")
    }
}

/// A markdown image with its URL and alt text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    /// Display size hint; grids default this to `"normal"`.
    #[serde(default)]
    pub size: Option<String>,
}

/// Verbatim markdown prose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub markdown: String,
}

// ============================================================================
// Component invocations
// ============================================================================

/// Attribute value on a component invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    String(String),
    List(Vec<String>),
    Images(Vec<GridImage>),
}

/// One image entry in a `CompImageGrid` invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridImage {
    pub src: String,
    pub alt: String,
    pub size: String,
}

/// A component invocation node with a fixed per-kind attribute schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<(String, AttrValue)>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl ComponentNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn with_attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.push((name.into(), value));
        self
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

/// A parsed markdown body.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

// ============================================================================
// Tests
// ============================================================================
