//! Markdown container directives and component transformation.
//!
//! A parsed markdown body becomes a [`Document`] tree of directive,
//! image, and prose nodes. [`transform::transform_document`] then rewrites
//! recognized directives into component invocations in a single top-down
//! pass, leaving unknown directive names untouched.
//!
//! # Modules
//!
//! - [`types`]: Document tree node types
//! - [`parse`]: Fence scanning and markdown chunk parsing
//! - [`transform`]: The closed directive-to-component mapping

#![doc = include_str!("../README.md")]

pub mod parse;
pub mod transform;
pub mod types;

pub use parse::parse_document;
pub use transform::{DirectiveKind, transform_document};
pub use types::{
    AttrValue, ComponentNode, DirectiveNode, Document, GridImage, ImageNode, Node, TextNode,
};
