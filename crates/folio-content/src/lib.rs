//! Content collections, frontmatter extraction, and loading.
//!
//! This crate defines the typed records behind the site's content
//! collections and the machinery that turns markdown source files into
//! them.
//!
//! # Modules
//!
//! - [`types`]: Project and note record types
//! - [`frontmatter`]: YAML frontmatter splitting and parsing
//! - [`loader`]: Filesystem discovery and record loading

#![doc = include_str!("../README.md")]

pub mod frontmatter;
pub mod loader;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use types::{
    Category, DEFAULT_ORDER, Methodology, NoteMeta, NoteRecord, ProjectMeta, ProjectPreview,
    ProjectRecord, ProjectType,
};
