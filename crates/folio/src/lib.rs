//! Umbrella crate re-exporting the Folio components.

#![doc = include_str!("../README.md")]

pub use folio_content as content;
pub use folio_core as core;

#[cfg(feature = "cli")]
pub use folio_cli as cli;
#[cfg(feature = "directives")]
pub use folio_directives as directives;
#[cfg(feature = "resolve")]
pub use folio_resolve as resolve;
