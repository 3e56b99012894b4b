//! Utility modules shared across Folio crates.
//!
//! # Modules
//!
//! - [`slug`]: Slug derivation and normalization

pub mod slug;
