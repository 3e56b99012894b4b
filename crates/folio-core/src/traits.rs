//! Core traits for Folio application configuration.
//!
//! The primary trait is [`ConfigProvider`], which abstracts where a site
//! keeps its content collections so the loader and CLI crates stay
//! independent of any particular configuration mechanism.

use std::path::PathBuf;

use crate::Result;

/// Trait for site-specific configuration.
///
/// Every Folio-based application implements this trait to provide the
/// paths that the content loader needs: project identity, the site root,
/// and per-collection content directories.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all site data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined (e.g., missing
    /// environment variable or invalid configuration).
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content collection.
    ///
    /// `collection` is a site-defined key like `"projects"` or `"notes"`.
    /// The implementation decides how these map to filesystem paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is unknown or the path cannot
    /// be resolved.
    fn content_path(&self, collection: &str) -> Result<PathBuf>;
}
