//! Slug derivation and normalization.
//!
//! Content records are identified by slugs derived from filenames unless
//! the frontmatter provides an explicit override. These helpers produce
//! the filename-derived form.

use std::path::Path;

/// Derive a slug from a file path's stem.
///
/// Returns `None` when the path has no usable stem.
///
/// # Example
///
/// ```
/// use folio_core::util::slug::slug_from_path;
/// use std::path::Path;
///
/// let slug = slug_from_path(Path::new("content/projects/Grafana APM.md"));
/// assert_eq!(slug.as_deref(), Some("grafana-apm"));
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let slug = normalize_slug(stem);
    if slug.is_empty() { None } else { Some(slug) }
}

/// Normalize a string into slug form.
///
/// Lowercases, maps whitespace and underscores to hyphens, drops any
/// remaining character that is not alphanumeric or a hyphen, and
/// collapses hyphen runs.
pub fn normalize_slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_hyphen = false;

    for ch in input.trim().chars() {
        let mapped = if ch.is_whitespace() || ch == '_' {
            Some('-')
        } else if ch.is_ascii_alphanumeric() || ch == '-' {
            Some(ch.to_ascii_lowercase())
        } else {
            None
        };

        if let Some(c) = mapped {
            if c == '-' {
                if !prev_hyphen && !out.is_empty() {
                    out.push('-');
                }
                prev_hyphen = true;
            } else {
                out.push(c);
                prev_hyphen = false;
            }
        }
    }

    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_slug_from_path_simple() {
        let path = PathBuf::from("/content/projects/apm.md");
        assert_eq!(slug_from_path(&path).as_deref(), Some("apm"));
    }

    #[test]
    fn test_slug_from_path_mixed_case_and_spaces() {
        let path = PathBuf::from("Grafana APM Overview.mdx");
        assert_eq!(
            slug_from_path(&path).as_deref(),
            Some("grafana-apm-overview")
        );
    }

    #[test]
    fn test_slug_from_path_no_stem() {
        assert!(slug_from_path(&PathBuf::from("/")).is_none());
    }

    #[test]
    fn test_normalize_slug_underscores() {
        assert_eq!(normalize_slug("design_system_v2"), "design-system-v2");
    }

    #[test]
    fn test_normalize_slug_strips_punctuation() {
        assert_eq!(normalize_slug("What's New? (2024)"), "whats-new-2024");
    }

    #[test]
    fn test_normalize_slug_collapses_hyphens() {
        assert_eq!(normalize_slug("a -- b"), "a-b");
        assert_eq!(normalize_slug("--leading"), "leading");
        assert_eq!(normalize_slug("trailing--"), "trailing");
    }

    #[test]
    fn test_normalize_slug_idempotent() {
        let once = normalize_slug("Keystrok: Case Study");
        assert_eq!(normalize_slug(&once), once);
    }
}
