//! YAML frontmatter splitting and parsing.
//!
//! Content files carry metadata in a `---` fenced YAML block at the top
//! of the file, followed by the markdown body. Records without a
//! frontmatter block fail to load, since their required fields cannot be
//! satisfied.

use folio_core::{Error, Result};
use serde::de::DeserializeOwned;

/// Split a source file into its raw frontmatter and body.
///
/// The file must begin with a `---` line; the frontmatter runs until the
/// next `---` line. Returns `(yaml, body)`.
pub fn split_frontmatter(source: &str) -> Result<(&str, &str)> {
    let rest = source
        .strip_prefix("---")
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
        .ok_or_else(|| Error::parse("missing frontmatter block"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }

    Err(Error::parse("unterminated frontmatter block"))
}

/// Parse a source file into typed metadata and its markdown body.
pub fn parse_meta<T: DeserializeOwned>(source: &str) -> Result<(T, String)> {
    let (yaml, body) = split_frontmatter(source)?;
    let meta = serde_yaml::from_str(yaml).map_err(|e| Error::parse(e.to_string()))?;
    Ok((meta, body.to_string()))
}
