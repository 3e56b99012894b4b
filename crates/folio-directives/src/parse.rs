//! Parsing markdown bodies into the document tree.
//!
//! Container directives use fence lines: `::name{key=value key="v" bare}`
//! opens a block (two or more colons), and a colons-only line closes the
//! innermost open block. Inside a directive body, standalone
//! images are lifted into [`ImageNode`]s (the transformer consumes them);
//! everything else is kept as verbatim prose. Top-level prose outside any
//! directive is never split.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

use crate::types::{AttrMap, DirectiveNode, Document, ImageNode, Node, TextNode};

fn fence_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(:{2,})([A-Za-z][A-Za-z0-9-]*)(?:\{(.*)\})?\s*$").expect("valid regex")
    })
}

fn attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z][A-Za-z0-9-]*)(?:=(?:"([^"]*)"|([^\s"]+)))?"#).expect("valid regex")
    })
}

/// Parse a markdown body into a document tree.
pub fn parse_document(source: &str) -> Document {
    Document {
        nodes: parse_nodes(source, false),
    }
}

/// Parse markdown source into nodes.
///
/// `inside_directive` controls whether non-fence prose goes through image
/// lifting (directive bodies) or stays verbatim (top level).
fn parse_nodes(source: &str, inside_directive: bool) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut chunk = String::new();
    let mut lines = source.lines();

    while let Some(line) = lines.next() {
        let Some(open) = parse_fence_open(line) else {
            chunk.push_str(line);
            chunk.push('\n');
            continue;
        };

        flush_chunk(&mut nodes, &mut chunk, inside_directive);

        // Collect the directive body up to the matching close fence.
        // Nested opens push; colons-only lines pop the innermost block.
        let mut body = String::new();
        let mut depth = 0usize;
        for inner in lines.by_ref() {
            if is_fence_close(inner) {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            } else if parse_fence_open(inner).is_some() {
                depth += 1;
            }
            body.push_str(inner);
            body.push('\n');
        }

        nodes.push(Node::Directive(DirectiveNode {
            name: open.name,
            attributes: open.attributes,
            children: parse_nodes(&body, true),
        }));
    }

    flush_chunk(&mut nodes, &mut chunk, inside_directive);
    nodes
}

struct FenceOpen {
    name: String,
    attributes: AttrMap,
}

/// Recognize a directive opening fence line.
fn parse_fence_open(line: &str) -> Option<FenceOpen> {
    let caps = fence_open_re().captures(line)?;
    let name = caps[2].to_string();
    let attributes = caps
        .get(3)
        .map(|m| parse_attributes(m.as_str()))
        .unwrap_or_default();

    Some(FenceOpen { name, attributes })
}

/// A closing fence is a colons-only line (two or more colons).
fn is_fence_close(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.len() >= 2 && trimmed.chars().all(|c| c == ':')
}

/// Lex `key=value`, `key="quoted value"`, and bare `key` attributes.
/// Bare attributes read as `"true"`.
fn parse_attributes(input: &str) -> AttrMap {
    let mut attrs = AttrMap::new();
    for caps in attr_re().captures_iter(input) {
        let key = caps[1].to_string();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "true".to_string());
        attrs.insert(key, value);
    }
    attrs
}

/// Flush accumulated prose into the node list.
fn flush_chunk(nodes: &mut Vec<Node>, chunk: &mut String, inside_directive: bool) {
    if chunk.trim().is_empty() {
        chunk.clear();
        return;
    }
    if inside_directive {
        nodes.extend(parse_markdown_chunk(chunk));
    } else {
        nodes.push(Node::Text(TextNode {
            markdown: chunk.trim().to_string(),
        }));
    }
    chunk.clear();
}

/// Parse a prose chunk, lifting standalone images into `ImageNode`s in
/// document order and keeping the surrounding prose verbatim.
fn parse_markdown_chunk(chunk: &str) -> Vec<Node> {
    struct PendingImage {
        span: Range<usize>,
        url: String,
        alt: String,
    }

    let mut nodes = Vec::new();
    let mut cursor = 0usize;
    let mut pending: Option<PendingImage> = None;

    for (event, range) in Parser::new_ext(chunk, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(Tag::Image { dest_url, .. }) if pending.is_none() => {
                pending = Some(PendingImage {
                    span: range,
                    url: dest_url.to_string(),
                    alt: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(image) = pending.as_mut() {
                    image.alt.push_str(&text);
                }
            }
            Event::End(TagEnd::Image) => {
                if let Some(image) = pending.take() {
                    push_text(&mut nodes, &chunk[cursor..image.span.start]);
                    cursor = image.span.end;
                    nodes.push(Node::Image(ImageNode {
                        url: image.url,
                        alt: if image.alt.is_empty() {
                            None
                        } else {
                            Some(image.alt)
                        },
                        size: None,
                    }));
                }
            }
            _ => {}
        }
    }

    push_text(&mut nodes, &chunk[cursor..]);
    nodes
}

fn push_text(nodes: &mut Vec<Node>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        nodes.push(Node::Text(TextNode {
            markdown: trimmed.to_string(),
        }));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(doc: &Document) -> Vec<&DirectiveNode> {
        doc.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Directive(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_plain_prose() {
        let doc = parse_document("# Title\n\nSome prose.\n");
        assert_eq!(doc.nodes.len(), 1);
        match &doc.nodes[0] {
            Node::Text(t) => assert!(t.markdown.contains("Some prose.")),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_directive_with_attributes() {
        let source = "::side-by-side{reverse image=\"shot.png\" image-alt=\"A shot\"}\nProse inside.\n::\n";
        let doc = parse_document(source);
        let dirs = directives(&doc);
        assert_eq!(dirs.len(), 1);

        let d = dirs[0];
        assert_eq!(d.name, "side-by-side");
        assert_eq!(d.attr("image"), Some("shot.png"));
        assert_eq!(d.attr("image-alt"), Some("A shot"));
        // bare attribute reads as "true"
        assert!(d.flag("reverse"));
        assert_eq!(d.children.len(), 1);
    }

    #[test]
    fn test_parse_directive_lifts_images() {
        let source = "::carousel{title=\"Gallery\"}\n![First](one.png)\n![Second](two.png)\n::\n";
        let doc = parse_document(source);
        let d = directives(&doc)[0];

        let images: Vec<_> = d
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Image(i) => Some(i),
                _ => None,
            })
            .collect();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].url, "one.png");
        assert_eq!(images[0].alt.as_deref(), Some("First"));
        assert_eq!(images[1].url, "two.png");
    }

    #[test]
    fn test_parse_image_without_alt() {
        let source = "::image-grid\n![](bare.png)\n::\n";
        let doc = parse_document(source);
        let d = directives(&doc)[0];
        match &d.children[0] {
            Node::Image(i) => {
                assert_eq!(i.url, "bare.png");
                assert!(i.alt.is_none());
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_prose_around_images_preserved() {
        let source = "::expandable\nBefore image.\n\n![Alt](pic.png)\n\nAfter image.\n::\n";
        let doc = parse_document(source);
        let d = directives(&doc)[0];

        assert_eq!(d.children.len(), 3);
        assert!(matches!(&d.children[0], Node::Text(t) if t.markdown.contains("Before")));
        assert!(matches!(&d.children[1], Node::Image(_)));
        assert!(matches!(&d.children[2], Node::Text(t) if t.markdown.contains("After")));
    }

    #[test]
    fn test_parse_prose_between_directives() {
        let source = "Intro.\n\n::parallax{title=\"Hero\"}\n::\n\nOutro.\n";
        let doc = parse_document(source);

        assert_eq!(doc.nodes.len(), 3);
        assert!(matches!(&doc.nodes[0], Node::Text(t) if t.markdown == "Intro."));
        assert!(matches!(&doc.nodes[1], Node::Directive(d) if d.name == "parallax"));
        assert!(matches!(&doc.nodes[2], Node::Text(t) if t.markdown == "Outro."));
    }

    #[test]
    fn test_parse_nested_directives() {
        let source = ":::expandable{title=\"Outer\"}\n::carousel\n![A](a.png)\n::\n:::\n";
        let doc = parse_document(source);
        let outer = directives(&doc)[0];
        assert_eq!(outer.name, "expandable");

        let inner: Vec<_> = outer
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Directive(d) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].name, "carousel");
    }

    #[test]
    fn test_parse_unterminated_directive_consumes_rest() {
        let source = "::carousel\n![A](a.png)\n";
        let doc = parse_document(source);
        let d = directives(&doc)[0];
        assert_eq!(d.children.len(), 1);
    }

    #[test]
    fn test_attribute_lexing_forms() {
        let attrs = parse_attributes(r#"title="Two words" height=400px default-open"#);
        assert_eq!(attrs.get("title").map(String::as_str), Some("Two words"));
        assert_eq!(attrs.get("height").map(String::as_str), Some("400px"));
        assert_eq!(attrs.get("default-open").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_fence_close_requires_colons_only() {
        assert!(is_fence_close("::"));
        assert!(is_fence_close(":::"));
        assert!(!is_fence_close("::name"));
        assert!(!is_fence_close(":"));
    }

    #[test]
    fn test_top_level_prose_not_split_on_images() {
        let doc = parse_document("Some prose with ![inline](i.png) image.\n");
        // Outside directives prose stays verbatim.
        assert_eq!(doc.nodes.len(), 1);
        assert!(matches!(&doc.nodes[0], Node::Text(t) if t.markdown.contains("![inline](i.png)")));
    }
}
