//! The directive-to-component transformer.
//!
//! A closed mapping from directive name to transformation rule: each
//! recognized [`DirectiveKind`] rewrites its node into a component
//! invocation with a fixed attribute schema. Unrecognized directive
//! names pass through untransformed (deliberately not an error).
//!
//! The pass is top-down and in-place; each node is visited and finalized
//! exactly once.

use log::trace;

use crate::types::{
    AttrValue, ComponentNode, DirectiveNode, Document, GridImage, ImageNode, Node,
};

/// The closed directive vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectiveKind {
    Carousel,
    SideBySide,
    Expandable,
    BeforeAfter,
    ImageGrid,
    Parallax,
}

impl DirectiveKind {
    /// All recognized kinds, for exhaustive testing.
    pub const ALL: [DirectiveKind; 6] = [
        DirectiveKind::Carousel,
        DirectiveKind::SideBySide,
        DirectiveKind::Expandable,
        DirectiveKind::BeforeAfter,
        DirectiveKind::ImageGrid,
        DirectiveKind::Parallax,
    ];

    /// Map an authored directive name to its kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "carousel" => Some(DirectiveKind::Carousel),
            "side-by-side" => Some(DirectiveKind::SideBySide),
            "expandable" => Some(DirectiveKind::Expandable),
            "before-after" => Some(DirectiveKind::BeforeAfter),
            "image-grid" => Some(DirectiveKind::ImageGrid),
            "parallax" => Some(DirectiveKind::Parallax),
            _ => None,
        }
    }

    /// The component this kind expands into.
    pub fn component_name(self) -> &'static str {
        match self {
            DirectiveKind::Carousel => "CompCarousel",
            DirectiveKind::SideBySide => "CompSideBySide",
            DirectiveKind::Expandable => "CompExpandable",
            DirectiveKind::BeforeAfter => "CompBeforeAfter",
            DirectiveKind::ImageGrid => "CompImageGrid",
            DirectiveKind::Parallax => "CompParallax",
        }
    }
}

/// Transform every recognized directive in the document, in place.
pub fn transform_document(doc: &mut Document) {
    transform_nodes(&mut doc.nodes);
}

/// Transform a node list in document order.
fn transform_nodes(nodes: &mut Vec<Node>) {
    for node in nodes.iter_mut() {
        let Node::Directive(directive) = node else {
            continue;
        };

        // Children first, so nested directives inside retained children
        // are finalized before the parent consumes or keeps them.
        transform_nodes(&mut directive.children);

        let Some(kind) = DirectiveKind::from_name(&directive.name) else {
            trace!("leaving unrecognized directive '{}' untouched", directive.name);
            continue;
        };

        let directive = std::mem::replace(
            directive,
            DirectiveNode {
                name: String::new(),
                attributes: Default::default(),
                children: Vec::new(),
            },
        );
        *node = Node::Component(apply(kind, directive));
    }
}

/// Apply one directive kind's transformation rule.
fn apply(kind: DirectiveKind, directive: DirectiveNode) -> ComponentNode {
    match kind {
        DirectiveKind::Carousel => carousel(directive),
        DirectiveKind::SideBySide => side_by_side(directive),
        DirectiveKind::Expandable => expandable(directive),
        DirectiveKind::BeforeAfter => before_after(directive),
        DirectiveKind::ImageGrid => image_grid(directive),
        DirectiveKind::Parallax => parallax(directive),
    }
}

/// Collect every image in document order, descending into containers.
fn collect_images(nodes: &[Node]) -> Vec<&ImageNode> {
    let mut images = Vec::new();
    for node in nodes {
        match node {
            Node::Image(image) => images.push(image),
            Node::Directive(d) => images.extend(collect_images(&d.children)),
            Node::Component(c) => images.extend(collect_images(&c.children)),
            Node::Text(_) => {}
        }
    }
    images
}

/// `carousel(title?)`: nested image URLs become `images`, present alt
/// texts become `captions`; children are consumed.
fn carousel(directive: DirectiveNode) -> ComponentNode {
    let images = collect_images(&directive.children);
    let urls: Vec<String> = images.iter().map(|i| i.url.clone()).collect();
    let captions: Vec<String> = images.iter().filter_map(|i| i.alt.clone()).collect();

    let mut node = ComponentNode::new(DirectiveKind::Carousel.component_name());
    if let Some(title) = directive.attr("title") {
        node = node.with_attr("title", AttrValue::String(title.to_string()));
    }
    node.with_attr("images", AttrValue::List(urls))
        .with_attr("captions", AttrValue::List(captions))
}

/// `side-by-side(reverse?, image?, image-alt?, image-caption?)`:
/// attributes pass through; children (prose) are retained.
fn side_by_side(directive: DirectiveNode) -> ComponentNode {
    let mut node = ComponentNode::new(DirectiveKind::SideBySide.component_name());
    if directive.flag("reverse") {
        node = node.with_attr("reverse", AttrValue::Bool(true));
    }
    node = pass_through(node, &directive, &[("image", "image")]);
    node = pass_through(
        node,
        &directive,
        &[("image-alt", "imageAlt"), ("image-caption", "imageCaption")],
    );
    node.children = directive.children;
    node
}

/// `expandable(title = "Expandable Section", default-open?)`: children
/// retained as collapsible content.
fn expandable(directive: DirectiveNode) -> ComponentNode {
    let title = directive.attr("title").unwrap_or("Expandable Section");
    let mut node = ComponentNode::new(DirectiveKind::Expandable.component_name())
        .with_attr("title", AttrValue::String(title.to_string()));
    if directive.flag("default-open") {
        node = node.with_attr("defaultOpen", AttrValue::Bool(true));
    }
    node.children = directive.children;
    node
}

/// `before-after(...)`: attributes pass through; no children transformation.
fn before_after(directive: DirectiveNode) -> ComponentNode {
    let mut node = ComponentNode::new(DirectiveKind::BeforeAfter.component_name());
    node = pass_through(
        node,
        &directive,
        &[
            ("before-label", "beforeLabel"),
            ("after-label", "afterLabel"),
            ("before-image", "beforeImage"),
            ("after-image", "afterImage"),
            ("height", "height"),
        ],
    );
    node.children = directive.children;
    node
}

/// `image-grid(columns?, gap?)`: nested images become `{src, alt, size}`
/// entries (size defaults to `"normal"`); children are consumed.
fn image_grid(directive: DirectiveNode) -> ComponentNode {
    let images: Vec<GridImage> = collect_images(&directive.children)
        .into_iter()
        .map(|i| GridImage {
            src: i.url.clone(),
            alt: i.alt.clone().unwrap_or_default(),
            size: i.size.clone().unwrap_or_else(|| "normal".to_string()),
        })
        .collect();

    let mut node = ComponentNode::new(DirectiveKind::ImageGrid.component_name())
        .with_attr("images", AttrValue::Images(images));
    node = pass_through(node, &directive, &[("columns", "columns"), ("gap", "gap")]);
    node
}

/// `parallax(title = "Parallax Section", subtitle?, background-image?, height?)`.
fn parallax(directive: DirectiveNode) -> ComponentNode {
    let title = directive.attr("title").unwrap_or("Parallax Section");
    let mut node = ComponentNode::new(DirectiveKind::Parallax.component_name())
        .with_attr("title", AttrValue::String(title.to_string()));
    node = pass_through(
        node,
        &directive,
        &[
            ("subtitle", "subtitle"),
            ("background-image", "backgroundImage"),
            ("height", "height"),
        ],
    );
    node.children = directive.children;
    node
}

/// Copy string attributes verbatim under their component-side names,
/// skipping absent ones.
fn pass_through(
    mut node: ComponentNode,
    directive: &DirectiveNode,
    mappings: &[(&str, &str)],
) -> ComponentNode {
    for (from, to) in mappings {
        if let Some(value) = directive.attr(from) {
            node = node.with_attr(*to, AttrValue::String(value.to_string()));
        }
    }
    node
}

// ============================================================================
// Tests
// ============================================================================
