//! Handler functions behind the `folio` commands.
//!
//! Handlers are pure over the loaded collections: the application shell
//! loads content and configuration, handlers compute and print. Each
//! prints human-readable text by default and JSON with `--json`.

use std::path::Path;

use folio_content::{Category, NoteRecord, ProjectPreview, ProjectRecord, frontmatter};
use folio_core::{Error, Result};
use folio_directives::{parse_document, transform_document};
use folio_resolve::{
    ValidationResult, project_navigation, project_url, related_projects, search, timeline,
    validate_relationships, validate_routing,
};

/// Parse a category name as authored in frontmatter and URLs.
pub fn parse_category(name: &str) -> Result<Category> {
    match name {
        "keystrok" => Ok(Category::Keystrok),
        "grafana" => Ok(Category::Grafana),
        "opensource" => Ok(Category::Opensource),
        "jungleai" => Ok(Category::Jungleai),
        "notes" => Ok(Category::Notes),
        other => Err(Error::invalid_data(format!("unknown category '{other}'"))),
    }
}

// ============================================================================
// Listing
// ============================================================================

/// List published projects, optionally filtered.
pub fn handle_list(
    projects: &[ProjectRecord],
    category: Option<Category>,
    featured_only: bool,
    json: bool,
) -> Result<()> {
    let listed: Vec<&ProjectRecord> = match category {
        Some(c) => folio_resolve::by_category(projects, c),
        None => folio_resolve::all_projects(projects),
    }
    .into_iter()
    .filter(|p| !featured_only || p.meta.featured)
    .collect();

    if json {
        let previews: Vec<ProjectPreview> =
            listed.iter().map(|p| ProjectPreview::from(*p)).collect();
        println!("{}", to_json(&previews)?);
        return Ok(());
    }

    for record in &listed {
        println!(
            "{:<32} {:<12} {}",
            project_url(record),
            record.meta.category,
            record.meta.title
        );
    }
    println!("{} project(s)", listed.len());
    Ok(())
}

/// List published notes, newest first.
pub fn handle_list_notes(notes: &[NoteRecord], featured_only: bool, json: bool) -> Result<()> {
    let listed = if featured_only {
        folio_resolve::featured_notes(notes)
    } else {
        folio_resolve::published_notes(notes)
    };

    if json {
        println!("{}", to_json(&listed)?);
        return Ok(());
    }

    for note in &listed {
        println!(
            "{:<12} {:<28} {}",
            note.meta.publish_date,
            note.slug(),
            note.meta.title
        );
    }
    println!("{} note(s)", listed.len());
    Ok(())
}

// ============================================================================
// Navigation
// ============================================================================

/// Show navigation context for one project.
pub fn handle_nav(projects: &[ProjectRecord], slug: &str, json: bool) -> Result<()> {
    let nav = project_navigation(projects, slug)
        .ok_or_else(|| Error::not_found(format!("project '{slug}'")))?;

    if json {
        println!("{}", to_json(&nav)?);
        return Ok(());
    }

    let trail: Vec<&str> = nav.breadcrumbs.iter().map(|b| b.label.as_str()).collect();
    println!("{}", trail.join(" > "));

    if let Some(parent) = &nav.parent {
        println!("parent: {} ({})", parent.title, parent.slug);
    }
    if !nav.children.is_empty() {
        println!("children:");
        for child in &nav.children {
            println!("  {:<28} {}", child.slug, child.title);
        }
    }
    if let Some(prev) = &nav.prev {
        println!("prev:   {} ({})", prev.title, prev.slug);
    }
    if let Some(next) = &nav.next {
        println!("next:   {} ({})", next.title, next.slug);
    }
    Ok(())
}

// ============================================================================
// Related and search
// ============================================================================

/// Show the best-scoring related projects.
pub fn handle_related(
    projects: &[ProjectRecord],
    slug: &str,
    limit: usize,
    json: bool,
) -> Result<()> {
    // distinguish "unknown slug" from "no related projects"
    if folio_resolve::find_by_slug(projects, slug).is_none() {
        return Err(Error::not_found(format!("project '{slug}'")));
    }
    let related = related_projects(projects, slug, Some(limit));

    if json {
        println!("{}", to_json(&related)?);
        return Ok(());
    }

    for preview in &related {
        println!("{:<28} {:<12} {}", preview.slug, preview.category, preview.title);
    }
    println!("{} related project(s)", related.len());
    Ok(())
}

/// Free-text search over the collection.
pub fn handle_search(projects: &[ProjectRecord], query: &str, json: bool) -> Result<()> {
    let hits = search(projects, query);

    if json {
        let previews: Vec<ProjectPreview> = hits.iter().map(|p| ProjectPreview::from(*p)).collect();
        println!("{}", to_json(&previews)?);
        return Ok(());
    }

    for record in &hits {
        println!("{:<28} {}", record.slug(), record.meta.title);
    }
    println!("{} match(es) for '{query}'", hits.len());
    Ok(())
}

// ============================================================================
// Timeline
// ============================================================================

/// Projects grouped by publish year, newest first.
pub fn handle_timeline(projects: &[ProjectRecord], json: bool) -> Result<()> {
    let groups = timeline(projects);

    if json {
        println!("{}", to_json(&groups)?);
        return Ok(());
    }

    for group in &groups {
        println!("{}", group.year);
        for preview in &group.projects {
            println!("  {:<28} {}", preview.slug, preview.title);
        }
    }
    Ok(())
}

// ============================================================================
// Validation
// ============================================================================

/// Run relationship and routing validation; errors make the command fail.
pub fn handle_validate(projects: &[ProjectRecord], json: bool) -> Result<()> {
    let relationships = validate_relationships(projects);
    let routing = validate_routing(projects);

    if json {
        #[derive(serde::Serialize)]
        struct Report<'a> {
            relationships: &'a ValidationResult,
            routing: &'a ValidationResult,
        }
        println!(
            "{}",
            to_json(&Report {
                relationships: &relationships,
                routing: &routing,
            })?
        );
    } else {
        print_validation("relationships", &relationships);
        print_validation("routing", &routing);
    }

    let error_count = relationships.errors.len() + routing.errors.len();
    if error_count > 0 {
        return Err(Error::invalid_data(format!(
            "validation failed with {error_count} error(s)"
        )));
    }
    Ok(())
}

fn print_validation(label: &str, result: &ValidationResult) {
    if result.valid && result.warnings.is_empty() {
        println!("{label}: ok");
        return;
    }
    println!("{label}:");
    for error in &result.errors {
        println!("  ERROR [{}]: {}", error.code, error.message);
    }
    for warning in &result.warnings {
        println!("  WARN  [{}]: {}", warning.code, warning.message);
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Parse one markdown file, transform its directives, and print the
/// resulting document tree as JSON.
pub fn handle_render(path: &Path, pretty: bool) -> Result<()> {
    let source = std::fs::read_to_string(path)?;

    // content files carry frontmatter; bare markdown is accepted too
    let body = match frontmatter::split_frontmatter(&source) {
        Ok((_, body)) => body,
        Err(_) => source.as_str(),
    };

    let mut doc = parse_document(body);
    transform_document(&mut doc);

    let json = if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .map_err(|e| Error::serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::serialization(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
