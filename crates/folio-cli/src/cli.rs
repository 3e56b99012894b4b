//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level arguments for the `folio` binary.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List published projects (or notes).
    List {
        /// Restrict to one category.
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Only featured entries.
        #[arg(long)]
        featured: bool,

        /// List notes instead of projects.
        #[arg(long)]
        notes: bool,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show navigation context for a project.
    Nav {
        /// Effective slug of the project.
        slug: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show related projects for a slug.
    Related {
        /// Effective slug of the target project.
        slug: String,

        /// Maximum number of results (config default otherwise).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Free-text search across the project collection.
    Search {
        /// Query string (case-insensitive substring).
        query: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Projects grouped by publish year, newest first.
    Timeline {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate relationships and routing across the collection.
    Validate {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Parse one markdown file and print its transformed document tree.
    Render {
        /// Path to the markdown file.
        file: String,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Print version information.
    Version,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["folio"]);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_verbose_and_quiet() {
        let args = CliArgs::parse_from(["folio", "--verbose"]);
        assert!(args.verbose);

        let args = CliArgs::parse_from(["folio", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_args_config() {
        let args = CliArgs::parse_from(["folio", "--config", "/path/to/config.toml"]);
        assert_eq!(args.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_list_command() {
        let args = CliArgs::parse_from(["folio", "list"]);
        match args.command {
            Some(Command::List {
                category,
                featured,
                notes,
                json,
            }) => {
                assert!(category.is_none());
                assert!(!featured && !notes && !json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_list_command_filters() {
        let args = CliArgs::parse_from(["folio", "list", "--category", "grafana", "--featured"]);
        match args.command {
            Some(Command::List {
                category, featured, ..
            }) => {
                assert_eq!(category.as_deref(), Some("grafana"));
                assert!(featured);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_nav_command() {
        let args = CliArgs::parse_from(["folio", "nav", "apm"]);
        match args.command {
            Some(Command::Nav { slug, json }) => {
                assert_eq!(slug, "apm");
                assert!(!json);
            }
            _ => panic!("Expected Nav command"),
        }
    }

    #[test]
    fn test_related_command() {
        let args = CliArgs::parse_from(["folio", "related", "apm", "--limit", "5"]);
        match args.command {
            Some(Command::Related { slug, limit, .. }) => {
                assert_eq!(slug, "apm");
                assert_eq!(limit, Some(5));
            }
            _ => panic!("Expected Related command"),
        }
    }

    #[test]
    fn test_search_command() {
        let args = CliArgs::parse_from(["folio", "search", "observability", "--json"]);
        match args.command {
            Some(Command::Search { query, json }) => {
                assert_eq!(query, "observability");
                assert!(json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_timeline_command() {
        let args = CliArgs::parse_from(["folio", "timeline"]);
        assert!(matches!(
            args.command,
            Some(Command::Timeline { json: false })
        ));
    }

    #[test]
    fn test_validate_command() {
        let args = CliArgs::parse_from(["folio", "validate"]);
        assert!(matches!(
            args.command,
            Some(Command::Validate { json: false })
        ));
    }

    #[test]
    fn test_render_command() {
        let args = CliArgs::parse_from(["folio", "render", "content/apm.md", "--pretty"]);
        match args.command {
            Some(Command::Render { file, pretty }) => {
                assert_eq!(file, "content/apm.md");
                assert!(pretty);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["folio", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
    }
}
