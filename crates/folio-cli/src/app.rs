//! FolioCli application shell.
//!
//! Loads configuration and content, then dispatches to the handlers.
//! Parameterized over a [`ConfigProvider`] so tests can run against a
//! fixed config without touching the filesystem defaults.

use std::sync::Arc;

use folio_content::loader;
use folio_core::Result;
use folio_core::traits::ConfigProvider;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::FolioConfig;
use crate::handlers;

// ============================================================================
// FolioCli
// ============================================================================

/// The `folio` application, parameterized over a config provider.
pub struct FolioCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
    related_limit: usize,
}

impl FolioCli<FolioConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        tracing::debug!(project = %config.project_name, "configuration loaded");
        let limit = config.related.limit;
        Ok(Self::new(name, config).with_related_limit(limit))
    }
}

impl<C: ConfigProvider> FolioCli<C> {
    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
            related_limit: folio_resolve::DEFAULT_RELATED_LIMIT,
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the default related-projects limit.
    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        let Some(command) = args.command else {
            println!("{} {}", self.name, self.version);
            println!("run with --help for usage");
            return Ok(());
        };

        match command {
            Command::Version => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Command::Render { file, pretty } => {
                handlers::handle_render(std::path::Path::new(&file), pretty)
            }
            Command::List {
                category,
                featured,
                notes,
                json,
            } => {
                if notes {
                    let notes = self.load_notes()?;
                    handlers::handle_list_notes(&notes, featured, json)
                } else {
                    let category = category
                        .as_deref()
                        .map(handlers::parse_category)
                        .transpose()?;
                    let projects = self.load_projects()?;
                    handlers::handle_list(&projects, category, featured, json)
                }
            }
            Command::Nav { slug, json } => {
                let projects = self.load_projects()?;
                handlers::handle_nav(&projects, &slug, json)
            }
            Command::Related { slug, limit, json } => {
                let projects = self.load_projects()?;
                let limit = limit.unwrap_or(self.related_limit);
                handlers::handle_related(&projects, &slug, limit, json)
            }
            Command::Search { query, json } => {
                let projects = self.load_projects()?;
                handlers::handle_search(&projects, &query, json)
            }
            Command::Timeline { json } => {
                let projects = self.load_projects()?;
                handlers::handle_timeline(&projects, json)
            }
            Command::Validate { json } => {
                let projects = self.load_projects()?;
                handlers::handle_validate(&projects, json)
            }
        }
    }

    fn load_projects(&self) -> Result<Vec<folio_content::ProjectRecord>> {
        loader::load_projects(&self.config.content_path("projects")?)
    }

    fn load_notes(&self) -> Result<Vec<folio_content::NoteRecord>> {
        loader::load_notes(&self.config.content_path("notes")?)
    }
}

// ============================================================================
// Tests
// ============================================================================
