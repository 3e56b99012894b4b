//! Command-line interface for the Folio content engine.
//!
//! # Modules
//!
//! - [`cli`]: Argument parsing and command definitions
//! - [`config`]: TOML/env configuration via `confyg`
//! - [`app`]: The application shell
//! - [`handlers`]: Per-command logic over the loaded collections

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod handlers;

pub use app::FolioCli;
pub use cli::{CliArgs, Command};
pub use config::FolioConfig;
