//! Application context for the Bookshop CLI.
//!
//! Combines CLI arguments with the loaded configuration, and hands out the
//! storage handle and matcher every command needs.

use std::path::{Path, PathBuf};

use bookshop_core::{FuzzyMatcher, SqliteStorage, StorageEngine};

use crate::cli::Cli;
use crate::config::BookshopConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_db_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids threading the config and resolved paths through every
/// handler function.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: BookshopConfig,
    db_path: PathBuf,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> anyhow::Result<Self> {
        let config = load_config(cli)?;
        let db_path = resolve_db_path(cli, &config);
        Ok(Self {
            cli,
            config,
            db_path,
        })
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Path of the database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open the store and make sure the `book` table exists.
    pub fn open_storage(&self) -> anyhow::Result<SqliteStorage> {
        let storage = SqliteStorage::open(&self.db_path);
        storage.ensure_schema()?;
        Ok(storage)
    }

    /// Build the fuzzy matcher from config, with an optional limit override.
    pub fn matcher(&self, limit: Option<usize>) -> FuzzyMatcher {
        let mut matcher = FuzzyMatcher::new().threshold(self.config.search.threshold);
        if let Some(limit) = limit.or(self.config.search.limit) {
            matcher = matcher.limit(limit);
        }
        matcher
    }

    /// Build the UI context for this invocation.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.ascii || self.config.ui.ascii)
    }
}

/// Fallback UI context used when the app context itself failed to build.
pub fn fallback_ui_context(cli: &Cli) -> UiContext {
    UiContext::from_env(false, cli.ascii)
}
