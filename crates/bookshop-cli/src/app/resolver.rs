//! Path resolution for config and database files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, BookshopConfig};
use crate::constants::DEFAULT_DB_FILE;
use crate::errors::CliError;

/// Resolve the config file path.
///
/// Returns the path and whether it was named explicitly (`--config` or
/// `BOOKSHOP_CONFIG`).
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<(PathBuf, bool)> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok((PathBuf::from(value), true));
        }
    }
    Ok((default_config_path()?, false))
}

/// Load the config file, falling back to defaults when the default file is absent.
pub fn load_config(cli: &Cli) -> anyhow::Result<BookshopConfig> {
    let (path, explicit) = match resolve_config_path(cli) {
        Ok(resolved) => resolved,
        // No HOME and no explicit path: nothing to load.
        Err(_) => return Ok(BookshopConfig::default()),
    };

    if !path.exists() {
        if explicit {
            return Err(CliError::not_found(
                format!("Config not found at {}", path.display()),
                "Hint: Check the --config path or unset BOOKSHOP_CONFIG.",
            )
            .into());
        }
        return Ok(BookshopConfig::default());
    }

    read_config(&path)
}

/// Resolve the database path: `--db`/`BOOKSHOP_DB`, then config, then the
/// default file in the working directory.
pub fn resolve_db_path(cli: &Cli, config: &BookshopConfig) -> PathBuf {
    if let Some(path) = cli.db.as_deref() {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    if let Some(path) = config.store.path.as_deref() {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(DEFAULT_DB_FILE)
}
