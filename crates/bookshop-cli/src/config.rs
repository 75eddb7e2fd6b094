use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bookshop_core::search::DEFAULT_THRESHOLD;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookshopConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchSection {
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: None,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<BookshopConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn parse_config(contents: &str) -> anyhow::Result<BookshopConfig> {
    let config: BookshopConfig = toml::from_str(contents)?;
    if config.search.threshold > 100 {
        return Err(anyhow::anyhow!(
            "search.threshold must be between 0 and 100, got {}",
            config.search.threshold
        ));
    }
    Ok(config)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("bookshop"));
        }
    }
    Ok(home_dir()?.join(".config").join("bookshop"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, BookshopConfig::default());
        assert_eq!(config.search.threshold, 80);
        assert!(config.search.limit.is_none());
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            "[store]\npath = \"/srv/shop/books.db\"\n\n[search]\nthreshold = 70\nlimit = 5\n\n[ui]\nascii = true\n",
        )
        .unwrap();
        assert_eq!(config.store.path.as_deref(), Some("/srv/shop/books.db"));
        assert_eq!(config.search.threshold, 70);
        assert_eq!(config.search.limit, Some(5));
        assert!(config.ui.ascii);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        assert!(parse_config("[search]\nthreshold = 150\n").is_err());
    }

    #[test]
    fn test_unknown_types_rejected() {
        assert!(parse_config("[search]\nthreshold = \"high\"\n").is_err());
    }
}
