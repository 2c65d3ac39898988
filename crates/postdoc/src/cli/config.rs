//! Resolved run configuration.

use std::path::PathBuf;

use postdoc_render::{DEFAULT_THEME, DEFAULT_THEMES_DIR};

use super::Args;

/// Everything a run needs, after flags and environment are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub collection: Option<PathBuf>,
    pub theme: String,
    pub output: Option<PathBuf>,
    pub themes_dir: PathBuf,
    pub list_themes: bool,
    /// `None` seeds the id generator from OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(collection: impl Into<PathBuf>) -> Self {
        Self {
            collection: Some(collection.into()),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection: None,
            theme: DEFAULT_THEME.to_string(),
            output: None,
            themes_dir: PathBuf::from(DEFAULT_THEMES_DIR),
            list_themes: false,
            seed: None,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            collection: args.collection.clone(),
            theme: args.theme.clone(),
            output: args.output.clone(),
            themes_dir: args.themes_dir.clone(),
            list_themes: args.list_themes,
            seed: args.seed,
        }
    }
}
