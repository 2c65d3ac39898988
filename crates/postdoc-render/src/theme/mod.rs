//! Theme discovery and loading.
//!
//! A theme is a directory under a themes root, named after the theme. It
//! holds an entry file called `index` plus any number of partials alongside
//! it (in subdirectories too), all parsed into one template namespace:
//!
//! ```text
//! themes/
//!   markdown_default/
//!     index.tpl          <- entry point
//!     request.tpl        <- {% include "request.tpl" %} or "request"
//!     parts/footer.tpl   <- "parts/footer.tpl" or "parts/footer"
//! ```
//!
//! # Supported Extensions
//!
//! Template files are recognized by extension, in priority order:
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.tpl` |
//! | 2 | `.jinja` |
//! | 3 | `.jinja2` |
//! | 4 | `.j2` |
//! | 5 | `.html` |
//! | 6 | `.md` |
//! | 7 (lowest) | `.txt` |
//!
//! Every template is addressable by its relative path with extension. The
//! extensionless name goes to the highest-priority file sharing that base
//! name, which is also how the `index` entry file is chosen.

mod resolver;

pub use resolver::{ThemeResolver, DEFAULT_THEME, DEFAULT_THEMES_DIR};

use std::path::PathBuf;

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".tpl", ".jinja", ".jinja2", ".j2", ".html", ".md", ".txt"];

/// Base name of every theme's entry file.
pub const ENTRY_NAME: &str = "index";

/// One template file of a theme, with its content already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTemplate {
    /// Resolution name without extension (e.g. `"parts/footer"`).
    pub name: String,
    /// Resolution name with extension (e.g. `"parts/footer.tpl"`).
    pub name_with_ext: String,
    pub path: PathBuf,
    pub source: String,
}

impl ThemeTemplate {
    /// Returns the extension priority (lower is higher priority).
    ///
    /// Returns `usize::MAX` if the extension is not recognized.
    pub fn extension_priority(&self) -> usize {
        TEMPLATE_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(ext))
            .unwrap_or(usize::MAX)
    }
}

/// A resolved theme: its entry template plus all partials.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dir: PathBuf,
    /// `name_with_ext` of the entry template.
    pub entry: String,
    /// All templates, entry included, sorted by `name_with_ext`.
    pub templates: Vec<ThemeTemplate>,
}

impl Theme {
    /// Every name a template can be looked up by, paired with its source.
    ///
    /// Names with extension always map to their own file. An extensionless
    /// name maps to the highest-priority file with that base name.
    pub fn template_names(&self) -> Vec<(&str, &str)> {
        let mut names: Vec<(&str, &str)> = self
            .templates
            .iter()
            .map(|t| (t.name_with_ext.as_str(), t.source.as_str()))
            .collect();

        for template in &self.templates {
            let winner = self
                .templates
                .iter()
                .filter(|t| t.name == template.name)
                .min_by_key(|t| t.extension_priority());
            let shadowed_by_file = self.templates.iter().any(|t| t.name_with_ext == template.name);
            if winner == Some(template) && !shadowed_by_file {
                names.push((template.name.as_str(), template.source.as_str()));
            }
        }
        names
    }
}
