//! Locating themes on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Theme, ThemeTemplate, ENTRY_NAME, TEMPLATE_EXTENSIONS};
use crate::error::RenderError;

/// Theme used when the caller does not pick one.
pub const DEFAULT_THEME: &str = "markdown_default";

/// Themes root, relative to the working directory.
pub const DEFAULT_THEMES_DIR: &str = "themes";

/// Finds and loads themes by name under a fixed root directory.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    root: PathBuf,
}

impl ThemeResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the theme called `name` with all of its templates.
    ///
    /// # Errors
    ///
    /// [`RenderError::ThemeNotFound`] if the name is not a plain directory
    /// name, the directory does not exist, or it has no `index` entry file.
    /// [`RenderError::Io`] if a template file cannot be read.
    pub fn resolve(&self, name: &str) -> Result<Theme, RenderError> {
        if !is_plain_name(name) {
            return Err(RenderError::theme_not_found(name, "invalid theme name"));
        }

        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Err(RenderError::theme_not_found(
                name,
                format!("no directory {}", dir.display()),
            ));
        }

        let mut templates = Vec::new();
        walk_theme_dir(&dir, &dir, &mut templates)?;
        templates.sort_by(|a, b| a.name_with_ext.cmp(&b.name_with_ext));

        let entry = templates
            .iter()
            .filter(|t| t.name == ENTRY_NAME)
            .min_by_key(|t| t.extension_priority())
            .map(|t| t.name_with_ext.clone())
            .ok_or_else(|| {
                RenderError::theme_not_found(
                    name,
                    format!("no {ENTRY_NAME} template in {}", dir.display()),
                )
            })?;

        debug!(
            theme = name,
            entry = %entry,
            templates = templates.len(),
            "resolved theme"
        );

        Ok(Theme {
            name: name.to_string(),
            dir,
            entry,
            templates,
        })
    }

    /// Names of the themes under the root that have an entry file, sorted.
    pub fn available(&self) -> Result<Vec<String>, RenderError> {
        let entries = fs::read_dir(&self.root).map_err(|e| RenderError::io(&self.root, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| RenderError::io(&self.root, e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let has_entry = TEMPLATE_EXTENSIONS
                .iter()
                .any(|ext| path.join(format!("{ENTRY_NAME}{ext}")).is_file());
            if has_entry {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(DEFAULT_THEMES_DIR)
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains(std::path::MAIN_SEPARATOR)
}

fn walk_theme_dir(
    current: &Path,
    root: &Path,
    templates: &mut Vec<ThemeTemplate>,
) -> Result<(), RenderError> {
    let entries = fs::read_dir(current).map_err(|e| RenderError::io(current, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| RenderError::io(current, e))?;
        let path = entry.path();

        if path.is_dir() {
            walk_theme_dir(&path, root, templates)?;
        } else if path.is_file() {
            if let Some((name, name_with_ext)) = template_names(&path, root) {
                let source = fs::read_to_string(&path).map_err(|e| RenderError::io(&path, e))?;
                templates.push(ThemeTemplate {
                    name,
                    name_with_ext,
                    path,
                    source,
                });
            }
        }
    }

    Ok(())
}

/// Returns `(name, name_with_ext)` for a recognized template file.
fn template_names(path: &Path, root: &Path) -> Option<(String, String)> {
    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");

    let extension = TEMPLATE_EXTENSIONS
        .iter()
        .find(|ext| name_with_ext.ends_with(*ext))?;
    let name = name_with_ext.strip_suffix(extension)?.to_string();

    Some((name, name_with_ext))
}
