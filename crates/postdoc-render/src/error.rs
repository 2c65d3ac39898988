//! Error types for theme resolution and rendering.
//!
//! [`RenderError`] is returned by every public rendering entry point. Each
//! variant is terminal for the current render: nothing is retried and no
//! partial output is cleaned up.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The named theme, or its entry file, could not be located.
    #[error("theme not found: {theme} ({reason})")]
    ThemeNotFound { theme: String, reason: String },

    /// A theme template failed to parse.
    #[error("template syntax error in {template}")]
    TemplateSyntax {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Evaluation failed part way through, e.g. a helper rejected its input
    /// or the template referenced an undefined field.
    #[error("template execution error")]
    TemplateExecution(#[source] minijinja::Error),

    /// Reading theme files failed.
    #[error("I/O error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn theme_not_found(theme: &str, reason: impl Into<String>) -> Self {
        RenderError::ThemeNotFound {
            theme: theme.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure of a single helper function.
#[derive(Debug, Error)]
pub enum HelperError {
    /// The input of `indentJSON` was not valid JSON.
    #[error("invalid JSON")]
    Parse(#[from] serde_json::Error),
}

impl From<HelperError> for minijinja::Error {
    fn from(err: HelperError) -> Self {
        minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            "indentJSON input is not valid JSON",
        )
        .with_source(err)
    }
}
