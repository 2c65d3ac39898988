//! Run orchestration: load, resolve, render, publish.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use postdoc_render::{
    Collection, CompiledTheme, HelperTable, IdGenerator, RenderError, Renderer, ThemeResolver,
};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use super::Config;
use crate::loader::{load_collection, LoadError};

/// Any failure of a run. All of them end the process with a failure status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing collection path")]
    MissingInput,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write output {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs once. `stdout` receives theme listings, and the rendered document
    /// when no output file is configured.
    pub fn run<W: Write>(&self, stdout: W) -> Result<(), AppError> {
        let resolver = ThemeResolver::new(&self.config.themes_dir);

        if self.config.list_themes {
            return self.list_themes(&resolver, stdout);
        }

        let path = self
            .config
            .collection
            .as_deref()
            .ok_or(AppError::MissingInput)?;
        let collection = load_collection(path)?;

        let renderer = Renderer::new(resolver, self.helpers());
        // Resolve and parse before touching the destination.
        let compiled = renderer.compile(&self.config.theme)?;

        match &self.config.output {
            Some(output) => render_to_file(&compiled, &collection, output),
            None => render_to_stream(&compiled, &collection, stdout),
        }
    }

    fn helpers(&self) -> HelperTable {
        let ids = match self.config.seed {
            Some(seed) => {
                debug!(seed, "seeding element ids");
                IdGenerator::seeded(seed)
            }
            None => IdGenerator::from_entropy(),
        };
        HelperTable::standard(ids)
    }

    fn list_themes<W: Write>(&self, resolver: &ThemeResolver, stdout: W) -> Result<(), AppError> {
        let mut out = BufWriter::new(stdout);
        for name in resolver.available()? {
            writeln!(out, "{name}").map_err(stdout_error)?;
        }
        out.flush().map_err(stdout_error)
    }
}

/// Streams into `stdout`, flushing whatever was produced even on failure.
fn render_to_stream<W: Write>(
    compiled: &CompiledTheme,
    collection: &Collection,
    stdout: W,
) -> Result<(), AppError> {
    let mut out = BufWriter::new(stdout);
    let rendered = compiled.render_to(collection, &mut out);
    let flushed = out.flush();

    rendered?;
    flushed.map_err(stdout_error)
}

/// Renders into a temporary file beside `path` and moves it into place only
/// on success. On failure the destination is left untouched.
fn render_to_file(
    compiled: &CompiledTheme,
    collection: &Collection,
    path: &Path,
) -> Result<(), AppError> {
    let output_error = |source| AppError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(output_error)?;
    let mut temp = NamedTempFile::new_in(dir).map_err(output_error)?;

    {
        let mut out = BufWriter::new(temp.as_file_mut());
        compiled.render_to(collection, &mut out)?;
        out.flush().map_err(output_error)?;
    }

    temp.persist(path).map_err(|e| output_error(e.error))?;
    info!(output = %path.display(), "wrote documentation");
    Ok(())
}

fn stdout_error(source: io::Error) -> AppError {
    AppError::Output {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
