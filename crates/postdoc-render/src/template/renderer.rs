//! Theme-driven collection renderer.

use std::io::Write;

use super::engine::CompiledTheme;
use crate::error::RenderError;
use crate::helpers::{HelperTable, IdGenerator};
use crate::model::Collection;
use crate::theme::ThemeResolver;

/// Binds a helper table and a theme resolver, and renders collections.
///
/// # Example
///
/// ```rust,ignore
/// use postdoc_render::{HelperTable, IdGenerator, Renderer, ThemeResolver};
///
/// let renderer = Renderer::new(
///     ThemeResolver::new("./themes"),
///     HelperTable::standard(IdGenerator::from_entropy()),
/// );
///
/// let mut out = std::io::stdout().lock();
/// renderer.render(&collection, "markdown_default", &mut out)?;
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    resolver: ThemeResolver,
    helpers: HelperTable,
}

impl Renderer {
    pub fn new(resolver: ThemeResolver, helpers: HelperTable) -> Self {
        Self { resolver, helpers }
    }

    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }

    pub fn helpers(&self) -> &HelperTable {
        &self.helpers
    }

    /// Resolves and parses `theme` without rendering anything.
    ///
    /// Useful to fail on a missing or malformed theme before opening the
    /// output destination, or to render several collections with one theme.
    pub fn compile(&self, theme: &str) -> Result<CompiledTheme, RenderError> {
        let resolved = self.resolver.resolve(theme)?;
        CompiledTheme::new(resolved, &self.helpers)
    }

    /// Renders `collection` with `theme`, streaming output into `sink`.
    ///
    /// The sink is not flushed; that stays with the caller, on success and on
    /// failure alike.
    ///
    /// # Errors
    ///
    /// - [`RenderError::ThemeNotFound`] / [`RenderError::Io`] while resolving
    /// - [`RenderError::TemplateSyntax`] while parsing
    /// - [`RenderError::TemplateExecution`] while evaluating; `sink` may
    ///   already hold a prefix of the output
    pub fn render<W: Write>(
        &self,
        collection: &Collection,
        theme: &str,
        sink: W,
    ) -> Result<(), RenderError> {
        self.compile(theme)?.render_to(collection, sink)
    }
}

impl Default for Renderer {
    /// Default themes root and the standard helpers seeded from entropy.
    fn default() -> Self {
        Self::new(
            ThemeResolver::default(),
            HelperTable::standard(IdGenerator::from_entropy()),
        )
    }
}
