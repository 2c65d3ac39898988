//! MiniJinja environment setup for a theme.

use std::io::Write;
use std::time::Instant;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use tracing::{debug, info};

use crate::error::RenderError;
use crate::helpers::HelperTable;
use crate::model::Collection;
use crate::theme::Theme;

/// Builds an environment with `helpers` registered and every template of
/// `theme` parsed.
///
/// Helpers are registered before any template is added so names resolve the
/// same way during parsing and evaluation.
///
/// # Errors
///
/// [`RenderError::TemplateSyntax`] for the first template that fails to parse.
pub fn build_environment(
    helpers: &HelperTable,
    theme: &Theme,
) -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    // Themes emit Markdown as often as HTML; escaping is up to the template.
    env.set_auto_escape_callback(|_| AutoEscape::None);

    helpers.register(&mut env);

    for (name, source) in theme.template_names() {
        debug!(theme = %theme.name, template = name, "parsing template");
        env.add_template_owned(name.to_string(), source.to_string())
            .map_err(|source| RenderError::TemplateSyntax {
                template: name.to_string(),
                source,
            })?;
    }

    Ok(env)
}

/// A theme parsed into a ready-to-run environment.
pub struct CompiledTheme {
    theme: Theme,
    env: Environment<'static>,
}

impl CompiledTheme {
    pub fn new(theme: Theme, helpers: &HelperTable) -> Result<Self, RenderError> {
        let env = build_environment(helpers, &theme)?;
        Ok(Self { theme, env })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Evaluates the entry template against `collection`, streaming into `sink`.
    ///
    /// # Errors
    ///
    /// [`RenderError::TemplateExecution`] if evaluation fails. Bytes written
    /// before the failure are left in `sink`.
    pub fn render_to<W: Write>(&self, collection: &Collection, sink: W) -> Result<(), RenderError> {
        let template = self
            .env
            .get_template(&self.theme.entry)
            .map_err(RenderError::TemplateExecution)?;

        let started = Instant::now();
        info!(theme = %self.theme.name, collection = %collection.name, "rendering");
        template
            .render_captured_to(Value::from_serialize(collection), sink)
            .map_err(RenderError::TemplateExecution)?;
        info!(
            theme = %self.theme.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "render finished"
        );
        Ok(())
    }
}

impl std::fmt::Debug for CompiledTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledTheme")
            .field("theme", &self.theme.name)
            .field("entry", &self.theme.entry)
            .finish_non_exhaustive()
    }
}
