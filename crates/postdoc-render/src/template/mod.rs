//! Template environment construction and rendering.
//!
//! Rendering is a single sequential pass:
//!
//! 1. The theme is resolved by [`ThemeResolver`](crate::ThemeResolver).
//! 2. A MiniJinja environment is built. Helpers from the [`HelperTable`](crate::HelperTable)
//!    are registered first, then every template of the theme is parsed into it.
//! 3. The entry template is evaluated with the [`Collection`](crate::Collection) as its
//!    root context, writing to the sink as output is produced.
//!
//! Output is streamed, not buffered. When evaluation fails part way through
//! (say `indentJSON` meets a plain-text body), whatever was written before the
//! failure stays in the sink. Callers that need all-or-nothing output render
//! into a temporary file and publish it only on success.

mod engine;
mod renderer;

pub use engine::{build_environment, CompiledTheme};
pub use renderer::Renderer;
