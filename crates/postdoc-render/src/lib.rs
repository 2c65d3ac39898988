//! # Postdoc Render - API collection documentation from themes
//!
//! `postdoc-render` turns an API collection (folders, requests and their
//! recorded responses) into documentation by running it through a theme: a
//! directory of MiniJinja templates.
//!
//! ## Core Concepts
//!
//! - [`Collection`]: read-only document model of the API collection
//! - [`HelperTable`]: the functions templates can call (`findRequest`,
//!   `findResponse`, `markdown`, `indentJSON`, `randomID`)
//! - [`ThemeResolver`]: finds a theme's `index` entry file and its partials
//! - [`Renderer`]: binds helpers and themes, and streams output to a writer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use postdoc_render::{Collection, HelperTable, IdGenerator, Renderer, ThemeResolver};
//!
//! let collection: Collection = serde_json::from_str(r#"{"name": "Demo", "requests": []}"#).unwrap();
//!
//! let renderer = Renderer::new(
//!     ThemeResolver::new("./themes"),
//!     HelperTable::standard(IdGenerator::from_entropy()),
//! );
//!
//! let mut out = Vec::new();
//! renderer.render(&collection, "markdown_default", &mut out).unwrap();
//! ```
//!
//! ## Writing Themes
//!
//! The entry template receives the collection as its root context:
//!
//! ```jinja
//! # {{ name }}
//! {% for folder in folders %}
//! ## {{ folder.name }}
//! {% for id in folder.order %}
//! {% set request = findRequest(requests, id) %}
//! ### {{ request.method }} {{ request.name }}
//! {% set ok = findResponse(request, "ok") %}
//! {% if ok %}{{ ok.body | indentJSON }}{% endif %}
//! {% endfor %}
//! {% endfor %}
//! ```
//!
//! Lookups that find nothing evaluate to `none`. Any helper failure, such as
//! `indentJSON` on a body that is not JSON, aborts the render with
//! [`RenderError::TemplateExecution`].

mod error;
pub mod helpers;
pub mod model;
pub mod template;
pub mod theme;

pub use error::{HelperError, RenderError};
pub use helpers::{find_request, find_response, indent_json, markdown, HelperTable, IdGenerator};
pub use model::{Collection, DataParam, Folder, Request, Response, ResponseCode};
pub use template::{build_environment, CompiledTheme, Renderer};
pub use theme::{
    Theme, ThemeResolver, ThemeTemplate, DEFAULT_THEME, DEFAULT_THEMES_DIR, ENTRY_NAME,
    TEMPLATE_EXTENSIONS,
};
