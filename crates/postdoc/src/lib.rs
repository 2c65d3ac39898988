//! # Postdoc - API collection documentation generator
//!
//! Command-line front end for [`postdoc_render`]: loads a collection export,
//! picks a theme and writes the rendered documentation to stdout or a file.
//!
//! ```text
//! postdoc --theme html_default --output api.html collection.json
//! ```
//!
//! Writing to a file is all-or-nothing: output goes to a temporary file next
//! to the destination and replaces it only when rendering succeeds.

pub mod cli;
pub mod loader;

pub use cli::{App, AppError, Args, Config};
pub use loader::{load_collection, LoadError};
