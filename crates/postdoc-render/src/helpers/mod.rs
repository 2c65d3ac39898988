//! Helper functions exposed to theme templates.
//!
//! The typed helpers live in submodules and work directly on the document
//! model. [`HelperTable`] binds them to the names templates use:
//!
//! | Template name  | Rust function                  |
//! |----------------|--------------------------------|
//! | `findRequest`  | [`find_request`]               |
//! | `findResponse` | [`find_response`]              |
//! | `markdown`     | [`markdown`]                   |
//! | `indentJSON`   | [`indent_json`]                |
//! | `randomID`     | [`IdGenerator::next_id`]       |
//!
//! Every helper is callable as a function. Helpers that take at least one
//! argument are also registered as filters, so `{{ body | indentJSON }}` and
//! `{{ indentJSON(body) }}` are equivalent.
//!
//! The table is handed to [`crate::Renderer`] at construction rather than
//! living in global state, so two renderers may run with different helper
//! sets or differently seeded generators.

mod lookup;
mod random;
mod text;

use std::sync::Arc;

use minijinja::value::{Rest, ViaDeserialize};
use minijinja::{Environment, Error, State, Value};

use crate::model::Request;

pub use lookup::{find_request, find_response};
pub use random::{IdGenerator, MAX_ID};
pub use text::{indent_json, markdown};

/// A named template callable.
#[derive(Debug, Clone)]
struct Helper {
    name: String,
    function: Value,
    filter: bool,
}

/// Ordered table of helper functions to bind into a template environment.
#[derive(Debug, Clone, Default)]
pub struct HelperTable {
    helpers: Vec<Helper>,
}

impl HelperTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five standard helpers, with `randomID` drawing from `ids`.
    pub fn standard(ids: IdGenerator) -> Self {
        let ids = Arc::new(ids);

        let mut table = Self::new();
        table.insert(
            "findRequest",
            Value::from_function(find_request_value),
            true,
        );
        table.insert(
            "findResponse",
            Value::from_function(find_response_value),
            true,
        );
        table.insert("markdown", Value::from_function(markdown_value), true);
        table.insert("indentJSON", Value::from_function(indent_json_value), true);
        table.insert(
            "randomID",
            Value::from_function(move || -> u32 { ids.next_id() }),
            false,
        );
        table
    }

    /// Adds or replaces a helper. `function` must be a callable value, for
    /// example one built with [`Value::from_function`].
    pub fn insert(&mut self, name: impl Into<String>, function: Value, filter: bool) -> &mut Self {
        let name = name.into();
        self.helpers.retain(|h| h.name != name);
        self.helpers.push(Helper {
            name,
            function,
            filter,
        });
        self
    }

    /// Removes a helper by name, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.helpers.len();
        self.helpers.retain(|h| h.name != name);
        self.helpers.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.iter().any(|h| h.name == name)
    }

    /// Helper names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.iter().map(|h| h.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Registers every helper as a global function, and as a filter where
    /// enabled.
    pub fn register(&self, env: &mut Environment<'static>) {
        for helper in &self.helpers {
            env.add_global(helper.name.clone(), helper.function.clone());
            if helper.filter {
                let function = helper.function.clone();
                env.add_filter(
                    helper.name.clone(),
                    move |state: &State, args: Rest<Value>| -> Result<Value, Error> {
                        function.call(state, &args)
                    },
                );
            }
        }
    }
}

fn find_request_value(
    ViaDeserialize(requests): ViaDeserialize<Vec<Request>>,
    id: String,
) -> Value {
    find_request(&requests, &id)
        .map(Value::from_serialize)
        .unwrap_or_else(|| Value::from(()))
}

fn find_response_value(ViaDeserialize(request): ViaDeserialize<Request>, name: String) -> Value {
    find_response(&request, &name)
        .map(Value::from_serialize)
        .unwrap_or_else(|| Value::from(()))
}

fn markdown_value(text: Option<String>) -> Value {
    Value::from_safe_string(markdown(text.as_deref().unwrap_or_default()))
}

fn indent_json_value(text: String) -> Result<String, Error> {
    Ok(indent_json(&text)?)
}
