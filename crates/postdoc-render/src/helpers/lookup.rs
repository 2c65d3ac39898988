//! Lookup helpers over the document model.
//!
//! Both lookups scan in sequence order and return the first match. Duplicate
//! ids or names are not an error; later entries are simply shadowed.

use crate::model::{Request, Response};

/// Returns the first request whose `id` equals `id`.
pub fn find_request<'a>(requests: &'a [Request], id: &str) -> Option<&'a Request> {
    requests.iter().find(|r| r.id == id)
}

/// Returns the first response of `request` whose `name` equals `name`.
pub fn find_response<'a>(request: &'a Request, name: &str) -> Option<&'a Response> {
    request.responses.iter().find(|r| r.name == name)
}
