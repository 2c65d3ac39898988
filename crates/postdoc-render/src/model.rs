//! Typed document model for an API collection.
//!
//! The model mirrors the Postman v1 collection export: a [`Collection`] holds
//! [`Folder`]s and a flat list of [`Request`]s, and each request carries the
//! [`Response`]s recorded for it. Folders reference requests by id through
//! their `order` list; use [`crate::helpers::find_request`] to resolve them.
//!
//! The tree is built once by a loader and is read-only while rendering. Lookups
//! that may fail return `Option` at traversal time; the model itself never
//! stores a "not found" state.
//!
//! Field names serialize exactly as they are spelled here, which is also how
//! templates see them (`request.raw_mode_data`, `response.body`, ...). The
//! camel-case Postman spellings are accepted when loading only.

use serde::{Deserialize, Serialize};

/// Root of a documented API collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ids of top-level requests that do not belong to any folder.
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub requests: Vec<Request>,
}

/// Named grouping of requests. Folders may nest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ids of the requests in this folder, in display order.
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub folders: Vec<Folder>,
}

/// A single documented API call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub method: String,
    /// Raw header block, one `Name: value` pair per line.
    #[serde(default)]
    pub headers: String,
    #[serde(default)]
    pub data: Option<Vec<DataParam>>,
    #[serde(default, alias = "dataMode")]
    pub data_mode: Option<String>,
    #[serde(default, alias = "rawModeData")]
    pub raw_mode_data: Option<String>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

/// Form or url-encoded body parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataParam {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
}

/// A recorded example response.
///
/// `name` is not unique across a request's responses. `body` may or may not
/// be JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "text")]
    pub body: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "responseCode")]
    pub response_code: Option<ResponseCode>,
}

/// HTTP status recorded with a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCode {
    pub code: u16,
    #[serde(default)]
    pub name: String,
}

impl Request {
    /// Convenience constructor used mostly by tests and embedders.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }
}

impl Response {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            ..Default::default()
        }
    }
}
