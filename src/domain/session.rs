use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Session export document
///
/// Only `title` and `tabs` are interpreted; every other top-level field
/// rides along untouched through the flattened map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    /// Display name of the session
    pub title: String,
    /// Tab entries, in export order
    pub tabs: Vec<TabEntry>,
    /// Fields the export carries that this tool does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One tab entry of a session export
///
/// `url` is optional at the type level so an export with a broken entry
/// still parses; the restorer reports the broken entry instead of the
/// loader rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TabEntry {
    /// Entry with just a url, as most exports produce
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: None,
            extra: Map::new(),
        }
    }
}
