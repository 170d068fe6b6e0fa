use serde::{Deserialize, Serialize};

/// Suffix appended to the session title unless the caller overrides it
pub const DEFAULT_SESSION_NAME_SUFFIX: &str = " - cleaned";

/// Settings for one restoration pass
///
/// Built fresh per invocation; nothing here is shared process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreConfig {
    /// Appended to the document title after the pass (concatenation,
    /// never replacement)
    pub session_name_suffix: String,
    /// Extension id of the suspending extension. When set, placeholder
    /// URLs are recognized by literal prefix; when absent, by structural
    /// pattern with any lowercase id segment
    pub extension_id: Option<String>,
    /// Log skipped and unrecoverable entries
    pub verbose: bool,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            session_name_suffix: DEFAULT_SESSION_NAME_SUFFIX.to_string(),
            extension_id: None,
            verbose: false,
        }
    }
}
