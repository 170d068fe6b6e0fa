use regex::Regex;

/// Extension id The Great Suspender shipped with on the Chrome Web Store
pub const GREAT_SUSPENDER_EXTENSION_ID: &str = "klbibkeccnjlkjkiokjodocebajanakg";

const PLACEHOLDER_SCHEME: &str = "chrome-extension";
const PLACEHOLDER_PAGE: &str = "suspended.html";

/// Strategy for recognizing suspended-tab placeholder URLs
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Literal prefix built from a known extension id.
    ///
    /// The prefix may occur anywhere in the URL, not only at the start,
    /// and the payload is everything after its first occurrence. This
    /// substring search is long-standing behavior of the tool this one
    /// replaces and is kept as-is; see the pinning test below.
    Prefix { prefix: String },
    /// Structural match spanning the whole URL: fixed scheme, any
    /// non-empty lowercase id segment, the suspended page path, then
    /// the fragment payload
    Pattern { regex: Regex },
}

impl Matcher {
    /// Literal-prefix matcher for a known extension id
    pub fn with_extension_id(extension_id: &str) -> Self {
        Self::Prefix {
            prefix: format!("{PLACEHOLDER_SCHEME}://{extension_id}/{PLACEHOLDER_PAGE}#"),
        }
    }

    /// Structural matcher for when the extension id is unknown
    pub fn structural() -> Self {
        let regex = Regex::new(r"^chrome-extension://[a-z]+/suspended\.html#(.*)$")
            .expect("placeholder pattern is valid");
        Self::Pattern { regex }
    }

    /// Matcher implied by an optional extension id
    pub fn for_extension(extension_id: Option<&str>) -> Self {
        match extension_id {
            Some(id) => Self::with_extension_id(id),
            None => Self::structural(),
        }
    }

    /// Extract the encoded payload if `url` is a placeholder.
    ///
    /// `None` is the normal case for ordinary URLs, not an error.
    pub fn identify<'a>(&self, url: &'a str) -> Option<&'a str> {
        match self {
            Self::Prefix { prefix } => url.find(prefix).map(|pos| &url[pos + prefix.len()..]),
            Self::Pattern { regex } => regex
                .captures(url)
                .and_then(|captures| captures.get(1))
                .map(|payload| payload.as_str()),
        }
    }
}
