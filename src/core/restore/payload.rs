use url::form_urlencoded;

use crate::domain::error::{UnsuspendError, UnsuspendResult};

const URL_KEY: &str = "uri";
const TITLE_KEY: &str = "ttl";

/// Original URL and title recovered from a placeholder payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredTarget {
    pub url: String,
    pub title: String,
}

/// Decode the query-string payload of a placeholder URL.
///
/// Standard form semantics apply: `&`-separated pairs, `=`-separated
/// key/value, percent-decoding, `+` as space. Repeated keys collapse to
/// the first value. Both `uri` and `ttl` must be present; a URL that
/// matched the placeholder shape but lacks either is malformed.
pub fn decode(payload: &str) -> UnsuspendResult<RestoredTarget> {
    let url = first_value(payload, URL_KEY)
        .ok_or_else(|| UnsuspendError::MissingPayloadKey {
            key: URL_KEY,
            payload: payload.to_string(),
        })?;
    let title = first_value(payload, TITLE_KEY)
        .ok_or_else(|| UnsuspendError::MissingPayloadKey {
            key: TITLE_KEY,
            payload: payload.to_string(),
        })?;
    Ok(RestoredTarget { url, title })
}

fn first_value(payload: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(payload.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}
