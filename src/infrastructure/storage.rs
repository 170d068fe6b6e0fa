use std::fs;
use std::path::Path;

use crate::domain::error::UnsuspendResult;
use crate::domain::session::SessionDocument;

/// Load a session export from disk.
///
/// A missing or unreadable file, invalid JSON, or a document without its
/// `title`/`tabs` keys all fail here; the caller treats these as fatal.
pub fn load_document(path: &Path) -> UnsuspendResult<SessionDocument> {
    let raw = fs::read_to_string(path)?;
    let document = serde_json::from_str(&raw)?;
    Ok(document)
}

/// Write a session document back to disk as compact JSON.
///
/// Non-ASCII characters are written through unescaped, as the exports
/// carry them.
pub fn save_document(path: &Path, document: &SessionDocument) -> UnsuspendResult<()> {
    let raw = serde_json::to_string(document)?;
    fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::UnsuspendError;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_document(Path::new("/nonexistent/session.json")).unwrap_err();
        assert!(matches!(err, UnsuspendError::Io(_)));
    }

    #[test]
    fn round_trips_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let raw = r#"{"title":"Session 1","tabs":[{"url":"https://example.com"}]}"#;
        fs::write(&path, raw).unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document.title, "Session 1");
        assert_eq!(document.tabs.len(), 1);

        save_document(&path, &document).unwrap();
        let reloaded = load_document(&path).unwrap();
        assert_eq!(document, reloaded);
    }

    #[test]
    fn invalid_json_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, UnsuspendError::Document(_)));
    }

    #[test]
    fn document_without_tabs_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_tabs.json");
        fs::write(&path, r#"{"title":"Session 1"}"#).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, UnsuspendError::Document(_)));
    }

    #[test]
    fn non_ascii_is_preserved_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unicode.json");

        let raw = r#"{"title":"Sitzung münchen — 日本語","tabs":[]}"#;
        fs::write(&path, raw).unwrap();

        let document = load_document(&path).unwrap();
        save_document(&path, &document).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("münchen"));
        assert!(written.contains("日本語"));
        assert!(!written.contains("\\u"));
    }
}
