use serde::Serialize;
use tracing::{debug, warn};

use crate::core::restore::matcher::Matcher;
use crate::core::restore::payload;
use crate::domain::config::RestoreConfig;
use crate::domain::error::{UnsuspendError, UnsuspendResult};
use crate::domain::session::{SessionDocument, TabEntry};

/// How a single tab entry was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Placeholder recognized, original URL and title written back
    Restored,
    /// Not a placeholder; entry untouched
    NotSuspended,
}

/// Counters for one document pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RestoreReport {
    /// Entries whose URL and title were restored
    pub restored: usize,
    /// Entries that were not suspended-tab placeholders
    pub skipped: usize,
    /// Entries that matched the placeholder shape but could not be
    /// decoded, kept unmodified
    pub failed: usize,
}

impl RestoreReport {
    pub fn total(&self) -> usize {
        self.restored + self.skipped + self.failed
    }
}

/// Restore a single tab entry in place.
///
/// A URL that is not a placeholder is the common case and comes back as
/// `Ok(NotSuspended)` with the entry untouched. Errors mean the entry
/// looked like a placeholder (or had no URL at all) but could not be
/// restored; the entry is never left partially mutated.
pub fn restore_entry(
    entry: &mut TabEntry,
    matcher: &Matcher,
    verbose: bool,
) -> UnsuspendResult<EntryOutcome> {
    let url = entry.url.as_deref().ok_or(UnsuspendError::MissingUrl)?;

    let Some(encoded) = matcher.identify(url) else {
        if verbose {
            debug!(entry = ?entry, "not a suspended tab, leaving as-is");
        }
        return Ok(EntryOutcome::NotSuspended);
    };

    let target = payload::decode(encoded)?;
    entry.url = Some(target.url);
    entry.title = Some(target.title);
    Ok(EntryOutcome::Restored)
}

/// Restore every tab of a session document and rename the session.
///
/// Restoration is best-effort: a per-entry failure is absorbed, the entry
/// stays in the output unchanged, and the pass continues. Tab count and
/// order always survive. The configured suffix is appended to the title
/// once the pass is done.
pub fn restore_document(document: &mut SessionDocument, config: &RestoreConfig) -> RestoreReport {
    let matcher = Matcher::for_extension(config.extension_id.as_deref());
    let mut report = RestoreReport::default();

    for entry in &mut document.tabs {
        match restore_entry(entry, &matcher, config.verbose) {
            Ok(EntryOutcome::Restored) => report.restored += 1,
            Ok(EntryOutcome::NotSuspended) => report.skipped += 1,
            Err(err) => {
                report.failed += 1;
                if config.verbose {
                    warn!(error = %err, entry = ?entry, "could not restore tab, keeping it unmodified");
                }
            }
        }
    }

    document.title.push_str(&config.session_name_suffix);
    report
}
