//! Unsuspend Library
//!
//! Repairs session exports produced by tab-suspension browser extensions:
//! suspended-tab placeholder entries get their original URL and title
//! back, everything else passes through untouched, and the session is
//! renamed with a configurable suffix.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use self::core::restore::{
    restore_document, restore_entry, EntryOutcome, Matcher, RestoreReport,
    GREAT_SUSPENDER_EXTENSION_ID,
};
pub use domain::config::{RestoreConfig, DEFAULT_SESSION_NAME_SUFFIX};
pub use domain::error::{UnsuspendError, UnsuspendResult};
pub use domain::session::{SessionDocument, TabEntry};
