// Restore module - Suspended-tab restoration engine
pub mod matcher;
pub mod payload;
pub mod restorer;

pub use matcher::{Matcher, GREAT_SUSPENDER_EXTENSION_ID};
pub use payload::{decode, RestoredTarget};
pub use restorer::{restore_document, restore_entry, EntryOutcome, RestoreReport};
