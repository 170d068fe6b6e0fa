// Infrastructure module - External dependencies and adapters
pub mod logging;
pub mod storage;
