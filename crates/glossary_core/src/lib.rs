//! Core domain logic for the glossary application.
//! This crate is the single source of truth for entry business invariants;
//! HTTP wiring and view rendering live in boundary layers built on top.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, FieldError};
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult, SqliteEntryRepository};
pub use service::entry_service::{
    EntryListing, EntryService, SaveOutcome, ServiceError, ServiceResult, SortDirection,
    SORT_ASCENDING, SORT_DESCENDING,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
