//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the entry store contract used by the service layer.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `TermConflict`) in
//!   addition to DB transport errors.
//! - Ordering of listed entries is unspecified; callers sort.

pub mod entry_repo;
