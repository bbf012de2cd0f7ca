//! Domain model for the glossary.
//!
//! # Responsibility
//! - Define the canonical `Entry` record shared by repository and service
//!   layers.
//! - Own the field-level validation rules applied before every write.
//!
//! # Invariants
//! - `Entry::UNASSIGNED_ID` is the only id value an unsaved entry may carry.
//! - Persisted entries always have a positive, store-assigned id.

pub mod entry;
