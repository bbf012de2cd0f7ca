//! Entry use-case service.
//!
//! # Responsibility
//! - Provide the five glossary operations: list, new, edit, save, delete.
//! - Resolve the sort parameter and expose the next toggle direction.
//! - Translate repository results into explicit success/not-found outcomes.
//!
//! # Invariants
//! - Listing is always sorted by term with case-sensitive ordinal compare.
//! - Validation runs before any store mutation; a rejected save leaves the
//!   store untouched.
//! - `save` never mutates the caller's entry; ids are only assigned by the
//!   store.

use crate::model::entry::{Entry, FieldError};
use crate::repo::entry_repo::{EntryRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire token selecting ascending term order.
pub const SORT_ASCENDING: &str = "ASC";
/// Wire token selecting descending term order.
pub const SORT_DESCENDING: &str = "DESC";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for entry use-cases.
///
/// `NotFound` is the 404-equivalent signal for a missing or unknown id;
/// everything else is a persistence-layer failure passed through unchanged.
#[derive(Debug)]
pub enum ServiceError {
    /// Target entry does not exist, or no id was supplied.
    NotFound,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Not found"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(_) => Self::NotFound,
            other => Self::Repo(other),
        }
    }
}

/// Direction used to sort the listing by term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Resolves the raw `sortBy` request parameter.
    ///
    /// Only the exact `DESC` token selects descending order; absence, empty
    /// strings, and every other value silently fall back to ascending.
    pub fn resolve(sort_by: Option<&str>) -> Self {
        match sort_by {
            Some(SORT_DESCENDING) => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// Returns the opposite direction, offered to the caller as the next
    /// sort link after a listing is rendered.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the wire token for this direction.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Ascending => SORT_ASCENDING,
            Self::Descending => SORT_DESCENDING,
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListing {
    /// Entries sorted by term in the resolved direction.
    pub entries: Vec<Entry>,
    /// The single toggle value the view uses to build the next sort link.
    pub next_sort: SortDirection,
}

/// Outcome of a save request.
///
/// Validation failures are recoverable and carry the field messages for
/// form redisplay; they are deliberately not `ServiceError`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The entry was persisted; the caller should redirect to the listing.
    Saved,
    /// Validation rejected the input; no store mutation happened.
    Rejected(Vec<FieldError>),
}

/// Entry service facade over repository implementations.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all entries sorted by term.
    ///
    /// `sort_by` is the raw request parameter; see `SortDirection::resolve`
    /// for the fallback policy. An empty store yields an empty listing.
    pub fn list(&self, sort_by: Option<&str>) -> ServiceResult<EntryListing> {
        let direction = SortDirection::resolve(sort_by);

        let mut entries = self.repo.list()?;
        entries.sort_by(|a, b| a.term.cmp(&b.term));
        if direction == SortDirection::Descending {
            entries.reverse();
        }

        Ok(EntryListing {
            entries,
            next_sort: direction.toggled(),
        })
    }

    /// Returns the blank template backing the "new entry" form.
    ///
    /// Pure; never touches the store.
    pub fn new_entry(&self) -> Entry {
        Entry::new()
    }

    /// Fetches one entry for display in the edit form.
    ///
    /// An absent id and an unknown id both fail with `NotFound`.
    pub fn edit(&self, id: Option<i64>) -> ServiceResult<Entry> {
        let id = id.ok_or(ServiceError::NotFound)?;
        self.repo.get(id)?.ok_or(ServiceError::NotFound)
    }

    /// Creates or updates an entry from form input.
    ///
    /// Dispatches on the id: `Entry::UNASSIGNED_ID` creates a new record,
    /// anything else overwrites term and definition of the existing record
    /// (the id itself is never changed). A term collision on either path is
    /// reported as a rejected field, not a hard error; an unknown nonzero id
    /// fails with `NotFound`.
    pub fn save(&self, entry: &Entry) -> ServiceResult<SaveOutcome> {
        let errors = entry.validate();
        if !errors.is_empty() {
            return Ok(SaveOutcome::Rejected(errors));
        }

        let written = if entry.id == Entry::UNASSIGNED_ID {
            self.repo.create(&entry.term, &entry.definition).map(|_| ())
        } else {
            self.repo.update(entry.id, &entry.term, &entry.definition)
        };

        match written {
            Ok(()) => Ok(SaveOutcome::Saved),
            Err(RepoError::TermConflict(term)) => Ok(SaveOutcome::Rejected(vec![FieldError::new(
                "term",
                format!("The term `{term}` already exists in the glossary"),
            )])),
            Err(err) => Err(err.into()),
        }
    }

    /// Permanently deletes one entry.
    ///
    /// An absent id and an unknown id both fail with `NotFound`; on success
    /// the caller should redirect to the listing.
    pub fn delete(&self, id: Option<i64>) -> ServiceResult<()> {
        let id = id.ok_or(ServiceError::NotFound)?;
        self.repo.delete(id)?;
        Ok(())
    }
}
