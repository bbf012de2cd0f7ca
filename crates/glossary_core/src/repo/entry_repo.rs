//! Entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `entries` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Ids are assigned by the store on create and never changed afterwards.
//! - Term uniqueness is enforced by the unique index; collisions surface as
//!   `TermConflict`, never as raw SQLite errors.
//! - Write paths report `NotFound` when the target row does not exist, so a
//!   concurrent delete between lookup and write cannot corrupt state.

use crate::db::DbError;
use crate::model::entry::Entry;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTRY_SELECT_SQL: &str = "SELECT id, term, definition FROM entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Persistence-layer failure.
    Db(DbError),
    /// No entry exists with the given id.
    NotFound(i64),
    /// The written term collides with a different entry's term.
    TermConflict(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::TermConflict(term) => write!(f, "term already exists: `{term}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::TermConflict(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for entry CRUD operations.
///
/// The service layer depends only on this trait, which keeps it testable
/// against in-memory fakes and agnostic of the concrete store.
pub trait EntryRepository {
    /// Persists a new entry and returns it with the store-assigned id.
    fn create(&self, term: &str, definition: &str) -> RepoResult<Entry>;
    /// Gets one entry by id.
    fn get(&self, id: i64) -> RepoResult<Option<Entry>>;
    /// Lists all entries. Order is unspecified.
    fn list(&self) -> RepoResult<Vec<Entry>>;
    /// Overwrites term and definition for the entry matching `id`.
    fn update(&self, id: i64, term: &str, definition: &str) -> RepoResult<()>;
    /// Permanently removes the entry matching `id`.
    fn delete(&self, id: i64) -> RepoResult<()>;
}

/// SQLite-backed entry repository.
///
/// Borrows a migrated connection for the duration of one request; dropping
/// the repository releases nothing beyond the borrow, so the caller stays in
/// charge of the connection lifetime.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn create(&self, term: &str, definition: &str) -> RepoResult<Entry> {
        self.conn
            .execute(
                "INSERT INTO entries (term, definition) VALUES (?1, ?2);",
                params![term, definition],
            )
            .map_err(|err| map_write_error(err, term))?;

        let id = self.conn.last_insert_rowid();
        Ok(Entry::with_fields(id, term, definition))
    }

    fn get(&self, id: i64) -> RepoResult<Option<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }

        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!("{ENTRY_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }

    fn update(&self, id: i64, term: &str, definition: &str) -> RepoResult<()> {
        // Single UPDATE keeps lookup and write in one statement, so a row
        // deleted by a concurrent caller surfaces as NotFound.
        let changed = self
            .conn
            .execute(
                "UPDATE entries SET term = ?1, definition = ?2 WHERE id = ?3;",
                params![term, definition, id],
            )
            .map_err(|err| map_write_error(err, term))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: i64) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    Ok(Entry {
        id: row.get("id")?,
        term: row.get("term")?,
        definition: row.get("definition")?,
    })
}

/// Maps SQLite unique-index violations to `TermConflict`.
///
/// The unique index on `entries.term` is the only unique constraint in the
/// schema, so any unique violation on a write is a term collision.
fn map_write_error(err: rusqlite::Error, term: &str) -> RepoError {
    if let rusqlite::Error::SqliteFailure(ffi_err, _) = &err {
        if ffi_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
            return RepoError::TermConflict(term.to_string());
        }
    }
    RepoError::Db(DbError::Sqlite(err))
}
