// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for court occupations.
//!
//! Occupations and their audit events are stored in `SQLite` via Diesel,
//! with migrations embedded in the binary.
//!
//! ## Write-time conflict check
//!
//! Validation reads a snapshot; two requests for the same slot can both pass
//! it. Every insert and update therefore re-runs the overlap check inside an
//! immediate transaction and fails with [`PersistenceError::Occupied`] if the
//! slot was taken in the meantime. The store is the linearization point.
//!
//! ## Testing
//!
//! Tests run against isolated, shared-cache in-memory databases.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use courtbook::{OccupationSource, TransitionResult};
use courtbook_audit::AuditEvent;
use courtbook_domain::Occupation;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::PersistTransitionResult;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for occupations and audit events.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so instances are
    /// isolated from one another.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Lists the occupations of an installation on one day.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_occupations(
        &mut self,
        installation_id: i64,
        date: Date,
    ) -> Result<Vec<Occupation>, PersistenceError> {
        queries::occupations::list_occupations_on(&mut self.conn, installation_id, date)
    }

    /// Retrieves one occupation.
    ///
    /// # Errors
    ///
    /// Returns `OccupationNotFound` if the id is unknown, or an error if the
    /// query fails.
    pub fn get_occupation(&mut self, occupation_id: i64) -> Result<Occupation, PersistenceError> {
        queries::occupations::find_occupation(&mut self.conn, occupation_id)?
            .ok_or(PersistenceError::OccupationNotFound(occupation_id))
    }

    /// Persists an accepted transition together with its audit event.
    ///
    /// # Arguments
    ///
    /// * `result` - The transition produced by `courtbook::apply`
    /// * `duration_unit_minutes` - The grid unit of the occupation's installation
    ///
    /// # Errors
    ///
    /// Returns `Occupied` if the slot was taken since validation, or an error
    /// if the write fails.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
        duration_unit_minutes: u32,
    ) -> Result<PersistTransitionResult, PersistenceError> {
        mutations::persist_transition(&mut self.conn, result, duration_unit_minutes)
    }

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not found or cannot be deserialized.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::audit::get_audit_event(&mut self.conn, event_id)
    }

    /// Retrieves the ordered audit timeline of one installation and day.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_audit_timeline(
        &mut self,
        installation_id: i64,
        date: Date,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit::get_audit_timeline(&mut self.conn, installation_id, date)
    }
}

impl OccupationSource for Persistence {
    type Error = PersistenceError;

    fn occupations_on(
        &mut self,
        installation_id: i64,
        date: Date,
    ) -> Result<Vec<Occupation>, Self::Error> {
        self.list_occupations(installation_id, date)
    }

    fn occupation(&mut self, id: i64) -> Result<Option<Occupation>, Self::Error> {
        queries::occupations::find_occupation(&mut self.conn, id)
    }
}
