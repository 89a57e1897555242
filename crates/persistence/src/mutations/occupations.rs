// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_domain::{Occupation, check_no_overlap, format_date, format_time};
use diesel::SqliteConnection;
use diesel::prelude::*;
use time::{Date, Time};
use tracing::warn;

use crate::backend::get_last_insert_rowid;
use crate::diesel_schema::occupations;
use crate::error::PersistenceError;
use crate::queries::occupations::list_occupations_on;

/// Re-runs the overlap check against the rows currently stored.
///
/// Must run inside the write transaction that stores `occupation`.
///
/// # Errors
///
/// Returns `PersistenceError::Occupied` if a stored occupation now conflicts.
pub fn ensure_slot_free(
    conn: &mut SqliteConnection,
    occupation: &Occupation,
    duration_unit_minutes: u32,
) -> Result<(), PersistenceError> {
    let date: Date = stored_date(occupation)?;
    let existing: Vec<Occupation> = list_occupations_on(conn, occupation.installation_id, date)?;

    check_no_overlap(occupation, &existing, duration_unit_minutes).map_err(|violation| {
        warn!(
            installation_id = occupation.installation_id,
            court = occupation.court,
            "Rejected late conflict at write time"
        );
        PersistenceError::Occupied(violation)
    })
}

/// Inserts a new occupation row.
///
/// # Returns
///
/// The occupation ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the occupation has no date or start, or the insert fails.
pub fn insert_occupation(
    conn: &mut SqliteConnection,
    occupation: &Occupation,
) -> Result<i64, PersistenceError> {
    let date: Date = stored_date(occupation)?;
    let start: Time = stored_start(occupation)?;

    diesel::insert_into(occupations::table)
        .values((
            occupations::installation_id.eq(occupation.installation_id),
            occupations::court.eq(occupation.court),
            occupations::last_court.eq(occupation.last_court),
            occupations::booking_date.eq(format_date(date)),
            occupations::start_time.eq(format_time(start)),
            occupations::duration_units.eq(occupation.duration_units),
            occupations::description.eq(occupation.text.trim()),
            occupations::type_id.eq(occupation.type_id),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Overwrites a stored occupation row.
///
/// # Errors
///
/// Returns `OccupationNotFound` if no row has the given id.
pub fn update_occupation(
    conn: &mut SqliteConnection,
    occupation_id: i64,
    occupation: &Occupation,
) -> Result<(), PersistenceError> {
    let date: Date = stored_date(occupation)?;
    let start: Time = stored_start(occupation)?;

    let updated: usize =
        diesel::update(occupations::table.filter(occupations::occupation_id.eq(occupation_id)))
            .set((
                occupations::installation_id.eq(occupation.installation_id),
                occupations::court.eq(occupation.court),
                occupations::last_court.eq(occupation.last_court),
                occupations::booking_date.eq(format_date(date)),
                occupations::start_time.eq(format_time(start)),
                occupations::duration_units.eq(occupation.duration_units),
                occupations::description.eq(occupation.text.trim()),
                occupations::type_id.eq(occupation.type_id),
            ))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::OccupationNotFound(occupation_id));
    }
    Ok(())
}

/// Deletes a stored occupation row.
///
/// # Errors
///
/// Returns `OccupationNotFound` if no row has the given id.
pub fn delete_occupation(
    conn: &mut SqliteConnection,
    occupation_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(occupations::table.filter(occupations::occupation_id.eq(occupation_id)))
            .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::OccupationNotFound(occupation_id));
    }
    Ok(())
}

fn stored_date(occupation: &Occupation) -> Result<Date, PersistenceError> {
    occupation
        .date
        .ok_or_else(|| PersistenceError::Other(String::from("Occupation has no date")))
}

fn stored_start(occupation: &Occupation) -> Result<Time, PersistenceError> {
    occupation
        .start
        .ok_or_else(|| PersistenceError::Other(String::from("Occupation has no start time")))
}
