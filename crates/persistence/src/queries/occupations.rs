// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_domain::{Occupation, format_date};
use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use tracing::debug;

use crate::data_models::OccupationRow;
use crate::diesel_schema::occupations;
use crate::error::PersistenceError;

/// Lists all occupations of an installation on one day, ordered by start
/// time and court.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `installation_id` - The installation
/// * `date` - The booking day
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_occupations_on(
    conn: &mut SqliteConnection,
    installation_id: i64,
    date: Date,
) -> Result<Vec<Occupation>, PersistenceError> {
    let rows: Vec<OccupationRow> = occupations::table
        .filter(occupations::installation_id.eq(installation_id))
        .filter(occupations::booking_date.eq(format_date(date)))
        .order((occupations::start_time.asc(), occupations::court.asc()))
        .select(OccupationRow::as_select())
        .load::<OccupationRow>(conn)?;

    debug!(installation_id, count = rows.len(), "Loaded occupations");

    rows.into_iter().map(OccupationRow::into_occupation).collect()
}

/// Retrieves one occupation by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
pub fn find_occupation(
    conn: &mut SqliteConnection,
    occupation_id: i64,
) -> Result<Option<Occupation>, PersistenceError> {
    let row: Option<OccupationRow> = occupations::table
        .filter(occupations::occupation_id.eq(occupation_id))
        .select(OccupationRow::as_select())
        .first::<OccupationRow>(conn)
        .optional()?;

    row.map(OccupationRow::into_occupation).transpose()
}
