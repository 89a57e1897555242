// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_domain::{Occupation, parse_date, parse_time};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::occupations;
use crate::error::PersistenceError;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}

/// Diesel Queryable struct for occupation rows.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = occupations)]
pub struct OccupationRow {
    pub occupation_id: i64,
    pub installation_id: i64,
    pub court: i32,
    pub last_court: Option<i32>,
    pub booking_date: String,
    pub start_time: String,
    pub duration_units: i32,
    pub description: String,
    pub type_id: i64,
}

impl OccupationRow {
    /// Rebuilds the domain occupation from its stored form.
    ///
    /// # Errors
    ///
    /// Returns `ReconstructionError` if the stored date or time is malformed.
    pub fn into_occupation(self) -> Result<Occupation, PersistenceError> {
        let date = parse_date(&self.booking_date)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
        let start = parse_time(&self.start_time)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

        let mut occupation: Occupation = Occupation::new(
            self.installation_id,
            self.court,
            Some(date),
            Some(start),
            self.duration_units,
            self.description,
            self.type_id,
        )
        .with_id(self.occupation_id);
        occupation.last_court = self.last_court;
        Ok(occupation)
    }
}
