// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `audit` — Audit event persistence
//! - `occupations` — Occupation rows and the write-time overlap recheck

pub mod audit;
pub mod occupations;

use courtbook::TransitionResult;
use diesel::SqliteConnection;
use tracing::info;

use crate::error::PersistenceError;

/// Result of persisting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistTransitionResult {
    /// The audit event ID.
    pub event_id: i64,
    /// The occupation the transition wrote or removed.
    pub occupation_id: i64,
}

/// Persists an accepted transition and its audit event atomically.
///
/// Creates and updates re-run the overlap check inside the same immediate
/// (write-locking) transaction, so two requests that both passed validation
/// cannot both be stored.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `result` - The transition result to persist
/// * `duration_unit_minutes` - The installation's grid unit
///
/// # Errors
///
/// Returns `PersistenceError::Occupied` on a late conflict, or an error if
/// the write fails.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
    duration_unit_minutes: u32,
) -> Result<PersistTransitionResult, PersistenceError> {
    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let action_name: &str = result.audit_event.action.name.as_str();
        let occupation_id: i64 = match action_name {
            "CreateOccupation" => {
                occupations::ensure_slot_free(conn, &result.occupation, duration_unit_minutes)?;
                occupations::insert_occupation(conn, &result.occupation)?
            }
            "UpdateOccupation" => {
                let id: i64 = required_id(result)?;
                occupations::ensure_slot_free(conn, &result.occupation, duration_unit_minutes)?;
                occupations::update_occupation(conn, id, &result.occupation)?;
                id
            }
            "DeleteOccupation" => {
                let id: i64 = required_id(result)?;
                occupations::delete_occupation(conn, id)?;
                id
            }
            other => {
                return Err(PersistenceError::Other(format!(
                    "Unsupported transition: {other}"
                )));
            }
        };

        let event_id: i64 =
            audit::persist_audit_event(conn, &result.audit_event, Some(occupation_id))?;

        info!(event_id, occupation_id, action = action_name, "Persisted transition");
        Ok(PersistTransitionResult {
            event_id,
            occupation_id,
        })
    })
}

fn required_id(result: &TransitionResult) -> Result<i64, PersistenceError> {
    result.occupation.id.ok_or_else(|| {
        PersistenceError::Other(format!(
            "{} requires a stored occupation",
            result.audit_event.action.name
        ))
    })
}
