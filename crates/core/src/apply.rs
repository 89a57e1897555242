// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use courtbook_domain::{
    ErrorCode, Field, FieldError, InstallationConfig, Installations, Member, Occupation,
    ReservationTypeRule, check_member_active, check_role_permitted, format_date, format_time,
    resolve_installation, resolve_reservation_type,
};
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::command::Command;
use crate::error::{CoreError, ValidationFailure};
use crate::source::OccupationSource;
use crate::state::{TransitionResult, occupation_snapshot};
use crate::validate::validate;

/// Applies a booking command, producing the accepted occupation and its
/// audit event.
///
/// Nothing is written: the caller persists the result. Create and update
/// run the full validation; delete checks only that the member may act on
/// the stored occupation.
///
/// # Arguments
///
/// * `installations` - All configured installations
/// * `command` - The command to apply
/// * `member` - The member issuing the command
/// * `cause` - The cause or reason for this action
/// * `source` - Stored occupations
/// * `now` - The current instant
///
/// # Errors
///
/// Returns an error if:
/// - The command is rejected by validation, authorization or the overlap check
/// - An update or delete references an unknown occupation
/// - The source cannot be read
#[allow(clippy::too_many_lines)]
pub fn apply<S>(
    installations: &Installations,
    command: Command,
    member: &Member,
    cause: Cause,
    source: &mut S,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError>
where
    S: OccupationSource + ?Sized,
{
    let actor: Actor = Actor::for_member(member);

    match command {
        Command::CreateOccupation { mut occupation } => {
            occupation.id = None;
            validate(&occupation, member, installations, source, now)?;

            let date: Date = accepted_date(&occupation)?;
            let action: Action = Action::new(
                String::from("CreateOccupation"),
                Some(describe("Created", &occupation)),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                StateSnapshot::absent(),
                occupation_snapshot(&occupation),
                occupation.installation_id,
                date,
            );

            info!(
                member = %member.id,
                installation_id = occupation.installation_id,
                "Occupation create accepted"
            );
            Ok(TransitionResult {
                occupation,
                audit_event,
            })
        }
        Command::UpdateOccupation { id, mut occupation } => {
            let stored: Occupation = load(source, id)?;
            occupation.id = Some(id);
            validate(&occupation, member, installations, source, now)?;

            let date: Date = accepted_date(&occupation)?;
            let action: Action = Action::new(
                String::from("UpdateOccupation"),
                Some(describe(&format!("Updated occupation {id}:"), &occupation)),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                occupation_snapshot(&stored),
                occupation_snapshot(&occupation),
                occupation.installation_id,
                date,
            );

            info!(
                member = %member.id,
                occupation_id = id,
                "Occupation update accepted"
            );
            Ok(TransitionResult {
                occupation,
                audit_event,
            })
        }
        Command::DeleteOccupation { id } => {
            let stored: Occupation = load(source, id)?;
            authorize_delete(installations, &stored, member)?;

            let date: Date = accepted_date(&stored)?;
            let action: Action = Action::new(
                String::from("DeleteOccupation"),
                Some(describe(&format!("Deleted occupation {id}:"), &stored)),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                occupation_snapshot(&stored),
                StateSnapshot::absent(),
                stored.installation_id,
                date,
            );

            info!(
                member = %member.id,
                occupation_id = id,
                "Occupation delete accepted"
            );
            Ok(TransitionResult {
                occupation: stored,
                audit_event,
            })
        }
    }
}

/// Deleting requires an active member who is an administrator or may book
/// the occupation's type.
fn authorize_delete(
    installations: &Installations,
    stored: &Occupation,
    member: &Member,
) -> Result<(), ValidationFailure> {
    let config: &InstallationConfig = resolve_installation(installations, stored.installation_id)
        .map_err(ValidationFailure::Authorization)?;
    check_member_active(member).map_err(ValidationFailure::Authorization)?;
    if member.is_admin() {
        return Ok(());
    }
    let rule: &ReservationTypeRule = resolve_reservation_type(config, stored.type_id)
        .map_err(ValidationFailure::Authorization)?;
    check_role_permitted(member, rule).map_err(ValidationFailure::Authorization)
}

fn load<S>(source: &mut S, id: i64) -> Result<Occupation, CoreError>
where
    S: OccupationSource + ?Sized,
{
    source
        .occupation(id)
        .map_err(|e| CoreError::Lookup(e.to_string()))?
        .ok_or(CoreError::OccupationNotFound(id))
}

/// The date of an occupation that passed validation or was read from storage.
fn accepted_date(occupation: &Occupation) -> Result<Date, ValidationFailure> {
    occupation.date.ok_or_else(|| {
        ValidationFailure::Validation(vec![FieldError::new(
            Field::Date,
            ErrorCode::NullNotAllowed,
            Vec::new(),
        )])
    })
}

fn describe(verb: &str, occupation: &Occupation) -> String {
    format!(
        "{verb} courts {}-{} on {} at {} for {} unit(s): {}",
        occupation.court,
        occupation.last_court_or_court(),
        occupation.date.map(format_date).unwrap_or_default(),
        occupation.start.map(format_time).unwrap_or_default(),
        occupation.duration_units,
        occupation.text.trim()
    )
}
