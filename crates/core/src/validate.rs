// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The validation orchestrator.
//!
//! Rules run in a fixed order. Field rules accumulate; resolution and
//! authorization rules fail immediately and discard anything accumulated so
//! far. The overlap check runs only once every rule has passed.

use courtbook_domain::{
    ErrorCode, FieldErrors, InstallationConfig, Installations, Member, Occupation, ReservationTypeRule,
    Violation, check_court_lower_bound, check_court_upper_bound, check_date_present,
    check_duration_positive, check_duration_within_type_max, check_fits_before_closing,
    check_horizon, check_last_court, check_member_active, check_no_overlap, check_not_in_past,
    check_role_permitted, check_start_after_opening, check_start_before_closing,
    check_start_granularity, check_start_present, check_text_present, check_weekday_allowed,
    resolve_installation, resolve_reservation_type, to_instant,
};
use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::error::{CoreError, ValidationFailure};
use crate::source::OccupationSource;

/// Validates a candidate occupation, reading stored occupations from `source`.
///
/// The source is queried once, for the candidate's installation and date,
/// and only after every rule has passed.
///
/// # Arguments
///
/// * `candidate` - The occupation to check. Carries an id when it replaces a
///   stored occupation, which is then excluded from the overlap check.
/// * `member` - The member requesting the booking
/// * `installations` - All configured installations
/// * `source` - Stored occupations
/// * `now` - The current instant
///
/// # Errors
///
/// Returns `CoreError::Rejected` with exactly one failure category, or
/// `CoreError::Lookup` if the source cannot be read.
pub fn validate<S>(
    candidate: &Occupation,
    member: &Member,
    installations: &Installations,
    source: &mut S,
    now: OffsetDateTime,
) -> Result<(), CoreError>
where
    S: OccupationSource + ?Sized,
{
    let config: &InstallationConfig =
        resolve_installation(installations, candidate.installation_id)
            .map_err(ValidationFailure::Authorization)?;

    let date: Date = evaluate_rules(candidate, member, config, now)?;

    let existing: Vec<Occupation> = source
        .occupations_on(config.id, date)
        .map_err(|e| CoreError::Lookup(e.to_string()))?;
    check_no_overlap(candidate, &existing, config.duration_unit_minutes)
        .map_err(ValidationFailure::Conflict)?;

    debug!(
        installation_id = config.id,
        court = candidate.court,
        checked = existing.len(),
        "Occupation accepted"
    );
    Ok(())
}

/// Validates a candidate occupation against an already loaded snapshot.
///
/// # Arguments
///
/// * `candidate` - The occupation to check
/// * `member` - The member requesting the booking
/// * `config` - The installation the candidate must belong to
/// * `existing` - Stored occupations to check for conflicts
/// * `now` - The current instant
///
/// # Errors
///
/// Returns the single failure category that applies.
pub fn validate_occupation(
    candidate: &Occupation,
    member: &Member,
    config: &InstallationConfig,
    existing: &[Occupation],
    now: OffsetDateTime,
) -> Result<(), ValidationFailure> {
    if candidate.installation_id != config.id {
        return Err(ValidationFailure::Authorization(Violation::new(
            ErrorCode::NoReservationSystem,
            vec![candidate.installation_id.to_string()],
        )));
    }
    evaluate_rules(candidate, member, config, now)?;
    check_no_overlap(candidate, existing, config.duration_unit_minutes)
        .map_err(ValidationFailure::Conflict)
}

/// Runs every rule after installation resolution. Returns the candidate's
/// date, which is guaranteed present on success.
fn evaluate_rules(
    candidate: &Occupation,
    member: &Member,
    config: &InstallationConfig,
    now: OffsetDateTime,
) -> Result<Date, ValidationFailure> {
    let mut errors: FieldErrors = FieldErrors::new();

    check_text_present(candidate, &mut errors);

    let rule: &ReservationTypeRule = resolve_reservation_type(config, candidate.type_id)
        .map_err(ValidationFailure::Authorization)?;

    let date: Option<Date> = check_date_present(candidate, &mut errors);
    if let Some(date) = date {
        check_weekday_allowed(date, rule, &mut errors);
    }

    let start = check_start_present(candidate, &mut errors);
    if let Some(start) = start {
        check_start_after_opening(start, config, &mut errors);
        check_start_before_closing(start, config, &mut errors);
        check_start_granularity(start, config, &mut errors);
    }

    if let (Some(date), Some(start)) = (date, start) {
        let starts_at: Option<OffsetDateTime> = candidate
            .starts_at()
            .and_then(|at| to_instant(config.timezone, at));
        if let Some(starts_at) = starts_at {
            check_not_in_past(starts_at, member, now, &mut errors);
        }
        check_fits_before_closing(date, start, candidate.duration_units, config, &mut errors);
        if let Some(starts_at) = starts_at {
            check_horizon(starts_at, rule, now, &mut errors);
        }
    }

    check_duration_positive(candidate, &mut errors);
    check_duration_within_type_max(candidate, rule, &mut errors);

    check_court_lower_bound(candidate, &mut errors);
    check_court_upper_bound(candidate, config, &mut errors);
    check_last_court(candidate, config, &mut errors);

    check_member_active(member).map_err(ValidationFailure::Authorization)?;
    check_role_permitted(member, rule).map_err(ValidationFailure::Authorization)?;

    match date {
        Some(date) if errors.is_empty() => Ok(date),
        _ => {
            debug!(
                installation_id = config.id,
                errors = errors.len(),
                "Occupation failed validation"
            );
            Err(ValidationFailure::Validation(errors.into_vec()))
        }
    }
}
