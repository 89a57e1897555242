// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The occupation rule set.
//!
//! Each function checks exactly one invariant. Field rules push at most one
//! [`FieldError`] into a [`FieldErrors`] accumulator owned by the caller;
//! resolution and authorization rules return a [`Violation`] that the caller
//! raises immediately.
//!
//! Functions that need a date or start time take them as plain values: the
//! caller only invokes them after the presence rules have produced them.

use crate::codes::{ErrorCode, Field, FieldError, Violation};
use crate::installation::{InstallationConfig, Installations, ReservationTypeRule};
use crate::timing::{format_date, format_time};
use crate::types::{Member, Occupation, weekday_name};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Field errors collected during one validation call, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records a violation on `field`.
    pub fn push(&mut self, field: Field, code: ErrorCode, args: Vec<String>) {
        self.errors.push(FieldError::new(field, code, args));
    }

    /// Whether no rule has failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// The recorded errors.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consumes the accumulator.
    #[must_use]
    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Resolves the installation an occupation refers to.
///
/// # Errors
///
/// Returns `NO_RESERVATION_SYSTEM` if the id is not positive or unknown.
pub fn resolve_installation(
    installations: &Installations,
    installation_id: i64,
) -> Result<&InstallationConfig, Violation> {
    if installation_id <= 0 {
        return Err(Violation::new(
            ErrorCode::NoReservationSystem,
            vec![installation_id.to_string()],
        ));
    }
    installations.get(installation_id).ok_or_else(|| {
        Violation::new(
            ErrorCode::NoReservationSystem,
            vec![installation_id.to_string()],
        )
    })
}

/// Rule: the description must not be blank.
pub fn check_text_present(occupation: &Occupation, errors: &mut FieldErrors) {
    if occupation.text.trim().is_empty() {
        errors.push(Field::Text, ErrorCode::NullNotAllowed, Vec::new());
    }
}

/// Resolves the reservation type an occupation refers to.
///
/// # Errors
///
/// Returns `INVALID_RESERVATION_TYPE` if the installation has no such type.
pub fn resolve_reservation_type(
    config: &InstallationConfig,
    type_id: i64,
) -> Result<&ReservationTypeRule, Violation> {
    config.reservation_type(type_id).ok_or_else(|| {
        Violation::new(
            ErrorCode::InvalidReservationType,
            vec![type_id.to_string()],
        )
    })
}

/// Rule: a date must be given. Returns it for the dependent rules.
pub fn check_date_present(occupation: &Occupation, errors: &mut FieldErrors) -> Option<Date> {
    if occupation.date.is_none() {
        errors.push(Field::Date, ErrorCode::NullNotAllowed, Vec::new());
    }
    occupation.date
}

/// Rule: the reservation type must not be closed on the date's weekday.
pub fn check_weekday_allowed(date: Date, rule: &ReservationTypeRule, errors: &mut FieldErrors) {
    let weekday = date.weekday();
    if rule.forbids(weekday) {
        errors.push(
            Field::Date,
            ErrorCode::DayOfWeekNotAllowed,
            vec![weekday_name(weekday).to_string()],
        );
    }
}

/// Rule: a start time must be given. Returns it for the dependent rules.
pub fn check_start_present(occupation: &Occupation, errors: &mut FieldErrors) -> Option<Time> {
    if occupation.start.is_none() {
        errors.push(Field::Start, ErrorCode::NullNotAllowed, Vec::new());
    }
    occupation.start
}

/// Rule: the start hour must not precede the opening hour.
pub fn check_start_after_opening(
    start: Time,
    config: &InstallationConfig,
    errors: &mut FieldErrors,
) {
    if start.hour() < config.opening_hour {
        errors.push(
            Field::Start,
            ErrorCode::StartHourBeforeOpening,
            vec![config.opening_hour.to_string()],
        );
    }
}

/// Rule: the start hour must not exceed the closing hour.
///
/// Starting exactly in the closing hour passes here; the closing-time rule
/// rejects the overrun.
pub fn check_start_before_closing(
    start: Time,
    config: &InstallationConfig,
    errors: &mut FieldErrors,
) {
    if start.hour() > config.closing_hour {
        errors.push(
            Field::Start,
            ErrorCode::StartHourAfterClosing,
            vec![config.closing_hour.to_string()],
        );
    }
}

/// Rule: the start minute must sit on the installation's time grid.
pub fn check_start_granularity(
    start: Time,
    config: &InstallationConfig,
    errors: &mut FieldErrors,
) {
    let minute: u32 = u32::from(start.minute());
    let unit: u32 = config.duration_unit_minutes;
    let on_grid: bool = minute == 0 || (unit != 0 && minute % unit == 0);
    if !on_grid {
        errors.push(
            Field::Start,
            ErrorCode::StartTimeMinutes,
            vec![unit.to_string()],
        );
    }
}

/// Rule: non-admin members may not book a start that has already passed.
pub fn check_not_in_past(
    starts_at: OffsetDateTime,
    member: &Member,
    now: OffsetDateTime,
    errors: &mut FieldErrors,
) {
    if !member.is_admin() && starts_at < now {
        errors.push(Field::Date, ErrorCode::DateInThePast, Vec::new());
    }
}

/// Rule: the occupation must end by the closing hour of its own day.
pub fn check_fits_before_closing(
    date: Date,
    start: Time,
    duration_units: i32,
    config: &InstallationConfig,
    errors: &mut FieldErrors,
) {
    let begins: PrimitiveDateTime = PrimitiveDateTime::new(date, start);
    let closes: Option<PrimitiveDateTime> = Time::from_hms(config.closing_hour, 0, 0)
        .ok()
        .map(|closing| PrimitiveDateTime::new(date, closing));
    let ends: Option<PrimitiveDateTime> =
        begins.checked_add(config.slot_length(duration_units));

    let fits: bool = match (ends, closes) {
        (Some(ends), Some(closes)) => ends <= closes,
        _ => false,
    };
    if !fits {
        errors.push(
            Field::Start,
            ErrorCode::StartTimePlusDuration,
            vec![config.closing_hour.to_string()],
        );
    }
}

/// Rule: the occupation must start within the reservation type's horizon.
///
/// The horizon is measured in whole elapsed hours from `now` to the start
/// and compared against `max_days_ahead * 24`, so the latest bookable day
/// moves with the time of day rather than with the calendar date.
pub fn check_horizon(
    starts_at: OffsetDateTime,
    rule: &ReservationTypeRule,
    now: OffsetDateTime,
    errors: &mut FieldErrors,
) {
    if rule.max_days_ahead == 0 {
        return;
    }
    let hours_ahead: i64 = (starts_at - now).whole_hours();
    if hours_ahead >= i64::from(rule.max_days_ahead) * 24 {
        errors.push(
            Field::Date,
            ErrorCode::DateTooFarInFuture,
            vec![rule.max_days_ahead.to_string()],
        );
    }
}

/// Rule: an occupation lasts at least one unit.
pub fn check_duration_positive(occupation: &Occupation, errors: &mut FieldErrors) {
    if occupation.duration_units < 1 {
        errors.push(Field::Duration, ErrorCode::DurationTooSmall, Vec::new());
    }
}

/// Rule: the duration respects the reservation type's maximum.
pub fn check_duration_within_type_max(
    occupation: &Occupation,
    rule: &ReservationTypeRule,
    errors: &mut FieldErrors,
) {
    if rule.max_duration > 0 && i64::from(occupation.duration_units) > i64::from(rule.max_duration)
    {
        errors.push(
            Field::Duration,
            ErrorCode::DurationTooLong,
            vec![rule.max_duration.to_string()],
        );
    }
}

/// Rule: the first court is at least court 1.
pub fn check_court_lower_bound(occupation: &Occupation, errors: &mut FieldErrors) {
    if occupation.court < 1 {
        errors.push(Field::Court, ErrorCode::CourtTooSmall, vec![String::from("1")]);
    }
}

/// Rule: the first court exists.
pub fn check_court_upper_bound(
    occupation: &Occupation,
    config: &InstallationConfig,
    errors: &mut FieldErrors,
) {
    if occupation.court > config.court_count() {
        errors.push(
            Field::Court,
            ErrorCode::CourtTooBig,
            vec![config.court_count().to_string()],
        );
    }
}

/// Rule: a multi-court span runs upwards from `court` and stays on existing courts.
pub fn check_last_court(
    occupation: &Occupation,
    config: &InstallationConfig,
    errors: &mut FieldErrors,
) {
    let Some(last_court) = occupation.last_court else {
        return;
    };
    if last_court < occupation.court {
        errors.push(
            Field::LastCourt,
            ErrorCode::CourtTooSmall,
            vec![occupation.court.to_string()],
        );
    } else if last_court > config.court_count() {
        errors.push(
            Field::LastCourt,
            ErrorCode::CourtTooBig,
            vec![config.court_count().to_string()],
        );
    }
}

/// Authorization: only active members may book.
///
/// # Errors
///
/// Returns `USER_NOT_ACTIVE` for any other member status.
pub fn check_member_active(member: &Member) -> Result<(), Violation> {
    if member.is_active() {
        return Ok(());
    }
    Err(Violation::new(
        ErrorCode::UserNotActive,
        vec![member.status.to_string()],
    ))
}

/// Authorization: the member's role must be permitted for the reservation type.
///
/// # Errors
///
/// Returns `USER_CANNOT_ADD_TYPE` if the role is not in the permitted set.
pub fn check_role_permitted(member: &Member, rule: &ReservationTypeRule) -> Result<(), Violation> {
    if rule.permits(member.role) {
        return Ok(());
    }
    Err(Violation::new(
        ErrorCode::UserCannotAddType,
        vec![rule.name.clone()],
    ))
}

/// Formats the conflict arguments (date, start, court) for an occupation.
pub(crate) fn occupied_args(occupation: &Occupation) -> Vec<String> {
    vec![
        occupation.date.map(format_date).unwrap_or_default(),
        occupation.start.map(format_time).unwrap_or_default(),
        occupation.court.to_string(),
    ]
}
