// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the individual occupation rules.

use crate::{
    ErrorCode, Field, FieldError, FieldErrors, InstallationConfig, Installations, MemberStatus,
    Occupation, ReservationTypeRule, Role, Violation, check_court_lower_bound,
    check_court_upper_bound, check_date_present, check_duration_positive,
    check_duration_within_type_max, check_fits_before_closing, check_horizon, check_last_court,
    check_member_active, check_not_in_past, check_role_permitted, check_start_after_opening,
    check_start_before_closing, check_start_granularity, check_start_present, check_text_present,
    check_weekday_allowed, resolve_installation, resolve_reservation_type,
};
use time::macros::{datetime, time};
use time::{OffsetDateTime, Weekday};

use super::helpers::{
    BOOKING_DATE, INSTALLATION_ID, MATCH_TYPE_ID, create_test_config, create_test_member,
    create_test_occupation, ten_o_clock,
};

fn single_error(errors: &FieldErrors) -> &FieldError {
    assert_eq!(errors.len(), 1, "expected exactly one error: {errors:?}");
    &errors.as_slice()[0]
}

#[test]
fn test_resolve_installation_finds_configured_installation() {
    let installations: Installations = Installations::new(vec![create_test_config()]);

    let config: &InstallationConfig = resolve_installation(&installations, INSTALLATION_ID).unwrap();

    assert_eq!(config.name, "Main Club");
}

#[test]
fn test_resolve_installation_rejects_non_positive_id() {
    let installations: Installations = Installations::new(vec![create_test_config()]);

    let violation: Violation = resolve_installation(&installations, 0).unwrap_err();

    assert_eq!(violation.code, ErrorCode::NoReservationSystem);
}

#[test]
fn test_resolve_installation_rejects_unknown_id() {
    let installations: Installations = Installations::new(vec![create_test_config()]);

    let violation: Violation = resolve_installation(&installations, 99).unwrap_err();

    assert_eq!(violation.code, ErrorCode::NoReservationSystem);
    assert_eq!(violation.args, vec![String::from("99")]);
}

#[test]
fn test_blank_text_is_rejected() {
    let mut occupation: Occupation = create_test_occupation(1, ten_o_clock(), 1);
    occupation.text = String::from("   ");
    let mut errors: FieldErrors = FieldErrors::new();

    check_text_present(&occupation, &mut errors);

    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::Text);
    assert_eq!(error.code, ErrorCode::NullNotAllowed);
}

#[test]
fn test_resolve_reservation_type_rejects_unknown_type() {
    let config: InstallationConfig = create_test_config();

    assert!(resolve_reservation_type(&config, MATCH_TYPE_ID).is_ok());
    let violation: Violation = resolve_reservation_type(&config, 77).unwrap_err();

    assert_eq!(violation.code, ErrorCode::InvalidReservationType);
}

#[test]
fn test_missing_date_and_start_are_reported() {
    let mut occupation: Occupation = create_test_occupation(1, ten_o_clock(), 1);
    occupation.date = None;
    occupation.start = None;
    let mut errors: FieldErrors = FieldErrors::new();

    assert!(check_date_present(&occupation, &mut errors).is_none());
    assert!(check_start_present(&occupation, &mut errors).is_none());

    let fields: Vec<Field> = errors.as_slice().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Date, Field::Start]);
    assert!(
        errors
            .as_slice()
            .iter()
            .all(|e| e.code == ErrorCode::NullNotAllowed)
    );
}

#[test]
fn test_forbidden_weekday_is_rejected() {
    let rule: ReservationTypeRule = ReservationTypeRule::new(1, "Training", &[Role::Trainer])
        .with_forbidden_weekdays(&[Weekday::Tuesday]);
    let mut errors: FieldErrors = FieldErrors::new();

    check_weekday_allowed(BOOKING_DATE, &rule, &mut errors);

    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::Date);
    assert_eq!(error.code, ErrorCode::DayOfWeekNotAllowed);
    assert_eq!(error.args, vec![String::from("Tuesday")]);
}

#[test]
fn test_other_weekday_is_allowed() {
    let rule: ReservationTypeRule = ReservationTypeRule::new(1, "Training", &[Role::Trainer])
        .with_forbidden_weekdays(&[Weekday::Saturday, Weekday::Sunday]);
    let mut errors: FieldErrors = FieldErrors::new();

    check_weekday_allowed(BOOKING_DATE, &rule, &mut errors);

    assert!(errors.is_empty());
}

#[test]
fn test_start_before_opening_is_rejected() {
    let config: InstallationConfig = create_test_config();
    let mut errors: FieldErrors = FieldErrors::new();

    check_start_after_opening(time!(7:00), &config, &mut errors);
    check_start_after_opening(time!(8:00), &config, &mut errors);

    let error: &FieldError = single_error(&errors);
    assert_eq!(error.code, ErrorCode::StartHourBeforeOpening);
    assert_eq!(error.args, vec![String::from("8")]);
}

#[test]
fn test_start_in_closing_hour_passes_hour_check() {
    let config: InstallationConfig = create_test_config();
    let mut errors: FieldErrors = FieldErrors::new();

    check_start_before_closing(time!(22:00), &config, &mut errors);
    assert!(errors.is_empty());

    check_start_before_closing(time!(23:00), &config, &mut errors);
    assert_eq!(single_error(&errors).code, ErrorCode::StartHourAfterClosing);
}

#[test]
fn test_start_granularity_on_hour_grid() {
    let config: InstallationConfig = create_test_config();
    let mut errors: FieldErrors = FieldErrors::new();

    check_start_granularity(time!(10:00), &config, &mut errors);
    assert!(errors.is_empty());

    check_start_granularity(time!(21:30), &config, &mut errors);
    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::Start);
    assert_eq!(error.code, ErrorCode::StartTimeMinutes);
}

#[test]
fn test_start_granularity_on_half_hour_grid() {
    let mut config: InstallationConfig = create_test_config();
    config.duration_unit_minutes = 30;
    let mut errors: FieldErrors = FieldErrors::new();

    check_start_granularity(time!(10:30), &config, &mut errors);
    assert!(errors.is_empty());

    check_start_granularity(time!(10:15), &config, &mut errors);
    assert_eq!(single_error(&errors).code, ErrorCode::StartTimeMinutes);
}

#[test]
fn test_past_start_is_rejected_for_members() {
    let member = create_test_member(Role::Registered, MemberStatus::Active);
    let now: OffsetDateTime = datetime!(2026-10-20 10:01 UTC);
    let mut errors: FieldErrors = FieldErrors::new();

    check_not_in_past(datetime!(2026-10-20 10:00 UTC), &member, now, &mut errors);

    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::Date);
    assert_eq!(error.code, ErrorCode::DateInThePast);
}

#[test]
fn test_start_equal_to_now_is_not_in_the_past() {
    let member = create_test_member(Role::Registered, MemberStatus::Active);
    let now: OffsetDateTime = datetime!(2026-10-20 10:00 UTC);
    let mut errors: FieldErrors = FieldErrors::new();

    check_not_in_past(datetime!(2026-10-20 10:00 UTC), &member, now, &mut errors);

    assert!(errors.is_empty());
}

#[test]
fn test_admins_may_book_in_the_past() {
    let admin = create_test_member(Role::Admin, MemberStatus::Active);
    let now: OffsetDateTime = datetime!(2026-10-21 10:00 UTC);
    let mut errors: FieldErrors = FieldErrors::new();

    check_not_in_past(datetime!(2026-10-20 10:00 UTC), &admin, now, &mut errors);

    assert!(errors.is_empty());
}

#[test]
fn test_occupation_ending_at_closing_fits() {
    let config: InstallationConfig = create_test_config();
    let mut errors: FieldErrors = FieldErrors::new();

    check_fits_before_closing(BOOKING_DATE, time!(20:00), 2, &config, &mut errors);

    assert!(errors.is_empty());
}

#[test]
fn test_occupation_running_past_closing_is_rejected() {
    let config: InstallationConfig = create_test_config();
    let mut errors: FieldErrors = FieldErrors::new();

    check_fits_before_closing(BOOKING_DATE, time!(21:00), 2, &config, &mut errors);

    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::Start);
    assert_eq!(error.code, ErrorCode::StartTimePlusDuration);
    assert_eq!(error.args, vec![String::from("22")]);
}

#[test]
fn test_occupation_starting_at_closing_hour_overruns() {
    let config: InstallationConfig = create_test_config();
    let mut errors: FieldErrors = FieldErrors::new();

    check_fits_before_closing(BOOKING_DATE, time!(22:00), 1, &config, &mut errors);

    assert_eq!(single_error(&errors).code, ErrorCode::StartTimePlusDuration);
}

#[test]
fn test_horizon_counts_whole_elapsed_hours() {
    let rule: ReservationTypeRule =
        ReservationTypeRule::new(1, "Match", &[Role::Registered]).with_max_days_ahead(2);
    let now: OffsetDateTime = datetime!(2026-10-16 12:00 UTC);
    let mut errors: FieldErrors = FieldErrors::new();

    // 47h59m ahead truncates to 47 whole hours.
    check_horizon(datetime!(2026-10-18 11:59 UTC), &rule, now, &mut errors);
    assert!(errors.is_empty());

    check_horizon(datetime!(2026-10-18 12:00 UTC), &rule, now, &mut errors);
    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::Date);
    assert_eq!(error.code, ErrorCode::DateTooFarInFuture);
    assert_eq!(error.args, vec![String::from("2")]);
}

#[test]
fn test_horizon_window_moves_with_time_of_day() {
    let rule: ReservationTypeRule =
        ReservationTypeRule::new(1, "Match", &[Role::Registered]).with_max_days_ahead(1);
    let starts_at: OffsetDateTime = datetime!(2026-10-17 09:00 UTC);
    let mut errors: FieldErrors = FieldErrors::new();

    // Same calendar-day difference, different verdicts.
    check_horizon(starts_at, &rule, datetime!(2026-10-16 10:00 UTC), &mut errors);
    assert!(errors.is_empty());

    check_horizon(starts_at, &rule, datetime!(2026-10-16 08:00 UTC), &mut errors);
    assert_eq!(single_error(&errors).code, ErrorCode::DateTooFarInFuture);
}

#[test]
fn test_unlimited_horizon_never_fails() {
    let rule: ReservationTypeRule = ReservationTypeRule::new(1, "Match", &[Role::Registered]);
    let mut errors: FieldErrors = FieldErrors::new();

    check_horizon(
        datetime!(2030-01-01 10:00 UTC),
        &rule,
        datetime!(2026-10-16 10:00 UTC),
        &mut errors,
    );

    assert!(errors.is_empty());
}

#[test]
fn test_duration_below_one_unit_is_rejected() {
    for duration_units in [0, -1, -20] {
        let occupation: Occupation = create_test_occupation(1, ten_o_clock(), duration_units);
        let mut errors: FieldErrors = FieldErrors::new();

        check_duration_positive(&occupation, &mut errors);

        let error: &FieldError = single_error(&errors);
        assert_eq!(error.field, Field::Duration);
        assert_eq!(error.code, ErrorCode::DurationTooSmall);
    }
}

#[test]
fn test_duration_above_type_max_is_rejected() {
    let config: InstallationConfig = create_test_config();
    let rule: &ReservationTypeRule = config.reservation_type(MATCH_TYPE_ID).unwrap();
    let mut errors: FieldErrors = FieldErrors::new();

    check_duration_within_type_max(&create_test_occupation(1, ten_o_clock(), 3), rule, &mut errors);
    assert!(errors.is_empty());

    check_duration_within_type_max(&create_test_occupation(1, ten_o_clock(), 4), rule, &mut errors);
    let error: &FieldError = single_error(&errors);
    assert_eq!(error.code, ErrorCode::DurationTooLong);
    assert_eq!(error.args, vec![String::from("3")]);
}

#[test]
fn test_unlimited_duration_accepts_long_occupations() {
    let rule: ReservationTypeRule = ReservationTypeRule::new(1, "Tournament", &[Role::Admin]);
    let mut errors: FieldErrors = FieldErrors::new();

    check_duration_within_type_max(&create_test_occupation(1, ten_o_clock(), 12), &rule, &mut errors);

    assert!(errors.is_empty());
}

#[test]
fn test_court_bounds() {
    let config: InstallationConfig = create_test_config();

    for (court, expected) in [
        (0, Some(ErrorCode::CourtTooSmall)),
        (-3, Some(ErrorCode::CourtTooSmall)),
        (1, None),
        (6, None),
        (7, Some(ErrorCode::CourtTooBig)),
    ] {
        let occupation: Occupation = create_test_occupation(court, ten_o_clock(), 1);
        let mut errors: FieldErrors = FieldErrors::new();

        check_court_lower_bound(&occupation, &mut errors);
        check_court_upper_bound(&occupation, &config, &mut errors);

        let codes: Vec<ErrorCode> = errors.as_slice().iter().map(|e| e.code).collect();
        assert_eq!(codes, expected.into_iter().collect::<Vec<_>>(), "court {court}");
        assert!(errors.as_slice().iter().all(|e| e.field == Field::Court));
    }
}

#[test]
fn test_last_court_must_not_precede_court() {
    let config: InstallationConfig = create_test_config();
    let occupation: Occupation = create_test_occupation(3, ten_o_clock(), 1).spanning_to(2);
    let mut errors: FieldErrors = FieldErrors::new();

    check_last_court(&occupation, &config, &mut errors);

    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::LastCourt);
    assert_eq!(error.code, ErrorCode::CourtTooSmall);
}

#[test]
fn test_last_court_must_exist() {
    let config: InstallationConfig = create_test_config();
    let mut errors: FieldErrors = FieldErrors::new();

    check_last_court(
        &create_test_occupation(4, ten_o_clock(), 1).spanning_to(6),
        &config,
        &mut errors,
    );
    assert!(errors.is_empty());

    check_last_court(
        &create_test_occupation(4, ten_o_clock(), 1).spanning_to(7),
        &config,
        &mut errors,
    );
    let error: &FieldError = single_error(&errors);
    assert_eq!(error.field, Field::LastCourt);
    assert_eq!(error.code, ErrorCode::CourtTooBig);
}

#[test]
fn test_only_active_members_pass() {
    for status in [
        MemberStatus::Created,
        MemberStatus::Verified,
        MemberStatus::Locked,
        MemberStatus::Removed,
    ] {
        let member = create_test_member(Role::Registered, status);
        let violation: Violation = check_member_active(&member).unwrap_err();
        assert_eq!(violation.code, ErrorCode::UserNotActive);
    }

    let member = create_test_member(Role::Registered, MemberStatus::Active);
    assert!(check_member_active(&member).is_ok());
}

#[test]
fn test_role_must_be_permitted_for_type() {
    let config: InstallationConfig = create_test_config();
    let rule: &ReservationTypeRule = config.reservation_type(MATCH_TYPE_ID).unwrap();

    let registered = create_test_member(Role::Registered, MemberStatus::Active);
    assert!(check_role_permitted(&registered, rule).is_ok());

    let guest = create_test_member(Role::Guest, MemberStatus::Active);
    let violation: Violation = check_role_permitted(&guest, rule).unwrap_err();
    assert_eq!(violation.code, ErrorCode::UserCannotAddType);
    assert_eq!(violation.args, vec![String::from("Match")]);
}
