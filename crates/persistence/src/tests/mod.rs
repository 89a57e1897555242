// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::Persistence;
use courtbook::{Command, TransitionResult, apply};
use courtbook_audit::Cause;
use courtbook_domain::{
    InstallationConfig, Installations, Member, MemberStatus, Occupation, ReservationTypeRule, Role,
};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime, Time};

pub const INSTALLATION_ID: i64 = 1;
pub const MATCH_TYPE_ID: i64 = 10;
pub const BOOKING_DATE: Date = date!(2026 - 10 - 20);
pub const UNIT: u32 = 60;

pub fn now() -> OffsetDateTime {
    datetime!(2026-10-19 12:00 UTC)
}

pub fn create_test_installations() -> Installations {
    Installations::new(vec![InstallationConfig {
        id: INSTALLATION_ID,
        name: String::from("Main Club"),
        courts: (1..=6).map(|n| format!("Court {n}")).collect(),
        duration_unit_minutes: UNIT,
        opening_hour: 8,
        closing_hour: 22,
        timezone: chrono_tz::Tz::UTC,
        reservation_types: vec![ReservationTypeRule::new(
            MATCH_TYPE_ID,
            "Match",
            &[Role::Registered, Role::Admin],
        )],
    }])
}

pub fn create_test_member() -> Member {
    Member::new(
        String::from("m-1"),
        String::from("Test Member"),
        Role::Registered,
        MemberStatus::Active,
    )
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn create_test_occupation(court: i32, start: Time, duration_units: i32) -> Occupation {
    Occupation::new(
        INSTALLATION_ID,
        court,
        Some(BOOKING_DATE),
        Some(start),
        duration_units,
        String::from("Club match"),
        MATCH_TYPE_ID,
    )
}

/// Runs a command through the engine against the current store contents.
pub fn accept(persistence: &mut Persistence, command: Command) -> TransitionResult {
    apply(
        &create_test_installations(),
        command,
        &create_test_member(),
        create_test_cause(),
        persistence,
        now(),
    )
    .unwrap()
}

/// Creates and stores an occupation, returning its id.
pub fn book(persistence: &mut Persistence, occupation: Occupation) -> i64 {
    let transition: TransitionResult = accept(persistence, Command::CreateOccupation { occupation });
    persistence
        .persist_transition(&transition, UNIT)
        .unwrap()
        .occupation_id
}
