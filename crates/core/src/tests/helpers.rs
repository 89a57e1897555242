// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::OccupationSource;
use courtbook_audit::Cause;
use courtbook_domain::{
    InstallationConfig, Installations, Member, MemberStatus, Occupation, ReservationTypeRule, Role,
};
use std::convert::Infallible;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime, Time};

pub const INSTALLATION_ID: i64 = 1;
pub const MATCH_TYPE_ID: i64 = 10;
pub const TRAINING_TYPE_ID: i64 = 20;

/// The day after [`now`].
pub const TOMORROW: Date = date!(2026 - 10 - 20);

pub fn now() -> OffsetDateTime {
    datetime!(2026-10-19 12:00 UTC)
}

/// Unit 60, 08-22, six courts. "Match" is open to registered members for up
/// to three units; "Training" is reserved for trainers.
pub fn create_test_config() -> InstallationConfig {
    InstallationConfig {
        id: INSTALLATION_ID,
        name: String::from("Main Club"),
        courts: (1..=6).map(|n| format!("Court {n}")).collect(),
        duration_unit_minutes: 60,
        opening_hour: 8,
        closing_hour: 22,
        timezone: chrono_tz::Tz::UTC,
        reservation_types: vec![
            ReservationTypeRule::new(MATCH_TYPE_ID, "Match", &[Role::Registered, Role::Admin])
                .with_max_duration(3),
            ReservationTypeRule::new(TRAINING_TYPE_ID, "Training", &[Role::Trainer]),
        ],
    }
}

pub fn create_test_installations() -> Installations {
    Installations::new(vec![create_test_config()])
}

pub fn create_test_member(role: Role, status: MemberStatus) -> Member {
    Member::new(
        String::from("m-1"),
        String::from("Test Member"),
        role,
        status,
    )
}

pub fn create_active_member() -> Member {
    create_test_member(Role::Registered, MemberStatus::Active)
}

pub fn create_test_occupation(court: i32, start: Time, duration_units: i32) -> Occupation {
    Occupation::new(
        INSTALLATION_ID,
        court,
        Some(TOMORROW),
        Some(start),
        duration_units,
        String::from("Club match"),
        MATCH_TYPE_ID,
    )
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Member request"))
}

/// A store that counts how often it is read.
#[derive(Debug, Default)]
pub struct RecordingSource {
    pub occupations: Vec<Occupation>,
    pub queries: usize,
}

impl RecordingSource {
    pub fn with(occupations: Vec<Occupation>) -> Self {
        Self {
            occupations,
            queries: 0,
        }
    }
}

impl OccupationSource for RecordingSource {
    type Error = Infallible;

    fn occupations_on(
        &mut self,
        installation_id: i64,
        date: Date,
    ) -> Result<Vec<Occupation>, Self::Error> {
        self.queries += 1;
        self.occupations.occupations_on(installation_id, date)
    }

    fn occupation(&mut self, id: i64) -> Result<Option<Occupation>, Self::Error> {
        self.occupations.occupation(id)
    }
}

/// A store that cannot be reached.
pub struct FailingSource;

impl OccupationSource for FailingSource {
    type Error = String;

    fn occupations_on(&mut self, _: i64, _: Date) -> Result<Vec<Occupation>, Self::Error> {
        Err(String::from("database is locked"))
    }

    fn occupation(&mut self, _: i64) -> Result<Option<Occupation>, Self::Error> {
        Err(String::from("database is locked"))
    }
}
