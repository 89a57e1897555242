// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InstallationConfig, Member, MemberStatus, Occupation, ReservationTypeRule, Role};
use time::macros::{date, time};
use time::{Date, Time};

pub const INSTALLATION_ID: i64 = 1;
pub const MATCH_TYPE_ID: i64 = 10;

/// 2026-10-20 is a Tuesday.
pub const BOOKING_DATE: Date = date!(2026 - 10 - 20);

/// Six courts, 08-22, one-hour grid, one type open to registered members.
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
        ],
    }
}

pub fn create_test_member(role: Role, status: MemberStatus) -> Member {
    Member::new(
        String::from("m-1"),
        String::from("Test Member"),
        role,
        status,
    )
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

pub fn ten_o_clock() -> Time {
    time!(10:00)
}
