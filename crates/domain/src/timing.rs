// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date/time conversions shared by the rules and the boundary layers.
//!
//! Occupations are wall-clock values in the installation's timezone. Rules
//! that compare against "now" place the occupation on the absolute timeline
//! first, so day rollovers and DST shifts are handled in one place.

use crate::error::DomainError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Places a wall-clock date-time of `tz` on the absolute timeline.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant.
/// Local times inside a DST gap resolve to the instant one hour later.
/// Returns `None` only if the value lies outside the representable range.
#[must_use]
pub fn to_instant(tz: Tz, at: PrimitiveDateTime) -> Option<OffsetDateTime> {
    let date: NaiveDate = NaiveDate::from_ymd_opt(
        at.year(),
        u32::from(u8::from(at.month())),
        u32::from(at.day()),
    )?;
    let time: NaiveTime =
        NaiveTime::from_hms_opt(u32::from(at.hour()), u32::from(at.minute()), 0)?;
    let naive: NaiveDateTime = NaiveDateTime::new(date, time);

    let local = tz.from_local_datetime(&naive).earliest().or_else(|| {
        let shifted: NaiveDateTime = naive.checked_add_signed(chrono::Duration::hours(1))?;
        tz.from_local_datetime(&shifted).earliest()
    })?;

    OffsetDateTime::from_unix_timestamp(local.timestamp()).ok()
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is malformed.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns `DomainError::TimeParseError` if the string is malformed.
pub fn parse_time(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, format_description!("[hour]:[minute]")).map_err(|e| {
        DomainError::TimeParseError {
            time_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a time of day as `HH:MM`.
#[must_use]
pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
