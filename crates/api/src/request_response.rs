// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use courtbook_domain::{
    ErrorCode, InstallationConfig, Occupation, ReservationTypeRule, format_date, format_time,
    parse_date, parse_time, weekday_name,
};
use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::auth::ActorIdentity;
use crate::error::{ApiError, translate_domain_error};

/// An occupation as sent by clients.
///
/// Dates are `YYYY-MM-DD` and start times `HH:MM`. Both may be omitted;
/// the engine then reports them as missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationInput {
    /// The installation to book.
    pub installation_id: i64,
    /// First court, 1-based.
    pub court: i32,
    /// Last court of a multi-court booking.
    #[serde(default)]
    pub last_court: Option<i32>,
    /// Calendar date.
    #[serde(default)]
    pub date: Option<String>,
    /// Start time of day.
    #[serde(default)]
    pub start: Option<String>,
    /// Length in booking units.
    pub duration_units: i32,
    /// Free text shown on the booking sheet.
    #[serde(default)]
    pub text: String,
    /// The reservation type.
    pub type_id: i64,
}

impl OccupationInput {
    /// Converts this input into a domain occupation without an id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the date or start time is
    /// malformed.
    pub fn to_occupation(&self) -> Result<Occupation, ApiError> {
        let date: Option<Date> = self
            .date
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(translate_domain_error)?;
        let start: Option<Time> = self
            .start
            .as_deref()
            .map(parse_time)
            .transpose()
            .map_err(translate_domain_error)?;

        let mut occupation: Occupation = Occupation::new(
            self.installation_id,
            self.court,
            date,
            start,
            self.duration_units,
            self.text.clone(),
            self.type_id,
        );
        occupation.last_court = self.last_court;
        Ok(occupation)
    }
}

/// API request to book a new occupation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOccupationRequest {
    /// The requesting member.
    #[serde(flatten)]
    pub actor: ActorIdentity,
    /// The occupation to book.
    pub occupation: OccupationInput,
}

/// API request to replace a stored occupation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOccupationRequest {
    /// The requesting member.
    #[serde(flatten)]
    pub actor: ActorIdentity,
    /// The occupation to replace.
    #[serde(default)]
    pub occupation_id: i64,
    /// The new content.
    pub occupation: OccupationInput,
}

/// API request to remove a stored occupation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOccupationRequest {
    /// The requesting member.
    #[serde(flatten)]
    pub actor: ActorIdentity,
    /// The occupation to remove.
    #[serde(default)]
    pub occupation_id: i64,
}

/// A stored occupation as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationInfo {
    /// The occupation id.
    pub occupation_id: Option<i64>,
    /// The installation.
    pub installation_id: i64,
    /// First court.
    pub court: i32,
    /// Last court.
    pub last_court: i32,
    /// Calendar date.
    pub date: Option<String>,
    /// Start time of day.
    pub start: Option<String>,
    /// Length in booking units.
    pub duration_units: i32,
    /// Free text.
    pub text: String,
    /// The reservation type.
    pub type_id: i64,
}

impl From<&Occupation> for OccupationInfo {
    fn from(occupation: &Occupation) -> Self {
        Self {
            occupation_id: occupation.id,
            installation_id: occupation.installation_id,
            court: occupation.court,
            last_court: occupation.last_court_or_court(),
            date: occupation.date.map(format_date),
            start: occupation.start.map(format_time),
            duration_units: occupation.duration_units,
            text: occupation.text.clone(),
            type_id: occupation.type_id,
        }
    }
}

/// API response for a successful create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationMutationResponse {
    /// The audit event recorded for this change.
    pub event_id: i64,
    /// The stored occupation.
    pub occupation: OccupationInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOccupationResponse {
    /// The audit event recorded for this change.
    pub event_id: i64,
    /// The removed occupation's id.
    pub occupation_id: i64,
    /// A success message.
    pub message: String,
}

/// API response listing one installation's occupations on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOccupationsResponse {
    /// The installation.
    pub installation_id: i64,
    /// The day.
    pub date: String,
    /// Occupations ordered by start time, then court.
    pub occupations: Vec<OccupationInfo>,
}

/// A reservation type as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationTypeInfo {
    /// The type id.
    pub type_id: i64,
    /// The type name.
    pub name: String,
    /// Maximum duration in units, `0` for unlimited.
    pub max_duration: u32,
    /// Booking horizon in days, `0` for unlimited.
    pub max_days_ahead: u32,
    /// Weekdays on which the type cannot be booked.
    pub forbidden_weekdays: Vec<String>,
    /// Roles allowed to book the type, sorted.
    pub permitted_roles: Vec<String>,
}

impl From<&ReservationTypeRule> for ReservationTypeInfo {
    fn from(rule: &ReservationTypeRule) -> Self {
        let mut permitted_roles: Vec<String> = rule
            .permitted_roles
            .iter()
            .map(|role| role.as_str().to_string())
            .collect();
        permitted_roles.sort();
        Self {
            type_id: rule.id,
            name: rule.name.clone(),
            max_duration: rule.max_duration,
            max_days_ahead: rule.max_days_ahead,
            forbidden_weekdays: rule
                .forbidden_weekdays
                .iter()
                .map(|day| weekday_name(*day).to_string())
                .collect(),
            permitted_roles,
        }
    }
}

/// An installation as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationInfo {
    /// The installation id.
    pub installation_id: i64,
    /// The installation name.
    pub name: String,
    /// Court names, numbered from 1.
    pub courts: Vec<String>,
    /// Booking unit in minutes.
    pub duration_unit_minutes: u32,
    /// First bookable hour.
    pub opening_hour: u8,
    /// Hour by which bookings must end.
    pub closing_hour: u8,
    /// IANA timezone name.
    pub timezone: String,
    /// Offered reservation types.
    pub reservation_types: Vec<ReservationTypeInfo>,
}

impl From<&InstallationConfig> for InstallationInfo {
    fn from(config: &InstallationConfig) -> Self {
        Self {
            installation_id: config.id,
            name: config.name.clone(),
            courts: config.courts.clone(),
            duration_unit_minutes: config.duration_unit_minutes,
            opening_hour: config.opening_hour,
            closing_hour: config.closing_hour,
            timezone: config.timezone.name().to_string(),
            reservation_types: config
                .reservation_types
                .iter()
                .map(ReservationTypeInfo::from)
                .collect(),
        }
    }
}

/// API response listing every installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInstallationsResponse {
    /// All installations in configuration order.
    pub installations: Vec<InstallationInfo>,
}

/// One field error with its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorInfo {
    /// The field tag, e.g. `start` or `lastCourt`.
    pub field: String,
    /// The violated rule.
    pub code: ErrorCode,
    /// Positional message arguments.
    pub args: Vec<String>,
    /// The rendered English message.
    pub message: String,
}
