// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structured rule-violation codes.
//!
//! The engine never produces human text for a rejected occupation. It emits
//! an [`ErrorCode`] plus positional arguments, optionally scoped to a
//! [`Field`], and leaves rendering to the message catalog at the API layer.

use serde::{Deserialize, Serialize};

/// Every reason an occupation can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The referenced installation does not exist.
    NoReservationSystem,
    /// The referenced reservation type does not exist in the installation.
    InvalidReservationType,
    /// A required value is missing.
    NullNotAllowed,
    /// The reservation type may not be booked on this weekday.
    DayOfWeekNotAllowed,
    /// The start hour lies before the opening hour.
    StartHourBeforeOpening,
    /// The start hour lies after the closing hour.
    StartHourAfterClosing,
    /// The start minute is off the installation's time grid.
    StartTimeMinutes,
    /// The occupation starts in the past.
    DateInThePast,
    /// The occupation ends after the closing hour.
    StartTimePlusDuration,
    /// The occupation starts beyond the reservation type's horizon.
    DateTooFarInFuture,
    /// The duration is below one time unit.
    DurationTooSmall,
    /// The duration exceeds the reservation type's maximum.
    DurationTooLong,
    /// The court index is below the first court.
    CourtTooSmall,
    /// The court index is beyond the last court.
    CourtTooBig,
    /// The acting member is not active.
    UserNotActive,
    /// The acting member's role may not book this reservation type.
    UserCannotAddType,
    /// Another occupation already holds the court at that time.
    Occupied,
}

impl ErrorCode {
    /// Returns the wire representation of this code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoReservationSystem => "NO_RESERVATION_SYSTEM",
            Self::InvalidReservationType => "INVALID_RESERVATION_TYPE",
            Self::NullNotAllowed => "NULL_NOT_ALLOWED",
            Self::DayOfWeekNotAllowed => "DAY_OF_WEEK_NOT_ALLOWED",
            Self::StartHourBeforeOpening => "START_HOUR_BEFORE_OPENING",
            Self::StartHourAfterClosing => "START_HOUR_AFTER_CLOSING",
            Self::StartTimeMinutes => "START_TIME_MINUTES",
            Self::DateInThePast => "DATE_IN_THE_PAST",
            Self::StartTimePlusDuration => "START_TIME_PLUS_DURATION",
            Self::DateTooFarInFuture => "DATE_TOO_FAR_IN_FUTURE",
            Self::DurationTooSmall => "DURATION_TOO_SMALL",
            Self::DurationTooLong => "DURATION_TOO_LONG",
            Self::CourtTooSmall => "COURT_TOO_SMALL",
            Self::CourtTooBig => "COURT_TOO_BIG",
            Self::UserNotActive => "USER_NOT_ACTIVE",
            Self::UserCannotAddType => "USER_CANNOT_ADD_TYPE",
            Self::Occupied => "OCCUPIED",
        }
    }

    /// All codes, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::NoReservationSystem,
        Self::InvalidReservationType,
        Self::NullNotAllowed,
        Self::DayOfWeekNotAllowed,
        Self::StartHourBeforeOpening,
        Self::StartHourAfterClosing,
        Self::StartTimeMinutes,
        Self::DateInThePast,
        Self::StartTimePlusDuration,
        Self::DateTooFarInFuture,
        Self::DurationTooSmall,
        Self::DurationTooLong,
        Self::CourtTooSmall,
        Self::CourtTooBig,
        Self::UserNotActive,
        Self::UserCannotAddType,
        Self::Occupied,
    ];
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The occupation field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Text,
    Date,
    Start,
    Duration,
    Court,
    LastCourt,
    Type,
}

impl Field {
    /// Returns the client-facing field tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Start => "start",
            Self::Duration => "duration",
            Self::Court => "court",
            Self::LastCourt => "lastCourt",
            Self::Type => "type",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule violation without a field scope.
///
/// Used for authorization and conflict outcomes, which are always reported
/// alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The violated rule.
    pub code: ErrorCode,
    /// Positional message arguments.
    pub args: Vec<String>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub const fn new(code: ErrorCode, args: Vec<String>) -> Self {
        Self { code, args }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} ({})", self.code, self.args.join(", "))
        }
    }
}

/// A rule violation scoped to one occupation field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field.
    pub field: Field,
    /// The violated rule.
    pub code: ErrorCode,
    /// Positional message arguments.
    pub args: Vec<String>,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub const fn new(field: Field, code: ErrorCode, args: Vec<String>) -> Self {
        Self { field, code, args }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}: {}", self.field, self.code)
        } else {
            write!(f, "{}: {} ({})", self.field, self.code, self.args.join(", "))
        }
    }
}
