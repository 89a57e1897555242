// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, PrimitiveDateTime, Time, Weekday};

/// The role of a club member.
///
/// Reservation types list the roles allowed to book them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Club administration. Exempt from the past-date rule.
    Admin,
    /// Coaching staff.
    Trainer,
    /// Regular registered member.
    Registered,
    /// Guest account.
    Guest,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Trainer => "Trainer",
            Self::Registered => "Registered",
            Self::Guest => "Guest",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "trainer" => Ok(Self::Trainer),
            "registered" => Ok(Self::Registered),
            "guest" => Ok(Self::Guest),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Activation state of a member account.
///
/// Only `Active` members may book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    /// Account created, e-mail not yet confirmed.
    Created,
    /// E-mail confirmed, awaiting activation.
    Verified,
    /// Fully active.
    Active,
    /// Temporarily locked by an administrator.
    Locked,
    /// Removed from the club.
    Removed,
}

impl MemberStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Verified => "Verified",
            Self::Active => "Active",
            Self::Locked => "Locked",
            Self::Removed => "Removed",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "verified" => Ok(Self::Verified),
            "active" => Ok(Self::Active),
            "locked" => Ok(Self::Locked),
            "removed" => Ok(Self::Removed),
            _ => Err(DomainError::InvalidMemberStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The member requesting a booking, as supplied by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Stable member identifier.
    pub id: String,
    /// Name shown in audit records.
    pub display_name: String,
    /// The member's role.
    pub role: Role,
    /// The member's activation state.
    pub status: MemberStatus,
}

impl Member {
    /// Creates a new member record.
    ///
    /// # Arguments
    ///
    /// * `id` - Stable member identifier
    /// * `display_name` - Name shown in audit records
    /// * `role` - The member's role
    /// * `status` - The member's activation state
    #[must_use]
    pub const fn new(id: String, display_name: String, role: Role, status: MemberStatus) -> Self {
        Self {
            id,
            display_name,
            role,
            status,
        }
    }

    /// Returns whether the member may act at all.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, MemberStatus::Active)
    }

    /// Returns whether the member is an administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// A court occupation: either a candidate under validation or a stored booking.
///
/// `date` and `start` are optional because candidates are built from raw
/// request input; a missing value is reported as a field error rather than
/// rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupation {
    /// Persisted identifier. `None` for a candidate that has not been stored.
    pub id: Option<i64>,
    /// The installation this occupation belongs to.
    pub installation_id: i64,
    /// First (1-based) court covered.
    pub court: i32,
    /// Last court covered for multi-court bookings.
    pub last_court: Option<i32>,
    /// Calendar date of the booking.
    pub date: Option<Date>,
    /// Wall-clock start time.
    pub start: Option<Time>,
    /// Length in multiples of the installation's duration unit.
    pub duration_units: i32,
    /// Free-text description.
    pub text: String,
    /// Reservation type reference.
    pub type_id: i64,
}

impl Occupation {
    /// Creates a single-court candidate occupation without an identifier.
    #[must_use]
    pub const fn new(
        installation_id: i64,
        court: i32,
        date: Option<Date>,
        start: Option<Time>,
        duration_units: i32,
        text: String,
        type_id: i64,
    ) -> Self {
        Self {
            id: None,
            installation_id,
            court,
            last_court: None,
            date,
            start,
            duration_units,
            text,
            type_id,
        }
    }

    /// Returns a copy carrying the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy spanning courts `court..=last_court`.
    #[must_use]
    pub fn spanning_to(mut self, last_court: i32) -> Self {
        self.last_court = Some(last_court);
        self
    }

    /// The highest court covered. Equals `court` for single-court bookings.
    #[must_use]
    pub fn last_court_or_court(&self) -> i32 {
        self.last_court.unwrap_or(self.court)
    }

    /// The combined wall-clock start, if both date and start are present.
    #[must_use]
    pub fn starts_at(&self) -> Option<PrimitiveDateTime> {
        match (self.date, self.start) {
            (Some(date), Some(start)) => Some(PrimitiveDateTime::new(date, start)),
            _ => None,
        }
    }
}

/// Parses an English weekday name (case-insensitive, full or three-letter).
///
/// # Errors
///
/// Returns `DomainError::InvalidWeekday` if the name is not recognized.
pub fn parse_weekday(name: &str) -> Result<Weekday, DomainError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(DomainError::InvalidWeekday(name.to_string())),
    }
}

/// Returns the English name of a weekday.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}
