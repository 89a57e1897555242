// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while building domain values from untyped input.
///
/// Rule violations on a candidate occupation are not `DomainError`s; they are
/// reported as [`crate::FieldError`] and [`crate::Violation`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role name is not recognized.
    InvalidRole(String),
    /// Member status name is not recognized.
    InvalidMemberStatus(String),
    /// Weekday name is not recognized.
    InvalidWeekday(String),
    /// Failed to parse a date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time of day.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(role) => write!(f, "Invalid role: '{role}'"),
            Self::InvalidMemberStatus(status) => {
                write!(f, "Invalid member status: '{status}'")
            }
            Self::InvalidWeekday(day) => write!(f, "Invalid weekday: '{day}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
