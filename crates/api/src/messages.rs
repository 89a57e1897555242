// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! English message catalog for rule violations.
//!
//! Messages are rendered from the code and its positional arguments. A
//! missing argument renders as `?` rather than failing.

use courtbook_domain::{ErrorCode, FieldError, Violation};

/// Renders the message for a code and its arguments.
#[must_use]
pub fn render_message(code: ErrorCode, args: &[String]) -> String {
    let arg = |index: usize| argument(args, index);

    match code {
        ErrorCode::NoReservationSystem => {
            format!("No reservation system exists with id {}.", arg(0))
        }
        ErrorCode::InvalidReservationType => {
            format!("Reservation type {} does not exist.", arg(0))
        }
        ErrorCode::NullNotAllowed => String::from("This field is required."),
        ErrorCode::DayOfWeekNotAllowed => {
            format!("This reservation type cannot be booked on {}.", arg(0))
        }
        ErrorCode::StartHourBeforeOpening => {
            format!("Bookings cannot start before {}:00.", arg(0))
        }
        ErrorCode::StartHourAfterClosing => {
            format!("Bookings cannot start after {}:00.", arg(0))
        }
        ErrorCode::StartTimeMinutes => format!(
            "The start time must be on the hour or a multiple of {} minutes past it.",
            arg(0)
        ),
        ErrorCode::DateInThePast => String::from("The start lies in the past."),
        ErrorCode::StartTimePlusDuration => {
            format!("The booking must end by {}:00.", arg(0))
        }
        ErrorCode::DateTooFarInFuture => format!(
            "This reservation type can be booked at most {} days ahead.",
            arg(0)
        ),
        ErrorCode::DurationTooSmall => String::from("The duration must be at least one unit."),
        ErrorCode::DurationTooLong => {
            format!("The duration cannot exceed {} units.", arg(0))
        }
        ErrorCode::CourtTooSmall => format!("The court must be at least {}.", arg(0)),
        ErrorCode::CourtTooBig => format!("The court must be at most {}.", arg(0)),
        ErrorCode::UserNotActive => {
            format!("Only active members may book (account is {}).", arg(0))
        }
        ErrorCode::UserCannotAddType => {
            format!("You are not allowed to book reservations of type {}.", arg(0))
        }
        ErrorCode::Occupied => format!(
            "Court {} is already occupied on {} at {}.",
            arg(2),
            arg(0),
            arg(1)
        ),
    }
}

fn argument(args: &[String], index: usize) -> &str {
    args.get(index).map_or("?", String::as_str)
}

/// Renders a violation.
#[must_use]
pub fn render_violation(violation: &Violation) -> String {
    render_message(violation.code, &violation.args)
}

/// Renders a field error.
#[must_use]
pub fn render_field_error(error: &FieldError) -> String {
    render_message(error.code, &error.args)
}
