// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod codes;
mod error;
mod installation;
mod overlap;
mod rules;
mod timing;
mod types;

#[cfg(test)]
mod tests;

pub use codes::{ErrorCode, Field, FieldError, Violation};
pub use error::DomainError;
pub use installation::{InstallationConfig, Installations, ReservationTypeRule};
pub use overlap::{SlotInterval, check_no_overlap, conflicts_with, courts_intersect, find_conflict};
pub use rules::{
    FieldErrors, check_court_lower_bound, check_court_upper_bound, check_date_present,
    check_duration_positive, check_duration_within_type_max, check_fits_before_closing,
    check_horizon, check_last_court, check_member_active, check_not_in_past,
    check_role_permitted, check_start_after_opening, check_start_before_closing,
    check_start_granularity, check_start_present, check_text_present, check_weekday_allowed,
    resolve_installation, resolve_reservation_type,
};
pub use timing::{format_date, format_time, parse_date, parse_time, to_instant};
pub use types::{Member, MemberStatus, Occupation, Role, parse_weekday, weekday_name};
