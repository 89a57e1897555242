// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Role;
use chrono_tz::Tz;
use std::collections::HashSet;
use time::{Duration, Weekday};

/// Booking rules for one reservation type of an installation.
///
/// Plain immutable data; every check against it lives in the rule evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationTypeRule {
    /// Type identifier, unique within the installation.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Maximum length in duration units. `0` means unlimited.
    pub max_duration: u32,
    /// Maximum number of days bookable ahead. `0` means unlimited.
    pub max_days_ahead: u32,
    /// Weekdays on which this type may not be booked.
    pub forbidden_weekdays: Vec<Weekday>,
    /// Roles allowed to create occupations of this type.
    pub permitted_roles: HashSet<Role>,
}

impl ReservationTypeRule {
    /// Creates an unrestricted reservation type open to the given roles.
    #[must_use]
    pub fn new(id: i64, name: &str, permitted_roles: &[Role]) -> Self {
        Self {
            id,
            name: name.to_string(),
            max_duration: 0,
            max_days_ahead: 0,
            forbidden_weekdays: Vec::new(),
            permitted_roles: permitted_roles.iter().copied().collect(),
        }
    }

    /// Sets the maximum duration in units.
    #[must_use]
    pub const fn with_max_duration(mut self, max_duration: u32) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Sets the maximum number of days bookable ahead.
    #[must_use]
    pub const fn with_max_days_ahead(mut self, max_days_ahead: u32) -> Self {
        self.max_days_ahead = max_days_ahead;
        self
    }

    /// Sets the weekdays on which the type is not bookable.
    #[must_use]
    pub fn with_forbidden_weekdays(mut self, days: &[Weekday]) -> Self {
        self.forbidden_weekdays = days.to_vec();
        self
    }

    /// Returns whether a role may book this type.
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.permitted_roles.contains(&role)
    }

    /// Returns whether the type is closed on a weekday.
    #[must_use]
    pub fn forbids(&self, day: Weekday) -> bool {
        self.forbidden_weekdays.contains(&day)
    }
}

/// Static configuration of one reservation installation.
///
/// `opening_hour < closing_hour` and a sane duration unit are guaranteed by
/// the configuration loader, not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationConfig {
    /// Installation identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Court names, in court-index order.
    pub courts: Vec<String>,
    /// Granularity of the booking grid in minutes.
    pub duration_unit_minutes: u32,
    /// First hour at which an occupation may start.
    pub opening_hour: u8,
    /// Hour by which every occupation must have ended.
    pub closing_hour: u8,
    /// Zone in which dates and start times are wall-clock values.
    pub timezone: Tz,
    /// Bookable reservation types.
    pub reservation_types: Vec<ReservationTypeRule>,
}

impl InstallationConfig {
    /// Number of courts; the valid court range is `1..=court_count()`.
    #[must_use]
    pub fn court_count(&self) -> i32 {
        i32::try_from(self.courts.len()).unwrap_or(i32::MAX)
    }

    /// Looks up a reservation type by identifier.
    #[must_use]
    pub fn reservation_type(&self, type_id: i64) -> Option<&ReservationTypeRule> {
        self.reservation_types.iter().find(|rule| rule.id == type_id)
    }

    /// Length of `duration_units` grid units.
    #[must_use]
    pub fn slot_length(&self, duration_units: i32) -> Duration {
        Duration::minutes(i64::from(duration_units) * i64::from(self.duration_unit_minutes))
    }
}

/// All installations known to the process, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Installations {
    entries: Vec<InstallationConfig>,
}

impl Installations {
    /// Wraps a list of installation configurations.
    #[must_use]
    pub const fn new(entries: Vec<InstallationConfig>) -> Self {
        Self { entries }
    }

    /// Resolves an installation by identifier.
    #[must_use]
    pub fn get(&self, installation_id: i64) -> Option<&InstallationConfig> {
        self.entries.iter().find(|config| config.id == installation_id)
    }

    /// Iterates over all installations.
    pub fn iter(&self) -> impl Iterator<Item = &InstallationConfig> {
        self.entries.iter()
    }

    /// Number of installations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no installation is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
