// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Installation configuration loading.
//!
//! Installations are described in a JSON document:
//!
//! ```json
//! {
//!   "installations": [
//!     {
//!       "id": 1,
//!       "name": "Center Court Club",
//!       "courts": ["Court 1", "Court 2"],
//!       "duration_unit_minutes": 60,
//!       "opening_hour": 8,
//!       "closing_hour": 22,
//!       "timezone": "Europe/Berlin",
//!       "reservation_types": [
//!         {
//!           "id": 10,
//!           "name": "Match",
//!           "max_duration": 3,
//!           "max_days_ahead": 14,
//!           "forbidden_weekdays": ["Sunday"],
//!           "permitted_roles": ["Registered", "Admin"]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Every entry is checked while it is converted, so the engine never sees a
//! configuration it cannot evaluate.

use chrono_tz::Tz;
use courtbook_domain::{
    InstallationConfig, Installations, ReservationTypeRule, Role, parse_weekday,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use time::Weekday;
use tracing::info;

/// Errors raised while loading the installation configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// The path that was read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Installation ids must be positive.
    #[error("Installation id {0} is not positive")]
    InvalidInstallationId(i64),
    /// Two installations share an id.
    #[error("Installation id {0} is defined more than once")]
    DuplicateInstallation(i64),
    /// An installation has no courts.
    #[error("Installation {0} has no courts")]
    NoCourts(i64),
    /// Opening and closing hours are out of range or out of order.
    #[error(
        "Installation {installation_id} has invalid hours: opening {opening_hour}, closing {closing_hour}"
    )]
    InvalidHours {
        /// The offending installation.
        installation_id: i64,
        /// The configured opening hour.
        opening_hour: u8,
        /// The configured closing hour.
        closing_hour: u8,
    },
    /// The duration unit is not a divisor of 60 within `1..=60`.
    #[error("Installation {installation_id} has invalid duration unit {minutes}")]
    InvalidDurationUnit {
        /// The offending installation.
        installation_id: i64,
        /// The configured unit in minutes.
        minutes: u32,
    },
    /// The timezone is not a known IANA name.
    #[error("Installation {installation_id} has unknown timezone '{timezone}'")]
    UnknownTimezone {
        /// The offending installation.
        installation_id: i64,
        /// The configured timezone name.
        timezone: String,
    },
    /// A forbidden weekday name is not recognized.
    #[error("Installation {installation_id} has invalid weekday '{weekday}'")]
    InvalidWeekday {
        /// The offending installation.
        installation_id: i64,
        /// The configured weekday name.
        weekday: String,
    },
    /// A permitted role name is not recognized.
    #[error("Installation {installation_id} has invalid role '{role}'")]
    InvalidRole {
        /// The offending installation.
        installation_id: i64,
        /// The configured role name.
        role: String,
    },
    /// Two reservation types of one installation share an id.
    #[error("Installation {installation_id} defines reservation type {type_id} more than once")]
    DuplicateReservationType {
        /// The offending installation.
        installation_id: i64,
        /// The repeated type id.
        type_id: i64,
    },
}

/// The configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationsFile {
    /// All installations.
    pub installations: Vec<InstallationEntry>,
}

/// One installation as written in the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationEntry {
    /// The installation id.
    pub id: i64,
    /// The installation name.
    pub name: String,
    /// Court display names; courts are numbered from 1 in this order.
    pub courts: Vec<String>,
    /// Length of one booking unit in minutes.
    pub duration_unit_minutes: u32,
    /// First hour a booking may start.
    pub opening_hour: u8,
    /// Hour by which bookings must end.
    pub closing_hour: u8,
    /// IANA timezone name.
    pub timezone: String,
    /// Reservation types offered by this installation.
    #[serde(default)]
    pub reservation_types: Vec<ReservationTypeEntry>,
}

/// One reservation type as written in the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationTypeEntry {
    /// The type id.
    pub id: i64,
    /// The type name.
    pub name: String,
    /// Maximum duration in units; `0` means unlimited.
    #[serde(default)]
    pub max_duration: u32,
    /// Booking horizon in days; `0` means unlimited.
    #[serde(default)]
    pub max_days_ahead: u32,
    /// Weekday names on which this type cannot be booked.
    #[serde(default)]
    pub forbidden_weekdays: Vec<String>,
    /// Role names allowed to book this type.
    #[serde(default)]
    pub permitted_roles: Vec<String>,
}

/// Parses and checks a configuration document.
///
/// # Errors
///
/// Returns an error if the document is malformed or any installation is
/// invalid.
pub fn parse_installations(json: &str) -> Result<Installations, ConfigError> {
    let file: InstallationsFile = serde_json::from_str(json)?;

    let mut seen: HashSet<i64> = HashSet::new();
    let mut entries: Vec<InstallationConfig> = Vec::with_capacity(file.installations.len());
    for entry in file.installations {
        if !seen.insert(entry.id) {
            return Err(ConfigError::DuplicateInstallation(entry.id));
        }
        entries.push(entry.into_config()?);
    }

    Ok(Installations::new(entries))
}

/// Reads, parses and checks a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
pub fn load_installations(path: &Path) -> Result<Installations, ConfigError> {
    let json: String = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let installations: Installations = parse_installations(&json)?;
    info!(
        path = %path.display(),
        installations = installations.len(),
        "Loaded installation configuration"
    );
    Ok(installations)
}

impl InstallationEntry {
    /// Converts this entry into a checked domain configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found with this entry.
    pub fn into_config(self) -> Result<InstallationConfig, ConfigError> {
        let installation_id: i64 = self.id;
        if installation_id <= 0 {
            return Err(ConfigError::InvalidInstallationId(installation_id));
        }
        if self.courts.is_empty() {
            return Err(ConfigError::NoCourts(installation_id));
        }
        if self.opening_hour >= self.closing_hour || self.closing_hour > 23 {
            return Err(ConfigError::InvalidHours {
                installation_id,
                opening_hour: self.opening_hour,
                closing_hour: self.closing_hour,
            });
        }
        let minutes: u32 = self.duration_unit_minutes;
        if minutes == 0 || minutes > 60 || 60 % minutes != 0 {
            return Err(ConfigError::InvalidDurationUnit {
                installation_id,
                minutes,
            });
        }
        let timezone: Tz =
            Tz::from_str(&self.timezone).map_err(|_| ConfigError::UnknownTimezone {
                installation_id,
                timezone: self.timezone.clone(),
            })?;

        let mut type_ids: HashSet<i64> = HashSet::new();
        let mut reservation_types: Vec<ReservationTypeRule> =
            Vec::with_capacity(self.reservation_types.len());
        for entry in self.reservation_types {
            if !type_ids.insert(entry.id) {
                return Err(ConfigError::DuplicateReservationType {
                    installation_id,
                    type_id: entry.id,
                });
            }
            reservation_types.push(entry.into_rule(installation_id)?);
        }

        Ok(InstallationConfig {
            id: installation_id,
            name: self.name,
            courts: self.courts,
            duration_unit_minutes: minutes,
            opening_hour: self.opening_hour,
            closing_hour: self.closing_hour,
            timezone,
            reservation_types,
        })
    }
}

impl ReservationTypeEntry {
    fn into_rule(self, installation_id: i64) -> Result<ReservationTypeRule, ConfigError> {
        let roles: Vec<Role> = self
            .permitted_roles
            .iter()
            .map(|name| {
                Role::from_str(name.trim()).map_err(|_| ConfigError::InvalidRole {
                    installation_id,
                    role: name.clone(),
                })
            })
            .collect::<Result<_, _>>()?;
        let weekdays: Vec<Weekday> = self
            .forbidden_weekdays
            .iter()
            .map(|name| {
                parse_weekday(name).map_err(|_| ConfigError::InvalidWeekday {
                    installation_id,
                    weekday: name.clone(),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(ReservationTypeRule::new(self.id, &self.name, &roles)
            .with_max_duration(self.max_duration)
            .with_max_days_ahead(self.max_days_ahead)
            .with_forbidden_weekdays(&weekdays))
    }
}
