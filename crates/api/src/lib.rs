// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the court booking engine.
//!
//! Turns client requests into engine commands, persists accepted changes
//! and translates every failure into an [`ApiError`] carrying rendered
//! messages.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod config;
mod error;
mod handlers;
mod messages;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{ActorIdentity, authenticate_stub};
pub use config::{
    ConfigError, InstallationEntry, InstallationsFile, ReservationTypeEntry, load_installations,
    parse_installations,
};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error, translate_validation_failure,
};
pub use handlers::{
    create_occupation, delete_occupation, list_installations, list_occupations,
    update_occupation,
};
pub use messages::{render_field_error, render_message, render_violation};
pub use request_response::{
    CreateOccupationRequest, DeleteOccupationRequest, DeleteOccupationResponse, FieldErrorInfo,
    InstallationInfo, ListInstallationsResponse, ListOccupationsResponse, OccupationInfo,
    OccupationInput, OccupationMutationResponse, ReservationTypeInfo, UpdateOccupationRequest,
};
