// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Each mutating handler parses the actor identity, applies the command to
//! the engine and persists the accepted transition with its audit event.

use courtbook::{Clock, Command, TransitionResult, apply};
use courtbook_audit::Cause;
use courtbook_domain::{
    InstallationConfig, Installations, Member, Occupation, format_date, parse_date,
};
use courtbook_persistence::{PersistTransitionResult, Persistence};
use time::Date;
use tracing::{debug, info};

use crate::auth::authenticate_stub;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    CreateOccupationRequest, DeleteOccupationRequest, DeleteOccupationResponse, InstallationInfo,
    ListInstallationsResponse, ListOccupationsResponse, OccupationInfo, OccupationMutationResponse,
    UpdateOccupationRequest,
};

/// Books a new occupation.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `installations` - All configured installations
/// * `request` - The booking request
/// * `cause` - The cause or reason for this action
/// * `clock` - Source of the current instant
///
/// # Errors
///
/// Returns an error if:
/// - The actor identity cannot be parsed
/// - The date or start time is malformed
/// - The booking is rejected by authorization, validation or the overlap check
/// - The database write fails
pub fn create_occupation(
    persistence: &mut Persistence,
    installations: &Installations,
    request: &CreateOccupationRequest,
    cause: Cause,
    clock: &(impl Clock + ?Sized),
) -> Result<OccupationMutationResponse, ApiError> {
    let member: Member = authenticate_stub(&request.actor)?;
    let occupation: Occupation = request.occupation.to_occupation()?;

    let transition: TransitionResult = apply(
        installations,
        Command::CreateOccupation { occupation },
        &member,
        cause,
        persistence,
        clock.now(),
    )
    .map_err(translate_core_error)?;

    let persisted: PersistTransitionResult = persist(persistence, installations, &transition)?;
    let stored: Occupation = transition.occupation.with_id(persisted.occupation_id);

    info!(
        occupation_id = persisted.occupation_id,
        event_id = persisted.event_id,
        "Occupation created"
    );
    Ok(OccupationMutationResponse {
        event_id: persisted.event_id,
        occupation: OccupationInfo::from(&stored),
        message: format!("Occupation {} created", persisted.occupation_id),
    })
}

/// Replaces a stored occupation.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `installations` - All configured installations
/// * `request` - The update request
/// * `cause` - The cause or reason for this action
/// * `clock` - Source of the current instant
///
/// # Errors
///
/// Returns an error if:
/// - The actor identity cannot be parsed
/// - The date or start time is malformed
/// - The occupation does not exist
/// - The new content is rejected by authorization, validation or the overlap check
/// - The database write fails
pub fn update_occupation(
    persistence: &mut Persistence,
    installations: &Installations,
    request: &UpdateOccupationRequest,
    cause: Cause,
    clock: &(impl Clock + ?Sized),
) -> Result<OccupationMutationResponse, ApiError> {
    let member: Member = authenticate_stub(&request.actor)?;
    let occupation: Occupation = request.occupation.to_occupation()?;

    let transition: TransitionResult = apply(
        installations,
        Command::UpdateOccupation {
            id: request.occupation_id,
            occupation,
        },
        &member,
        cause,
        persistence,
        clock.now(),
    )
    .map_err(translate_core_error)?;

    let persisted: PersistTransitionResult = persist(persistence, installations, &transition)?;

    info!(
        occupation_id = persisted.occupation_id,
        event_id = persisted.event_id,
        "Occupation updated"
    );
    Ok(OccupationMutationResponse {
        event_id: persisted.event_id,
        occupation: OccupationInfo::from(&transition.occupation),
        message: format!("Occupation {} updated", persisted.occupation_id),
    })
}

/// Removes a stored occupation.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `installations` - All configured installations
/// * `request` - The delete request
/// * `cause` - The cause or reason for this action
/// * `clock` - Source of the current instant
///
/// # Errors
///
/// Returns an error if:
/// - The actor identity cannot be parsed
/// - The occupation does not exist
/// - The actor may not remove it
/// - The database write fails
pub fn delete_occupation(
    persistence: &mut Persistence,
    installations: &Installations,
    request: &DeleteOccupationRequest,
    cause: Cause,
    clock: &(impl Clock + ?Sized),
) -> Result<DeleteOccupationResponse, ApiError> {
    let member: Member = authenticate_stub(&request.actor)?;

    let transition: TransitionResult = apply(
        installations,
        Command::DeleteOccupation {
            id: request.occupation_id,
        },
        &member,
        cause,
        persistence,
        clock.now(),
    )
    .map_err(translate_core_error)?;

    let persisted: PersistTransitionResult = persist(persistence, installations, &transition)?;

    info!(
        occupation_id = persisted.occupation_id,
        event_id = persisted.event_id,
        "Occupation deleted"
    );
    Ok(DeleteOccupationResponse {
        event_id: persisted.event_id,
        occupation_id: persisted.occupation_id,
        message: format!("Occupation {} deleted", persisted.occupation_id),
    })
}

/// Lists one installation's occupations on one day.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `installations` - All configured installations
/// * `installation_id` - The installation to list
/// * `date` - The day, as `YYYY-MM-DD`
///
/// # Errors
///
/// Returns an error if the installation is unknown, the date is malformed,
/// or the query fails.
pub fn list_occupations(
    persistence: &mut Persistence,
    installations: &Installations,
    installation_id: i64,
    date: &str,
) -> Result<ListOccupationsResponse, ApiError> {
    let config: &InstallationConfig = find_installation(installations, installation_id)?;
    let date: Date = parse_date(date).map_err(translate_domain_error)?;

    let occupations: Vec<Occupation> = persistence
        .list_occupations(config.id, date)
        .map_err(translate_persistence_error)?;
    debug!(
        installation_id = config.id,
        count = occupations.len(),
        "Listed occupations"
    );

    Ok(ListOccupationsResponse {
        installation_id: config.id,
        date: format_date(date),
        occupations: occupations.iter().map(OccupationInfo::from).collect(),
    })
}

/// Lists every configured installation.
#[must_use]
pub fn list_installations(installations: &Installations) -> ListInstallationsResponse {
    ListInstallationsResponse {
        installations: installations.iter().map(InstallationInfo::from).collect(),
    }
}

fn find_installation(
    installations: &Installations,
    installation_id: i64,
) -> Result<&InstallationConfig, ApiError> {
    installations
        .get(installation_id)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Installation"),
            message: format!("Installation {installation_id} does not exist"),
        })
}

/// Persists an accepted transition using its installation's grid unit.
fn persist(
    persistence: &mut Persistence,
    installations: &Installations,
    transition: &TransitionResult,
) -> Result<PersistTransitionResult, ApiError> {
    let config: &InstallationConfig =
        find_installation(installations, transition.occupation.installation_id)?;
    persistence
        .persist_transition(transition, config.duration_unit_minutes)
        .map_err(translate_persistence_error)
}
