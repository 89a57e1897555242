// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor identity handling.
//!
//! Authentication itself belongs to the external identity provider. Requests
//! arrive with the identity fields it vouched for; this module only turns
//! them into a domain `Member`.

use courtbook_domain::{Member, MemberStatus, Role};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AuthError;

/// Identity fields supplied by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorIdentity {
    /// The member's identifier.
    pub actor_id: String,
    /// The member's display name.
    #[serde(default)]
    pub actor_name: String,
    /// The member's role name (case-insensitive).
    pub actor_role: String,
    /// The member's account status name (case-insensitive).
    pub actor_status: String,
}

/// Parses a supplied identity into a member.
///
/// This performs no credential check.
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the id is blank or the role
/// or status is not recognized.
pub fn authenticate_stub(identity: &ActorIdentity) -> Result<Member, AuthError> {
    let actor_id: &str = identity.actor_id.trim();
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("actor_id must not be empty"),
        });
    }

    let role: Role =
        Role::from_str(identity.actor_role.trim()).map_err(|e| AuthError::AuthenticationFailed {
            reason: e.to_string(),
        })?;
    let status: MemberStatus = MemberStatus::from_str(identity.actor_status.trim()).map_err(|e| {
        AuthError::AuthenticationFailed {
            reason: e.to_string(),
        }
    })?;

    Ok(Member::new(
        actor_id.to_string(),
        identity.actor_name.trim().to_string(),
        role,
        status,
    ))
}
