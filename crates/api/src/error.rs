// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use courtbook::{CoreError, ValidationFailure};
use courtbook_domain::{DomainError, ErrorCode, FieldError, Violation};
use courtbook_persistence::PersistenceError;

use crate::messages::{render_field_error, render_violation};
use crate::request_response::FieldErrorInfo;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The actor identity could not be established.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor may not perform the request, or it names an unknown
    /// installation or reservation type.
    Unauthorized {
        /// The violated rule.
        code: ErrorCode,
        /// A human-readable description.
        message: String,
    },
    /// The occupation violates one or more field rules.
    ValidationFailed {
        /// Every field error, in rule order.
        errors: Vec<FieldErrorInfo>,
    },
    /// The occupation collides with a stored occupation.
    Conflict {
        /// The violated rule.
        code: ErrorCode,
        /// A human-readable description.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The rule code carried by this error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Unauthorized { code, .. } | Self::Conflict { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { code, message } => {
                write!(f, "Unauthorized ({code}): {message}")
            }
            Self::ValidationFailed { errors } => {
                write!(f, "Validation failed with {} error(s)", errors.len())
            }
            Self::Conflict { code, message } => {
                write!(f, "Conflict ({code}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

/// Translates a domain parsing error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidRole(role) => ApiError::InvalidInput {
            field: String::from("actor_role"),
            message: format!("Unknown role '{role}'"),
        },
        DomainError::InvalidMemberStatus(status) => ApiError::InvalidInput {
            field: String::from("actor_status"),
            message: format!("Unknown member status '{status}'"),
        },
        DomainError::InvalidWeekday(day) => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: format!("Unknown weekday '{day}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::TimeParseError { time_string, error } => ApiError::InvalidInput {
            field: String::from("start"),
            message: format!("Failed to parse time '{time_string}': {error}"),
        },
    }
}

/// Translates a rejected validation into an API error with rendered
/// messages.
#[must_use]
pub fn translate_validation_failure(failure: ValidationFailure) -> ApiError {
    match failure {
        ValidationFailure::Authorization(violation) => ApiError::Unauthorized {
            code: violation.code,
            message: render_violation(&violation),
        },
        ValidationFailure::Validation(errors) => ApiError::ValidationFailed {
            errors: errors.iter().map(field_error_info).collect(),
        },
        ValidationFailure::Conflict(violation) => conflict(&violation),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Rejected(failure) => translate_validation_failure(failure),
        CoreError::OccupationNotFound(id) => occupation_not_found(id),
        CoreError::Lookup(msg) => ApiError::Internal {
            message: format!("Failed to read stored occupations: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// A late conflict detected while writing becomes the same conflict a
/// validation would have reported.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Occupied(violation) => conflict(&violation),
        PersistenceError::OccupationNotFound(id) => occupation_not_found(id),
        PersistenceError::EventNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Audit event"),
            message: format!("Audit event {id} does not exist"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

fn conflict(violation: &Violation) -> ApiError {
    ApiError::Conflict {
        code: violation.code,
        message: render_violation(violation),
    }
}

fn occupation_not_found(id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Occupation"),
        message: format!("Occupation {id} does not exist"),
    }
}

fn field_error_info(error: &FieldError) -> FieldErrorInfo {
    FieldErrorInfo {
        field: error.field.as_str().to_string(),
        code: error.code,
        args: error.args.clone(),
        message: render_field_error(error),
    }
}
