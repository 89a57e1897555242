// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_domain::{ErrorCode, FieldError, Violation};

/// Why a candidate occupation was rejected.
///
/// Exactly one category is reported per validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The member, installation or reservation type does not allow the
    /// booking. Raised immediately; never combined with field errors.
    Authorization(Violation),
    /// One or more field rules failed, in evaluation order.
    Validation(Vec<FieldError>),
    /// Every rule passed but the slot is taken.
    Conflict(Violation),
}

impl ValidationFailure {
    /// The discriminator reported to clients.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Authorization(_) => "authorization",
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
        }
    }

    /// The single code of an authorization or conflict failure.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Authorization(violation) | Self::Conflict(violation) => Some(violation.code),
            Self::Validation(_) => None,
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authorization(violation) => write!(f, "Not authorized: {violation}"),
            Self::Validation(errors) => {
                let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Invalid occupation: {}", rendered.join("; "))
            }
            Self::Conflict(violation) => write!(f, "Conflict: {violation}"),
        }
    }
}

impl std::error::Error for ValidationFailure {}

/// Errors that can occur while validating or applying a booking command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The booking was rejected by the rule set or the overlap check.
    Rejected(ValidationFailure),
    /// The occupation source could not be read.
    Lookup(String),
    /// An update or delete referenced an occupation that does not exist.
    OccupationNotFound(i64),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(failure) => write!(f, "Booking rejected: {failure}"),
            Self::Lookup(msg) => write!(f, "Occupation lookup failed: {msg}"),
            Self::OccupationNotFound(id) => write!(f, "Occupation not found: {id}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ValidationFailure> for CoreError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Rejected(failure)
    }
}
