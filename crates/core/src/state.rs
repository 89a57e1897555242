// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_audit::{AuditEvent, StateSnapshot};
use courtbook_domain::{Occupation, format_date, format_time};

/// The result of a successful command.
///
/// Nothing has been written yet; the caller persists `occupation` and
/// `audit_event` together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The accepted occupation. For deletes, the occupation being removed.
    pub occupation: Occupation,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// Converts an occupation to a snapshot for audit purposes.
#[must_use]
pub fn occupation_snapshot(occupation: &Occupation) -> StateSnapshot {
    StateSnapshot::new(format!(
        "id={},installation={},court={},last_court={},date={},start={},duration={},type={},text={}",
        occupation
            .id
            .map_or_else(|| String::from("new"), |id| id.to_string()),
        occupation.installation_id,
        occupation.court,
        occupation.last_court_or_court(),
        occupation.date.map(format_date).unwrap_or_default(),
        occupation.start.map(format_time).unwrap_or_default(),
        occupation.duration_units,
        occupation.type_id,
        occupation.text.trim()
    ))
}
