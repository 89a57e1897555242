// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Court/time overlap detection between occupations.
//!
//! ## Invariants
//!
//! - Intervals are half-open: `[start, start + duration)`. Touching
//!   occupations do not conflict.
//! - Court ranges are inclusive: `[court, last_court]`. Sharing one court is
//!   enough to conflict.
//! - An occupation never conflicts with a stored record carrying its own id.
//! - The relation is symmetric.

use crate::codes::{ErrorCode, Violation};
use crate::rules::occupied_args;
use crate::types::Occupation;
use time::{Duration, PrimitiveDateTime};

/// A half-open wall-clock interval on one installation's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInterval {
    /// Inclusive start.
    pub start: PrimitiveDateTime,
    /// Exclusive end.
    pub end: PrimitiveDateTime,
}

impl SlotInterval {
    /// Builds the interval an occupation covers.
    ///
    /// Returns `None` if the occupation has no date or start time, or if its
    /// end is not representable.
    #[must_use]
    pub fn of(occupation: &Occupation, duration_unit_minutes: u32) -> Option<Self> {
        let start: PrimitiveDateTime = occupation.starts_at()?;
        let length: Duration = Duration::minutes(
            i64::from(occupation.duration_units) * i64::from(duration_unit_minutes),
        );
        let end: PrimitiveDateTime = start.checked_add(length)?;
        Some(Self { start, end })
    }

    /// Whether two half-open intervals share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Whether the inclusive court ranges of two occupations intersect.
#[must_use]
pub fn courts_intersect(a: &Occupation, b: &Occupation) -> bool {
    a.court <= b.last_court_or_court() && b.court <= a.last_court_or_court()
}

/// Whether `existing` blocks `candidate`.
#[must_use]
pub fn conflicts_with(
    candidate: &Occupation,
    existing: &Occupation,
    duration_unit_minutes: u32,
) -> bool {
    if candidate.id.is_some() && candidate.id == existing.id {
        return false;
    }
    if candidate.installation_id != existing.installation_id || candidate.date != existing.date {
        return false;
    }
    if !courts_intersect(candidate, existing) {
        return false;
    }
    match (
        SlotInterval::of(candidate, duration_unit_minutes),
        SlotInterval::of(existing, duration_unit_minutes),
    ) {
        (Some(a), Some(b)) => a.overlaps(&b),
        _ => false,
    }
}

/// Returns the first existing occupation that blocks `candidate`.
pub fn find_conflict<'a, I>(
    candidate: &Occupation,
    existing: I,
    duration_unit_minutes: u32,
) -> Option<&'a Occupation>
where
    I: IntoIterator<Item = &'a Occupation>,
{
    existing
        .into_iter()
        .find(|other| conflicts_with(candidate, other, duration_unit_minutes))
}

/// Checks `candidate` against a snapshot of stored occupations.
///
/// # Errors
///
/// Returns `OCCUPIED` with the candidate's date, start and court on the
/// first conflict found.
pub fn check_no_overlap(
    candidate: &Occupation,
    existing: &[Occupation],
    duration_unit_minutes: u32,
) -> Result<(), Violation> {
    match find_conflict(candidate, existing, duration_unit_minutes) {
        Some(_) => Err(Violation::new(
            ErrorCode::Occupied,
            occupied_args(candidate),
        )),
        None => Ok(()),
    }
}
