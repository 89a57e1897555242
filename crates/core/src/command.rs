// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_domain::Occupation;

/// A command represents member intent as data only.
///
/// Commands are the only way to request booking changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Book a new occupation. Any id on the occupation is ignored.
    CreateOccupation {
        /// The candidate occupation.
        occupation: Occupation,
    },
    /// Replace a stored occupation.
    UpdateOccupation {
        /// The stored occupation to replace.
        id: i64,
        /// The new values.
        occupation: Occupation,
    },
    /// Remove a stored occupation.
    DeleteOccupation {
        /// The stored occupation to remove.
        id: i64,
    },
}
