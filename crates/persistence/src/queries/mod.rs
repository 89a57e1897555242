// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `occupations` — Occupations by day or id
//! - `audit` — Audit events and per-day timelines

pub mod audit;
pub mod occupations;
