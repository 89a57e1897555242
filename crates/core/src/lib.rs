// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking engine: validates candidate occupations against an installation's
//! rules, detects court/time conflicts, and turns accepted commands into
//! audited transitions.
//!
//! The engine holds no state. Stored occupations are read through an
//! [`OccupationSource`]; writing the result is left to the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod clock;
mod command;
mod error;
mod source;
mod state;
mod validate;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use error::{CoreError, ValidationFailure};
pub use source::OccupationSource;
pub use state::{TransitionResult, occupation_snapshot};
pub use validate::{validate, validate_occupation};
