// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtbook_domain::Occupation;
use std::convert::Infallible;
use time::Date;

/// Read access to stored occupations.
///
/// Implemented by the persistence layer. The engine calls it at most once
/// per validation, after every rule has passed.
pub trait OccupationSource {
    /// The error produced when the store cannot be read.
    type Error: std::fmt::Display;

    /// Returns every stored occupation of an installation on one day.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn occupations_on(
        &mut self,
        installation_id: i64,
        date: Date,
    ) -> Result<Vec<Occupation>, Self::Error>;

    /// Returns one stored occupation, or `None` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn occupation(&mut self, id: i64) -> Result<Option<Occupation>, Self::Error>;
}

/// A plain list of occupations acts as an infallible source.
impl OccupationSource for Vec<Occupation> {
    type Error = Infallible;

    fn occupations_on(
        &mut self,
        installation_id: i64,
        date: Date,
    ) -> Result<Vec<Occupation>, Self::Error> {
        Ok(self
            .iter()
            .filter(|o| o.installation_id == installation_id && o.date == Some(date))
            .cloned()
            .collect())
    }

    fn occupation(&mut self, id: i64) -> Result<Option<Occupation>, Self::Error> {
        Ok(self.iter().find(|o| o.id == Some(id)).cloned())
    }
}
