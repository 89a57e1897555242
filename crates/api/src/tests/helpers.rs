// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActorIdentity, CreateOccupationRequest, OccupationInput, parse_installations,
};
use courtbook::FixedClock;
use courtbook_audit::Cause;
use courtbook_domain::Installations;
use time::macros::datetime;

pub const INSTALLATION_ID: i64 = 1;
pub const MATCH_TYPE_ID: i64 = 10;
pub const TRAINING_TYPE_ID: i64 = 20;
pub const TOMORROW: &str = "2026-10-20";

pub const CONFIG_JSON: &str = r#"{
  "installations": [
    {
      "id": 1,
      "name": "Center Court Club",
      "courts": ["Court 1", "Court 2", "Court 3", "Court 4", "Court 5", "Court 6"],
      "duration_unit_minutes": 60,
      "opening_hour": 8,
      "closing_hour": 22,
      "timezone": "UTC",
      "reservation_types": [
        {
          "id": 10,
          "name": "Match",
          "max_duration": 3,
          "max_days_ahead": 14,
          "permitted_roles": ["Registered", "admin"]
        },
        {
          "id": 20,
          "name": "Training",
          "forbidden_weekdays": ["Sunday"],
          "permitted_roles": ["Trainer"]
        }
      ]
    }
  ]
}"#;

pub fn create_test_installations() -> Installations {
    parse_installations(CONFIG_JSON).unwrap()
}

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(datetime!(2026-10-19 12:00 UTC))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-test"), String::from("API test request"))
}

pub fn create_test_identity(role: &str, status: &str) -> ActorIdentity {
    ActorIdentity {
        actor_id: String::from("m-7"),
        actor_name: String::from("Pat Member"),
        actor_role: role.to_string(),
        actor_status: status.to_string(),
    }
}

pub fn create_test_input(court: i32, start: &str, duration_units: i32) -> OccupationInput {
    OccupationInput {
        installation_id: INSTALLATION_ID,
        court,
        last_court: None,
        date: Some(TOMORROW.to_string()),
        start: Some(start.to_string()),
        duration_units,
        text: String::from("Club match"),
        type_id: MATCH_TYPE_ID,
    }
}

pub fn create_test_request(court: i32, start: &str, duration_units: i32) -> CreateOccupationRequest {
    CreateOccupationRequest {
        actor: create_test_identity("Registered", "Active"),
        occupation: create_test_input(court, start, duration_units),
    }
}
