// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ErrorCode, Field, FieldError, Violation, parse_date, parse_time};

#[test]
fn test_invalid_role_display() {
    let err: DomainError = DomainError::InvalidRole(String::from("Boss"));

    assert_eq!(err.to_string(), "Invalid role: 'Boss'");
}

#[test]
fn test_date_parse_error_names_input() {
    let err: DomainError = parse_date("2026-13-01").unwrap_err();

    assert!(matches!(err, DomainError::DateParseError { .. }));
    assert!(err.to_string().contains("2026-13-01"));
}

#[test]
fn test_time_parse_error_names_input() {
    let err: DomainError = parse_time("25:00").unwrap_err();

    assert!(matches!(err, DomainError::TimeParseError { .. }));
    assert!(err.to_string().contains("25:00"));
}

#[test]
fn test_violation_display_includes_arguments() {
    let violation: Violation = Violation::new(
        ErrorCode::Occupied,
        vec![String::from("2026-10-20"), String::from("10:00")],
    );

    assert_eq!(violation.to_string(), "OCCUPIED (2026-10-20, 10:00)");
}

#[test]
fn test_field_error_display() {
    let error: FieldError = FieldError::new(Field::LastCourt, ErrorCode::CourtTooBig, vec![]);

    assert_eq!(error.to_string(), "lastCourt: COURT_TOO_BIG");
}
