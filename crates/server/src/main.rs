// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use clap::Parser;
use courtbook::{Clock, SystemClock};
use courtbook_api::{
    ApiError, CreateOccupationRequest, DeleteOccupationRequest, DeleteOccupationResponse,
    FieldErrorInfo, ListInstallationsResponse, ListOccupationsResponse,
    OccupationMutationResponse, UpdateOccupationRequest, create_occupation, delete_occupation,
    list_installations, list_occupations, load_installations, update_occupation,
};
use courtbook_audit::Cause;
use courtbook_domain::{ErrorCode, Installations};
use courtbook_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Court booking server - HTTP front end for the occupation engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Path to the installation configuration (JSON)
    #[arg(short, long)]
    installations: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex; the configuration is
/// read-only after startup.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for occupations and audit events.
    persistence: Arc<Mutex<Persistence>>,
    /// All configured installations.
    installations: Arc<Installations>,
    /// Source of the current instant.
    clock: Arc<dyn Clock + Send + Sync>,
}

/// Request body for mutating endpoints: the API request plus the cause
/// recorded in the audit trail.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct WithCause<T> {
    /// The API request.
    #[serde(flatten)]
    request: T,
    /// Identifier of the client request, e.g. a correlation id.
    #[serde(default = "default_cause_id")]
    cause_id: String,
    /// Why the change is made.
    #[serde(default)]
    cause_description: String,
}

fn default_cause_id() -> String {
    String::from("http")
}

impl<T> WithCause<T> {
    fn into_parts(self) -> (T, Cause) {
        (self.request, Cause::new(self.cause_id, self.cause_description))
    }
}

/// Query parameters for GET `/occupations`.
#[derive(Debug, Clone, Deserialize)]
struct ListOccupationsQuery {
    /// The installation to list.
    installation_id: i64,
    /// The day, as `YYYY-MM-DD`.
    date: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Failure category.
    error: String,
    /// The violated rule, for authorization failures and conflicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
    /// Human-readable description.
    message: String,
    /// Every field error of a validation failure.
    field_errors: Vec<FieldErrorInfo>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The response body.
    body: ErrorResponse,
}

impl HttpError {
    fn new(status: StatusCode, error: &str, code: Option<ErrorCode>, message: String) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.to_string(),
                code,
                message,
                field_errors: Vec::new(),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        match err {
            ApiError::AuthenticationFailed { .. } => {
                Self::new(StatusCode::UNAUTHORIZED, "authentication", None, message)
            }
            ApiError::Unauthorized {
                code: code @ (ErrorCode::NoReservationSystem | ErrorCode::InvalidReservationType),
                message,
            } => Self::new(StatusCode::NOT_FOUND, "authorization", Some(code), message),
            ApiError::Unauthorized { code, message } => {
                Self::new(StatusCode::FORBIDDEN, "authorization", Some(code), message)
            }
            ApiError::ValidationFailed { errors } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                body: ErrorResponse {
                    error: String::from("validation"),
                    code: None,
                    message,
                    field_errors: errors,
                },
            },
            ApiError::Conflict { code, message } => {
                Self::new(StatusCode::CONFLICT, "conflict", Some(code), message)
            }
            ApiError::InvalidInput { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "invalid_input", None, message)
            }
            ApiError::ResourceNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "not_found", None, message)
            }
            ApiError::Internal { .. } => {
                error!(error = %message, "Internal error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", None, message)
            }
        }
    }
}

/// Handler for GET `/installations` endpoint.
#[allow(clippy::unused_async)]
async fn handle_list_installations(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListInstallationsResponse> {
    Json(list_installations(&app_state.installations))
}

/// Handler for GET `/occupations` endpoint.
///
/// Lists one installation's occupations on one day.
async fn handle_list_occupations(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListOccupationsQuery>,
) -> Result<Json<ListOccupationsResponse>, HttpError> {
    info!(
        installation_id = query.installation_id,
        date = %query.date,
        "Handling list_occupations request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ListOccupationsResponse = list_occupations(
        &mut persistence,
        &app_state.installations,
        query.installation_id,
        &query.date,
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/occupations` endpoint.
///
/// Books a new occupation.
async fn handle_create_occupation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WithCause<CreateOccupationRequest>>,
) -> Result<(StatusCode, Json<OccupationMutationResponse>), HttpError> {
    info!(
        actor_id = %req.request.actor.actor_id,
        installation_id = req.request.occupation.installation_id,
        "Handling create_occupation request"
    );
    let (request, cause) = req.into_parts();

    let mut persistence = app_state.persistence.lock().await;
    let response: OccupationMutationResponse = create_occupation(
        &mut persistence,
        &app_state.installations,
        &request,
        cause,
        app_state.clock.as_ref(),
    )
    .inspect_err(|e| warn!(error = %e, "Occupation create rejected"))?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/occupations/{id}` endpoint.
///
/// Replaces a stored occupation. The path id wins over any id in the body.
async fn handle_update_occupation(
    AxumState(app_state): AxumState<AppState>,
    Path(occupation_id): Path<i64>,
    Json(req): Json<WithCause<UpdateOccupationRequest>>,
) -> Result<Json<OccupationMutationResponse>, HttpError> {
    info!(
        actor_id = %req.request.actor.actor_id,
        occupation_id,
        "Handling update_occupation request"
    );
    let (mut request, cause) = req.into_parts();
    request.occupation_id = occupation_id;

    let mut persistence = app_state.persistence.lock().await;
    let response: OccupationMutationResponse = update_occupation(
        &mut persistence,
        &app_state.installations,
        &request,
        cause,
        app_state.clock.as_ref(),
    )
    .inspect_err(|e| warn!(error = %e, "Occupation update rejected"))?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/occupations/{id}` endpoint.
async fn handle_delete_occupation(
    AxumState(app_state): AxumState<AppState>,
    Path(occupation_id): Path<i64>,
    Json(req): Json<WithCause<DeleteOccupationRequest>>,
) -> Result<Json<DeleteOccupationResponse>, HttpError> {
    info!(
        actor_id = %req.request.actor.actor_id,
        occupation_id,
        "Handling delete_occupation request"
    );
    let (mut request, cause) = req.into_parts();
    request.occupation_id = occupation_id;

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteOccupationResponse = delete_occupation(
        &mut persistence,
        &app_state.installations,
        &request,
        cause,
        app_state.clock.as_ref(),
    )
    .inspect_err(|e| warn!(error = %e, "Occupation delete rejected"))?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/installations", get(handle_list_installations))
        .route(
            "/occupations",
            get(handle_list_occupations).post(handle_create_occupation),
        )
        .route(
            "/occupations/{id}",
            put(handle_update_occupation).delete(handle_delete_occupation),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing court booking server");

    let installations: Installations = load_installations(&args.installations)?;

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        installations: Arc::new(installations),
        clock: Arc::new(SystemClock),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use courtbook::FixedClock;
    use courtbook_api::parse_installations;
    use serde_json::{Value, json};
    use time::macros::datetime;
    use tower::ServiceExt;

    const CONFIG_JSON: &str = r#"{
      "installations": [
        {
          "id": 1,
          "name": "Center Court Club",
          "courts": ["1", "2", "3", "4", "5", "6"],
          "duration_unit_minutes": 60,
          "opening_hour": 8,
          "closing_hour": 22,
          "timezone": "Europe/Berlin",
          "reservation_types": [
            { "id": 10, "name": "Match", "max_duration": 3, "permitted_roles": ["Registered", "Admin"] }
          ]
        }
      ]
    }"#;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            installations: Arc::new(parse_installations(CONFIG_JSON).unwrap()),
            clock: Arc::new(FixedClock::new(datetime!(2026-10-19 12:00 UTC))),
        }
    }

    fn create_test_body(court: i32, start: &str, duration_units: i32) -> Value {
        json!({
            "actor_id": "m-1",
            "actor_name": "Sam",
            "actor_role": "Registered",
            "actor_status": "Active",
            "cause_id": "req-1",
            "cause_description": "Booking from test",
            "occupation": {
                "installation_id": 1,
                "court": court,
                "date": "2026-10-20",
                "start": start,
                "duration_units": duration_units,
                "text": "Doubles",
                "type_id": 10
            }
        })
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&Value>,
    ) -> (HttpStatusCode, Value) {
        let request_body: Body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(request_body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status: HttpStatusCode = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_list_installations() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(&app, "GET", "/installations", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["installations"][0]["name"], "Center Court Club");
        assert_eq!(body["installations"][0]["timezone"], "Europe/Berlin");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) =
            send(&app, "POST", "/occupations", Some(&create_test_body(1, "10:00", 2))).await;
        assert_eq!(status, HttpStatusCode::CREATED);
        assert!(body["event_id"].as_i64().unwrap() > 0);

        let (status, body) = send(
            &app,
            "GET",
            "/occupations?installation_id=1&date=2026-10-20",
            None,
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["occupations"].as_array().unwrap().len(), 1);
        assert_eq!(body["occupations"][0]["start"], "10:00");
    }

    #[tokio::test]
    async fn test_overlap_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        send(&app, "POST", "/occupations", Some(&create_test_body(1, "10:00", 3))).await;

        let (status, body) =
            send(&app, "POST", "/occupations", Some(&create_test_body(1, "11:00", 2))).await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");
        assert_eq!(body["code"], "OCCUPIED");
    }

    #[tokio::test]
    async fn test_validation_failure_lists_field_errors() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) =
            send(&app, "POST", "/occupations", Some(&create_test_body(7, "21:30", 5))).await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation");
        let codes: Vec<&str> = body["field_errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["code"].as_str().unwrap())
            .collect();
        assert!(codes.contains(&"START_TIME_MINUTES"));
        assert!(codes.contains(&"DURATION_TOO_LONG"));
        assert!(codes.contains(&"COURT_TOO_BIG"));
    }

    #[tokio::test]
    async fn test_inactive_member_is_forbidden() {
        let app: Router = build_router(create_test_app_state());
        let mut body: Value = create_test_body(1, "10:00", 1);
        body["actor_status"] = json!("Locked");

        let (status, body) = send(&app, "POST", "/occupations", Some(&body)).await;

        assert_eq!(status, HttpStatusCode::FORBIDDEN);
        assert_eq!(body["code"], "USER_NOT_ACTIVE");
        assert!(body["field_errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_reservation_type_is_not_found() {
        let app: Router = build_router(create_test_app_state());
        let mut body: Value = create_test_body(1, "10:00", 1);
        body["occupation"]["type_id"] = json!(99);

        let (status, body) = send(&app, "POST", "/occupations", Some(&body)).await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(body["code"], "INVALID_RESERVATION_TYPE");
    }

    #[tokio::test]
    async fn test_malformed_time_is_bad_request() {
        let app: Router = build_router(create_test_app_state());
        let mut body: Value = create_test_body(1, "10:00", 1);
        body["occupation"]["start"] = json!("ten o'clock");

        let (status, body) = send(&app, "POST", "/occupations", Some(&body)).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_unknown_role_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());
        let mut body: Value = create_test_body(1, "10:00", 1);
        body["actor_role"] = json!("Captain");

        let (status, _) = send(&app, "POST", "/occupations", Some(&body)).await;

        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app: Router = build_router(create_test_app_state());
        let (_, created) =
            send(&app, "POST", "/occupations", Some(&create_test_body(2, "10:00", 1))).await;
        let id: i64 = created["occupation"]["occupation_id"].as_i64().unwrap();
        let uri: String = format!("/occupations/{id}");

        let (status, updated) =
            send(&app, "PUT", &uri, Some(&create_test_body(2, "10:00", 3))).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(updated["occupation"]["duration_units"], 3);

        let actor: Value = json!({
            "actor_id": "m-1",
            "actor_role": "Registered",
            "actor_status": "Active"
        });
        let (status, deleted) = send(&app, "DELETE", &uri, Some(&actor)).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(deleted["occupation_id"], id);

        let (status, _) = send(&app, "DELETE", &uri, Some(&actor)).await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_for_unknown_installation() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(
            &app,
            "GET",
            "/occupations?installation_id=5&date=2026-10-20",
            None,
        )
        .await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}
