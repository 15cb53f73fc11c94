use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{
        error::DomainError,
        models::{signup::SignupRequest, user::User},
        repositories::user_repository::UserRepository,
        services::geocoding_service::Geocoder,
    },
    usecase::{get_user_usecase::GetUserUsecase, signup_usecase::SignupUsecase},
};

// Request

/// json for signup request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SignupPayload {
    /// User name
    #[serde(default, deserialize_with = "string_or_absent")]
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    /// User email
    #[serde(default, deserialize_with = "string_or_absent")]
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
    /// User latitude, within Egypt
    #[serde(default, deserialize_with = "number_or_absent")]
    #[schema(example = 30.0444)]
    pub latitude: Option<f64>,
    /// User longitude, within Egypt
    #[serde(default, deserialize_with = "number_or_absent")]
    #[schema(example = 31.2357)]
    pub longitude: Option<f64>,
}

impl From<SignupPayload> for SignupRequest {
    fn from(payload: SignupPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            latitude: payload.latitude,
            longitude: payload.longitude,
        }
    }
}

// Field values of the wrong JSON type are treated as absent, so the
// validator reports them instead of the body being rejected.

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}

fn number_or_absent<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

// Response

/// json for user response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique identifier for the user
    pub id: i32,
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    /// City resolved from the coordinates
    pub city: String,
    /// User account creation timestamp
    pub created_at: DateTime<Utc>,
    /// User account update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let coordinates = user.coordinates();
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            city: user.city().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// json for error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error kind, e.g. `invalid_input` or `not_found`
    pub error: String,
    /// Validation reason for `invalid_input`, e.g. `out_of_bounds`
    pub reason: Option<String>,
    pub message: String,
}

/// Failures a user handler can answer with.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Body was not JSON, or not sent as JSON.
    Body(JsonRejection),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Domain(err) => (domain_status(&err), domain_body(&err)),
            Self::Body(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "invalid_body".to_string(),
                    reason: None,
                    message: rejection.body_text(),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidInput(_)
        | DomainError::GeocodingUnavailable(_)
        | DomainError::CityNotResolved => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::PersistenceFailure(e) => {
            tracing::error!(error = %e, "persistence failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn domain_body(err: &DomainError) -> ErrorResponse {
    let reason = match err {
        DomainError::InvalidInput(reason) => Some(reason.reason().to_string()),
        _ => None,
    };

    ErrorResponse {
        error: err.kind().to_string(),
        reason,
        message: err.to_string(),
    }
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested under "/users" by main router
pub fn create_user_router<
    R: UserRepository + Send + Sync + 'static + Clone,
    G: Geocoder + 'static + Clone,
>(
    signup_service: SignupUsecase<R, G>,
    get_user_service: GetUserUsecase<R>,
) -> Router {
    let state = AppState {
        signup_service: Arc::new(signup_service),
        get_user_service: Arc::new(get_user_service),
    };

    Router::new()
        .route("/signup", post(signup::<R, G>))
        .route("/{id}", get(get_user::<R, G>))
        .with_state(state)
}

pub struct AppState<R: UserRepository, G: Geocoder> {
    pub signup_service: Arc<SignupUsecase<R, G>>,
    pub get_user_service: Arc<GetUserUsecase<R>>,
}

// derive(Clone) would require R: Clone and G: Clone on the Arc'd services
impl<R: UserRepository, G: Geocoder> Clone for AppState<R, G> {
    fn clone(&self) -> Self {
        Self {
            signup_service: Arc::clone(&self.signup_service),
            get_user_service: Arc::clone(&self.get_user_service),
        }
    }
}

// handler function

/// Sign up a new user
#[utoipa::path(
    post,
    path = "/users/signup",
    request_body = SignupPayload,
    responses(
        (status = 201, description = "The user has been successfully created.", body = UserResponse),
        (status = 400, description = "Invalid data or location outside of Egypt.", body = ErrorResponse),
        (status = 500, description = "The user could not be stored.", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn signup<R: UserRepository + Send + Sync, G: Geocoder>(
    State(state): State<AppState<R, G>>,
    payload: Result<Json<SignupPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(payload) = payload?;
    let user = state.signup_service.signup(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Get user profile data
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "The ID of the user")),
    responses(
        (status = 200, description = "Successfully retrieved user data.", body = UserResponse),
        (status = 404, description = "User not found.", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user<R: UserRepository + Send + Sync, G: Geocoder>(
    State(state): State<AppState<R, G>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.get_user_service.get_user_by_id(&id).await?;
    Ok(Json(user.into()))
}
