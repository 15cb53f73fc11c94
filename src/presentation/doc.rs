//! OpenAPI document for the HTTP surface, served through Swagger UI at `/api`.

use utoipa::OpenApi;

use crate::presentation::handlers::user_handler::{ErrorResponse, SignupPayload, UserResponse};

/// Raw document location; Swagger UI loads it from here.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FunApp API",
        description = "API for FunApp User Management",
        version = "1.0"
    ),
    paths(
        crate::presentation::handlers::user_handler::signup,
        crate::presentation::handlers::user_handler::get_user,
    ),
    components(schemas(SignupPayload, UserResponse, ErrorResponse)),
    tags((name = "users", description = "Signup and profile lookup"))
)]
pub struct ApiDoc;
