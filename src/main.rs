mod config;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;
mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::AppConfig,
    domain::{
        models::location::BoundingBox, repositories::user_repository::UserRepository,
        services::geocoding_service::Geocoder,
    },
    infrastructure::{
        logger::init_logger, opencage_geocoder::OpenCageGeocoder, schema::sync_schema,
        user_repository::PostgresUserRepository,
    },
    presentation::{
        doc::{ApiDoc, OPENAPI_JSON_PATH},
        handlers::user_handler::create_user_router,
    },
    usecase::{get_user_usecase::GetUserUsecase, signup_usecase::SignupUsecase},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Arc::new(Database::connect(opt).await?);
    sync_schema(&db).await?;

    let user_repository = PostgresUserRepository::new(db);
    let geocoder = OpenCageGeocoder::new(&config.geocoding)?;
    let signup_usecase =
        SignupUsecase::new(user_repository.clone(), geocoder, BoundingBox::EGYPT);
    let get_user_usecase = GetUserUsecase::new(user_repository);

    let app = build_app(signup_usecase, get_user_usecase);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn build_app<
    R: UserRepository + Send + Sync + 'static + Clone,
    G: Geocoder + 'static + Clone,
>(
    signup_usecase: SignupUsecase<R, G>,
    get_user_usecase: GetUserUsecase<R>,
) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest(
            "/users",
            create_user_router(signup_usecase, get_user_usecase),
        )
        .merge(SwaggerUi::new("/api").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
