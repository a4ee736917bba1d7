// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::core::PasswordService;

pub mod handlers;
pub mod routes;
pub mod types;
pub mod utils;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::analysis::analyze_password,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::system::health,
    ),
    components(
        schemas(
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalyzeResponse,
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::HealthResponse,
            crate::breach::BreachStatus,
            crate::strength::classify::CharClassReport,
            crate::strength::time::CrackTimes,
            crate::strength::matching::MatchKind,
        )
    ),
    tags(
        (name = "Analysis", description = "Password strength and breach exposure"),
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "PassGuard API",
        version = "0.1.0",
        description = "Password strength analysis, k-anonymity breach lookup and secure generation",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Shared by every worker.
pub struct AppState {
    pub service: Arc<PasswordService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: Arc<PasswordService>) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}

pub async fn start_server(service: Arc<PasswordService>, config: &Config) -> std::io::Result<()> {
    let (address, port) = config.bind_address();
    log::info!("🚀 Starting PassGuard API server on {}:{}", address, port);

    let state = web::Data::new(AppState::new(service));

    HttpServer::new(move || {
        // The browser UI may be served from anywhere
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}
