// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

use crate::api::types::HealthResponse;
use crate::api::AppState;

/// Service health
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
        breach_check_enabled: state.service.breach_enabled(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::Value;

    use crate::api::handlers::test_app;
    use crate::breach::tests::FixtureProvider;

    #[actix_web::test]
    async fn health_reports_status_and_breach_mode() {
        let app = test_app!(FixtureProvider::default());
        let req = test::TestRequest::get().uri("/health").to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["breach_check_enabled"], true);
        assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
    }
}
