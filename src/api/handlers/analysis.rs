// src/api/handlers/analysis.rs

use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use crate::api::types::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use crate::api::AppState;
use crate::core::service::ServiceError;

/// Analyze password strength
///
/// Scores the password from 0 to 4, estimates entropy and crack time,
/// explains weaknesses and reports how often it appears in breach data.
/// Only a five-character hash prefix leaves the server.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Password analysis result", body = AnalyzeResponse),
        (status = 400, description = "Missing, oversized or malformed password", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn analyze_password(
    state: web::Data<AppState>,
    request: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let request = request.into_inner();

    if request.password.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Password is required"));
    }

    match state.service.analyze(&request.password, true).await {
        Ok(result) => {
            info!("📊 Analysis served: score {}", result.score);
            HttpResponse::Ok().json(AnalyzeResponse::from(result))
        }
        Err(e @ ServiceError::PasswordTooLong { .. }) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()))
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to analyze password"))
        }
    }
}
