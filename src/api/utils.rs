// src/api/utils.rs

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;

use crate::api::types::ErrorResponse;

/// Request bodies are a password or a small policy; anything larger is refused.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error_handler)
}

/// Turns body parse failures into `400 {error}`.
///
/// The message carries only the error position, never the offending value,
/// since that value may be a password.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!(
            "Invalid JSON request body at line {} column {}",
            e.line(),
            e.column()
        ),
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("Request body exceeds {} bytes", limit)
        }
        _ => "Invalid JSON request body".to_string(),
    };

    warn!("⚠️ Rejected malformed request to {}: {}", req.path(), message);

    InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(message))).into()
}
