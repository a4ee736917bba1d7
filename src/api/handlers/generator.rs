// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::info;

use crate::api::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::api::AppState;
use crate::models::GenerationPolicy;

/// Generate a secure password
///
/// Draws from the operating system's CSPRNG and guarantees at least one
/// character from every enabled class.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Policy cannot be satisfied", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> impl Responder {
    let request = request.into_inner();
    let defaults = state.service.default_policy();

    let policy = GenerationPolicy {
        length: request.length.unwrap_or(defaults.length),
        include_uppercase: request.upper.unwrap_or(defaults.include_uppercase),
        include_lowercase: request.lower.unwrap_or(defaults.include_lowercase),
        include_numbers: request.numbers.unwrap_or(defaults.include_numbers),
        include_symbols: request.symbols.unwrap_or(defaults.include_symbols),
        exclude_similar: request.exclude_similar.unwrap_or(defaults.exclude_similar),
    };

    match state.service.generate(&policy) {
        Ok(password) => HttpResponse::Ok().json(GenerateResponse { password }),
        Err(e) => {
            info!("Rejected generation policy: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    use crate::api::handlers::test_app;
    use crate::breach::tests::FixtureProvider;

    #[actix_web::test]
    async fn defaults_produce_twelve_mixed_characters() {
        let app = test_app!(FixtureProvider::default());
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({}))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn digits_only_policy_is_honoured() {
        let app = test_app!(FixtureProvider::default());
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({ "length": 20, "upper": false, "lower": false, "symbols": false }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[actix_web::test]
    async fn no_classes_is_a_policy_error() {
        let app = test_app!(FixtureProvider::default());
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({ "upper": false, "lower": false, "numbers": false, "symbols": false }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "At least one character type must be included");
        assert!(body.get("password").is_none());
    }

    #[actix_web::test]
    async fn length_below_class_count_is_a_policy_error() {
        let app = test_app!(FixtureProvider::default());
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({ "length": 2 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
