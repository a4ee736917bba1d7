// src/api/handlers/mod.rs
pub mod analysis;
pub mod generator;
pub mod system;

/// Builds a test service around a `PasswordService` backed by `$provider`.
#[cfg(test)]
macro_rules! test_app {
    ($provider:expr) => {{
        let service = crate::core::service::tests::service_with(std::sync::Arc::new($provider));
        let state = actix_web::web::Data::new(crate::api::AppState::new(std::sync::Arc::new(service)));
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(state)
                .configure(crate::api::routes::configure_routes),
        )
        .await
    }};
}

#[cfg(test)]
pub(crate) use test_app;
