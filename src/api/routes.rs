// src/api/routes.rs
use actix_web::web;
use super::handlers;
use super::utils::json_config;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Analysis
    cfg.route("/analyze", web::post().to(handlers::analysis::analyze_password));

    // Generator
    cfg.route("/generate", web::post().to(handlers::generator::generate_password));

    // System
    cfg.route("/health", web::get().to(handlers::system::health));
}
