use axum::{http::Method, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CLIENTS
        // ========================================
        .route("/api/client", get(handlers::a001_client::list))
        .route("/api/client/:id", get(handlers::a001_client::get_by_id))
        // ========================================
        // PRODUCTS
        // ========================================
        .route("/api/product", get(handlers::a002_product::list))
        .route("/api/product/:id", get(handlers::a002_product::get_by_id))
        // ========================================
        // INVOICES
        // ========================================
        .route("/api/invoice", get(handlers::a003_invoice::list))
        .route("/api/invoice/:id", get(handlers::a003_invoice::get_by_id))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
