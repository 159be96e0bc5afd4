use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // U501 WHO'S FIRST SCENARIOS
        // ========================================
        // Legacy позиционный slug
        .route(
            "/api/whos-first/:slug",
            get(handlers::u501_whos_first::get_by_slug),
        )
        // Структурированный путь: один сегмент на поле
        .route(
            "/api/scenarios/:damage_type/:variation/:time_factor/:property_type",
            get(handlers::u501_whos_first::get_by_path),
        )
        .route(
            "/api/scenarios/:damage_type/:variation/:time_factor/:property_type/:location",
            get(handlers::u501_whos_first::get_by_path_with_location),
        )
        .route(
            "/api/catalog/whos-first",
            get(handlers::u501_whos_first::get_catalog),
        )
        .route(
            "/api/sitemap/whos-first",
            get(handlers::u501_whos_first::get_sitemap),
        )
}
