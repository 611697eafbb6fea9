use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::state::AppState;

/// All API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 REGIONAL SALES DASHBOARD
        // ========================================
        .route(
            "/api/d400/options",
            get(handlers::d400_regional_sales::get_options),
        )
        .route(
            "/api/d400/regional_sales",
            get(handlers::d400_regional_sales::get_default_view)
                .post(handlers::d400_regional_sales::post_view),
        )
        .with_state(state)
}
