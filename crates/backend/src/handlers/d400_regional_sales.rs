use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d400_regional_sales::{
    RegionalSalesOptions, RegionalSalesRequest, RegionalSalesView,
};

use crate::dashboards::d400_regional_sales::{service, Selection};
use crate::shared::state::AppState;

/// GET /api/d400/options
pub async fn get_options(State(state): State<AppState>) -> Json<RegionalSalesOptions> {
    let options = service::options(&state.dashboard);
    tracing::info!(
        "D400 Dashboard: Returning {} region options",
        options.regions.len()
    );
    Json(options)
}

/// GET /api/d400/regional_sales (default selection: all regions)
pub async fn get_default_view(State(state): State<AppState>) -> Json<RegionalSalesView> {
    let selection = Selection::all(&state.dashboard.dataset);
    Json(render_logged(&state, &selection))
}

/// POST /api/d400/regional_sales
///
/// Body: `{"regions": ["North", "East"]}`
pub async fn post_view(
    State(state): State<AppState>,
    Json(request): Json<RegionalSalesRequest>,
) -> Result<Json<RegionalSalesView>, (StatusCode, String)> {
    let selection = Selection::from_codes(&request.regions).map_err(|e| {
        tracing::warn!("D400 Dashboard: Rejected selection {:?}: {}", request.regions, e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    Ok(Json(render_logged(&state, &selection)))
}

fn render_logged(state: &AppState, selection: &Selection) -> RegionalSalesView {
    if selection.is_empty() {
        tracing::debug!("D400 Dashboard: Empty selection, rendering placeholders");
    }
    let view = service::render(&state.dashboard, selection);
    tracing::info!(
        "D400 Dashboard: Rendered {} regions, {} records, {} summary rows",
        selection.len(),
        view.records.len(),
        view.summary.len()
    );
    view
}
