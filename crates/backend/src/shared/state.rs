use std::sync::Arc;

use crate::dashboards::d400_regional_sales::DashboardContext;

/// Shared application state handed to every handler via `State`
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardContext>,
}

impl AppState {
    pub fn new(dashboard: DashboardContext) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
