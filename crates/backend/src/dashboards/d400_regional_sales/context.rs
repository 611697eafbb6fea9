use super::repository::Dataset;
use crate::shared::config::Config;

/// Immutable state every render pass reads from
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub title: String,
    pub dataset: Dataset,
}

impl DashboardContext {
    pub fn new(title: impl Into<String>, dataset: Dataset) -> Self {
        Self {
            title: title.into(),
            dataset,
        }
    }

    /// Context with the built-in dataset and the configured title
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dashboard.title.clone(), Dataset::builtin())
    }
}
