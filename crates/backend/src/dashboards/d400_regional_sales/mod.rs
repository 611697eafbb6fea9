//! D400 Regional Sales dashboard
//!
//! Pipeline per interaction: selection → filter → aggregate → view model.
//! Everything here is synchronous and free of HTTP types; the handler in
//! `handlers::d400_regional_sales` only wraps [`service::render`].

pub mod charts;
pub mod context;
pub mod error;
pub mod repository;
pub mod selection;
pub mod service;

pub use context::DashboardContext;
pub use error::SelectionError;
pub use selection::Selection;
