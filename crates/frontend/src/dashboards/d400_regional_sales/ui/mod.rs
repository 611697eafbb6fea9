pub mod dashboard;
pub mod region_filter;
pub mod summary_table;

pub use dashboard::RegionalSalesDashboard;
