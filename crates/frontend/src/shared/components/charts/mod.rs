//! Inline SVG charts for dashboard view models

pub mod bar_chart;
pub mod legend;
pub mod scale;
pub mod scatter_chart;

pub use bar_chart::BarChartView;
pub use legend::ChartLegend;
pub use scatter_chart::ScatterChartView;
