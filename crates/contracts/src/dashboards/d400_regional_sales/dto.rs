use crate::enums::Region;
use serde::{Deserialize, Serialize};

/// One fixed observation of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub region: Region,
    pub sales: f64,
    pub orders: u64,
}

impl SalesRecord {
    pub const fn new(region: Region, sales: f64, orders: u64) -> Self {
        Self {
            region,
            sales,
            orders,
        }
    }
}

/// Filter options for the region multi-select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalSalesOptions {
    /// Page title
    pub title: String,
    /// Distinct regions of the dataset in first-appearance order
    pub regions: Vec<Region>,
    /// Initially selected regions (all of them)
    pub default_selection: Vec<Region>,
}

/// Request for the regional sales dashboard
///
/// Regions are passed as wire codes (e.g. `["North", "East"]`);
/// an empty list is a valid, empty selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionalSalesRequest {
    pub regions: Vec<String>,
}

/// Top-line aggregates over the filtered records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_sales: f64,
    pub total_orders: u64,
    /// Mean sales rounded to 2 decimals, `None` when nothing is selected
    pub average_sales: Option<f64>,
}

/// A single metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Stable identifier: "total_sales", "total_orders" or "avg_sales"
    pub id: String,
    /// Label shown above the value (e.g. "💰 Total Sales")
    pub label: String,
    /// Raw value, `None` if undefined for the current selection
    pub value: Option<f64>,
    /// Preformatted value ("—" when undefined)
    pub display: String,
}

/// One row of the "Summary by Region" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummaryRow {
    /// 1-based display index
    pub index: usize,
    pub region: Region,
    pub total_sales: f64,
    pub avg_sales: f64,
    pub orders: u64,
}

/// Stacked piece of a bar; one per filtered record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    pub value: f64,
    /// Annotation drawn on the segment
    pub label: String,
}

/// One category (x position) of a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarCategory {
    pub region: Region,
    pub color: String,
    /// Sum of all segments
    pub total: f64,
    pub segments: Vec<BarSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<BarCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub region: Region,
    pub color: String,
    pub x: f64,
    pub y: f64,
    /// Marker diameter in pixels (area proportional to sales)
    pub size: f64,
    /// Hover text, one "Name=value" per line
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub region: Region,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    pub legend: Vec<LegendEntry>,
}

/// Complete view model of one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalSalesView {
    pub title: String,
    /// Effective selection, in dataset region order
    pub selection: Vec<Region>,
    /// Filtered records, in dataset order
    pub records: Vec<SalesRecord>,
    pub kpis: KpiSummary,
    pub metrics: Vec<MetricCard>,
    pub summary: Vec<RegionSummaryRow>,
    pub sales_chart: BarChart,
    pub orders_chart: BarChart,
    pub scatter: ScatterChart,
}

impl RegionalSalesView {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
