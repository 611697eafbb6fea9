use contracts::dashboards::d400_regional_sales::{
    BarCategory, BarChart, BarSegment, LegendEntry, SalesRecord, ScatterChart, ScatterPoint,
};
use contracts::enums::Region;

use crate::shared::format::format_amount;

/// Qualitative palette (plotly default), assigned by region position
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Marker diameter of the record with the largest sales
pub const MAX_MARKER_DIAMETER: f64 = 20.0;

/// Stable color of a region: index in the dataset's region options
pub fn region_color(region: Region, options: &[Region]) -> String {
    let index = options.iter().position(|r| *r == region).unwrap_or(options.len());
    PALETTE[index % PALETTE.len()].to_string()
}

/// Bar chart over unaggregated records: one category per region
/// (first-appearance order), one stacked segment per record
pub fn build_bar_chart(
    title: &str,
    y_label: &str,
    records: &[SalesRecord],
    options: &[Region],
    value_of: impl Fn(&SalesRecord) -> f64,
) -> BarChart {
    let mut categories: Vec<BarCategory> = Vec::new();

    for record in records {
        let value = value_of(record);
        let segment = BarSegment {
            value,
            label: format_amount(value),
        };

        match categories.iter_mut().find(|c| c.region == record.region) {
            Some(category) => {
                category.total += value;
                category.segments.push(segment);
            }
            None => categories.push(BarCategory {
                region: record.region,
                color: region_color(record.region, options),
                total: value,
                segments: vec![segment],
            }),
        }
    }

    BarChart {
        title: title.to_string(),
        x_label: "Region".to_string(),
        y_label: y_label.to_string(),
        categories,
    }
}

/// Orders (x) vs Sales (y); marker area proportional to sales
pub fn build_scatter_chart(
    title: &str,
    records: &[SalesRecord],
    options: &[Region],
) -> ScatterChart {
    let max_sales = records.iter().map(|r| r.sales).fold(0.0_f64, f64::max);

    let points = records
        .iter()
        .map(|record| ScatterPoint {
            region: record.region,
            color: region_color(record.region, options),
            x: record.orders as f64,
            y: record.sales,
            size: marker_diameter(record.sales, max_sales),
            hover: format!(
                "Region={}\nOrders={}\nSales={}",
                record.region,
                record.orders,
                format_amount(record.sales)
            ),
        })
        .collect();

    let mut legend: Vec<LegendEntry> = Vec::new();
    for record in records {
        if !legend.iter().any(|e| e.region == record.region) {
            legend.push(LegendEntry {
                region: record.region,
                color: region_color(record.region, options),
            });
        }
    }

    ScatterChart {
        title: title.to_string(),
        x_label: "Orders".to_string(),
        y_label: "Sales".to_string(),
        points,
        legend,
    }
}

fn marker_diameter(sales: f64, max_sales: f64) -> f64 {
    if max_sales <= 0.0 {
        return 0.0;
    }
    MAX_MARKER_DIAMETER * (sales.max(0.0) / max_sales).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_regional_sales::repository::Dataset;

    fn options() -> Vec<Region> {
        vec![Region::North, Region::South, Region::East]
    }

    #[test]
    fn test_colors_are_stable_per_region() {
        assert_eq!(region_color(Region::North, &options()), "#636EFA");
        assert_eq!(region_color(Region::South, &options()), "#EF553B");
        assert_eq!(region_color(Region::East, &options()), "#00CC96");
    }

    #[test]
    fn test_bar_chart_stacks_records_per_region() {
        let dataset = Dataset::builtin();
        let chart = build_bar_chart("Sales by Region", "Sales", dataset.records(), &options(), |r| {
            r.sales
        });

        let regions: Vec<Region> = chart.categories.iter().map(|c| c.region).collect();
        assert_eq!(regions, options());

        let north = &chart.categories[0];
        let values: Vec<f64> = north.segments.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![100.0, 200.0]);
        assert_eq!(north.total, 300.0);
        assert_eq!(north.segments[1].label, "200");

        assert_eq!(chart.categories[2].segments.len(), 1);
        assert_eq!(chart.categories[2].total, 120.0);
    }

    #[test]
    fn test_bar_chart_of_nothing() {
        let chart = build_bar_chart("Orders by Region", "Orders", &[], &options(), |r| {
            r.orders as f64
        });
        assert!(chart.categories.is_empty());
    }

    #[test]
    fn test_scatter_marker_area_is_proportional_to_sales() {
        let dataset = Dataset::builtin();
        let chart = build_scatter_chart("Sales vs Orders", dataset.records(), &options());

        assert_eq!(chart.points.len(), 5);
        let largest = &chart.points[2];
        assert_eq!(largest.y, 200.0);
        assert_eq!(largest.size, MAX_MARKER_DIAMETER);

        // 100 is half of 200: half the area
        let smallest = &chart.points[0];
        let area_ratio = (smallest.size / largest.size).powi(2);
        assert!((area_ratio - 0.5).abs() < 1e-9);

        assert_eq!(smallest.x, 5.0);
        assert_eq!(smallest.hover, "Region=North\nOrders=5\nSales=100");
    }

    #[test]
    fn test_scatter_legend_lists_present_regions_once() {
        let dataset = Dataset::builtin();
        let chart = build_scatter_chart("Sales vs Orders", dataset.records(), &options());
        let legend: Vec<Region> = chart.legend.iter().map(|e| e.region).collect();
        assert_eq!(legend, options());
    }

    #[test]
    fn test_scatter_with_zero_sales() {
        let records = [SalesRecord::new(Region::East, 0.0, 3)];
        let chart = build_scatter_chart("Sales vs Orders", &records, &options());
        assert_eq!(chart.points[0].size, 0.0);
    }
}
