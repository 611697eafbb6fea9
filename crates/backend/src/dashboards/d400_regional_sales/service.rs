use contracts::dashboards::d400_regional_sales::{
    KpiSummary, MetricCard, RegionSummaryRow, RegionalSalesOptions, RegionalSalesView,
    SalesRecord,
};

use super::charts::{build_bar_chart, build_scatter_chart};
use super::context::DashboardContext;
use super::selection::Selection;
use crate::shared::format::{format_amount, format_decimal};

/// Shown instead of a value that is undefined for the selection
pub const EMPTY_VALUE: &str = "—";

/// Options for the region multi-select
pub fn options(ctx: &DashboardContext) -> RegionalSalesOptions {
    let regions = ctx.dataset.regions();
    RegionalSalesOptions {
        title: ctx.title.clone(),
        default_selection: regions.clone(),
        regions,
    }
}

/// Records whose region is selected, in dataset order
pub fn filter(records: &[SalesRecord], selection: &Selection) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| selection.contains(r.region))
        .copied()
        .collect()
}

/// Sums and the rounded mean; the mean is `None` for no records
pub fn compute_kpis(records: &[SalesRecord]) -> KpiSummary {
    let total_sales: f64 = records.iter().map(|r| r.sales).sum();
    let total_orders: u64 = records.iter().map(|r| r.orders).sum();
    let average_sales = if records.is_empty() {
        None
    } else {
        Some(round2(total_sales / records.len() as f64))
    };

    KpiSummary {
        total_sales,
        total_orders,
        average_sales,
    }
}

/// Group by region in first-appearance order, 1-based index
pub fn summarize_by_region(records: &[SalesRecord]) -> Vec<RegionSummaryRow> {
    // (row, record count)
    let mut groups: Vec<(RegionSummaryRow, usize)> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|(row, _)| row.region == record.region) {
            Some((row, count)) => {
                row.total_sales += record.sales;
                row.orders += record.orders;
                *count += 1;
            }
            None => groups.push((
                RegionSummaryRow {
                    index: groups.len() + 1,
                    region: record.region,
                    total_sales: record.sales,
                    avg_sales: 0.0,
                    orders: record.orders,
                },
                1,
            )),
        }
    }

    groups
        .into_iter()
        .map(|(mut row, count)| {
            row.avg_sales = row.total_sales / count as f64;
            row
        })
        .collect()
}

/// Metric cards in display order: total sales, total orders, average sales
pub fn build_metrics(kpis: &KpiSummary) -> Vec<MetricCard> {
    vec![
        MetricCard {
            id: "total_sales".to_string(),
            label: "💰 Total Sales".to_string(),
            value: Some(kpis.total_sales),
            display: format_amount(kpis.total_sales),
        },
        MetricCard {
            id: "total_orders".to_string(),
            label: "📦 Total Orders".to_string(),
            value: Some(kpis.total_orders as f64),
            display: format_decimal(kpis.total_orders as f64, 0),
        },
        MetricCard {
            id: "avg_sales".to_string(),
            label: "📈 Avg Sales".to_string(),
            value: kpis.average_sales,
            display: kpis
                .average_sales
                .map(|avg| format_decimal(avg, 2))
                .unwrap_or_else(|| EMPTY_VALUE.to_string()),
        },
    ]
}

/// One full render pass: filter, aggregate and build every widget
pub fn render(ctx: &DashboardContext, selection: &Selection) -> RegionalSalesView {
    let region_options = ctx.dataset.regions();
    let records = filter(ctx.dataset.records(), selection);
    let kpis = compute_kpis(&records);

    RegionalSalesView {
        title: ctx.title.clone(),
        selection: region_options
            .iter()
            .copied()
            .filter(|r| selection.contains(*r))
            .collect(),
        metrics: build_metrics(&kpis),
        summary: summarize_by_region(&records),
        sales_chart: build_bar_chart("Sales by Region", "Sales", &records, &region_options, |r| {
            r.sales
        }),
        orders_chart: build_bar_chart(
            "Orders by Region",
            "Orders",
            &records,
            &region_options,
            |r| r.orders as f64,
        ),
        scatter: build_scatter_chart("Sales vs Orders Relationship", &records, &region_options),
        kpis,
        records,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_regional_sales::repository::Dataset;
    use contracts::enums::Region;

    fn ctx() -> DashboardContext {
        DashboardContext::new("Regional Sales", Dataset::builtin())
    }

    /// Every non-empty subset of the three regions
    fn subsets() -> Vec<Vec<Region>> {
        let all = Region::all();
        (1..(1 << all.len()))
            .map(|mask: usize| {
                all.iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, r)| *r)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_filter_keeps_selected_records_in_order() {
        let dataset = Dataset::builtin();
        for subset in subsets() {
            let selection = Selection::new(subset.clone());
            let filtered = filter(dataset.records(), &selection);
            let expected: Vec<SalesRecord> = dataset
                .records()
                .iter()
                .filter(|r| subset.contains(&r.region))
                .copied()
                .collect();
            assert_eq!(filtered, expected, "subset {:?}", subset);
        }
    }

    #[test]
    fn test_kpis_match_sums_for_every_subset() {
        let dataset = Dataset::builtin();
        for subset in subsets() {
            let filtered = filter(dataset.records(), &Selection::new(subset));
            let kpis = compute_kpis(&filtered);
            let sales: f64 = filtered.iter().map(|r| r.sales).sum();
            let orders: u64 = filtered.iter().map(|r| r.orders).sum();
            assert_eq!(kpis.total_sales, sales);
            assert_eq!(kpis.total_orders, orders);
            assert_eq!(kpis.average_sales, Some(round2(sales / filtered.len() as f64)));
        }
    }

    #[test]
    fn test_summary_matches_per_region_aggregates() {
        let dataset = Dataset::builtin();
        for subset in subsets() {
            let filtered = filter(dataset.records(), &Selection::new(subset.clone()));
            let summary = summarize_by_region(&filtered);
            assert_eq!(summary.len(), subset.len());

            for (i, row) in summary.iter().enumerate() {
                assert_eq!(row.index, i + 1);
                let own: Vec<&SalesRecord> =
                    filtered.iter().filter(|r| r.region == row.region).collect();
                let sales: f64 = own.iter().map(|r| r.sales).sum();
                assert_eq!(row.total_sales, sales);
                assert_eq!(row.avg_sales, sales / own.len() as f64);
                assert_eq!(row.orders, own.iter().map(|r| r.orders).sum::<u64>());
            }
        }
    }

    #[test]
    fn test_default_selection() {
        let ctx = ctx();
        let view = render(&ctx, &Selection::all(&ctx.dataset));

        assert_eq!(view.records.len(), 5);
        assert_eq!(view.kpis.total_sales, 750.0);
        assert_eq!(view.kpis.total_orders, 36);
        assert_eq!(view.kpis.average_sales, Some(150.0));

        let displays: Vec<&str> = view.metrics.iter().map(|m| m.display.as_str()).collect();
        assert_eq!(displays, vec!["750", "36", "150.00"]);

        let regions: Vec<Region> = view.summary.iter().map(|r| r.region).collect();
        assert_eq!(regions, vec![Region::North, Region::South, Region::East]);
        assert_eq!(view.summary[1].total_sales, 330.0);
        assert_eq!(view.summary[1].avg_sales, 165.0);
        assert_eq!(view.summary[1].orders, 15);
    }

    #[test]
    fn test_north_only() {
        let view = render(&ctx(), &Selection::new([Region::North]));

        assert_eq!(
            view.records,
            vec![
                SalesRecord::new(Region::North, 100.0, 5),
                SalesRecord::new(Region::North, 200.0, 10),
            ]
        );
        assert_eq!(view.kpis.total_sales, 300.0);
        assert_eq!(view.kpis.total_orders, 15);
        assert_eq!(view.kpis.average_sales, Some(150.0));
        assert_eq!(
            view.summary,
            vec![RegionSummaryRow {
                index: 1,
                region: Region::North,
                total_sales: 300.0,
                avg_sales: 150.0,
                orders: 15,
            }]
        );
        assert_eq!(view.selection, vec![Region::North]);
    }

    #[test]
    fn test_empty_selection() {
        let view = render(&ctx(), &Selection::default());

        assert!(view.is_empty());
        assert_eq!(view.kpis.total_sales, 0.0);
        assert_eq!(view.kpis.total_orders, 0);
        assert_eq!(view.kpis.average_sales, None);
        assert_eq!(view.metrics[2].value, None);
        assert_eq!(view.metrics[2].display, EMPTY_VALUE);
        assert!(view.summary.is_empty());
        assert!(view.sales_chart.categories.is_empty());
        assert!(view.scatter.points.is_empty());
    }

    #[test]
    fn test_summary_follows_data_order_not_selection_order() {
        let view = render(&ctx(), &Selection::new([Region::East, Region::North]));
        let regions: Vec<Region> = view.summary.iter().map(|r| r.region).collect();
        assert_eq!(regions, vec![Region::North, Region::East]);
        assert_eq!(view.selection, vec![Region::North, Region::East]);
    }

    #[test]
    fn test_average_is_rounded_to_two_decimals() {
        let records = [
            SalesRecord::new(Region::East, 10.0, 1),
            SalesRecord::new(Region::East, 10.0, 1),
            SalesRecord::new(Region::East, 11.0, 1),
        ];
        assert_eq!(compute_kpis(&records).average_sales, Some(10.33));
    }

    #[test]
    fn test_render_is_idempotent() {
        let ctx = ctx();
        let selection = Selection::new([Region::South, Region::East]);
        assert_eq!(render(&ctx, &selection), render(&ctx, &selection));
    }

    #[test]
    fn test_options_default_to_all_regions() {
        let opts = options(&ctx());
        assert_eq!(opts.regions, vec![Region::North, Region::South, Region::East]);
        assert_eq!(opts.default_selection, opts.regions);
        assert_eq!(opts.title, "Regional Sales");
    }
}
