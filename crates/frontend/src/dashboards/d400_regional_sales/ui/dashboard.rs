use super::region_filter::RegionFilter;
use super::summary_table::SummaryTable;
use crate::dashboards::d400_regional_sales::api;
use crate::shared::components::charts::{BarChartView, ScatterChartView};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::metric_icon_name;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::request_generation::RequestGeneration;
use contracts::dashboards::d400_regional_sales::{
    MetricCard, RegionalSalesOptions, RegionalSalesView,
};
use contracts::enums::Region;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

const DEFAULT_TITLE: &str = "📊 Regional Sales & Orders Dashboard";

/// Regional Sales Dashboard component
///
/// Every change of the region selection issues exactly one render request;
/// responses to superseded requests are dropped.
#[component]
pub fn RegionalSalesDashboard() -> impl IntoView {
    let options = RwSignal::new(None::<RegionalSalesOptions>);
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

    // Data state
    let data = RwSignal::new(None::<RegionalSalesView>);
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let generation = StoredValue::new(RequestGeneration::default());

    // Load filter options on mount; the default selection is all regions
    spawn_local(async move {
        match api::get_options().await {
            Ok(opts) => {
                selected.set(
                    opts.default_selection
                        .iter()
                        .map(|r| r.code().to_string())
                        .collect(),
                );
                options.set(Some(opts));
            }
            Err(e) => {
                log::error!("Failed to load D400 options: {}", e);
                error_msg.set(Some(e));
            }
        }
    });

    // Re-render when the selection changes
    Effect::new(move |_| {
        let Some(opts) = options.get() else {
            return;
        };
        let regions = selected_codes(&opts.regions, &selected.get());

        let mut next = generation.get_value();
        let request_id = next.issue();
        generation.set_value(next);
        loading.set(true);

        spawn_local(async move {
            let result = api::get_regional_sales(regions).await;
            if !generation.with_value(|g| g.is_current(request_id)) {
                log::debug!("D400: dropping stale response #{}", request_id);
                return;
            }

            match result {
                Ok(response) => {
                    data.set(Some(response));
                    error_msg.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load D400 dashboard: {}", e);
                    error_msg.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let region_options = Signal::derive(move || {
        options
            .get()
            .map(|o| o.regions)
            .unwrap_or_default()
    });
    let title = move || {
        options
            .get()
            .map(|o| o.title)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    };

    view! {
        <PageFrame page_id="d400_regional_sales--dashboard" category=PageCategory::Dashboard>
            <div class="d400-layout">
                <RegionFilter options=region_options selected=selected />

                <main class="d400-main">
                    <div class="page__header">
                        <h2 class="page__title">{title}</h2>
                        {move || loading.get().then(|| view! {
                            <span class="d400-loading">"Loading..."</span>
                        })}
                    </div>

                    {move || error_msg.get().map(|msg| view! {
                        <div class="alert alert--error">
                            <strong>"⚠ Error: "</strong>
                            {msg}
                        </div>
                    })}

                    <div class="page__content">
                        {move || data.get().map(|data| view! { <DashboardBody data=data /> })}
                    </div>
                </main>
            </div>
        </PageFrame>
    }
}

/// Metrics, summary table and charts of one view model
#[component]
fn DashboardBody(data: RegionalSalesView) -> impl IntoView {
    let empty_note = data.is_empty().then(|| {
        view! {
            <div class="d400-empty">"Select at least one region to see data."</div>
        }
    });

    view! {
        {empty_note}

        <div class="d400-metrics">
            {data.metrics.into_iter().map(|metric| {
                let muted = metric.value.is_none();
                let subtitle = metric_subtitle(&metric);
                view! {
                    <StatCard
                        label=metric.label
                        icon_name=metric_icon_name(&metric.id)
                        value=metric.display
                        muted=muted
                        subtitle=subtitle
                    />
                }
            }).collect_view()}
        </div>

        <section class="d400-section">
            <h3 class="d400-section__title">"📋 Summary by Region"</h3>
            <SummaryTable rows=data.summary />
        </section>

        <div class="d400-charts">
            <section class="d400-section">
                <h3 class="d400-section__title">{data.sales_chart.title.clone()}</h3>
                <BarChartView chart=data.sales_chart />
            </section>
            <section class="d400-section">
                <h3 class="d400-section__title">{data.orders_chart.title.clone()}</h3>
                <BarChartView chart=data.orders_chart />
            </section>
        </div>

        <section class="d400-section">
            <h3 class="d400-section__title">{data.scatter.title.clone()}</h3>
            <ScatterChartView chart=data.scatter />
        </section>
    }
}

/// Note under a metric whose value is undefined for the selection
pub fn metric_subtitle(metric: &MetricCard) -> Option<String> {
    metric
        .value
        .is_none()
        .then(|| "No regions selected".to_string())
}

/// Selected codes in option order; codes outside the options are ignored
pub fn selected_codes(options: &[Region], selected: &HashSet<String>) -> Vec<String> {
    options
        .iter()
        .map(|r| r.code().to_string())
        .filter(|code| selected.contains(code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_codes_follow_option_order() {
        let options = vec![Region::North, Region::South, Region::East];
        let selected: HashSet<String> = ["East", "North"].iter().map(|s| s.to_string()).collect();
        assert_eq!(selected_codes(&options, &selected), vec!["North", "East"]);
    }

    fn metric(value: Option<f64>, display: &str) -> MetricCard {
        MetricCard {
            id: "avg_sales".into(),
            label: "📈 Avg Sales".into(),
            value,
            display: display.into(),
        }
    }

    #[test]
    fn test_metric_subtitle_only_for_undefined_values() {
        assert_eq!(
            metric_subtitle(&metric(None, "—")),
            Some("No regions selected".to_string())
        );
        assert_eq!(metric_subtitle(&metric(Some(150.0), "150.00")), None);
    }

    #[test]
    fn test_selected_codes_empty() {
        let options = vec![Region::North];
        assert!(selected_codes(&options, &HashSet::new()).is_empty());

        let stray: HashSet<String> = ["West".to_string()].into_iter().collect();
        assert!(selected_codes(&options, &stray).is_empty());
    }
}
