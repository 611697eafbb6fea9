use contracts::dashboards::d400_regional_sales::LegendEntry;
use leptos::prelude::*;

#[component]
pub fn ChartLegend(entries: Vec<LegendEntry>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {entries.into_iter().map(|entry| view! {
                <span class="chart__legend-item">
                    <span
                        class="chart__legend-swatch"
                        style=format!("background-color: {};", entry.color)
                    ></span>
                    {entry.region.display_name()}
                </span>
            }).collect_view()}
        </div>
    }
}
