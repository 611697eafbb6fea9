use crate::shared::number_format::{format_money, format_number_int};
use contracts::dashboards::d400_regional_sales::RegionSummaryRow;
use leptos::prelude::*;

/// "Summary by Region" table
#[component]
pub fn SummaryTable(rows: Vec<RegionSummaryRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <div class="d400-empty">"No regions selected"</div>
        }
        .into_any();
    }

    view! {
        <table class="table d400-summary">
            <thead>
                <tr>
                    <th class="table__cell--index"></th>
                    <th>"Region"</th>
                    <th class="table__cell--number">"Total_Sales"</th>
                    <th class="table__cell--number">"Avg_Sales"</th>
                    <th class="table__cell--number">"Orders"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! {
                    <tr>
                        <td class="table__cell--index">{row.index}</td>
                        <td>{row.region.display_name()}</td>
                        <td class="table__cell--number">{format_money(row.total_sales)}</td>
                        <td class="table__cell--number">{format_money(row.avg_sales)}</td>
                        <td class="table__cell--number">{format_number_int(row.orders as f64)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
