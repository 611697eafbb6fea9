use crate::dashboards::RegionalSalesDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <RegionalSalesDashboard />
    }
}
