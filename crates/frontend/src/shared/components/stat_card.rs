use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single KPI tile: icon, label and a preformatted value
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Value is undefined for the current selection (greyed out)
    #[prop(into, optional)]
    muted: Signal<bool>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let card_class = move || {
        if muted.get() {
            "stat-card stat-card--muted"
        } else {
            "stat-card"
        }
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
