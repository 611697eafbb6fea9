use crate::shared::icons::icon;
use contracts::enums::Region;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Sidebar multi-select of regions
#[component]
pub fn RegionFilter(
    /// Available regions, in dataset order
    #[prop(into)]
    options: Signal<Vec<Region>>,
    /// Selected region codes
    selected: RwSignal<HashSet<String>>,
) -> impl IntoView {
    let select_all = move |_| {
        selected.set(
            options
                .get()
                .iter()
                .map(|r| r.code().to_string())
                .collect(),
        );
    };
    let clear = move |_| selected.set(HashSet::new());

    view! {
        <aside class="d400-sidebar">
            <div class="d400-sidebar__header">
                {icon("filter")}
                <span>"Filter Options"</span>
            </div>

            <div class="d400-sidebar__label">"Select Region(s)"</div>
            <CheckboxGroup value=selected>
                <div class="d400-sidebar__options">
                    {move || options.get().into_iter().map(|region| {
                        view! {
                            <Checkbox
                                value=region.code().to_string()
                                label=region.display_name().to_string()
                            />
                        }
                    }).collect_view()}
                </div>
            </CheckboxGroup>

            <div class="d400-sidebar__actions">
                <button class="d400-sidebar__action" on:click=select_all>"All"</button>
                <button class="d400-sidebar__action" on:click=clear>"None"</button>
            </div>
        </aside>
    }
}
