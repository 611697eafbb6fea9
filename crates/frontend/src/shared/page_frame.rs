//! PageFrame: root wrapper of a page.
//!
//! Puts `id="{entity}--{category}"` and `data-page-category` on the root
//! element so a page can be found from the DOM inspector.

use super::page_standard::PageCategory;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id, e.g. `"d400_regional_sales--dashboard"`
    page_id: &'static str,
    category: PageCategory,
    /// Extra CSS classes after the category class
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let root_class = match class {
        "" => category.root_class().to_string(),
        extra => format!("{} {}", category.root_class(), extra),
    };

    view! {
        <div id=page_id class=root_class data-page-category=category.as_str()>
            {children()}
        </div>
    }
}
