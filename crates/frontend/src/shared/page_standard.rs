//! Page categories.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"d400_regional_sales--dashboard"`) and a `data-page-category`
//! attribute carrying [`PageCategory::as_str`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Analytical dashboard / chart view.
    Dashboard,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::Dashboard => "dashboard",
        }
    }

    /// BEM class list of the page root
    pub fn root_class(&self) -> &'static str {
        match self {
            PageCategory::Dashboard => "page page--dashboard",
        }
    }
}
