//! List views: one `ListPage` per resource, table rows and summaries

pub mod list_page;
pub mod pages;
pub mod rows;

pub use list_page::{ListFilters, ListPage, LoadStatus};
pub use rows::{render_basket_choices, render_meal_stats};
