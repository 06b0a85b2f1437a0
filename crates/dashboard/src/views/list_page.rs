use chrono::NaiveDate;
use contracts::shared::date_utils::format_date_input;
use contracts::shared::list_query::{DateRange, ListRecord, ListState, ListView};
use contracts::shared::normalize::Normalize;

use crate::api::Transport;
use crate::queries::QueryKey;
use crate::session::Session;
use crate::shared::format::{render_table, TableRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// Static per-view message; the underlying error is only logged.
    Failed(&'static str),
}

/// Filter input of one list request (command line flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search: Option<String>,
    /// Categorical selections as (field, value)
    pub categories: Vec<(&'static str, String)>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ListFilters {
    pub fn category(mut self, field: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.categories.push((field, value.trim().to_string()));
        }
        self
    }
}

/// One remote-backed list view.
pub struct ListPage<R> {
    pub key: QueryKey,
    pub status: LoadStatus,
    pub state: ListState<R>,
    error_message: &'static str,
}

impl<R: ListRecord + Normalize> ListPage<R> {
    pub fn new(key: QueryKey, error_message: &'static str, state: ListState<R>) -> Self {
        Self {
            key,
            status: LoadStatus::Loading,
            state,
            error_message,
        }
    }

    /// Fetches through the session cache. A failure keeps the previous
    /// records and switches the view to its static error message.
    pub async fn refresh<T: Transport>(&mut self, session: &Session<T>) -> &LoadStatus {
        match session.load::<R>(&self.key).await {
            Ok(records) => {
                tracing::info!("{}: {} records", self.key, records.len());
                self.state.replace_records(records);
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::error!("{}: {}", self.error_message, e);
                self.status = LoadStatus::Failed(self.error_message);
            }
        }
        &self.status
    }

    /// Applies the filters in dependency order: page size, then search and
    /// categories (a company before its branch), dates, and the page last.
    /// Flags for fields this view does not filter on are ignored.
    pub fn apply(&mut self, filters: &ListFilters) {
        if let Some(size) = filters.page_size.filter(|s| *s > 0) {
            self.state.set_page_size(size);
        }
        if let Some(term) = &filters.search {
            self.state.set_search_term(term.trim());
        }

        let mut categories = filters.categories.clone();
        categories.sort_by_key(|(field, _)| *field != "company");
        for (field, value) in &categories {
            if self.state.criteria().categorical.contains_key(*field) {
                self.state.set_category(field, value.clone());
            } else {
                tracing::warn!("{} cannot be filtered by {}", self.key, field);
            }
        }

        if filters.from.is_some() || filters.to.is_some() {
            self.state
                .set_date_range(Some(DateRange::days(filters.from, filters.to)));
        }
        if let Some(page) = filters.page.filter(|p| *p > 0) {
            self.state.set_page(page);
        }
    }

    /// Moves to the page holding the first record matching `pred`.
    pub fn highlight(&mut self, pred: impl Fn(&R) -> bool) -> Option<usize> {
        let page = self.state.locate(pred)?;
        self.state.set_page(page);
        Some(page)
    }

    pub fn view(&self) -> ListView<'_, R> {
        self.state.view()
    }

    /// One line naming the active filters; empty when nothing is filtered.
    pub fn filter_summary(&self) -> String {
        let criteria = self.state.criteria();
        if criteria.active_count() == 0 {
            return String::new();
        }
        let mut parts = Vec::new();
        if !criteria.search_term.is_empty() {
            parts.push(format!("search {:?}", criteria.search_term));
        }
        for (field, filter) in &criteria.categorical {
            if filter.is_active() {
                parts.push(format!("{}={}", field, filter.selected));
            }
        }
        if let Some(range) = criteria.date_range.filter(|r| !r.is_unbounded()) {
            parts.push(format!(
                "dates {}..{}",
                format_date_input(range.from.map(|d| d.date_naive())),
                format_date_input(range.to.map(|d| d.date_naive()))
            ));
        }
        format!("Filters: {}\n", parts.join(" | "))
    }

    pub fn render<T: Transport>(&self, session: &Session<T>) -> String
    where
        R: TableRow,
    {
        match &self.status {
            LoadStatus::Loading => "Loading...\n".to_string(),
            LoadStatus::Failed(message) => format!("{}\n", message),
            LoadStatus::Ready => {
                let view = self.view();
                format!(
                    "{}{}",
                    self.filter_summary(),
                    render_table(&view.rows, &view.info, &session.assets)
                )
            }
        }
    }
}
