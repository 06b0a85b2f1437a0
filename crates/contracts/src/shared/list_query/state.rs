use std::collections::BTreeMap;

use super::{
    filter_records, paginate, sort_newest_first, CategoryFilter, DateRange, FilterCriteria,
    ListRecord, PageInfo, ALL,
};

/// State of one list view: fetched records, criteria and current page.
///
/// Records are replaced wholesale on every fetch. Any change of the search
/// term, a categorical filter, the date range or the page size moves the
/// view back to page 1. The page number itself is not clamped: a page past
/// the end simply shows no rows.
#[derive(Debug, Clone)]
pub struct ListState<R> {
    records: Vec<R>,
    criteria: FilterCriteria,
    // parent filter -> filters reset to "all" when the parent changes
    dependents: BTreeMap<String, Vec<String>>,
    page: usize,
    page_size: usize,
}

/// Current page of a list view.
#[derive(Debug, Clone)]
pub struct ListView<'a, R> {
    pub rows: Vec<&'a R>,
    pub info: PageInfo,
}

impl<R: ListRecord> ListState<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            dependents: BTreeMap::new(),
            page: 1,
            page_size,
        }
    }

    /// Registers a categorical filter with its initial selection.
    pub fn with_filter(mut self, field: impl Into<String>, filter: CategoryFilter) -> Self {
        self.criteria.categorical.insert(field.into(), filter);
        self
    }

    /// `child` is reset to "all" whenever `parent` changes (company -> branch).
    pub fn with_dependent(mut self, parent: impl Into<String>, child: impl Into<String>) -> Self {
        self.dependents
            .entry(parent.into())
            .or_default()
            .push(child.into());
        self
    }

    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.page = 1;
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.criteria.search_term != term {
            self.criteria.search_term = term;
            self.page = 1;
        }
    }

    /// Changes a categorical selection, keeping the field's case rule.
    /// Unknown fields are added as exact-match filters.
    pub fn set_category(&mut self, field: &str, selected: impl Into<String>) {
        let selected = selected.into();
        let filter = self
            .criteria
            .categorical
            .entry(field.to_string())
            .or_insert_with(|| CategoryFilter::exact(ALL));
        if filter.selected == selected {
            return;
        }
        filter.selected = selected;
        self.reset_dependents(field);
        self.page = 1;
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        if self.criteria.date_range != range {
            self.criteria.date_range = range;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if self.page_size != page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    fn reset_dependents(&mut self, field: &str) {
        let mut pending: Vec<String> = self.dependents.get(field).cloned().unwrap_or_default();
        while let Some(child) = pending.pop() {
            if let Some(filter) = self.criteria.categorical.get_mut(&child) {
                filter.selected = ALL.to_string();
            }
            if let Some(grandchildren) = self.dependents.get(&child) {
                pending.extend(grandchildren.iter().cloned());
            }
        }
    }

    /// Filtered records, newest first.
    pub fn filtered(&self) -> Vec<&R> {
        let mut rows = filter_records(&self.records, &self.criteria);
        sort_newest_first(&mut rows);
        rows
    }

    pub fn view(&self) -> ListView<'_, R> {
        let rows = self.filtered();
        let info = PageInfo::new(self.page, self.page_size, rows.len());
        let page_rows = paginate(&rows, self.page_size, self.page).to_vec();
        ListView {
            rows: page_rows,
            info,
        }
    }

    /// Page (1-indexed) holding the first filtered record matching `pred`.
    pub fn locate(&self, pred: impl Fn(&R) -> bool) -> Option<usize> {
        if self.page_size == 0 {
            return None;
        }
        self.filtered()
            .iter()
            .position(|r| pred(*r))
            .map(|index| index / self.page_size + 1)
    }
}
