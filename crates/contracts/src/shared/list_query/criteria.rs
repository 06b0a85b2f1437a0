use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::shared::date_utils::start_of_day;

/// Filter value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// Selection of one categorical filter (branch, company, status...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub selected: String,
    /// Compare case-insensitively (status fields).
    pub fold_case: bool,
    /// Records without a value for the field pass an active selection.
    pub keep_missing: bool,
}

impl CategoryFilter {
    pub fn exact(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            fold_case: false,
            keep_missing: false,
        }
    }

    pub fn folded(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            fold_case: true,
            keep_missing: false,
        }
    }

    /// Records that carry no value pass an active selection.
    pub fn keeping_missing(mut self) -> Self {
        self.keep_missing = true;
        self
    }

    pub fn is_active(&self) -> bool {
        self.selected != ALL
    }

    /// `"all"` accepts anything, including a missing value.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        match value {
            None => self.keep_missing,
            Some(v) if self.fold_case => v.to_lowercase() == self.selected.to_lowercase(),
            Some(v) => v == self.selected,
        }
    }
}

/// Closed interval of a record; a missing side never rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateInterval {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateInterval {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// A single timestamp, treated as `[t, t]`.
    pub fn instant(at: Option<DateTime<Utc>>) -> Self {
        Self { start: at, end: at }
    }
}

/// Date-range filter; an unset bound imposes no constraint on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// Range picked in a calendar; both bounds are midnight of their day.
    pub fn days(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from: from.map(start_of_day),
            to: to.map(start_of_day),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Overlap test: reject if `end < from`, reject if `start > to`.
    pub fn overlaps(&self, interval: &DateInterval) -> bool {
        if let (Some(from), Some(end)) = (self.from, interval.end) {
            if end < from {
                return false;
            }
        }
        if let (Some(to), Some(start)) = (self.to, interval.start) {
            if start > to {
                return false;
            }
        }
        true
    }
}

/// Everything a list view filters on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub categorical: BTreeMap<String, CategoryFilter>,
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, field: impl Into<String>, filter: CategoryFilter) -> Self {
        self.categorical.insert(field.into(), filter);
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Number of constraints currently narrowing the list.
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search_term.is_empty());
        let categories = self.categorical.values().filter(|f| f.is_active()).count();
        let dates = usize::from(self.date_range.is_some_and(|r| !r.is_unbounded()));
        search + categories + dates
    }
}
