//! Generic list machinery shared by every table view
//!
//! Records flow through: filter predicate -> newest-first sort -> paginator.
//! `ListState` holds the records and the current criteria/page and applies
//! the page-reset rules.

pub mod criteria;
pub mod pagination;
pub mod predicate;
pub mod sort;
pub mod state;

use chrono::{DateTime, Utc};

pub use criteria::{CategoryFilter, DateInterval, DateRange, FilterCriteria, ALL};
pub use pagination::{paginate, total_pages, PageInfo};
pub use predicate::{filter_records, matches};
pub use sort::sort_newest_first;
pub use state::{ListState, ListView};

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Fields matched against the search term.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    /// An empty term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Records exposing named categorical fields (branch, company, status...).
pub trait Categorized {
    fn category(&self, field: &str) -> Option<&str>;
}

/// Records carrying a creation time and optionally a date interval.
pub trait Dated {
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Interval used by date-range filters; the creation instant by default.
    fn interval(&self) -> DateInterval {
        DateInterval::instant(self.created_at())
    }
}

/// A display record usable by `ListState`.
pub trait ListRecord: Searchable + Categorized + Dated {
    fn id(&self) -> &str;
}
