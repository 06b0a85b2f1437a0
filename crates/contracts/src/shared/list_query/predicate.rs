use super::{FilterCriteria, ListRecord};

/// Logical AND of search, every categorical filter and the date range.
pub fn matches<R: ListRecord>(record: &R, criteria: &FilterCriteria) -> bool {
    if !record.matches_search(&criteria.search_term) {
        return false;
    }
    let categories_ok = criteria
        .categorical
        .iter()
        .all(|(field, filter)| filter.accepts(record.category(field)));
    if !categories_ok {
        return false;
    }
    match &criteria.date_range {
        Some(range) if !range.is_unbounded() => range.overlaps(&record.interval()),
        _ => true,
    }
}

/// Records that pass `criteria`, in their original order.
pub fn filter_records<'a, R: ListRecord>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    records.iter().filter(|r| matches(*r, criteria)).collect()
}
