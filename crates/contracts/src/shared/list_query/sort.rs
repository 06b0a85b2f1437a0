use std::cmp::Reverse;

use super::Dated;

/// Stable sort by creation time, newest first; undated records go last.
pub fn sort_newest_first<R: Dated>(records: &mut [&R]) {
    records.sort_by_key(|r| Reverse(r.created_at()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::predicate::fixtures::row;

    #[test]
    fn test_descending_by_creation() {
        let rows = vec![
            row("old", "a", "ok", "2024-01-01T08:00:00Z"),
            row("new", "b", "ok", "2024-03-01T08:00:00Z"),
            row("mid", "c", "ok", "2024-02-01T08:00:00Z"),
        ];
        let mut refs: Vec<_> = rows.iter().collect();
        sort_newest_first(&mut refs);
        let ids: Vec<_> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
        for pair in refs.windows(2) {
            assert!(pair[0].created >= pair[1].created);
        }
    }

    #[test]
    fn test_ties_keep_input_order_and_undated_last() {
        let rows = vec![
            row("undated", "a", "ok", ""),
            row("t1", "b", "ok", "2024-01-01"),
            row("t2", "c", "ok", "2024-01-01"),
        ];
        let mut refs: Vec<_> = rows.iter().collect();
        sort_newest_first(&mut refs);
        let ids: Vec<_> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "undated"]);
    }
}
