//! "Latest detail" access for documents that carry a chronological history.
//!
//! The backend appends one detail entry per day/week to a document. The
//! entry the dashboard shows is always the last one; an empty history has
//! no latest entry and every field derived from it takes its default.

/// Last element of a chronological history, `None` when it is empty.
pub fn latest<T>(history: &[T]) -> Option<&T> {
    history.last()
}

/// Documents whose current state lives in the last entry of a history array.
pub trait History {
    type Entry;

    fn history(&self) -> &[Self::Entry];

    fn latest(&self) -> Option<&Self::Entry> {
        latest(self.history())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Log(Vec<&'static str>);

    impl History for Log {
        type Entry = &'static str;

        fn history(&self) -> &[Self::Entry] {
            &self.0
        }
    }

    #[test]
    fn test_latest_is_last_element() {
        assert_eq!(latest(&[1, 2, 3]), Some(&3));
        assert_eq!(Log(vec!["mon", "tue"]).latest(), Some(&"tue"));
    }

    #[test]
    fn test_latest_of_empty_history() {
        let empty: [u8; 0] = [];
        assert_eq!(latest(&empty), None);
        assert_eq!(Log(Vec::new()).latest(), None);
    }
}
