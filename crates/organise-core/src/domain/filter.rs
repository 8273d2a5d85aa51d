//! Status Filter
//!
//! `all` / `active` / `completed` views over a list. Never mutates the list.

use serde::{Deserialize, Serialize};

use super::entity::Completable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => StatusFilter::Active,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    pub fn matches<T: Completable>(&self, record: &T) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !record.is_done(),
            StatusFilter::Completed => record.is_done(),
        }
    }

    /// Borrowing view in list order
    pub fn apply<'a, T: Completable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(bool);

    impl Completable for Row {
        fn is_done(&self) -> bool {
            self.0
        }
        fn set_done(&mut self, done: bool) {
            self.0 = done;
        }
    }

    #[test]
    fn test_filter_views() {
        let rows = vec![Row(false), Row(true), Row(false)];
        assert_eq!(StatusFilter::All.apply(&rows).len(), 3);
        assert_eq!(StatusFilter::Active.apply(&rows).len(), 2);
        assert_eq!(StatusFilter::Completed.apply(&rows).len(), 1);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!(StatusFilter::from_str("active"), StatusFilter::Active);
        assert_eq!(StatusFilter::from_str("bogus"), StatusFilter::All);
        assert_eq!(StatusFilter::Completed.as_str(), "completed");
    }
}
