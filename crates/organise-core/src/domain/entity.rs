//! Domain Layer - Core Entity Trait
//!
//! All records kept in a widget store have a unique identifier.
//! List records use a monotonic sequence so ids are unique by construction.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Record with the given id
pub fn find_by_id<'a, T: Entity>(records: &'a [T], id: &T::Id) -> Option<&'a T> {
    records.iter().find(|r| r.id() == *id)
}

/// Remove the record with the given id. Returns whether one was removed.
pub fn remove_by_id<T: Entity>(records: &mut Vec<T>, id: &T::Id) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != *id);
    records.len() != before
}

/// Records with a completion flag (grocery items, tasks, checklist entries)
pub trait Completable {
    fn is_done(&self) -> bool;
    fn set_done(&mut self, done: bool);

    fn toggle_done(&mut self) {
        let done = self.is_done();
        self.set_done(!done);
    }
}

/// Monotonic id source for a single store
///
/// Seeded from the largest id found in loaded data and from the persisted
/// high-water mark, so ids of deleted records are not handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    /// Sequence that starts after every id in `existing`
    pub fn after<I: IntoIterator<Item = u64>>(existing: I) -> Self {
        let next = existing
            .into_iter()
            .max()
            .map(|max| max.saturating_add(1))
            .unwrap_or(1);
        Self { next }
    }

    /// Sequence resumed from a persisted mark, never behind `existing`
    pub fn resume<I: IntoIterator<Item = u64>>(existing: I, stored_next: Option<u64>) -> Self {
        let after = Self::after(existing);
        Self {
            next: after.next.max(stored_next.unwrap_or(1)),
        }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// Next id to be handed out, the value to persist as the mark
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// A stored id usable as-is: a non-negative integral JSON number
///
/// Older data used `Date.now() + Math.random()`, which fails this check.
pub fn integral_id(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        _ => None,
    }
}

/// Settle the ids of decoded records, preserving order
///
/// The first occurrence of each non-zero id is kept; missing, zero and
/// duplicate ids get fresh ones after the largest kept id. The flag reports
/// whether any id changed.
pub fn resolve_ids(candidates: Vec<Option<u64>>) -> (Vec<u64>, bool) {
    let mut seen = std::collections::HashSet::new();
    let kept: Vec<Option<u64>> = candidates
        .into_iter()
        .map(|id| id.filter(|id| *id != 0 && seen.insert(*id)))
        .collect();

    let mut changed = false;
    let mut seq = IdSequence::after(seen.iter().copied());
    let ids = kept
        .into_iter()
        .map(|id| {
            id.unwrap_or_else(|| {
                changed = true;
                seq.next_id()
            })
        })
        .collect();
    (ids, changed)
}

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
    }

    #[test]
    fn test_sequence_after_existing() {
        let mut seq = IdSequence::after([4, 17, 9]);
        assert_eq!(seq.next_id(), 18);
        assert_eq!(seq.peek(), 19);
    }

    #[test]
    fn test_integral_id() {
        assert_eq!(integral_id(&serde_json::json!(12)), Some(12));
        assert_eq!(integral_id(&serde_json::json!(12.0)), Some(12));
        assert_eq!(integral_id(&serde_json::json!(1700000000000.25)), None);
        assert_eq!(integral_id(&serde_json::json!(-3)), None);
        assert_eq!(integral_id(&serde_json::json!("12")), None);
    }

    #[test]
    fn test_resolve_ids() {
        let (ids, changed) = resolve_ids(vec![Some(4), None, Some(4), Some(2)]);
        assert_eq!(ids, vec![4, 5, 6, 2]);
        assert!(changed);

        let (ids, changed) = resolve_ids(vec![Some(1), Some(2)]);
        assert_eq!(ids, vec![1, 2]);
        assert!(!changed);
    }

    #[derive(Clone)]
    struct Note(u64);

    impl Entity for Note {
        type Id = u64;

        fn id(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_find_and_remove_by_id() {
        let mut notes = vec![Note(1), Note(2)];
        assert!(find_by_id(&notes, &2).is_some());
        assert!(remove_by_id(&mut notes, &2));
        assert!(!remove_by_id(&mut notes, &2));
        assert!(find_by_id(&notes, &2).is_none());
    }

    #[test]
    fn test_sequence_resume_keeps_higher_mark() {
        let mut seq = IdSequence::resume([1, 2], Some(7));
        assert_eq!(seq.next_id(), 7);

        // A stale mark never moves the sequence behind loaded ids
        let mut seq = IdSequence::resume([1, 9], Some(3));
        assert_eq!(seq.next_id(), 10);

        let seq = IdSequence::resume(Vec::new(), None);
        assert_eq!(seq.peek(), 1);
    }

    #[test]
    fn test_sequence_after_empty() {
        let seq = IdSequence::after(Vec::new());
        assert_eq!(seq.peek(), 1);
    }
}
