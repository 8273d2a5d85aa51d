//! Completion Progress
//!
//! Counter and percentage shown by the grocery list and checklists.

use super::entity::Completable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn of<T: Completable>(records: &[T]) -> Self {
        Self {
            done: records.iter().filter(|r| r.is_done()).count(),
            total: records.len(),
        }
    }

    /// Rounded percentage, 0 for an empty list
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.done as f64 / self.total as f64) * 100.0).round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

/// Fires once when progress reaches 100%, re-arms when it drops below.
#[derive(Debug, Clone, Copy, Default)]
pub struct CelebrationLatch {
    fired: bool,
}

impl CelebrationLatch {
    /// Returns true exactly on the transition into "complete"
    pub fn observe(&mut self, progress: Progress) -> bool {
        if progress.percent() == 100 {
            if self.fired {
                return false;
            }
            self.fired = true;
            true
        } else {
            self.fired = false;
            false
        }
    }

    pub fn reset(&mut self) {
        self.fired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounding() {
        assert_eq!(Progress { done: 1, total: 3 }.percent(), 33);
        assert_eq!(Progress { done: 2, total: 3 }.percent(), 67);
        assert_eq!(Progress { done: 0, total: 0 }.percent(), 0);
        assert_eq!(Progress { done: 1, total: 1 }.percent(), 100);
    }

    #[test]
    fn test_latch_fires_once_and_rearms() {
        let mut latch = CelebrationLatch::default();
        let full = Progress { done: 2, total: 2 };
        let half = Progress { done: 1, total: 2 };

        assert!(latch.observe(full));
        assert!(!latch.observe(full));
        assert!(!latch.observe(half));
        assert!(latch.observe(full));
    }
}
