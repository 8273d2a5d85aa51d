//! Domain Layer
//!
//! Abstractions shared by every widget store.
//! This layer has no dependency on storage or on the DOM.

mod entity;
mod filter;
mod progress;

pub use entity::{find_by_id, integral_id, now_millis, remove_by_id, resolve_ids, Completable, Entity, IdSequence};
pub use filter::StatusFilter;
pub use progress::{CelebrationLatch, Progress};
