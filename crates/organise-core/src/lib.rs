//! Organise-Moi Core
//!
//! Layered architecture:
//! - domain: Entity trait, identifiers, filters and progress shared by every widget
//! - storage: Key-value persistence abstraction (browser local storage or in-memory)
//! - one module per widget: grocery, todo, chores, planning, gifts, checklist
//!
//! Nothing in this crate touches the DOM, so every widget can be tested natively.

pub mod config;
pub mod error;
pub mod domain;
pub mod storage;

pub mod grocery;
pub mod todo;
pub mod chores;
pub mod planning;
pub mod gifts;
pub mod checklist;

pub use error::{Error, Result};
