//! Storage Layer
//!
//! Key-value persistence abstraction. The browser's local storage implements
//! it in the UI crate; `MemoryStorage` backs tests.

mod traits;
mod memory;
mod json;

pub use traits::KeyValueStorage;
pub use memory::MemoryStorage;
pub use json::{load_json, load_raw, save_json, save_raw};
