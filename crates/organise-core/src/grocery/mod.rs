//! Grocery List
//!
//! Free-text entries are split into a name and a quantity, auto-categorized,
//! and kept in insertion order. Display groups them by category.

mod quantity;
mod category;
mod item;
mod history;
mod migrate;
mod store;

#[cfg(test)]
mod tests;

pub use quantity::{parse_quantity, ParsedEntry};
pub use category::{categorize, Category};
pub use item::GroceryItem;
pub use history::NameHistory;
pub use migrate::{decode_items, DecodedItems, RawGroceryRecord, StoredGroceryRecord};
pub use store::{GroceryCommand, GroceryStore};
