//! Grocery Item Entity

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::domain::{Completable, Entity};

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Unique identifier, never reused
    pub id: u64,
    /// Name without quantity
    pub name: String,
    /// Always >= 1
    pub qty: u32,
    pub category: Category,
    /// Bought
    pub done: bool,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl GroceryItem {
    pub fn new(id: u64, name: String, qty: u32, category: Category, created_at: i64) -> Self {
        Self {
            id,
            name,
            qty: qty.max(1),
            category,
            done: false,
            created_at,
        }
    }

    /// "tomates × 3", or just the name for a single unit
    pub fn display_label(&self) -> String {
        if self.qty > 1 {
            format!("{} × {}", self.name, self.qty)
        } else {
            self.name.clone()
        }
    }
}

impl Entity for GroceryItem {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Completable for GroceryItem {
    fn is_done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = GroceryItem::new(1, "tomates".to_string(), 3, Category::FruitsVegetables, 0);
        assert_eq!(item.id(), 1);
        assert!(!item.done);
        assert_eq!(item.display_label(), "tomates × 3");
    }

    #[test]
    fn test_quantity_floor() {
        let item = GroceryItem::new(1, "pain".to_string(), 0, Category::Pantry, 0);
        assert_eq!(item.qty, 1);
        assert_eq!(item.display_label(), "pain");
    }

    #[test]
    fn test_serialized_field_names() {
        let item = GroceryItem::new(7, "café".to_string(), 2, Category::Drinks, 1_700_000_000_000);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["qty"], 2);
        assert_eq!(json["category"], "Boissons");
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
    }
}
