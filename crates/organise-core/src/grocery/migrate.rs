//! Grocery Schema Decoder
//!
//! Accepts every shape the grocery list has been stored in and normalizes it
//! to `GroceryItem`:
//! - v0: plain strings ("tomates x3")
//! - v1: `{id, text, completed, createdAt}`
//! - v2: `{id, name, qty, category, done, createdAt}`, possibly with fields missing
//!
//! Ids that are not unique non-negative integers (legacy ids were
//! `Date.now() + Math.random()`) are reassigned from a fresh sequence.

use serde::Deserialize;
use serde_json::Value;

use super::category::{categorize, Category};
use super::item::GroceryItem;
use super::quantity::parse_quantity;
use crate::domain::{integral_id, resolve_ids};

/// Any stored record shape
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredGroceryRecord {
    Text(String),
    Record(RawGroceryRecord),
}

/// Union of every object shape's fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGroceryRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    qty: Option<Value>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    done: Option<bool>,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    created_at: Option<Value>,
}

/// Decoded items plus whether anything had to be rewritten
#[derive(Debug, Clone, Default)]
pub struct DecodedItems {
    pub items: Vec<GroceryItem>,
    pub migrated: bool,
}

struct Pending {
    id: Option<u64>,
    item: GroceryItem,
}

fn timestamp(value: Option<&Value>, fallback: i64) -> (i64, bool) {
    match value.and_then(Value::as_f64) {
        Some(ms) => (ms as i64, value.and_then(Value::as_i64).is_none()),
        None => (fallback, true),
    }
}

fn normalize(record: StoredGroceryRecord, now: i64) -> Option<(Pending, bool)> {
    match record {
        StoredGroceryRecord::Text(text) => {
            let parsed = parse_quantity(&text);
            if parsed.name.is_empty() {
                return None;
            }
            let category = categorize(&parsed.name);
            let item = GroceryItem::new(0, parsed.name, parsed.qty, category, now);
            Some((Pending { id: None, item }, true))
        }
        StoredGroceryRecord::Record(raw) => {
            let mut migrated = false;

            // v1 records keep the quantity inside the text
            let (name, parsed_qty) = match (&raw.name, &raw.text) {
                (Some(name), _) if !name.trim().is_empty() => (name.trim().to_string(), None),
                (_, Some(text)) => {
                    migrated = true;
                    let parsed = parse_quantity(text);
                    (parsed.name, Some(parsed.qty))
                }
                _ => return None,
            };
            if name.is_empty() {
                return None;
            }

            let qty = match raw.qty.as_ref().and_then(Value::as_u64) {
                Some(q) if q >= 1 && q <= u32::MAX as u64 => q as u32,
                _ => {
                    migrated = true;
                    parsed_qty.unwrap_or(1)
                }
            };

            let category = match raw.category.as_deref().and_then(Category::from_label) {
                Some(c) => c,
                None => {
                    migrated = true;
                    categorize(&name)
                }
            };

            let done = match (raw.done, raw.completed) {
                (Some(done), _) => done,
                (None, completed) => {
                    migrated = true;
                    completed.unwrap_or(false)
                }
            };

            let (created_at, ts_migrated) = timestamp(raw.created_at.as_ref(), now);
            migrated |= ts_migrated;

            let id = raw.id.as_ref().and_then(integral_id);
            if id.is_none() || raw.id.as_ref().and_then(Value::as_u64).is_none() {
                migrated = true;
            }

            let mut item = GroceryItem::new(0, name, qty, category, created_at);
            item.done = done;
            Some((Pending { id, item }, migrated))
        }
    }
}

/// Normalize stored records, preserving order
///
/// Records without any usable name are dropped.
pub fn decode_items(records: Vec<StoredGroceryRecord>, now: i64) -> DecodedItems {
    let total = records.len();
    let mut migrated = false;
    let mut pending = Vec::with_capacity(total);
    for record in records {
        match normalize(record, now) {
            Some((p, m)) => {
                migrated |= m;
                pending.push(p);
            }
            None => migrated = true,
        }
    }

    let (ids, reassigned) = resolve_ids(pending.iter().map(|p| p.id).collect());
    migrated |= reassigned;

    let items = pending
        .into_iter()
        .zip(ids)
        .map(|(p, id)| GroceryItem { id, ..p.item })
        .collect::<Vec<_>>();

    if items.len() != total {
        log::warn!("[grocery] Dropped {} unreadable record(s)", total - items.len());
    }

    DecodedItems { items, migrated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> DecodedItems {
        let records: Vec<StoredGroceryRecord> = serde_json::from_str(json).unwrap();
        decode_items(records, 42)
    }

    #[test]
    fn test_plain_strings() {
        let decoded = decode(r#"["tomates x3", "savon"]"#);
        assert!(decoded.migrated);
        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.items[0].name, "tomates");
        assert_eq!(decoded.items[0].qty, 3);
        assert_eq!(decoded.items[0].category, Category::FruitsVegetables);
        assert_eq!(decoded.items[1].category, Category::Hygiene);
        assert_eq!(decoded.items[0].created_at, 42);
        assert_ne!(decoded.items[0].id, decoded.items[1].id);
    }

    #[test]
    fn test_text_completed_records() {
        let decoded = decode(
            r#"[{"id": 1700000000000.4567, "text": "2 baguettes", "completed": true, "createdAt": 1700000000000}]"#,
        );
        let item = &decoded.items[0];
        assert!(decoded.migrated);
        assert_eq!(item.name, "baguettes");
        assert_eq!(item.qty, 2);
        assert!(item.done);
        assert_eq!(item.created_at, 1_700_000_000_000);
        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_partial_name_records() {
        let decoded = decode(r#"[{"id": 5, "name": "lait"}]"#);
        let item = &decoded.items[0];
        assert!(decoded.migrated);
        assert_eq!(item.id, 5);
        assert_eq!(item.qty, 1);
        assert_eq!(item.category, Category::Dairy);
        assert!(!item.done);
    }

    #[test]
    fn test_canonical_records_untouched() {
        let decoded = decode(
            r#"[{"id": 3, "name": "café", "qty": 2, "category": "Boissons", "done": false, "createdAt": 10}]"#,
        );
        assert!(!decoded.migrated);
        assert_eq!(decoded.items[0], GroceryItem::new(3, "café".into(), 2, Category::Drinks, 10));
    }

    #[test]
    fn test_manual_category_is_kept() {
        let decoded = decode(
            r#"[{"id": 3, "name": "café", "qty": 1, "category": "Épicerie", "done": false, "createdAt": 10}]"#,
        );
        assert_eq!(decoded.items[0].category, Category::Pantry);
    }

    #[test]
    fn test_duplicate_ids_reassigned() {
        let decoded = decode(
            r#"[
                {"id": 9, "name": "a", "qty": 1, "category": "Divers", "done": false, "createdAt": 1},
                {"id": 9, "name": "b", "qty": 1, "category": "Divers", "done": false, "createdAt": 1}
            ]"#,
        );
        assert!(decoded.migrated);
        assert_eq!(decoded.items[0].id, 9);
        assert_eq!(decoded.items[1].id, 10);
    }

    #[test]
    fn test_nameless_records_dropped() {
        let decoded = decode(r#"[{"id": 1}, {"id": 2, "name": "  "}, "pain"]"#);
        assert_eq!(decoded.items.len(), 1);
        assert_eq!(decoded.items[0].name, "pain");
    }
}
