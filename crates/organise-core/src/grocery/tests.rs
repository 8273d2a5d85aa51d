//! Grocery Store Integration Tests
//!
//! Exercises the store over `MemoryStorage`, reloading from the same storage
//! to check persistence.

use super::*;
use crate::config::{GROCERY_HISTORY_KEY, GROCERY_ITEMS_KEY, GROCERY_LEGACY_KEY, GROCERY_STORE_MODE_KEY};
use crate::domain::StatusFilter;
use crate::storage::{KeyValueStorage, MemoryStorage};

fn setup_store() -> (GroceryStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (GroceryStore::load(storage.clone()), storage)
}

fn yes(_: &str) -> bool {
    true
}

fn no(_: &str) -> bool {
    false
}

#[test]
fn test_add_parses_and_categorizes() {
    let (mut store, _) = setup_store();

    let id = store.add("café x2").expect("item added");
    let item = store.get(id).unwrap();

    assert_eq!(item.name, "café");
    assert_eq!(item.qty, 2);
    assert_eq!(item.category, Category::Drinks);
    assert!(!item.done);
}

#[test]
fn test_single_item_progress_after_toggle() {
    let (mut store, _) = setup_store();
    let id = store.add("café x2").unwrap();

    assert!(store.toggle_done(id));
    assert!(store.get(id).unwrap().done);
    assert_eq!(store.progress().percent(), 100);
    assert_eq!(store.counter_text(), "Achetés : 1 / Total : 1");
}

#[test]
fn test_toggle_twice_restores() {
    let (mut store, _) = setup_store();
    let id = store.add("pain").unwrap();
    let original = store.get(id).cloned();

    store.toggle_done(id);
    store.toggle_done(id);

    assert_eq!(store.get(id).cloned(), original);
}

#[test]
fn test_blank_input_rejected() {
    let (mut store, storage) = setup_store();

    assert_eq!(store.add("   "), None);
    assert!(store.items().is_empty());
    assert_eq!(storage.get_item(GROCERY_ITEMS_KEY).unwrap(), None);
}

#[test]
fn test_unknown_id_is_noop() {
    let (mut store, _) = setup_store();
    store.add("pain").unwrap();
    let before = store.items().to_vec();

    assert!(!store.delete(999));
    assert!(!store.toggle_done(999));
    assert!(!store.set_category(999, Category::Pantry));
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_ids_unique_and_never_reused() {
    let (mut store, _) = setup_store();
    let a = store.add("pain").unwrap();
    let b = store.add("lait").unwrap();
    store.delete(b);
    let c = store.add("beurre").unwrap();

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_history_is_recorded_without_quantity() {
    let (mut store, storage) = setup_store();
    store.add("tomates x3");
    store.add("Tomates (2)");

    assert_eq!(store.history().names(), &["tomates".to_string()]);
    let saved: Vec<String> = serde_json::from_str(&storage.get_item(GROCERY_HISTORY_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(saved, vec!["tomates".to_string()]);
    assert_eq!(store.suggestions("tom"), vec!["tomates"]);
}

#[test]
fn test_clear_completed_requires_confirmation() {
    let (mut store, _) = setup_store();
    let a = store.add("pain").unwrap();
    store.add("lait").unwrap();
    store.toggle_done(a);

    assert!(!store.clear_completed(no));
    assert_eq!(store.items().len(), 2);

    let mut asked = String::new();
    assert!(store.clear_completed(|msg| {
        asked = msg.to_string();
        true
    }));
    assert_eq!(asked, "Supprimer 1 article(s) acheté(s) ?");
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].name, "lait");
}

#[test]
fn test_clear_completed_without_completed_is_noop() {
    let (mut store, _) = setup_store();
    store.add("pain").unwrap();

    let mut asked = false;
    assert!(!store.clear_completed(|_| {
        asked = true;
        true
    }));
    assert!(!asked);
    assert_eq!(store.items().len(), 1);
}

#[test]
fn test_clear_all() {
    let (mut store, _) = setup_store();
    assert!(!store.clear_all(yes));

    store.add("pain").unwrap();
    store.add("lait").unwrap();
    assert!(!store.clear_all(no));
    assert!(store.clear_all(yes));
    assert!(store.items().is_empty());
}

#[test]
fn test_uncheck_all() {
    let (mut store, _) = setup_store();
    let a = store.add("pain").unwrap();
    let b = store.add("lait").unwrap();
    assert!(!store.uncheck_all());

    store.toggle_done(a);
    store.toggle_done(b);
    assert!(store.uncheck_all());
    assert!(store.items().iter().all(|item| !item.done));
}

#[test]
fn test_filter_does_not_mutate() {
    let (mut store, _) = setup_store();
    let a = store.add("pain").unwrap();
    store.add("lait").unwrap();
    store.toggle_done(a);

    assert_eq!(store.filter(StatusFilter::Active).len(), 1);
    assert_eq!(store.filter(StatusFilter::Completed).len(), 1);
    assert_eq!(store.filter(StatusFilter::All).len(), 2);
    assert_eq!(store.items().len(), 2);
}

#[test]
fn test_set_category_and_rename() {
    let (mut store, _) = setup_store();
    let id = store.add("gadget improbable").unwrap();
    assert_eq!(store.get(id).unwrap().category, Category::Other);

    assert!(store.set_category(id, Category::Household));
    assert!(store.rename(id, "gadget improbable x4"));

    let item = store.get(id).unwrap();
    assert_eq!(item.category, Category::Household);
    assert_eq!(item.name, "gadget improbable");
    assert_eq!(item.qty, 4);
    assert!(!store.rename(id, "   "));
}

#[test]
fn test_grouped_follows_category_order() {
    let (mut store, _) = setup_store();
    store.add("savon");
    store.add("tomates");
    store.add("gadget");
    store.add("pommes");

    let groups = store.grouped(StatusFilter::All);
    let order: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(order, vec![Category::FruitsVegetables, Category::Hygiene, Category::Other]);
    // insertion order inside a group
    assert_eq!(groups[0].1[0].name, "tomates");
    assert_eq!(groups[0].1[1].name, "pommes");
}

#[test]
fn test_store_mode_orders_remaining_first_and_persists() {
    let (mut store, storage) = setup_store();
    let tomatoes = store.add("tomates").unwrap();
    store.add("pommes").unwrap();
    store.toggle_done(tomatoes);

    assert!(store.toggle_store_mode());
    assert_eq!(storage.get_item(GROCERY_STORE_MODE_KEY).unwrap().as_deref(), Some("1"));

    let groups = store.grouped(StatusFilter::All);
    assert_eq!(groups[0].1[0].name, "pommes");
    // underlying order untouched
    assert_eq!(store.items()[0].name, "tomates");

    let reloaded = GroceryStore::load(storage);
    assert!(reloaded.store_mode());
}

#[test]
fn test_reload_round_trip() {
    let (mut store, storage) = setup_store();
    let a = store.add("café x2").unwrap();
    store.add("3 tomates").unwrap();
    store.toggle_done(a);

    let reloaded = GroceryStore::load(storage);
    assert_eq!(reloaded.items(), store.items());
    assert_eq!(reloaded.history(), store.history());
}

#[test]
fn test_ids_continue_after_reload() {
    let (mut store, storage) = setup_store();
    let a = store.add("pain").unwrap();
    let b = store.add("lait").unwrap();

    let mut reloaded = GroceryStore::load(storage);
    let c = reloaded.add("beurre").unwrap();
    assert!(c > a && c > b);
}

#[test]
fn test_deleted_id_not_reused_after_reload() {
    let (mut store, storage) = setup_store();
    store.add("pain").unwrap();
    let lait = store.add("lait").unwrap();
    assert!(store.delete(lait));

    let mut reloaded = GroceryStore::load(storage);
    let beurre = reloaded.add("beurre").unwrap();
    assert_ne!(beurre, lait);
    assert!(beurre > lait);
}

#[test]
fn test_malformed_storage_starts_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(GROCERY_ITEMS_KEY, "[{broken").unwrap();
    storage.set_item(GROCERY_HISTORY_KEY, "42").unwrap();

    let store = GroceryStore::load(storage);
    assert!(store.items().is_empty());
    assert!(store.history().names().is_empty());
}

#[test]
fn test_legacy_key_migrated_and_removed() {
    let storage = MemoryStorage::new();
    storage
        .set_item(GROCERY_LEGACY_KEY, r#"["tomates x3", {"text": "lait", "completed": true}]"#)
        .unwrap();

    let store = GroceryStore::load(storage.clone());
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.items()[0].qty, 3);
    assert!(store.items()[1].done);
    assert_eq!(store.items()[1].category, Category::Dairy);
    assert_eq!(storage.get_item(GROCERY_LEGACY_KEY).unwrap(), None);

    // rewritten in the current shape
    let saved = storage.get_item(GROCERY_ITEMS_KEY).unwrap().unwrap();
    assert!(saved.contains("\"qty\":3"));
    assert!(saved.contains("\"createdAt\""));
}

#[test]
fn test_apply_dispatches_commands() {
    let (mut store, _) = setup_store();
    assert!(store.apply(GroceryCommand::Add("riz".into()), yes));
    let id = store.items()[0].id;

    assert!(store.apply(GroceryCommand::ToggleDone(id), yes));
    assert!(store.apply(GroceryCommand::ClearCompleted, yes));
    assert!(store.items().is_empty());
    assert!(!store.apply(GroceryCommand::Delete(id), yes));
}
