//! Grocery Item Store
//!
//! Owns the list, the name history and the store-mode flag. Every mutation
//! writes the full snapshot back to storage before returning.

use super::category::{categorize, Category};
use super::history::NameHistory;
use super::item::GroceryItem;
use super::migrate::{decode_items, StoredGroceryRecord};
use super::quantity::parse_quantity;
use crate::config::{
    GROCERY_HISTORY_KEY, GROCERY_ITEMS_KEY, GROCERY_LEGACY_KEY, GROCERY_NEXT_ID_KEY, GROCERY_STORE_MODE_KEY,
};
use crate::domain::{find_by_id, now_millis, remove_by_id, Completable, IdSequence, Progress, StatusFilter};
use crate::storage::{load_json, load_raw, save_json, save_raw, KeyValueStorage};

/// One user action on the grocery list
#[derive(Debug, Clone, PartialEq)]
pub enum GroceryCommand {
    Add(String),
    ToggleDone(u64),
    SetCategory(u64, Category),
    Rename(u64, String),
    Delete(u64),
    ClearCompleted,
    ClearAll,
    UncheckAll,
    ToggleStoreMode,
}

pub struct GroceryStore<S: KeyValueStorage> {
    storage: S,
    items: Vec<GroceryItem>,
    history: NameHistory,
    store_mode: bool,
    ids: IdSequence,
}

impl<S: KeyValueStorage> GroceryStore<S> {
    /// Load from storage, migrating legacy data on the way
    pub fn load(storage: S) -> Self {
        let now = now_millis();

        let current: Option<Vec<StoredGroceryRecord>> = load_json(&storage, GROCERY_ITEMS_KEY);
        let legacy: Option<Vec<StoredGroceryRecord>> = load_json(&storage, GROCERY_LEGACY_KEY);

        let (records, from_legacy) = match (current, legacy) {
            (Some(current), _) if !current.is_empty() => (current, false),
            (_, Some(legacy)) if !legacy.is_empty() => (legacy, true),
            (current, _) => (current.unwrap_or_default(), false),
        };

        let decoded = decode_items(records, now);
        let history = NameHistory::from_names(
            load_json::<Vec<String>, _>(&storage, GROCERY_HISTORY_KEY).unwrap_or_default(),
        );
        let store_mode = load_raw(&storage, GROCERY_STORE_MODE_KEY).as_deref() == Some("1");
        let ids = IdSequence::resume(decoded.items.iter().map(|i| i.id), load_json(&storage, GROCERY_NEXT_ID_KEY));

        let store = Self {
            storage,
            items: decoded.items,
            history,
            store_mode,
            ids,
        };

        if from_legacy || decoded.migrated {
            log::info!("[grocery] Migrated {} item(s) to the current format", store.items.len());
            store.persist();
        }
        if load_raw(&store.storage, GROCERY_LEGACY_KEY).is_some() {
            if let Err(e) = store.storage.remove_item(GROCERY_LEGACY_KEY) {
                log::error!("[grocery] Failed to remove legacy key: {}", e);
            }
        }

        log::debug!("[grocery] Loaded {} item(s), store mode {}", store.items.len(), store.store_mode);
        store
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&GroceryItem> {
        find_by_id(&self.items, &id)
    }

    pub fn history(&self) -> &NameHistory {
        &self.history
    }

    pub fn store_mode(&self) -> bool {
        self.store_mode
    }

    pub fn filter(&self, filter: StatusFilter) -> Vec<&GroceryItem> {
        filter.apply(&self.items)
    }

    /// Filtered items grouped by category, in category display order
    ///
    /// In store mode, items still to buy come first inside each group.
    pub fn grouped(&self, filter: StatusFilter) -> Vec<(Category, Vec<&GroceryItem>)> {
        let visible = self.filter(filter);
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let mut group: Vec<&GroceryItem> =
                    visible.iter().copied().filter(|item| item.category == category).collect();
                if group.is_empty() {
                    return None;
                }
                if self.store_mode {
                    group.sort_by_key(|item| item.done);
                }
                Some((category, group))
            })
            .collect()
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }

    /// "Achetés : 1 / Total : 3"
    pub fn counter_text(&self) -> String {
        let progress = self.progress();
        format!("Achetés : {} / Total : {}", progress.done, progress.total)
    }

    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        self.history.suggestions(input)
    }

    // ========================
    // Mutations
    // ========================

    /// Add an entry from raw text. Returns the new id, `None` for blank input.
    pub fn add(&mut self, raw: &str) -> Option<u64> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let parsed = parse_quantity(text);
        let category = categorize(&parsed.name);
        let id = self.ids.next_id();
        let item = GroceryItem::new(id, parsed.name.clone(), parsed.qty, category, now_millis());
        log::debug!("[grocery] Added #{} '{}' x{} in {}", id, item.name, item.qty, category);
        self.items.push(item);

        if self.history.remember(&parsed.name) {
            save_json(&self.storage, GROCERY_HISTORY_KEY, &self.history);
        }
        self.persist();
        Some(id)
    }

    pub fn toggle_done(&mut self, id: u64) -> bool {
        self.update(id, |item| item.toggle_done())
    }

    /// Manual category override
    pub fn set_category(&mut self, id: u64, category: Category) -> bool {
        self.update(id, |item| item.category = category)
    }

    /// Replace name and quantity from new raw text; category is left alone
    pub fn rename(&mut self, id: u64, raw: &str) -> bool {
        let parsed = parse_quantity(raw);
        if parsed.name.is_empty() {
            return false;
        }
        self.update(id, |item| {
            item.name = parsed.name;
            item.qty = parsed.qty;
        })
    }

    pub fn delete(&mut self, id: u64) -> bool {
        if !remove_by_id(&mut self.items, &id) {
            return false;
        }
        self.persist();
        true
    }

    /// Remove bought items after confirmation
    pub fn clear_completed(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        let completed = self.items.iter().filter(|item| item.done).count();
        if completed == 0 {
            return false;
        }
        if !confirm(&format!("Supprimer {} article(s) acheté(s) ?", completed)) {
            return false;
        }
        self.items.retain(|item| !item.done);
        self.persist();
        true
    }

    /// Empty the list after confirmation
    pub fn clear_all(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if !confirm("Supprimer tous les articles ? Cette action est irréversible.") {
            return false;
        }
        self.items.clear();
        self.persist();
        true
    }

    pub fn uncheck_all(&mut self) -> bool {
        if !self.items.iter().any(|item| item.done) {
            return false;
        }
        for item in self.items.iter_mut() {
            item.done = false;
        }
        self.persist();
        true
    }

    pub fn toggle_store_mode(&mut self) -> bool {
        self.store_mode = !self.store_mode;
        save_raw(&self.storage, GROCERY_STORE_MODE_KEY, if self.store_mode { "1" } else { "0" });
        self.store_mode
    }

    /// Dispatch one user action. Returns whether the list or flag changed.
    pub fn apply(&mut self, command: GroceryCommand, confirm: impl FnOnce(&str) -> bool) -> bool {
        match command {
            GroceryCommand::Add(raw) => self.add(&raw).is_some(),
            GroceryCommand::ToggleDone(id) => self.toggle_done(id),
            GroceryCommand::SetCategory(id, category) => self.set_category(id, category),
            GroceryCommand::Rename(id, raw) => self.rename(id, &raw),
            GroceryCommand::Delete(id) => self.delete(id),
            GroceryCommand::ClearCompleted => self.clear_completed(confirm),
            GroceryCommand::ClearAll => self.clear_all(confirm),
            GroceryCommand::UncheckAll => self.uncheck_all(),
            GroceryCommand::ToggleStoreMode => {
                self.toggle_store_mode();
                true
            }
        }
    }

    fn update(&mut self, id: u64, mutate: impl FnOnce(&mut GroceryItem)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        mutate(item);
        self.persist();
        true
    }

    fn persist(&self) {
        save_json(&self.storage, GROCERY_ITEMS_KEY, &self.items);
        save_json(&self.storage, GROCERY_NEXT_ID_KEY, &self.ids.peek());
    }
}
