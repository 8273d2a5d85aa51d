//! To-do List
//!
//! Plain tasks with a completion flag and an "important" star.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{TODO_NEXT_ID_KEY, TODO_TASKS_KEY};
use crate::domain::{find_by_id, integral_id, remove_by_id, resolve_ids, Completable, Entity, IdSequence, StatusFilter};
use crate::storage::{load_json, save_json, KeyValueStorage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTask {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub important: bool,
}

impl Entity for TodoTask {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Completable for TodoTask {
    fn is_done(&self) -> bool {
        self.completed
    }

    fn set_done(&mut self, done: bool) {
        self.completed = done;
    }
}

/// Stored shape; `important` was added later
#[derive(Debug, Deserialize)]
struct StoredTask {
    #[serde(default)]
    id: Option<Value>,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    important: Option<bool>,
}

pub struct TodoStore<S: KeyValueStorage> {
    storage: S,
    tasks: Vec<TodoTask>,
    ids: IdSequence,
}

impl<S: KeyValueStorage> TodoStore<S> {
    pub fn load(storage: S) -> Self {
        let stored: Vec<StoredTask> = load_json(&storage, TODO_TASKS_KEY).unwrap_or_default();
        let had_data = !stored.is_empty();
        let next_mark: Option<u64> = load_json(&storage, TODO_NEXT_ID_KEY);

        let (ids, reassigned) = resolve_ids(stored.iter().map(|t| t.id.as_ref().and_then(integral_id)).collect());
        let tasks: Vec<TodoTask> = stored
            .into_iter()
            .zip(ids)
            .map(|(t, id)| TodoTask {
                id,
                text: t.text,
                completed: t.completed,
                important: t.important.unwrap_or(false),
            })
            .collect();

        let store = Self {
            ids: IdSequence::resume(tasks.iter().map(|t| t.id), next_mark),
            storage,
            tasks,
        };
        // Rewrite so every record carries `important`
        if had_data {
            if reassigned {
                log::info!("[todo] Reassigned task ids");
            }
            store.persist();
        }
        store
    }

    pub fn tasks(&self) -> &[TodoTask] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&TodoTask> {
        find_by_id(&self.tasks, &id)
    }

    pub fn filter(&self, filter: StatusFilter) -> Vec<&TodoTask> {
        filter.apply(&self.tasks)
    }

    /// Every task done (and at least one task)
    pub fn all_done(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.completed)
    }

    /// French counter line for the current filter
    pub fn counter_text(&self, filter: StatusFilter) -> String {
        fn plural(n: usize) -> &'static str {
            if n > 1 { "s" } else { "" }
        }
        match filter {
            StatusFilter::Active => {
                let n = self.filter(filter).len();
                format!("{} tâche{} active{}", n, plural(n), plural(n))
            }
            StatusFilter::Completed => {
                let n = self.filter(filter).len();
                format!("{} tâche{} terminée{}", n, plural(n), plural(n))
            }
            StatusFilter::All => {
                let active = self.tasks.iter().filter(|t| !t.completed).count();
                format!(
                    "{} tâche{} active{} / {} au total",
                    active,
                    plural(active),
                    plural(active),
                    self.tasks.len()
                )
            }
        }
    }

    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        self.tasks.push(TodoTask {
            id,
            text: text.to_string(),
            completed: false,
            important: false,
        });
        self.persist();
        Some(id)
    }

    pub fn toggle(&mut self, id: u64) -> bool {
        self.update(id, |t| t.toggle_done())
    }

    pub fn toggle_important(&mut self, id: u64) -> bool {
        self.update(id, |t| t.important = !t.important)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        if !remove_by_id(&mut self.tasks, &id) {
            return false;
        }
        self.persist();
        true
    }

    /// No confirmation on this list
    pub fn clear_completed(&mut self) -> bool {
        if !self.tasks.iter().any(|t| t.completed) {
            return false;
        }
        self.tasks.retain(|t| !t.completed);
        self.persist();
        true
    }

    pub fn uncheck_all(&mut self) -> bool {
        if !self.tasks.iter().any(|t| t.completed) {
            return false;
        }
        self.tasks.iter_mut().for_each(|t| t.completed = false);
        self.persist();
        true
    }

    fn update(&mut self, id: u64, mutate: impl FnOnce(&mut TodoTask)) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        mutate(task);
        self.persist();
        true
    }

    fn persist(&self) {
        save_json(&self.storage, TODO_TASKS_KEY, &self.tasks);
        save_json(&self.storage, TODO_NEXT_ID_KEY, &self.ids.peek());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn setup_store() -> (TodoStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (TodoStore::load(storage.clone()), storage)
    }

    #[test]
    fn test_add_and_toggle() {
        let (mut store, _) = setup_store();
        let id = store.add("  Sortir les poubelles ").unwrap();
        assert_eq!(store.get(id).unwrap().text, "Sortir les poubelles");

        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().completed);
        assert!(store.all_done());
    }

    #[test]
    fn test_deleted_id_not_reused_after_reload() {
        let (mut store, storage) = setup_store();
        store.add("a").unwrap();
        let b = store.add("b").unwrap();
        assert!(store.delete(b));

        let mut reloaded = TodoStore::load(storage);
        assert!(reloaded.add("c").unwrap() > b);
    }

    #[test]
    fn test_blank_rejected() {
        let (mut store, _) = setup_store();
        assert_eq!(store.add(" \t "), None);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_toggle_important() {
        let (mut store, _) = setup_store();
        let id = store.add("Appeler le plombier").unwrap();
        assert!(store.toggle_important(id));
        assert!(store.get(id).unwrap().important);
        assert!(!store.toggle_important(404));
    }

    #[test]
    fn test_clear_and_uncheck() {
        let (mut store, _) = setup_store();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.add("c").unwrap();
        assert!(!store.clear_completed());

        store.toggle(a);
        store.toggle(b);
        assert!(store.uncheck_all());
        assert!(!store.uncheck_all());

        store.toggle(a);
        assert!(store.clear_completed());
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn test_counter_text() {
        let (mut store, _) = setup_store();
        let a = store.add("a").unwrap();
        store.add("b").unwrap();
        store.add("c").unwrap();
        store.toggle(a);

        assert_eq!(store.counter_text(StatusFilter::All), "2 tâches actives / 3 au total");
        assert_eq!(store.counter_text(StatusFilter::Active), "2 tâches actives");
        assert_eq!(store.counter_text(StatusFilter::Completed), "1 tâche terminée");
    }

    #[test]
    fn test_migration_adds_important() {
        let storage = MemoryStorage::new();
        storage
            .set_item(TODO_TASKS_KEY, r#"[{"id": 1700000000000, "text": "Courses", "completed": false}]"#)
            .unwrap();

        let store = TodoStore::load(storage.clone());
        assert_eq!(store.tasks()[0].id, 1_700_000_000_000);
        assert!(!store.tasks()[0].important);

        let saved = storage.get_item(TODO_TASKS_KEY).unwrap().unwrap();
        assert!(saved.contains("\"important\":false"));
    }

    #[test]
    fn test_reload_round_trip() {
        let (mut store, storage) = setup_store();
        let id = store.add("Arroser les plantes").unwrap();
        store.toggle_important(id);

        let reloaded = TodoStore::load(storage);
        assert_eq!(reloaded.tasks(), store.tasks());
    }
}
