//! Checklists
//!
//! A list seeded from a template (moving house, holidays...) that can be
//! extended with custom entries and reset back to the template.

use serde::{Deserialize, Serialize};

use crate::config::{checklist_key, checklist_template};
use crate::domain::{CelebrationLatch, Completable, Progress};
use crate::storage::{load_json, save_json, KeyValueStorage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub text: String,
    pub done: bool,
}

impl Completable for ChecklistEntry {
    fn is_done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

fn seed(template: &[&str]) -> Vec<ChecklistEntry> {
    template
        .iter()
        .map(|text| ChecklistEntry { text: text.to_string(), done: false })
        .collect()
}

pub struct Checklist<S: KeyValueStorage> {
    storage: S,
    checklist_type: String,
    template: Vec<String>,
    entries: Vec<ChecklistEntry>,
    celebration: CelebrationLatch,
}

impl<S: KeyValueStorage> Checklist<S> {
    /// Load a checklist using its built-in template
    pub fn load(storage: S, checklist_type: &str) -> Self {
        Self::load_with_template(storage, checklist_type, checklist_template(checklist_type))
    }

    /// Saved entries win over the template
    pub fn load_with_template(storage: S, checklist_type: &str, template: &[&str]) -> Self {
        let entries = load_json(&storage, &checklist_key(checklist_type)).unwrap_or_else(|| seed(template));
        Self {
            storage,
            checklist_type: checklist_type.to_string(),
            template: template.iter().map(|t| t.to_string()).collect(),
            entries,
            celebration: CelebrationLatch::default(),
        }
    }

    pub fn checklist_type(&self) -> &str {
        &self.checklist_type
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.entries)
    }

    /// True exactly once each time the checklist becomes complete
    pub fn take_celebration(&mut self) -> bool {
        let progress = self.progress();
        self.celebration.observe(progress)
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.toggle_done();
        self.persist();
        true
    }

    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.entries.push(ChecklistEntry { text: text.to_string(), done: false });
        self.persist();
        true
    }

    /// Back to the template, custom entries included
    pub fn reset(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if self.entries.is_empty() || !confirm("Réinitialiser toute la checklist ?") {
            return false;
        }
        let template: Vec<&str> = self.template.iter().map(String::as_str).collect();
        self.entries = seed(&template);
        self.celebration.reset();
        self.persist();
        true
    }

    fn persist(&self) {
        save_json(&self.storage, &checklist_key(&self.checklist_type), &self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const TEMPLATE: &[&str] = &["Passeport", "Valise"];

    fn setup() -> (Checklist<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (Checklist::load_with_template(storage.clone(), "test", TEMPLATE), storage)
    }

    #[test]
    fn test_seeded_from_template() {
        let (checklist, storage) = setup();
        assert_eq!(checklist.entries().len(), 2);
        assert!(checklist.entries().iter().all(|e| !e.done));
        // nothing written until the first change
        assert_eq!(storage.get_item("checklist_test").unwrap(), None);
    }

    #[test]
    fn test_builtin_templates() {
        let checklist = Checklist::load(MemoryStorage::new(), "vacances");
        assert!(!checklist.entries().is_empty());
        let unknown = Checklist::load(MemoryStorage::new(), "inconnue");
        assert!(unknown.entries().is_empty());
    }

    #[test]
    fn test_toggle_and_progress() {
        let (mut checklist, _) = setup();
        assert!(checklist.toggle(0));
        assert_eq!(checklist.progress().percent(), 50);
        assert!(!checklist.toggle(7));
    }

    #[test]
    fn test_add_rejects_blank() {
        let (mut checklist, _) = setup();
        assert!(!checklist.add("   "));
        assert!(checklist.add(" Adaptateur "));
        assert_eq!(checklist.entries()[2].text, "Adaptateur");
    }

    #[test]
    fn test_celebration_fires_once_and_rearms() {
        let (mut checklist, _) = setup();
        checklist.toggle(0);
        assert!(!checklist.take_celebration());

        checklist.toggle(1);
        assert!(checklist.take_celebration());
        assert!(!checklist.take_celebration());

        checklist.toggle(1);
        assert!(!checklist.take_celebration());
        checklist.toggle(1);
        assert!(checklist.take_celebration());
    }

    #[test]
    fn test_reset_restores_template() {
        let (mut checklist, _) = setup();
        checklist.add("Adaptateur");
        checklist.toggle(0);
        checklist.toggle(1);
        checklist.toggle(2);
        assert!(checklist.take_celebration());

        assert!(!checklist.reset(|_| false));
        assert_eq!(checklist.entries().len(), 3);

        assert!(checklist.reset(|_| true));
        assert_eq!(checklist.entries().len(), 2);
        assert_eq!(checklist.progress().done, 0);

        // Completing again celebrates again
        checklist.toggle(0);
        checklist.toggle(1);
        assert!(checklist.take_celebration());
    }

    #[test]
    fn test_reset_empty_is_noop() {
        let mut checklist = Checklist::load_with_template(MemoryStorage::new(), "vide", &[]);
        let mut asked = false;
        assert!(!checklist.reset(|_| {
            asked = true;
            true
        }));
        assert!(!asked);
    }

    #[test]
    fn test_reload_keeps_saved_entries() {
        let (mut checklist, storage) = setup();
        checklist.add("Adaptateur");
        checklist.toggle(2);

        let reloaded = Checklist::load_with_template(storage, "test", TEMPLATE);
        assert_eq!(reloaded.entries(), checklist.entries());
    }
}
