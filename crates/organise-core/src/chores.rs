//! Household Chores
//!
//! Chores assigned to household members, with a recurrence label and a
//! weekly reset. Member names are normalized and kept in a shared roster.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{CHORES_KEY, CHORES_NEXT_ID_KEY, PEOPLE_KEY};
use crate::domain::{find_by_id, integral_id, remove_by_id, resolve_ids, Completable, Entity, IdSequence, StatusFilter};
use crate::error::{Error, Result};
use crate::storage::{load_json, save_json, KeyValueStorage};

/// How often a chore comes back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    #[default]
    Once,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly, Frequency::Once];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Once => "once",
        }
    }

    /// Unknown values fall back to `Once`
    pub fn from_str(s: &str) -> Self {
        match s {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "monthly" => Frequency::Monthly,
            _ => Frequency::Once,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Quotidien",
            Frequency::Weekly => "Hebdomadaire",
            Frequency::Monthly => "Mensuel",
            Frequency::Once => "Ponctuel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreTask {
    pub id: u64,
    pub task: String,
    pub person: String,
    pub completed: bool,
    pub frequency: Frequency,
}

impl Entity for ChoreTask {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Completable for ChoreTask {
    fn is_done(&self) -> bool {
        self.completed
    }

    fn set_done(&mut self, done: bool) {
        self.completed = done;
    }
}

#[derive(Debug, Deserialize)]
struct StoredChore {
    #[serde(default)]
    id: Option<Value>,
    task: String,
    #[serde(default)]
    person: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    frequency: Option<String>,
}

/// "  jean-PIERRE  dupont" -> "Jean-pierre Dupont"
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Person filter: everyone or one member
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonFilter {
    #[default]
    Everyone,
    Person(String),
}

impl PersonFilter {
    fn matches(&self, chore: &ChoreTask) -> bool {
        match self {
            PersonFilter::Everyone => true,
            PersonFilter::Person(name) => chore.person == *name,
        }
    }
}

pub struct ChoreStore<S: KeyValueStorage> {
    storage: S,
    chores: Vec<ChoreTask>,
    people: Vec<String>,
    ids: IdSequence,
}

impl<S: KeyValueStorage> ChoreStore<S> {
    pub fn load(storage: S) -> Self {
        let stored: Vec<StoredChore> = load_json(&storage, CHORES_KEY).unwrap_or_default();
        let people: Vec<String> = load_json(&storage, PEOPLE_KEY).unwrap_or_default();
        let had_chores = !stored.is_empty();
        let next_mark: Option<u64> = load_json(&storage, CHORES_NEXT_ID_KEY);

        let (ids, _) = resolve_ids(stored.iter().map(|c| c.id.as_ref().and_then(integral_id)).collect());
        let chores: Vec<ChoreTask> = stored
            .into_iter()
            .zip(ids)
            .map(|(c, id)| {
                let normalized = normalize_name(&c.person);
                ChoreTask {
                    id,
                    task: c.task,
                    person: if normalized.is_empty() { c.person } else { normalized },
                    completed: c.completed,
                    frequency: c.frequency.as_deref().map(Frequency::from_str).unwrap_or_default(),
                }
            })
            .collect();

        let mut store = Self {
            ids: IdSequence::resume(chores.iter().map(|c| c.id), next_mark),
            storage,
            chores,
            people: Vec::new(),
        };

        let mut roster: Vec<String> = people.iter().map(|p| normalize_name(p)).filter(|p| !p.is_empty()).collect();
        roster.extend(store.chores.iter().map(|c| c.person.clone()).filter(|p| !p.is_empty()));
        roster.sort();
        roster.dedup();
        let roster_changed = roster != people;
        store.people = roster;

        if had_chores {
            store.persist();
        }
        if roster_changed {
            store.persist_people();
        }
        store
    }

    pub fn chores(&self) -> &[ChoreTask] {
        &self.chores
    }

    pub fn get(&self, id: u64) -> Option<&ChoreTask> {
        find_by_id(&self.chores, &id)
    }

    /// Sorted roster of normalized names
    pub fn people(&self) -> &[String] {
        &self.people
    }

    pub fn filter(&self, status: StatusFilter, person: &PersonFilter) -> Vec<&ChoreTask> {
        self.chores
            .iter()
            .filter(|c| status.matches(*c) && person.matches(c))
            .collect()
    }

    pub fn all_done(&self) -> bool {
        !self.chores.is_empty() && self.chores.iter().all(|c| c.completed)
    }

    /// Both fields are required
    pub fn add(&mut self, task: &str, person: &str, frequency: Frequency) -> Result<u64> {
        let task = task.trim();
        let person = normalize_name(person);
        if task.is_empty() || person.is_empty() {
            return Err(Error::InvalidInput("Veuillez remplir les deux champs.".to_string()));
        }

        self.add_person(&person);
        let id = self.ids.next_id();
        self.chores.push(ChoreTask {
            id,
            task: task.to_string(),
            person,
            completed: false,
            frequency,
        });
        self.persist();
        Ok(id)
    }

    /// Add a member to the roster if new. Returns the normalized name.
    pub fn add_person(&mut self, name: &str) -> String {
        let normalized = normalize_name(name);
        if normalized.is_empty() || self.people.contains(&normalized) {
            return normalized;
        }
        self.people.push(normalized.clone());
        self.people.sort();
        self.persist_people();
        normalized
    }

    pub fn toggle(&mut self, id: u64) -> bool {
        let Some(chore) = self.chores.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        chore.toggle_done();
        self.persist();
        true
    }

    pub fn delete(&mut self, id: u64) -> bool {
        if !remove_by_id(&mut self.chores, &id) {
            return false;
        }
        self.persist();
        true
    }

    pub fn clear_completed(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        let completed = self.chores.iter().filter(|c| c.completed).count();
        if completed == 0 {
            return false;
        }
        let message = format!("Êtes-vous sûr de vouloir supprimer {} tâche(s) terminée(s) ?", completed);
        if !confirm(&message) {
            return false;
        }
        self.chores.retain(|c| !c.completed);
        self.persist();
        true
    }

    /// Put every completed chore back to "to do"
    ///
    /// Errors when nothing is completed, so the UI can tell the user.
    pub fn reset_week(&mut self, confirm: impl FnOnce(&str) -> bool) -> Result<bool> {
        let completed = self.chores.iter().filter(|c| c.completed).count();
        if completed == 0 {
            return Err(Error::InvalidInput("Aucune tâche terminée à réinitialiser.".to_string()));
        }
        let message = format!(
            "Réinitialiser la semaine ? Toutes les tâches terminées ({}) seront remises à \"À faire\".",
            completed
        );
        if !confirm(&message) {
            return Ok(false);
        }
        self.chores.iter_mut().for_each(|c| c.completed = false);
        self.persist();
        Ok(true)
    }

    fn persist(&self) {
        save_json(&self.storage, CHORES_KEY, &self.chores);
        save_json(&self.storage, CHORES_NEXT_ID_KEY, &self.ids.peek());
    }

    fn persist_people(&self) {
        save_json(&self.storage, PEOPLE_KEY, &self.people);
    }
}
