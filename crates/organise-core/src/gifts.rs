//! Collective Gift Coordination
//!
//! One event (birthday, farewell...) with participants and gift ideas.
//! Each idea is reserved by at most one participant; a participant may hold
//! several ideas only after an explicit confirmation.
//!
//! Events are exchanged between people as exported JSON files.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{gift_event_key, GIFT_EVENT_ID_LEN};
use crate::error::{Error, Result};
use crate::storage::{load_json, save_json, KeyValueStorage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftIdea {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Participant id
    #[serde(default)]
    pub reserved_by: Option<String>,
}

impl GiftIdea {
    /// "12.50 €"
    pub fn price_label(&self) -> Option<String> {
        self.price.filter(|p| *p > 0.0).map(|p| format!("{:.2} €", p))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftEvent {
    pub id: String,
    pub title: String,
    /// YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub ideas: Vec<GiftIdea>,
}

/// Random 8-character event id
pub fn generate_event_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(GIFT_EVENT_ID_LEN);
    id
}

/// Next "p3"/"i7"-style id after every existing one with that prefix
fn next_prefixed_id<'a>(prefix: char, existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", prefix, max + 1)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl GiftEvent {
    pub fn new(id: String, title: &str, date: Option<&str>, description: Option<&str>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("Le titre est obligatoire".to_string()));
        }
        Ok(Self {
            id,
            title: title.to_string(),
            date: non_blank(date),
            description: non_blank(description),
            participants: Vec::new(),
            ideas: Vec::new(),
        })
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn idea(&self, id: &str) -> Option<&GiftIdea> {
        self.ideas.iter().find(|i| i.id == id)
    }

    /// Who holds an idea, if anyone
    pub fn reserver_of(&self, idea: &GiftIdea) -> Option<&Participant> {
        idea.reserved_by.as_deref().and_then(|pid| self.participant(pid))
    }

    fn find_participant_by_name(&self, name: &str) -> Option<&Participant> {
        let lower = name.trim().to_lowercase();
        self.participants.iter().find(|p| p.name.to_lowercase() == lower)
    }

    /// Names are unique regardless of case. Returns the new participant id.
    pub fn add_participant(&mut self, name: &str) -> Result<Option<String>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if self.find_participant_by_name(name).is_some() {
            return Err(Error::Conflict("Ce participant existe déjà".to_string()));
        }
        let id = next_prefixed_id('p', self.participants.iter().map(|p| p.id.as_str()));
        self.participants.push(Participant { id: id.clone(), name: name.to_string() });
        Ok(Some(id))
    }

    /// Remove a participant and release everything they reserved
    pub fn remove_participant(&mut self, participant_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != participant_id);
        if self.participants.len() == before {
            return false;
        }
        for idea in self.ideas.iter_mut() {
            if idea.reserved_by.as_deref() == Some(participant_id) {
                idea.reserved_by = None;
            }
        }
        true
    }

    pub fn add_idea(&mut self, title: &str, price: Option<f64>, comment: Option<&str>) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("Le nom du cadeau est obligatoire".to_string()));
        }
        let id = next_prefixed_id('i', self.ideas.iter().map(|i| i.id.as_str()));
        self.ideas.push(GiftIdea {
            id: id.clone(),
            title: title.to_string(),
            comment: non_blank(comment),
            price: price.filter(|p| p.is_finite()),
            reserved_by: None,
        });
        Ok(id)
    }

    pub fn remove_idea(&mut self, idea_id: &str) -> bool {
        let before = self.ideas.len();
        self.ideas.retain(|i| i.id != idea_id);
        self.ideas.len() != before
    }

    /// Reserve a free idea, or release a reserved one
    ///
    /// `ask_name` receives the prompt listing participants and returns the
    /// typed name (`None` cancels). `confirm` is asked when that participant
    /// already holds another idea. Returns whether the idea changed.
    pub fn toggle_reservation(
        &mut self,
        idea_id: &str,
        ask_name: impl FnOnce(&str) -> Option<String>,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool> {
        if self.participants.is_empty() {
            return Err(Error::InvalidInput("Ajoutez d'abord au moins un participant".to_string()));
        }
        let Some(index) = self.ideas.iter().position(|i| i.id == idea_id) else {
            return Ok(false);
        };

        if self.ideas[index].reserved_by.is_some() {
            self.ideas[index].reserved_by = None;
            return Ok(true);
        }

        let names: Vec<&str> = self.participants.iter().map(|p| p.name.as_str()).collect();
        let prompt = format!("Qui s'occupe de ce cadeau ?\n\nParticipants: {}", names.join(", "));
        let Some(typed) = ask_name(&prompt).filter(|n| !n.trim().is_empty()) else {
            return Ok(false);
        };

        let Some(participant) = self.find_participant_by_name(&typed).cloned() else {
            return Err(Error::NotFound(
                "Participant non trouvé. Utilisez exactement le nom affiché.".to_string(),
            ));
        };

        let holds_another = self
            .ideas
            .iter()
            .any(|i| i.id != idea_id && i.reserved_by.as_deref() == Some(participant.id.as_str()));
        if holds_another
            && !confirm(&format!("{} a déjà réservé un cadeau. Continuer quand même ?", participant.name))
        {
            return Ok(false);
        }

        self.ideas[index].reserved_by = Some(participant.id);
        Ok(true)
    }

    /// Pretty JSON and the download file name
    pub fn export(&self) -> Result<(String, String)> {
        let json = serde_json::to_string_pretty(self)?;
        Ok((format!("evenement-cadeau-{}.json", self.id), json))
    }
}

/// Parse an exported file; only `id` and `title` are mandatory
pub fn parse_import(json: &str) -> Result<GiftEvent> {
    let value: Value = serde_json::from_str(json)?;
    let has_text = |field: &str| value.get(field).and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty());
    if !has_text("id") || !has_text("title") {
        return Err(Error::InvalidInput("Format de fichier invalide".to_string()));
    }
    let mut event: GiftEvent = serde_json::from_value(value)?;

    // A reservation must point at a participant of the event
    let participant_ids: Vec<String> = event.participants.iter().map(|p| p.id.clone()).collect();
    for idea in event.ideas.iter_mut() {
        if idea.reserved_by.as_ref().is_some_and(|pid| !participant_ids.contains(pid)) {
            log::warn!("[gifts] Dropping reservation of '{}' by an unknown participant", idea.title);
            idea.reserved_by = None;
        }
    }
    Ok(event)
}

/// The event currently open in the page
pub struct GiftStore<S: KeyValueStorage> {
    storage: S,
    current: Option<GiftEvent>,
}

impl<S: KeyValueStorage> GiftStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, current: None }
    }

    pub fn current(&self) -> Option<&GiftEvent> {
        self.current.as_ref()
    }

    /// Open a stored event; unknown or unreadable ids leave nothing open
    pub fn open(&mut self, event_id: &str) -> bool {
        self.current = load_json(&self.storage, &gift_event_key(event_id));
        if self.current.is_none() {
            log::info!("[gifts] No readable event '{}'", event_id);
        }
        self.current.is_some()
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Create, persist and open a new event. Returns its id.
    pub fn create_event(&mut self, title: &str, date: Option<&str>, description: Option<&str>) -> Result<String> {
        let event = GiftEvent::new(generate_event_id(), title, date, description)?;
        let id = event.id.clone();
        self.current = Some(event);
        self.persist();
        Ok(id)
    }

    /// Replace the open event with an imported one after confirmation
    pub fn import(&mut self, json: &str, confirm: impl FnOnce(&str) -> bool) -> Result<Option<String>> {
        let event = parse_import(json)?;
        let message = if self.current.is_some() {
            format!("Importer l'événement \"{}\" ? Cela remplacera l'événement actuel.", event.title)
        } else {
            format!("Importer l'événement \"{}\" ?", event.title)
        };
        if !confirm(&message) {
            return Ok(None);
        }
        let id = event.id.clone();
        self.current = Some(event);
        self.persist();
        Ok(Some(id))
    }

    pub fn export(&self) -> Result<Option<(String, String)>> {
        self.current.as_ref().map(GiftEvent::export).transpose()
    }

    pub fn add_participant(&mut self, name: &str) -> Result<Option<String>> {
        let id = self.event_mut()?.add_participant(name)?;
        if id.is_some() {
            self.persist();
        }
        Ok(id)
    }

    pub fn remove_participant(&mut self, participant_id: &str, confirm: impl FnOnce(&str) -> bool) -> Result<bool> {
        let event = self.event_mut()?;
        if event.participant(participant_id).is_none() || !confirm("Supprimer ce participant ?") {
            return Ok(false);
        }
        let removed = event.remove_participant(participant_id);
        self.persist();
        Ok(removed)
    }

    pub fn add_idea(&mut self, title: &str, price: Option<f64>, comment: Option<&str>) -> Result<String> {
        let id = self.event_mut()?.add_idea(title, price, comment)?;
        self.persist();
        Ok(id)
    }

    pub fn remove_idea(&mut self, idea_id: &str, confirm: impl FnOnce(&str) -> bool) -> Result<bool> {
        let event = self.event_mut()?;
        if event.idea(idea_id).is_none() || !confirm("Supprimer cette idée ?") {
            return Ok(false);
        }
        let removed = event.remove_idea(idea_id);
        self.persist();
        Ok(removed)
    }

    pub fn toggle_reservation(
        &mut self,
        idea_id: &str,
        ask_name: impl FnOnce(&str) -> Option<String>,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool> {
        let changed = self.event_mut()?.toggle_reservation(idea_id, ask_name, confirm)?;
        if changed {
            self.persist();
        }
        Ok(changed)
    }

    fn event_mut(&mut self) -> Result<&mut GiftEvent> {
        self.current
            .as_mut()
            .ok_or_else(|| Error::NotFound("Aucun événement ouvert".to_string()))
    }

    fn persist(&self) {
        if let Some(event) = &self.current {
            save_json(&self.storage, &gift_event_key(&event.id), event);
        }
    }
}
