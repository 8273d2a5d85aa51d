//! Week Planner
//!
//! Free-form events filed under a calendar day. Weeks start on Monday.
//! Events keep their insertion index so the view can sort by time while
//! deletes still address the stored entry.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::config::PLANNING_KEY;
use crate::error::{Error, Result};
use crate::storage::{load_json, save_json, KeyValueStorage};

pub const DAY_NAMES: [&str; 7] = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"];

const MONTH_NAMES: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre", "octobre",
    "novembre", "décembre",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedEvent {
    /// As typed: "14:00", "9h30", "18"
    pub time: String,
    pub text: String,
}

/// Storage key for a day
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn french_day_month(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTH_NAMES[date.month0() as usize])
}

/// Minutes since midnight for sorting; unreadable times sort first
///
/// Accepts "14:00", "14h00", "9h", "9".
pub fn time_to_minutes(time: &str) -> u32 {
    static HOUR_MINUTE: OnceLock<Option<Regex>> = OnceLock::new();
    static HOUR_ONLY: OnceLock<Option<Regex>> = OnceLock::new();

    let cleaned = time.trim().to_lowercase();
    let hour_minute = HOUR_MINUTE.get_or_init(|| Regex::new(r"(\d{1,2})[h:](\d{2})").ok());
    let hour_only = HOUR_ONLY.get_or_init(|| Regex::new(r"(\d{1,2})").ok());

    if let Some(caps) = hour_minute.as_ref().and_then(|re| re.captures(&cleaned)) {
        let hours: u32 = caps[1].parse().unwrap_or(0);
        let minutes: u32 = caps[2].parse().unwrap_or(0);
        return hours * 60 + minutes;
    }
    if let Some(caps) = hour_only.as_ref().and_then(|re| re.captures(&cleaned)) {
        return caps[1].parse::<u32>().unwrap_or(0) * 60;
    }
    0
}

/// The week currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    start: NaiveDate,
}

impl WeekCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self { start: week_start(date) }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn previous(&self) -> Self {
        Self { start: self.start - Duration::days(7) }
    }

    pub fn next(&self) -> Self {
        Self { start: self.start + Duration::days(7) }
    }

    /// Monday to Sunday
    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    /// "6 janvier – 12 janvier 2025"
    pub fn label(&self) -> String {
        let end = self.start + Duration::days(6);
        format!("{} – {} {}", french_day_month(self.start), french_day_month(end), end.year())
    }

    /// "Lundi 6"
    pub fn day_header(&self, index: usize) -> String {
        let date = self.start + Duration::days(index as i64);
        format!("{} {}", DAY_NAMES[index % 7], date.day())
    }
}

pub struct PlanningBoard<S: KeyValueStorage> {
    storage: S,
    events: BTreeMap<String, Vec<PlannedEvent>>,
}

impl<S: KeyValueStorage> PlanningBoard<S> {
    pub fn load(storage: S) -> Self {
        let events = load_json(&storage, PLANNING_KEY).unwrap_or_default();
        Self { storage, events }
    }

    /// Events of a day sorted by time, each with its stored index
    pub fn events_on(&self, date: NaiveDate) -> Vec<(usize, &PlannedEvent)> {
        let mut events: Vec<(usize, &PlannedEvent)> = self
            .events
            .get(&date_key(date))
            .map(|list| list.iter().enumerate().collect())
            .unwrap_or_default();
        events.sort_by_key(|(_, event)| time_to_minutes(&event.time));
        events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn add_event(&mut self, date: NaiveDate, time: &str, text: &str) -> Result<()> {
        if time.trim().is_empty() || text.trim().is_empty() {
            return Err(Error::InvalidInput("L'heure et la description sont obligatoires".to_string()));
        }
        self.events.entry(date_key(date)).or_default().push(PlannedEvent {
            time: time.to_string(),
            text: text.to_string(),
        });
        self.persist();
        Ok(())
    }

    /// Remove one event by stored index; the day disappears once empty
    pub fn delete_event(&mut self, date: NaiveDate, index: usize, confirm: impl FnOnce(&str) -> bool) -> bool {
        let key = date_key(date);
        let Some(list) = self.events.get(&key) else {
            return false;
        };
        if index >= list.len() {
            return false;
        }
        if !confirm("Êtes-vous sûr de vouloir supprimer cet événement ?") {
            return false;
        }
        if let Some(list) = self.events.get_mut(&key) {
            list.remove(index);
            if list.is_empty() {
                self.events.remove(&key);
            }
        }
        self.persist();
        true
    }

    pub fn clear_all(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm("Supprimer tous les événements ?") {
            return false;
        }
        self.events.clear();
        self.persist();
        true
    }

    fn persist(&self) {
        save_json(&self.storage, PLANNING_KEY, &self.events);
    }
}
