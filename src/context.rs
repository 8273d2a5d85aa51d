//! Application Context
//!
//! Widget stores owned by the composition root and provided via the
//! Leptos Context API. Each user action is one store call inside
//! `try_update`, which re-renders whatever reads that store.

use leptos::prelude::*;
use organise_core::checklist::Checklist;
use organise_core::chores::ChoreStore;
use organise_core::gifts::GiftStore;
use organise_core::grocery::GroceryStore;
use organise_core::planning::PlanningBoard;
use organise_core::todo::TodoStore;

use crate::web_storage::WebStorage;

/// App-wide widget stores provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub grocery: RwSignal<GroceryStore<WebStorage>>,
    pub todo: RwSignal<TodoStore<WebStorage>>,
    pub chores: RwSignal<ChoreStore<WebStorage>>,
    pub planning: RwSignal<PlanningBoard<WebStorage>>,
    pub gifts: RwSignal<GiftStore<WebStorage>>,
    pub checklist: RwSignal<Checklist<WebStorage>>,
}

impl AppContext {
    /// Load every widget from local storage
    pub fn load(checklist_type: &str) -> Self {
        log::info!("[APP] Loading widgets from local storage");
        Self {
            grocery: RwSignal::new(GroceryStore::load(WebStorage)),
            todo: RwSignal::new(TodoStore::load(WebStorage)),
            chores: RwSignal::new(ChoreStore::load(WebStorage)),
            planning: RwSignal::new(PlanningBoard::load(WebStorage)),
            gifts: RwSignal::new(GiftStore::new(WebStorage)),
            checklist: RwSignal::new(Checklist::load(WebStorage, checklist_type)),
        }
    }

    /// Switch the checklist to another template slug
    pub fn open_checklist(&self, checklist_type: &str) {
        self.checklist.set(Checklist::load(WebStorage, checklist_type));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
