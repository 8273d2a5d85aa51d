//! Organise-Moi Frontend App
//!
//! Composition root: loads every widget store, provides them via context and
//! shows one widget at a time behind a tab bar.

use chrono::{Datelike, Local};
use leptos::prelude::*;
use organise_core::config::DEFAULT_CHECKLIST;
use reactive_stores::Store;

use crate::components::{
    ChecklistView, ChoreTracker, GiftOrganizer, GroceryList, LogPanel, TodoList, WeekPlanner, WidgetTabBar,
};
use crate::context::AppContext;
use crate::location;
use crate::store::{AppState, AppStateStoreFields, Widget};

#[component]
pub fn App() -> impl IntoView {
    let checklist_type = location::body_data("checklist").unwrap_or_else(|| DEFAULT_CHECKLIST.to_string());
    let today = Local::now().date_naive();

    let ctx = AppContext::load(&checklist_type);
    let store = Store::new(AppState::new(today, checklist_type));

    // A shared gift link opens straight on its event
    if let Some(event_id) = location::query_param("id") {
        let opened = ctx.gifts.try_update(|gifts| gifts.open(&event_id)).unwrap_or(false);
        log::info!("[APP] Gift event '{}' from URL, opened={}", event_id, opened);
        if opened {
            store.active_widget().set(Widget::Gifts);
        }
    }

    provide_context(ctx);
    provide_context(store);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Organise-Moi"</h1>
                <WidgetTabBar />
            </header>

            <main class="main-content">
                {move || match store.active_widget().get() {
                    Widget::Grocery => view! { <GroceryList /> }.into_any(),
                    Widget::Todo => view! { <TodoList /> }.into_any(),
                    Widget::Chores => view! { <ChoreTracker /> }.into_any(),
                    Widget::Planning => view! { <WeekPlanner /> }.into_any(),
                    Widget::Gifts => view! { <GiftOrganizer /> }.into_any(),
                    Widget::Checklist => view! { <ChecklistView /> }.into_any(),
                }}
            </main>

            <footer class="app-footer">
                <span>{format!("© {} Organise-Moi", today.year())}</span>
                <LogPanel />
            </footer>
        </div>
    }
}
