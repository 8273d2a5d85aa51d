//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds navigation and view state only; widget data lives in the
//! widget stores of `AppContext`.

use chrono::NaiveDate;
use organise_core::chores::PersonFilter;
use organise_core::domain::StatusFilter;
use organise_core::planning::week_start;
use reactive_stores::Store;

/// The widgets, in tab order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Widget {
    #[default]
    Grocery,
    Todo,
    Chores,
    Planning,
    Gifts,
    Checklist,
}

impl Widget {
    pub const ALL: [Widget; 6] = [
        Widget::Grocery,
        Widget::Todo,
        Widget::Chores,
        Widget::Planning,
        Widget::Gifts,
        Widget::Checklist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Widget::Grocery => "Courses",
            Widget::Todo => "To-do",
            Widget::Chores => "Tâches ménagères",
            Widget::Planning => "Planning",
            Widget::Gifts => "Cadeaux",
            Widget::Checklist => "Checklists",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub active_widget: Widget,
    pub grocery_filter: StatusFilter,
    pub todo_filter: StatusFilter,
    pub chores_filter: StatusFilter,
    pub chores_person: PersonFilter,
    /// Monday of the week shown by the planner
    pub week_start: NaiveDate,
    /// Template slug of the open checklist
    pub checklist_type: String,
}

impl AppState {
    pub fn new(today: NaiveDate, checklist_type: String) -> Self {
        Self {
            active_widget: Widget::default(),
            grocery_filter: StatusFilter::default(),
            todo_filter: StatusFilter::default(),
            chores_filter: StatusFilter::default(),
            chores_person: PersonFilter::default(),
            week_start: week_start(today),
            checklist_type,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    leptos::prelude::expect_context::<AppStore>()
}
