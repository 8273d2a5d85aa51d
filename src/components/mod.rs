//! UI Components
//!
//! One component per widget plus the small pieces they share.

mod widget_tab_bar;
mod status_filter_bar;
mod progress_bar;
mod name_autocomplete;
mod confetti;
mod log_panel;
mod grocery_list;
mod todo_list;
mod chore_tracker;
mod week_planner;
mod gift_organizer;
mod checklist_view;

pub use widget_tab_bar::WidgetTabBar;
pub use status_filter_bar::StatusFilterBar;
pub use progress_bar::ProgressBar;
pub use name_autocomplete::NameAutocomplete;
pub use confetti::launch_confetti;
pub use log_panel::LogPanel;
pub use grocery_list::GroceryList;
pub use todo_list::TodoList;
pub use chore_tracker::ChoreTracker;
pub use week_planner::WeekPlanner;
pub use gift_organizer::GiftOrganizer;
pub use checklist_view::ChecklistView;
