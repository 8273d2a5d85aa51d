//! Status Filter Bar Component
//!
//! All / active / completed buttons shared by the list widgets.

use leptos::prelude::*;
use organise_core::domain::StatusFilter;

/// Button captions in `StatusFilter::ALL` order
pub const DEFAULT_FILTER_LABELS: [&str; 3] = ["Tous", "À faire", "Terminés"];

#[component]
pub fn StatusFilterBar(
    #[prop(into)] current: Signal<StatusFilter>,
    #[prop(into)] on_change: Callback<StatusFilter>,
    #[prop(default = DEFAULT_FILTER_LABELS)] labels: [&'static str; 3],
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {StatusFilter::ALL.iter().zip(labels).map(|(filter, label)| {
                let filter = *filter;
                view! {
                    <button
                        type="button"
                        data-filter=filter.as_str()
                        class=move || if current.get() == filter { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| on_change.run(filter)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
