//! Widget Tab Bar Component
//!
//! Tab bar for switching between widgets in the main content area.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, Widget};

#[component]
pub fn WidgetTabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="widget-tab-bar">
            {Widget::ALL.iter().map(|widget| {
                let widget = *widget;
                let tab_class = move || {
                    if store.active_widget().get() == widget { "widget-tab active" } else { "widget-tab" }
                };
                view! {
                    <button
                        class=tab_class
                        on:click=move |_| {
                            log::debug!("[UI] Switching to {:?}", widget);
                            store.active_widget().set(widget);
                        }
                    >
                        {widget.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
