//! Checklist Component
//!
//! Template-based checklist with progress; confetti on first completion.

use leptos::prelude::*;
use organise_core::checklist::Checklist;
use organise_core::config::CHECKLIST_TEMPLATES;

use crate::components::{launch_confetti, ProgressBar};
use crate::context::use_app_context;
use crate::dialogs;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::web_storage::WebStorage;

#[component]
pub fn ChecklistView() -> impl IntoView {
    let ctx = use_app_context();
    let checklist = ctx.checklist;
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    // Runs one mutation, then fires the celebration if it just completed
    let mutate = move |action: &dyn Fn(&mut Checklist<WebStorage>) -> bool| {
        let celebrate = checklist
            .try_update(|list| action(list) && list.take_celebration())
            .unwrap_or(false);
        if celebrate {
            launch_confetti();
        }
    };

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        mutate(&|list| list.add(&text));
        set_new_text.set(String::new());
    };

    let switch = move |slug: String| {
        log::debug!("[checklist] Opening '{}'", slug);
        ctx.open_checklist(&slug);
        store.checklist_type().set(slug);
    };

    let entries = move || checklist.with(|list| list.entries().to_vec());

    view! {
        <section class="widget checklist">
            <h2>"Checklist"</h2>

            <select class="checklist-type" on:change=move |ev| switch(event_target_value(&ev))>
                {CHECKLIST_TEMPLATES.iter().map(|template| {
                    let slug = template.slug;
                    view! {
                        <option value=slug selected=move || store.checklist_type().get() == slug>
                            {template.title}
                        </option>
                    }
                }).collect_view()}
            </select>

            <ProgressBar progress=Signal::derive(move || checklist.with(|list| list.progress())) />

            <div class="checklist-items">
                {move || entries().into_iter().enumerate().map(|(index, entry)| view! {
                    <label class=if entry.done { "checklist-item completed" } else { "checklist-item" }>
                        <input
                            type="checkbox"
                            prop:checked=entry.done
                            on:change=move |_| mutate(&|list| list.toggle(index))
                        />
                        <span class="checklist-text">{entry.text}</span>
                    </label>
                }).collect_view()}
            </div>

            <form class="add-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Ajouter une tâche personnalisée"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Ajouter"</button>
            </form>

            <button
                type="button"
                class="danger"
                on:click=move |_| { checklist.maybe_update(|list| list.reset(dialogs::confirm)); }
            >
                "Réinitialiser"
            </button>
        </section>
    }
}
