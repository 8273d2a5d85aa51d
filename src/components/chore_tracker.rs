//! Chore Tracker Component
//!
//! Household chores assigned to people, filterable by status and person.

use leptos::prelude::*;
use organise_core::chores::{ChoreTask, Frequency, PersonFilter};

use crate::components::StatusFilterBar;
use crate::context::use_app_context;
use crate::dialogs;
use crate::store::{use_app_store, AppStateStoreFields};

const EVERYONE: &str = "";

#[component]
pub fn ChoreTracker() -> impl IntoView {
    let chores = use_app_context().chores;
    let store = use_app_store();

    let (task, set_task) = signal(String::new());
    let (person, set_person) = signal(String::new());
    let (frequency, set_frequency) = signal(Frequency::default());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (task_text, person_name) = (task.get_untracked(), person.get_untracked());
        match chores.try_update(|list| list.add(&task_text, &person_name, frequency.get_untracked())) {
            Some(Ok(id)) => {
                log::debug!("[chores] Added #{}", id);
                set_task.set(String::new());
            }
            Some(Err(e)) => dialogs::report(&e),
            None => {}
        }
    };

    let reset_week = move |_: web_sys::MouseEvent| {
        if let Some(Err(e)) = chores.try_update(|list| list.reset_week(dialogs::confirm)) {
            dialogs::report(&e);
        }
    };

    let visible = move || {
        let status = store.chores_filter().get();
        let person = store.chores_person().get();
        chores.with(|list| list.filter(status, &person).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="widget chore-tracker">
            <h2>"Tâches ménagères"</h2>

            <form class="add-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Tâche (ex : passer l'aspirateur)"
                    prop:value=move || task.get()
                    on:input=move |ev| set_task.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    list="people-list"
                    placeholder="Qui ?"
                    prop:value=move || person.get()
                    on:input=move |ev| set_person.set(event_target_value(&ev))
                />
                <datalist id="people-list">
                    {move || chores.with(|list| list.people().to_vec()).into_iter().map(|name| view! {
                        <option value=name></option>
                    }).collect_view()}
                </datalist>
                <select on:change=move |ev| set_frequency.set(Frequency::from_str(&event_target_value(&ev)))>
                    {Frequency::ALL.into_iter().map(|f| view! {
                        <option value=f.as_str() selected=move || frequency.get() == f>{f.label()}</option>
                    }).collect_view()}
                </select>
                <button type="submit">"Ajouter"</button>
            </form>

            <div class="toolbar">
                <StatusFilterBar
                    current=Signal::derive(move || store.chores_filter().get())
                    on_change=move |filter| store.chores_filter().set(filter)
                />
                <select
                    class="person-filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let filter = if value == EVERYONE { PersonFilter::Everyone } else { PersonFilter::Person(value) };
                        store.chores_person().set(filter);
                    }
                >
                    <option value=EVERYONE>"Tout le monde"</option>
                    {move || chores.with(|list| list.people().to_vec()).into_iter().map(|name| {
                        let selected = store.chores_person().get() == PersonFilter::Person(name.clone());
                        view! { <option value=name.clone() selected=selected>{name.clone()}</option> }
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || chores.with(|list| list.all_done())>
                <p class="all-done">"🎉 Toutes les tâches sont faites !"</p>
            </Show>

            <ul class="task-list">
                {move || visible().into_iter().map(|chore| view! { <ChoreRow chore=chore /> }).collect_view()}
            </ul>

            <div class="actions">
                <button type="button" on:click=move |_| { chores.maybe_update(|list| list.clear_completed(dialogs::confirm)); }>
                    "Supprimer les terminées"
                </button>
                <button type="button" on:click=reset_week>"Réinitialiser la semaine"</button>
            </div>
        </section>
    }
}

#[component]
fn ChoreRow(chore: ChoreTask) -> impl IntoView {
    let chores = use_app_context().chores;
    let id = chore.id;

    view! {
        <li class=if chore.completed { "task completed" } else { "task" }>
            <input
                type="checkbox"
                prop:checked=chore.completed
                on:change=move |_| { chores.maybe_update(|list| list.toggle(id)); }
            />
            <span class="task-text">{chore.task.clone()}</span>
            <span class="person-badge">{chore.person.clone()}</span>
            <span class=format!("frequency-badge {}", chore.frequency.as_str())>{chore.frequency.label()}</span>
            <button type="button" class="delete-btn" on:click=move |_| { chores.maybe_update(|list| list.delete(id)); }>
                "×"
            </button>
        </li>
    }
}
