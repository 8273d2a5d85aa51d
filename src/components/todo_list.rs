//! To-do List Component

use leptos::prelude::*;
use organise_core::todo::TodoTask;

use crate::components::StatusFilterBar;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let todo = use_app_context().todo;
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let mut added = false;
        todo.maybe_update(|list| {
            added = list.add(&text).is_some();
            added
        });
        if added {
            set_new_text.set(String::new());
        }
    };

    let visible = move || {
        let filter = store.todo_filter().get();
        todo.with(|list| list.filter(filter).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="widget todo-list">
            <h2>"To-do"</h2>

            <form class="add-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Nouvelle tâche..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Ajouter"</button>
            </form>

            <StatusFilterBar
                current=Signal::derive(move || store.todo_filter().get())
                on_change=move |filter| store.todo_filter().set(filter)
                labels=["Toutes", "Actives", "Terminées"]
            />

            <Show when=move || todo.with(|list| list.all_done())>
                <p class="all-done">"🎉 Toutes les tâches sont terminées !"</p>
            </Show>

            <ul class="task-list">
                {move || visible().into_iter().map(|task| view! { <TodoRow task=task /> }).collect_view()}
            </ul>

            <footer class="list-footer">
                <span class="counter">{move || todo.with(|list| list.counter_text(store.todo_filter().get()))}</span>
                <button type="button" on:click=move |_| { todo.maybe_update(|list| list.uncheck_all()); }>
                    "Tout décocher"
                </button>
                <button type="button" on:click=move |_| { todo.maybe_update(|list| list.clear_completed()); }>
                    "Effacer les terminées"
                </button>
            </footer>
        </section>
    }
}

#[component]
fn TodoRow(task: TodoTask) -> impl IntoView {
    let todo = use_app_context().todo;
    let id = task.id;

    let row_class = match (task.completed, task.important) {
        (true, _) => "task completed",
        (false, true) => "task important",
        (false, false) => "task",
    };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=task.completed
                on:change=move |_| { todo.maybe_update(|list| list.toggle(id)); }
            />
            <span class="task-text">{task.text.clone()}</span>
            <button
                type="button"
                class="star-btn"
                title="Important"
                on:click=move |_| { todo.maybe_update(|list| list.toggle_important(id)); }
            >
                {if task.important { "★" } else { "☆" }}
            </button>
            <button type="button" class="delete-btn" on:click=move |_| { todo.maybe_update(|list| list.delete(id)); }>
                "×"
            </button>
        </li>
    }
}
