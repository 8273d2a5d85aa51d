//! Grocery List Component
//!
//! Input with name suggestions, items grouped by category, store mode and
//! progress. Every action is one `GroceryCommand` applied to the store.

use leptos::prelude::*;
use organise_core::grocery::{Category, GroceryCommand, GroceryItem};

use crate::components::{NameAutocomplete, ProgressBar, StatusFilterBar};
use crate::context::use_app_context;
use crate::dialogs;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn GroceryList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let grocery = ctx.grocery;

    let dispatch = move |command: GroceryCommand| {
        log::debug!("[grocery] {:?}", command);
        grocery.maybe_update(|list| list.apply(command, dialogs::confirm));
    };
    let on_command = Callback::new(dispatch);

    let groups = move || {
        let filter = store.grocery_filter().get();
        grocery.with(|list| {
            list.grouped(filter)
                .into_iter()
                .map(|(category, items)| (category, items.into_iter().cloned().collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="widget grocery-list" class=("store-mode", move || grocery.with(|l| l.store_mode()))>
            <h2>"Liste de courses"</h2>

            <NameAutocomplete
                placeholder="Ajouter un article (ex : tomates x3)"
                suggest=move |input: String| {
                    grocery.with_untracked(|l| l.suggestions(&input).into_iter().map(str::to_string).collect::<Vec<_>>())
                }
                on_submit=move |raw: String| dispatch(GroceryCommand::Add(raw))
            />

            <div class="toolbar">
                <StatusFilterBar
                    current=Signal::derive(move || store.grocery_filter().get())
                    on_change=move |filter| store.grocery_filter().set(filter)
                />
                <button
                    type="button"
                    class=move || if grocery.with(|l| l.store_mode()) { "store-mode-btn active" } else { "store-mode-btn" }
                    on:click=move |_| dispatch(GroceryCommand::ToggleStoreMode)
                >
                    "🛒 Mode magasin"
                </button>
            </div>

            <ProgressBar progress=Signal::derive(move || grocery.with(|l| l.progress())) />
            <p class="counter">{move || grocery.with(|l| l.counter_text())}</p>

            {move || {
                let groups = groups();
                if groups.is_empty() {
                    return view! { <p class="empty">"Aucun article"</p> }.into_any();
                }
                groups.into_iter().map(|(category, items)| view! {
                    <div class="category-group">
                        <h3>{category.label()}</h3>
                        <ul>
                            {items.into_iter().map(|item| view! {
                                <GroceryRow item=item on_command=on_command />
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view().into_any()
            }}

            <div class="actions">
                <button type="button" on:click=move |_| dispatch(GroceryCommand::UncheckAll)>"Tout décocher"</button>
                <button type="button" on:click=move |_| dispatch(GroceryCommand::ClearCompleted)>"Supprimer les achetés"</button>
                <button type="button" class="danger" on:click=move |_| dispatch(GroceryCommand::ClearAll)>"Tout supprimer"</button>
            </div>
        </section>
    }
}

/// One item: checkbox, name (double-click to edit), category and delete
#[component]
fn GroceryRow(item: GroceryItem, on_command: Callback<GroceryCommand>) -> impl IntoView {
    let id = item.id;
    let current_text = if item.qty > 1 { format!("{} x{}", item.name, item.qty) } else { item.name.clone() };
    let current_category = item.category;

    let rename = move |_: web_sys::MouseEvent| {
        if let Some(raw) = dialogs::prompt_with_default("Modifier l'article", &current_text) {
            on_command.run(GroceryCommand::Rename(id, raw));
        }
    };

    view! {
        <li class=if item.done { "grocery-item done" } else { "grocery-item" }>
            <input
                type="checkbox"
                prop:checked=item.done
                on:change=move |_| on_command.run(GroceryCommand::ToggleDone(id))
            />
            <span class="item-name" title="Double-cliquer pour modifier" on:dblclick=rename>
                {item.display_label()}
            </span>
            <select
                class="category-select"
                on:change=move |ev| {
                    if let Some(category) = Category::from_label(&event_target_value(&ev)) {
                        on_command.run(GroceryCommand::SetCategory(id, category));
                    }
                }
            >
                {Category::ALL.iter().map(|category| view! {
                    <option value=category.label() selected=*category == current_category>
                        {category.label()}
                    </option>
                }).collect_view()}
            </select>
            <button type="button" class="delete-btn" on:click=move |_| on_command.run(GroceryCommand::Delete(id))>
                "×"
            </button>
        </li>
    }
}
