//! Name Autocomplete Component
//!
//! Text input with suggestions from previously entered names.
//! Arrow keys move through the list, Tab or Enter picks the highlighted name.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before hiding suggestions on blur, so a click on one still lands
const HIDE_DELAY_MS: u32 = 200;

/// Input with suggestions
///
/// Props:
/// - suggest: names matching the current input
/// - on_submit: called with the raw text when the form is submitted
#[component]
pub fn NameAutocomplete(
    #[prop(into)] suggest: Callback<String, Vec<String>>,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal::<Option<usize>>(None);
    let (visible, set_visible) = signal(false);

    let suggestions = move || {
        if !visible.get() {
            return vec![];
        }
        suggest.run(input_value.get())
    };

    let pick = move |name: String| {
        set_input_value.set(name);
        set_selected_idx.set(None);
        set_visible.set(false);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = input_value.get();
        if value.trim().is_empty() {
            return;
        }
        on_submit.run(value);
        set_input_value.set(String::new());
        set_selected_idx.set(None);
        set_visible.set(false);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        if sugg.is_empty() {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let next = selected_idx.get().map_or(0, |i| (i + 1).min(sugg.len() - 1));
                set_selected_idx.set(Some(next));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.set(selected_idx.get().and_then(|i| i.checked_sub(1)));
            }
            "Tab" | "Enter" => {
                if let Some(name) = selected_idx.get().and_then(|i| sugg.get(i).cloned()) {
                    ev.prevent_default();
                    pick(name);
                }
            }
            "Escape" => set_visible.set(false),
            _ => {}
        }
    };

    view! {
        <div class="autocomplete-wrapper">
            <form class="add-form" on:submit=submit>
                <input
                    type="text"
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(None);
                        set_visible.set(true);
                    }
                    on:keydown=on_keydown
                    on:blur=move |_| { Timeout::new(HIDE_DELAY_MS, move || set_visible.set(false)).forget(); }
                />
                <button type="submit">"Ajouter"</button>
            </form>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    return view! { <div></div> }.into_any();
                }
                let selected = selected_idx.get();
                view! {
                    <div class="autocomplete-list">
                        {sugg.into_iter().enumerate().map(|(i, name)| {
                            let name_for_click = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if selected == Some(i) { "autocomplete-item selected" } else { "autocomplete-item" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        pick(name_for_click.clone());
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
