//! Gift Organizer Component
//!
//! One collective gift event at a time. The event id is kept in the URL so
//! the page can be bookmarked; events travel between people as JSON files.

use leptos::prelude::*;
use leptos::task::spawn_local;
use organise_core::gifts::{GiftEvent, GiftIdea, GiftStore};
use organise_core::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::context::use_app_context;
use crate::dialogs;
use crate::location;
use crate::web_storage::WebStorage;

type Gifts = RwSignal<GiftStore<WebStorage>>;

#[component]
pub fn GiftOrganizer() -> impl IntoView {
    let gifts = use_app_context().gifts;
    let has_event = move || gifts.with(|g| g.current().is_some());

    view! {
        <section class="widget gift-organizer">
            <h2>"Cadeau commun"</h2>
            <Show when=has_event fallback=move || view! { <CreateEventForm gifts=gifts /> }>
                <EventView gifts=gifts />
            </Show>
        </section>
    }
}

#[component]
fn CreateEventForm(gifts: Gifts) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (title, date, description) = (title.get_untracked(), date.get_untracked(), description.get_untracked());
        match gifts.try_update(|g| g.create_event(&title, Some(&date), Some(&description))) {
            Some(Ok(id)) => {
                log::info!("[gifts] Created event {}", id);
                location::push_query_param("id", &id);
            }
            Some(Err(e)) => dialogs::report(&e),
            None => {}
        }
    };

    view! {
        <form class="event-form" on:submit=create>
            <input
                type="text"
                placeholder="Titre (ex : Anniversaire de Léa)"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input type="date" prop:value=move || date.get() on:input=move |ev| set_date.set(event_target_value(&ev)) />
            <textarea
                placeholder="Description (facultatif)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Créer l'événement"</button>
        </form>
        <ImportButton gifts=gifts />
    }
}

#[component]
fn EventView(gifts: Gifts) -> impl IntoView {
    let event = move || gifts.with(|g| g.current().cloned());

    let export = move |_: web_sys::MouseEvent| match gifts.with_untracked(|g| g.export()) {
        Ok(Some((filename, json))) => {
            if let Err(e) = download_json(&filename, &json) {
                log::error!("[gifts] Export failed: {:?}", e);
            }
        }
        Ok(None) => {}
        Err(e) => dialogs::report(&e),
    };

    let close = move |_: web_sys::MouseEvent| {
        gifts.update(|g| g.close());
        location::clear_query();
    };

    view! {
        {move || event().map(|event| view! {
            <header class="event-header">
                <h3>{event.title.clone()}</h3>
                {event.date.clone().map(|date| view! { <p class="event-date">"📅 " {date}</p> })}
                {event.description.clone().map(|text| view! { <p class="event-description">{text}</p> })}
                <p class="share-link">"Lien : " {location::current_href().unwrap_or_default()}</p>
            </header>
        })}

        <div class="event-actions">
            <button type="button" on:click=export>"Exporter"</button>
            <ImportButton gifts=gifts />
            <button type="button" on:click=close>"Nouvel événement"</button>
        </div>

        <ParticipantsSection gifts=gifts />
        <IdeasSection gifts=gifts />
    }
}

#[component]
fn ParticipantsSection(gifts: Gifts) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let typed = name.get_untracked();
        match gifts.try_update(|g| g.add_participant(&typed)) {
            Some(Ok(Some(_))) => set_name.set(String::new()),
            Some(Err(e)) => dialogs::report(&e),
            _ => {}
        }
    };

    let participants = move || {
        gifts.with(|g| {
            g.current()
                .map(|event| {
                    event
                        .participants
                        .iter()
                        .map(|p| (p.id.clone(), p.name.clone(), reserved_count(event, &p.id)))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="participants">
            <h4>"Participants"</h4>
            <form class="add-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Prénom"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button type="submit">"Ajouter"</button>
            </form>
            <ul>
                {move || participants().into_iter().map(|(id, name, count)| view! {
                    <li class="participant">
                        <span>{name}</span>
                        <span class="reserved-count">{format!("{} cadeau(x)", count)}</span>
                        <button
                            type="button"
                            class="delete-btn"
                            on:click=move |_| {
                                if let Some(Err(e)) = gifts.try_update(|g| g.remove_participant(&id, dialogs::confirm)) {
                                    dialogs::report(&e);
                                }
                            }
                        >
                            "×"
                        </button>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

fn reserved_count(event: &GiftEvent, participant_id: &str) -> usize {
    event
        .ideas
        .iter()
        .filter(|i| i.reserved_by.as_deref() == Some(participant_id))
        .count()
}

/// "12,50" and "12.50" are both accepted
fn parse_price(input: &str) -> Option<f64> {
    input.trim().replace(',', ".").parse::<f64>().ok()
}

#[component]
fn IdeasSection(gifts: Gifts) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (comment, set_comment) = signal(String::new());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (title_text, comment_text) = (title.get_untracked(), comment.get_untracked());
        let price_value = parse_price(&price.get_untracked());
        match gifts.try_update(|g| g.add_idea(&title_text, price_value, Some(&comment_text))) {
            Some(Ok(_)) => {
                set_title.set(String::new());
                set_price.set(String::new());
                set_comment.set(String::new());
            }
            Some(Err(e)) => dialogs::report(&e),
            None => {}
        }
    };

    let ideas = move || {
        gifts.with(|g| {
            g.current()
                .map(|event| {
                    event
                        .ideas
                        .iter()
                        .map(|idea| {
                            let holder = event.reserver_of(idea).map(|p| p.name.clone());
                            (idea.clone(), holder)
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="ideas">
            <h4>"Idées de cadeaux"</h4>
            <form class="add-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Idée"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Prix (€)"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Commentaire"
                    prop:value=move || comment.get()
                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                />
                <button type="submit">"Ajouter"</button>
            </form>
            <ul>
                {move || ideas().into_iter().map(|(idea, holder)| view! {
                    <IdeaRow gifts=gifts idea=idea holder=holder />
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn IdeaRow(gifts: Gifts, idea: GiftIdea, holder: Option<String>) -> impl IntoView {
    let reserved = holder.is_some();
    let toggle_id = idea.id.clone();
    let delete_id = idea.id.clone();

    let toggle = move |_: web_sys::MouseEvent| {
        if let Some(Err(e)) = gifts.try_update(|g| g.toggle_reservation(&toggle_id, dialogs::prompt, dialogs::confirm)) {
            dialogs::report(&e);
        }
    };

    view! {
        <li class=if reserved { "idea reserved" } else { "idea" }>
            <span class="idea-title">{idea.title.clone()}</span>
            {idea.price_label().map(|label| view! { <span class="idea-price">{label}</span> })}
            {idea.comment.clone().map(|text| view! { <span class="idea-comment">{text}</span> })}
            <span class="idea-status">
                {match holder {
                    Some(name) => format!("Réservé par {}", name),
                    None => "Disponible".to_string(),
                }}
            </span>
            <button type="button" on:click=toggle>{if reserved { "Libérer" } else { "Je m'en occupe" }}</button>
            <button
                type="button"
                class="delete-btn"
                on:click=move |_| {
                    if let Some(Err(e)) = gifts.try_update(|g| g.remove_idea(&delete_id, dialogs::confirm)) {
                        dialogs::report(&e);
                    }
                }
            >
                "×"
            </button>
        </li>
    }
}

/// File picker that replaces the open event with an exported one
#[component]
fn ImportButton(gifts: Gifts) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again
        input.set_value("");

        spawn_local(async move {
            let json = match JsFuture::from(file.text()).await {
                Ok(text) => text.as_string(),
                Err(e) => {
                    log::error!("[gifts] Reading {} failed: {:?}", file.name(), e);
                    None
                }
            };
            let Some(json) = json else {
                dialogs::alert("Erreur lors de l'import du fichier");
                return;
            };
            match gifts.try_update(|g| g.import(&json, dialogs::confirm)) {
                Some(Ok(Some(id))) => {
                    log::info!("[gifts] Imported event {}", id);
                    location::push_query_param("id", &id);
                    dialogs::alert("Événement importé avec succès !");
                }
                Some(Err(Error::Serialization(msg))) => {
                    log::warn!("[gifts] Unreadable import: {}", msg);
                    dialogs::alert("Erreur lors de l'import du fichier");
                }
                Some(Err(e)) => dialogs::report(&e),
                Some(Ok(None)) | None => {}
            }
        });
    };

    view! {
        <label class="import-btn">
            "Importer"
            <input type="file" accept="application/json,.json" style="display:none" on:change=on_change />
        </label>
    }
}

/// Save a JSON document through a temporary download link
fn download_json(filename: &str, json: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12,50"), Some(12.5));
        assert_eq!(parse_price(" 8 "), Some(8.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("gratuit"), None);
    }
}
