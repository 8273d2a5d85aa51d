//! Week Planner Component
//!
//! Monday-to-Sunday grid with previous / next / current week navigation.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use organise_core::planning::WeekCursor;

use crate::context::use_app_context;
use crate::dialogs;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WeekPlanner() -> impl IntoView {
    let planning = use_app_context().planning;
    let store = use_app_store();

    let cursor = move || WeekCursor::containing(store.week_start().get());
    let move_week = move |week: WeekCursor| store.week_start().set(week.start());

    view! {
        <section class="widget week-planner">
            <h2>"Planning de la semaine"</h2>

            <div class="week-nav">
                <button type="button" on:click=move |_| move_week(cursor().previous())>"◀"</button>
                <span class="week-label">{move || cursor().label()}</span>
                <button type="button" on:click=move |_| move_week(cursor().next())>"▶"</button>
                <button
                    type="button"
                    on:click=move |_| move_week(WeekCursor::containing(Local::now().date_naive()))
                >
                    "Aujourd'hui"
                </button>
            </div>

            <div class="week-grid">
                {move || {
                    let week = cursor();
                    week.days().into_iter().enumerate().map(|(i, date)| view! {
                        <DayColumn date=date header=week.day_header(i) />
                    }).collect_view()
                }}
            </div>

            <div class="actions">
                <button
                    type="button"
                    class="danger"
                    on:click=move |_| { planning.maybe_update(|board| board.clear_all(dialogs::confirm)); }
                >
                    "Tout effacer"
                </button>
            </div>
        </section>
    }
}

#[component]
fn DayColumn(date: NaiveDate, header: String) -> impl IntoView {
    let planning = use_app_context().planning;
    let is_today = date == Local::now().date_naive();

    // Asks for the time first, then the description
    let add_event = move |_: web_sys::MouseEvent| {
        let Some(time) = dialogs::prompt("Heure (ex : 14:00 ou 9h00)") else {
            return;
        };
        let Some(text) = dialogs::prompt("Description") else {
            return;
        };
        if let Some(Err(e)) = planning.try_update(|board| board.add_event(date, &time, &text)) {
            dialogs::report(&e);
        }
    };

    let events = move || {
        planning.with(|board| {
            board
                .events_on(date)
                .into_iter()
                .map(|(index, event)| (index, event.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=if is_today { "day-column today" } else { "day-column" }>
            <h3>{header}</h3>
            <ul class="day-events">
                {move || events().into_iter().map(|(index, event)| view! {
                    <li class="planned-event">
                        <span class="event-time">{event.time}</span>
                        <span class="event-text">{event.text}</span>
                        <button
                            type="button"
                            class="delete-btn"
                            on:click=move |_| {
                                planning.maybe_update(|board| board.delete_event(date, index, dialogs::confirm));
                            }
                        >
                            "×"
                        </button>
                    </li>
                }).collect_view()}
            </ul>
            <button type="button" class="add-event-btn" on:click=add_event>"+ Ajouter"</button>
        </div>
    }
}
