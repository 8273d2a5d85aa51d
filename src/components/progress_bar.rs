//! Progress Bar Component

use leptos::prelude::*;
use organise_core::domain::Progress;

/// Percentage bar, turns green when complete
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    let percent = move || progress.get().percent();

    view! {
        <div class="progress">
            <div class="progress-track">
                <div
                    class=move || if progress.get().is_complete() { "progress-fill complete" } else { "progress-fill" }
                    style:width=move || format!("{}%", percent())
                ></div>
            </div>
            <span class="progress-text">{move || format!("{}%", percent())}</span>
        </div>
    }
}
