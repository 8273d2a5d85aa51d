//! Log Panel Component
//!
//! Collapsible view of the recent log lines, for bug reports.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    view! {
        <details class="log-panel">
            <summary>"Journal"</summary>
            <button type="button" on:click=move |_| set_lines.set(console_logger::recent_lines())>
                "Actualiser"
            </button>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
