//! Completion confetti
//!
//! Purely cosmetic: pieces are appended to `<body>` and removed by a timer
//! once their fall animation is over.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;

const PIECES: usize = 30;
const CLEANUP_MS: u32 = 5_000;
const COLORS: [&str; 12] = [
    "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899", "#f97316", "#14b8a6", "#6366f1", "#a855f7",
    "#eab308", "#22c55e",
];

pub fn launch_confetti() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    for _ in 0..PIECES {
        let Ok(piece) = document.create_element("div") else {
            continue;
        };
        piece.set_class_name("confetti");
        if let Some(html) = piece.dyn_ref::<web_sys::HtmlElement>() {
            let style = html.style();
            let color = COLORS[(js_sys::Math::random() * COLORS.len() as f64) as usize % COLORS.len()];
            let duration = 2.0 + js_sys::Math::random() * 2.0;
            let delay = js_sys::Math::random() * 0.5;
            let _ = style.set_property("left", &format!("{}%", js_sys::Math::random() * 100.0));
            let _ = style.set_property("background-color", color);
            let _ = style.set_property("--drift", &format!("{}px", js_sys::Math::random() * 200.0 - 100.0));
            let _ = style.set_property("animation", &format!("confetti-fall {}s linear {}s forwards", duration, delay));
        }
        if body.append_child(&piece).is_err() {
            continue;
        }
        Timeout::new(CLEANUP_MS, move || piece.remove()).forget();
    }
    log::debug!("[UI] Confetti launched");
}
