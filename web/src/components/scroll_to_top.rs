use leptos::ev;
use leptos::prelude::*;
use salon_core::page::scroll_top_visible;

use crate::utils::browser::{scroll_to_top, scroll_y};

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        visible.set(scroll_top_visible(scroll_y()));
        let handle = window_event_listener(ev::scroll, move |_| {
            visible.set(scroll_top_visible(scroll_y()));
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <button
            type="button"
            id="scrollTopBtn"
            class="scroll-top"
            class:visible=move || visible.get()
            aria-label="Yukarı çık"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
