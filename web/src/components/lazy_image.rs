use leptos::prelude::*;

/// Image that the browser defers until it nears the viewport.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <img src=src alt=alt class=class loading="lazy" decoding="async"/>
    }
}
