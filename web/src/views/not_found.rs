use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page pointing visitors back to the landing page and the booking widget.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <h1 class="not-found__title">"Sayfa Bulunamadı"</h1>
            <p class="not-found__text">
                "Aradığınız sayfa taşınmış ya da hiç var olmamış olabilir."
            </p>

            <div class="not-found__actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/", Default::default());
                        }
                    }
                >
                    "Ana Sayfa"
                </button>
                <button
                    class="btn btn-outlined"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/#randevu-al", Default::default());
                        }
                    }
                >
                    "Randevu Al"
                </button>
            </div>
        </div>
    }
}
