use leptos::ev;
use leptos::prelude::*;
use salon_core::page::FaqAccordion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[component]
pub fn FaqList(entries: Vec<FaqEntry>) -> impl IntoView {
    let accordion = RwSignal::new(FaqAccordion::default());

    view! {
        <div class="faq-list">
            {entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <details class="faq-item" prop:open=move || accordion.with(|a| a.is_open(index))>
                            <summary on:click=move |ev: ev::MouseEvent| {
                                // the accordion owns the open state, not the browser
                                ev.prevent_default();
                                accordion.update(|a| a.toggle(index));
                            }>
                                {entry.question}
                            </summary>
                            <p class="faq-answer">{entry.answer}</p>
                        </details>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
