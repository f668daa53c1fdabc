use std::time::Duration;

use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;
use salon_core::page::{CountUp, CountUpPhase, STAT_VISIBLE_THRESHOLD};
use web_sys::IntersectionObserver;

use crate::utils::browser::{observe_first_intersection, prefers_reduced_motion};

/// A number that counts up from zero the first time it scrolls into view.
/// Renders the final value on the server so the page reads correctly
/// without WASM.
#[component]
pub fn StatCounter(#[prop(into)] value: String, #[prop(into)] label: String) -> impl IntoView {
    let counter = CountUp::parse(&value);
    let phase = RwSignal::new(CountUpPhase::Waiting);
    let interval = StoredValue::new(None::<IntervalHandle>);
    let observer = StoredValue::new_local(None::<IntersectionObserver>);
    let stat_ref = NodeRef::<html::Div>::new();

    if let Some(counter) = counter.clone() {
        Effect::new(move |_| {
            let Some(el) = stat_ref.get() else {
                return;
            };
            if prefers_reduced_motion() || observer.with_value(Option::is_some) {
                return;
            }

            let counter = counter.clone();
            let watching = observe_first_intersection(&el, STAT_VISIBLE_THRESHOLD, move || {
                start_count_up(counter, phase, interval)
            });
            observer.set_value(watching);
        });
    }

    on_cleanup(move || {
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
        if let Some(observer) = observer.try_get_value().flatten() {
            observer.disconnect();
        }
    });

    let text = move || match &counter {
        Some(counter) => counter.text(phase.get()),
        None => value.clone(),
    };

    view! {
        <div class="stat" node_ref=stat_ref>
            <span class="stat-number">{text}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

fn start_count_up(
    counter: CountUp,
    phase: RwSignal<CountUpPhase>,
    interval: StoredValue<Option<IntervalHandle>>,
) {
    phase.update(|p| *p = counter.start(*p));
    let every = Duration::from_millis(u64::from(counter.frame_interval_ms()));

    let started = set_interval_with_handle(
        move || {
            phase.update(|p| *p = counter.tick(*p));
            if phase.get_untracked() == CountUpPhase::Done {
                if let Some(handle) = interval.get_value() {
                    handle.clear();
                }
            }
        },
        every,
    );
    match started {
        Ok(handle) => interval.set_value(Some(handle)),
        Err(e) => {
            warn!("Count-up timer failed to start: {:?}", e);
            phase.set(CountUpPhase::Done);
        }
    }
}
