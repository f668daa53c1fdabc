use leptos::prelude::*;
use salon_core::{BookingFlow, TimeSlot};

use super::report_rejection;

#[component]
pub fn TimeSlotPicker(flow: RwSignal<BookingFlow>) -> impl IntoView {
    let select_slot = move |slot: TimeSlot| {
        if let Some(Err(err)) = flow.try_update(|f| f.select_time(slot)) {
            report_rejection(err);
        }
    };

    view! {
        <div class="time-slot-picker">
            <p class="time-slot-picker-subtitle">
                {move || {
                    flow.with(|f| f.selected_date_label())
                        .map(|date| format!("{} için uygun saatler", date))
                        .unwrap_or_default()
                }}
            </p>

            <div id="timeSlots" class="time-slots">
                {move || {
                    flow.with(|f| f.time_slot_cells())
                        .into_iter()
                        .map(|cell| {
                            let slot = cell.slot;
                            let label = cell.label.clone();
                            view! {
                                <button
                                    type="button"
                                    class="time-slot"
                                    class:active=cell.is_selected
                                    data-time=label
                                    on:click=move |_| select_slot(slot)
                                >
                                    {cell.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
