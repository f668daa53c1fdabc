use leptos::prelude::*;
use salon_core::{BookingFlow, Step};
use thaw::*;

use super::{report_rejection, BookingSummaryPanel, CalendarGrid, TimeSlotPicker};
use crate::utils::browser::local_today;

const STEPS: [(Step, &str); 3] = [
    (Step::Date, "Tarih"),
    (Step::Time, "Saat"),
    (Step::Summary, "Onay"),
];

/// The three-step booking widget. All selection state lives in one
/// `BookingFlow`; the step views only render it and forward clicks.
#[component]
pub fn AppointmentBooking() -> impl IntoView {
    let flow = RwSignal::new(BookingFlow::new(local_today()));
    // The server's date may not be the visitor's, so the grid stays empty
    // until the client has mounted and moved the view to its own month.
    let mounted = RwSignal::new(false);
    Effect::new(move |_| {
        flow.update(|f| f.show_month_containing(local_today()));
        mounted.set(true);
    });
    let step = Memo::new(move |_| flow.with(|f| f.current_step()));

    let advance = move || {
        if let Some(Err(err)) = flow.try_update(|f| f.advance()) {
            report_rejection(err);
        }
    };
    let back = move || {
        flow.update(|f| {
            f.back();
        });
    };

    view! {
        <div id="appointmentBooking" class="appointment-booking">
            <ol class="booking-progress">
                {STEPS
                    .iter()
                    .map(|(s, label)| {
                        let s = *s;
                        view! {
                            <li
                                class="booking-progress-item"
                                class:active=move || step.get() == s
                                class:done=move || (step.get().number() > s.number())
                            >
                                <span class="booking-progress-number">{s.number()}</span>
                                <span class="booking-progress-label">{*label}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>

            <div
                class="booking-step"
                class:active=move || step.get() == Step::Date
                hidden=move || step.get() != Step::Date
                data-step="1"
            >
                <CalendarGrid flow=flow mounted=mounted.read_only()/>
                <div class="booking-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || flow.with(|f| f.state().selected_date.is_none()))
                        on_click=move |_| advance()
                    >
                        "Saat Seç →"
                    </Button>
                </div>
            </div>

            <div
                class="booking-step"
                class:active=move || step.get() == Step::Time
                hidden=move || step.get() != Step::Time
                data-step="2"
            >
                <TimeSlotPicker flow=flow/>
                <div class="booking-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| back()>
                        "← Geri"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || flow.with(|f| f.state().selected_time.is_none()))
                        on_click=move |_| advance()
                    >
                        "Devam →"
                    </Button>
                </div>
            </div>

            <div
                class="booking-step"
                class:active=move || step.get() == Step::Summary
                hidden=move || step.get() != Step::Summary
                data-step="3"
            >
                <BookingSummaryPanel flow=flow/>
            </div>
        </div>
    }
}
