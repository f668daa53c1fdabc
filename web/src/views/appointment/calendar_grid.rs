use chrono::NaiveDate;
use leptos::prelude::*;
use salon_core::booking::calendar::WEEKDAY_HEADERS;
use salon_core::{BookingFlow, CalendarCell};

use super::report_rejection;
use crate::utils::browser::local_today;

#[component]
pub fn CalendarGrid(
    flow: RwSignal<BookingFlow>,
    /// False during server rendering and hydration; the grid only renders
    /// days once the visitor's local date is available.
    mounted: ReadSignal<bool>,
) -> impl IntoView {
    let select_day = move |date: NaiveDate| {
        if let Some(Err(err)) = flow.try_update(|f| f.select_date(date, local_today())) {
            report_rejection(err);
        }
    };

    view! {
        <div class="booking-calendar">
            <div class="calendar-header">
                <button
                    type="button"
                    id="prevMonthBtn"
                    class="calendar-nav"
                    aria-label="Önceki ay"
                    on:click=move |_| flow.update(|f| f.show_previous_month())
                >
                    "‹"
                </button>

                <span id="calendarMonthYear" class="calendar-month-year">
                    {move || mounted.get().then(|| flow.with(|f| f.displayed_month().label()))}
                </span>

                <button
                    type="button"
                    id="nextMonthBtn"
                    class="calendar-nav"
                    aria-label="Sonraki ay"
                    on:click=move |_| flow.update(|f| f.show_next_month())
                >
                    "›"
                </button>
            </div>

            <div class="calendar-weekdays">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|name| view! { <div class="calendar-weekday">{*name}</div> })
                    .collect::<Vec<_>>()}
            </div>

            <div id="calendarDays" class="calendar-days">
                {move || {
                    if !mounted.get() {
                        return Vec::new();
                    }
                    let today = local_today();
                    flow.with(|f| f.calendar_cells(today))
                        .into_iter()
                        .map(|cell| match cell {
                            CalendarCell::Placeholder => {
                                view! { <div class="calendar-day empty"></div> }.into_any()
                            }
                            CalendarCell::Day(day) => {
                                let date = day.date;
                                view! {
                                    <button
                                        type="button"
                                        class=day.class_name()
                                        disabled=day.is_disabled()
                                        on:click=move |_| select_day(date)
                                    >
                                        {day.day}
                                    </button>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
