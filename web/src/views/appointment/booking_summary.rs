use leptos::prelude::*;
use salon_core::BookingFlow;
use thaw::*;

use super::report_rejection;
use crate::config::use_salon_config;
use crate::utils::browser::BrowserHandoff;

#[component]
pub fn BookingSummaryPanel(flow: RwSignal<BookingFlow>) -> impl IntoView {
    let config = use_salon_config();
    let summary = Memo::new(move |_| flow.with(|f| f.summary()));

    let confirm = move || {
        let phone_number = config.get().whatsapp_number;
        if let Err(err) = flow.with_untracked(|f| f.confirm(&phone_number, &BrowserHandoff)) {
            report_rejection(err);
        }
    };

    view! {
        <div class="booking-summary">
            <div class="summary-row">
                <span class="summary-label">"Tarih"</span>
                <span id="summaryDate" class="summary-value">
                    {move || summary.get().map(|s| s.formatted_date).unwrap_or_default()}
                </span>
            </div>
            <div class="summary-row">
                <span class="summary-label">"Saat"</span>
                <span id="summaryTime" class="summary-value">
                    {move || summary.get().map(|s| s.time_label).unwrap_or_default()}
                </span>
            </div>

            <div class="booking-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        flow.update(|f| {
                            f.back();
                        });
                    }
                >
                    "← Geri"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="whatsapp-confirm"
                    on_click=move |_| confirm()
                >
                    "WhatsApp ile Onayla"
                </Button>
            </div>
        </div>
    }
}
