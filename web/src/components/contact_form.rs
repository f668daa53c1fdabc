use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use salon_core::contact::{
    format_phone_input, mailto_link, validate, validate_name, validate_phone, validate_service,
    ContactForm, Service,
};
use salon_core::ContactError;
use thaw::{MessageBar, MessageBarIntent};

use crate::config::use_salon_config;
use crate::utils::browser::navigate_to;

const SUCCESS_VISIBLE_FOR: Duration = Duration::from_secs(5);
const SUCCESS_DELAY: Duration = Duration::from_millis(500);

/// Appointment request form. Submitting it opens the visitor's mail client
/// with a prefilled message to the salon.
#[component]
pub fn ContactFormView() -> impl IntoView {
    let config = use_salon_config();
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(Vec::<ContactError>::new());
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let set_field_error = move |field: &'static str, result: Result<(), ContactError>| {
        errors.update(|errs| {
            errs.retain(|e| e.field() != field);
            if let Err(e) = result {
                errs.push(e);
            }
        });
    };
    let field_error = move |field: &'static str| {
        move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|e| e.field() == field)
                    .map(|e| view! { <span class="field-error" role="alert">{e.to_string()}</span> })
            })
        }
    };
    let has_error = move |field: &'static str| errors.with(|errs| errs.iter().any(|e| e.field() == field));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(found) = validate(&current) {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        sending.set(true);

        navigate_to(&mailto_link(&config.get().contact_email, &current));

        set_timeout(
            move || {
                sending.set(false);
                sent.set(true);
                form.set(ContactForm::default());
                set_timeout(move || sent.set(false), SUCCESS_VISIBLE_FOR);
            },
            SUCCESS_DELAY,
        );
    };

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Ad Soyad"</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    aria-invalid=move || has_error("name").to_string()
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        form.update(|f| f.name = event_target_value(&ev));
                        set_field_error("name", Ok(()));
                    }
                    on:blur=move |_| set_field_error("name", validate_name(&form.with_untracked(|f| f.name.clone())))
                />
                {field_error("name")}
            </div>

            <div class="form-group">
                <label for="phone">"Telefon"</label>
                <input
                    id="phone"
                    name="phone"
                    type="tel"
                    placeholder="0555 123 45 67"
                    aria-invalid=move || has_error("phone").to_string()
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| {
                        let formatted = format_phone_input(&event_target_value(&ev));
                        form.update(|f| f.phone = formatted);
                        set_field_error("phone", Ok(()));
                    }
                    on:blur=move |_| set_field_error("phone", validate_phone(&form.with_untracked(|f| f.phone.clone())))
                />
                {field_error("phone")}
            </div>

            <div class="form-group">
                <label for="service">"Hizmet"</label>
                <select
                    id="service"
                    name="service"
                    aria-invalid=move || has_error("service").to_string()
                    prop:value=move || form.with(|f| f.service.map(|s| s.slug()).unwrap_or_default())
                    on:change=move |ev| {
                        let service = Service::from_slug(&event_target_value(&ev));
                        form.update(|f| f.service = service);
                        set_field_error("service", validate_service(service));
                    }
                >
                    <option value="">"Hizmet seçin"</option>
                    {Service::ALL
                        .iter()
                        .map(|s| view! { <option value=s.slug()>{s.display_name()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                {field_error("service")}
            </div>

            <div class="form-group">
                <label for="message">"Mesaj"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                {move || if sending.get() { "Gönderiliyor..." } else { "Gönder" }}
            </button>

            <Show when=move || sent.get()>
                <div class="form-success" aria-live="polite">
                    <MessageBar intent=MessageBarIntent::Success>
                        "Teşekkürler! Talebiniz başarıyla alındı. En kısa sürede sizinle iletişime geçeceğiz."
                    </MessageBar>
                </div>
            </Show>
        </form>
    }
}
