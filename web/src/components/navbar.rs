use leptos::ev;
use leptos::logging::warn;
use leptos::prelude::*;
use salon_core::page::{active_section, navbar_is_scrolled, FocusWrap, MobileMenu};

use crate::utils::browser::{focus_edges, scroll_y, section_bounds, set_scroll_locked};

const MOBILE_MENU_FOCUSABLE: &str = "#mobileMenu a, #mobileMenu button";

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("hizmetler", "Hizmetler"),
    ("galeri", "Galeri"),
    ("randevu-al", "Randevu Al"),
    ("sss", "SSS"),
    ("iletisim", "İletişim"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let current_section = RwSignal::new(None::<String>);
    let menu = RwSignal::new(MobileMenu::default());

    Effect::new(move |_| {
        let scroll = window_event_listener(ev::scroll, move |_| {
            let y = scroll_y();
            scrolled.set(navbar_is_scrolled(y));
            let sections = section_bounds();
            current_section.set(active_section(y, &sections).map(str::to_string));
        });
        let keys = window_event_listener(ev::keydown, move |ev| {
            let key = ev.key();
            if menu.try_update(|m| m.on_key(&key)).unwrap_or(false) {
                set_scroll_locked(false);
                return;
            }
            if key != "Tab" || !menu.with_untracked(|m| m.is_open()) {
                return;
            }

            let Some(edges) = focus_edges(MOBILE_MENU_FOCUSABLE) else {
                return;
            };
            let wrap = menu.with_untracked(|m| {
                m.focus_wrap(&key, ev.shift_key(), edges.at_first, edges.at_last)
            });
            let target = match wrap {
                Some(FocusWrap::First) => &edges.first,
                Some(FocusWrap::Last) => &edges.last,
                None => return,
            };
            ev.prevent_default();
            if let Err(e) = target.focus() {
                warn!("Failed to move focus in mobile menu: {:?}", e);
            }
        });
        on_cleanup(move || {
            scroll.remove();
            keys.remove();
        });
    });

    let toggle_menu = move |_: ev::MouseEvent| {
        menu.update(|m| m.toggle());
        set_scroll_locked(menu.with_untracked(|m| m.is_open()));
    };
    let close_menu = move |_: ev::MouseEvent| {
        menu.update(|m| m.close());
        set_scroll_locked(false);
    };

    let link_class = move |id: &'static str| {
        move || {
            if current_section.with(|s| s.as_deref() == Some(id)) {
                "navbar__link active"
            } else {
                "navbar__link"
            }
        }
    };

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scrolled.get()>
            <div class="navbar__container">
                <div class="navbar__brand">
                    <a href="#main" class="navbar__logo">"Fleura Nails"</a>
                </div>

                <div class="navbar__links nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <a href=format!("#{}", id) class=link_class(id)>
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    type="button"
                    id="mobileToggle"
                    class="navbar__toggle"
                    class:active=move || menu.with(|m| m.is_open())
                    aria-label="Menü"
                    aria-controls="mobileMenu"
                    aria-expanded=move || menu.with(|m| m.aria_expanded())
                    on:click=toggle_menu
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div id="mobileMenu" class="mobile-menu" class:active=move || menu.with(|m| m.is_open())>
                {NAV_LINKS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <a href=format!("#{}", id) on:click=close_menu>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}
