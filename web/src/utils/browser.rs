//! Thin wrappers over the browser APIs the components need. Everything here
//! touches `window()`/`document()`, so it may only run on the client: from
//! event handlers or effects.

use chrono::NaiveDate;
use js_sys::Array;
use leptos::logging::{error, warn};
use leptos::prelude::*;
use salon_core::page::SectionBounds;
use salon_core::{Handoff, HandoffRequest};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

/// Today's date in the visitor's local time zone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Blocking notice, used for booking guard violations.
pub fn show_notice(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        error!("Failed to show notice {:?}: {:?}", message, e);
    }
}

/// Opens the handoff link in a new browsing context.
pub struct BrowserHandoff;

impl Handoff for BrowserHandoff {
    fn dispatch(&self, request: &HandoffRequest) {
        match window().open_with_url_and_target(&request.url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => warn!("Popup blocked while opening {}", request.url),
            Err(e) => error!("Failed to open {}: {:?}", request.url, e),
        }
    }
}

/// Hands the current tab to a `mailto:` (or any other) link.
pub fn navigate_to(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        error!("Failed to navigate to {}: {:?}", url, e);
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn section_bounds() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

/// The first and last elements matching `selector`, and whether either has focus.
pub struct FocusEdges {
    pub first: HtmlElement,
    pub last: HtmlElement,
    pub at_first: bool,
    pub at_last: bool,
}

pub fn focus_edges(selector: &str) -> Option<FocusEdges> {
    let nodes = document().query_selector_all(selector).ok()?;
    let first = nodes.item(0)?.dyn_into::<HtmlElement>().ok()?;
    let last = nodes
        .item(nodes.length().checked_sub(1)?)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let active = document().active_element();
    let has_focus = |el: &HtmlElement| {
        let el: &Element = el;
        active.as_ref() == Some(el)
    };
    Some(FocusEdges {
        at_first: has_focus(&first),
        at_last: has_focus(&last),
        first,
        last,
    })
}

/// Keeps the page from scrolling behind the open mobile menu.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        if let Err(e) = body.class_list().toggle_with_force("no-scroll", locked) {
            warn!("Failed to toggle no-scroll: {:?}", e);
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Runs `on_visible` the first time `target` intersects the viewport at
/// `threshold`, then stops observing. The caller should `disconnect` the
/// returned observer if the element goes away first.
pub fn observe_first_intersection(
    target: &Element,
    threshold: f64,
    on_visible: impl FnOnce() + 'static,
) -> Option<IntersectionObserver> {
    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if visible {
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    observer.observe(target);
    callback.forget();
    Some(observer)
}
