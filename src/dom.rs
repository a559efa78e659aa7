//! Thin wrappers over the browser APIs the page needs beyond what Dioxus renders.
//!
//! Every lookup of `window`, `document` or an element is optional; a missing
//! object is logged and the operation becomes a no-op.

use antipolo_core::reveal::ObserverConfig;
use gloo::events::EventListener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions,
};

/// Width assumed when the viewport cannot be measured
const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

/// Listen for `event` on the window for as long as the returned value lives.
pub fn window_listener<F>(event: &'static str, callback: F) -> Option<EventListener>
where
    F: FnMut(&Event) + 'static,
{
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window; '{}' listener not installed", event);
        return None;
    };
    Some(EventListener::new(&window, event, callback))
}

/// Listen for `event` on the document for as long as the returned value lives.
pub fn document_listener<F>(event: &'static str, callback: F) -> Option<EventListener>
where
    F: FnMut(&Event) + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::warn!("No document; '{}' listener not installed", event);
        return None;
    };
    Some(EventListener::new(&document, event, callback))
}

/// True for an Escape keydown.
pub fn is_escape(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|e| e.key() == "Escape")
}

/// `attribute` of the nearest element, from the event target upwards, that
/// carries it.
pub fn closest_attribute(event: &Event, attribute: &str) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let carrier = target.closest(&format!("[{}]", attribute)).ok().flatten()?;
    carrier.get_attribute(attribute)
}

fn body() -> Option<HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}

/// Set the page body's `overflow`.
pub fn set_body_overflow(value: &str) {
    match body() {
        Some(body) => {
            if let Err(e) = body.style().set_property("overflow", value) {
                tracing::warn!("Failed to set body overflow: {:?}", e);
            }
        }
        None => tracing::warn!("No document body; overflow unchanged"),
    }
}

/// Add a class to the page body.
pub fn add_body_class(class: &str) {
    if let Some(body) = body() {
        if let Err(e) = body.class_list().add_1(class) {
            tracing::warn!("Failed to add body class {}: {:?}", class, e);
        }
    }
}

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Smooth-scroll so that element `target_id` sits just below the header
/// `header_id`. Returns false, without scrolling, if the target is missing.
pub fn scroll_to_anchor(target_id: &str, header_id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = html_element_by_id(target_id) else {
        tracing::debug!("Anchor target #{} not found", target_id);
        return false;
    };
    let header_height = html_element_by_id(header_id)
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or(0.0);

    let top = antipolo_core::scroll::anchor_scroll_top(f64::from(target.offset_top()), header_height);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window; cannot open {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => tracing::debug!("Opened {}", url),
        Ok(None) => tracing::warn!("Popup blocked for {}", url),
        Err(e) => tracing::warn!("Failed to open {}: {:?}", url, e),
    }
}

/// Blocking alert dialog.
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Returned by a [`ViewportWatch`] callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

/// An intersection observer on one element. Disconnects on drop.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportWatch {
    /// Observe `element`, calling `on_change(is_intersecting)` for every
    /// report. Returning [`Watch::Stop`] disconnects the observer.
    pub fn new<F>(element: &Element, config: ObserverConfig, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool) -> Watch + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if on_change(entry.is_intersecting()) == Watch::Stop {
                        observer.disconnect();
                        return;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(config.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
