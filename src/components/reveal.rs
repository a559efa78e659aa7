//! Reveal-on-scroll wrappers.
//!
//! Content blocks fade in through the `loading`/`loaded` classes; page
//! sections through inline styles. Both reveal once and stay revealed.

use antipolo_core::{RevealKind, RevealState};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;

use crate::dom::{ViewportWatch, Watch};

/// Track one element's reveal state. Attach the returned handler to `onmounted`.
fn use_reveal(kind: RevealKind) -> (Signal<RevealState>, impl FnMut(MountedEvent) + 'static) {
    let mut state = use_signal(RevealState::default);
    let mut watch: Signal<Option<ViewportWatch>> = use_signal(|| None);

    let on_mounted = move |evt: MountedEvent| {
        let Some(element) = evt.try_as_web_event() else {
            state.set(RevealState::Revealed);
            return;
        };
        let observed = ViewportWatch::new(&element, kind.observer_config(), move |visible| {
            if state.write().observe(visible) {
                tracing::trace!(?kind, "revealed");
            }
            if state.peek().is_revealed() {
                Watch::Stop
            } else {
                Watch::Continue
            }
        });
        match observed {
            Ok(observer) => watch.set(Some(observer)),
            Err(e) => {
                // No observer support: show the element right away
                tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                state.set(RevealState::Revealed);
            }
        }
    };

    (state, on_mounted)
}

/// Content block that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(
    /// Element classes (e.g. `destination-card`)
    class: String,
    /// Inline style, for cards that restyle themselves on hover
    #[props(default)]
    style: Option<String>,
    #[props(default)]
    onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    onmouseleave: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let (state, on_mounted) = use_reveal(RevealKind::Content);
    let style = style.unwrap_or_default();

    rsx! {
        div {
            class: "{class} {state().content_class()}",
            style: "{style}",
            onmounted: on_mounted,
            onmouseenter: move |e| {
                if let Some(handler) = &onmouseenter {
                    handler.call(e);
                }
            },
            onmouseleave: move |e| {
                if let Some(handler) = &onmouseleave {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Top-level page section that slides up the first time it scrolls into view.
#[component]
pub fn RevealSection(id: String, #[props(default)] class: String, children: Element) -> Element {
    let (state, on_mounted) = use_reveal(RevealKind::Section);

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            style: "{state().section_style()}",
            onmounted: on_mounted,
            {children}
        }
    }
}
