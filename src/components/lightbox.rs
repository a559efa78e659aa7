//! Lightbox Component
//!
//! Full-screen single-image viewer. Closes on the close button, a click on
//! the backdrop, or Escape.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::button::{with_modifier, CloseButton};
use crate::context::use_overlays;
use crate::dom;

#[component]
pub fn Lightbox() -> Element {
    let mut overlays = use_overlays();
    let mut lightbox = overlays.lightbox;

    use_hook(|| {
        Rc::new(dom::document_listener("keydown", move |event| {
            if dom::is_escape(event) && lightbox.peek().is_some() {
                lightbox.set(None);
            }
        }))
    });

    let image = lightbox();
    let shown = image.is_some();
    let hidden = (!shown).to_string();
    let (src, alt) = image.map(|i| (i.src, i.alt)).unwrap_or_default();

    rsx! {
        div {
            id: "lightbox",
            class: with_modifier("lightbox", "show", shown),
            "aria-hidden": "{hidden}",
            onclick: move |_| overlays.close_lightbox(),

            div {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| overlays.close_lightbox() }

                if shown {
                    img { class: "lightbox-img", src: "{src}", alt: "{alt}" }
                }
            }
        }
    }
}
