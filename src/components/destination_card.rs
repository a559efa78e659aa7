//! Destination Card Component
//!
//! Card for one catalog destination with a "Learn More" button that opens
//! the choice modal.

use antipolo_core::{Destination, DestinationSelection};
use dioxus::prelude::*;

use crate::components::reveal::Reveal;
use crate::context::use_overlays;

const HOVER_LIFT: &str = "transform: translateY(-10px) scale(1.02);";
const HOVER_REST: &str = "transform: translateY(0) scale(1);";

/// Inline transform for the card. Empty until the first hover, so the
/// `loading` offset still applies while the card waits to be revealed.
fn hover_style(hovered: Option<bool>) -> &'static str {
    match hovered {
        None => "",
        Some(true) => HOVER_LIFT,
        Some(false) => HOVER_REST,
    }
}

#[component]
pub fn DestinationCard(destination: Destination) -> Element {
    let mut overlays = use_overlays();
    let mut hovered: Signal<Option<bool>> = use_signal(|| None);

    let style = hover_style(hovered());
    let selection = DestinationSelection::new(destination.id.clone(), destination.name.clone());

    rsx! {
        Reveal {
            class: "destination-card".to_string(),
            style: style.to_string(),
            onmouseenter: move |_| hovered.set(Some(true)),
            onmouseleave: move |_| hovered.set(Some(false)),

            img { class: "card-image", src: "{destination.image}", alt: "{destination.name}" }

            div { class: "card-content",
                h3 { "{destination.name}" }
                p { "{destination.summary}" }

                div { class: "card-actions",
                    button {
                        class: "card-btn",
                        r#type: "button",
                        "data-id": "{destination.id}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            overlays.open_choice(selection.clone());
                        },
                        "Learn More"
                    }
                    a {
                        class: "card-link",
                        href: "{destination.place_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Open in Maps"
                    }
                }
            }
        }
    }
}
