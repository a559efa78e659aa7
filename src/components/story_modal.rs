//! Story Modal Component
//!
//! Narrative overlay for one destination. Mounted while `Overlays::story`
//! is set and unmounted, not hidden, on close.

use antipolo_core::StoryView;
use dioxus::prelude::*;

use crate::components::button::CloseButton;
use crate::context::use_overlays;

/// Mount point for the story overlay
#[component]
pub fn StoryHost() -> Element {
    let story = use_overlays().story;

    match story() {
        Some(story) => rsx! { StoryModal { story } },
        None => VNode::empty(),
    }
}

#[component]
fn StoryModal(story: StoryView) -> Element {
    let mut overlays = use_overlays();

    rsx! {
        div {
            class: "story-modal-overlay",
            onclick: move |_| overlays.close_story(),

            div {
                class: "story-modal",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    class: "story-close-btn".to_string(),
                    onclick: move |_| overlays.close_story(),
                }

                h2 { class: "story-title", "{story.title}" }
                p { class: "story-body", "{story.body}" }
            }
        }
    }
}
