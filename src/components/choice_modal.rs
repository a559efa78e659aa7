//! Choice Modal Component
//!
//! "Learn More" dialog: view the destination on a map, or read its story.

use std::rc::Rc;

use antipolo_core::overlay::DESTINATION_UNAVAILABLE;
use antipolo_core::{resolve_choice, ChoiceAction, ChoiceOutcome, DestinationSelection};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;

use crate::components::button::{with_modifier, CloseButton};
use crate::context::{use_catalog, use_overlays};
use crate::dom;

const ACTION_ATTRIBUTE: &str = "data-action";

/// Action named by a clicked button's `data-action`. Clicks outside any
/// button give `None`, as do unrecognized values, which are logged.
fn parse_action(raw: Option<&str>) -> Option<ChoiceAction> {
    match raw?.parse::<ChoiceAction>() {
        Ok(action) => Some(action),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

/// Choice Modal
///
/// Shown while `Overlays::choice` holds a selection. The selection is handed
/// to each choice button, so the handlers act on the destination the modal
/// was opened for.
#[component]
pub fn ChoiceModal() -> Element {
    let mut overlays = use_overlays();
    let mut choice = overlays.choice;
    let catalog = use_catalog();

    use_hook(|| {
        Rc::new(dom::document_listener("keydown", move |event| {
            if dom::is_escape(event) && choice.peek().is_some() {
                choice.set(None);
            }
        }))
    });

    let mut choose = move |selection: DestinationSelection, action: ChoiceAction| {
        match resolve_choice(&catalog.read(), &selection, action) {
            Ok(ChoiceOutcome::OpenMap(url)) => dom::open_in_new_tab(&url),
            Ok(ChoiceOutcome::ShowStory(story)) => overlays.open_story(story),
            Err(e) => {
                tracing::warn!("{}", e);
                dom::alert(DESTINATION_UNAVAILABLE);
            }
        }
        overlays.close_choice();
    };

    let selection = choice();
    let shown = selection.is_some();
    let hidden = (!shown).to_string();
    let title = selection
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            id: "choice-modal",
            class: with_modifier("choice-modal", "show", shown),
            "aria-hidden": "{hidden}",
            onclick: move |_| overlays.close_choice(),

            div {
                class: "choice-modal-content",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    class: "choice-modal-close".to_string(),
                    onclick: move |_| overlays.close_choice(),
                }

                h2 { class: "choice-modal-title", "{title}" }
                p { class: "choice-modal-subtitle", "What would you like to do?" }

                div {
                    class: "choice-buttons",
                    onclick: move |evt: MouseEvent| {
                        let raw = evt
                            .try_as_web_event()
                            .and_then(|e| dom::closest_attribute(&e, ACTION_ATTRIBUTE));
                        let Some(action) = parse_action(raw.as_deref()) else {
                            return;
                        };
                        if let Some(selection) = selection.clone() {
                            choose(selection, action);
                        }
                    },

                    for action in [ChoiceAction::Location, ChoiceAction::Story] {
                        button {
                            key: "{action}",
                            class: "choice-btn",
                            r#type: "button",
                            "data-action": "{action}",
                            {action.label()}
                        }
                    }
                }
            }
        }
    }
}
