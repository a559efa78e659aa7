//! Mobile Navigation Toggle
//!
//! Hamburger button shown on screens <= 768px.

use dioxus::prelude::*;

use crate::context::use_nav;

/// Menu toggle for the compact layout.
///
/// Hidden in the wide layout, where the navigation panel is always shown.
#[component]
pub fn MenuToggle() -> Element {
    let mut nav = use_nav();
    let state = nav();
    let display = if state.toggle_visible() { "block" } else { "none" };

    rsx! {
        button {
            class: "hamburger",
            r#type: "button",
            style: "display: {display};",
            "aria-label": "Toggle navigation",
            "aria-expanded": "{state.is_open()}",
            onclick: move |_| nav.write().toggle(),
            "\u{2630}"
        }
    }
}
