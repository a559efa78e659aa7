//! Site Header Component
//!
//! Fixed header with logo, in-page navigation and the mobile menu toggle.
//! Switches to its compact "scrolled" style once the page has scrolled.

use antipolo_core::scroll::{fragment_id, header_scrolled};
use dioxus::prelude::*;

use crate::components::button::with_modifier;
use crate::components::mobile_nav::MenuToggle;
use crate::context::{use_nav, use_scroll_y};
use crate::dom;

/// Element id of the header, used to offset anchor scrolling
pub const HEADER_ID: &str = "main-header";

/// Top-level page section reachable from the navigation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageSection {
    Home,
    Destinations,
    Attractions,
    Gallery,
    Contact,
}

impl PageSection {
    pub const ALL: [PageSection; 5] = [
        PageSection::Home,
        PageSection::Destinations,
        PageSection::Attractions,
        PageSection::Gallery,
        PageSection::Contact,
    ];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            PageSection::Home => "Home",
            PageSection::Destinations => "Destinations",
            PageSection::Attractions => "Attractions",
            PageSection::Gallery => "Gallery",
            PageSection::Contact => "Contact",
        }
    }

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            PageSection::Home => "hero",
            PageSection::Destinations => "destinations",
            PageSection::Attractions => "attractions",
            PageSection::Gallery => "gallery",
            PageSection::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Site header
///
/// - Left: logo
/// - Right: navigation links (smooth in-page scrolling)
/// - Compact layout: hamburger toggle opening the link panel
#[component]
pub fn SiteHeader() -> Element {
    let scroll_y = use_scroll_y();
    let nav = use_nav();

    let scrolled = header_scrolled(scroll_y());
    let state = nav();
    let links_class = with_modifier("nav-links", "mobile-open", state.is_open());
    let links_style = if state.panel_forced_visible() { "display: flex;" } else { "" };

    rsx! {
        header {
            id: HEADER_ID,
            class: if scrolled { "scrolled" } else { "" },

            nav {
                a { class: "logo", href: "#hero", "Antipolo" }

                ul { class: "{links_class}", style: "{links_style}",
                    for section in PageSection::ALL {
                        li { key: "{section.id()}",
                            a {
                                href: "{section.href()}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    let href = section.href();
                                    if let Some(id) = fragment_id(&href) {
                                        dom::scroll_to_anchor(id, HEADER_ID);
                                    }
                                },
                                "{section.display_name()}"
                            }
                        }
                    }
                }

                MenuToggle {}
            }
        }
    }
}
