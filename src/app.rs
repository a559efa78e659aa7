use std::rc::Rc;

use antipolo_core::{Catalog, NavState};
use dioxus::prelude::*;

use crate::context::{Overlays, ScrollY};
use crate::dom;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the catalog, overlay state, scroll position and
/// navigation layout, and owns the window-level listeners that feed them.
#[component]
pub fn App() -> Element {
    let catalog = use_signal(|| match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            Catalog::default()
        }
    });
    let overlays = Overlays {
        lightbox: use_signal(|| None),
        choice: use_signal(|| None),
        story: use_signal(|| None),
    };
    let mut scroll_y = use_signal(dom::scroll_y);
    let mut nav = use_signal(|| NavState::new(dom::viewport_width()));

    use_context_provider(|| catalog);
    use_context_provider(|| overlays);
    use_context_provider(|| ScrollY(scroll_y));
    use_context_provider(|| nav);

    // Window listeners live as long as the app
    use_hook(|| {
        Rc::new(dom::window_listener("scroll", move |_| {
            scroll_y.set(dom::scroll_y());
        }))
    });
    use_hook(|| {
        Rc::new(dom::window_listener("resize", move |_| {
            nav.write().resize(dom::viewport_width());
        }))
    });

    // Page scroll is locked while any overlay is shown
    use_effect(move || {
        dom::set_body_overflow(overlays.page_overflow().as_css());
    });

    use_effect(move || {
        dom::add_body_class("loaded");
        tracing::info!(
            destinations = catalog.peek().destinations().len(),
            attractions = catalog.peek().attractions().len(),
            "Antipolo Tourism page loaded"
        );
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
