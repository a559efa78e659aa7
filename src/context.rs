//! Page-wide state shared through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| overlays);
//!
//! // In child components
//! let mut overlays = use_overlays();
//! overlays.open_lightbox(LightboxImage::new(src, alt));
//! ```

use antipolo_core::{Catalog, DestinationSelection, LightboxImage, NavState, PageOverflow, StoryView};
use dioxus::prelude::*;

/// The three page overlays. Each is `Some` while shown.
///
/// Only one lightbox, one choice modal and one story overlay exist
/// page-wide; opening one again replaces its contents.
#[derive(Clone, Copy, PartialEq)]
pub struct Overlays {
    pub lightbox: Signal<Option<LightboxImage>>,
    pub choice: Signal<Option<DestinationSelection>>,
    pub story: Signal<Option<StoryView>>,
}

impl Overlays {
    pub fn open_lightbox(&mut self, image: LightboxImage) {
        tracing::debug!(src = %image.src, "lightbox open");
        self.lightbox.set(Some(image));
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.set(None);
    }

    pub fn open_choice(&mut self, selection: DestinationSelection) {
        tracing::debug!(destination = %selection.id, "choice modal open");
        self.choice.set(Some(selection));
    }

    pub fn close_choice(&mut self) {
        self.choice.set(None);
    }

    pub fn open_story(&mut self, story: StoryView) {
        self.story.set(Some(story));
    }

    pub fn close_story(&mut self) {
        self.story.set(None);
    }

    /// Body overflow implied by the overlays currently shown.
    ///
    /// Reads subscribe the calling scope, so this can drive an effect.
    pub fn page_overflow(&self) -> PageOverflow {
        PageOverflow::for_overlays([
            self.lightbox.read().is_some(),
            self.choice.read().is_some(),
            self.story.read().is_some(),
        ])
    }
}

/// Hook to access the page overlays from context.
pub fn use_overlays() -> Overlays {
    use_context::<Overlays>()
}

/// Hook to access the destination and attraction tables.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// Window vertical scroll offset, updated on every scroll event.
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollY(pub Signal<f64>);

pub fn use_scroll_y() -> Signal<f64> {
    use_context::<ScrollY>().0
}

/// Hook to access the responsive navigation state.
pub fn use_nav() -> Signal<NavState> {
    use_context::<Signal<NavState>>()
}
