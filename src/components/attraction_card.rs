//! Attraction Card Component
//!
//! One carousel per card: prev/next buttons, dots, touch swipe, mouse drag,
//! autoplay while visible and not hovered, a persisted favorite flag, and
//! click-to-enlarge into the page lightbox.

use antipolo_core::carousel::{AUTOPLAY_INTERVAL_MS, AUTOPLAY_VISIBILITY};
use antipolo_core::{Attraction, AutoplayGate, Carousel, DragGesture, Favorites, LightboxImage};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use gloo::timers::callback::Interval;

use crate::components::button::{with_modifier, IconButton};
use crate::context::use_overlays;
use crate::dom::{ViewportWatch, Watch};
use crate::storage::BrowserStore;

/// Carousel card for one attraction
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for attraction in catalog.read().attractions() {
///         AttractionCard { key: "{attraction.id}", attraction: attraction.clone() }
///     }
/// }
/// ```
#[component]
pub fn AttractionCard(attraction: Attraction) -> Element {
    let mut overlays = use_overlays();

    let mut carousel = use_signal(|| Carousel::new(attraction.images.len()));
    let mut touch = use_signal(DragGesture::default);
    let mut mouse = use_signal(DragGesture::default);
    let mut gate = use_signal(AutoplayGate::default);
    let mut ticker: Signal<Option<Interval>> = use_signal(|| None);
    let mut visibility: Signal<Option<ViewportWatch>> = use_signal(|| None);

    let favorite_id = attraction.id.clone();
    let mut favorited = use_signal(move || Favorites::new(BrowserStore).is_favorite(&favorite_id));

    // Run the autoplay timer exactly while the gate is open
    use_effect(move || {
        let running = gate.read().is_running();
        if running == ticker.peek().is_some() {
            return;
        }
        if running {
            ticker.set(Some(Interval::new(AUTOPLAY_INTERVAL_MS, move || {
                carousel.write().next();
            })));
        } else {
            ticker.set(None);
        }
    });

    let watch_visibility = move |evt: MountedEvent| {
        let Some(element) = evt.try_as_web_event() else {
            return;
        };
        let observed = ViewportWatch::new(&element, AUTOPLAY_VISIBILITY, move |visible| {
            gate.write().set_visible(visible);
            Watch::Continue
        });
        match observed {
            Ok(observer) => visibility.set(Some(observer)),
            Err(e) => tracing::warn!("Autoplay disabled, no IntersectionObserver: {:?}", e),
        }
    };

    let title = attraction.title.clone();
    let attraction_id = attraction.id.clone();
    let toggle_favorite = move |evt: MouseEvent| {
        evt.prevent_default();
        match Favorites::new(BrowserStore).toggle(&attraction_id) {
            Ok(true) => {
                tracing::info!("Added {} to favorites", title);
                favorited.set(true);
            }
            Ok(false) => {
                tracing::info!("Removed {} from favorites", title);
                favorited.set(false);
            }
            Err(e) => tracing::warn!("Could not update favorite for {}: {}", title, e),
        }
    };

    let state = carousel();
    let favorite_class = with_modifier("favorite-btn", "favorited", favorited());

    rsx! {
        article {
            class: "attraction-card",
            "data-attraction": "{attraction.id}",
            onmounted: watch_visibility,
            onmouseenter: move |_| gate.write().set_hovered(true),
            onmouseleave: move |_| {
                gate.write().set_hovered(false);
                mouse.write().cancel();
            },

            div { class: "attraction-gallery",
                div {
                    class: "gallery-track",
                    ontouchstart: move |evt: TouchEvent| {
                        if let Some(point) = evt.touches().first() {
                            touch.write().start(point.client_coordinates().x);
                        }
                    },
                    ontouchmove: move |evt: TouchEvent| {
                        if touch.peek().is_dragging() {
                            evt.prevent_default();
                        }
                    },
                    ontouchend: move |evt: TouchEvent| {
                        let end_x = evt.touches_changed().first().map(|p| p.client_coordinates().x);
                        let Some(end_x) = end_x else {
                            touch.write().cancel();
                            return;
                        };
                        let swipe = touch.write().finish(end_x);
                        if let Some(direction) = swipe {
                            carousel.write().advance(direction);
                        }
                    },
                    onmousedown: move |evt: MouseEvent| {
                        evt.prevent_default();
                        mouse.write().start(evt.client_coordinates().x);
                    },
                    onmousemove: move |evt: MouseEvent| {
                        if mouse.peek().is_dragging() {
                            evt.prevent_default();
                        }
                    },
                    onmouseup: move |evt: MouseEvent| {
                        let swipe = mouse.write().finish(evt.client_coordinates().x);
                        if let Some(direction) = swipe {
                            carousel.write().advance(direction);
                        }
                    },

                    for (index, image) in attraction.images.iter().enumerate() {
                        {
                            let lightbox_image = LightboxImage::new(image.src.clone(), image.alt.clone());
                            rsx! {
                                img {
                                    key: "{image.src}",
                                    class: with_modifier("gallery-image", "active", state.is_active(index)),
                                    src: "{image.src}",
                                    alt: "{image.alt}",
                                    draggable: "false",
                                    onclick: move |_| overlays.open_lightbox(lightbox_image.clone()),
                                }
                            }
                        }
                    }
                }

                if state.can_step() {
                    IconButton {
                        class: "prev-btn".to_string(),
                        aria_label: "Previous image".to_string(),
                        onclick: move |_| carousel.write().prev(),
                        "\u{2039}"
                    }
                    IconButton {
                        class: "next-btn".to_string(),
                        aria_label: "Next image".to_string(),
                        onclick: move |_| carousel.write().next(),
                        "\u{203A}"
                    }
                }

                if !state.is_empty() {
                    div { class: "gallery-dots",
                        for (index, active) in state.dots().enumerate() {
                            {
                                let label = format!("Show image {}", index + 1);
                                rsx! {
                                    button {
                                        key: "{index}",
                                        class: with_modifier("dot", "active", active),
                                        r#type: "button",
                                        "aria-label": "{label}",
                                        onclick: move |_| carousel.write().jump(index),
                                    }
                                }
                            }
                        }
                    }
                }

                IconButton {
                    class: favorite_class,
                    aria_label: "Toggle favorite".to_string(),
                    onclick: toggle_favorite,
                    "\u{2665}"
                }
            }

            div { class: "attraction-info",
                h3 { class: "attraction-title", "{attraction.title}" }
                p { class: "attraction-description", "{attraction.description}" }
            }
        }
    }
}
