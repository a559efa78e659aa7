//! Home page - the whole single-page site.
//!
//! Hero, destinations, attraction carousels, photo gallery and contact
//! sections, plus the page-wide overlays.

use antipolo_core::scroll::hero_transform;
use dioxus::prelude::*;

use crate::components::{
    AttractionCard, ChoiceModal, DestinationCard, Lightbox, PageSection, Reveal, RevealSection,
    SiteHeader, StoryHost,
};
use crate::context::{use_catalog, use_scroll_y};

/// Contact details shown in the contact section: (label, value)
const CONTACT_ITEMS: [(&str, &str); 3] = [
    ("Visit", "Antipolo City Tourism Office, Rizal, Philippines"),
    ("Call", "+63 2 8696 1234"),
    ("Email", "tourism@antipolo.gov.ph"),
];

/// Hero banner with the scroll parallax. Only this component re-renders on scroll.
#[component]
fn Hero() -> Element {
    let scroll_y = use_scroll_y();
    let hero_style = format!("transform: {};", hero_transform(scroll_y()));

    rsx! {
        section { id: PageSection::Home.id(), class: "hero", style: "{hero_style}",
            div { class: "hero-content",
                h1 { class: "hero-title", "Discover Antipolo" }
                p { class: "hero-tagline",
                    "Pilgrim city of waterfalls, art and mountain views above Metro Manila"
                }
                a { class: "hero-btn", href: "#destinations", "Start Exploring" }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let catalog = catalog.read();

    rsx! {
        SiteHeader {}

        main {
            Hero {}

            RevealSection { id: PageSection::Destinations.id().to_string(), class: "destinations".to_string(),
                h2 { class: "section-title", "Top Destinations" }
                div { class: "destination-grid",
                    for destination in catalog.destinations() {
                        DestinationCard { key: "{destination.id}", destination: destination.clone() }
                    }
                }
            }

            RevealSection { id: PageSection::Attractions.id().to_string(), class: "attractions".to_string(),
                h2 { class: "section-title", "Tourist Attractions" }
                div { class: "attraction-grid",
                    for attraction in catalog.attractions() {
                        AttractionCard { key: "{attraction.id}", attraction: attraction.clone() }
                    }
                }
            }

            RevealSection { id: PageSection::Gallery.id().to_string(), class: "gallery".to_string(),
                h2 { class: "section-title", "Gallery" }
                div { class: "gallery-grid",
                    for destination in catalog.destinations() {
                        Reveal { key: "{destination.id}", class: "gallery-img".to_string(),
                            img { src: "{destination.image}", alt: "{destination.name}" }
                        }
                    }
                }
            }

            RevealSection { id: PageSection::Contact.id().to_string(), class: "contact".to_string(),
                h2 { class: "section-title", "Plan Your Visit" }
                div { class: "contact-grid",
                    div { class: "contact-info",
                        for (label, value) in CONTACT_ITEMS {
                            Reveal { key: "{label}", class: "contact-item".to_string(),
                                h4 { "{label}" }
                                p { "{value}" }
                            }
                        }
                    }

                    Reveal { class: "contact-form".to_string(),
                        form {
                            onsubmit: move |evt: FormEvent| evt.prevent_default(),
                            input { r#type: "text", name: "name", placeholder: "Your name" }
                            input { r#type: "email", name: "email", placeholder: "Your email" }
                            textarea { name: "message", rows: "4", placeholder: "Your message" }
                            button { class: "submit-btn", r#type: "submit", "Send Message" }
                        }
                    }
                }
            }
        }

        footer { class: "site-footer",
            p { "\u{00A9} Antipolo City Tourism" }
        }

        Lightbox {}
        ChoiceModal {}
        StoryHost {}
    }
}
