//! UI Components for the Antipolo tourist page.

mod attraction_card;
pub mod button;
mod choice_modal;
mod destination_card;
mod lightbox;
mod mobile_nav;
mod reveal;
mod site_header;
mod story_modal;

pub use attraction_card::AttractionCard;
pub use choice_modal::ChoiceModal;
pub use destination_card::DestinationCard;
pub use lightbox::Lightbox;
pub use reveal::{Reveal, RevealSection};
pub use site_header::{PageSection, SiteHeader};
pub use story_modal::StoryHost;
