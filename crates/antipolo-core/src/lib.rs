//! Antipolo Tour Core Library
//!
//! Renderer-free state behind the Antipolo tourist page: the per-card
//! carousel, swipe recognition, autoplay gating, favorite flags, the static
//! destination catalog, overlay state, and responsive navigation.
//!
//! Nothing here touches the DOM. The web app translates browser events into
//! calls on these types and renders their state back as classes and styles.
//!
//! ## Quick Start
//!
//! ```
//! use antipolo_core::{resolve_choice, Catalog, ChoiceAction, ChoiceOutcome, DestinationSelection};
//!
//! let catalog = Catalog::builtin()?;
//! let selection = DestinationSelection::new("cloud-9", "Cloud 9");
//!
//! match resolve_choice(&catalog, &selection, ChoiceAction::Location)? {
//!     ChoiceOutcome::OpenMap(url) => assert!(url.ends_with("14.6238,121.1767")),
//!     ChoiceOutcome::ShowStory(_) => unreachable!(),
//! }
//! # Ok::<(), antipolo_core::TourError>(())
//! ```

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod layout;
pub mod overlay;
pub mod reveal;
pub mod scroll;

// Re-exports
pub use carousel::{AutoplayGate, Carousel, DragGesture, SwipeDirection};
pub use catalog::{Attraction, Catalog, Destination, GalleryImage};
pub use error::{TourError, TourResult};
pub use favorites::{FavoriteStore, Favorites, MemoryStore};
pub use layout::{NavLayout, NavState};
pub use overlay::{
    resolve_choice, ChoiceAction, ChoiceOutcome, DestinationSelection, LightboxImage,
    PageOverflow, StoryView,
};
pub use reveal::{RevealKind, RevealState};
