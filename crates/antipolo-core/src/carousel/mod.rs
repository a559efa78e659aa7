//! Per-card image carousel.
//!
//! A card owns one [`Carousel`] (current slide), one [`DragGesture`] per
//! pointer kind (touch and mouse), and one [`AutoplayGate`] deciding whether
//! the autoplay timer should be running.
//!
//! ```
//! use antipolo_core::carousel::{Carousel, DragGesture, SwipeDirection};
//!
//! let mut carousel = Carousel::new(3);
//! let mut touch = DragGesture::default();
//!
//! touch.start(300.0);
//! if let Some(direction) = touch.finish(200.0) {
//!     assert_eq!(direction, SwipeDirection::Next);
//!     carousel.advance(direction);
//! }
//! assert_eq!(carousel.current(), Some(1));
//! ```

mod autoplay;
mod gesture;
mod slides;

pub use autoplay::{AutoplayGate, AUTOPLAY_INTERVAL_MS, AUTOPLAY_VISIBILITY};
pub use gesture::{DragGesture, SwipeDirection, SWIPE_THRESHOLD};
pub use slides::Carousel;
