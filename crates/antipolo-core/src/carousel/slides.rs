//! Slide index state machine.

use super::SwipeDirection;

/// Current slide of one card's gallery.
///
/// With `total == 0` the carousel is disabled: there is no active slide and
/// every transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    /// Create a carousel over `total` slides, starting at the first one.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.total
    }

    /// True when the card has no images.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Index of the active slide, `None` for a disabled carousel.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Whether slide (and dot) `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// Active marker of each dot, in slide order. Empty for a disabled carousel.
    pub fn dots(self) -> impl Iterator<Item = bool> {
        (0..self.total).map(move |index| self.is_active(index))
    }

    /// Whether prev/next buttons have anywhere to go.
    pub fn can_step(&self) -> bool {
        self.total > 1
    }

    /// Move to the following slide, wrapping to the first.
    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.total;
        tracing::debug!(slide = self.current, "carousel next");
    }

    /// Move to the preceding slide, wrapping to the last.
    pub fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
        tracing::debug!(slide = self.current, "carousel prev");
    }

    /// Jump straight to `index` (dot navigation). Out-of-range indices are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
            tracing::debug!(slide = self.current, "carousel jump");
        }
    }

    /// Apply a completed swipe or drag.
    pub fn advance(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.current(), Some(0));
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn next_wraps_to_first() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), Some(2));
        carousel.next();
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), Some(2));
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.jump(2);
        assert_eq!(carousel.current(), Some(2));
        carousel.jump(3);
        assert_eq!(carousel.current(), Some(2));
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn single_slide_has_one_active_dot() {
        let carousel = Carousel::new(1);
        assert_eq!(carousel.dots().collect::<Vec<_>>(), vec![true]);
        assert!(!carousel.can_step());
        assert!(Carousel::new(2).can_step());
    }

    #[test]
    fn dots_follow_jumps() {
        let mut carousel = Carousel::new(3);
        carousel.jump(1);
        assert_eq!(carousel.dots().collect::<Vec<_>>(), vec![false, true, false]);
    }

    #[test]
    fn empty_carousel_is_disabled() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.jump(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.current(), None);
        assert!(!carousel.is_active(0));
        assert_eq!(carousel.dots().count(), 0);
    }

    #[test]
    fn advance_follows_direction() {
        let mut carousel = Carousel::new(5);
        carousel.advance(SwipeDirection::Prev);
        assert_eq!(carousel.current(), Some(4));
        carousel.advance(SwipeDirection::Next);
        assert_eq!(carousel.current(), Some(0));
    }
}
