//! Horizontal swipe / drag recognition.

/// Minimum horizontal displacement, in CSS pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Which way a completed gesture moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger/pointer moved left: show the following slide
    Next,
    /// Finger/pointer moved right: show the preceding slide
    Prev,
}

impl SwipeDirection {
    /// Classify a displacement `start_x - end_x`.
    pub fn from_displacement(delta: f64) -> Option<Self> {
        if delta.abs() < SWIPE_THRESHOLD {
            None
        } else if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Prev)
        }
    }
}

/// In-flight gesture for one pointer kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    start_x: Option<f64>,
}

impl DragGesture {
    /// Begin tracking at `x` (touchstart / mousedown).
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// True between `start` and `finish`.
    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// End the gesture at `x` (touchend / mouseup) and reset.
    ///
    /// Returns `None` if no gesture was in flight or the displacement stayed
    /// under [`SWIPE_THRESHOLD`].
    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        SwipeDirection::from_displacement(start - x)
    }

    /// Drop the gesture without classifying it.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_swipe_is_next() {
        let mut gesture = DragGesture::default();
        gesture.start(200.0);
        assert!(gesture.is_dragging());
        assert_eq!(gesture.finish(120.0), Some(SwipeDirection::Next));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn rightward_swipe_is_prev() {
        let mut gesture = DragGesture::default();
        gesture.start(100.0);
        assert_eq!(gesture.finish(180.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(SwipeDirection::from_displacement(50.0), Some(SwipeDirection::Next));
        assert_eq!(SwipeDirection::from_displacement(-50.0), Some(SwipeDirection::Prev));
        assert_eq!(SwipeDirection::from_displacement(49.9), None);
        assert_eq!(SwipeDirection::from_displacement(-49.9), None);
    }

    #[test]
    fn finish_without_start_is_ignored() {
        let mut gesture = DragGesture::default();
        assert_eq!(gesture.finish(0.0), None);
    }

    #[test]
    fn cancel_resets() {
        let mut gesture = DragGesture::default();
        gesture.start(300.0);
        gesture.cancel();
        assert_eq!(gesture.finish(0.0), None);
    }
}
