//! Property-based tests for carousel, gesture and autoplay invariants
//!
//! Uses proptest to drive random transition sequences.

use antipolo_core::carousel::{AutoplayGate, Carousel, SwipeDirection, SWIPE_THRESHOLD};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Transitions a visitor can trigger on a card
#[derive(Debug, Clone)]
enum SlideOp {
    Next,
    Prev,
    Jump(usize),
    Swipe(f64),
}

fn slide_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<SlideOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(SlideOp::Next),
            3 => Just(SlideOp::Prev),
            1 => (0..20usize).prop_map(SlideOp::Jump),
            2 => (-400.0..400.0f64).prop_map(SlideOp::Swipe),
        ],
        0..max_ops,
    )
}

fn apply(carousel: &mut Carousel, op: &SlideOp) {
    match op {
        SlideOp::Next => carousel.next(),
        SlideOp::Prev => carousel.prev(),
        SlideOp::Jump(index) => carousel.jump(*index),
        SlideOp::Swipe(delta) => {
            if let Some(direction) = SwipeDirection::from_displacement(*delta) {
                carousel.advance(direction);
            }
        }
    }
}

/// Autoplay signal events, in arrival order
#[derive(Debug, Clone)]
enum GateOp {
    Visible(bool),
    Hovered(bool),
}

fn gate_ops_strategy() -> impl Strategy<Value = Vec<GateOp>> {
    prop::collection::vec(
        prop_oneof![
            any::<bool>().prop_map(GateOp::Visible),
            any::<bool>().prop_map(GateOp::Hovered),
        ],
        0..50,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// n calls to next return to the starting slide
    #[test]
    fn next_has_period_n(total in 1..30usize, start in 0..30usize) {
        let mut carousel = Carousel::new(total);
        carousel.jump(start % total);
        let origin = carousel.current();

        for step in 1..total {
            carousel.next();
            prop_assert_ne!(carousel.current(), origin, "returned early at step {}", step);
        }
        carousel.next();
        prop_assert_eq!(carousel.current(), origin);
    }

    /// prev undoes next and vice versa
    #[test]
    fn prev_inverts_next(total in 1..30usize, ops in slide_ops_strategy(40)) {
        let mut carousel = Carousel::new(total);
        for op in &ops {
            apply(&mut carousel, op);
        }
        let before = carousel.current();

        carousel.next();
        carousel.prev();
        prop_assert_eq!(carousel.current(), before);

        carousel.prev();
        carousel.next();
        prop_assert_eq!(carousel.current(), before);
    }

    /// Exactly one slide is active after any sequence of transitions
    #[test]
    fn exactly_one_active_slide(total in 1..30usize, ops in slide_ops_strategy(100)) {
        let mut carousel = Carousel::new(total);
        for op in &ops {
            apply(&mut carousel, op);
            let active = (0..total).filter(|i| carousel.is_active(*i)).count();
            prop_assert_eq!(active, 1);
            prop_assert_eq!(carousel.dots().filter(|dot| *dot).count(), 1);
            prop_assert!(carousel.current().unwrap() < total);
        }
    }

    /// Disabled carousels never gain an active slide
    #[test]
    fn empty_carousel_stays_disabled(ops in slide_ops_strategy(50)) {
        let mut carousel = Carousel::new(0);
        for op in &ops {
            apply(&mut carousel, op);
        }
        prop_assert_eq!(carousel.current(), None);
    }

    /// Sub-threshold gestures never change the slide
    #[test]
    fn short_swipes_are_ignored(delta in -49.99..49.99f64) {
        prop_assert_eq!(SwipeDirection::from_displacement(delta), None);
    }

    /// Gestures at or past the threshold pick a direction by sign
    #[test]
    fn long_swipes_follow_sign(magnitude in SWIPE_THRESHOLD..1000.0f64) {
        prop_assert_eq!(SwipeDirection::from_displacement(magnitude), Some(SwipeDirection::Next));
        prop_assert_eq!(SwipeDirection::from_displacement(-magnitude), Some(SwipeDirection::Prev));
    }

    /// The gate depends only on the latest value of each input
    #[test]
    fn gate_is_order_independent(ops in gate_ops_strategy()) {
        let mut gate = AutoplayGate::default();
        let mut visible = false;
        let mut hovered = false;

        for op in &ops {
            match op {
                GateOp::Visible(v) => {
                    gate.set_visible(*v);
                    visible = *v;
                }
                GateOp::Hovered(h) => {
                    gate.set_hovered(*h);
                    hovered = *h;
                }
            }
            prop_assert_eq!(gate.is_running(), visible && !hovered);
        }
    }
}
