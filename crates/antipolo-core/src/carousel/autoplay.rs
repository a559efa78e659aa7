//! Autoplay gating.

use crate::reveal::ObserverConfig;

/// Autoplay period.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// Any visible pixel of the card counts as visible.
pub const AUTOPLAY_VISIBILITY: ObserverConfig = ObserverConfig {
    threshold: 0.0,
    root_margin: "0px",
};

/// Two-input gate for a card's autoplay timer.
///
/// The viewport observer drives `visible` and pointer enter/leave drives
/// `hovered`. The timer runs iff the card is visible and not hovered, no
/// matter which signal arrived last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoplayGate {
    visible: bool,
    hovered: bool,
}

impl AutoplayGate {
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Whether the autoplay timer should be running.
    pub fn is_running(&self) -> bool {
        self.visible && !self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_visible() {
        let mut gate = AutoplayGate::default();
        assert!(!gate.is_running());
        gate.set_visible(true);
        assert!(gate.is_running());
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut gate = AutoplayGate::default();
        gate.set_visible(true);
        gate.set_hovered(true);
        assert!(!gate.is_running());
        gate.set_hovered(false);
        assert!(gate.is_running());
    }

    #[test]
    fn leaving_hover_offscreen_stays_stopped() {
        let mut gate = AutoplayGate::default();
        gate.set_visible(true);
        gate.set_hovered(true);
        gate.set_visible(false);
        gate.set_hovered(false);
        assert!(!gate.is_running());
    }

    #[test]
    fn scrolling_into_view_while_hovered_stays_paused() {
        let mut gate = AutoplayGate::default();
        gate.set_hovered(true);
        gate.set_visible(true);
        assert!(!gate.is_running());
    }
}
