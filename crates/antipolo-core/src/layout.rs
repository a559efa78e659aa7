//! Responsive navigation layout.

/// Widest viewport, in CSS pixels, that still uses the compact navigation
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Navigation layout for a viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    /// Menu toggle shown, panel opened on demand
    Compact,
    /// Toggle hidden, panel always visible
    Wide,
}

impl NavLayout {
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            NavLayout::Compact
        } else {
            NavLayout::Wide
        }
    }
}

/// Menu toggle and navigation panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    layout: NavLayout,
    open: bool,
}

impl NavState {
    pub fn new(width: f64) -> Self {
        Self {
            layout: NavLayout::for_width(width),
            open: false,
        }
    }

    /// Re-evaluate the layout after a resize. Switching to the wide layout
    /// clears the open marker.
    pub fn resize(&mut self, width: f64) {
        let layout = NavLayout::for_width(width);
        if layout != self.layout {
            tracing::debug!(?layout, width, "navigation layout changed");
        }
        self.layout = layout;
        if layout == NavLayout::Wide {
            self.open = false;
        }
    }

    /// Flip the open marker. Only the compact layout has a toggle.
    pub fn toggle(&mut self) {
        if self.layout == NavLayout::Compact {
            self.open = !self.open;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_visible(&self) -> bool {
        self.layout == NavLayout::Compact
    }

    /// Whether the panel is forced to `display: flex`.
    pub fn panel_forced_visible(&self) -> bool {
        self.layout == NavLayout::Wide
    }
}
