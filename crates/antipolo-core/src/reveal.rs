//! One-way reveal-on-scroll state.

/// Intersection observer options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// What kind of element is being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Cards, gallery images and contact blocks: `loading` -> `loaded` classes
    Content,
    /// Top-level page sections: inline opacity/transform reset
    Section,
}

impl RevealKind {
    pub fn observer_config(&self) -> ObserverConfig {
        match self {
            RevealKind::Content => ObserverConfig {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px",
            },
            RevealKind::Section => ObserverConfig {
                threshold: 0.1,
                root_margin: "0px",
            },
        }
    }
}

/// Reveal progress of one element. Never goes back to hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed one intersection report. Returns true on the transition to revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == RevealState::Hidden {
            *self = RevealState::Revealed;
            true
        } else {
            false
        }
    }

    pub fn is_revealed(&self) -> bool {
        *self == RevealState::Revealed
    }

    /// Marker class for [`RevealKind::Content`] elements.
    pub fn content_class(&self) -> &'static str {
        match self {
            RevealState::Hidden => "loading",
            RevealState::Revealed => "loading loaded",
        }
    }

    /// Inline style for [`RevealKind::Section`] elements.
    pub fn section_style(&self) -> &'static str {
        match self {
            RevealState::Hidden => {
                "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;"
            }
            RevealState::Revealed => {
                "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
            }
        }
    }
}
