//! Lightbox, choice modal and story overlay state.
//!
//! Each overlay is an `Option`: `Some` while shown, `None` once closed. The
//! page scroll lock is derived from all of them together.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::error::{TourError, TourResult};

/// Message shown when a "Learn More" card has no catalog record
pub const DESTINATION_UNAVAILABLE: &str = "Destination information not available.";

/// Image currently shown in the lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

impl LightboxImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Destination targeted by an open choice modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSelection {
    pub id: String,
    /// Card heading, shown as the modal title
    pub name: String,
}

impl DestinationSelection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Button in the choice modal, as carried in its `data-action` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceAction {
    /// Open the map search for the destination
    Location,
    /// Show the destination's story overlay
    Story,
}

impl ChoiceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceAction::Location => "location",
            ChoiceAction::Story => "story",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChoiceAction::Location => "View Location",
            ChoiceAction::Story => "Read Story",
        }
    }
}

impl fmt::Display for ChoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChoiceAction {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location" => Ok(ChoiceAction::Location),
            "story" => Ok(ChoiceAction::Story),
            other => Err(TourError::UnknownAction(other.to_string())),
        }
    }
}

/// Narrative overlay contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryView {
    pub title: String,
    pub body: String,
}

/// What the page should do after a choice. The choice modal closes in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Open this URL in a new browsing context
    OpenMap(String),
    /// Mount the story overlay
    ShowStory(StoryView),
}

/// Resolve a choice for `selection` against the catalog.
///
/// Fails with `UnknownDestination` when the selection has no record; the
/// caller alerts the visitor and closes the modal without navigating.
pub fn resolve_choice(
    catalog: &Catalog,
    selection: &DestinationSelection,
    action: ChoiceAction,
) -> TourResult<ChoiceOutcome> {
    let destination = catalog.require_destination(&selection.id)?;
    tracing::debug!(destination = %destination.id, %action, "choice resolved");

    Ok(match action {
        ChoiceAction::Location => ChoiceOutcome::OpenMap(destination.map_url()),
        ChoiceAction::Story => ChoiceOutcome::ShowStory(StoryView {
            title: destination.name.clone(),
            body: destination.story.clone(),
        }),
    })
}

/// `overflow` value for the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOverflow {
    Auto,
    Hidden,
}

impl PageOverflow {
    /// Hidden while any overlay is open.
    pub fn for_overlays(open: impl IntoIterator<Item = bool>) -> Self {
        if open.into_iter().any(|shown| shown) {
            PageOverflow::Hidden
        } else {
            PageOverflow::Auto
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            PageOverflow::Auto => "auto",
            PageOverflow::Hidden => "hidden",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parsing() {
        assert_eq!("location".parse::<ChoiceAction>().unwrap(), ChoiceAction::Location);
        assert_eq!("story".parse::<ChoiceAction>().unwrap(), ChoiceAction::Story);
        assert!(matches!(
            "Story".parse::<ChoiceAction>(),
            Err(TourError::UnknownAction(_))
        ));
    }

    #[test]
    fn action_display_matches_attribute() {
        for action in [ChoiceAction::Location, ChoiceAction::Story] {
            assert_eq!(action.to_string().parse::<ChoiceAction>().unwrap(), action);
        }
    }

    #[test]
    fn overflow_hidden_while_any_overlay_open() {
        assert_eq!(PageOverflow::for_overlays([false, false, false]), PageOverflow::Auto);
        assert_eq!(PageOverflow::for_overlays([false, true, false]), PageOverflow::Hidden);
        assert_eq!(PageOverflow::for_overlays(std::iter::empty()), PageOverflow::Auto);
        assert_eq!(PageOverflow::Hidden.as_css(), "hidden");
        assert_eq!(PageOverflow::Auto.as_css(), "auto");
    }
}
