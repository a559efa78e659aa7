//! "Learn More" flow tests
//!
//! Drive the choice modal's decisions the way the page does: a card
//! supplies a selection, a button supplies an action string.

use antipolo_core::overlay::DESTINATION_UNAVAILABLE;
use antipolo_core::{
    resolve_choice, Catalog, ChoiceAction, ChoiceOutcome, DestinationSelection, PageOverflow,
    TourError,
};

fn catalog() -> Catalog {
    Catalog::builtin().expect("embedded catalog parses")
}

#[test]
fn location_for_known_destination_opens_map() {
    let selection = DestinationSelection::new("cloud-9", "Cloud 9");
    let outcome = resolve_choice(&catalog(), &selection, ChoiceAction::Location).unwrap();

    match outcome {
        ChoiceOutcome::OpenMap(url) => {
            assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
            assert!(url.contains("14.6238,121.1767"));
        }
        other => panic!("expected map link, got {:?}", other),
    }
}

#[test]
fn story_uses_catalog_name_and_text() {
    let selection = DestinationSelection::new("pinto-art-museum", "Pinto Art Museum");
    let outcome = resolve_choice(&catalog(), &selection, ChoiceAction::Story).unwrap();

    match outcome {
        ChoiceOutcome::ShowStory(story) => {
            assert_eq!(story.title, "Pinto Art Museum");
            assert!(story.body.contains("Dr. Joven Cuanang"));
        }
        other => panic!("expected story, got {:?}", other),
    }
}

#[test]
fn every_destination_resolves_both_actions() {
    let catalog = catalog();
    for destination in catalog.destinations() {
        let selection = DestinationSelection::new(&destination.id, &destination.name);
        for action in [ChoiceAction::Location, ChoiceAction::Story] {
            assert!(
                resolve_choice(&catalog, &selection, action).is_ok(),
                "{} / {}",
                destination.id,
                action
            );
        }
    }
}

#[test]
fn unknown_destination_fails_for_both_actions() {
    let catalog = catalog();
    let selection = DestinationSelection::new("taal-volcano", "Taal Volcano");

    for action in [ChoiceAction::Location, ChoiceAction::Story] {
        let err = resolve_choice(&catalog, &selection, action).unwrap_err();
        assert!(matches!(err, TourError::UnknownDestination(ref id) if id == "taal-volcano"));
    }
    assert_eq!(DESTINATION_UNAVAILABLE, "Destination information not available.");
}

#[test]
fn empty_catalog_makes_every_choice_unavailable() {
    let selection = DestinationSelection::new("cloud-9", "Cloud 9");
    let err = resolve_choice(&Catalog::default(), &selection, ChoiceAction::Location).unwrap_err();
    assert!(matches!(err, TourError::UnknownDestination(_)));
}

#[test]
fn action_attribute_parsing() {
    assert_eq!("location".parse::<ChoiceAction>().unwrap(), ChoiceAction::Location);
    assert!(matches!(
        "directions".parse::<ChoiceAction>(),
        Err(TourError::UnknownAction(ref value)) if value == "directions"
    ));
}

/// Story opened from the choice modal keeps the page locked after the modal closes
#[test]
fn scroll_lock_survives_choice_to_story_handoff() {
    let lightbox_open = false;
    let mut choice_open = true;
    let mut story_open = false;
    assert_eq!(
        PageOverflow::for_overlays([lightbox_open, choice_open, story_open]),
        PageOverflow::Hidden
    );

    story_open = true;
    choice_open = false;
    assert_eq!(
        PageOverflow::for_overlays([lightbox_open, choice_open, story_open]),
        PageOverflow::Hidden
    );

    story_open = false;
    assert_eq!(
        PageOverflow::for_overlays([lightbox_open, choice_open, story_open]),
        PageOverflow::Auto
    );
}
