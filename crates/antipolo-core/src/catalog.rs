//! Static page content: destinations and carousel attractions.
//!
//! Both tables are embedded JSON documents parsed once at start-up.

use serde::{Deserialize, Serialize};

use crate::error::{TourError, TourResult};

const DESTINATIONS_JSON: &str = include_str!("../data/destinations.json");
const ATTRACTIONS_JSON: &str = include_str!("../data/attractions.json");

/// Base of the map-service search link
pub const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// One of the fixed tourist sites offered by the "Learn More" flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// `"<lat>,<lon>"`, passed verbatim as the map query
    pub coordinates: String,
    /// Named-place link, shown on the card
    pub place_url: String,
    pub summary: String,
    pub image: String,
    pub story: String,
}

impl Destination {
    /// Map search URL for this destination's coordinates.
    pub fn map_url(&self) -> String {
        map_search_url(&self.coordinates)
    }
}

/// Build a map search URL for a `"<lat>,<lon>"` query.
pub fn map_search_url(coordinates: &str) -> String {
    format!("{}{}", MAP_SEARCH_URL, coordinates)
}

/// One image in an attraction's carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// A carousel card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

/// Lookup tables for everything the page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    destinations: Vec<Destination>,
    attractions: Vec<Attraction>,
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>, attractions: Vec<Attraction>) -> Self {
        Self {
            destinations,
            attractions,
        }
    }

    /// Parse the tables compiled into the binary.
    pub fn builtin() -> TourResult<Self> {
        Self::from_json(DESTINATIONS_JSON, ATTRACTIONS_JSON)
    }

    /// Parse destination and attraction tables from JSON arrays.
    pub fn from_json(destinations: &str, attractions: &str) -> TourResult<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(destinations)?;
        let attractions: Vec<Attraction> = serde_json::from_str(attractions)?;
        Ok(Self::new(destinations, attractions))
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Like [`Catalog::destination`], failing with `UnknownDestination`.
    pub fn require_destination(&self, id: &str) -> TourResult<&Destination> {
        self.destination(id)
            .ok_or_else(|| TourError::UnknownDestination(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_destinations() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.destinations().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "hinulugang-taktak",
                "pinto-art-museum",
                "antipolo-cathedral",
                "cloud-9",
                "mount-purro"
            ]
        );
    }

    #[test]
    fn builtin_attractions_have_images() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.attractions().is_empty());
        for attraction in catalog.attractions() {
            assert!(!attraction.images.is_empty(), "{} has no images", attraction.id);
        }
    }

    #[test]
    fn cloud_9_map_url() {
        let catalog = Catalog::builtin().unwrap();
        let cloud9 = catalog.destination("cloud-9").unwrap();
        assert_eq!(
            cloud9.map_url(),
            "https://www.google.com/maps/search/?api=1&query=14.6238,121.1767"
        );
    }

    #[test]
    fn unknown_destination_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.destination("atlantis").is_none());
        assert!(matches!(
            catalog.require_destination("atlantis"),
            Err(TourError::UnknownDestination(id)) if id == "atlantis"
        ));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        let err = Catalog::from_json("{", "[]").unwrap_err();
        assert!(matches!(err, TourError::Catalog(_)));
    }

    #[test]
    fn attraction_images_default_to_empty() {
        let catalog = Catalog::from_json(
            "[]",
            r#"[{"id":"bare","title":"Bare","description":"No photos yet"}]"#,
        )
        .unwrap();
        assert!(catalog.attractions()[0].images.is_empty());
    }
}
