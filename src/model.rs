//! Page content: affected locations, donation links and hero backgrounds.
//! Loaded once from the bundled `assets/content.json` and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ContentError;

const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

/// A named place on the map. Only constructed with valid coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationRecord", into = "LocationRecord")]
pub struct Location {
    name: String,
    coordinates: Coordinates,
    after_image: Option<String>,
    description: Option<String>,
}

/// Wire shape of a location: coordinates as a `[lon, lat]` pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct LocationRecord {
    name: String,
    coordinates: (f64, f64),
    #[serde(default, skip_serializing_if = "Option::is_none")]
    after_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl TryFrom<LocationRecord> for Location {
    type Error = ContentError;

    fn try_from(r: LocationRecord) -> Result<Self, Self::Error> {
        let mut loc = Location::new(r.name, r.coordinates.0, r.coordinates.1)?;
        loc.after_image = r.after_image;
        loc.description = r.description;
        Ok(loc)
    }
}

impl From<Location> for LocationRecord {
    fn from(l: Location) -> Self {
        LocationRecord {
            name: l.name,
            coordinates: (l.coordinates.lon, l.coordinates.lat),
            after_image: l.after_image,
            description: l.description,
        }
    }
}

impl Location {
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Result<Self, ContentError> {
        let name = name.into();
        let coordinates = Coordinates { lon, lat };
        if !coordinates.is_valid() {
            return Err(ContentError::InvalidCoordinates { name, lon, lat });
        }
        Ok(Self {
            name,
            coordinates,
            after_image: None,
            description: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn after_image(&self) -> Option<&str> {
        self.after_image.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonationLink {
    pub name: String,
    pub url: String,
    pub image: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub locations: Vec<Location>,
    pub donations: Vec<DonationLink>,
    pub background_images: Vec<String>,
}

impl Content {
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        for loc in &content.locations {
            if !seen.insert(loc.name()) {
                return Err(ContentError::DuplicateLocation(loc.name().to_string()));
            }
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::{Content, Location};
    use crate::error::ContentError;

    #[test]
    fn bundled_content_loads() {
        let content = Content::bundled().unwrap();
        assert_eq!(content.locations.len(), 6);
        assert_eq!(content.donations.len(), 4);
        assert_eq!(content.background_images.len(), 3);

        let jodo = content
            .locations
            .iter()
            .find(|l| l.name() == "Lahaina Jodo Mission")
            .unwrap();
        assert_eq!(jodo.coordinates().lon, -156.68738910041318);
        assert_eq!(jodo.coordinates().lat, 20.882715610556918);
        assert!(jodo.after_image().is_some());
    }

    #[test]
    fn bundled_coordinates_parse_exactly() {
        let content = Content::bundled().unwrap();
        let coords: Vec<(f64, f64)> = content
            .locations
            .iter()
            .map(|l| (l.coordinates().lon, l.coordinates().lat))
            .collect();
        assert_eq!(
            coords,
            vec![
                (-156.6779217812668, 20.871660992482585),
                (-156.67665500607714, 20.875698021019634),
                (-156.68738910041318, 20.882715610556918),
                (-156.67687099268292, 20.87048936379182),
                (-156.67749607658604, 20.872279930692464),
                (-156.6799569299401, 20.876752716785354),
            ]
        );
    }

    #[test]
    fn locations_keep_file_order() {
        let content = Content::bundled().unwrap();
        let names: Vec<&str> = content.locations.iter().map(|l| l.name()).collect();
        assert_eq!(names[0], "Lahaina Banyan Court Park");
        assert_eq!(names[4], "Lahaina's Front Street");
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let raw = r#"{"locations":[{"name":"x","coordinates":[-200.0,10.0]}],
                      "donations":[],"background_images":[]}"#;
        assert!(Content::from_json(raw).is_err());
        assert!(matches!(
            Location::new("y", 0.0, f64::NAN),
            Err(ContentError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let raw = r#"{"locations":[
                        {"name":"a","coordinates":[1.0,1.0]},
                        {"name":"a","coordinates":[2.0,2.0]}],
                      "donations":[],"background_images":[]}"#;
        match Content::from_json(raw) {
            Err(ContentError::DuplicateLocation(name)) => assert_eq!(name, "a"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_are_omitted_when_serialized() {
        let loc = Location::new("Plain", -156.0, 20.0).unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, r#"{"name":"Plain","coordinates":[-156.0,20.0]}"#);
    }
}
