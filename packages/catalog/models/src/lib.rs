#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Placement record types for the hoarding catalog.
//!
//! This crate defines the immutable shape of a single advertising placement
//! ("hoarding") and the small enums it is classified by. Catalog loading and
//! validation live in `adspace_catalog`; filtering and selection live in
//! `adspace_dashboard`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Highest conversion score a placement can carry.
pub const MAX_CONVERSION_SCORE: f64 = 5.0;

/// Physical format of a hoarding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum HoardingType {
    /// Screen-based placement with rotating creative.
    Digital,
    /// Printed vinyl or paper poster.
    Static,
    /// Illuminated LED board.
    #[serde(rename = "LED")]
    #[strum(serialize = "LED")]
    Led,
}

/// Booking status of a placement.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Availability {
    /// Open for booking.
    Available,
    /// Already taken by another campaign.
    Booked,
}

/// A WGS84 position used for marker placement only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Returns the smallest box containing every point, or `None` when the
    /// iterator is empty.
    pub fn enclosing(points: impl IntoIterator<Item = Coordinates>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(acc.map_or_else(
                || Self::new(p.longitude, p.latitude, p.longitude, p.latitude),
                |b: Self| {
                    Self::new(
                        b.west.min(p.longitude),
                        b.south.min(p.latitude),
                        b.east.max(p.longitude),
                        b.north.max(p.latitude),
                    )
                },
            ))
        })
    }

    /// East-west extent in degrees.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// North-south extent in degrees.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }
}

/// A single advertising placement in the catalog.
///
/// Records are immutable once loaded. Fields use `snake_case` in catalog
/// TOML files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Unique placement identifier.
    pub id: u32,
    /// Display name (e.g., "Times Square Billboard").
    pub name: String,
    /// Human-readable location label (e.g., "New York, NY").
    pub location: String,
    /// Physical format.
    pub hoarding_type: HoardingType,
    /// Free-form dimensions in feet (e.g., `"14x48"`).
    pub size: String,
    /// Starting price per month in whole dollars.
    pub monthly_price: u32,
    /// Current booking status.
    pub availability: Availability,
    /// Estimated daily viewers.
    pub daily_traffic: u64,
    /// Conversion score in `[0, 5]`.
    pub conversion_score: f64,
    /// Marker position.
    pub coordinates: Coordinates,
}

impl PlacementRecord {
    /// Whether this placement can currently be booked.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Checks the per-record invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if `conversion_score` is outside `[0, 5]` or not a
    /// finite number.
    pub fn validate(&self) -> Result<(), InvalidConversionScoreError> {
        if self.conversion_score.is_finite()
            && (0.0..=MAX_CONVERSION_SCORE).contains(&self.conversion_score)
        {
            Ok(())
        } else {
            Err(InvalidConversionScoreError {
                id: self.id,
                value: self.conversion_score,
            })
        }
    }
}

/// Error returned when a [`PlacementRecord`] carries a conversion score
/// outside `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidConversionScoreError {
    /// The offending placement.
    pub id: u32,
    /// The invalid score that was provided.
    pub value: f64,
}

impl std::fmt::Display for InvalidConversionScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "placement {} has invalid conversion score {}: expected 0-{MAX_CONVERSION_SCORE}",
            self.id, self.value
        )
    }
}

impl std::error::Error for InvalidConversionScoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: f64) -> PlacementRecord {
        PlacementRecord {
            id: 7,
            name: "Test".to_string(),
            location: "Nowhere".to_string(),
            hoarding_type: HoardingType::Digital,
            size: "10x20".to_string(),
            monthly_price: 100,
            availability: Availability::Available,
            daily_traffic: 10,
            conversion_score: score,
            coordinates: Coordinates::new(0.0, 0.0),
        }
    }

    #[test]
    fn hoarding_type_parses_case_insensitively() {
        assert_eq!("digital".parse::<HoardingType>(), Ok(HoardingType::Digital));
        assert_eq!("STATIC".parse::<HoardingType>(), Ok(HoardingType::Static));
        assert_eq!("led".parse::<HoardingType>(), Ok(HoardingType::Led));
        assert!("neon".parse::<HoardingType>().is_err());
    }

    #[test]
    fn hoarding_type_display_matches_labels() {
        assert_eq!(HoardingType::Led.to_string(), "LED");
        assert_eq!(HoardingType::Static.to_string(), "Static");
    }

    #[test]
    fn conversion_score_bounds() {
        assert!(record(0.0).validate().is_ok());
        assert!(record(5.0).validate().is_ok());
        assert!(record(4.8).validate().is_ok());

        let err = record(5.1).validate().unwrap_err();
        assert_eq!(err.id, 7);
        assert!(record(-0.1).validate().is_err());
        assert!(record(f64::NAN).validate().is_err());
    }

    #[test]
    fn enclosing_box_covers_all_points() {
        let bbox = BoundingBox::enclosing([
            Coordinates::new(-74.0, 40.7),
            Coordinates::new(-118.2, 34.0),
            Coordinates::new(-87.6, 41.9),
        ])
        .unwrap();

        assert!((bbox.west - -118.2).abs() < f64::EPSILON);
        assert!((bbox.east - -74.0).abs() < f64::EPSILON);
        assert!((bbox.south - 34.0).abs() < f64::EPSILON);
        assert!((bbox.north - 41.9).abs() < f64::EPSILON);
        assert!(BoundingBox::enclosing([]).is_none());
    }
}
