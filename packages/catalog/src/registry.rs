//! Compile-time registry of placement definitions.
//!
//! Each entry is a `(name, toml_content)` pair embedded via `include_str!`.
//! Entries are concatenated in registry order, which is the catalog order
//! every filtered view preserves.

use adspace_catalog_models::PlacementRecord;

use crate::CatalogDocument;

/// Number of embedded placements. Enforced by a test.
#[cfg(test)]
const EXPECTED_PLACEMENT_COUNT: usize = 3;

/// Embedded TOML placement definitions.
const PLACEMENT_TOMLS: &[(&str, &str)] = &[
    ("new_york", include_str!("../placements/new_york.toml")),
    ("los_angeles", include_str!("../placements/los_angeles.toml")),
    ("chicago", include_str!("../placements/chicago.toml")),
];

/// Returns every embedded placement in registry order.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse.
#[must_use]
pub fn all_placements() -> Vec<PlacementRecord> {
    PLACEMENT_TOMLS
        .iter()
        .flat_map(|(name, toml_str)| {
            let doc: CatalogDocument = toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse placement file '{name}': {e}"));
            doc.placements
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, CatalogProvider as _};
    use adspace_catalog_models::{Availability, HoardingType};
    use std::collections::BTreeSet;

    #[test]
    fn loads_all_placements() {
        let placements = all_placements();
        assert_eq!(
            placements.len(),
            EXPECTED_PLACEMENT_COUNT,
            "Expected {EXPECTED_PLACEMENT_COUNT} placements, found {}. \
             Update EXPECTED_PLACEMENT_COUNT after adding/removing placements.",
            placements.len()
        );
    }

    #[test]
    fn placement_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for placement in &all_placements() {
            assert!(
                seen.insert(placement.id),
                "Duplicate placement ID: {}",
                placement.id
            );
        }
    }

    #[test]
    fn all_placements_have_required_fields() {
        for placement in &all_placements() {
            assert!(!placement.name.is_empty(), "Placement {} has empty name", placement.id);
            assert!(
                !placement.location.is_empty(),
                "Placement {} has empty location",
                placement.id
            );
            assert!(
                placement.validate().is_ok(),
                "Placement {} has invalid score {}",
                placement.id,
                placement.conversion_score
            );
        }
    }

    #[test]
    fn embedded_catalog_keeps_registry_order() {
        let catalog = Catalog::embedded();
        let summary: Vec<(u32, u32, HoardingType, Availability)> = catalog
            .placements()
            .iter()
            .map(|p| (p.id, p.monthly_price, p.hoarding_type, p.availability))
            .collect();

        assert_eq!(
            summary,
            vec![
                (1, 5000, HoardingType::Digital, Availability::Available),
                (2, 2500, HoardingType::Static, Availability::Booked),
                (3, 3500, HoardingType::Digital, Availability::Available),
            ]
        );
    }
}
