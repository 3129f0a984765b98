//! Marker layout for the map surface.
//!
//! There is no map projection. Markers are spread over the surface by
//! normalising each placement's coordinates against the bounding box of
//! everything being shown.

use adspace_catalog_models::{BoundingBox, PlacementRecord};
use adspace_dashboard_models::MarkerPlacement;

/// Fraction of the surface kept clear on each edge.
pub const MARKER_MARGIN: f64 = 0.1;

/// Places one marker per record, in input order.
///
/// `x` grows eastward and `y` grows southward, both within
/// `[MARKER_MARGIN, 1 - MARKER_MARGIN]`. An axis with no extent (a single
/// record, or records sharing a longitude or latitude) centres at `0.5`.
pub fn marker_layout<'a>(
    records: impl IntoIterator<Item = &'a PlacementRecord>,
) -> Vec<MarkerPlacement> {
    let records: Vec<&PlacementRecord> = records.into_iter().collect();
    let Some(bbox) = BoundingBox::enclosing(records.iter().map(|r| r.coordinates)) else {
        return Vec::new();
    };

    records
        .iter()
        .map(|r| MarkerPlacement {
            marker_id: r.id,
            x: scale(r.coordinates.longitude - bbox.west, bbox.width()),
            y: scale(bbox.north - r.coordinates.latitude, bbox.height()),
        })
        .collect()
}

fn scale(offset: f64, extent: f64) -> f64 {
    if extent <= f64::EPSILON {
        return 0.5;
    }
    let t = (offset / extent).clamp(0.0, 1.0);
    MARKER_MARGIN + t * (1.0 - 2.0 * MARKER_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspace_catalog::{Catalog, CatalogProvider as _};

    #[test]
    fn markers_stay_on_the_surface() {
        let catalog = Catalog::embedded();
        let markers = marker_layout(catalog.placements());

        assert_eq!(markers.len(), 3);
        for m in &markers {
            assert!((0.0..=1.0).contains(&m.x), "{m:?}");
            assert!((0.0..=1.0).contains(&m.y), "{m:?}");
        }
    }

    #[test]
    fn west_is_left_and_north_is_up() {
        let catalog = Catalog::embedded();
        let markers = marker_layout(catalog.placements());
        let by_id = |id: u32| markers.iter().find(|m| m.marker_id == id).unwrap();

        let new_york = by_id(1);
        let los_angeles = by_id(2);
        let chicago = by_id(3);

        assert!((los_angeles.x - MARKER_MARGIN).abs() < 1e-9);
        assert!((new_york.x - (1.0 - MARKER_MARGIN)).abs() < 1e-9);
        assert!(chicago.x > los_angeles.x && chicago.x < new_york.x);

        assert!((chicago.y - MARKER_MARGIN).abs() < 1e-9);
        assert!((los_angeles.y - (1.0 - MARKER_MARGIN)).abs() < 1e-9);
    }

    #[test]
    fn single_marker_is_centred() {
        let catalog = Catalog::embedded();
        let markers = marker_layout(catalog.get(2));

        assert_eq!(
            markers,
            vec![MarkerPlacement {
                marker_id: 2,
                x: 0.5,
                y: 0.5
            }]
        );
    }

    #[test]
    fn no_records_no_markers() {
        assert!(marker_layout(std::iter::empty()).is_empty());
    }
}
