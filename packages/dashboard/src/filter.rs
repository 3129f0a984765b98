//! Filter sidebar state and the catalog predicate it drives.

use adspace_catalog_models::PlacementRecord;
use adspace_dashboard_models::{FilterCriteria, HoardingTypeFilter, PriceRange};

/// Whether `record` passes every active criterion.
///
/// Price is checked inclusively, type case-insensitively, and availability
/// only when `available_only` is set. `show_traffic_heat` never affects the
/// result.
#[must_use]
pub fn matches(record: &PlacementRecord, criteria: &FilterCriteria) -> bool {
    criteria.price_range.contains(record.monthly_price)
        && criteria.hoarding_type.matches(record.hoarding_type)
        && (!criteria.available_only || record.is_available())
}

/// Lazily yields the records matching `criteria`, in catalog order.
pub fn apply_filters(
    records: &[PlacementRecord],
    criteria: FilterCriteria,
) -> impl Iterator<Item = &PlacementRecord> {
    records
        .iter()
        .filter(move |record| matches(record, &criteria))
}

/// Owns the sidebar's [`FilterCriteria`] and exposes one setter per widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    criteria: FilterCriteria,
}

impl FilterState {
    /// Creates filter state with the given starting criteria.
    #[must_use]
    pub const fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    /// The current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Sets the price bounds. Values are clamped to the slider range and
    /// reordered if reversed.
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.criteria.price_range = PriceRange::new(min, max);
        log::debug!(
            "price range set to {}..={}",
            self.criteria.price_range.min,
            self.criteria.price_range.max
        );
    }

    /// Sets the type selector.
    pub fn set_hoarding_type(&mut self, hoarding_type: HoardingTypeFilter) {
        self.criteria.hoarding_type = hoarding_type;
        log::debug!("hoarding type set to {hoarding_type}");
    }

    /// Toggles the heatmap overlay.
    pub const fn set_show_traffic_heat(&mut self, show: bool) {
        self.criteria.show_traffic_heat = show;
    }

    /// Toggles hiding of booked placements.
    pub const fn set_available_only(&mut self, available_only: bool) {
        self.criteria.available_only = available_only;
    }

    /// Restores the sidebar defaults.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Lazily yields the records in `records` matching the current criteria.
    pub fn apply<'a>(
        &self,
        records: &'a [PlacementRecord],
    ) -> impl Iterator<Item = &'a PlacementRecord> + use<'a> {
        apply_filters(records, self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspace_catalog_models::{Availability, Coordinates, HoardingType};

    fn record(
        id: u32,
        price: u32,
        hoarding_type: HoardingType,
        availability: Availability,
    ) -> PlacementRecord {
        PlacementRecord {
            id,
            name: format!("Placement {id}"),
            location: "Somewhere".to_string(),
            hoarding_type,
            size: "10x10".to_string(),
            monthly_price: price,
            availability,
            daily_traffic: 1000,
            conversion_score: 4.0,
            coordinates: Coordinates::new(0.0, 0.0),
        }
    }

    fn scenario_catalog() -> Vec<PlacementRecord> {
        vec![
            record(1, 5000, HoardingType::Digital, Availability::Available),
            record(2, 2500, HoardingType::Static, Availability::Booked),
            record(3, 3500, HoardingType::Digital, Availability::Available),
        ]
    }

    fn ids<'a>(records: impl Iterator<Item = &'a PlacementRecord>) -> Vec<u32> {
        records.map(|r| r.id).collect()
    }

    #[test]
    fn default_criteria_keep_everything() {
        let catalog = scenario_catalog();
        assert_eq!(
            ids(apply_filters(&catalog, FilterCriteria::default())),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn price_and_availability_combine() {
        let catalog = scenario_catalog();
        let mut state = FilterState::default();
        state.set_price_range(0, 4000);
        state.set_available_only(true);

        assert_eq!(ids(state.apply(&catalog)), vec![3]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = scenario_catalog();
        let mut state = FilterState::default();
        state.set_price_range(2500, 3500);

        assert_eq!(ids(state.apply(&catalog)), vec![2, 3]);
    }

    #[test]
    fn type_filter_selects_matching_type() {
        let catalog = scenario_catalog();
        let mut state = FilterState::default();

        state.set_hoarding_type(HoardingTypeFilter::Static);
        assert_eq!(ids(state.apply(&catalog)), vec![2]);

        state.set_hoarding_type(HoardingTypeFilter::Led);
        assert!(state.apply(&catalog).next().is_none());
    }

    #[test]
    fn heatmap_toggle_never_filters() {
        let catalog = scenario_catalog();
        let mut state = FilterState::default();
        state.set_show_traffic_heat(false);
        assert_eq!(ids(state.apply(&catalog)), vec![1, 2, 3]);
    }

    #[test]
    fn included_iff_all_predicates_hold() {
        let catalog = scenario_catalog();
        let types = HoardingTypeFilter::all();

        for &hoarding_type in types {
            for available_only in [false, true] {
                for (min, max) in [(0, 10_000), (0, 4000), (3000, 6000), (2600, 3400)] {
                    let criteria = FilterCriteria {
                        price_range: PriceRange::new(min, max),
                        hoarding_type,
                        show_traffic_heat: true,
                        available_only,
                    };

                    let got = ids(apply_filters(&catalog, criteria));
                    let expected: Vec<u32> = catalog
                        .iter()
                        .filter(|r| {
                            r.monthly_price >= min
                                && r.monthly_price <= max
                                && hoarding_type.matches(r.hoarding_type)
                                && (!available_only || r.availability == Availability::Available)
                        })
                        .map(|r| r.id)
                        .collect();

                    assert_eq!(got, expected, "criteria {criteria:?}");
                    assert!(
                        got.windows(2).all(|w| w[0] < w[1]),
                        "catalog order not preserved for {criteria:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState::default();
        state.set_price_range(100, 200);
        state.set_available_only(true);
        state.reset();
        assert_eq!(*state.criteria(), FilterCriteria::default());
    }
}
