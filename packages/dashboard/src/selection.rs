//! Single-placement selection driven by marker and card clicks.

use adspace_catalog::CatalogProvider;
use adspace_catalog_models::PlacementRecord;

use crate::DashboardError;

/// Holds at most one selected placement.
///
/// The selection is stored by id and resolved against the catalog on read,
/// so it can never outlive or diverge from the record it names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<u32>,
}

impl SelectionState {
    /// Selects `record`, replacing any previous selection.
    ///
    /// `record` must come from the catalog the selection is later resolved
    /// against.
    pub fn select(&mut self, record: &PlacementRecord) {
        if let Some(previous) = self.selected.replace(record.id)
            && previous != record.id
        {
            log::debug!("selection moved from {previous} to {}", record.id);
        }
    }

    /// Resolves a marker click by id and selects the matching record.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownPlacement`] if the catalog has no
    /// such id. The current selection is left untouched.
    pub fn select_marker<'a, C: CatalogProvider + ?Sized>(
        &mut self,
        catalog: &'a C,
        id: u32,
    ) -> Result<&'a PlacementRecord, DashboardError> {
        let record = catalog
            .get(id)
            .ok_or(DashboardError::UnknownPlacement { id })?;
        self.select(record);
        Ok(record)
    }

    /// Clears the selection. Clearing an empty selection is a no-op.
    pub const fn clear(&mut self) {
        self.selected = None;
    }

    /// Id of the selected placement, if any.
    #[must_use]
    pub const fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    /// The selected placement, resolved against `catalog`.
    #[must_use]
    pub fn current<'a, C: CatalogProvider + ?Sized>(
        &self,
        catalog: &'a C,
    ) -> Option<&'a PlacementRecord> {
        self.selected.and_then(|id| catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspace_catalog::Catalog;

    #[test]
    fn select_replaces_previous() {
        let catalog = Catalog::embedded();
        let mut selection = SelectionState::default();

        for record in catalog.placements() {
            selection.select(record);
        }
        selection.select(&catalog.placements()[1]);

        assert_eq!(selection.current(&catalog).map(|r| r.id), Some(2));
    }

    #[test]
    fn last_select_wins_for_any_sequence() {
        let catalog = Catalog::embedded();
        let mut selection = SelectionState::default();

        for sequence in [[1, 2, 3], [3, 3, 1], [2, 1, 2]] {
            for id in sequence {
                selection.select_marker(&catalog, id).unwrap();
            }
            assert_eq!(selection.selected_id(), Some(sequence[2]));
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let catalog = Catalog::embedded();
        let mut selection = SelectionState::default();
        selection.select(&catalog.placements()[0]);

        selection.clear();
        let once = selection;
        selection.clear();

        assert_eq!(selection, once);
        assert!(selection.current(&catalog).is_none());
    }

    #[test]
    fn unknown_marker_keeps_selection() {
        let catalog = Catalog::embedded();
        let mut selection = SelectionState::default();
        selection.select_marker(&catalog, 3).unwrap();

        let err = selection.select_marker(&catalog, 42).unwrap_err();

        assert!(matches!(err, DashboardError::UnknownPlacement { id: 42 }));
        assert_eq!(selection.selected_id(), Some(3));
    }
}
