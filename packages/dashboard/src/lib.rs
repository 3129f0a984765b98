#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interaction model for the hoarding map dashboard.
//!
//! A [`session::DashboardSession`] owns everything one user mutates while
//! browsing: the filter sidebar ([`filter::FilterState`]), the single
//! selected placement ([`selection::SelectionState`]), the active tab, the
//! campaign creation dialog ([`campaign::CampaignDialog`]), and a
//! [`scheduler::Scheduler`] for deferred notifications. User intents are
//! turned into toasts through the [`notify::Notifier`] port, so none of this
//! depends on a rendering surface.
//!
//! Everything runs on one thread. Deferred work only fires when the caller
//! polls the session with the current time.

pub mod actions;
pub mod campaign;
pub mod filter;
pub mod markers;
pub mod notify;
pub mod scheduler;
pub mod search;
pub mod selection;
pub mod session;
pub mod stats;

use adspace_catalog::CatalogError;
use thiserror::Error;

pub use campaign::CampaignError;

/// Errors surfaced by dashboard session operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A marker or card referenced a placement the catalog does not hold.
    #[error("Unknown placement id {id}")]
    UnknownPlacement {
        /// The id that was clicked.
        id: u32,
    },

    /// An action needing a selected placement ran with none selected.
    #[error("No placement is selected")]
    NoSelection,

    /// The campaign dialog was submitted while closed.
    #[error("Campaign dialog is not open")]
    DialogClosed,

    /// Campaign validation failed.
    #[error(transparent)]
    Campaign(#[from] CampaignError),

    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
