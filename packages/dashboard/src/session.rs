//! A single user's dashboard session.
//!
//! [`DashboardSession`] composes the catalog, filter sidebar, selection,
//! active tab, campaign dialog, and deferred task queue, and exposes one
//! method per user intent. Every state change is synchronous; the only
//! deferred work is the second AI recommendation toast, which fires from
//! [`DashboardSession::poll`].

use std::path::PathBuf;
use std::time::{Duration, Instant};

use adspace_catalog::{Catalog, CatalogProvider};
use adspace_catalog_models::PlacementRecord;
use adspace_dashboard_models::{
    CampaignDraft, CampaignPerformance, CampaignSubmission, FilterCriteria, HoardingTypeFilter,
    MarkerPlacement, Notification, NotificationSeverity, QuickAction, QuickStats, Tab,
};

use crate::DashboardError;
use crate::actions;
use crate::campaign::{CampaignDialog, DialogState};
use crate::filter::FilterState;
use crate::markers::marker_layout;
use crate::notify::Notifier;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::search::search;
use crate::selection::SelectionState;
use crate::stats;

/// Environment variable overriding the AI recommendation delay, in
/// milliseconds.
pub const AI_DELAY_ENV_VAR: &str = "ADSPACE_AI_DELAY_MS";

/// Delay between the two AI recommendation toasts when not configured.
pub const DEFAULT_AI_DELAY: Duration = Duration::from_secs(2);

/// How many placements an AI recommendation lists.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Catalog TOML file. `None` falls back to `ADSPACE_CATALOG` and then the
    /// embedded catalog.
    pub catalog_path: Option<PathBuf>,
    /// Delay before the AI recommendation results toast.
    pub ai_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            ai_delay: DEFAULT_AI_DELAY,
        }
    }
}

impl SessionConfig {
    /// Defaults, with the AI delay read from `ADSPACE_AI_DELAY_MS` when it
    /// holds a valid number of milliseconds.
    #[must_use]
    pub fn from_env() -> Self {
        let ai_delay = std::env::var(AI_DELAY_ENV_VAR)
            .ok()
            .and_then(|v| match v.trim().parse::<u64>() {
                Ok(ms) => Some(Duration::from_millis(ms)),
                Err(e) => {
                    log::warn!("Ignoring invalid {AI_DELAY_ENV_VAR}={v:?}: {e}");
                    None
                }
            })
            .unwrap_or(DEFAULT_AI_DELAY);

        Self {
            catalog_path: None,
            ai_delay,
        }
    }
}

/// Work deferred onto the session's scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Emit the AI recommendation results toast.
    AiRecommendationsReady,
}

/// Whether AI recommendations are being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiStatus {
    /// Nothing outstanding.
    Idle,
    /// Results toasts still to come.
    Pending {
        /// Number of outstanding requests.
        requests: usize,
    },
}

/// All mutable state for one dashboard user.
pub struct DashboardSession<C: CatalogProvider, N: Notifier> {
    catalog: C,
    notifier: N,
    config: SessionConfig,
    filters: FilterState,
    selection: SelectionState,
    tab: Tab,
    dialog: CampaignDialog,
    campaigns: Vec<CampaignSubmission>,
    scheduler: Scheduler<DeferredAction>,
}

impl<N: Notifier> DashboardSession<Catalog, N> {
    /// Resolves the catalog named by `config` and starts a session on it.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Catalog`] if a configured catalog file
    /// cannot be loaded.
    pub fn open(config: SessionConfig, notifier: N) -> Result<Self, DashboardError> {
        let catalog = Catalog::resolve(config.catalog_path.as_deref())?;
        Ok(Self::new(catalog, notifier, config))
    }
}

impl<C: CatalogProvider, N: Notifier> DashboardSession<C, N> {
    /// Starts a session on `catalog` with default filters, no selection, the
    /// map tab active, and the campaign dialog closed.
    pub fn new(catalog: C, notifier: N, config: SessionConfig) -> Self {
        log::info!(
            "Starting dashboard session with {} placements",
            catalog.placements().len()
        );
        Self {
            catalog,
            notifier,
            config,
            filters: FilterState::default(),
            selection: SelectionState::default(),
            tab: Tab::default(),
            dialog: CampaignDialog::default(),
            campaigns: Vec::new(),
            scheduler: Scheduler::new(),
        }
    }

    fn emit(&mut self, notification: Notification) {
        match notification.severity {
            NotificationSeverity::Default => log::info!("toast: {}", notification.title),
            NotificationSeverity::Destructive => log::warn!("toast: {}", notification.title),
        }
        self.notifier.notify(notification);
    }

    /// The catalog being browsed.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The notification sink.
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    // ── Filters ─────────────────────────────────────────

    /// Active filter criteria.
    pub const fn criteria(&self) -> &FilterCriteria {
        self.filters.criteria()
    }

    /// Sets the price slider.
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.filters.set_price_range(min, max);
    }

    /// Sets the type selector.
    pub fn set_hoarding_type(&mut self, hoarding_type: HoardingTypeFilter) {
        self.filters.set_hoarding_type(hoarding_type);
    }

    /// Toggles the heatmap overlay.
    pub const fn set_show_traffic_heat(&mut self, show: bool) {
        self.filters.set_show_traffic_heat(show);
    }

    /// Toggles hiding of booked placements.
    pub const fn set_available_only(&mut self, available_only: bool) {
        self.filters.set_available_only(available_only);
    }

    /// Restores the sidebar defaults.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    /// Placements passing the current filters, in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.filters.apply(self.catalog.placements())
    }

    /// Catalog placements whose name or location contains `query`. The
    /// navigation search box ignores the sidebar filters.
    pub fn search(&self, query: &str) -> Vec<&PlacementRecord> {
        search(self.catalog.placements(), query)
    }

    /// Marker positions for the visible placements.
    pub fn markers(&self) -> Vec<MarkerPlacement> {
        marker_layout(self.visible())
    }

    // ── Selection ───────────────────────────────────────

    /// Handles a marker or card click.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownPlacement`] if `id` is not in the
    /// catalog.
    pub fn select(&mut self, id: u32) -> Result<&PlacementRecord, DashboardError> {
        self.selection.select_marker(&self.catalog, id)
    }

    /// Dismisses the detail card.
    pub const fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The placement shown in the detail card.
    pub fn selected(&self) -> Option<&PlacementRecord> {
        self.selection.current(&self.catalog)
    }

    // ── Tabs ────────────────────────────────────────────

    /// The active tab.
    pub const fn active_tab(&self) -> Tab {
        self.tab
    }

    /// Switches tabs.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            log::debug!("tab {} -> {tab}", self.tab);
            self.tab = tab;
        }
    }

    // ── Actions ─────────────────────────────────────────

    /// Map recenter control.
    pub fn recenter(&mut self) {
        self.emit(actions::recentered());
    }

    /// Map AR preview control.
    pub fn ar_preview(&mut self) {
        self.emit(actions::ar_preview());
    }

    /// The detail card's book / view details button. Neither branch changes
    /// the catalog or the selection.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoSelection`] if nothing is selected; no
    /// toast is sent in that case.
    pub fn book(&mut self) -> Result<(), DashboardError> {
        let toast = self
            .selected()
            .map(actions::booking)
            .ok_or(DashboardError::NoSelection)?;
        self.emit(toast);
        Ok(())
    }

    /// Header "View Campaigns" button.
    pub fn view_campaigns(&mut self) {
        self.set_tab(Tab::Campaigns);
        self.emit(actions::campaigns_opened());
    }

    /// Header "AI Recommendations" button. Sends the loading toast now and
    /// schedules the results toast after the configured delay. Each call
    /// schedules its own results toast.
    pub fn request_ai_recommendations(&mut self, now: Instant) -> TaskHandle {
        self.emit(actions::recommendations_loading());
        self.scheduler.schedule(
            now,
            self.config.ai_delay,
            DeferredAction::AiRecommendationsReady,
        )
    }

    /// Whether AI recommendation results are still outstanding.
    pub fn ai_status(&self) -> AiStatus {
        match self
            .scheduler
            .pending_where(|a| *a == DeferredAction::AiRecommendationsReady)
        {
            0 => AiStatus::Idle,
            requests => AiStatus::Pending { requests },
        }
    }

    /// When the next deferred task becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Runs every deferred task due at `now`. Returns how many ran.
    pub fn poll(&mut self, now: Instant) -> usize {
        let due = self.scheduler.take_due(now);
        let count = due.len();

        for (handle, action) in due {
            log::debug!("running {handle}: {action:?}");
            match action {
                DeferredAction::AiRecommendationsReady => {
                    let picks = stats::recommend(self.visible(), RECOMMENDATION_LIMIT);
                    let toast = actions::recommendations_ready(&picks);
                    self.emit(toast);
                }
            }
        }

        count
    }

    /// Quick action button on the campaigns tab.
    pub fn quick_action(&mut self, action: &QuickAction) {
        if matches!(action, QuickAction::Other(_)) {
            log::debug!("unmapped quick action {:?}", action.tag());
        }
        self.emit(actions::quick_action(action));
    }

    // ── Campaign dialog ─────────────────────────────────

    /// "Create Campaign" trigger.
    pub fn open_campaign_dialog(&mut self) {
        self.dialog.open();
    }

    /// Dialog cancel button.
    pub fn cancel_campaign_dialog(&mut self) {
        self.dialog.cancel();
    }

    /// Dialog lifecycle state.
    pub const fn campaign_dialog_state(&self) -> DialogState {
        self.dialog.state()
    }

    /// The draft being edited.
    pub const fn campaign_draft(&self) -> &CampaignDraft {
        self.dialog.draft()
    }

    /// Mutable draft access for form widgets.
    pub const fn campaign_draft_mut(&mut self) -> &mut CampaignDraft {
        self.dialog.draft_mut()
    }

    /// Dialog create button.
    ///
    /// A valid draft sends a success toast, closes the dialog, resets the
    /// draft, and records the campaign. An invalid draft sends a destructive
    /// toast and leaves the dialog open with the draft intact.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::DialogClosed`] if the dialog is not open,
    /// or [`DashboardError::Campaign`] if validation fails.
    pub fn submit_campaign(&mut self) -> Result<&CampaignSubmission, DashboardError> {
        if !self.dialog.is_open() {
            return Err(DashboardError::DialogClosed);
        }

        match self.dialog.submit() {
            Ok(submission) => {
                self.emit(actions::campaign_created(&submission));
                self.campaigns.push(submission);
                Ok(&self.campaigns[self.campaigns.len() - 1])
            }
            Err(e) => {
                self.emit(actions::campaign_invalid(e));
                Err(e.into())
            }
        }
    }

    /// Campaigns created in this session, oldest first.
    pub fn campaigns(&self) -> &[CampaignSubmission] {
        &self.campaigns
    }

    // ── Analytics ───────────────────────────────────────

    /// Headline counts over the whole catalog.
    pub fn stats(&self) -> QuickStats {
        stats::quick_stats(self.catalog.placements())
    }

    /// Best-performing placements across the whole catalog.
    pub fn top_locations(&self, limit: usize) -> Vec<&PlacementRecord> {
        stats::top_locations(self.catalog.placements(), limit)
    }

    /// Campaign performance rows, including campaigns created this session.
    pub fn campaign_performance(&self) -> Vec<CampaignPerformance> {
        stats::campaign_performance(&self.campaigns)
    }

    // ── Teardown ────────────────────────────────────────

    /// Cancels every pending deferred task. Returns how many were dropped.
    pub fn shutdown(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_all();
        if cancelled > 0 {
            log::info!("Cancelled {cancelled} pending deferred task(s)");
        }
        cancelled
    }
}

impl<C: CatalogProvider, N: Notifier> Drop for DashboardSession<C, N> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
