//! Toast content for each dashboard action.
//!
//! These are pure builders; [`crate::session::DashboardSession`] decides
//! when to send them and applies any accompanying state change.

use adspace_catalog_models::PlacementRecord;
use adspace_dashboard_models::{CampaignSubmission, Notification, QuickAction};

use crate::campaign::{CampaignError, RequiredField};

/// Toast for the map's recenter control.
#[must_use]
pub fn recentered() -> Notification {
    Notification::info("Map Recentered", "View has been reset to show all locations")
}

/// Toast for the AR preview control.
#[must_use]
pub fn ar_preview() -> Notification {
    Notification::info("AR Preview", "Opening augmented reality preview mode...")
}

/// Toast for the detail card's primary button. Available placements start
/// a booking; anything else only shows its details.
#[must_use]
pub fn booking(record: &PlacementRecord) -> Notification {
    if record.is_available() {
        Notification::info(
            "Booking Started",
            format!("Initiating booking process for {}", record.name),
        )
    } else {
        Notification::info(
            "Location Details",
            format!("Viewing details for {}", record.name),
        )
    }
}

/// Toast for the "View Campaigns" header button.
#[must_use]
pub fn campaigns_opened() -> Notification {
    Notification::info("Campaigns", "Showing your campaign dashboard")
}

/// First toast of an AI recommendation request.
#[must_use]
pub fn recommendations_loading() -> Notification {
    Notification::info(
        "AI Recommendations",
        "Analyzing traffic and conversion data to find your best placements...",
    )
}

/// Second, delayed toast of an AI recommendation request. `picks` is the
/// ranked list, best first.
#[must_use]
pub fn recommendations_ready(picks: &[&PlacementRecord]) -> Notification {
    match picks.first() {
        Some(top) => Notification::info(
            "Recommendations Ready",
            format!(
                "Found {} recommended placement{}. Top pick: {} ({}/5 conversion score)",
                picks.len(),
                if picks.len() == 1 { "" } else { "s" },
                top.name,
                top.conversion_score
            ),
        ),
        None => Notification::info(
            "Recommendations Ready",
            "No available placements match your current filters",
        ),
    }
}

/// Toast for a rejected campaign draft.
#[must_use]
pub fn campaign_invalid(error: CampaignError) -> Notification {
    let CampaignError::MissingRequiredField { field } = error;
    let description = match field {
        RequiredField::Name => "Please enter a campaign name before creating the campaign",
        RequiredField::Budget => "Please enter a budget before creating the campaign",
    };
    Notification::destructive("Missing Information", description)
}

/// Toast for an accepted campaign.
#[must_use]
pub fn campaign_created(submission: &CampaignSubmission) -> Notification {
    Notification::info(
        "Campaign Created",
        format!("{} has been created successfully", submission.name),
    )
}

/// Toast for a quick action button. Unknown tags get a generic reply.
#[must_use]
pub fn quick_action(action: &QuickAction) -> Notification {
    match action {
        QuickAction::Schedule => {
            Notification::info("Schedule Campaign", "Opening the campaign scheduler...")
        }
        QuickAction::Reports => {
            Notification::info("View Reports", "Loading campaign performance reports...")
        }
        QuickAction::Bulk => Notification::info(
            "Bulk Booking",
            "Select multiple locations on the map to book them together",
        ),
        QuickAction::Other(_) => Notification::info("Coming Soon", "This feature is coming soon!"),
    }
}
