//! Text rendering of the dashboard panels.
//!
//! Every function here is a pure view of session state and returns a
//! `String`, leaving output to the caller.

use std::fmt::Write as _;

use adspace_catalog_models::PlacementRecord;
use adspace_dashboard::session::AiStatus;
use adspace_dashboard_models::{
    CampaignDuration, CampaignPerformance, CampaignSubmission, FilterCriteria, MarkerPlacement,
    Notification, NotificationSeverity, QuickAction, QuickStats, Tab,
};
use console::style;

/// Character columns of the map surface.
pub const MAP_WIDTH: usize = 60;
/// Character rows of the map surface.
pub const MAP_HEIGHT: usize = 14;

/// Daily traffic at or above which a marker is drawn as a hot spot.
const HEAT_THRESHOLD: u64 = 80_000;

/// Formats `value` with comma thousands separators.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// App title, tab strip, and pending-work indicator.
#[must_use]
pub fn header(active: Tab, ai: AiStatus) -> String {
    let tabs: Vec<String> = Tab::all()
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", style(tab.label()).bold().cyan())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect();

    let mut out = format!(
        "{}\n{}\n",
        style("AdSpaceManager").bold(),
        tabs.join("  ")
    );
    if let AiStatus::Pending { requests } = ai {
        let _ = writeln!(
            out,
            "{}",
            style(format!("AI recommendations pending ({requests})")).yellow()
        );
    }
    out
}

/// The filter sidebar.
#[must_use]
pub fn filters_panel(criteria: &FilterCriteria) -> String {
    let on_off = |b: bool| if b { "on" } else { "off" };
    format!(
        "Filters\n  Price range ($/month): ${} - ${}\n  Hoarding type: {}\n  Traffic heatmap: {}\n  Available only: {}\n",
        criteria.price_range.min,
        criteria.price_range.max,
        criteria.hoarding_type.label(),
        on_off(criteria.show_traffic_heat),
        on_off(criteria.available_only),
    )
}

/// Featured location cards for the visible placements.
#[must_use]
pub fn placement_list(records: &[&PlacementRecord], selected: Option<u32>) -> String {
    let mut out = format!("Featured Locations ({})\n", records.len());
    if records.is_empty() {
        out.push_str("  No placements match the current filters\n");
        return out;
    }

    for record in records {
        let marker = if Some(record.id) == selected { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} #{} {} - {} [{}] ${}/mo  {}/5",
            record.id,
            record.name,
            record.location,
            record.availability,
            record.monthly_price,
            record.conversion_score
        );
    }
    out
}

/// Label of the detail card's primary button.
#[must_use]
pub fn booking_button_label(record: &PlacementRecord) -> &'static str {
    if record.is_available() {
        "Book Now"
    } else {
        "View Details"
    }
}

/// The selected placement's detail card.
#[must_use]
pub fn detail_card(record: &PlacementRecord) -> String {
    format!(
        "{}\n{}\n  Type: {}    Size: {}\n  Traffic/Day: {}    Score: {}/5\n  ${}/month (starting price)    [{}]\n",
        style(&record.name).bold(),
        record.location,
        record.hoarding_type,
        record.size,
        thousands(record.daily_traffic),
        record.conversion_score,
        record.monthly_price,
        booking_button_label(record),
    )
}

/// The map surface with one glyph per marker.
///
/// Markers are drawn as their id's last digit. With the heatmap on,
/// high-traffic placements are drawn as `@` and a legend is appended.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn map_panel(
    markers: &[MarkerPlacement],
    records: &[&PlacementRecord],
    show_heat: bool,
) -> String {
    let mut grid = vec![vec!['.'; MAP_WIDTH]; MAP_HEIGHT];

    for marker in markers {
        let col = ((marker.x * (MAP_WIDTH - 1) as f64).round() as usize).min(MAP_WIDTH - 1);
        let row = ((marker.y * (MAP_HEIGHT - 1) as f64).round() as usize).min(MAP_HEIGHT - 1);
        let hot = show_heat
            && records
                .iter()
                .any(|r| r.id == marker.marker_id && r.daily_traffic >= HEAT_THRESHOLD);

        grid[row][col] = if hot {
            '@'
        } else {
            char::from_digit(marker.marker_id % 10, 10).unwrap_or('*')
        };
    }

    let mut out = String::from("Map\n");
    for row in grid {
        out.push_str("  ");
        out.extend(row);
        out.push('\n');
    }
    if show_heat {
        let _ = writeln!(
            out,
            "  @ = {}+ daily viewers",
            thousands(HEAT_THRESHOLD)
        );
    }
    out
}

/// The analytics tab.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn stats_panel(
    stats: &QuickStats,
    top: &[&PlacementRecord],
    campaigns: &[CampaignPerformance],
) -> String {
    let mut out = format!(
        "Quick Stats\n  Available: {}    Booked: {}\n  Available inventory: ${}/month    Avg. conversion score: {:.1}/5\n",
        stats.available,
        stats.booked,
        thousands(stats.available_monthly_value),
        stats.average_conversion_score,
    );

    out.push_str("\nCampaign Performance\n");
    for campaign in campaigns {
        let _ = writeln!(
            out,
            "  {:<24} ROI: {}x  ${}  {:.1}M impressions ({:.0}% of target)",
            campaign.name,
            campaign.roi,
            thousands(campaign.spend.round().max(0.0) as u64),
            campaign.impressions as f64 / 1_000_000.0,
            campaign.target_progress(),
        );
    }

    out.push_str("\nTop Performing Locations\n");
    for record in top {
        let _ = writeln!(
            out,
            "  {:<28} {}K/day  {}/5.0",
            record.name,
            record.daily_traffic / 1000,
            record.conversion_score
        );
    }
    out
}

/// The campaigns tab: quick actions and campaigns created this session.
#[must_use]
pub fn campaigns_panel(created: &[CampaignSubmission]) -> String {
    let mut out = String::from("Quick Actions\n");
    for action in QuickAction::known() {
        let _ = writeln!(out, "  - {}", action.label());
    }

    let _ = write!(out, "\nYour Campaigns ({})\n", created.len());
    if created.is_empty() {
        out.push_str("  None yet. Create one to get started.\n");
    }
    for campaign in created {
        let budget = campaign
            .budget
            .map_or_else(|| "-".to_string(), |b| format!("${b:.0}"));
        let duration = campaign.duration.map_or("-", CampaignDuration::label);
        let audience = campaign
            .target_audience
            .map_or_else(|| "-".to_string(), |a| a.to_string());
        let _ = writeln!(
            out,
            "  {:<24} budget {budget}  {duration}  audience {audience}",
            campaign.name
        );
    }
    out
}

/// A toast line.
#[must_use]
pub fn toast(notification: &Notification) -> String {
    match notification.severity {
        NotificationSeverity::Default => format!(
            "{} {}",
            style(format!("[{}]", notification.title)).green().bold(),
            notification.description
        ),
        NotificationSeverity::Destructive => format!(
            "{} {}",
            style(format!("[{}]", notification.title)).red().bold(),
            notification.description
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspace_catalog::{Catalog, CatalogProvider as _};
    use adspace_dashboard::markers::marker_layout;
    use adspace_dashboard::stats;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).into_owned()
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(95_000), "95,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn detail_card_shows_button_for_availability() {
        let catalog = Catalog::embedded();
        let card = plain(&detail_card(catalog.get(1).unwrap()));
        assert!(card.contains("Times Square Billboard"));
        assert!(card.contains("95,000"));
        assert!(card.contains("[Book Now]"));

        let card = plain(&detail_card(catalog.get(2).unwrap()));
        assert!(card.contains("[View Details]"));
    }

    #[test]
    fn map_draws_every_marker() {
        let catalog = Catalog::embedded();
        let records: Vec<&PlacementRecord> = catalog.placements().iter().collect();
        let markers = marker_layout(records.iter().copied());

        let map = map_panel(&markers, &records, false);
        for digit in ['1', '2', '3'] {
            assert_eq!(map.matches(digit).count(), 1, "marker {digit} in\n{map}");
        }

        let heat = map_panel(&markers, &records, true);
        assert_eq!(heat.matches('@').count(), 3, "two hot markers plus legend");
        assert!(heat.contains('2'));
    }

    #[test]
    fn empty_list_says_so() {
        assert!(placement_list(&[], None).contains("No placements match"));
    }

    #[test]
    fn list_marks_selection() {
        let catalog = Catalog::embedded();
        let records: Vec<&PlacementRecord> = catalog.placements().iter().collect();
        let list = placement_list(&records, Some(3));
        assert!(list.lines().any(|l| l.starts_with("> #3")));
        assert!(list.lines().any(|l| l.starts_with("  #1")));
    }

    #[test]
    fn stats_panel_lists_campaigns_and_locations() {
        let catalog = Catalog::embedded();
        let panel = plain(&stats_panel(
            &stats::quick_stats(catalog.placements()),
            &stats::top_locations(catalog.placements(), 3),
            &stats::sample_campaigns(),
        ));
        assert!(panel.contains("Available: 2"));
        assert!(panel.contains("Summer Sale 2024"));
        assert!(panel.contains("85% of target"));
        assert!(panel.contains("Times Square Billboard"));
    }

    #[test]
    fn header_flags_pending_ai() {
        let idle = plain(&header(Tab::Map, AiStatus::Idle));
        assert!(idle.contains("[Map View]"));
        assert!(!idle.contains("pending"));

        let busy = plain(&header(Tab::Analytics, AiStatus::Pending { requests: 2 }));
        assert!(busy.contains("[Analytics]"));
        assert!(busy.contains("pending (2)"));
    }

    #[test]
    fn campaigns_panel_lists_created() {
        assert!(campaigns_panel(&[]).contains("None yet"));

        let panel = campaigns_panel(&[CampaignSubmission {
            name: "Launch".to_string(),
            description: String::new(),
            budget: Some(5000.0),
            duration: Some(CampaignDuration::OneMonth),
            target_audience: None,
        }]);
        assert!(panel.contains("Your Campaigns (1)"));
        assert!(panel.contains("budget $5000  1 Month  audience -"));
        assert!(panel.contains("Bulk Booking"));
    }

    #[test]
    fn toast_includes_title_and_description() {
        let line = plain(&toast(&Notification::destructive("Missing Information", "Name")));
        assert_eq!(line, "[Missing Information] Name");
    }
}
