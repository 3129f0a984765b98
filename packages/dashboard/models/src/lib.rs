#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter, campaign, and notification types for the hoarding dashboard.
//!
//! These are the plain data shapes that flow between the dashboard logic in
//! `adspace_dashboard` and whatever surface presents it. None of them carry
//! behavior beyond construction helpers and small derived values.

use adspace_catalog_models::HoardingType;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Lowest value the price slider allows.
pub const PRICE_FLOOR: u32 = 0;
/// Highest value the price slider allows.
pub const PRICE_CEILING: u32 = 10_000;
/// Granularity of the price slider.
pub const PRICE_STEP: u32 = 100;

/// Inclusive monthly price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound.
    pub max: u32,
}

impl PriceRange {
    /// Creates a range, clamping both ends to the slider bounds, snapping
    /// them to the nearest [`PRICE_STEP`], and swapping them if given out of
    /// order.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        let a = snap_to_step(a);
        let b = snap_to_step(b);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Whether `price` falls within the range, inclusive at both ends.
    #[must_use]
    pub const fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

const fn snap_to_step(price: u32) -> u32 {
    let clamped = if price > PRICE_CEILING {
        PRICE_CEILING
    } else {
        price
    };
    let snapped = (clamped + PRICE_STEP / 2) / PRICE_STEP * PRICE_STEP;
    if snapped > PRICE_CEILING {
        PRICE_CEILING
    } else {
        snapped
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        }
    }
}

/// Hoarding type selector, including the catch-all.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HoardingTypeFilter {
    /// No type restriction.
    #[default]
    All,
    /// Digital screens only.
    Digital,
    /// Static posters only.
    Static,
    /// LED boards only.
    Led,
}

impl HoardingTypeFilter {
    /// Returns all variants in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::Digital, Self::Static, Self::Led]
    }

    /// Label shown in the type selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Types",
            Self::Digital => "Digital",
            Self::Static => "Static",
            Self::Led => "LED",
        }
    }

    /// Whether a placement of type `hoarding_type` passes this selector.
    ///
    /// Type names are compared case-insensitively, so `led` matches `LED`.
    #[must_use]
    pub fn matches(self, hoarding_type: HoardingType) -> bool {
        self == Self::All || self.as_ref().eq_ignore_ascii_case(hoarding_type.as_ref())
    }
}

/// The active filter sidebar settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Monthly price bounds.
    pub price_range: PriceRange,
    /// Type selector.
    pub hoarding_type: HoardingTypeFilter,
    /// Traffic heatmap overlay toggle. Display only; never filters.
    pub show_traffic_heat: bool,
    /// Hide booked placements.
    pub available_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: PriceRange::default(),
            hoarding_type: HoardingTypeFilter::All,
            show_traffic_heat: true,
            available_only: false,
        }
    }
}

/// How prominently a notification is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationSeverity {
    /// Informational toast.
    #[default]
    Default,
    /// Error toast.
    Destructive,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Display severity.
    pub severity: NotificationSeverity,
}

impl Notification {
    /// Creates a default-severity notification.
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NotificationSeverity::Default,
        }
    }

    /// Creates a destructive-severity notification.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NotificationSeverity::Destructive,
        }
    }

    /// Whether this is an error toast.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.severity == NotificationSeverity::Destructive
    }
}

/// Top-level dashboard tabs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tab {
    /// Map view with filters and markers.
    #[default]
    Map,
    /// Stats and performance overview.
    Analytics,
    /// Campaign management and quick actions.
    Campaigns,
}

impl Tab {
    /// Returns all tabs in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Map, Self::Analytics, Self::Campaigns]
    }

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Map => "Map View",
            Self::Analytics => "Analytics",
            Self::Campaigns => "Campaigns",
        }
    }
}

/// Shortcut buttons on the campaigns tab.
///
/// Unrecognised tags are preserved in [`QuickAction::Other`] and answered
/// with a generic response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    /// Schedule a campaign.
    Schedule,
    /// Open campaign reports.
    Reports,
    /// Book several placements at once.
    Bulk,
    /// Anything else.
    Other(String),
}

impl QuickAction {
    /// The known actions, in button order.
    #[must_use]
    pub fn known() -> [Self; 3] {
        [Self::Schedule, Self::Reports, Self::Bulk]
    }

    /// Resolves a button tag. Matching ignores case and surrounding
    /// whitespace.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "schedule" => Self::Schedule,
            "reports" => Self::Reports,
            "bulk" => Self::Bulk,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// The tag this action was created from.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Schedule => "schedule",
            Self::Reports => "reports",
            Self::Bulk => "bulk",
            Self::Other(tag) => tag,
        }
    }

    /// Button caption.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Schedule => "Schedule Campaign",
            Self::Reports => "View Reports",
            Self::Bulk => "Bulk Booking",
            Self::Other(tag) => tag,
        }
    }
}

/// Campaign run length choices.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CampaignDuration {
    /// One week.
    #[serde(rename = "1week")]
    #[strum(serialize = "1week")]
    OneWeek,
    /// Two weeks.
    #[serde(rename = "2weeks")]
    #[strum(serialize = "2weeks")]
    TwoWeeks,
    /// One month.
    #[serde(rename = "1month")]
    #[strum(serialize = "1month")]
    OneMonth,
    /// Three months.
    #[serde(rename = "3months")]
    #[strum(serialize = "3months")]
    ThreeMonths,
    /// Six months.
    #[serde(rename = "6months")]
    #[strum(serialize = "6months")]
    SixMonths,
}

impl CampaignDuration {
    /// Returns all choices in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneWeek,
            Self::TwoWeeks,
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
        ]
    }

    /// Selector caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneWeek => "1 Week",
            Self::TwoWeeks => "2 Weeks",
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
        }
    }
}

/// Target audience age brackets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AudienceBracket {
    /// 18 to 25.
    #[serde(rename = "18-25")]
    #[strum(serialize = "18-25")]
    Age18To25,
    /// 26 to 35.
    #[serde(rename = "26-35")]
    #[strum(serialize = "26-35")]
    Age26To35,
    /// 36 to 45.
    #[serde(rename = "36-45")]
    #[strum(serialize = "36-45")]
    Age36To45,
    /// 46 to 55.
    #[serde(rename = "46-55")]
    #[strum(serialize = "46-55")]
    Age46To55,
    /// Over 55.
    #[serde(rename = "55+")]
    #[strum(serialize = "55+")]
    Age55Plus,
}

impl AudienceBracket {
    /// Returns all brackets in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Age18To25,
            Self::Age26To35,
            Self::Age36To45,
            Self::Age46To55,
            Self::Age55Plus,
        ]
    }
}

/// In-progress campaign form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    /// Campaign name. Required.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Budget as typed. Required.
    pub budget: String,
    /// Run length.
    pub duration: Option<CampaignDuration>,
    /// Target audience.
    pub target_audience: Option<AudienceBracket>,
}

impl CampaignDraft {
    /// Whether every field is at its empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A campaign accepted by the creation dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSubmission {
    /// Campaign name, trimmed.
    pub name: String,
    /// Description as entered.
    pub description: String,
    /// Budget parsed as dollars, when the text is numeric.
    pub budget: Option<f64>,
    /// Run length.
    pub duration: Option<CampaignDuration>,
    /// Target audience.
    pub target_audience: Option<AudienceBracket>,
}

/// Where a marker sits on the map surface, normalised to `[0, 1]` with the
/// origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPlacement {
    /// Placement id reported back on click.
    pub marker_id: u32,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// Headline counts for the sidebar and analytics tab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    /// Placements open for booking.
    pub available: usize,
    /// Placements already booked.
    pub booked: usize,
    /// Sum of monthly prices across available placements.
    pub available_monthly_value: u64,
    /// Mean conversion score, `0.0` for an empty catalog.
    pub average_conversion_score: f64,
}

/// One row of the campaign performance panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPerformance {
    /// Campaign name.
    pub name: String,
    /// Impressions delivered so far.
    pub impressions: u64,
    /// Dollars spent so far.
    pub spend: f64,
    /// Return on spend as a multiple.
    pub roi: f64,
}

/// Impressions a campaign aims for.
pub const IMPRESSION_TARGET: u64 = 1_000_000;

impl CampaignPerformance {
    /// Progress toward [`IMPRESSION_TARGET`] as a percentage in `[0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn target_progress(&self) -> f64 {
        (self.impressions as f64 / IMPRESSION_TARGET as f64 * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_range_clamps_and_orders() {
        assert_eq!(PriceRange::new(4000, 0), PriceRange { min: 0, max: 4000 });
        assert_eq!(
            PriceRange::new(2000, 25_000),
            PriceRange {
                min: 2000,
                max: PRICE_CEILING
            }
        );
        let range = PriceRange::new(1000, 2000);
        assert!(range.contains(1000));
        assert!(range.contains(2000));
        assert!(!range.contains(999));
        assert!(!range.contains(2001));
    }

    #[test]
    fn price_range_snaps_to_slider_step() {
        assert_eq!(PriceRange::new(150, 4050), PriceRange { min: 200, max: 4100 });
        assert_eq!(PriceRange::new(149, 4049), PriceRange { min: 100, max: 4000 });
        assert_eq!(PriceRange::new(49, 9_990), PriceRange { min: 0, max: PRICE_CEILING });
        assert_eq!(
            PriceRange::new(u32::MAX, 0),
            PriceRange {
                min: PRICE_FLOOR,
                max: PRICE_CEILING
            }
        );
    }

    #[test]
    fn type_filter_matches_case_insensitively() {
        assert!(HoardingTypeFilter::All.matches(HoardingType::Static));
        assert!(HoardingTypeFilter::Led.matches(HoardingType::Led));
        assert!(HoardingTypeFilter::Digital.matches(HoardingType::Digital));
        assert!(!HoardingTypeFilter::Digital.matches(HoardingType::Static));
        assert_eq!("LED".parse::<HoardingTypeFilter>(), Ok(HoardingTypeFilter::Led));
        assert_eq!("all".parse::<HoardingTypeFilter>(), Ok(HoardingTypeFilter::All));
    }

    #[test]
    fn default_criteria_match_sidebar_defaults() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.price_range, PriceRange { min: 0, max: 10_000 });
        assert_eq!(criteria.hoarding_type, HoardingTypeFilter::All);
        assert!(criteria.show_traffic_heat);
        assert!(!criteria.available_only);
    }

    #[test]
    fn quick_action_tags() {
        assert_eq!(QuickAction::from_tag("Schedule"), QuickAction::Schedule);
        assert_eq!(QuickAction::from_tag(" bulk "), QuickAction::Bulk);
        assert_eq!(
            QuickAction::from_tag("export"),
            QuickAction::Other("export".to_string())
        );
        assert_eq!(QuickAction::Reports.tag(), "reports");
    }

    #[test]
    fn campaign_choices_parse_from_form_values() {
        assert_eq!("1month".parse::<CampaignDuration>(), Ok(CampaignDuration::OneMonth));
        assert_eq!("55+".parse::<AudienceBracket>(), Ok(AudienceBracket::Age55Plus));
        assert_eq!(AudienceBracket::Age18To25.to_string(), "18-25");
        assert!("2months".parse::<CampaignDuration>().is_err());
    }

    #[test]
    fn target_progress_is_capped() {
        let row = CampaignPerformance {
            name: "Big".to_string(),
            impressions: 2_500_000,
            spend: 1.0,
            roi: 1.0,
        };
        assert!((row.target_progress() - 100.0).abs() < f64::EPSILON);

        let row = CampaignPerformance {
            impressions: 850_000,
            ..row
        };
        assert!((row.target_progress() - 85.0).abs() < 1e-9);
    }
}
