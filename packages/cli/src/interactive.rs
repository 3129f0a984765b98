//! Interactive terminal dashboard.
//!
//! Renders the active tab, then offers a `dialoguer` menu of the actions
//! that make sense in the current state. Deferred work (the AI
//! recommendation results) is polled at the top of every iteration and
//! again once an explicit wait behind the spinner ends, so results that
//! come due while a prompt is open are shown after the next choice.

use std::time::Instant;

use adspace_catalog::Catalog;
use adspace_cli_utils::{MultiProgress, PendingSpinner};
use adspace_dashboard::DashboardError;
use adspace_dashboard::session::{DashboardSession, SessionConfig};
use adspace_dashboard_models::{
    AudienceBracket, CampaignDraft, CampaignDuration, HoardingTypeFilter, QuickAction, Tab,
};
use dialoguer::{Input, Select};

use crate::render;
use crate::toast::TerminalNotifier;

type Session = DashboardSession<Catalog, TerminalNotifier>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    SelectPlacement,
    DismissDetails,
    Book,
    PriceRange,
    HoardingType,
    ToggleHeat,
    ToggleAvailableOnly,
    ResetFilters,
    Search,
    Recenter,
    ArPreview,
    CreateCampaign,
    QuickAction,
    SwitchTab,
    ViewCampaigns,
    AiRecommendations,
    WaitForResults,
    Quit,
}

impl MenuItem {
    fn label(self, session: &Session) -> String {
        match self {
            Self::SelectPlacement => "Select a placement".to_string(),
            Self::DismissDetails => "Close details".to_string(),
            Self::Book => session.selected().map_or_else(
                || "Book Now".to_string(),
                |r| render::booking_button_label(r).to_string(),
            ),
            Self::PriceRange => "Set price range".to_string(),
            Self::HoardingType => "Set hoarding type".to_string(),
            Self::ToggleHeat => format!(
                "Turn traffic heatmap {}",
                if session.criteria().show_traffic_heat {
                    "off"
                } else {
                    "on"
                }
            ),
            Self::ToggleAvailableOnly => {
                let label = if session.criteria().available_only {
                    "Show booked placements"
                } else {
                    "Show available only"
                };
                label.to_string()
            }
            Self::ResetFilters => "Reset filters".to_string(),
            Self::Search => "Search locations".to_string(),
            Self::Recenter => "Recenter map".to_string(),
            Self::ArPreview => "AR preview".to_string(),
            Self::CreateCampaign => "Create Campaign".to_string(),
            Self::QuickAction => "Quick action".to_string(),
            Self::SwitchTab => "Switch tab".to_string(),
            Self::ViewCampaigns => "View Campaigns".to_string(),
            Self::AiRecommendations => "AI Recommendations".to_string(),
            Self::WaitForResults => "Wait for AI results".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Actions offered in the current state, in menu order.
fn menu(session: &Session) -> Vec<MenuItem> {
    let mut items = Vec::new();

    match session.active_tab() {
        Tab::Map => {
            items.push(MenuItem::SelectPlacement);
            if session.selected().is_some() {
                items.extend([MenuItem::Book, MenuItem::DismissDetails]);
            }
            items.extend([
                MenuItem::PriceRange,
                MenuItem::HoardingType,
                MenuItem::ToggleHeat,
                MenuItem::ToggleAvailableOnly,
                MenuItem::ResetFilters,
                MenuItem::Search,
                MenuItem::Recenter,
                MenuItem::ArPreview,
            ]);
        }
        Tab::Analytics => {}
        Tab::Campaigns => items.extend([MenuItem::CreateCampaign, MenuItem::QuickAction]),
    }

    items.extend([
        MenuItem::SwitchTab,
        MenuItem::ViewCampaigns,
        MenuItem::AiRecommendations,
    ]);
    if session.next_deadline().is_some() {
        items.push(MenuItem::WaitForResults);
    }
    items.push(MenuItem::Quit);
    items
}

fn screen(session: &Session) -> String {
    let mut out = render::header(session.active_tab(), session.ai_status());
    out.push('\n');

    match session.active_tab() {
        Tab::Map => {
            let visible: Vec<_> = session.visible().collect();
            out.push_str(&render::filters_panel(session.criteria()));
            out.push('\n');
            out.push_str(&render::map_panel(
                &session.markers(),
                &visible,
                session.criteria().show_traffic_heat,
            ));
            out.push('\n');
            out.push_str(&render::placement_list(
                &visible,
                session.selected().map(|r| r.id),
            ));
            if let Some(record) = session.selected() {
                out.push('\n');
                out.push_str(&render::detail_card(record));
            }
        }
        Tab::Analytics => out.push_str(&render::stats_panel(
            &session.stats(),
            &session.top_locations(3),
            &session.campaign_performance(),
        )),
        Tab::Campaigns => out.push_str(&render::campaigns_panel(session.campaigns())),
    }
    out
}

/// Runs the interactive dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or terminal input
/// fails.
#[allow(clippy::too_many_lines)]
pub fn run(
    config: SessionConfig,
    multi: &MultiProgress,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = DashboardSession::open(config, TerminalNotifier::new(multi.clone()))?;

    loop {
        session.poll(Instant::now());
        println!();
        print!("{}", screen(&session));

        let items = menu(&session);
        let labels: Vec<String> = items.iter().map(|i| i.label(&session)).collect();
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match items[idx] {
            MenuItem::SelectPlacement => select_placement(&mut session)?,
            MenuItem::DismissDetails => session.clear_selection(),
            MenuItem::Book => {
                if let Err(e) = session.book() {
                    log::warn!("{e}");
                }
            }
            MenuItem::PriceRange => {
                let current = session.criteria().price_range;
                let min: u32 = Input::new()
                    .with_prompt("Minimum monthly price")
                    .default(current.min)
                    .interact_text()?;
                let max: u32 = Input::new()
                    .with_prompt("Maximum monthly price")
                    .default(current.max)
                    .interact_text()?;
                session.set_price_range(min, max);
            }
            MenuItem::HoardingType => {
                let choices = HoardingTypeFilter::all();
                let labels: Vec<&str> = choices.iter().map(|t| t.label()).collect();
                let current = session.criteria().hoarding_type;
                let idx = Select::new()
                    .with_prompt("Hoarding type")
                    .items(&labels)
                    .default(choices.iter().position(|t| *t == current).unwrap_or(0))
                    .interact()?;
                session.set_hoarding_type(choices[idx]);
            }
            MenuItem::ToggleHeat => {
                let show = !session.criteria().show_traffic_heat;
                session.set_show_traffic_heat(show);
            }
            MenuItem::ToggleAvailableOnly => {
                let available_only = !session.criteria().available_only;
                session.set_available_only(available_only);
            }
            MenuItem::ResetFilters => session.reset_filters(),
            MenuItem::Search => {
                let query: String = Input::new()
                    .with_prompt("Search locations")
                    .allow_empty(true)
                    .interact_text()?;
                let selected = session.selected().map(|r| r.id);
                print!(
                    "{}",
                    render::placement_list(&session.search(&query), selected)
                );
            }
            MenuItem::Recenter => session.recenter(),
            MenuItem::ArPreview => session.ar_preview(),
            MenuItem::CreateCampaign => campaign_dialog(&mut session)?,
            MenuItem::QuickAction => quick_action(&mut session)?,
            MenuItem::SwitchTab => {
                let tabs = Tab::all();
                let labels: Vec<&str> = tabs.iter().map(|t| t.label()).collect();
                let idx = Select::new()
                    .with_prompt("Tab")
                    .items(&labels)
                    .default(
                        tabs.iter()
                            .position(|t| *t == session.active_tab())
                            .unwrap_or(0),
                    )
                    .interact()?;
                session.set_tab(tabs[idx]);
            }
            MenuItem::ViewCampaigns => session.view_campaigns(),
            MenuItem::AiRecommendations => {
                let handle = session.request_ai_recommendations(Instant::now());
                log::debug!("scheduled {handle}");
            }
            MenuItem::WaitForResults => {
                wait_for_results(&mut session, multi);
            }
            MenuItem::Quit => break,
        }
    }

    log::debug!("{} toast(s) shown this session", session.notifier().shown());
    let cancelled = session.shutdown();
    if cancelled > 0 {
        println!("Discarded {cancelled} pending AI request(s)");
    }
    Ok(())
}

/// Blocks behind a spinner until the next deferred task is due, then runs
/// it. Returns how many tasks ran.
fn wait_for_results(session: &mut Session, multi: &MultiProgress) -> usize {
    let Some(deadline) = session.next_deadline() else {
        return 0;
    };
    PendingSpinner::start(multi, "Finding recommended placements").wait_until(deadline);
    session.poll(Instant::now())
}

fn select_placement(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let ids: Vec<u32> = session.visible().map(|r| r.id).collect();
    if ids.is_empty() {
        println!("No placements match the current filters");
        return Ok(());
    }

    let labels: Vec<String> = session
        .visible()
        .map(|r| format!("{} - {}", r.name, r.location))
        .collect();
    let idx = Select::new()
        .with_prompt("Placement")
        .items(&labels)
        .default(0)
        .interact()?;

    session.select(ids[idx])?;
    Ok(())
}

fn quick_action(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let known = QuickAction::known();
    let mut labels: Vec<&str> = known.iter().map(QuickAction::label).collect();
    labels.push("Other...");

    let idx = Select::new()
        .with_prompt("Quick action")
        .items(&labels)
        .default(0)
        .interact()?;

    let action = if let Some(action) = known.get(idx) {
        action.clone()
    } else {
        let tag: String = Input::new().with_prompt("Action tag").interact_text()?;
        QuickAction::from_tag(&tag)
    };
    session.quick_action(&action);
    Ok(())
}

/// Runs the campaign creation dialog. An invalid draft keeps the dialog
/// open so the user can fix it.
fn campaign_dialog(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    session.open_campaign_dialog();

    loop {
        edit_draft(session.campaign_draft_mut())?;

        let choice = Select::new()
            .with_prompt("Campaign")
            .items(&["Create Campaign", "Edit", "Cancel"])
            .default(0)
            .interact()?;

        match choice {
            0 => match session.submit_campaign() {
                Ok(_) => return Ok(()),
                Err(DashboardError::Campaign(e)) => log::debug!("draft rejected: {e}"),
                Err(e) => return Err(e.into()),
            },
            1 => {}
            _ => {
                session.cancel_campaign_dialog();
                return Ok(());
            }
        }
    }
}

fn edit_draft(draft: &mut CampaignDraft) -> Result<(), Box<dyn std::error::Error>> {
    draft.name = Input::new()
        .with_prompt("Campaign name")
        .with_initial_text(draft.name.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.description = Input::new()
        .with_prompt("Description")
        .with_initial_text(draft.description.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.budget = Input::new()
        .with_prompt("Budget ($)")
        .with_initial_text(draft.budget.clone())
        .allow_empty(true)
        .interact_text()?;

    draft.duration = pick_optional(
        "Duration",
        CampaignDuration::all(),
        draft.duration,
        |d| d.label().to_string(),
    )?;
    draft.target_audience = pick_optional(
        "Target audience",
        AudienceBracket::all(),
        draft.target_audience,
        ToString::to_string,
    )?;
    Ok(())
}

/// Select prompt with a leading "Not set" entry.
fn pick_optional<T: Copy + PartialEq>(
    prompt: &str,
    choices: &[T],
    current: Option<T>,
    label: impl Fn(&T) -> String,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let mut labels = vec!["Not set".to_string()];
    labels.extend(choices.iter().map(label));

    let default = current
        .and_then(|c| choices.iter().position(|x| *x == c))
        .map_or(0, |i| i + 1);

    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(idx.checked_sub(1).map(|i| choices[i]))
}
