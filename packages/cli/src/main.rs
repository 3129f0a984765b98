#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal dashboard for browsing and booking advertising hoardings.
//!
//! Running `adspace` with no subcommand opens the interactive dashboard.
//! The subcommands print one view of the catalog and exit, which is
//! handy for scripting.
//!
//! Uses `indicatif-log-bridge` (via [`adspace_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and the waiting spinner never fight for the terminal.

mod interactive;
mod render;
mod toast;

use std::path::PathBuf;
use std::time::Duration;

use adspace_catalog::Catalog;
use adspace_catalog_models::PlacementRecord;
use adspace_dashboard::notify::LogNotifier;
use adspace_dashboard::search;
use adspace_dashboard::session::{DashboardSession, SessionConfig};
use adspace_dashboard_models::{
    CampaignPerformance, HoardingTypeFilter, MarkerPlacement, PRICE_CEILING, PRICE_FLOOR,
    QuickStats,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "adspace", about = "Hoarding map dashboard")]
struct Cli {
    /// Catalog TOML file (overrides `ADSPACE_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Delay before AI recommendation results, in milliseconds (overrides
    /// `ADSPACE_AI_DELAY_MS`)
    #[arg(long, global = true)]
    ai_delay_ms: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List placements passing the given filters
    List {
        /// Minimum monthly price
        #[arg(long)]
        min_price: Option<u32>,
        /// Maximum monthly price
        #[arg(long)]
        max_price: Option<u32>,
        /// Hoarding type (all, digital, static, led)
        #[arg(long = "type", value_parser = parse_hoarding_type)]
        hoarding_type: Option<HoardingTypeFilter>,
        /// Hide booked placements
        #[arg(long)]
        available_only: bool,
        /// Only placements whose name or location contains this text
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show quick stats, top locations, and campaign performance
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show where each placement sits on the map surface
    Markers {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_hoarding_type(s: &str) -> Result<HoardingTypeFilter, String> {
    s.trim().parse().map_err(|_| {
        format!("invalid type '{s}' (expected one of: all, digital, static, led)")
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    stats: QuickStats,
    top_locations: Vec<&'a PlacementRecord>,
    campaigns: Vec<CampaignPerformance>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = adspace_cli_utils::init_logger();
    let cli = Cli::parse();

    let mut config = SessionConfig::from_env();
    config.catalog_path = cli.catalog;
    if let Some(ms) = cli.ai_delay_ms {
        config.ai_delay = Duration::from_millis(ms);
    }

    let Some(command) = cli.command else {
        return interactive::run(config, &multi);
    };

    let mut session: DashboardSession<Catalog, LogNotifier> =
        DashboardSession::open(config, LogNotifier)?;

    match command {
        Commands::List {
            min_price,
            max_price,
            hoarding_type,
            available_only,
            search: query,
            json,
        } => {
            session.set_price_range(
                min_price.unwrap_or(PRICE_FLOOR),
                max_price.unwrap_or(PRICE_CEILING),
            );
            if let Some(hoarding_type) = hoarding_type {
                session.set_hoarding_type(hoarding_type);
            }
            session.set_available_only(available_only);

            // --search narrows the filtered list, unlike the dashboard's search box.
            let query = query.as_deref().unwrap_or_default();
            let records = search::search(session.visible(), query);
            log::info!("{} placement(s) match", records.len());

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", render::placement_list(&records, None));
            }
        }
        Commands::Stats { json } => {
            let report = StatsReport {
                stats: session.stats(),
                top_locations: session.top_locations(3),
                campaigns: session.campaign_performance(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!(
                    "{}",
                    render::stats_panel(&report.stats, &report.top_locations, &report.campaigns)
                );
            }
        }
        Commands::Markers { json } => {
            let markers: Vec<MarkerPlacement> = session.markers();

            if json {
                println!("{}", serde_json::to_string_pretty(&markers)?);
            } else {
                let visible: Vec<&PlacementRecord> = session.visible().collect();
                print!(
                    "{}",
                    render::map_panel(&markers, &visible, session.criteria().show_traffic_heat)
                );
                for marker in &markers {
                    println!(
                        "  #{} at ({:.3}, {:.3})",
                        marker.marker_id, marker.x, marker.y
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_flag_parses_case_insensitively() {
        let cli = Cli::try_parse_from(["adspace", "list", "--type", "LED", "--available-only"])
            .unwrap();
        match cli.command {
            Some(Commands::List {
                hoarding_type,
                available_only,
                ..
            }) => {
                assert_eq!(hoarding_type, Some(HoardingTypeFilter::Led));
                assert!(available_only);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(Cli::try_parse_from(["adspace", "list", "--type", "neon"]).is_err());
        let err = parse_hoarding_type("neon").unwrap_err();
        assert!(err.contains("neon"), "{err}");
    }

    #[test]
    fn global_flags_apply_without_subcommand() {
        let cli = Cli::try_parse_from(["adspace", "--ai-delay-ms", "250"]).unwrap();
        assert_eq!(cli.ai_delay_ms, Some(250));
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
    }
}
