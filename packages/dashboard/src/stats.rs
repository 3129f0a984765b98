//! Derived numbers for the stats sidebar and analytics tab.

use std::cmp::Ordering;

use adspace_catalog_models::PlacementRecord;
use adspace_dashboard_models::{CampaignPerformance, CampaignSubmission, QuickStats};

/// Counts and averages over `records`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quick_stats(records: &[PlacementRecord]) -> QuickStats {
    let available: Vec<&PlacementRecord> = records.iter().filter(|r| r.is_available()).collect();

    let average_conversion_score = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.conversion_score).sum::<f64>() / records.len() as f64
    };

    QuickStats {
        available: available.len(),
        booked: records.len() - available.len(),
        available_monthly_value: available.iter().map(|r| u64::from(r.monthly_price)).sum(),
        average_conversion_score,
    }
}

/// Best-performing first: conversion score, then daily traffic, then id.
fn performance_order(a: &PlacementRecord, b: &PlacementRecord) -> Ordering {
    b.conversion_score
        .total_cmp(&a.conversion_score)
        .then_with(|| b.daily_traffic.cmp(&a.daily_traffic))
        .then_with(|| a.id.cmp(&b.id))
}

/// The `limit` best-performing placements.
pub fn top_locations<'a>(
    records: impl IntoIterator<Item = &'a PlacementRecord>,
    limit: usize,
) -> Vec<&'a PlacementRecord> {
    let mut ranked: Vec<&PlacementRecord> = records.into_iter().collect();
    ranked.sort_by(|a, b| performance_order(a, b));
    ranked.truncate(limit);
    ranked
}

/// The `limit` best-performing placements that can still be booked.
pub fn recommend<'a>(
    records: impl IntoIterator<Item = &'a PlacementRecord>,
    limit: usize,
) -> Vec<&'a PlacementRecord> {
    top_locations(records.into_iter().filter(|r| r.is_available()), limit)
}

/// Example campaigns shown on the analytics tab.
#[must_use]
pub fn sample_campaigns() -> Vec<CampaignPerformance> {
    vec![
        CampaignPerformance {
            name: "Summer Sale 2024".to_string(),
            impressions: 850_000,
            spend: 12_500.0,
            roi: 3.2,
        },
        CampaignPerformance {
            name: "Brand Awareness Q1".to_string(),
            impressions: 920_000,
            spend: 15_600.0,
            roi: 2.8,
        },
        CampaignPerformance {
            name: "Product Launch".to_string(),
            impressions: 680_000,
            spend: 9_800.0,
            roi: 4.1,
        },
    ]
}

/// Sample campaigns followed by the ones created this session, which have
/// not delivered anything yet.
#[must_use]
pub fn campaign_performance(created: &[CampaignSubmission]) -> Vec<CampaignPerformance> {
    let mut rows = sample_campaigns();
    rows.extend(created.iter().map(|c| CampaignPerformance {
        name: c.name.clone(),
        impressions: 0,
        spend: 0.0,
        roi: 0.0,
    }));
    rows
}
