//! Per-client metrics mart: purchase frequency, lifetime, LTV, RFM label.

use crate::{
    deal::Deal,
    dimension::Client,
    rng::StageRng,
    types::{round2, ClientId},
    vocab::RfmSegment,
    weighted::WeightedChoice,
};
use serde::Serialize;
use std::collections::HashMap;

pub const MEAN_PURCHASE_FREQUENCY: f64 = 1.5;
pub const MAX_PURCHASE_FREQUENCY: f64 = 12.0;
pub const MIN_LIFETIME_MONTHS: i64 = 6;
pub const MAX_LIFETIME_MONTHS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientMetric {
    pub client_id:                 ClientId,
    pub avg_purchase_frequency:    f64,
    pub predicted_lifetime_months: u32,
    pub ltv_byn:                   f64,
    pub rfm_segment:               RfmSegment,
}

/// Mean revenue of the client's revenue-bearing deals; 0 when there are none.
pub fn average_check(revenues: &[f64]) -> f64 {
    let paid: Vec<f64> = revenues.iter().copied().filter(|r| *r > 0.0).collect();
    if paid.is_empty() {
        return 0.0;
    }
    paid.iter().sum::<f64>() / paid.len() as f64
}

/// avg_check × frequency × lifetime in years, to kopecks.
/// Anything non-finite collapses to 0.
pub fn lifetime_value(avg_check: f64, frequency: f64, lifetime_months: u32) -> f64 {
    let ltv = avg_check * frequency * (lifetime_months as f64 / 12.0);
    if ltv.is_finite() {
        round2(ltv)
    } else {
        0.0
    }
}

/// One row per client in id order, including clients with no deals.
/// Draw order per client: frequency, lifetime, segment.
pub fn compute_client_metrics(
    clients: &[Client],
    deals: &[Deal],
    rng: &mut StageRng,
) -> Vec<ClientMetric> {
    let segments = WeightedChoice::new(&RfmSegment::ALL, &RfmSegment::WEIGHTS);

    let mut revenue_by_client: HashMap<ClientId, Vec<f64>> = HashMap::new();
    for deal in deals {
        revenue_by_client
            .entry(deal.client_id)
            .or_default()
            .push(deal.revenue_byn);
    }

    let metrics: Vec<ClientMetric> = clients
        .iter()
        .map(|client| {
            let frequency = round2(rng.exponential(MEAN_PURCHASE_FREQUENCY))
                .min(MAX_PURCHASE_FREQUENCY);
            let lifetime =
                rng.uniform_inclusive(MIN_LIFETIME_MONTHS, MAX_LIFETIME_MONTHS) as u32;

            let avg_check = revenue_by_client
                .get(&client.client_id)
                .map(|revenues| average_check(revenues))
                .unwrap_or(0.0);

            ClientMetric {
                client_id: client.client_id,
                avg_purchase_frequency: frequency,
                predicted_lifetime_months: lifetime,
                ltv_byn: lifetime_value(avg_check, frequency, lifetime),
                rfm_segment: segments.sample(rng),
            }
        })
        .collect();

    let zero_ltv = metrics.iter().filter(|m| m.ltv_byn == 0.0).count();
    log::info!(
        "{}: computed metrics for {} clients ({zero_ltv} with zero LTV)",
        rng.name,
        metrics.len()
    );
    metrics
}
