//! Deals fact table and the first-deal post-pass.

use crate::{
    calendar::CalendarEntry,
    dimension::{Client, Product},
    rng::StageRng,
    types::{round2, ClientId, DateId, DealId, ProductId},
    vocab::{AbcGroup, FunnelStage},
    weighted::WeightedChoice,
};
use serde::Serialize;

/// Unit revenue never drops below this, whatever the normal draw says.
pub const MIN_UNIT_REVENUE: f64 = 10.0;
/// Standard deviation of the unit revenue as a share of the base price.
pub const PRICE_SPREAD: f64 = 0.3;
pub const QUANTITY_LAMBDA: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deal {
    pub deal_id:       DealId,
    pub date_id:       DateId,
    pub client_id:     ClientId,
    pub product_id:    ProductId,
    pub revenue_byn:   f64,
    pub quantity:      u32,
    pub stage_name:    FunnelStage,
    pub is_first_deal: bool,
}

/// Gross amount and quantity for one deal before the stage gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrossRevenue {
    pub unit_revenue: f64,
    pub quantity:     u32,
    pub gross:        f64,
}

/// Sample unit revenue around the group's base price and a quantity of
/// 1 + Poisson(1). Takes three or more draws: two normal, then Poisson.
pub fn sample_gross_revenue(group: AbcGroup, rng: &mut StageRng) -> GrossRevenue {
    let base = group.base_price();
    let unit_revenue = round2(rng.normal(base, base * PRICE_SPREAD)).max(MIN_UNIT_REVENUE);
    let quantity = 1 + rng.poisson(QUANTITY_LAMBDA) as u32;
    GrossRevenue {
        unit_revenue,
        quantity,
        gross: round2(unit_revenue * quantity as f64),
    }
}

/// Revenue is recognised only on closed deals.
pub fn recognised_revenue(gross: f64, stage: FunnelStage) -> f64 {
    if stage.is_closed() {
        gross
    } else {
        0.0
    }
}

/// Generate `count` deals against the given dimensions.
///
/// Per deal the draw order is fixed: product, revenue, quantity, stage,
/// date, client. Dates and clients are drawn with replacement.
/// `is_first_deal` is left false; run [`mark_first_deals`] afterwards.
pub fn generate_deals(
    count: u32,
    calendar: &[CalendarEntry],
    clients: &[Client],
    products: &[Product],
    rng: &mut StageRng,
) -> Vec<Deal> {
    let stages = WeightedChoice::new(&FunnelStage::ALL, &FunnelStage::WEIGHTS);
    let mut deals = Vec::with_capacity(count as usize);

    for deal_id in 1..=count {
        let product = rng.choose(products);
        let revenue = sample_gross_revenue(product.abc_group, rng);
        let stage = stages.sample(rng);
        let date_id = rng.choose(calendar).date_id;
        let client_id = rng.choose(clients).client_id;

        deals.push(Deal {
            deal_id,
            date_id,
            client_id,
            product_id: product.product_id,
            revenue_byn: recognised_revenue(revenue.gross, stage),
            quantity: revenue.quantity,
            stage_name: stage,
            is_first_deal: false,
        });
    }

    let closed = deals.iter().filter(|d| d.stage_name.is_closed()).count();
    log::info!("{}: generated {} deals ({closed} closed)", rng.name, deals.len());
    deals
}

/// Stable-sort deals by (client_id, date_id) and flag the first deal of
/// each client. Ties on date keep generation order. No other field changes;
/// the sorted order is kept for export.
pub fn mark_first_deals(deals: &mut [Deal]) {
    deals.sort_by_key(|d| (d.client_id, d.date_id));

    let mut previous: Option<ClientId> = None;
    for deal in deals.iter_mut() {
        deal.is_first_deal = previous != Some(deal.client_id);
        previous = Some(deal.client_id);
    }

    let flagged = deals.iter().filter(|d| d.is_first_deal).count();
    log::info!("first deals: flagged {flagged} clients");
}
