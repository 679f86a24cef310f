//! End-of-run figures printed by the runner.

use crate::{pipeline::Dataset, types::round2};

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub calendar_days:      usize,
    pub clients:            usize,
    pub products:           usize,
    pub deals:              usize,
    pub closed_deals:       usize,
    /// Closed deals / all deals, in percent.
    pub conversion_pct:     f64,
    pub closed_revenue:     f64,
    pub clients_with_deals: usize,
    pub total_ltv:          f64,
    pub cost_rows:          usize,
    pub plan_rows:          usize,
    pub total_costs:        f64,
    pub total_plan:         f64,
}

impl RunSummary {
    pub fn from_dataset(ds: &Dataset) -> Self {
        let closed_deals = ds.deals.iter().filter(|d| d.stage_name.is_closed()).count();
        let conversion_pct = if ds.deals.is_empty() {
            0.0
        } else {
            round2(closed_deals as f64 * 100.0 / ds.deals.len() as f64)
        };

        Self {
            calendar_days: ds.calendar.len(),
            clients: ds.clients.len(),
            products: ds.products.len(),
            deals: ds.deals.len(),
            closed_deals,
            conversion_pct,
            closed_revenue: round2(ds.deals.iter().map(|d| d.revenue_byn).sum()),
            clients_with_deals: ds.deals.iter().filter(|d| d.is_first_deal).count(),
            total_ltv: round2(ds.client_metrics.iter().map(|m| m.ltv_byn).sum()),
            cost_rows: ds.costs.len(),
            plan_rows: ds.plans.len(),
            total_costs: round2(ds.costs.iter().map(|c| c.total_cost_byn).sum()),
            total_plan: round2(ds.plans.iter().map(|p| p.plan_revenue_byn).sum()),
        }
    }
}
