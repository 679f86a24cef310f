//! Monthly marketing costs and regional revenue plans.
//! Independent of deals and client metrics.

use crate::{
    calendar::{date_id, month_starts},
    rng::StageRng,
    types::{round2, DateId},
    vocab::{CostCategory, Region},
};
use chrono::NaiveDate;
use serde::Serialize;

pub const COSTS_PER_MONTH: usize = 3;
pub const COST_RANGE_BYN: (f64, f64) = (5_000.0, 20_000.0);
pub const PLAN_RANGE_BYN: (f64, f64) = (25_000.0, 55_000.0);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketingCost {
    pub cost_id:        u32,
    pub date_id:        DateId,
    pub total_cost_byn: f64,
    pub cost_category:  CostCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenuePlan {
    pub plan_id:          u32,
    pub date_id:          DateId,
    pub region:           Region,
    pub plan_revenue_byn: f64,
}

#[derive(Debug, Clone, Default)]
pub struct AuxiliaryTables {
    pub costs: Vec<MarketingCost>,
    pub plans: Vec<RevenuePlan>,
}

/// For each month start in range: three cost rows, then one plan row per
/// region. Ids run sequentially across the whole range.
pub fn generate_auxiliary(start: NaiveDate, end: NaiveDate, rng: &mut StageRng) -> AuxiliaryTables {
    let mut out = AuxiliaryTables::default();
    let months = month_starts(start, end);

    for month in &months {
        let month_id = date_id(*month);

        for _ in 0..COSTS_PER_MONTH {
            let total_cost_byn = round2(rng.uniform(COST_RANGE_BYN.0, COST_RANGE_BYN.1));
            let cost_category = *rng.choose(&CostCategory::ALL);
            out.costs.push(MarketingCost {
                cost_id: out.costs.len() as u32 + 1,
                date_id: month_id,
                total_cost_byn,
                cost_category,
            });
        }

        for region in Region::ALL {
            out.plans.push(RevenuePlan {
                plan_id: out.plans.len() as u32 + 1,
                date_id: month_id,
                region,
                plan_revenue_byn: round2(rng.uniform(PLAN_RANGE_BYN.0, PLAN_RANGE_BYN.1)),
            });
        }
    }

    log::info!(
        "{}: {} months -> {} cost rows, {} plan rows",
        rng.name,
        months.len(),
        out.costs.len(),
        out.plans.len()
    );
    out
}
