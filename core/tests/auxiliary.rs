//! Marketing cost and revenue plan tests.

use chrono::NaiveDate;
use salesgen_core::{
    auxiliary::{generate_auxiliary, COSTS_PER_MONTH, COST_RANGE_BYN, PLAN_RANGE_BYN},
    calendar::{date_id, month_starts},
    rng::{RngBank, StageSlot},
    vocab::Region,
};
use std::collections::{HashMap, HashSet};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn three_costs_and_one_plan_per_region_each_month() {
    let (start, end) = (ymd(2024, 1, 1), ymd(2025, 12, 31));
    let mut rng = RngBank::new(42).for_stage(StageSlot::Auxiliary);
    let aux = generate_auxiliary(start, end, &mut rng);

    let months: Vec<u32> = month_starts(start, end).into_iter().map(date_id).collect();
    assert_eq!(months.len(), 24);
    assert_eq!(aux.costs.len(), 24 * COSTS_PER_MONTH);
    assert_eq!(aux.plans.len(), 24 * Region::ALL.len());

    let mut costs_per_month: HashMap<u32, usize> = HashMap::new();
    for c in &aux.costs {
        *costs_per_month.entry(c.date_id).or_default() += 1;
    }
    for m in &months {
        assert_eq!(costs_per_month.get(m), Some(&COSTS_PER_MONTH), "month {m}");

        let regions: HashSet<Region> = aux
            .plans
            .iter()
            .filter(|p| p.date_id == *m)
            .map(|p| p.region)
            .collect();
        assert_eq!(regions.len(), Region::ALL.len(), "month {m} missing a region plan");
    }
}

#[test]
fn amounts_stay_in_range_and_ids_are_sequential() {
    let mut rng = RngBank::new(8).for_stage(StageSlot::Auxiliary);
    let aux = generate_auxiliary(ymd(2024, 1, 1), ymd(2024, 12, 31), &mut rng);

    for (i, c) in aux.costs.iter().enumerate() {
        assert_eq!(c.cost_id, i as u32 + 1);
        assert!(c.total_cost_byn >= COST_RANGE_BYN.0 && c.total_cost_byn <= COST_RANGE_BYN.1);
        assert_eq!(c.date_id % 100, 1, "costs are dated on the month start");
    }
    for (i, p) in aux.plans.iter().enumerate() {
        assert_eq!(p.plan_id, i as u32 + 1);
        assert!(p.plan_revenue_byn >= PLAN_RANGE_BYN.0 && p.plan_revenue_byn <= PLAN_RANGE_BYN.1);
    }
}

#[test]
fn range_inside_one_month_yields_nothing() {
    let mut rng = RngBank::new(1).for_stage(StageSlot::Auxiliary);
    let aux = generate_auxiliary(ymd(2024, 1, 2), ymd(2024, 1, 31), &mut rng);
    assert!(aux.costs.is_empty());
    assert!(aux.plans.is_empty());
}
