//! Deal generation, revenue attribution and first-deal flag tests.

use salesgen_core::{
    config::RunConfig,
    deal::{mark_first_deals, recognised_revenue, sample_gross_revenue, Deal, MIN_UNIT_REVENUE},
    pipeline::{Dataset, SalesGenerator},
    rng::{RngBank, StageSlot},
    vocab::{AbcGroup, FunnelStage},
};
use std::collections::{HashMap, HashSet};

fn dataset(seed: u64) -> Dataset {
    let mut config = RunConfig::default_test().generator;
    config.seed = seed;
    SalesGenerator::new(config).generate().unwrap()
}

fn deal(deal_id: u32, client_id: u32, date_id: u32) -> Deal {
    Deal {
        deal_id,
        date_id,
        client_id,
        product_id: 1,
        revenue_byn: 100.0,
        quantity: 1,
        stage_name: FunnelStage::Closed,
        is_first_deal: false,
    }
}

#[test]
fn revenue_only_on_closed_deals() {
    let ds = dataset(42);
    assert_eq!(ds.deals.len(), 600);

    for d in &ds.deals {
        if d.stage_name.is_closed() {
            assert!(d.revenue_byn >= MIN_UNIT_REVENUE, "closed deal {} has revenue {}", d.deal_id, d.revenue_byn);
        } else {
            assert_eq!(d.revenue_byn, 0.0, "open deal {} carries revenue", d.deal_id);
        }
        assert!(d.quantity >= 1);
    }
}

#[test]
fn lead_stage_zeroes_a_positive_gross() {
    let mut rng = RngBank::new(3).for_stage(StageSlot::Deals);
    for _ in 0..200 {
        let gross = sample_gross_revenue(AbcGroup::C, &mut rng);
        assert!(gross.unit_revenue >= MIN_UNIT_REVENUE);
        assert!(gross.gross >= gross.unit_revenue);
        assert!(gross.gross > 0.0);
        assert_eq!(recognised_revenue(gross.gross, FunnelStage::Lead), 0.0);
        assert_eq!(recognised_revenue(gross.gross, FunnelStage::Closed), gross.gross);
    }
}

#[test]
fn group_c_unit_revenue_centres_on_base_price() {
    let mut rng = RngBank::new(5).for_stage(StageSlot::Deals);
    let n = 5_000;
    let mean = (0..n)
        .map(|_| sample_gross_revenue(AbcGroup::C, &mut rng).unit_revenue)
        .sum::<f64>()
        / n as f64;
    assert!((mean - 60.0).abs() < 3.0, "mean unit revenue {mean:.2} far from 60");
}

#[test]
fn stage_shares_roughly_match_weights() {
    let mut config = RunConfig::default_test().generator;
    config.deals = 20_000;
    let ds = SalesGenerator::new(config).generate().unwrap();

    let leads = ds.deals.iter().filter(|d| d.stage_name == FunnelStage::Lead).count();
    let closed = ds.deals.iter().filter(|d| d.stage_name.is_closed()).count();
    let lead_share = leads as f64 / ds.deals.len() as f64;
    let closed_share = closed as f64 / ds.deals.len() as f64;
    assert!((lead_share - 0.40).abs() < 0.02, "lead share {lead_share}");
    assert!((closed_share - 0.10).abs() < 0.02, "closed share {closed_share}");
}

#[test]
fn exactly_one_first_deal_per_client_at_min_date() {
    let ds = dataset(7);

    let mut by_client: HashMap<u32, Vec<&Deal>> = HashMap::new();
    for d in &ds.deals {
        by_client.entry(d.client_id).or_default().push(d);
    }

    for (client_id, deals) in &by_client {
        let firsts: Vec<_> = deals.iter().filter(|d| d.is_first_deal).collect();
        assert_eq!(firsts.len(), 1, "client {client_id} has {} first deals", firsts.len());
        let min_date = deals.iter().map(|d| d.date_id).min().unwrap();
        assert_eq!(firsts[0].date_id, min_date, "client {client_id} first deal not earliest");
    }

    let flagged = ds.deals.iter().filter(|d| d.is_first_deal).count();
    assert_eq!(flagged, by_client.len());
}

#[test]
fn first_deal_ties_keep_generation_order() {
    let mut deals = vec![
        deal(1, 2, 20240105),
        deal(2, 1, 20240110),
        deal(3, 2, 20240105),
        deal(4, 1, 20240101),
    ];
    mark_first_deals(&mut deals);

    let order: Vec<u32> = deals.iter().map(|d| d.deal_id).collect();
    assert_eq!(order, vec![4, 2, 1, 3], "sorted by client then date, stable on ties");

    let firsts: Vec<u32> = deals.iter().filter(|d| d.is_first_deal).map(|d| d.deal_id).collect();
    assert_eq!(firsts, vec![4, 1]);
}

#[test]
fn first_deal_pass_changes_nothing_else() {
    let ds = dataset(21);
    let mut shuffled: Vec<Deal> = ds.deals.iter().rev().cloned().collect();
    for d in &mut shuffled {
        d.is_first_deal = false;
    }
    let before: HashMap<u32, Deal> = shuffled.iter().map(|d| (d.deal_id, d.clone())).collect();

    mark_first_deals(&mut shuffled);

    for d in &shuffled {
        let mut original = before[&d.deal_id].clone();
        original.is_first_deal = d.is_first_deal;
        assert_eq!(&original, d);
    }
}

#[test]
fn deals_resolve_to_dimension_rows() {
    let ds = dataset(99);

    let dates: HashSet<u32> = ds.calendar.iter().map(|c| c.date_id).collect();
    let clients: HashSet<u32> = ds.clients.iter().map(|c| c.client_id).collect();
    let products: HashSet<u32> = ds.products.iter().map(|p| p.product_id).collect();

    for d in &ds.deals {
        assert!(dates.contains(&d.date_id), "deal {} has unknown date {}", d.deal_id, d.date_id);
        assert!(clients.contains(&d.client_id), "deal {} has unknown client", d.deal_id);
        assert!(products.contains(&d.product_id), "deal {} has unknown product", d.deal_id);
    }

    let ids: HashSet<u32> = ds.deals.iter().map(|d| d.deal_id).collect();
    assert_eq!(ids.len(), ds.deals.len(), "deal_id must be unique");
    assert_eq!(ids.iter().max().copied(), Some(600));
}

#[test]
fn zero_deals_is_allowed() {
    let mut config = RunConfig::default_test().generator;
    config.deals = 0;
    let ds = SalesGenerator::new(config).generate().unwrap();
    assert!(ds.deals.is_empty());
    assert!(ds.client_metrics.iter().all(|m| m.ltv_byn == 0.0));
}
