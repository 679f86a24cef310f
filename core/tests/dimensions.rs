//! Calendar, client and product dimension tests.

use chrono::NaiveDate;
use salesgen_core::{
    calendar::{date_id, generate_calendar, month_starts},
    config::{GeneratorConfig, RunConfig},
    dimension::{generate_clients, generate_products},
    rng::{RngBank, StageSlot},
    vocab::AbcGroup,
};
use std::collections::HashSet;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn calendar_covers_every_day_inclusive() {
    let cal = generate_calendar(ymd(2024, 1, 1), ymd(2025, 12, 31));
    assert_eq!(cal.len(), 366 + 365, "2024 is a leap year");

    let first = &cal[0];
    assert_eq!(first.date_id, 20240101);
    assert_eq!(first.year, 2024);
    assert_eq!(first.month_name, "Январь");
    assert_eq!(first.quarter, 1);

    let last = cal.last().unwrap();
    assert_eq!(last.date_id, 20251231);
    assert_eq!(last.month_name, "Декабрь");
    assert_eq!(last.quarter, 4);

    let ids: HashSet<_> = cal.iter().map(|c| c.date_id).collect();
    assert_eq!(ids.len(), cal.len(), "date_id must be unique");
}

#[test]
fn calendar_quarters_follow_months() {
    let cal = generate_calendar(ymd(2024, 1, 1), ymd(2024, 12, 31));
    for entry in &cal {
        let month = (entry.date_id / 100) % 100;
        assert_eq!(entry.quarter, (month - 1) / 3 + 1, "bad quarter on {}", entry.date_id);
    }
}

#[test]
fn date_id_is_yyyymmdd() {
    assert_eq!(date_id(ymd(2025, 7, 4)), 20250704);
}

#[test]
fn month_starts_skip_partial_first_month() {
    assert_eq!(month_starts(ymd(2024, 1, 1), ymd(2024, 3, 31)).len(), 3);
    assert_eq!(month_starts(ymd(2024, 1, 1), ymd(2025, 12, 31)).len(), 24);

    let mid = month_starts(ymd(2024, 1, 15), ymd(2024, 3, 1));
    assert_eq!(mid, vec![ymd(2024, 2, 1), ymd(2024, 3, 1)]);
}

#[test]
fn clients_have_sequential_ids_and_dates_in_window() {
    let config = RunConfig::default_test().generator;
    let mut rng = RngBank::new(config.seed).for_stage(StageSlot::Clients);
    let clients = generate_clients(&config, &mut rng);

    assert_eq!(clients.len(), config.clients as usize);
    let window_start = config.end_date - chrono::Days::new(config.registration_window_days as u64);
    for (i, c) in clients.iter().enumerate() {
        assert_eq!(c.client_id, i as u32 + 1);
        assert!(!c.client_name.is_empty());
        assert!(
            c.registration_date >= window_start && c.registration_date <= config.end_date,
            "registration {} outside window", c.registration_date
        );
    }
}

#[test]
fn product_abc_shares_roughly_match_weights() {
    let config = GeneratorConfig {
        products: 5_000,
        ..GeneratorConfig::default()
    };
    let mut rng = RngBank::new(11).for_stage(StageSlot::Products);
    let products = generate_products(&config, &mut rng);

    assert_eq!(products.len(), 5_000);
    assert_eq!(products[0].product_name, "Товар 1");

    let share = |g: AbcGroup| {
        products.iter().filter(|p| p.abc_group == g).count() as f64 / products.len() as f64
    };
    assert!((share(AbcGroup::A) - 0.2).abs() < 0.03, "A share {}", share(AbcGroup::A));
    assert!((share(AbcGroup::B) - 0.3).abs() < 0.03, "B share {}", share(AbcGroup::B));
    assert!((share(AbcGroup::C) - 0.5).abs() < 0.03, "C share {}", share(AbcGroup::C));
}
