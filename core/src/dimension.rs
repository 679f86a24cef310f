//! Dimension tables: clients and products.
//!
//! Calendar lives in `calendar.rs` since it draws no randomness.

use crate::{
    config::GeneratorConfig,
    name_generator::NameGenerator,
    rng::StageRng,
    types::{ClientId, ProductId},
    vocab::{AbcGroup, ProductCategory, Region, XyzGroup},
    weighted::WeightedChoice,
};
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub client_id:         ClientId,
    pub client_name:       String,
    pub region:            Region,
    pub registration_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id:   ProductId,
    pub product_name: String,
    pub abc_group:    AbcGroup,
    pub xyz_group:    XyzGroup,
    pub category:     ProductCategory,
}

/// Clients 1..=N, each with a generated name, uniform region and a
/// registration date inside the configured window.
pub fn generate_clients(config: &GeneratorConfig, rng: &mut StageRng) -> Vec<Client> {
    let window_end = config.end_date;
    let window_start = window_end
        .checked_sub_days(Days::new(config.registration_window_days as u64))
        // Validated configs never reach the floor.
        .unwrap_or(NaiveDate::MIN);
    let window_days = (window_end - window_start).num_days();

    let clients: Vec<Client> = (1..=config.clients)
        .map(|client_id| {
            let client_name = NameGenerator::generate_company_name(rng);
            let region = *rng.choose(&Region::ALL);
            let offset = rng.uniform_inclusive(0, window_days) as u64;
            Client {
                client_id,
                client_name,
                region,
                registration_date: window_start + Days::new(offset),
            }
        })
        .collect();

    log::info!("{}: generated {} clients", rng.name, clients.len());
    clients
}

/// Products 1..=M. ABC and XYZ classes are drawn independently.
pub fn generate_products(config: &GeneratorConfig, rng: &mut StageRng) -> Vec<Product> {
    let abc = WeightedChoice::new(&AbcGroup::ALL, &AbcGroup::WEIGHTS);
    let xyz = WeightedChoice::new(&XyzGroup::ALL, &XyzGroup::WEIGHTS);

    let products: Vec<Product> = (1..=config.products)
        .map(|product_id| Product {
            product_id,
            product_name: format!("Товар {product_id}"),
            abc_group: abc.sample(rng),
            xyz_group: xyz.sample(rng),
            category: *rng.choose(&ProductCategory::ALL),
        })
        .collect();

    log::info!("{}: generated {} products", rng.name, products.len());
    products
}
