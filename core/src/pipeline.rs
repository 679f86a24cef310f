//! The generation pipeline.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Calendar          (no randomness)
//!   2. Clients           (StageSlot::Clients)
//!   3. Products          (StageSlot::Products)
//!   4. Deals             (StageSlot::Deals)
//!   5. First-deal flag   (no randomness, post-pass over deals)
//!   6. Client metrics    (StageSlot::ClientMetrics)
//!   7. Costs and plans   (StageSlot::Auxiliary)
//!
//! RULES:
//!   - Data flows forward only: dimensions -> facts -> derived metrics.
//!   - Costs and plans never read facts or metrics.
//!   - All randomness flows through the RngBank.

use crate::{
    auxiliary::{generate_auxiliary, MarketingCost, RevenuePlan},
    calendar::{generate_calendar, CalendarEntry},
    config::GeneratorConfig,
    deal::{generate_deals, mark_first_deals, Deal},
    dimension::{generate_clients, generate_products, Client, Product},
    error::GenResult,
    metrics::{compute_client_metrics, ClientMetric},
    rng::{RngBank, StageSlot},
    table::TableVisitor,
};

/// Every table of one run, immutable once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub calendar:       Vec<CalendarEntry>,
    pub clients:        Vec<Client>,
    pub products:       Vec<Product>,
    pub deals:          Vec<Deal>,
    pub client_metrics: Vec<ClientMetric>,
    pub costs:          Vec<MarketingCost>,
    pub plans:          Vec<RevenuePlan>,
}

impl Dataset {
    /// Hand each table to `visitor` in the fixed export order.
    pub fn visit_tables<V: TableVisitor>(&self, visitor: &mut V) -> GenResult<()> {
        visitor.visit(&self.calendar)?;
        visitor.visit(&self.clients)?;
        visitor.visit(&self.products)?;
        visitor.visit(&self.deals)?;
        visitor.visit(&self.client_metrics)?;
        visitor.visit(&self.costs)?;
        visitor.visit(&self.plans)?;
        Ok(())
    }

    pub fn total_rows(&self) -> usize {
        self.calendar.len()
            + self.clients.len()
            + self.products.len()
            + self.deals.len()
            + self.client_metrics.len()
            + self.costs.len()
            + self.plans.len()
    }
}

pub struct SalesGenerator {
    config:   GeneratorConfig,
    rng_bank: RngBank,
}

impl SalesGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            rng_bank: RngBank::new(config.seed),
            config,
        }
    }

    /// Run every stage in order. Fails only on invalid configuration.
    pub fn generate(&self) -> GenResult<Dataset> {
        self.config.validate()?;
        let cfg = &self.config;
        log::info!(
            "generating dataset: seed={} clients={} products={} deals={} range={}..={}",
            cfg.seed, cfg.clients, cfg.products, cfg.deals, cfg.start_date, cfg.end_date
        );

        let calendar = generate_calendar(cfg.start_date, cfg.end_date);
        log::info!("calendar: {} days", calendar.len());

        let clients = generate_clients(cfg, &mut self.rng_bank.for_stage(StageSlot::Clients));
        let products = generate_products(cfg, &mut self.rng_bank.for_stage(StageSlot::Products));

        let mut deals = generate_deals(
            cfg.deals,
            &calendar,
            &clients,
            &products,
            &mut self.rng_bank.for_stage(StageSlot::Deals),
        );
        mark_first_deals(&mut deals);

        let client_metrics = compute_client_metrics(
            &clients,
            &deals,
            &mut self.rng_bank.for_stage(StageSlot::ClientMetrics),
        );

        let aux = generate_auxiliary(
            cfg.start_date,
            cfg.end_date,
            &mut self.rng_bank.for_stage(StageSlot::Auxiliary),
        );

        Ok(Dataset {
            calendar,
            clients,
            products,
            deals,
            client_metrics,
            costs: aux.costs,
            plans: aux.plans,
        })
    }
}
