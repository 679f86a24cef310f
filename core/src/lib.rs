//! Synthetic sales-analytics dataset generator.
//!
//! Builds calendar, client, product, deal, client-metric, marketing-cost
//! and revenue-plan tables from a single seed, writes them as CSV and
//! loads them into SQLite.

pub mod auxiliary;
pub mod calendar;
pub mod config;
pub mod deal;
pub mod dimension;
pub mod error;
pub mod export;
pub mod metrics;
pub mod name_generator;
pub mod pipeline;
pub mod rng;
pub mod runner;
pub mod store;
pub mod summary;
pub mod table;
pub mod types;
pub mod vocab;
pub mod weighted;
