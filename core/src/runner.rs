//! One complete run: generate, export, then load the database if enabled.
//!
//! RULE: Flat files are authoritative. Generation or export failures abort
//! the run; a database failure is logged and recorded in the outcome.

use crate::{
    config::RunConfig,
    error::GenResult,
    export::export_dataset,
    pipeline::{Dataset, SalesGenerator},
    store::{LoadReport, SalesStore},
};
use std::path::PathBuf;

/// What happened to the database side of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Sink disabled in the configuration.
    Skipped,
    Loaded(LoadReport),
    /// The error message; the exported files are untouched.
    Failed(String),
}

#[derive(Debug)]
pub struct RunOutcome {
    pub dataset: Dataset,
    /// CSV paths in export order.
    pub written: Vec<PathBuf>,
    pub load: LoadStatus,
}

pub fn run(config: &RunConfig) -> GenResult<RunOutcome> {
    config.validate()?;
    let dataset = SalesGenerator::new(config.generator.clone()).generate()?;
    let written = export_dataset(&dataset, &config.export.output_dir)?;
    let load = load_best_effort(&dataset, config);
    Ok(RunOutcome {
        dataset,
        written,
        load,
    })
}

/// Load `dataset` into the configured sink. Never returns an error.
pub fn load_best_effort(dataset: &Dataset, config: &RunConfig) -> LoadStatus {
    if !config.sink.enabled {
        log::info!("database load skipped (sink disabled)");
        return LoadStatus::Skipped;
    }
    let loaded = SalesStore::open(&config.sink).and_then(|mut store| {
        store.load_dataset(dataset, config.generator.seed, config.sink.batch_size)
    });
    match loaded {
        Ok(report) => LoadStatus::Loaded(report),
        Err(e) => {
            log::error!("database load failed: {e}");
            LoadStatus::Failed(e.to_string())
        }
    }
}
