//! salesgen: generate the sales-analytics dataset, write CSVs, load SQLite.
//!
//! Usage:
//!   salesgen --seed 42 --out-dir generated_data --db kpi_sales_db.sqlite
//!   salesgen --config run.json --no-db

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use salesgen_core::{
    config::RunConfig,
    runner::{self, LoadStatus},
    summary::RunSummary,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "salesgen", version, about = "Synthetic sales-analytics dataset generator")]
struct Args {
    /// JSON run configuration; flags below override it.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    clients: Option<u32>,

    #[arg(long)]
    products: Option<u32>,

    #[arg(long)]
    deals: Option<u32>,

    /// First calendar day, YYYY-MM-DD.
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last calendar day, YYYY-MM-DD.
    #[arg(long)]
    end: Option<NaiveDate>,

    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// SQLite main database file.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Skip the database load.
    #[arg(long)]
    no_db: bool,

    #[arg(long)]
    batch_size: Option<usize>,
}

impl Args {
    fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        let g = &mut config.generator;
        if let Some(v) = self.seed {
            g.seed = v;
        }
        if let Some(v) = self.clients {
            g.clients = v;
        }
        if let Some(v) = self.products {
            g.products = v;
        }
        if let Some(v) = self.deals {
            g.deals = v;
        }
        if let Some(v) = self.start {
            g.start_date = v;
        }
        if let Some(v) = self.end {
            g.end_date = v;
        }
        if let Some(v) = &self.out_dir {
            config.export.output_dir = v.clone();
        }
        if let Some(v) = &self.db {
            config.sink.db_path = v.clone();
        }
        if let Some(v) = self.batch_size {
            config.sink.batch_size = v;
        }
        if self.no_db {
            config.sink.enabled = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Args::parse().resolve()?;
    let g = &config.generator;

    println!("salesgen");
    println!("  seed:      {}", g.seed);
    println!("  clients:   {}", g.clients);
    println!("  products:  {}", g.products);
    println!("  deals:     {}", g.deals);
    println!("  range:     {} .. {}", g.start_date, g.end_date);
    println!("  out_dir:   {}", config.export.output_dir.display());
    if config.sink.enabled {
        println!("  db:        {}", config.sink.db_path.display());
    } else {
        println!("  db:        (disabled)");
    }
    println!();

    // Generation and export errors abort the run.
    let outcome = runner::run(&config)?;
    log::info!("run complete: {} rows generated", outcome.dataset.total_rows());
    println!("Wrote {} files to {}", outcome.written.len(), config.export.output_dir.display());

    // The database is best-effort: report and carry on.
    match &outcome.load {
        LoadStatus::Skipped => println!("Database load skipped"),
        LoadStatus::Loaded(report) => {
            for (i, (table, rows)) in report.tables.iter().enumerate() {
                println!("{}/{}: {table} ({rows} rows)", i + 1, report.tables.len());
            }
            println!("Loaded {} rows (run {})", report.total_rows(), report.run_id);
        }
        LoadStatus::Failed(e) => {
            eprintln!("WARNING: database load failed: {e}");
            eprintln!("  CSV files in {} are complete.", config.export.output_dir.display());
        }
    }

    print_summary(&RunSummary::from_dataset(&outcome.dataset));
    Ok(())
}

fn print_summary(s: &RunSummary) {
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  calendar days:   {}", s.calendar_days);
    println!("  clients:         {} ({} with deals)", s.clients, s.clients_with_deals);
    println!("  products:        {}", s.products);
    println!("  deals:           {}", s.deals);
    println!("  closed deals:    {} ({:.2}%)", s.closed_deals, s.conversion_pct);
    println!("  closed revenue:  {:.2} BYN", s.closed_revenue);
    println!("  total LTV:       {:.2} BYN", s.total_ltv);
    println!("  cost rows:       {} ({:.2} BYN)", s.cost_rows, s.total_costs);
    println!("  plan rows:       {} ({:.2} BYN)", s.plan_rows, s.total_plan);
}
