//! SQLite sink.
//!
//! RULE: Only store.rs talks to the database.
//!
//! The `sales`, `analytics` and `marketing` schemas are separate SQLite
//! databases ATTACHed to the main connection. Each table load replaces the
//! table wholesale in two phases:
//!   1. DROP TABLE IF EXISTS + CREATE TABLE
//!   2. bulk INSERT, one transaction per batch
//! The phases are NOT atomic together: a failure during phase 2 leaves a
//! partially filled table behind. Flat files are the durable output.

use crate::{
    config::SinkConfig,
    error::GenResult,
    pipeline::Dataset,
    table::{Table, TableVisitor},
};
use rusqlite::{params, params_from_iter, Connection};
use std::{path::Path, time::Duration};

pub const SCHEMAS: [&str; 3] = ["sales", "analytics", "marketing"];

pub struct SalesStore {
    conn: Connection,
}

/// Outcome of loading one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub run_id: String,
    /// (qualified table name, rows inserted), in load order.
    pub tables: Vec<(String, usize)>,
}

impl LoadReport {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|(_, n)| n).sum()
    }
}

impl SalesStore {
    /// Open (or create) the main database and attach the schema databases
    /// next to it, e.g. `kpi.sqlite` + `kpi.sales.sqlite`.
    pub fn open(config: &SinkConfig) -> GenResult<Self> {
        if config.db_path == Path::new(":memory:") {
            return Self::in_memory();
        }
        let conn = Connection::open(&config.db_path)?;
        conn.busy_timeout(Duration::from_secs(config.busy_timeout_secs))?;
        let store = Self { conn };
        for schema in SCHEMAS {
            let schema_path = config.db_path.with_extension(format!("{schema}.sqlite"));
            store.attach(schema, &schema_path.to_string_lossy())?;
        }
        store.migrate()?;
        Ok(store)
    }

    /// In-memory main database with in-memory schemas (used in tests).
    pub fn in_memory() -> GenResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        for schema in SCHEMAS {
            store.attach(schema, ":memory:")?;
        }
        store.migrate()?;
        Ok(store)
    }

    fn attach(&self, schema: &str, path: &str) -> GenResult<()> {
        self.conn
            .execute(&format!("ATTACH DATABASE ?1 AS {schema}"), params![path])?;
        log::debug!("attached schema {schema} at {path}");
        Ok(())
    }

    /// Bookkeeping tables in the main database.
    fn migrate(&self) -> GenResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS load_run (
                run_id      TEXT PRIMARY KEY,
                seed        INTEGER NOT NULL,
                version     TEXT NOT NULL,
                rows_loaded INTEGER NOT NULL,
                loaded_at   TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    // ── Table replacement ──────────────────────────────────────

    /// Replace `schema.table` with `rows`. Returns the number of rows inserted.
    pub fn replace_table<T: Table>(&mut self, rows: &[T], batch_size: usize) -> GenResult<usize> {
        let qualified = T::qualified_name();

        // Phase 1: drop and recreate.
        let column_defs: Vec<String> = T::COLUMNS
            .iter()
            .map(|c| format!("{} {}", c.name, c.sql_type.as_sql()))
            .collect();
        self.conn.execute_batch(&format!(
            "DROP TABLE IF EXISTS {qualified};
             CREATE TABLE {qualified} ({});",
            column_defs.join(", ")
        ))?;

        // Phase 2: batched insert.
        let names: Vec<&str> = T::COLUMNS.iter().map(|c| c.name).collect();
        let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{i}")).collect();
        let insert_sql = format!(
            "INSERT INTO {qualified} ({}) VALUES ({})",
            names.join(", "),
            placeholders.join(", ")
        );

        let mut inserted = 0usize;
        for (batch_no, batch) in rows.chunks(batch_size.max(1)).enumerate() {
            let tx = self.conn.transaction()?;
            {
                let mut stmt = tx.prepare_cached(&insert_sql)?;
                for row in batch {
                    stmt.execute(params_from_iter(row.sql_values()))?;
                }
            }
            tx.commit()?;
            inserted += batch.len();
            log::debug!("{qualified}: batch {batch_no} committed ({inserted}/{})", rows.len());
        }

        log::info!("{qualified}: replaced with {inserted} rows");
        Ok(inserted)
    }

    // ── Load run ───────────────────────────────────────────────

    pub fn insert_run(&self, run_id: &str, seed: u64, version: &str, rows: usize) -> GenResult<()> {
        self.conn.execute(
            "INSERT INTO load_run (run_id, seed, version, rows_loaded, loaded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                run_id,
                seed as i64,
                version,
                rows as i64,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn run_count(&self) -> GenResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM load_run", [], |row| row.get(0))?;
        Ok(n)
    }

    /// Load every table of `dataset`, then record the run.
    pub fn load_dataset(
        &mut self,
        dataset: &Dataset,
        seed: u64,
        batch_size: usize,
    ) -> GenResult<LoadReport> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut loader = Loader {
            store: &mut *self,
            batch_size,
            tables: Vec::with_capacity(7),
        };
        dataset.visit_tables(&mut loader)?;
        let report = LoadReport {
            run_id,
            tables: loader.tables,
        };
        self.insert_run(&report.run_id, seed, env!("CARGO_PKG_VERSION"), report.total_rows())?;
        Ok(report)
    }

    // ── Queries (tests and summaries) ──────────────────────────

    pub fn row_count<T: Table>(&self) -> GenResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::qualified_name());
        let n = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n)
    }

    /// Sum of recognised revenue in `sales.f_deals`.
    pub fn closed_revenue(&self) -> GenResult<f64> {
        let total = self.conn.query_row(
            "SELECT COALESCE(SUM(revenue_byn), 0.0) FROM sales.f_deals",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Deals whose client, product or date has no dimension row.
    pub fn orphan_deal_count(&self) -> GenResult<i64> {
        let n = self.conn.query_row(
            "SELECT COUNT(*) FROM sales.f_deals d
             WHERE NOT EXISTS (SELECT 1 FROM sales.d_clients c WHERE c.client_id = d.client_id)
                OR NOT EXISTS (SELECT 1 FROM sales.d_products p WHERE p.product_id = d.product_id)
                OR NOT EXISTS (SELECT 1 FROM sales.d_calendar k WHERE k.date_id = d.date_id)",
            [],
            |row| row.get(0),
        )?;
        Ok(n)
    }
}

struct Loader<'a> {
    store:      &'a mut SalesStore,
    batch_size: usize,
    tables:     Vec<(String, usize)>,
}

impl TableVisitor for Loader<'_> {
    fn visit<T: Table>(&mut self, rows: &[T]) -> GenResult<()> {
        let inserted = self.store.replace_table(rows, self.batch_size)?;
        self.tables.push((T::qualified_name(), inserted));
        Ok(())
    }
}
