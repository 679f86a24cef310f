use crate::error::{GenError, GenResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Size and shape of the generated dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub clients: u32,
    pub products: u32,
    pub deals: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Client registration dates fall in [end_date - window, end_date].
    pub registration_window_days: u32,
}

impl GeneratorConfig {
    /// Reject parameters the generators cannot sample from.
    pub fn validate(&self) -> GenResult<()> {
        let invalid = |reason: String| Err(GenError::InvalidConfig { reason });

        if self.clients == 0 {
            return invalid("client count must be > 0".into());
        }
        if self.products == 0 {
            return invalid("product count must be > 0".into());
        }
        if self.start_date > self.end_date {
            return invalid(format!(
                "start date {} is after end date {}",
                self.start_date, self.end_date
            ));
        }
        let window = Days::new(self.registration_window_days as u64);
        if self.end_date.checked_sub_days(window).is_none() {
            return invalid(format!(
                "registration window of {} days reaches before the earliest representable date",
                self.registration_window_days
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            clients: 500,
            products: 100,
            deals: 10_000,
            start_date: ymd(2024, 1, 1),
            end_date: ymd(2025, 12, 31),
            registration_window_days: 730,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated_data"),
        }
    }
}

/// Database sink settings. The sink is best-effort; see `store`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SinkConfig {
    pub enabled: bool,
    /// Main database file. Schema databases are created next to it.
    pub db_path: PathBuf,
    pub busy_timeout_secs: u64,
    /// Rows per insert transaction.
    pub batch_size: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            db_path: PathBuf::from("kpi_sales_db.sqlite"),
            busy_timeout_secs: 10,
            batch_size: 1000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub generator: GeneratorConfig,
    pub export: ExportConfig,
    pub sink: SinkConfig,
}

impl RunConfig {
    /// Load from a JSON file. Missing keys fall back to defaults.
    /// In tests, use RunConfig::default_test().
    pub fn load(path: &str) -> GenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&content)?;
        log::debug!("config loaded from {path}");
        Ok(config)
    }

    /// Small, fast config for tests: one quarter, few entities, no sink file.
    pub fn default_test() -> Self {
        Self {
            generator: GeneratorConfig {
                seed: 7,
                clients: 40,
                products: 15,
                deals: 600,
                start_date: ymd(2024, 1, 1),
                end_date: ymd(2024, 3, 31),
                registration_window_days: 730,
            },
            export: ExportConfig {
                output_dir: std::env::temp_dir().join("salesgen-test"),
            },
            sink: SinkConfig {
                enabled: false,
                db_path: PathBuf::from(":memory:"),
                busy_timeout_secs: 1,
                batch_size: 64,
            },
        }
    }

    /// Check generator and sink parameters before any work starts.
    pub fn validate(&self) -> GenResult<()> {
        self.generator.validate()?;
        if self.sink.batch_size == 0 {
            return Err(GenError::InvalidConfig {
                reason: "sink batch size must be > 0".into(),
            });
        }
        Ok(())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
