//! Table metadata shared by the file export and the database sink.
//!
//! RULE: Column lists here must match the serde field order of each row
//! type. The CSV header comes from serde; the SQL schema comes from here.

use crate::{
    auxiliary::{MarketingCost, RevenuePlan},
    calendar::CalendarEntry,
    deal::Deal,
    dimension::{Client, Product},
    metrics::ClientMetric,
};
use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Real,
    Text,
    Date,
    Boolean,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real    => "REAL",
            Self::Text    => "TEXT",
            Self::Date    => "DATE",
            Self::Boolean => "BOOLEAN",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name:     &'static str,
    pub sql_type: SqlType,
}

const fn col(name: &'static str, sql_type: SqlType) -> Column {
    Column { name, sql_type }
}

/// A row type that maps onto one output table.
pub trait Table: Serialize {
    /// Database schema the table lives in (`sales`, `analytics`, `marketing`).
    const SCHEMA: &'static str;
    const NAME: &'static str;
    const COLUMNS: &'static [Column];

    /// `schema.name`, for SQL.
    fn qualified_name() -> String {
        format!("{}.{}", Self::SCHEMA, Self::NAME)
    }

    /// `schema_name.csv`, for the flat-file export.
    fn file_name() -> String {
        format!("{}_{}.csv", Self::SCHEMA, Self::NAME)
    }

    /// Values in `COLUMNS` order.
    fn sql_values(&self) -> Vec<Value>;
}

/// Something that consumes every table of a dataset in turn.
/// Implemented by the CSV exporter and the database loader.
pub trait TableVisitor {
    fn visit<T: Table>(&mut self, rows: &[T]) -> crate::error::GenResult<()>;
}

fn int(v: impl Into<i64>) -> Value {
    Value::Integer(v.into())
}

fn text(v: impl ToString) -> Value {
    Value::Text(v.to_string())
}

impl Table for CalendarEntry {
    const SCHEMA: &'static str = "sales";
    const NAME: &'static str = "d_calendar";
    const COLUMNS: &'static [Column] = &[
        col("date_id", SqlType::Integer),
        col("full_date", SqlType::Date),
        col("year", SqlType::Integer),
        col("month_name", SqlType::Text),
        col("quarter", SqlType::Integer),
    ];

    fn sql_values(&self) -> Vec<Value> {
        vec![
            int(self.date_id),
            text(self.full_date),
            int(self.year),
            text(self.month_name),
            int(self.quarter),
        ]
    }
}

impl Table for Client {
    const SCHEMA: &'static str = "sales";
    const NAME: &'static str = "d_clients";
    const COLUMNS: &'static [Column] = &[
        col("client_id", SqlType::Integer),
        col("client_name", SqlType::Text),
        col("region", SqlType::Text),
        col("registration_date", SqlType::Date),
    ];

    fn sql_values(&self) -> Vec<Value> {
        vec![
            int(self.client_id),
            text(&self.client_name),
            text(self.region),
            text(self.registration_date),
        ]
    }
}

impl Table for Product {
    const SCHEMA: &'static str = "sales";
    const NAME: &'static str = "d_products";
    const COLUMNS: &'static [Column] = &[
        col("product_id", SqlType::Integer),
        col("product_name", SqlType::Text),
        col("abc_group", SqlType::Text),
        col("xyz_group", SqlType::Text),
        col("category", SqlType::Text),
    ];

    fn sql_values(&self) -> Vec<Value> {
        vec![
            int(self.product_id),
            text(&self.product_name),
            text(self.abc_group),
            text(self.xyz_group),
            text(self.category),
        ]
    }
}

impl Table for Deal {
    const SCHEMA: &'static str = "sales";
    const NAME: &'static str = "f_deals";
    const COLUMNS: &'static [Column] = &[
        col("deal_id", SqlType::Integer),
        col("date_id", SqlType::Integer),
        col("client_id", SqlType::Integer),
        col("product_id", SqlType::Integer),
        col("revenue_byn", SqlType::Real),
        col("quantity", SqlType::Integer),
        col("stage_name", SqlType::Text),
        col("is_first_deal", SqlType::Boolean),
    ];

    fn sql_values(&self) -> Vec<Value> {
        vec![
            int(self.deal_id),
            int(self.date_id),
            int(self.client_id),
            int(self.product_id),
            Value::Real(self.revenue_byn),
            int(self.quantity),
            text(self.stage_name),
            int(self.is_first_deal),
        ]
    }
}

impl Table for ClientMetric {
    const SCHEMA: &'static str = "analytics";
    const NAME: &'static str = "mart_client_metrics";
    const COLUMNS: &'static [Column] = &[
        col("client_id", SqlType::Integer),
        col("avg_purchase_frequency", SqlType::Real),
        col("predicted_lifetime_months", SqlType::Integer),
        col("ltv_byn", SqlType::Real),
        col("rfm_segment", SqlType::Text),
    ];

    fn sql_values(&self) -> Vec<Value> {
        vec![
            int(self.client_id),
            Value::Real(self.avg_purchase_frequency),
            int(self.predicted_lifetime_months),
            Value::Real(self.ltv_byn),
            text(self.rfm_segment),
        ]
    }
}

impl Table for MarketingCost {
    const SCHEMA: &'static str = "marketing";
    const NAME: &'static str = "costs";
    const COLUMNS: &'static [Column] = &[
        col("cost_id", SqlType::Integer),
        col("date_id", SqlType::Integer),
        col("total_cost_byn", SqlType::Real),
        col("cost_category", SqlType::Text),
    ];

    fn sql_values(&self) -> Vec<Value> {
        vec![
            int(self.cost_id),
            int(self.date_id),
            Value::Real(self.total_cost_byn),
            text(self.cost_category),
        ]
    }
}

impl Table for RevenuePlan {
    const SCHEMA: &'static str = "sales";
    const NAME: &'static str = "d_plans";
    const COLUMNS: &'static [Column] = &[
        col("plan_id", SqlType::Integer),
        col("date_id", SqlType::Integer),
        col("region", SqlType::Text),
        col("plan_revenue_byn", SqlType::Real),
    ];

    fn sql_values(&self) -> Vec<Value> {
        vec![
            int(self.plan_id),
            int(self.date_id),
            text(self.region),
            Value::Real(self.plan_revenue_byn),
        ]
    }
}
