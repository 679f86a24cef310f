//! Shared primitive types used across every table.

/// Calendar key in YYYYMMDD form, e.g. 20240131.
pub type DateId = u32;

pub type ClientId = u32;

pub type ProductId = u32;

pub type DealId = u32;

/// Round a BYN amount to kopecks.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
