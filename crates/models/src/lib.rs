//! Entity definitions for the job portal record store.
//!
//! Every entity serializes with camelCase field names so the persisted
//! document keeps the shape the portal front-end expects.

pub mod errors;
pub mod ids;
pub mod patch;
pub mod record;
pub mod user;
pub mod job;
pub mod application;
pub mod document;
pub mod profile_request;

use serde::{Deserialize, Serialize};

/// Inclusive `{ min, max }` amount, used for wages and job budgets.
/// Amounts are plain JSON numbers, fractions included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    pub fn new(min: f64, max: f64) -> Self { Self { min, max } }
}
