use serde::{Deserialize, Serialize};

pub type ModelId = i64;

/// Order statuses relevant to history lookups. The store may track more
/// states internally; only these participate in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Completed,
    Cancelled,
    Processing,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Processing => "processing",
        }
    }
}

/// The order attributes the scorer reads. `customer_id == 0` marks a guest
/// checkout; `billing_email` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFacts {
    pub billing_email: String,
    pub customer_id: i64,
    pub payment_method: String,
}

/// Outcome of a single scoring pass: the clamped score plus itemized
/// explanations, split into factors that raised the score (negatives) and
/// factors that lowered it (positives). Built fresh on every compute call
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub score: u8,
    pub negatives: Vec<String>,
    pub positives: Vec<String>,
}

impl RiskResult {
    pub fn empty() -> Self {
        Self {
            score: 0,
            negatives: Vec::new(),
            positives: Vec::new(),
        }
    }
}
