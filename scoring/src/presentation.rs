use crate::config::RiskConfiguration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskTier::Low => "text-success",
            RiskTier::Medium => "text-warning",
            RiskTier::High => "text-danger",
        }
    }
}

/// Map a score onto the three-tier scale using the configured thresholds.
/// The medium threshold is checked first, so with an inverted pair
/// (`low > medium`) the Medium tier becomes unreachable.
pub fn tier(score: u8, config: &RiskConfiguration) -> RiskTier {
    if score >= config.thresholds.medium {
        RiskTier::High
    } else if score >= config.thresholds.low {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
