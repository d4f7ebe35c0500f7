use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Points added (or subtracted, for `repeat_orders`) per factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub repeat_orders: u32,
    pub cancelled_orders: u32,
    pub guest_orders: u32,
    pub payment_method: u32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            repeat_orders: 5,
            cancelled_orders: 10,
            guest_orders: 10,
            payment_method: 20,
        }
    }
}

/// Tier boundaries, in percent. `low <= medium` is expected but not
/// enforced; see `presentation::tier` for how an inverted pair behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low: u8,
    pub medium: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { low: 40, medium: 70 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskConfiguration {
    pub weights: RiskWeights,
    pub thresholds: RiskThresholds,
    pub high_risk_payment_methods: HashSet<String>,
    pub cancelled_orders_max_multiplier: u32,
    pub repeat_orders_max_reduction: u32,
}

impl Default for RiskConfiguration {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            thresholds: RiskThresholds::default(),
            high_risk_payment_methods: HashSet::new(),
            cancelled_orders_max_multiplier: 5,
            repeat_orders_max_reduction: 20,
        }
    }
}

/// Turns a host-persisted partial settings mapping into a fully populated
/// `RiskConfiguration`. Every field defaults independently: a missing or
/// wrong-shaped entry degrades to its default without affecting the rest,
/// and resolution never fails.
pub struct ConfigurationResolver;

impl ConfigurationResolver {
    pub fn defaults() -> RiskConfiguration {
        RiskConfiguration::default()
    }

    pub fn resolve(raw: Option<&Value>) -> RiskConfiguration {
        let defaults = RiskConfiguration::default();
        let Some(raw) = raw.filter(|v| v.is_object()) else {
            return defaults;
        };

        let weights_raw = raw.get("weights");
        let weights = RiskWeights {
            repeat_orders: coerce_u32(field(weights_raw, "repeat_orders"), defaults.weights.repeat_orders),
            cancelled_orders: coerce_u32(field(weights_raw, "cancelled_orders"), defaults.weights.cancelled_orders),
            guest_orders: coerce_u32(field(weights_raw, "guest_orders"), defaults.weights.guest_orders),
            payment_method: coerce_u32(field(weights_raw, "payment_method"), defaults.weights.payment_method),
        };

        let thresholds_raw = raw.get("thresholds");
        let thresholds = RiskThresholds {
            low: coerce_percent(field(thresholds_raw, "low"), defaults.thresholds.low),
            medium: coerce_percent(field(thresholds_raw, "medium"), defaults.thresholds.medium),
        };

        let high_risk_payment_methods = raw
            .get("high_risk_payment_methods")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect::<HashSet<String>>()
            })
            .unwrap_or(defaults.high_risk_payment_methods);

        // A multiplier below 1 would zero out the cancelled-orders factor
        // entirely, so it is floored rather than defaulted.
        let cancelled_orders_max_multiplier = coerce_u32(
            raw.get("cancelled_orders_max_multiplier"),
            defaults.cancelled_orders_max_multiplier,
        )
        .max(1);

        let repeat_orders_max_reduction = coerce_u32(
            raw.get("repeat_orders_max_reduction"),
            defaults.repeat_orders_max_reduction,
        );

        RiskConfiguration {
            weights,
            thresholds,
            high_risk_payment_methods,
            cancelled_orders_max_multiplier,
            repeat_orders_max_reduction,
        }
    }
}

fn field<'a>(section: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    section?.get(key)
}

fn coerce_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_u32(value: Option<&Value>, default: u32) -> u32 {
    match coerce_int(value) {
        Some(v) => v.clamp(0, i64::from(u32::MAX)) as u32,
        None => default,
    }
}

fn coerce_percent(value: Option<&Value>, default: u8) -> u8 {
    match coerce_int(value) {
        Some(v) => v.clamp(0, 100) as u8,
        None => default,
    }
}
