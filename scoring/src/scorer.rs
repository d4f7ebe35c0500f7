use crate::{
    collaborators::GatewayRegistry,
    config::RiskConfiguration,
    model::{OrderFacts, RiskResult},
};
use std::sync::Arc;

/// The weighted-factor scorer. `compute` is pure: identical inputs always
/// produce identical results, and no factor short-circuits another.
#[derive(Clone, Default)]
pub struct RiskScorer {
    gateways: Option<Arc<dyn GatewayRegistry>>,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self { gateways: None }
    }

    /// Attach a gateway registry used to resolve payment method display
    /// names in reason strings.
    pub fn with_gateway_registry(gateways: Arc<dyn GatewayRegistry>) -> Self {
        Self {
            gateways: Some(gateways),
        }
    }

    /// Score an order. `cancelled_count` and `completed_count` are the
    /// customer's prior orders in those statuses; callers must pass 0 for
    /// both when the billing email is empty. Factors are evaluated in a
    /// fixed order: cancelled orders, guest checkout, payment method, then
    /// repeat customer. The final score is clamped to [0, 100].
    pub fn compute(
        &self,
        facts: &OrderFacts,
        config: &RiskConfiguration,
        cancelled_count: u32,
        completed_count: u32,
    ) -> RiskResult {
        let mut score: i64 = 0;
        let mut negatives = Vec::new();
        let mut positives = Vec::new();

        // Cancelled orders, scaled up to the configured multiplier cap.
        if cancelled_count > 0 {
            let multiplier = cancelled_count.min(config.cancelled_orders_max_multiplier);
            let impact =
                i64::from(config.weights.cancelled_orders).saturating_mul(i64::from(multiplier));
            score = score.saturating_add(impact);
            negatives.push(format!(
                "Cancelled orders ({}): +{}% (capped at {} times)",
                cancelled_count, impact, config.cancelled_orders_max_multiplier
            ));
        }

        // Guest checkout.
        if facts.customer_id == 0 {
            let weight = config.weights.guest_orders;
            score = score.saturating_add(i64::from(weight));
            negatives.push(format!("Guest checkout: +{}%", weight));
        }

        // High risk payment method.
        if config.high_risk_payment_methods.contains(&facts.payment_method) {
            let weight = config.weights.payment_method;
            score = score.saturating_add(i64::from(weight));
            let payment_name = self.payment_method_name(&facts.payment_method);
            negatives.push(format!("High risk payment ({}): +{}%", payment_name, weight));
        }

        // Repeat customer reduction, capped at the configured maximum.
        if completed_count >= 1 {
            let raw =
                i64::from(config.weights.repeat_orders).saturating_mul(i64::from(completed_count));
            let reduction = raw.min(i64::from(config.repeat_orders_max_reduction));
            score = score.saturating_sub(reduction);
            positives.push(format!(
                "Repeat customer ({} times): -{}% (capped at {}%)",
                completed_count, reduction, config.repeat_orders_max_reduction
            ));
        }

        RiskResult {
            score: score.clamp(0, 100) as u8,
            negatives,
            positives,
        }
    }

    fn payment_method_name(&self, payment_method: &str) -> String {
        self.gateways
            .as_ref()
            .and_then(|g| g.display_name(payment_method))
            .unwrap_or_else(|| capitalize(payment_method))
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
