use crate::{
    collaborators::{ConfigurationStore, OrderHistoryLookup, RiskMetadataStore},
    config::{ConfigurationResolver, RiskConfiguration},
    model::{ModelId, OrderFacts, OrderStatus, RiskResult},
    scorer::RiskScorer,
};
use std::{error::Error, sync::Arc};
use tracing::{debug, info, trace};

/// Orchestrates a full scoring pass: loads settings, fetches the customer's
/// order history, and hands everything to the scorer. One instance per
/// host request/session; there is no shared state between analyses.
pub struct RiskAnalyzer {
    scorer: RiskScorer,
    history: Arc<dyn OrderHistoryLookup>,
    settings: Arc<dyn ConfigurationStore>,
}

impl RiskAnalyzer {
    pub fn new(
        scorer: RiskScorer,
        history: Arc<dyn OrderHistoryLookup>,
        settings: Arc<dyn ConfigurationStore>,
    ) -> Self {
        info!("Initializing new RiskAnalyzer");
        Self {
            scorer,
            history,
            settings,
        }
    }

    /// Compute a fresh risk result for the given order facts. Collaborator
    /// failures propagate to the caller; translating them into a fallback
    /// result is host policy.
    pub async fn analyze(
        &self,
        facts: &OrderFacts,
    ) -> Result<RiskResult, Box<dyn Error + Send + Sync>> {
        trace!("Starting risk analysis");

        let config = self.load_configuration().await?;
        let (cancelled_count, completed_count) =
            self.fetch_history_counts(&facts.billing_email).await?;

        let result = self
            .scorer
            .compute(facts, &config, cancelled_count, completed_count);

        info!(score = result.score, "Computed risk score");
        Ok(result)
    }

    /// Compute and persist the result against the order, mirroring the
    /// admin order-save flow.
    pub async fn analyze_and_save(
        &self,
        order_id: ModelId,
        facts: &OrderFacts,
        metadata: &dyn RiskMetadataStore,
    ) -> Result<RiskResult, Box<dyn Error + Send + Sync>> {
        let result = self.analyze(facts).await?;

        metadata.save_risk(order_id, &result).await?;
        info!("Saved risk metadata for order {}", order_id);

        Ok(result)
    }

    async fn load_configuration(
        &self,
    ) -> Result<RiskConfiguration, Box<dyn Error + Send + Sync>> {
        debug!("Loading risk settings");
        let raw = self.settings.load().await?;
        Ok(ConfigurationResolver::resolve(raw.as_ref()))
    }

    async fn fetch_history_counts(
        &self,
        email: &str,
    ) -> Result<(u32, u32), Box<dyn Error + Send + Sync>> {
        // No email means no history to look up; both counts are zero.
        if email.is_empty() {
            debug!("Empty billing email, skipping history lookup");
            return Ok((0, 0));
        }

        let cancelled = self
            .history
            .count_by_status_and_email(OrderStatus::Cancelled, email)
            .await?;
        let completed = self
            .history
            .count_by_status_and_email(OrderStatus::Completed, email)
            .await?;

        debug!(cancelled, completed, "Fetched order history counts");
        Ok((cancelled, completed))
    }
}
