use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scoring::{
    collaborators::RiskMetadataStore,
    model::{ModelId, RiskResult},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, error::Error, sync::RwLock};
use tracing::debug;

/// A persisted risk result together with when it was computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRisk {
    pub result: RiskResult,
    pub computed_at: DateTime<Utc>,
}

/// In-memory risk metadata store. Saving overwrites any previous entry for
/// the order, matching save-hook semantics where each order save recomputes
/// and replaces the cached score.
#[derive(Default)]
pub struct InMemoryRiskMetadataStore {
    entries: RwLock<HashMap<ModelId, StoredRisk>>,
}

impl InMemoryRiskMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full stored entry, including the computation timestamp.
    pub fn get(&self, order_id: ModelId) -> Option<StoredRisk> {
        let entries = self.entries.read().expect("metadata store lock poisoned");
        entries.get(&order_id).cloned()
    }
}

#[async_trait]
impl RiskMetadataStore for InMemoryRiskMetadataStore {
    async fn save_risk(
        &self,
        order_id: ModelId,
        result: &RiskResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.write().expect("metadata store lock poisoned");
        entries.insert(
            order_id,
            StoredRisk {
                result: result.clone(),
                computed_at: Utc::now(),
            },
        );

        debug!(order_id, score = result.score, "Saved risk metadata");
        Ok(())
    }

    async fn load_risk(
        &self,
        order_id: ModelId,
    ) -> Result<Option<RiskResult>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.read().expect("metadata store lock poisoned");
        Ok(entries.get(&order_id).map(|e| e.result.clone()))
    }
}
