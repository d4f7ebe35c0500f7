use crate::model::{ModelId, OrderStatus, RiskResult};
use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;

/// Counts a customer's prior orders by status. Implementations typically
/// query an order store and may block on I/O; the analyzer never calls this
/// with an empty email.
#[async_trait]
pub trait OrderHistoryLookup: Send + Sync {
    async fn count_by_status_and_email(
        &self,
        status: OrderStatus,
        email: &str,
    ) -> Result<u32, Box<dyn Error + Send + Sync>>;
}

/// Resolves a payment method identifier to its display title. `None` means
/// the gateway is unknown and the scorer falls back to the capitalized
/// raw identifier.
pub trait GatewayRegistry: Send + Sync {
    fn display_name(&self, payment_method: &str) -> Option<String>;
}

/// Loads the host-persisted raw risk settings. `None` means nothing has
/// been persisted yet and defaults apply.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    async fn load(&self) -> Result<Option<Value>, Box<dyn Error + Send + Sync>>;
}

/// Persists computed risk results against an order, so hosts can render
/// cached scores without recomputing.
#[async_trait]
pub trait RiskMetadataStore: Send + Sync {
    async fn save_risk(
        &self,
        order_id: ModelId,
        result: &RiskResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    async fn load_risk(
        &self,
        order_id: ModelId,
    ) -> Result<Option<RiskResult>, Box<dyn Error + Send + Sync>>;
}
