use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scoring::{
    collaborators::OrderHistoryLookup,
    model::{ModelId, OrderStatus},
};
use serde::{Deserialize, Serialize};
use std::{error::Error, sync::RwLock};
use tracing::debug;

/// A stored order, reduced to the fields history lookups care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: ModelId,
    pub billing_email: String,
    pub customer_id: i64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// In-memory order store implementing `OrderHistoryLookup`. Suitable for
/// hosts that already hold their order list in process, and for tests;
/// database-backed hosts implement the trait against their own storage.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<OrderRecord>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<OrderRecord>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    pub fn insert(&self, order: OrderRecord) {
        let mut orders = self.orders.write().expect("order store lock poisoned");
        orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.read().expect("order store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderHistoryLookup for InMemoryOrderStore {
    async fn count_by_status_and_email(
        &self,
        status: OrderStatus,
        email: &str,
    ) -> Result<u32, Box<dyn Error + Send + Sync>> {
        // Exact email match, like the host order query this stands in for.
        let orders = self.orders.read().expect("order store lock poisoned");
        let count = orders
            .iter()
            .filter(|o| o.status == status && o.billing_email == email)
            .count() as u32;

        debug!(
            status = status.as_str(),
            email, count, "Counted orders by status and email"
        );
        Ok(count)
    }
}
