use once_cell::sync::Lazy;
use scoring::collaborators::GatewayRegistry;
use std::collections::HashMap;

/// Titles for the stock payment gateways a shop ships with.
static BUILTIN_GATEWAYS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("cod", "Cash on delivery"),
        ("cheque", "Check payments"),
        ("bacs", "Direct bank transfer"),
        ("paypal", "PayPal"),
    ])
});

/// Gateway registry over a fixed set of built-in titles plus any gateways
/// the host registers at startup. Unknown identifiers resolve to `None`,
/// leaving the capitalized-id fallback to the scorer.
#[derive(Default)]
pub struct StaticGatewayRegistry {
    registered: HashMap<String, String>,
}

impl StaticGatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or override a gateway title. Host-registered titles win
    /// over the built-in set.
    pub fn register(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.registered.insert(id.into(), title.into());
    }
}

impl GatewayRegistry for StaticGatewayRegistry {
    fn display_name(&self, payment_method: &str) -> Option<String> {
        if let Some(title) = self.registered.get(payment_method) {
            return Some(title.clone());
        }
        BUILTIN_GATEWAYS
            .get(payment_method)
            .map(|title| (*title).to_string())
    }
}
