/// Shared test helpers for cross-crate use.
///
/// Factories for raw risk-settings payloads shaped the way a host settings
/// store would hand them over, plus small utilities used by the integration
/// tests in the `scoring` and `ecom` crates.
use serde_json::{json, Value};
use std::io::Write;
use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ORDER_ID: AtomicI64 = AtomicI64::new(1);

/// Generate an order id unique within the test process.
pub fn generate_unique_order_id() -> i64 {
    NEXT_ORDER_ID.fetch_add(1, Ordering::Relaxed)
}

/// A fully populated raw settings mapping, mirroring what a host settings
/// form persists. Callers override individual fields through the returned
/// `Value` before resolving.
pub fn settings_json() -> Value {
    json!({
        "weights": {
            "repeat_orders": 5,
            "cancelled_orders": 10,
            "guest_orders": 10,
            "payment_method": 20,
        },
        "thresholds": {
            "low": 40,
            "medium": 70,
        },
        "high_risk_payment_methods": ["cod", "cheque"],
        "cancelled_orders_max_multiplier": 5,
        "repeat_orders_max_reduction": 20,
    })
}

/// Write a YAML settings file containing the given raw risk settings and
/// return the temp file handle (the file is deleted on drop).
pub fn write_settings_file(risk: &Value) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    let yaml = serde_yml::to_string(risk).expect("settings value serializes to YAML");
    file.write_all(yaml.as_bytes())?;
    file.flush()?;
    Ok(file)
}
