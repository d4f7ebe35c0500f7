use anyhow::Result;
use common::test_helpers::{settings_json, write_settings_file};
use ecom::config_store::FileConfigurationStore;
use scoring::{collaborators::ConfigurationStore, config::ConfigurationResolver};
use std::io::Write;

#[tokio::test]
async fn missing_file_loads_as_none() -> Result<()> {
    let store = FileConfigurationStore::new("/nonexistent/risk-settings.yaml");

    let loaded = store.load().await.map_err(|e| anyhow::anyhow!(e))?;
    assert!(loaded.is_none());

    // And resolving None yields defaults end to end.
    let config = ConfigurationResolver::resolve(loaded.as_ref());
    assert_eq!(config, ConfigurationResolver::defaults());
    Ok(())
}

#[tokio::test]
async fn persisted_settings_load_and_resolve() -> Result<()> {
    let file = write_settings_file(&settings_json())?;
    let store = FileConfigurationStore::new(file.path());

    let loaded = store.load().await.map_err(|e| anyhow::anyhow!(e))?;
    let config = ConfigurationResolver::resolve(loaded.as_ref());

    assert_eq!(config.weights.payment_method, 20);
    assert!(config.high_risk_payment_methods.contains("cod"));
    Ok(())
}

#[tokio::test]
async fn partial_settings_file_keeps_other_defaults() -> Result<()> {
    let file = write_settings_file(&serde_json::json!({
        "weights": { "guest_orders": 35 },
    }))?;
    let store = FileConfigurationStore::new(file.path());

    let loaded = store.load().await.map_err(|e| anyhow::anyhow!(e))?;
    let config = ConfigurationResolver::resolve(loaded.as_ref());

    assert_eq!(config.weights.guest_orders, 35);
    assert_eq!(config.weights.cancelled_orders, 10);
    assert_eq!(config.cancelled_orders_max_multiplier, 5);
    Ok(())
}

#[tokio::test]
async fn unparseable_file_surfaces_an_error() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "weights: [unbalanced")?;
    file.flush()?;

    let store = FileConfigurationStore::new(file.path());
    let err = store.load().await.unwrap_err();

    assert!(err.to_string().contains("failed to parse settings file"));
    Ok(())
}
