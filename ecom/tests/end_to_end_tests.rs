use anyhow::Result;
use chrono::Utc;
use common::test_helpers::{generate_unique_order_id, settings_json, write_settings_file};
use ecom::{
    config_store::FileConfigurationStore,
    gateway_registry::StaticGatewayRegistry,
    metadata_store::InMemoryRiskMetadataStore,
    order_store::{InMemoryOrderStore, OrderRecord},
};
use scoring::{
    analyzer::RiskAnalyzer,
    config::ConfigurationResolver,
    model::{OrderFacts, OrderStatus},
    presentation::{tier, RiskTier},
    scorer::RiskScorer,
};
use std::sync::Arc;

fn history_record(email: &str, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        id: generate_unique_order_id(),
        billing_email: email.to_string(),
        customer_id: 1,
        payment_method: "stripe".to_string(),
        status,
        created_at: Utc::now(),
    }
}

fn seeded_order_store() -> Arc<InMemoryOrderStore> {
    Arc::new(InMemoryOrderStore::with_orders(vec![
        history_record("churn@example.com", OrderStatus::Cancelled),
        history_record("churn@example.com", OrderStatus::Cancelled),
        history_record("repeat@example.com", OrderStatus::Completed),
        history_record("repeat@example.com", OrderStatus::Completed),
        history_record("repeat@example.com", OrderStatus::Completed),
        history_record("repeat@example.com", OrderStatus::Processing),
    ]))
}

fn build_analyzer(store: Arc<InMemoryOrderStore>) -> Result<(RiskAnalyzer, tempfile::NamedTempFile)> {
    let settings_file = write_settings_file(&settings_json())?;
    let settings = Arc::new(FileConfigurationStore::new(settings_file.path()));
    let scorer = RiskScorer::with_gateway_registry(Arc::new(StaticGatewayRegistry::new()));

    // The settings file handle is returned so it outlives the analyzer.
    Ok((RiskAnalyzer::new(scorer, store, settings), settings_file))
}

#[tokio::test]
async fn risky_guest_order_lands_in_the_medium_tier() -> Result<()> {
    let (analyzer, _settings) = build_analyzer(seeded_order_store())?;

    let facts = OrderFacts {
        billing_email: "churn@example.com".to_string(),
        customer_id: 0,
        payment_method: "cod".to_string(),
    };

    let result = analyzer.analyze(&facts).await.map_err(|e| anyhow::anyhow!(e))?;

    // 2 cancelled (+20), guest (+10), cash on delivery (+20).
    assert_eq!(result.score, 50);
    assert_eq!(
        result.negatives,
        vec![
            "Cancelled orders (2): +20% (capped at 5 times)".to_string(),
            "Guest checkout: +10%".to_string(),
            "High risk payment (Cash on delivery): +20%".to_string(),
        ]
    );
    assert!(result.positives.is_empty());

    let config = ConfigurationResolver::resolve(Some(&settings_json()));
    assert_eq!(tier(result.score, &config), RiskTier::Medium);
    Ok(())
}

#[tokio::test]
async fn repeat_customer_order_scores_low() -> Result<()> {
    let (analyzer, _settings) = build_analyzer(seeded_order_store())?;

    let facts = OrderFacts {
        billing_email: "repeat@example.com".to_string(),
        customer_id: 8,
        payment_method: "stripe".to_string(),
    };

    let result = analyzer.analyze(&facts).await.map_err(|e| anyhow::anyhow!(e))?;

    // 3 completed orders at weight 5 reduce below zero; clamped to 0.
    assert_eq!(result.score, 0);
    assert!(result.negatives.is_empty());
    assert_eq!(
        result.positives,
        vec!["Repeat customer (3 times): -15% (capped at 20%)".to_string()]
    );

    let config = ConfigurationResolver::resolve(Some(&settings_json()));
    assert_eq!(tier(result.score, &config), RiskTier::Low);
    Ok(())
}

#[tokio::test]
async fn unknown_customer_with_no_email_gets_guest_score_only() -> Result<()> {
    let (analyzer, _settings) = build_analyzer(seeded_order_store())?;

    let facts = OrderFacts {
        billing_email: String::new(),
        customer_id: 0,
        payment_method: "stripe".to_string(),
    };

    let result = analyzer.analyze(&facts).await.map_err(|e| anyhow::anyhow!(e))?;

    assert_eq!(result.score, 10);
    assert_eq!(result.negatives, vec!["Guest checkout: +10%".to_string()]);
    Ok(())
}

#[tokio::test]
async fn analyze_and_save_caches_the_score_for_rendering() -> Result<()> {
    let (analyzer, _settings) = build_analyzer(seeded_order_store())?;
    let metadata = InMemoryRiskMetadataStore::new();
    let order_id = generate_unique_order_id();

    let facts = OrderFacts {
        billing_email: "churn@example.com".to_string(),
        customer_id: 0,
        payment_method: "cod".to_string(),
    };

    let result = analyzer
        .analyze_and_save(order_id, &facts, &metadata)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let stored = metadata.get(order_id).expect("risk metadata was saved");
    assert_eq!(stored.result, result);
    assert!(stored.computed_at <= Utc::now());
    Ok(())
}

#[tokio::test]
async fn new_cancellations_raise_the_next_score() -> Result<()> {
    let store = seeded_order_store();
    let (analyzer, _settings) = build_analyzer(store.clone())?;

    let facts = OrderFacts {
        billing_email: "churn@example.com".to_string(),
        customer_id: 3,
        payment_method: "stripe".to_string(),
    };

    let before = analyzer.analyze(&facts).await.map_err(|e| anyhow::anyhow!(e))?;

    store.insert(history_record("churn@example.com", OrderStatus::Cancelled));

    let after = analyzer.analyze(&facts).await.map_err(|e| anyhow::anyhow!(e))?;

    assert_eq!(before.score, 20);
    assert_eq!(after.score, 30);
    Ok(())
}
