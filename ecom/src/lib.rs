pub mod config_store;
pub mod gateway_registry;
pub mod metadata_store;
pub mod order_store;
