use async_trait::async_trait;
use scoring::collaborators::ConfigurationStore;
use serde_json::Value;
use std::{error::Error, path::PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigStoreError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
}

/// Settings store backed by a YAML file, the file-based equivalent of a
/// host options table. A missing file means nothing has been persisted yet
/// and resolves to `None`; an unreadable or unparseable file is an error
/// for the host to handle.
pub struct FileConfigurationStore {
    path: PathBuf,
}

impl FileConfigurationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ConfigurationStore for FileConfigurationStore {
    async fn load(&self) -> Result<Option<Value>, Box<dyn Error + Send + Sync>> {
        let path = self.path.display().to_string();

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path, "No settings file, using defaults");
                return Ok(None);
            }
            Err(source) => return Err(Box::new(ConfigStoreError::Read { path, source })),
        };

        let value: Value = serde_yml::from_str(&contents)
            .map_err(|source| ConfigStoreError::Parse { path, source })?;

        Ok(Some(value))
    }
}
