use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalogs::Catalog;
use crate::core::manifest::MARKDOWN;
use crate::core::prompt::ArgumentPolicy;
use crate::logging::DEFAULT_LEVEL;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub collections: Vec<CollectionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub catalog: Catalog,
    pub argument_policy: ArgumentPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.into(),
        }
    }
}

/// A directory of local documents served under `<scheme>://<category>/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub category: String,
    pub path: PathBuf,
    pub pattern: String,
    pub mime_type: String,
    pub description: Option<String>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            category: "local".into(),
            path: PathBuf::new(),
            pattern: "*.md".into(),
            mime_type: MARKDOWN.into(),
            description: None,
        }
    }
}
