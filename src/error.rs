use std::path::PathBuf;
use thiserror::Error;

/// Failures detected while building a server: bad manifests, bad prompts,
/// bad config. None of these can happen once a registry exists.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("duplicate resource uri: {0}")]
    DuplicateUri(String),

    #[error("malformed resource uri '{0}': expected <scheme>://<category>/<name>")]
    MalformedUri(String),

    #[error("resource uri '{uri}' does not use the server scheme '{scheme}'")]
    SchemeMismatch { uri: String, scheme: String },

    #[error("resource {uri} references content key '{key}' with no loader")]
    LoaderMissing { uri: String, key: String },

    #[error("duplicate prompt name: {0}")]
    DuplicatePrompt(String),

    #[error("prompt '{prompt}' uses undeclared placeholder {{{placeholder}}}")]
    UndeclaredPlaceholder { prompt: String, placeholder: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("cannot read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("collection scan error at {path}: {source}")]
    CollectionScan {
        path: PathBuf,
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, FolioError>;
