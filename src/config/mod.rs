pub mod types;

use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};
use types::FolioConfig;

/// Load config from `explicit` if given, else from the XDG path. Only an
/// explicit path is required to exist.
pub fn load_config(explicit: Option<&Path>) -> Result<FolioConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = config_path();
            if !default.exists() {
                return Ok(FolioConfig::default());
            }
            default
        }
    };

    let text = std::fs::read_to_string(&path).map_err(|e| FolioError::ConfigRead {
        path: path.clone(),
        source: e,
    })?;
    let cfg = parse_config(&text).map_err(|e| FolioError::ConfigParse { path, source: e })?;
    validate(&cfg)?;
    Ok(cfg)
}

pub fn parse_config(text: &str) -> std::result::Result<FolioConfig, toml::de::Error> {
    toml::from_str(text)
}

fn validate(cfg: &FolioConfig) -> Result<()> {
    for c in &cfg.collections {
        if c.category.is_empty() || c.category.contains('/') {
            return Err(FolioError::Config(format!(
                "collection category must be a single non-empty segment, got '{}'",
                c.category
            )));
        }
        if c.path.as_os_str().is_empty() {
            return Err(FolioError::Config(format!(
                "collection '{}' has no path",
                c.category
            )));
        }
    }
    Ok(())
}

/// Return XDG config dir (~/.config/folio/)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("folio")
}

/// Return the default config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::Catalog;
    use crate::core::prompt::ArgumentPolicy;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.server.catalog, Catalog::McpMeta);
        assert_eq!(cfg.server.argument_policy, ArgumentPolicy::Strict);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.collections.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let cfg = parse_config(
            r#"
            [server]
            catalog = "ibso-business"
            argument_policy = "lenient"

            [logging]
            level = "debug"

            [[collections]]
            category = "notes"
            path = "/srv/notes"

            [[collections]]
            category = "specs"
            path = "/srv/specs"
            pattern = "*.txt"
            mime_type = "text/plain"
            description = "Product specs"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.catalog, Catalog::IbsoBusiness);
        assert_eq!(cfg.server.argument_policy, ArgumentPolicy::Lenient);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.collections.len(), 2);
        assert_eq!(cfg.collections[0].pattern, "*.md");
        assert_eq!(cfg.collections[0].mime_type, "text/markdown");
        assert_eq!(cfg.collections[1].mime_type, "text/plain");
        assert_eq!(cfg.collections[1].description.as_deref(), Some("Product specs"));
    }

    #[test]
    fn unknown_catalog_is_rejected() {
        assert!(parse_config("[server]\ncatalog = \"nope\"\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, FolioError::ConfigRead { .. }));
    }

    #[test]
    fn explicit_file_is_loaded_and_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[server]\ncatalog = \"template\"\n").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().server.catalog, Catalog::Template);

        std::fs::write(&path, "[[collections]]\ncategory = \"a/b\"\npath = \"/x\"\n").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(FolioError::Config(_))));

        std::fs::write(&path, "[server\n").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(FolioError::ConfigParse { .. })));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&FolioConfig::default()).unwrap();
        let back = parse_config(&text).unwrap();
        assert_eq!(back.server.catalog, Catalog::McpMeta);
    }
}
