//! Local document collections declared in `[[collections]]`.
//!
//! A collection is a directory walked once at startup. Matching files are
//! listed under the serving catalog's scheme and read from disk on every
//! request; nothing is read at startup.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::types::CollectionConfig;
use crate::core::manifest::ResourceDescriptor;
use crate::core::registry::RegistryBuilder;
use crate::error::{FolioError, Result};

/// Register every file of every collection with `builder`.
pub fn apply(
    mut builder: RegistryBuilder,
    collections: &[CollectionConfig],
) -> Result<RegistryBuilder> {
    for collection in collections {
        builder = apply_one(builder, collection)?;
    }
    Ok(builder)
}

fn apply_one(
    mut builder: RegistryBuilder,
    collection: &CollectionConfig,
) -> Result<RegistryBuilder> {
    let pattern = glob::Pattern::new(&collection.pattern).map_err(|e| {
        FolioError::Config(format!(
            "collection '{}': bad pattern '{}': {}",
            collection.category, collection.pattern, e
        ))
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&collection.path).sort_by_file_name() {
        let entry = entry.map_err(|e| FolioError::CollectionScan {
            path: collection.path.clone(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if pattern.matches(file_name) {
            files.push(entry.into_path());
        }
    }

    for path in files {
        let Some(name) = document_name(&collection.path, &path) else {
            continue;
        };
        let uri = format!("{}://{}/{}", builder.scheme(), collection.category, name);
        let title = name.rsplit('/').next().unwrap_or(&name).replace(['-', '_'], " ");
        let description = match &collection.description {
            Some(d) => d.clone(),
            None => format!("Local document {}", path.display()),
        };

        debug!(%uri, path = %path.display(), "collection document");
        let descriptor =
            ResourceDescriptor::new(uri, title, description, collection.mime_type.clone());
        builder.loader_mut().register_file(descriptor.content_key.clone(), &path);
        builder = builder.describe(descriptor);
    }

    Ok(builder)
}

/// Relative path without extension, `/`-separated: `guides/setup.md` → `guides/setup`.
fn document_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    let name = parts?.join("/");
    (!name.is_empty()).then_some(name)
}
