use std::collections::HashMap;

use serde::Serialize;

use crate::error::{FolioError, Result};

pub const MARKDOWN: &str = "text/markdown";

/// One addressable document. `content_key` is internal and never leaves the
/// server; use [`ResourceDescriptor::summary`] for anything client-facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
    pub content_key: String,
}

impl ResourceDescriptor {
    /// Build a descriptor whose content key is the `<category>/<name>` part
    /// of the URI. Malformed URIs get the whole URI as key and are rejected
    /// later by [`ResourceManifest::new`].
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        let uri = uri.into();
        let content_key = match split_uri(&uri) {
            Some(parts) => parts.path.to_string(),
            None => uri.clone(),
        };
        Self {
            uri,
            name: name.into(),
            description: description.into(),
            mime_type: mime_type.into(),
            content_key,
        }
    }

    /// Markdown descriptor, the common case.
    pub fn markdown(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(uri, name, description, MARKDOWN)
    }

    pub fn with_content_key(mut self, key: impl Into<String>) -> Self {
        self.content_key = key.into();
        self
    }

    /// The fields a client is allowed to see.
    pub fn summary(&self) -> ResourceSummary {
        ResourceSummary {
            uri: self.uri.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            mime_type: self.mime_type.clone(),
        }
    }
}

/// Public view of a descriptor, serialized with protocol field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// The pieces of `<scheme>://<category>/<name>`. `path` is `<category>/<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    pub scheme: &'a str,
    pub category: &'a str,
    pub name: &'a str,
    pub path: &'a str,
}

/// Split a resource URI. Returns `None` unless scheme, category and name are
/// all non-empty. `name` may itself contain further `/` segments.
pub fn split_uri(uri: &str) -> Option<UriParts<'_>> {
    let (scheme, path) = uri.split_once("://")?;
    let (category, name) = path.split_once('/')?;
    if scheme.is_empty() || category.is_empty() || name.is_empty() || name.ends_with('/') {
        return None;
    }
    Some(UriParts {
        scheme,
        category,
        name,
        path,
    })
}

/// Ordered, URI-keyed set of descriptors. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ResourceManifest {
    entries: Vec<ResourceDescriptor>,
    by_uri: HashMap<String, usize>,
}

impl ResourceManifest {
    /// Build a manifest for a server using `scheme`. Fails on the first
    /// malformed URI, foreign scheme, or duplicate URI.
    pub fn new(scheme: &str, entries: Vec<ResourceDescriptor>) -> Result<Self> {
        let mut by_uri = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let parts =
                split_uri(&entry.uri).ok_or_else(|| FolioError::MalformedUri(entry.uri.clone()))?;
            if parts.scheme != scheme {
                return Err(FolioError::SchemeMismatch {
                    uri: entry.uri.clone(),
                    scheme: scheme.to_string(),
                });
            }
            if by_uri.insert(entry.uri.clone(), i).is_some() {
                return Err(FolioError::DuplicateUri(entry.uri.clone()));
            }
        }

        Ok(Self { entries, by_uri })
    }

    /// Every descriptor, in declaration order.
    pub fn list_all(&self) -> &[ResourceDescriptor] {
        &self.entries
    }

    /// Exact, case-sensitive lookup. No normalization.
    pub fn find_by_uri(&self, uri: &str) -> Option<&ResourceDescriptor> {
        self.by_uri.get(uri).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(uri: &str) -> ResourceDescriptor {
        ResourceDescriptor::markdown(uri, "Doc", "A document")
    }

    #[test]
    fn content_key_derived_from_uri() {
        let d = doc("demo://a/one");
        assert_eq!(d.content_key, "a/one");

        let nested = doc("demo://guides/setup/linux");
        assert_eq!(nested.content_key, "guides/setup/linux");
    }

    #[test]
    fn explicit_content_key_wins() {
        let d = doc("demo://a/one").with_content_key("custom");
        assert_eq!(d.content_key, "custom");
    }

    #[test]
    fn split_uri_rejects_incomplete() {
        assert!(split_uri("demo://a/one").is_some());
        assert!(split_uri("demo://missing").is_none());
        assert!(split_uri("demo:/a/one").is_none());
        assert!(split_uri("://a/one").is_none());
        assert!(split_uri("demo:///one").is_none());
        assert!(split_uri("demo://a/").is_none());
    }

    #[test]
    fn duplicate_uri_fails_construction() {
        let err = ResourceManifest::new("demo", vec![doc("demo://a/one"), doc("demo://a/one")])
            .unwrap_err();
        assert!(matches!(err, FolioError::DuplicateUri(ref uri) if uri == "demo://a/one"));
    }

    #[test]
    fn foreign_scheme_fails_construction() {
        let err = ResourceManifest::new("demo", vec![doc("other://a/one")]).unwrap_err();
        assert!(matches!(err, FolioError::SchemeMismatch { .. }));
        assert!(err.to_string().contains("other://a/one"));
    }

    #[test]
    fn malformed_uri_fails_construction() {
        let err = ResourceManifest::new("demo", vec![doc("demo://flat")]).unwrap_err();
        assert!(matches!(err, FolioError::MalformedUri(_)));
    }

    #[test]
    fn list_preserves_declaration_order() {
        let manifest = ResourceManifest::new(
            "demo",
            vec![doc("demo://z/last"), doc("demo://a/first"), doc("demo://m/middle")],
        )
        .unwrap();
        let uris: Vec<_> = manifest.list_all().iter().map(|d| d.uri.as_str()).collect();
        assert_eq!(uris, ["demo://z/last", "demo://a/first", "demo://m/middle"]);
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let manifest = ResourceManifest::new("demo", vec![doc("demo://a/one")]).unwrap();
        assert!(manifest.find_by_uri("demo://a/one").is_some());
        assert!(manifest.find_by_uri("demo://a/One").is_none());
        assert!(manifest.find_by_uri("DEMO://a/one").is_none());
        assert!(manifest.find_by_uri("demo://a/one/").is_none());
        assert!(manifest.find_by_uri("demo://a").is_none());
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest = ResourceManifest::new("demo", Vec::new()).unwrap();
        assert!(manifest.is_empty());
        assert!(manifest.list_all().is_empty());
    }

    #[test]
    fn summary_omits_content_key() {
        let summary = doc("demo://a/one").with_content_key("secret/key").summary();
        let json = serde_json::to_value(&summary).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["mimeType"], "text/markdown");
        assert!(!json.to_string().contains("secret/key"));
    }
}
