//! Content loading, decoupled from resource registration.
//!
//! A [`ContentLoader`] maps content keys to thunks. Every thunk returns a
//! future, so inline constants and file-backed documents look the same to
//! the dispatcher. Thunks run on their own tokio task: an error or a panic
//! while producing one payload cannot affect any other key.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Error a thunk may return while producing its payload.
pub type ThunkError = Box<dyn std::error::Error + Send + Sync>;

/// Future returned by a content thunk.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<String, ThunkError>> + Send>>;

type Thunk = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No thunk registered under the key. Manifest and loader disagree.
    #[error("no loader registered for content key '{key}'")]
    Missing { key: String },

    /// The thunk failed (or panicked) while producing the payload.
    #[error("loading content key '{key}' failed: {message}")]
    Failed { key: String, message: String },
}

#[derive(Clone, Default)]
pub struct ContentLoader {
    thunks: HashMap<String, Thunk>,
}

impl fmt::Debug for ContentLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.thunks.keys().collect();
        keys.sort();
        f.debug_struct("ContentLoader").field("keys", &keys).finish()
    }
}

impl ContentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an arbitrary thunk. A later registration for the same key
    /// replaces the earlier one.
    pub fn register<F, Fut>(&mut self, key: impl Into<String>, thunk: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, ThunkError>> + Send + 'static,
    {
        let thunk: Thunk = Arc::new(move || Box::pin(thunk()) as LoadFuture);
        self.thunks.insert(key.into(), thunk);
    }

    /// Register a payload compiled into the binary.
    pub fn register_static(&mut self, key: impl Into<String>, payload: &'static str) {
        self.register(key, move || async move { Ok::<_, ThunkError>(payload.to_string()) });
    }

    /// Register a document read from disk on every load.
    pub fn register_file(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) {
        let path = path.into();
        self.register(key, move || {
            let path = path.clone();
            async move {
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| -> ThunkError { format!("{}: {}", path.display(), e).into() })
            }
        });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.thunks.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.thunks.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.thunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thunks.is_empty()
    }

    /// Produce the payload for `key`. The returned string is exactly what the
    /// thunk produced.
    pub async fn load(&self, key: &str) -> Result<String, LoadError> {
        let thunk = self.thunks.get(key).ok_or_else(|| LoadError::Missing {
            key: key.to_string(),
        })?;

        let thunk = Arc::clone(thunk);
        let handle = tokio::spawn(async move { thunk().await });
        match handle.await {
            Ok(Ok(payload)) => Ok(payload),
            Ok(Err(e)) => Err(LoadError::Failed {
                key: key.to_string(),
                message: e.to_string(),
            }),
            Err(join) => Err(LoadError::Failed {
                key: key.to_string(),
                message: if join.is_panic() {
                    "loader panicked".to_string()
                } else {
                    join.to_string()
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn static_payload_is_returned_verbatim() {
        let body = "# Title\n\n```rust\nlet x = `y`;\n```\n  trailing  \n";
        let mut loader = ContentLoader::new();
        loader.register_static("a/one", body);

        assert_eq!(loader.load("a/one").await.unwrap(), body);
    }

    #[tokio::test]
    async fn missing_key_is_distinct_error() {
        let loader = ContentLoader::new();
        let err = loader.load("nope").await.unwrap_err();
        assert_eq!(err, LoadError::Missing { key: "nope".into() });
    }

    #[tokio::test]
    async fn thunk_error_becomes_failed() {
        let mut loader = ContentLoader::new();
        loader.register("bad", || async { Err::<String, ThunkError>("disk on fire".into()) });

        match loader.load("bad").await.unwrap_err() {
            LoadError::Failed { key, message } => {
                assert_eq!(key, "bad");
                assert_eq!(message, "disk on fire");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn thunk_panic_is_contained() {
        async fn explode() -> Result<String, ThunkError> {
            panic!("thunk exploded")
        }

        let mut loader = ContentLoader::new();
        loader.register("boom", explode);
        loader.register_static("fine", "still here");

        let err = loader.load("boom").await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Failed { ref message, .. } if message == "loader panicked"
        ));
        assert_eq!(loader.load("fine").await.unwrap(), "still here");
    }

    #[tokio::test]
    async fn panic_before_future_is_contained() {
        let mut loader = ContentLoader::new();
        loader.register("eager", || -> std::future::Ready<Result<String, ThunkError>> {
            panic!("closure exploded before returning a future")
        });
        loader.register_static("fine", "still here");

        let err = loader.load("eager").await.unwrap_err();
        assert_eq!(
            err,
            LoadError::Failed {
                key: "eager".into(),
                message: "loader panicked".into(),
            }
        );
        assert_eq!(loader.load("fine").await.unwrap(), "still here");
    }

    #[tokio::test]
    async fn file_payload_is_read_on_each_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first").unwrap();

        let mut loader = ContentLoader::new();
        loader.register_file("notes/today", file.path());
        assert_eq!(loader.load("notes/today").await.unwrap(), "first");

        std::fs::write(file.path(), "second").unwrap();
        assert_eq!(loader.load("notes/today").await.unwrap(), "second");
    }

    #[tokio::test]
    async fn missing_file_fails_with_path_in_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.md");

        let mut loader = ContentLoader::new();
        loader.register_file("notes/gone", &path);

        let err = loader.load("notes/gone").await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Failed { ref message, .. } if message.contains("gone.md")
        ));
    }

    #[test]
    fn keys_are_sorted() {
        let mut loader = ContentLoader::new();
        loader.register_static("b", "");
        loader.register_static("a", "");
        assert_eq!(loader.keys(), ["a", "b"]);
        assert!(loader.contains("a"));
        assert_eq!(loader.len(), 2);
    }
}
