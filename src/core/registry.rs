use tracing::warn;

use super::loader::ContentLoader;
use super::manifest::{ResourceDescriptor, ResourceManifest};
use super::prompt::{PromptCatalog, PromptDescriptor};
use crate::error::{FolioError, Result};

/// Everything one server exposes: manifest, loader and prompts, built once
/// and read-only afterward. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ServerRegistry {
    name: String,
    scheme: String,
    instructions: Option<String>,
    manifest: ResourceManifest,
    loader: ContentLoader,
    prompts: PromptCatalog,
}

impl ServerRegistry {
    pub fn builder(name: impl Into<String>, scheme: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            name: name.into(),
            scheme: scheme.into(),
            instructions: None,
            resources: Vec::new(),
            loader: ContentLoader::new(),
            prompts: Vec::new(),
        }
    }

    /// Assemble a registry without cross-checking manifest against loader.
    /// A manifest entry with no loader then surfaces at request time as a
    /// configuration defect instead of failing here.
    pub fn from_parts(
        name: impl Into<String>,
        scheme: impl Into<String>,
        manifest: ResourceManifest,
        loader: ContentLoader,
        prompts: PromptCatalog,
    ) -> Self {
        Self {
            name: name.into(),
            scheme: scheme.into(),
            instructions: None,
            manifest,
            loader,
            prompts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn manifest(&self) -> &ResourceManifest {
        &self.manifest
    }

    pub fn loader(&self) -> &ContentLoader {
        &self.loader
    }

    pub fn prompts(&self) -> &PromptCatalog {
        &self.prompts
    }
}

/// Collects resources and prompts, then validates them together in
/// [`RegistryBuilder::build`].
pub struct RegistryBuilder {
    name: String,
    scheme: String,
    instructions: Option<String>,
    resources: Vec<ResourceDescriptor>,
    loader: ContentLoader,
    prompts: Vec<PromptDescriptor>,
}

impl RegistryBuilder {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn instructions(mut self, text: impl Into<String>) -> Self {
        self.instructions = Some(text.into());
        self
    }

    /// Declare a resource. Its content must be registered separately.
    pub fn describe(mut self, descriptor: ResourceDescriptor) -> Self {
        self.resources.push(descriptor);
        self
    }

    /// Access the loader to register content thunks.
    pub fn loader_mut(&mut self) -> &mut ContentLoader {
        &mut self.loader
    }

    /// Declare an embedded markdown document at `<scheme>://<path>` and
    /// register its payload under the derived key in one step.
    pub fn document(
        mut self,
        path: &str,
        name: &str,
        description: &str,
        body: &'static str,
    ) -> Self {
        let uri = format!("{}://{}", self.scheme, path);
        let descriptor = ResourceDescriptor::markdown(uri, name, description);
        self.loader.register_static(descriptor.content_key.clone(), body);
        self.resources.push(descriptor);
        self
    }

    pub fn prompt(mut self, prompt: PromptDescriptor) -> Self {
        self.prompts.push(prompt);
        self
    }

    /// Validate and freeze. Fails on any manifest or prompt defect, and on
    /// any manifest entry whose content key has no loader.
    pub fn build(self) -> Result<ServerRegistry> {
        let manifest = ResourceManifest::new(&self.scheme, self.resources)?;

        for descriptor in manifest.list_all() {
            if !self.loader.contains(&descriptor.content_key) {
                return Err(FolioError::LoaderMissing {
                    uri: descriptor.uri.clone(),
                    key: descriptor.content_key.clone(),
                });
            }
        }

        for key in self.loader.keys() {
            if !manifest.list_all().iter().any(|d| d.content_key == key) {
                warn!(server = %self.name, key, "content registered but never listed");
            }
        }

        let prompts = PromptCatalog::new(self.prompts)?;

        Ok(ServerRegistry {
            name: self.name,
            scheme: self.scheme,
            instructions: self.instructions,
            manifest,
            loader: self.loader,
            prompts,
        })
    }
}
