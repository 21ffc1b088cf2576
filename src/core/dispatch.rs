//! Request dispatch: the protocol-facing side of a [`ServerRegistry`].
//!
//! Every request is independent. The dispatcher reads from an immutable
//! registry and builds a fresh response, so any number of requests may run
//! concurrently against one instance.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use super::loader::LoadError;
use super::manifest::ResourceSummary;
use super::prompt::{substitute, ArgumentPolicy, PromptSummary};
use super::registry::ServerRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListResources,
    ReadResource { uri: String },
    ListPrompts,
    GetPrompt {
        name: String,
        arguments: HashMap<String, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Resources { resources: Vec<ResourceSummary> },
    Contents { contents: Vec<ResourceContent> },
    Prompts { prompts: Vec<PromptSummary> },
    Prompt(PromptReply),
}

/// One entry of a `ReadResource` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// Message body, tagged the way the protocol tags it: `{"type":"text","text":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text { text: text.into() },
        }
    }

    pub fn text(&self) -> &str {
        match &self.content {
            MessageContent::Text { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptReply {
    pub description: String,
    pub messages: Vec<PromptMessage>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The manifest lists the resource but the loader has no entry for it.
    #[error("configuration defect: resource {uri} has no loader for content key '{key}'")]
    ConfigurationDefect { uri: String, key: String },

    #[error("Failed to load resource {uri}: {message}")]
    ResourceLoadError { uri: String, message: String },

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("Prompt '{prompt}' requires argument '{argument}'")]
    PromptArgumentMissing { prompt: String, argument: String },
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ServerRegistry>,
    policy: ArgumentPolicy,
}

impl Dispatcher {
    pub fn new(registry: Arc<ServerRegistry>, policy: ArgumentPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn registry(&self) -> &ServerRegistry {
        &self.registry
    }

    pub fn policy(&self) -> ArgumentPolicy {
        self.policy
    }

    /// Route a request to its handler.
    pub async fn handle(&self, request: Request) -> Result<Response, DispatchError> {
        match request {
            Request::ListResources => Ok(Response::Resources {
                resources: self.list_resources(),
            }),
            Request::ReadResource { uri } => Ok(Response::Contents {
                contents: self.read_resource(&uri).await?,
            }),
            Request::ListPrompts => Ok(Response::Prompts {
                prompts: self.list_prompts(),
            }),
            Request::GetPrompt { name, arguments } => {
                Ok(Response::Prompt(self.get_prompt(&name, &arguments)?))
            }
        }
    }

    pub fn list_resources(&self) -> Vec<ResourceSummary> {
        self.registry
            .manifest()
            .list_all()
            .iter()
            .map(|d| d.summary())
            .collect()
    }

    pub async fn read_resource(&self, uri: &str) -> Result<Vec<ResourceContent>, DispatchError> {
        debug!(uri, "read resource");

        let descriptor = self
            .registry
            .manifest()
            .find_by_uri(uri)
            .ok_or_else(|| DispatchError::ResourceNotFound(uri.to_string()))?;

        let text = self
            .registry
            .loader()
            .load(&descriptor.content_key)
            .await
            .map_err(|e| {
                error!(uri, error = %e, "resource load failed");
                match e {
                    LoadError::Missing { key } => DispatchError::ConfigurationDefect {
                        uri: uri.to_string(),
                        key,
                    },
                    LoadError::Failed { message, .. } => DispatchError::ResourceLoadError {
                        uri: uri.to_string(),
                        message,
                    },
                }
            })?;

        Ok(vec![ResourceContent {
            uri: descriptor.uri.clone(),
            mime_type: descriptor.mime_type.clone(),
            text,
        }])
    }

    pub fn list_prompts(&self) -> Vec<PromptSummary> {
        self.registry
            .prompts()
            .list_all()
            .iter()
            .map(|p| p.summary())
            .collect()
    }

    pub fn get_prompt(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> Result<PromptReply, DispatchError> {
        debug!(name, "get prompt");

        let prompt = self
            .registry
            .prompts()
            .find(name)
            .ok_or_else(|| DispatchError::PromptNotFound(name.to_string()))?;

        let values = prompt.resolve(arguments, self.policy).map_err(|argument| {
            DispatchError::PromptArgumentMissing {
                prompt: prompt.name.clone(),
                argument: argument.to_string(),
            }
        })?;

        Ok(PromptReply {
            description: substitute(&prompt.description, &values),
            messages: vec![PromptMessage::user(substitute(&prompt.template, &values))],
        })
    }
}
