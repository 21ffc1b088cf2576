//! Built-in content servers.
//!
//! Each catalog declares its documents in one static table. Both the
//! manifest entry and the loader entry for a document come from the same
//! row, so the two cannot drift apart.

mod business;
mod meta;
mod template;

use serde::{Deserialize, Serialize};

use crate::core::registry::{RegistryBuilder, ServerRegistry};
use crate::error::Result;

/// One embedded markdown document, addressed as `<scheme>://<path>`.
pub(crate) struct Document {
    pub path: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Catalog {
    /// Architecture guidance for the server family
    #[default]
    McpMeta,
    /// Business workflow documentation
    IbsoBusiness,
    /// CRM code-pattern templates
    Template,
}

impl Catalog {
    pub const ALL: [Catalog; 3] = [Catalog::McpMeta, Catalog::IbsoBusiness, Catalog::Template];

    pub fn scheme(self) -> &'static str {
        match self {
            Self::McpMeta => "mcp-meta",
            Self::IbsoBusiness => "ibso-business",
            Self::Template => "template",
        }
    }

    pub fn server_name(self) -> &'static str {
        match self {
            Self::McpMeta => "mcp-meta-server",
            Self::IbsoBusiness => "ibso-business-server",
            Self::Template => "template-server",
        }
    }

    /// Unvalidated builder with every built-in document and prompt declared.
    /// Callers may add more before building.
    pub fn builder(self) -> RegistryBuilder {
        let (documents, instructions) = match self {
            Self::McpMeta => (meta::DOCUMENTS, meta::INSTRUCTIONS),
            Self::IbsoBusiness => (business::DOCUMENTS, business::INSTRUCTIONS),
            Self::Template => (template::DOCUMENTS, template::INSTRUCTIONS),
        };

        let mut builder = ServerRegistry::builder(self.server_name(), self.scheme())
            .instructions(instructions);
        for doc in documents {
            builder = builder.document(doc.path, doc.name, doc.description, doc.body);
        }

        let prompts = match self {
            Self::McpMeta => meta::prompts(),
            Self::IbsoBusiness => business::prompts(),
            Self::Template => template::prompts(),
        };
        for prompt in prompts {
            builder = builder.prompt(prompt);
        }
        builder
    }

    pub fn registry(self) -> Result<ServerRegistry> {
        self.builder().build()
    }
}
