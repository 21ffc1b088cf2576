use super::Document;
use crate::core::prompt::{PromptArgumentSpec, PromptDescriptor};

pub(super) const INSTRUCTIONS: &str = "Architecture guidance for the MCP content servers. \
     Start with mcp-meta://architecture/ecosystem-overview.";

pub(super) const DOCUMENTS: &[Document] = &[
    Document {
        path: "architecture/ecosystem-overview",
        name: "Ecosystem Overview",
        description: "The server family, their schemes and the shared request surface",
        body: include_str!("../../content/mcp-meta/architecture/ecosystem-overview.md"),
    },
    Document {
        path: "architecture/server-anatomy",
        name: "Server Anatomy",
        description: "Manifest, loader, prompts and dispatcher, and how each one fails",
        body: include_str!("../../content/mcp-meta/architecture/server-anatomy.md"),
    },
    Document {
        path: "patterns/manifest-loader-split",
        name: "Manifest / Loader Split",
        description: "Keeping resource metadata and content production in sync",
        body: include_str!("../../content/mcp-meta/patterns/manifest-loader-split.md"),
    },
    Document {
        path: "guides/adding-a-server",
        name: "Adding a Server",
        description: "Step-by-step guide for adding a new content server",
        body: include_str!("../../content/mcp-meta/guides/adding-a-server.md"),
    },
];

pub(super) fn prompts() -> Vec<PromptDescriptor> {
    vec![
        PromptDescriptor::new(
            "design-server",
            "Design a content server for {domain}",
            "Design a new MCP content server for the {domain} domain.\n\n\
             Use the URI scheme `{scheme}://` and follow the guidance in \
             mcp-meta://architecture/server-anatomy and \
             mcp-meta://patterns/manifest-loader-split.\n\n\
             List the categories and documents the server should expose, with a \
             one-line description for each, and propose at least one prompt.",
        )
        .argument(PromptArgumentSpec::required(
            "domain",
            "Business or technical domain the server documents",
        ))
        .argument(
            PromptArgumentSpec::optional("scheme", "URI scheme for the new server")
                .with_fallback("docs"),
        ),
    ]
}
