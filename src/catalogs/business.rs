use super::Document;
use crate::core::prompt::{PromptArgumentSpec, PromptDescriptor};

pub(super) const INSTRUCTIONS: &str =
    "Business workflow documentation: order lifecycle, laboratory approval, roles and glossary.";

pub(super) const DOCUMENTS: &[Document] = &[
    Document {
        path: "workflows/order-lifecycle",
        name: "Order Lifecycle",
        description: "Order states, allowed transitions and owners",
        body: include_str!("../../content/ibso-business/workflows/order-lifecycle.md"),
    },
    Document {
        path: "workflows/laboratory-approval",
        name: "Laboratory Approval",
        description: "How new formulas are tested and approved",
        body: include_str!("../../content/ibso-business/workflows/laboratory-approval.md"),
    },
    Document {
        path: "domain/glossary",
        name: "Glossary",
        description: "Business terms used across the workflow documents",
        body: include_str!("../../content/ibso-business/domain/glossary.md"),
    },
    Document {
        path: "domain/roles",
        name: "Roles",
        description: "Who owns which part of each workflow",
        body: include_str!("../../content/ibso-business/domain/roles.md"),
    },
];

pub(super) fn prompts() -> Vec<PromptDescriptor> {
    vec![
        PromptDescriptor::new(
            "explain-workflow",
            "Explain the {workflow} workflow",
            "Explain the {workflow} workflow to a {audience}.\n\n\
             Read the matching document under ibso-business://workflows/ and \
             ibso-business://domain/roles first. Describe each step, who owns it, \
             and the rules that can block progress.",
        )
        .argument(PromptArgumentSpec::required(
            "workflow",
            "Workflow to explain, e.g. order-lifecycle",
        ))
        .argument(
            PromptArgumentSpec::optional("audience", "Who the explanation is for")
                .with_fallback("new team member"),
        ),
    ]
}
