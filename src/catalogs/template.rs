use super::Document;
use crate::core::prompt::{PromptArgumentSpec, PromptDescriptor};

pub(super) const INSTRUCTIONS: &str =
    "CRM code-pattern templates. Read template://conventions/naming before generating code.";

pub(super) const DOCUMENTS: &[Document] = &[
    Document {
        path: "patterns/crm-entity",
        name: "CRM Entity",
        description: "Entity type and field metadata template",
        body: include_str!("../../content/template/patterns/crm-entity.md"),
    },
    Document {
        path: "patterns/list-view",
        name: "List View",
        description: "Searchable, paged entity list component",
        body: include_str!("../../content/template/patterns/list-view.md"),
    },
    Document {
        path: "patterns/detail-form",
        name: "Detail Form",
        description: "Shared create/edit form component",
        body: include_str!("../../content/template/patterns/detail-form.md"),
    },
    Document {
        path: "conventions/naming",
        name: "Naming Conventions",
        description: "Names for entities, components, files and API routes",
        body: include_str!("../../content/template/conventions/naming.md"),
    },
];

pub(super) fn prompts() -> Vec<PromptDescriptor> {
    vec![
        PromptDescriptor::new(
            "create-component",
            "Scaffold a {component_type} following the CRM templates",
            "Create a {component_type} named {name}.\n\n\
             Follow template://conventions/naming and the closest pattern under \
             template://patterns/. Derive fields from the entity's field metadata \
             and keep validation rules next to the type.",
        )
        .argument(
            PromptArgumentSpec::required("name", "Entity or component name")
                .with_fallback("Component"),
        )
        .argument(
            PromptArgumentSpec::optional("component_type", "Kind of component to build")
                .with_fallback("component"),
        ),
    ]
}
