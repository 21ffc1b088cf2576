// Conversions between dispatcher envelopes and rmcp protocol types.
//
// Error mapping:
//   ResourceNotFound               → resource_not_found (-32002)
//   PromptNotFound / ArgumentMissing → invalid_params (-32602)
//   ConfigurationDefect / LoadError  → internal_error (-32603), generic message

use std::collections::HashMap;

use rmcp::model::{
    AnnotateAble, ErrorData, GetPromptResult, ListPromptsResult, ListResourcesResult, Prompt,
    PromptArgument, PromptMessage, PromptMessageRole, RawResource, ReadResourceResult, Resource,
    ResourceContents,
};
use serde_json::{json, Map, Value};

use folio::core::dispatch::{DispatchError, MessageContent, PromptReply, ResourceContent, Role};
use folio::core::manifest::ResourceSummary;
use folio::core::prompt::PromptSummary;

pub fn resource_list(resources: Vec<ResourceSummary>) -> ListResourcesResult {
    ListResourcesResult::with_all_items(resources.into_iter().map(resource).collect())
}

fn resource(summary: ResourceSummary) -> Resource {
    let mut raw = RawResource::new(summary.uri, summary.name);
    raw.description = Some(summary.description);
    raw.mime_type = Some(summary.mime_type);
    raw.no_annotation()
}

pub fn read_result(contents: Vec<ResourceContent>) -> ReadResourceResult {
    ReadResourceResult {
        contents: contents.into_iter().map(resource_contents).collect(),
    }
}

fn resource_contents(content: ResourceContent) -> ResourceContents {
    let mut out = ResourceContents::text(content.text, content.uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut out {
        *mime_type = Some(content.mime_type);
    }
    out
}

pub fn prompt_list(prompts: Vec<PromptSummary>) -> ListPromptsResult {
    ListPromptsResult::with_all_items(prompts.into_iter().map(prompt).collect())
}

fn prompt(summary: PromptSummary) -> Prompt {
    let arguments: Vec<PromptArgument> = summary
        .arguments
        .into_iter()
        .map(|a| PromptArgument {
            name: a.name,
            title: None,
            description: Some(a.description),
            required: Some(a.required),
        })
        .collect();
    let arguments = (!arguments.is_empty()).then_some(arguments);
    Prompt::new(summary.name, Some(summary.description), arguments)
}

pub fn prompt_result(reply: PromptReply) -> GetPromptResult {
    GetPromptResult {
        description: Some(reply.description),
        messages: reply
            .messages
            .into_iter()
            .map(|m| {
                let role = match m.role {
                    Role::User => PromptMessageRole::User,
                };
                let MessageContent::Text { text } = m.content;
                PromptMessage::new_text(role, text)
            })
            .collect(),
    }
}

/// Flatten protocol arguments to strings. Non-string JSON values are kept
/// in their JSON text form; nulls count as absent.
pub fn prompt_arguments(arguments: Option<Map<String, Value>>) -> HashMap<String, String> {
    arguments
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Null => None,
            Value::String(s) => Some((k, s)),
            other => Some((k, other.to_string())),
        })
        .collect()
}

/// Client-facing error. Load failures never carry their cause.
pub fn error_data(err: &DispatchError) -> ErrorData {
    match err {
        DispatchError::ResourceNotFound(uri) => {
            ErrorData::resource_not_found(err.to_string(), Some(json!({ "uri": uri })))
        }
        DispatchError::ConfigurationDefect { uri, .. } => ErrorData::internal_error(
            format!("Internal configuration error for resource: {uri}"),
            Some(json!({ "uri": uri })),
        ),
        DispatchError::ResourceLoadError { uri, .. } => ErrorData::internal_error(
            format!("Failed to load resource: {uri}"),
            Some(json!({ "uri": uri })),
        ),
        DispatchError::PromptNotFound(name) => {
            ErrorData::invalid_params(err.to_string(), Some(json!({ "name": name })))
        }
        DispatchError::PromptArgumentMissing { prompt, argument } => ErrorData::invalid_params(
            err.to_string(),
            Some(json!({ "name": prompt, "argument": argument })),
        ),
    }
}
