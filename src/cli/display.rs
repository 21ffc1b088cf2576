use owo_colors::OwoColorize;

use folio::core::manifest::ResourceSummary;
use folio::core::prompt::PromptSummary;

/// Render a resource as a two-line listing entry.
pub fn render_resource(resource: &ResourceSummary) -> String {
    format!(
        "  {} {}\n      {} {}",
        resource.uri.bold(),
        format!("({})", resource.mime_type).dimmed(),
        resource.name.green(),
        resource.description,
    )
}

/// Render a prompt with its argument list.
pub fn render_prompt(prompt: &PromptSummary) -> String {
    let mut lines = vec![format!("  {} {}", prompt.name.bold(), prompt.description)];
    for arg in &prompt.arguments {
        let marker = if arg.required { "required" } else { "optional" };
        lines.push(format!(
            "      {} {} {}",
            arg.name.cyan(),
            format!("[{marker}]").dimmed(),
            arg.description,
        ));
    }
    lines.join("\n")
}
