use std::io::Write;

use folio::core::dispatch::Response;

use crate::cli::OutputFormat;

/// Write a dispatcher response in the requested output format. Resource text
/// is written exactly as loaded, with nothing appended.
pub fn output_response(
    response: &Response,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, response)?;
            writeln!(writer)?;
        }
        OutputFormat::Human => match response {
            Response::Resources { resources } => {
                for resource in resources {
                    writeln!(writer, "{}", super::display::render_resource(resource))?;
                }
            }
            Response::Contents { contents } => {
                for content in contents {
                    write!(writer, "{}", content.text)?;
                }
            }
            Response::Prompts { prompts } => {
                for prompt in prompts {
                    writeln!(writer, "{}", super::display::render_prompt(prompt))?;
                }
            }
            Response::Prompt(reply) => {
                for message in &reply.messages {
                    writeln!(writer, "{}", message.text())?;
                }
            }
        },
    }
    writer.flush()?;
    Ok(())
}
