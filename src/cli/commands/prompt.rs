use folio::core::dispatch::Request;

use crate::cli::Context;

#[derive(clap::Args)]
pub struct PromptArgs {
    /// Prompt name
    pub name: String,

    /// Prompt argument as key=value (repeatable)
    #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub args: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn run(args: PromptArgs, ctx: &Context) -> anyhow::Result<()> {
    let response = ctx.dispatch(Request::GetPrompt {
        name: args.name,
        arguments: args.args.into_iter().collect(),
    })?;
    crate::cli::output::output_response(&response, ctx.format, &mut std::io::stdout())
}
