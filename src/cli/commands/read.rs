use folio::core::dispatch::Request;

use crate::cli::Context;

#[derive(clap::Args)]
pub struct ReadArgs {
    /// Resource URI, e.g. mcp-meta://architecture/ecosystem-overview
    pub uri: String,
}

pub fn run(args: ReadArgs, ctx: &Context) -> anyhow::Result<()> {
    let response = ctx.dispatch(Request::ReadResource { uri: args.uri })?;
    crate::cli::output::output_response(&response, ctx.format, &mut std::io::stdout())
}
