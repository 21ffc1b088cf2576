use folio::core::dispatch::Request;

use crate::cli::Context;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let response = ctx.dispatch(Request::ListPrompts)?;
    crate::cli::output::output_response(&response, ctx.format, &mut std::io::stdout())
}
