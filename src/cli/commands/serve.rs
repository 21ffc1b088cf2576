use crate::cli::Context;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    crate::mcp::serve_stdio(registry, ctx.policy)
}
