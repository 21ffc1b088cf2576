use crate::cli::{Context, OutputFormat};

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), &ctx.cfg)?;
            println!();
        }
        OutputFormat::Human => {
            let toml_str = toml::to_string_pretty(&ctx.cfg)?;
            println!("{}", toml_str);
        }
    }

    Ok(())
}
