use clap::Parser;

use folio::{config, logging};

mod cli;
mod mcp;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let cfg = config::load_config(args.config.as_deref())?;
    logging::init(&cfg.logging.level);

    cli::run(args, cfg)
}
