pub mod commands;
pub mod display;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use folio::catalogs::Catalog;
use folio::collections;
use folio::config::types::FolioConfig;
use folio::core::dispatch::{Dispatcher, Request, Response};
use folio::core::prompt::ArgumentPolicy;
use folio::core::registry::ServerRegistry;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Static documentation catalogs served over MCP.",
    version
)]
pub struct Cli {
    /// Config file (default: ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog to serve or inspect (overrides config)
    #[arg(long, global = true, value_enum)]
    pub catalog: Option<Catalog>,

    /// How to handle a missing required prompt argument (overrides config)
    #[arg(long, global = true, value_enum)]
    pub argument_policy: Option<ArgumentPolicy>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the catalog over stdio (the default)
    Serve,
    /// List the catalog's resources
    List,
    /// Print one resource by URI
    Read(commands::read::ReadArgs),
    /// List the catalog's prompts
    Prompts,
    /// Render one prompt
    Prompt(commands::prompt::PromptArgs),
    /// Validate every built-in catalog
    Check,
    /// Show current configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Effective settings after merging flags over config.
pub struct Context {
    pub cfg: FolioConfig,
    pub catalog: Catalog,
    pub policy: ArgumentPolicy,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(cli: &Cli, cfg: FolioConfig) -> Self {
        Self {
            catalog: cli.catalog.unwrap_or(cfg.server.catalog),
            policy: cli.argument_policy.unwrap_or(cfg.server.argument_policy),
            format: cli.format,
            cfg,
        }
    }

    /// Build `catalog` with the configured collections added.
    pub fn registry_for(&self, catalog: Catalog) -> anyhow::Result<ServerRegistry> {
        let builder = collections::apply(catalog.builder(), &self.cfg.collections)?;
        Ok(builder.build()?)
    }

    pub fn registry(&self) -> anyhow::Result<ServerRegistry> {
        self.registry_for(self.catalog)
    }

    /// Run one request against the selected catalog.
    pub fn dispatch(&self, request: Request) -> anyhow::Result<Response> {
        let dispatcher = Dispatcher::new(Arc::new(self.registry()?), self.policy);
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(rt.block_on(dispatcher.handle(request))?)
    }
}

/// Dispatch a CLI command.
pub fn run(cli: Cli, cfg: FolioConfig) -> anyhow::Result<()> {
    let ctx = Context::new(&cli, cfg);

    match cli.command {
        None | Some(Commands::Serve) => commands::serve::run(&ctx),
        Some(Commands::List) => commands::list::run(&ctx),
        Some(Commands::Read(args)) => commands::read::run(args, &ctx),
        Some(Commands::Prompts) => commands::prompts::run(&ctx),
        Some(Commands::Prompt(args)) => commands::prompt::run(args, &ctx),
        Some(Commands::Check) => commands::check::run(&ctx),
        Some(Commands::Config) => commands::config::run(&ctx),
    }
}
