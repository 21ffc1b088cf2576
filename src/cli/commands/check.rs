use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::{Context, OutputFormat};
use folio::catalogs::Catalog;

#[derive(Serialize)]
struct CheckReport {
    catalog: Catalog,
    server: &'static str,
    resources: usize,
    prompts: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let reports: Vec<CheckReport> = Catalog::ALL
        .into_iter()
        .map(|catalog| match ctx.registry_for(catalog) {
            Ok(registry) => CheckReport {
                catalog,
                server: catalog.server_name(),
                resources: registry.manifest().len(),
                prompts: registry.prompts().len(),
                error: None,
            },
            Err(e) => CheckReport {
                catalog,
                server: catalog.server_name(),
                resources: 0,
                prompts: 0,
                error: Some(format!("{e:#}")),
            },
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), &reports)?;
            println!();
        }
        OutputFormat::Human => {
            for r in &reports {
                let name = serde_plain::to_string(&r.catalog).unwrap_or_else(|_| r.server.into());
                match &r.error {
                    None => println!(
                        "  {} {} [{}] ({} resources, {} prompts)",
                        "ok:".green().bold(),
                        r.server,
                        name.dimmed(),
                        r.resources,
                        r.prompts,
                    ),
                    Some(e) => println!(
                        "  {} {} [{}]: {}",
                        "failed:".red().bold(),
                        r.server,
                        name.dimmed(),
                        e
                    ),
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} catalog(s) failed validation");
    }
    Ok(())
}
