pub mod format;
pub mod server;

use std::sync::Arc;

use rmcp::ServiceExt;
use tracing::{debug, info};

use folio::core::dispatch::Dispatcher;
use folio::core::prompt::ArgumentPolicy;
use folio::core::registry::ServerRegistry;
use server::FolioServer;

/// Serve `registry` over stdio. Blocks until the connection closes.
pub fn serve_stdio(registry: ServerRegistry, policy: ArgumentPolicy) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let name = registry.name().to_string();
        let server = FolioServer::new(Dispatcher::new(Arc::new(registry), policy));

        info!("{name} MCP server running on stdio");
        let service = server.serve(rmcp::transport::stdio()).await?;
        service.waiting().await?;
        debug!("{name} connection closed");

        Ok(())
    })
}
