use rmcp::model::{
    ErrorData, GetPromptRequestParams, GetPromptResult, Implementation, ListPromptsResult,
    ListResourcesResult, PaginatedRequestParams, ReadResourceRequestParams, ReadResourceResult,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};

use folio::core::dispatch::Dispatcher;

use super::format;

/// rmcp handler for one content server. Cheap to clone.
#[derive(Clone)]
pub struct FolioServer {
    dispatcher: Dispatcher,
}

impl FolioServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl ServerHandler for FolioServer {
    fn get_info(&self) -> ServerInfo {
        let registry = self.dispatcher.registry();
        let mut server_info = Implementation::from_build_env();
        server_info.name = registry.name().to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            instructions: registry.instructions().map(str::to_string),
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .build(),
            server_info,
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(format::resource_list(self.dispatcher.list_resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.dispatcher
            .read_resource(&request.uri)
            .await
            .map(format::read_result)
            .map_err(|e| format::error_data(&e))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(format::prompt_list(self.dispatcher.list_prompts()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        let arguments = format::prompt_arguments(request.arguments);
        self.dispatcher
            .get_prompt(&request.name, &arguments)
            .map(format::prompt_result)
            .map_err(|e| format::error_data(&e))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use folio::catalogs::Catalog;
    use folio::core::prompt::ArgumentPolicy;

    #[test]
    fn info_advertises_resources_and_prompts() {
        let registry = Catalog::Template.registry().unwrap();
        let server = FolioServer::new(Dispatcher::new(Arc::new(registry), ArgumentPolicy::Strict));
        let info = server.get_info();

        assert_eq!(info.server_info.name, "template-server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.tools.is_none());
        assert!(info.instructions.unwrap().contains("template://conventions/naming"));
    }
}
