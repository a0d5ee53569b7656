// Tool invocation: lookup, URL construction, one outbound call

use crate::catalog::{ToolCatalog, ToolDescriptor};
use crate::config::BackendConfig;
use crate::error::{NorthwindError, NorthwindResult};
use crate::gateway::{ApiPayload, GatewayClient};
use crate::query::{build_url, ToolArguments};
use std::sync::Arc;

/// Shared by both front ends. Holds no mutable state, so concurrent calls
/// need no coordination.
#[derive(Debug, Clone)]
pub struct NorthwindService {
    catalog: Arc<ToolCatalog>,
    gateway: GatewayClient,
    config: BackendConfig,
}

impl NorthwindService {
    pub fn new(catalog: Arc<ToolCatalog>, config: BackendConfig) -> NorthwindResult<Self> {
        let gateway = GatewayClient::new(&config)?;
        Ok(Self {
            catalog,
            gateway,
            config,
        })
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Resolve a tool by name and forward the call.
    ///
    /// Configuration is checked before the lookup, so an unconfigured
    /// service reports `MissingBaseUrl` for every call.
    pub async fn invoke(&self, tool_name: &str, args: &ToolArguments) -> NorthwindResult<ApiPayload> {
        let base_url = self.config.base_url()?;
        let tool = self
            .catalog
            .find(tool_name)
            .ok_or_else(|| NorthwindError::UnknownTool(tool_name.to_string()))?;

        self.call(base_url, tool, args).await
    }

    /// Forward a call for an already resolved descriptor.
    pub async fn invoke_tool(
        &self,
        tool: &ToolDescriptor,
        args: &ToolArguments,
    ) -> NorthwindResult<ApiPayload> {
        let base_url = self.config.base_url()?;
        self.call(base_url, tool, args).await
    }

    async fn call(
        &self,
        base_url: &str,
        tool: &ToolDescriptor,
        args: &ToolArguments,
    ) -> NorthwindResult<ApiPayload> {
        let url = build_url(base_url, &tool.endpoint, args);
        tracing::debug!(tool = %tool.name, "Invoking tool");
        self.gateway.call(&url).await
    }
}
