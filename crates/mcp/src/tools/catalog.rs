// Catalog tools: one MCP tool per Northwind API endpoint

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_open_object, Tool, ToolRegistry};
use anyhow::Result;
use northwind_core::{NorthwindResult, NorthwindService, ToolArguments, ToolDescriptor};
use std::sync::Arc;

/// Forwards calls for a single catalog entry to the backend.
///
/// Every outcome, including misconfiguration and backend failures, comes
/// back as a successful result with readable text so the agent always gets
/// something it can show.
pub struct CatalogTool {
    descriptor: ToolDescriptor,
    service: Arc<NorthwindService>,
}

impl CatalogTool {
    pub fn new(descriptor: ToolDescriptor, service: Arc<NorthwindService>) -> Self {
        Self {
            descriptor,
            service,
        }
    }

    async fn run(&self, arguments: serde_json::Value) -> NorthwindResult<String> {
        let args = ToolArguments::from_json(arguments)?;
        let payload = self.service.invoke_tool(&self.descriptor, &args).await?;
        payload.to_pretty_json()
    }
}

#[async_trait::async_trait]
impl Tool for CatalogTool {
    fn schema(&self) -> ToolSchema {
        // Parameters are documented in the description only
        ToolSchema {
            name: self.descriptor.name.clone(),
            description: self.descriptor.description.clone(),
            input_schema: json_schema_open_object(),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let text = match self.run(arguments).await {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Tool {} failed: {}", self.descriptor.name, e);
                e.to_string()
            }
        };

        Ok(CallToolResult::text(text))
    }
}

/// Build a registry holding one tool per catalog entry.
pub fn catalog_registry(service: Arc<NorthwindService>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for descriptor in service.catalog().list() {
        registry.register(Arc::new(CatalogTool::new(
            descriptor.clone(),
            service.clone(),
        )));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;
    use northwind_core::{BackendConfig, ToolCatalog};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(base_url: Option<String>) -> Arc<NorthwindService> {
        let config = BackendConfig {
            base_url,
            ..Default::default()
        };
        Arc::new(NorthwindService::new(Arc::new(ToolCatalog::northwind()), config).unwrap())
    }

    fn text_of(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        match &result.content[0] {
            ToolContent::Text { text } => text,
        }
    }

    #[test]
    fn test_registry_mirrors_catalog() {
        let service = service(None);
        let registry = catalog_registry(service.clone());

        assert_eq!(registry.len(), service.catalog().len());
        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        let expected: Vec<String> = service.catalog().list().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_schema_has_no_declared_parameters() {
        let registry = catalog_registry(service(None));
        let schema = registry.get("get_customers").unwrap().schema();
        assert!(schema.description.starts_with("Retrieve all customer records."));
        assert_eq!(schema.input_schema["type"], "object");
        assert!(schema.input_schema.get("properties").is_none());
    }

    #[tokio::test]
    async fn test_execute_returns_pretty_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customers"))
            .and(query_param("country", "USA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"x": 1})))
            .mount(&server)
            .await;

        let registry = catalog_registry(service(Some(server.uri())));
        let result = registry
            .get("get_customers")
            .unwrap()
            .execute(serde_json::json!({"country": "USA"}))
            .await
            .unwrap();

        assert_eq!(text_of(&result), "{\n  \"x\": 1\n}");
    }

    #[tokio::test]
    async fn test_execute_text_backend_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/summary/sales-by-year"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let registry = catalog_registry(service(Some(server.uri())));
        let result = registry
            .get("get_sales_by_year")
            .unwrap()
            .execute(serde_json::Value::Null)
            .await
            .unwrap();

        assert_eq!(text_of(&result), "\"hello\"");
    }

    #[tokio::test]
    async fn test_missing_base_url_is_text() {
        let registry = catalog_registry(service(None));
        let result = registry
            .get("get_orders")
            .unwrap()
            .execute(serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(
            text_of(&result),
            "Environment variable NORTHWIND_API is not configured"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_text() {
        let registry = catalog_registry(service(Some("http://127.0.0.1:1".to_string())));
        let result = registry
            .get("get_products")
            .unwrap()
            .execute(serde_json::json!({}))
            .await
            .unwrap();

        assert!(text_of(&result).starts_with("API call failed: "));
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_text() {
        let registry = catalog_registry(service(Some("http://api.example".to_string())));
        let result = registry
            .get("get_products")
            .unwrap()
            .execute(serde_json::json!({"product_id": [1, 2]}))
            .await
            .unwrap();

        assert!(text_of(&result).starts_with("Invalid argument 'product_id'"));
    }
}
