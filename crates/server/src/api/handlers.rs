use super::{ApiError, ApiResult};
use crate::config::AppState;
use axum::{body::Bytes, extract::State, Json};
use northwind_core::catalog::{CATALOG_DESCRIPTION, CATALOG_NAME};
use northwind_core::{ApiPayload, ToolArguments, ToolDescriptor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Dump the tool catalog. Does not touch the backend.
pub async fn get_schema(State(state): State<Arc<AppState>>) -> Json<SchemaResponse> {
    Json(SchemaResponse {
        name: CATALOG_NAME.to_string(),
        description: CATALOG_DESCRIPTION.to_string(),
        tools: state.service.catalog().list().to_vec(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub name: String,
    pub description: String,
    pub tools: Vec<ToolDescriptor>,
}

/// Run a tool and relay the backend payload
///
/// The body is parsed by hand so that every malformed request gets the same
/// 400 `{"Error": ...}` shape.
pub async fn run_tool(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ApiPayload>> {
    let req: RunToolRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))?;

    let tool = req
        .tool
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing tool name"))?;
    let args = ToolArguments::from_json(req.params)?;

    tracing::info!("Running tool {} with {} params", tool, args.len());

    let payload = state.service.invoke(&tool, &args).await?;
    Ok(Json(payload))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunToolRequest {
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default)]
    pub params: serde_json::Value,
}
