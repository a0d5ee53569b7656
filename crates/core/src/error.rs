//! Error types shared by both front ends.

/// Result type for Northwind operations.
pub type NorthwindResult<T> = Result<T, NorthwindError>;

/// Coarse failure classes. Front ends decide how each class is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Required backend configuration is absent or unusable.
    Configuration,
    /// The caller sent something we cannot act on.
    ClientInput,
    /// The backend could not be reached or its body could not be read.
    Upstream,
    /// The result could not be serialized for transport.
    Encoding,
}

/// Errors that can occur while resolving and forwarding a tool call.
#[derive(Debug, thiserror::Error)]
pub enum NorthwindError {
    /// `NORTHWIND_API` is not set.
    #[error("Environment variable NORTHWIND_API is not configured")]
    MissingBaseUrl,

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No tool with this name is registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// An argument value cannot be placed in a query string.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Outbound request failed before a full response body was read.
    #[error("API call failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization error.
    #[error("Failed to convert API response to JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

impl NorthwindError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingBaseUrl | Self::Config(_) => ErrorCategory::Configuration,
            Self::UnknownTool(_) | Self::InvalidArgument { .. } => ErrorCategory::ClientInput,
            Self::Transport(_) => ErrorCategory::Upstream,
            Self::Encode(_) => ErrorCategory::Encoding,
        }
    }

    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
