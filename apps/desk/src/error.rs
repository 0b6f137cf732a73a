//! # Desk Errors
//!
//! `ConfigError` covers loading `hearth.toml`; `ApiError` is what every
//! fallible command returns.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in hearth-desk                            │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── CoreError::LineNotFound ─────────────► NOT_FOUND            │
//! │         ├── CoreError::CartTooLarge / DuplicateLine ► CART_ERROR        │
//! │         ├── ValidationError / QuantityTooLarge ──► VALIDATION_ERROR     │
//! │         ├── ConfigError ─────────────────────────► CONFIG_ERROR         │
//! │         ├── serde_json::Error ───────────────────► INVALID_INPUT        │
//! │         └── std::io::Error ──────────────────────► IO_ERROR             │
//! │                                                                         │
//! │  CLI prints:  [NotFound] Cart line not found: 3f2a...                   │
//! │  JSON form:   { "code": "NOT_FOUND", "message": "..." }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use hearth_core::{CoreError, ValidationError};

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading or validating [`crate::state::DeskConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from desk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: HG-404"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Cart limit reached
    CartError,

    /// Configuration could not be loaded
    ConfigError,

    /// Input file is not valid JSON for the expected shape
    InvalidInput,

    /// Reading or writing a file failed
    IoError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineNotFound(id) => ApiError::not_found("Cart line", &id),
            CoreError::CartTooLarge { max } => ApiError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {} lines", max),
            ),
            err @ CoreError::DuplicateLine(_) => ApiError::new(ErrorCode::CartError, err.to_string()),
            err @ CoreError::QuantityTooLarge { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failure: {}", err);
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::InvalidInput, format!("Invalid JSON: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::LineNotFound("abc".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Cart line not found: abc");

        let err: ApiError = CoreError::CartTooLarge { max: 200 }.into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::DuplicateLine("HG-1".to_string()).into();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Product HG-1 already has a line in the cart");

        let err: ApiError = CoreError::QuantityTooLarge {
            requested: 1_000_000,
            max: 999_999,
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity is required");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", "HG-404");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: HG-404");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("bad");
        assert_eq!(err.to_string(), "[ValidationError] bad");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::invalid("catalog.page_size", "must be between 1 and 200");
        assert_eq!(
            err.to_string(),
            "Invalid config value for catalog.page_size: must be between 1 and 200"
        );
        let api: ApiError = err.into();
        assert_eq!(api.code, ErrorCode::ConfigError);
    }
}
