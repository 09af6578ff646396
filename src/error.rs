use crate::auth::AuthError;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Configuration key or field that caused the error (e.g. `API_HOST`)
    pub field_path: Option<String>,
    /// Additional context about the error (e.g. expected format, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g. "config", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for the GigaChat client.
///
/// Every layer surfaces failures to its immediate caller; nothing is retried
/// automatically. The outermost caller decides how to log or report.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value is absent or malformed. Raised before
    /// any network call is attempted.
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Token endpoint failure (transport, HTTP status or response shape).
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Channel establishment or TLS failure.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote service rejected the bearer token.
    #[error("Authorization rejected by remote service: {0}")]
    Authorization(String),

    /// Business-level error surfaced by the chat service.
    #[error("Remote service error ({code:?}): {message}")]
    Remote { code: tonic::Code, message: String },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context.
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// True when the remote side rejected the call for credential reasons.
    pub fn is_authorization(&self) -> bool {
        matches!(self, Error::Authorization(_))
    }
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::Unauthenticated | tonic::Code::PermissionDenied => {
                Error::Authorization(status.message().to_string())
            }
            code => Error::Remote {
                code,
                message: status.message().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_status_maps_to_authorization() {
        let err: Error = tonic::Status::unauthenticated("token expired").into();
        assert!(err.is_authorization());
    }

    #[test]
    fn other_status_maps_to_remote() {
        let err: Error = tonic::Status::invalid_argument("bad request").into();
        match err {
            Error::Remote { code, message } => {
                assert_eq!(code, tonic::Code::InvalidArgument);
                assert_eq!(message, "bad request");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
