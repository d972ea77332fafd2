use itinera_core::{cost_matrix::CostMatrixError, provider::ProviderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OSRM error {status} ({}): {message}", .code.as_deref().unwrap_or("no code"))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Incomplete response: missing {0}")]
    IncompleteResponse(&'static str),

    #[error("Invalid {field} in response: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Unusable table: {0}")]
    Table(#[from] CostMatrixError),
}

impl From<OsrmError> for ProviderError {
    fn from(error: OsrmError) -> Self {
        match error {
            // Anything but a malformed request means we never got a usable
            // answer from the server: refused connection, timeout, dropped body.
            OsrmError::Request(error) if !error.is_builder() => ProviderError::Unavailable {
                message: error.to_string(),
            },
            OsrmError::Api { code, message, .. } => ProviderError::Failed { code, message },
            other => ProviderError::Failed {
                code: None,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_osrm_code() {
        let error = ProviderError::from(OsrmError::Api {
            status: 400,
            code: Some("NoRoute".to_string()),
            message: "Impossible route between points".to_string(),
        });

        assert_eq!(
            error,
            ProviderError::Failed {
                code: Some("NoRoute".to_string()),
                message: "Impossible route between points".to_string(),
            }
        );
    }

    #[test]
    fn should_treat_incomplete_payload_as_failure() {
        let error = ProviderError::from(OsrmError::IncompleteResponse("geometry"));

        assert!(matches!(error, ProviderError::Failed { code: None, .. }));
    }
}
