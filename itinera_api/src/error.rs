use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itinera_core::error::{ErrorKind, PlanError, Stage};
use serde::Serialize;
use tracing::warn;

const NO_ROUTE_CODE: &str = "NoRoute";

pub enum ApiError {
    Plan(PlanError),
    /// The body could not be read as a route request.
    Rejected(JsonRejection),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    kind: ErrorKind,
    stage: Stage,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_code: Option<String>,
}

impl From<PlanError> for ApiError {
    fn from(error: PlanError) -> Self {
        ApiError::Plan(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection)
    }
}

fn status_of(error: &PlanError) -> StatusCode {
    match error.kind() {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::ProviderError if error.provider_code() == Some(NO_ROUTE_CODE) => {
            StatusCode::NOT_FOUND
        }
        ErrorKind::ProviderUnavailable | ErrorKind::ProviderError => StatusCode::BAD_GATEWAY,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Plan(error) => {
                let status = status_of(&error);
                warn!(%error, %status, "route request failed");

                (
                    status,
                    ErrorBody {
                        kind: error.kind(),
                        stage: error.stage(),
                        provider_code: error.provider_code().map(str::to_owned),
                        message: error.to_string(),
                    },
                )
            }
            ApiError::Rejected(rejection) => (
                rejection.status(),
                ErrorBody {
                    kind: ErrorKind::InvalidInput,
                    stage: Stage::Validation,
                    provider_code: None,
                    message: rejection.body_text(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
