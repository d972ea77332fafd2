use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{provider::ProviderError, request::InvalidInput, selector::SelectionError};

/// Step of the pipeline where a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Validation,
    Ordering,
    Routing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Stage::Validation => "validation",
                Stage::Ordering => "ordering",
                Stage::Routing => "routing",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    ProviderUnavailable,
    ProviderError,
    InternalError,
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("{stage} failed, routing provider unavailable: {message}")]
    ProviderUnavailable { stage: Stage, message: String },

    #[error("{stage} failed, routing provider error: {message}")]
    ProviderError {
        stage: Stage,
        code: Option<String>,
        message: String,
    },

    #[error("{stage} failed, internal error: {message}")]
    Internal { stage: Stage, message: String },
}

impl PlanError {
    pub fn provider(stage: Stage, error: ProviderError) -> Self {
        match error {
            ProviderError::Unavailable { message } => {
                PlanError::ProviderUnavailable { stage, message }
            }
            ProviderError::Failed { code, message } => PlanError::ProviderError {
                stage,
                code,
                message,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::InvalidInput(_) => ErrorKind::InvalidInput,
            PlanError::ProviderUnavailable { .. } => ErrorKind::ProviderUnavailable,
            PlanError::ProviderError { .. } => ErrorKind::ProviderError,
            PlanError::Internal { .. } => ErrorKind::InternalError,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            PlanError::InvalidInput(_) => Stage::Validation,
            PlanError::ProviderUnavailable { stage, .. }
            | PlanError::ProviderError { stage, .. }
            | PlanError::Internal { stage, .. } => *stage,
        }
    }

    /// Error code reported by the provider, e.g. `NoRoute` for OSRM.
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            PlanError::ProviderError { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

impl From<SelectionError> for PlanError {
    fn from(error: SelectionError) -> Self {
        PlanError::Internal {
            stage: Stage::Ordering,
            message: error.to_string(),
        }
    }
}
