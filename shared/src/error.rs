use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::team::TeamStatus;

/// Failures talking to the remote tournament service.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum ServiceError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("Network error: {0}")]
    Transport(String),

    /// The service answered with a non-success status code.
    #[error("Request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    /// The response body did not match any supported shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ServiceError {
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { code: 404, .. })
    }
}

impl From<JsonError> for ServiceError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Decode(errors.to_string())
    }
}

/// Reasons a review action was not carried out.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Team {team_id} is already {status}")]
    AlreadyInStatus { team_id: String, status: TeamStatus },

    #[error("Team {0} already has a status update in flight")]
    UpdateInFlight(String),

    #[error("Team {0} is not part of this applicant list")]
    UnknownTeam(String),

    #[error("Applicant list is still loading")]
    ListLoading,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ReviewError {
    /// Guard rejections never reach the network.
    pub fn is_suppressed(&self) -> bool {
        !matches!(self, Self::Service(_))
    }
}

/// Local export synthesis failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
