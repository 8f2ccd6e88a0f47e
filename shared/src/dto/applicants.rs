use serde::{Deserialize, Serialize};

use crate::models::team::{Team, TeamStatus};

/// The two shapes the applicants endpoint is known to return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApplicantsResponse {
    Bare(Vec<Team>),
    Wrapped { teams: Vec<Team> },
}

impl ApplicantsResponse {
    /// Flattens either shape into the ordered team list
    pub fn into_teams(self) -> Vec<Team> {
        match self {
            ApplicantsResponse::Bare(teams) => teams,
            ApplicantsResponse::Wrapped { teams } => teams,
        }
    }
}

impl From<ApplicantsResponse> for Vec<Team> {
    fn from(response: ApplicantsResponse) -> Self {
        response.into_teams()
    }
}

/// Body of the status PATCH
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdateRequest {
    pub status: TeamStatus,
}

/// Body of the contact POST
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub subject: String,
    pub tournament_id: String,
}
