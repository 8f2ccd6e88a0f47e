use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::models::game::Game;

/// Review state of an applicant team.
///
/// `applied` and `accepted` are an older vocabulary still emitted by some
/// endpoints; they are read as `pending` and `approved`. Writes always use
/// the four values below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TeamStatus {
    #[serde(rename = "pending", alias = "applied")]
    Pending,
    #[serde(rename = "approved", alias = "accepted")]
    Approved,
    #[serde(rename = "rejected")]
    Rejected,
    #[serde(rename = "flagged")]
    Flagged,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Pending => "pending",
            TeamStatus::Approved => "approved",
            TeamStatus::Rejected => "rejected",
            TeamStatus::Flagged => "flagged",
        }
    }

    /// Capitalized form used in badges and dropdowns
    pub fn label(&self) -> &'static str {
        match self {
            TeamStatus::Pending => "Pending",
            TeamStatus::Approved => "Approved",
            TeamStatus::Rejected => "Rejected",
            TeamStatus::Flagged => "Flagged",
        }
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An organizer's verdict on an application. Teams can never be moved back
/// to `pending` from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewDecision {
    Approve,
    Reject,
    Flag,
}

impl ReviewDecision {
    pub const ALL: [ReviewDecision; 3] = [
        ReviewDecision::Approve,
        ReviewDecision::Reject,
        ReviewDecision::Flag,
    ];

    pub fn target_status(&self) -> TeamStatus {
        match self {
            ReviewDecision::Approve => TeamStatus::Approved,
            ReviewDecision::Reject => TeamStatus::Rejected,
            ReviewDecision::Flag => TeamStatus::Flagged,
        }
    }

    /// Tooltip text for the row action
    pub fn action_label(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Approve Team",
            ReviewDecision::Reject => "Reject Team",
            ReviewDecision::Flag => "Flag Team",
        }
    }
}

impl From<ReviewDecision> for TeamStatus {
    fn from(decision: ReviewDecision) -> Self {
        decision.target_status()
    }
}

/// Colour band for a trust score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustTier {
    High,
    Medium,
    Low,
}

impl TrustTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 800.0 {
            TrustTier::High
        } else if score >= 750.0 {
            TrustTier::Medium
        } else {
            TrustTier::Low
        }
    }
}

/// A team that applied to a tournament, as listed on the applicants page
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,

    pub team_name: String,

    pub game: Game,

    /// Captain display name
    pub captain: String,

    pub player_count: u32,

    #[validate(range(
        min = 0.0,
        max = 1000.0,
        message = "Average trust score must be between 0 and 1000"
    ))]
    pub average_trust_score: f64,

    pub status: TeamStatus,

    pub joined_at: DateTime<Utc>,
}

impl Team {
    pub fn trust_tier(&self) -> TrustTier {
        TrustTier::for_score(self.average_trust_score)
    }

    /// Trust score as shown in tables and exports
    pub fn display_trust_score(&self) -> String {
        format!("{}", self.average_trust_score.round() as i64)
    }

    /// Whether `decision` would change anything for this team
    pub fn accepts(&self, decision: ReviewDecision) -> bool {
        self.status != decision.target_status()
    }
}
