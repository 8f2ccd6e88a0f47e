use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::game::Game;
use crate::models::player::TeamMember;
use crate::models::team::TeamStatus;

/// Full team record returned by the applicant detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub team_name: String,
    #[serde(rename = "captainId")]
    pub captain: TeamMember,
    #[serde(default)]
    pub players: Vec<TeamMember>,
    pub game: Game,
    #[serde(default)]
    pub invite_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<TeamStatus>,
    #[serde(default)]
    pub average_trust_score: Option<f64>,
}

impl TeamDetailDto {
    /// Roster size including the captain
    pub fn total_players(&self) -> usize {
        self.players.len() + 1
    }

    /// Captain first, then the rest of the roster
    pub fn members(&self) -> impl Iterator<Item = &TeamMember> {
        std::iter::once(&self.captain).chain(self.players.iter())
    }

    /// The reported average, or the rounded mean of every rated member
    pub fn effective_trust_score(&self) -> f64 {
        if let Some(score) = self.average_trust_score {
            return score;
        }
        let scores: Vec<f64> = self.members().filter_map(TeamMember::rated_score).collect();
        if scores.is_empty() {
            return 0.0;
        }
        (scores.iter().sum::<f64>() / scores.len() as f64).round()
    }

    pub fn is_captain(&self, member: &TeamMember) -> bool {
        member.id == self.captain.id
    }
}
