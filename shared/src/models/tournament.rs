use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a tournament as reported by the service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TournamentStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "closed")]
    Closed,
    #[serde(rename = "upcoming")]
    Upcoming,
    #[serde(rename = "ongoing")]
    Ongoing,
    #[serde(rename = "other", other)]
    Other,
}

impl TournamentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Open => "Open",
            TournamentStatus::Closed => "Closed",
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::Ongoing => "Ongoing",
            TournamentStatus::Other => "Other",
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The subset of a tournament the applicant views need
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    /// Free-form game label as entered by the organizer
    pub game: String,
    pub status: TournamentStatus,
    pub max_players: u32,
    #[serde(default)]
    pub current_registrations: u32,
}

impl TournamentSummary {
    pub fn is_full(&self) -> bool {
        self.max_players > 0 && self.current_registrations >= self.max_players
    }
}

/// A tournament as listed on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub game: String,
    pub status: TournamentStatus,
    pub date: DateTime<Utc>,
    pub max_players: u32,
    #[serde(default)]
    pub prize_pool: String,
    #[serde(default)]
    pub trust_score_threshold: u32,
    pub registration_deadline: DateTime<Utc>,
    #[serde(default)]
    pub current_registrations: u32,
}

impl Tournament {
    pub fn is_full(&self) -> bool {
        self.max_players > 0 && self.current_registrations >= self.max_players
    }

    /// Registration progress as a percentage, capped at 100
    pub fn fill_percent(&self) -> u32 {
        if self.max_players == 0 {
            return 0;
        }
        let percent = u64::from(self.current_registrations) * 100 / u64::from(self.max_players);
        percent.min(100) as u32
    }
}

/// One stage of a tournament's published schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleStage {
    pub stage: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub teams: u32,
}

/// The full record behind `GET /api/tournament/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentDetails {
    #[serde(flatten)]
    pub tournament: Tournament,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub schedule: Vec<ScheduleStage>,
}

impl TournamentDetails {
    /// Applications are only taken while the tournament is open
    pub fn accepts_registrations(&self) -> bool {
        self.tournament.status == TournamentStatus::Open && !self.tournament.is_full()
    }
}

impl From<&Tournament> for TournamentSummary {
    fn from(tournament: &Tournament) -> Self {
        Self {
            id: tournament.id.clone(),
            title: tournament.title.clone(),
            game: tournament.game.clone(),
            status: tournament.status,
            max_players: tournament.max_players,
            current_registrations: tournament.current_registrations,
        }
    }
}
