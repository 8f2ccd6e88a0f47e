pub mod models {
    pub mod game;
    pub mod player;
    pub mod team;
    pub mod tournament;
}

pub mod dto {
    pub mod applicants;
    pub mod common;
    pub mod team;
}

pub mod error;
pub mod listing;
pub mod review;
pub mod service;

// Re-export commonly used items
pub use error::{ExportError, Result, ReviewError, ServiceError};

// Re-export models
pub use models::{
    game::Game,
    player::TeamMember,
    team::{ReviewDecision, Team, TeamStatus, TrustTier},
    tournament::{ScheduleStage, Tournament, TournamentDetails, TournamentStatus, TournamentSummary},
};

// Re-export DTOs
pub use dto::{
    applicants::{ApplicantsResponse, ContactRequest, StatusUpdateRequest},
    common::ErrorResponse,
    team::TeamDetailDto,
};

pub use service::TournamentService;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decision_targets() {
        let targets: Vec<TeamStatus> = ReviewDecision::ALL
            .iter()
            .map(|decision| decision.target_status())
            .collect();
        assert_eq!(
            targets,
            [TeamStatus::Approved, TeamStatus::Rejected, TeamStatus::Flagged]
        );
        assert!(!targets.contains(&TeamStatus::Pending));
    }

    #[test]
    fn test_review_error_suppression() {
        assert!(ReviewError::UpdateInFlight("t1".to_string()).is_suppressed());
        assert!(ReviewError::ListLoading.is_suppressed());
        assert!(!ReviewError::Service(ServiceError::Decode("bad".to_string())).is_suppressed());
    }
}
