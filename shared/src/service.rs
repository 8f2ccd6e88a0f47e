//! Contract with the remote tournament/team service.
//!
//! The browser client in `frontend` implements [`TournamentService`] over
//! HTTP; tests implement it in memory. Futures are `?Send` because browser
//! fetches are tied to the JS event loop.

use async_trait::async_trait;

use crate::dto::applicants::{ApplicantsResponse, ContactRequest};
use crate::dto::team::TeamDetailDto;
use crate::error::Result;
use crate::models::team::TeamStatus;
use crate::models::tournament::{Tournament, TournamentDetails, TournamentSummary};

#[async_trait(?Send)]
pub trait TournamentService {
    /// `GET /api/tournament`
    async fn list_tournaments(&self) -> Result<Vec<Tournament>>;

    /// `GET /api/tournament/{id}`, decoded as the summary the applicant views need
    async fn get_tournament(&self, tournament_id: &str) -> Result<TournamentSummary>;

    /// `GET /api/tournament/{id}`, decoded as the full record
    async fn get_tournament_details(&self, tournament_id: &str) -> Result<TournamentDetails>;

    /// `GET /api/tournament/{id}/applicants`
    async fn get_applicants(&self, tournament_id: &str) -> Result<ApplicantsResponse>;

    /// `PATCH /api/tournament/{id}/applicants/{teamId}/status`
    async fn update_applicant_status(
        &self,
        tournament_id: &str,
        team_id: &str,
        status: TeamStatus,
    ) -> Result<()>;

    /// `GET /api/tournament/{id}/applicants/export`
    async fn export_applicants(&self, tournament_id: &str) -> Result<Vec<u8>>;

    /// `GET /api/tournament/{id}/applicants/teams/{teamId}`
    async fn get_team_detail(&self, tournament_id: &str, team_id: &str) -> Result<TeamDetailDto>;

    /// `POST /api/teams/{teamId}/contact`
    async fn contact_team(&self, team_id: &str, request: &ContactRequest) -> Result<()>;
}

/// Path builders for the service routes
pub mod paths {
    pub const TOURNAMENTS: &str = "/api/tournament";

    pub fn tournament(tournament_id: &str) -> String {
        format!("{}/{}", TOURNAMENTS, tournament_id)
    }

    pub fn applicants(tournament_id: &str) -> String {
        format!("{}/applicants", tournament(tournament_id))
    }

    pub fn applicant_status(tournament_id: &str, team_id: &str) -> String {
        format!("{}/{}/status", applicants(tournament_id), team_id)
    }

    pub fn applicants_export(tournament_id: &str) -> String {
        format!("{}/export", applicants(tournament_id))
    }

    pub fn applicant_team(tournament_id: &str, team_id: &str) -> String {
        format!("{}/teams/{}", applicants(tournament_id), team_id)
    }

    pub fn team_contact(team_id: &str) -> String {
        format!("/api/teams/{}/contact", team_id)
    }
}
