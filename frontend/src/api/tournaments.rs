use crate::api::api_url;
use crate::api::utils::{
    authenticated_get, authenticated_patch, authenticated_post, expect_success, read_json,
    status_error, transport_error,
};
use async_trait::async_trait;
use log::debug;
use shared::service::paths;
use shared::{
    ApplicantsResponse, ContactRequest, ServiceError, StatusUpdateRequest, TeamDetailDto,
    TeamStatus, Tournament, TournamentDetails, TournamentService, TournamentSummary,
};

/// Browser client for the tournament service
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpTournamentService;

impl HttpTournamentService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl TournamentService for HttpTournamentService {
    async fn list_tournaments(&self) -> Result<Vec<Tournament>, ServiceError> {
        debug!("Fetching all tournaments");

        let response = authenticated_get(&api_url(paths::TOURNAMENTS))
            .send()
            .await
            .map_err(transport_error)?;
        let tournaments: Vec<Tournament> = read_json(response).await?;

        debug!("Successfully found {} tournaments", tournaments.len());
        Ok(tournaments)
    }

    async fn get_tournament(&self, tournament_id: &str) -> Result<TournamentSummary, ServiceError> {
        debug!("Fetching tournament {}", tournament_id);

        let response = authenticated_get(&api_url(&paths::tournament(tournament_id)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn get_tournament_details(
        &self,
        tournament_id: &str,
    ) -> Result<TournamentDetails, ServiceError> {
        debug!("Fetching details for tournament {}", tournament_id);

        let response = authenticated_get(&api_url(&paths::tournament(tournament_id)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn get_applicants(&self, tournament_id: &str) -> Result<ApplicantsResponse, ServiceError> {
        debug!("Fetching applicants for tournament {}", tournament_id);

        let response = authenticated_get(&api_url(&paths::applicants(tournament_id)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn update_applicant_status(
        &self,
        tournament_id: &str,
        team_id: &str,
        status: TeamStatus,
    ) -> Result<(), ServiceError> {
        debug!(
            "Setting team {} to {} in tournament {}",
            team_id, status, tournament_id
        );

        let response = authenticated_patch(&api_url(&paths::applicant_status(tournament_id, team_id)))
            .json(&StatusUpdateRequest { status })
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        expect_success(response).await
    }

    async fn export_applicants(&self, tournament_id: &str) -> Result<Vec<u8>, ServiceError> {
        debug!("Requesting applicant export for tournament {}", tournament_id);

        let response = authenticated_get(&api_url(&paths::applicants_export(tournament_id)))
            .send()
            .await
            .map_err(transport_error)?;
        if !response.ok() {
            return Err(status_error(response).await);
        }

        let bytes = response.binary().await.map_err(transport_error)?;
        debug!("Export returned {} bytes", bytes.len());
        Ok(bytes)
    }

    async fn get_team_detail(
        &self,
        tournament_id: &str,
        team_id: &str,
    ) -> Result<TeamDetailDto, ServiceError> {
        debug!("Fetching team {} for tournament {}", team_id, tournament_id);

        let response = authenticated_get(&api_url(&paths::applicant_team(tournament_id, team_id)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn contact_team(&self, team_id: &str, request: &ContactRequest) -> Result<(), ServiceError> {
        debug!("Contacting captain of team {}", team_id);

        let response = authenticated_post(&api_url(&paths::team_contact(team_id)))
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        expect_success(response).await
    }
}
