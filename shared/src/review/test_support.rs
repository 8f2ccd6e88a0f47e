//! In-memory service and fixtures for review workflow tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futures::channel::oneshot;

use crate::dto::applicants::{ApplicantsResponse, ContactRequest};
use crate::dto::team::TeamDetailDto;
use crate::error::{Result, ServiceError};
use crate::models::game::Game;
use crate::models::player::TeamMember;
use crate::models::team::{Team, TeamStatus};
use crate::models::tournament::{
    Tournament, TournamentDetails, TournamentStatus, TournamentSummary,
};
use crate::review::state::ApplicantReview;
use crate::service::TournamentService;

pub fn team(id: &str, name: &str, captain: &str, status: TeamStatus) -> Team {
    Team {
        id: id.to_string(),
        team_name: name.to_string(),
        game: Game::Valorant,
        captain: captain.to_string(),
        player_count: 5,
        average_trust_score: 812.0,
        status,
        joined_at: Utc.with_ymd_and_hms(2024, 3, 2, 10, 15, 0).unwrap(),
    }
}

/// `t1` pending, `t2` approved
pub fn sample_teams() -> Vec<Team> {
    vec![
        team("t1", "Night Owls", "Priya", TeamStatus::Pending),
        team("t2", "Dawn Patrol", "Marcus", TeamStatus::Approved),
    ]
}

pub fn summary(id: &str, title: &str) -> TournamentSummary {
    TournamentSummary {
        id: id.to_string(),
        title: title.to_string(),
        game: "Valorant".to_string(),
        status: TournamentStatus::Open,
        max_players: 16,
        current_registrations: 2,
    }
}

pub fn member(id: &str, name: &str, score: Option<f64>) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", id),
        trust_score: score,
        profile_url: String::new(),
    }
}

pub fn team_detail(id: &str, status: Option<TeamStatus>) -> TeamDetailDto {
    TeamDetailDto {
        id: id.to_string(),
        team_name: "Night Owls".to_string(),
        captain: member("c1", "Priya Nair", Some(820.0)),
        players: vec![member("p1", "Sam Lee", Some(760.0))],
        game: Game::Valorant,
        invite_code: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap(),
        status,
        average_trust_score: None,
    }
}

/// One observed PATCH
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCall {
    pub team_id: String,
    pub status: TeamStatus,
    /// Whether the team was in the pending set when the request went out
    pub pending_at_dispatch: Option<bool>,
}

/// Scriptable stand-in for the remote service.
///
/// Status updates succeed unless a failure is scripted for the team, or a
/// gate is installed, in which case the update waits for the gate's sender.
pub struct MockService {
    tournament: Result<TournamentSummary>,
    applicants: Result<ApplicantsResponse>,
    tournaments: Result<Vec<Tournament>>,
    details: Result<TournamentDetails>,
    export: Result<Vec<u8>>,
    detail: Result<TeamDetailDto>,
    contact: Result<()>,
    status_failures: RefCell<HashMap<String, ServiceError>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<Result<()>>>>,
    observed: RefCell<Weak<RefCell<ApplicantReview>>>,
    pub status_calls: RefCell<Vec<StatusCall>>,
    pub completion_order: RefCell<Vec<String>>,
    pub contact_calls: RefCell<Vec<(String, ContactRequest)>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            tournament: Ok(summary("cup-1", "Spring Cup")),
            applicants: Ok(ApplicantsResponse::Bare(sample_teams())),
            tournaments: Ok(Vec::new()),
            details: Err(ServiceError::status(404, "Tournament not found")),
            export: Ok(b"Team Name\nfrom server\n".to_vec()),
            detail: Ok(team_detail("t1", Some(TeamStatus::Pending))),
            contact: Ok(()),
            status_failures: RefCell::new(HashMap::new()),
            gates: RefCell::new(HashMap::new()),
            observed: RefCell::new(Weak::new()),
            status_calls: RefCell::new(Vec::new()),
            completion_order: RefCell::new(Vec::new()),
            contact_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_tournament(mut self, tournament: Result<TournamentSummary>) -> Self {
        self.tournament = tournament;
        self
    }

    pub fn with_applicants(mut self, applicants: Result<ApplicantsResponse>) -> Self {
        self.applicants = applicants;
        self
    }

    pub fn with_tournaments(mut self, tournaments: Result<Vec<Tournament>>) -> Self {
        self.tournaments = tournaments;
        self
    }

    pub fn with_details(mut self, details: Result<TournamentDetails>) -> Self {
        self.details = details;
        self
    }

    pub fn with_export(mut self, export: Result<Vec<u8>>) -> Self {
        self.export = export;
        self
    }

    pub fn with_detail(mut self, detail: Result<TeamDetailDto>) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_contact(mut self, contact: Result<()>) -> Self {
        self.contact = contact;
        self
    }

    pub fn fail_status(&self, team_id: &str, error: ServiceError) {
        self.status_failures
            .borrow_mut()
            .insert(team_id.to_string(), error);
    }

    /// Holds the next update for `team_id` until the returned sender fires
    pub fn gate(&self, team_id: &str) -> oneshot::Sender<Result<()>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(team_id.to_string(), rx);
        tx
    }

    /// Lets the mock record pending-set membership at dispatch time
    pub fn observe(&self, state: &Rc<RefCell<ApplicantReview>>) {
        *self.observed.borrow_mut() = Rc::downgrade(state);
    }

    pub fn status_call_count(&self) -> usize {
        self.status_calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl TournamentService for MockService {
    async fn list_tournaments(&self) -> Result<Vec<Tournament>> {
        self.tournaments.clone()
    }

    async fn get_tournament(&self, _tournament_id: &str) -> Result<TournamentSummary> {
        self.tournament.clone()
    }

    async fn get_tournament_details(&self, _tournament_id: &str) -> Result<TournamentDetails> {
        self.details.clone()
    }

    async fn get_applicants(&self, _tournament_id: &str) -> Result<ApplicantsResponse> {
        self.applicants.clone()
    }

    async fn update_applicant_status(
        &self,
        _tournament_id: &str,
        team_id: &str,
        status: TeamStatus,
    ) -> Result<()> {
        let pending_at_dispatch = self
            .observed
            .borrow()
            .upgrade()
            .map(|state| state.borrow().is_pending(team_id));
        self.status_calls.borrow_mut().push(StatusCall {
            team_id: team_id.to_string(),
            status,
            pending_at_dispatch,
        });

        let gate = self.gates.borrow_mut().remove(team_id);
        let result = match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ServiceError::Transport("gate dropped".to_string()))),
            None => match self.status_failures.borrow().get(team_id) {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            },
        };
        self.completion_order.borrow_mut().push(team_id.to_string());
        result
    }

    async fn export_applicants(&self, _tournament_id: &str) -> Result<Vec<u8>> {
        self.export.clone()
    }

    async fn get_team_detail(&self, _tournament_id: &str, _team_id: &str) -> Result<TeamDetailDto> {
        self.detail.clone()
    }

    async fn contact_team(&self, team_id: &str, request: &ContactRequest) -> Result<()> {
        self.contact_calls
            .borrow_mut()
            .push((team_id.to_string(), request.clone()));
        self.contact.clone()
    }
}
