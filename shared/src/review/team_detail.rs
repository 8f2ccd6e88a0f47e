use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, error, info};

use crate::dto::applicants::ContactRequest;
use crate::dto::team::TeamDetailDto;
use crate::error::{ReviewError, ServiceError};
use crate::models::team::{ReviewDecision, TeamStatus};
use crate::review::config::ReviewConfig;
use crate::review::controller::{success_message, TransitionOutcome, UPDATE_FAILED};
use crate::review::notification::{Notification, ReviewObserver};
use crate::service::TournamentService;

/// State of the single-team detail page
#[derive(Debug, Clone)]
pub struct TeamDetailState {
    tournament_id: String,
    team_id: String,
    team: Option<TeamDetailDto>,
    loading: bool,
    updating: bool,
}

impl TeamDetailState {
    pub fn new(tournament_id: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            team_id: team_id.into(),
            team: None,
            loading: false,
            updating: false,
        }
    }

    pub fn tournament_id(&self) -> &str {
        &self.tournament_id
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn team(&self) -> Option<&TeamDetailDto> {
        self.team.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Same guard as the applicants table; a team without a status yet can
    /// take any decision.
    pub fn can_apply(&self, decision: ReviewDecision) -> bool {
        self.check(decision).is_ok()
    }

    fn check(&self, decision: ReviewDecision) -> Result<(), ReviewError> {
        let team = self
            .team
            .as_ref()
            .ok_or_else(|| ReviewError::UnknownTeam(self.team_id.clone()))?;
        if self.updating {
            return Err(ReviewError::UpdateInFlight(self.team_id.clone()));
        }
        match team.status {
            Some(status) if status == decision.target_status() => Err(ReviewError::AlreadyInStatus {
                team_id: self.team_id.clone(),
                status,
            }),
            _ => Ok(()),
        }
    }
}

/// Binds the team detail page to the service
pub struct TeamDetailSession<S: ?Sized, O: ?Sized> {
    service: Rc<S>,
    observer: Rc<O>,
    state: Weak<RefCell<TeamDetailState>>,
    config: ReviewConfig,
}

impl<S: ?Sized, O: ?Sized> Clone for TeamDetailSession<S, O> {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
            observer: Rc::clone(&self.observer),
            state: Weak::clone(&self.state),
            config: self.config.clone(),
        }
    }
}

impl<S, O> TeamDetailSession<S, O>
where
    S: TournamentService + ?Sized,
    O: ReviewObserver + ?Sized,
{
    pub fn new(service: Rc<S>, observer: Rc<O>, state: &Rc<RefCell<TeamDetailState>>) -> Self {
        Self {
            service,
            observer,
            state: Rc::downgrade(state),
            config: ReviewConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReviewConfig) -> Self {
        self.config = config;
        self
    }

    fn ids(&self) -> Option<(String, String)> {
        let state = self.state.upgrade()?;
        let state = state.borrow();
        Some((state.tournament_id.clone(), state.team_id.clone()))
    }

    pub async fn load(&self) -> Result<(), ServiceError> {
        let Some((tournament_id, team_id)) = self.ids() else {
            return Ok(());
        };
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().loading = true;
        }
        self.observer.refresh();

        debug!("Fetching team {} for tournament {}", team_id, tournament_id);
        let result = self.service.get_team_detail(&tournament_id, &team_id).await;

        let Some(state) = self.state.upgrade() else {
            return Ok(());
        };
        {
            let mut state = state.borrow_mut();
            state.loading = false;
            if let Ok(team) = &result {
                state.team = Some(team.clone());
            }
        }
        if let Err(e) = &result {
            error!("Error fetching team details: {}", e);
            self.observer.notify(
                Notification::error("Failed to load team details. Please try again.").with_detail(e),
            );
        }
        self.observer.refresh();
        result.map(|_| ())
    }

    pub async fn set_status(&self, decision: ReviewDecision) -> TransitionOutcome {
        let Some(state) = self.state.upgrade() else {
            return TransitionOutcome::Detached;
        };
        let (tournament_id, team_id) = {
            let mut state = state.borrow_mut();
            if let Err(e) = state.check(decision) {
                return TransitionOutcome::Suppressed(e);
            }
            state.updating = true;
            (state.tournament_id.clone(), state.team_id.clone())
        };
        drop(state);
        self.observer.refresh();

        let status: TeamStatus = decision.into();
        let result = self
            .service
            .update_applicant_status(&tournament_id, &team_id, status)
            .await;

        let Some(state) = self.state.upgrade() else {
            return TransitionOutcome::Detached;
        };
        let outcome = {
            let mut state = state.borrow_mut();
            state.updating = false;
            match result {
                Ok(()) => {
                    if let Some(team) = state.team.as_mut() {
                        team.status = Some(status);
                    }
                    TransitionOutcome::Applied(status)
                }
                Err(e) => TransitionOutcome::Failed(e),
            }
        };
        match &outcome {
            TransitionOutcome::Applied(status) => {
                info!("Team {} is now {}", team_id, status);
                self.observer.notify(Notification::success(success_message(*status)));
            }
            TransitionOutcome::Failed(e) => {
                error!("Error updating team status: {}", e);
                self.observer.notify(Notification::error(UPDATE_FAILED).with_detail(e));
            }
            _ => {}
        }
        self.observer.refresh();
        outcome
    }

    /// Asks the service to email the team captain. Fire-and-forget apart
    /// from the notification.
    pub async fn contact(&self) -> Result<(), ServiceError> {
        let Some((tournament_id, team_id)) = self.ids() else {
            return Ok(());
        };
        let request = ContactRequest {
            subject: self.config.contact_subject.clone(),
            tournament_id,
        };

        let result = self.service.contact_team(&team_id, &request).await;
        if !self.is_attached() {
            return result;
        }
        match &result {
            Ok(()) => self
                .observer
                .notify(Notification::success("Contact email sent to team captain.")),
            Err(e) => {
                error!("Error sending contact email: {}", e);
                self.observer.notify(
                    Notification::error("Failed to send contact email. Please try again.")
                        .with_detail(e),
                );
            }
        }
        result
    }

    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::notification::NotificationLog;
    use crate::review::test_support::{team_detail, MockService};
    use pretty_assertions::assert_eq;

    fn session(
        service: MockService,
    ) -> (
        Rc<RefCell<TeamDetailState>>,
        Rc<MockService>,
        Rc<NotificationLog>,
        TeamDetailSession<MockService, NotificationLog>,
    ) {
        let state = Rc::new(RefCell::new(TeamDetailState::new("cup-1", "t1")));
        let service = Rc::new(service);
        let log = Rc::new(NotificationLog::new());
        let session = TeamDetailSession::new(Rc::clone(&service), Rc::clone(&log), &state);
        (state, service, log, session)
    }

    #[test_log::test(tokio::test)]
    async fn test_load_then_flag() {
        let (state, service, log, session) = session(MockService::new());
        session.load().await.unwrap();
        assert!(!state.borrow().is_loading());
        assert_eq!(state.borrow().team().unwrap().total_players(), 2);

        assert!(state.borrow().can_apply(ReviewDecision::Approve));
        let outcome = session.set_status(ReviewDecision::Flag).await;
        assert_eq!(outcome, TransitionOutcome::Applied(TeamStatus::Flagged));
        assert_eq!(state.borrow().team().unwrap().status, Some(TeamStatus::Flagged));
        assert!(!state.borrow().is_updating());
        assert_eq!(service.status_call_count(), 1);
        assert_eq!(log.last().unwrap().message, "Team flagged successfully.");
    }

    #[test_log::test(tokio::test)]
    async fn test_same_status_suppressed_on_detail_page() {
        let service = MockService::new().with_detail(Ok(team_detail("t1", Some(TeamStatus::Rejected))));
        let (state, service, _log, session) = session(service);
        session.load().await.unwrap();

        assert!(!state.borrow().can_apply(ReviewDecision::Reject));
        let outcome = session.set_status(ReviewDecision::Reject).await;
        assert!(matches!(outcome, TransitionOutcome::Suppressed(ReviewError::AlreadyInStatus { .. })));
        assert_eq!(service.status_call_count(), 0);
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_status_accepts_any_decision() {
        let service = MockService::new().with_detail(Ok(team_detail("t1", None)));
        let (state, _service, _log, session) = session(service);
        session.load().await.unwrap();
        for decision in ReviewDecision::ALL {
            assert!(state.borrow().can_apply(decision));
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_failed_load_notifies() {
        let service = MockService::new().with_detail(Err(ServiceError::status(404, "Team not found")));
        let (state, _service, log, session) = session(service);
        let err = session.load().await.unwrap_err();
        assert!(err.is_not_found());
        assert!(state.borrow().team().is_none());
        assert_eq!(log.last().unwrap().message, "Failed to load team details. Please try again.");
    }

    #[test_log::test(tokio::test)]
    async fn test_status_before_load_is_suppressed() {
        let (_state, service, _log, session) = session(MockService::new());
        let outcome = session.set_status(ReviewDecision::Approve).await;
        assert!(matches!(outcome, TransitionOutcome::Suppressed(ReviewError::UnknownTeam(_))));
        assert_eq!(service.status_call_count(), 0);
    }

    #[test_log::test(tokio::test)]
    async fn test_contact_posts_subject_and_tournament() {
        let (_state, service, log, session) = session(MockService::new());
        session.contact().await.unwrap();

        let calls = service.contact_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "t1");
        assert_eq!(calls[0].1.subject, "Tournament Application Update");
        assert_eq!(calls[0].1.tournament_id, "cup-1");
        assert_eq!(log.last().unwrap().message, "Contact email sent to team captain.");
    }

    #[test_log::test(tokio::test)]
    async fn test_contact_failure_notifies_error() {
        let service = MockService::new().with_contact(Err(ServiceError::Transport("offline".into())));
        let (_state, _service, log, session) = session(service);
        assert!(session.contact().await.is_err());
        let note = log.last().unwrap();
        assert!(note.is_error());
        assert_eq!(note.message, "Failed to send contact email. Please try again.");
    }

    #[test_log::test(tokio::test)]
    async fn test_failures_return_error_after_single_toast() {
        let service = MockService::new()
            .with_detail(Err(ServiceError::status(500, "boom")))
            .with_contact(Err(ServiceError::Transport("offline".into())));
        let (_state, _service, log, session) = session(service);

        assert!(matches!(session.load().await, Err(ServiceError::Status { code: 500, .. })));
        assert_eq!(log.notifications().len(), 1);
        assert!(matches!(session.contact().await, Err(ServiceError::Transport(_))));
        assert_eq!(log.notifications().len(), 2);
    }
}
