use futures::try_join;
use log::{debug, error, info};
use validator::Validate;

use crate::error::Result;
use crate::models::team::Team;
use crate::models::tournament::TournamentSummary;
use crate::review::notification::{Notification, ReviewObserver};
use crate::review::session::ReviewSession;
use crate::service::TournamentService;

/// Tournament summary and applicants, fetched together
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedApplicants {
    pub tournament: TournamentSummary,
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded { teams: usize },
    Failed(crate::error::ServiceError),
    /// The view went away before the fetch finished
    Detached,
}

/// Fetches the tournament and its applicants concurrently and normalizes
/// the applicants payload. Any record breaking the team invariants makes
/// the whole response malformed.
pub async fn fetch_applicants<S>(service: &S, tournament_id: &str) -> Result<LoadedApplicants>
where
    S: TournamentService + ?Sized,
{
    let (tournament, response) = try_join!(
        service.get_tournament(tournament_id),
        service.get_applicants(tournament_id)
    )?;

    let teams = response.into_teams();
    for team in &teams {
        team.validate()?;
    }

    Ok(LoadedApplicants { tournament, teams })
}

impl<S, O> ReviewSession<S, O>
where
    S: TournamentService + ?Sized,
    O: ReviewObserver + ?Sized,
{
    /// Populates the view. On failure the previous teams stay in place and
    /// an error notification is raised; nothing is retried.
    pub async fn load(&self) -> LoadOutcome {
        let tournament_id = match self.state() {
            Some(state) => {
                let mut state = state.borrow_mut();
                state.start_loading();
                state.tournament_id().to_string()
            }
            None => return LoadOutcome::Detached,
        };
        self.observer.refresh();

        debug!("Loading applicants for tournament {}", tournament_id);
        let result = fetch_applicants(self.service.as_ref(), &tournament_id).await;

        let Some(state) = self.state() else {
            debug!("Applicants view for {} closed before load finished", tournament_id);
            return LoadOutcome::Detached;
        };

        let outcome = {
            let mut state = state.borrow_mut();
            state.finish_loading();
            match result {
                Ok(loaded) => {
                    let count = loaded.teams.len();
                    state.apply_loaded(loaded.tournament, loaded.teams);
                    info!("Loaded {} applicants for tournament {}", count, tournament_id);
                    LoadOutcome::Loaded { teams: count }
                }
                Err(e) => {
                    error!("Error fetching tournament applicants: {}", e);
                    LoadOutcome::Failed(e)
                }
            }
        };

        if let LoadOutcome::Failed(e) = &outcome {
            self.observer.notify(
                Notification::error("Failed to load tournament applicants. Please try again.")
                    .with_detail(e),
            );
        }
        self.observer.refresh();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::applicants::ApplicantsResponse;
    use crate::error::ServiceError;
    use crate::review::notification::NotificationLog;
    use crate::review::state::ApplicantReview;
    use crate::review::test_support::{sample_teams, summary, MockService};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(service: MockService) -> (
        Rc<RefCell<ApplicantReview>>,
        Rc<NotificationLog>,
        ReviewSession<MockService, NotificationLog>,
    ) {
        let state = Rc::new(RefCell::new(ApplicantReview::new("cup-1")));
        let log = Rc::new(NotificationLog::new());
        let session = ReviewSession::new(Rc::new(service), Rc::clone(&log), &state);
        (state, log, session)
    }

    #[test_log::test(tokio::test)]
    async fn test_bare_and_wrapped_shapes_load_identically() {
        let bare = MockService::new()
            .with_applicants(Ok(ApplicantsResponse::Bare(sample_teams())));
        let wrapped = MockService::new().with_applicants(Ok(ApplicantsResponse::Wrapped {
            teams: sample_teams(),
        }));

        let bare = fetch_applicants(&bare, "cup-1").await.unwrap();
        let wrapped = fetch_applicants(&wrapped, "cup-1").await.unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.teams, sample_teams());
    }

    #[test_log::test(tokio::test)]
    async fn test_load_populates_state() {
        let (state, log, session) = session(MockService::new());
        assert_eq!(session.load().await, LoadOutcome::Loaded { teams: 2 });

        let state = state.borrow();
        assert!(!state.is_loading());
        assert_eq!(state.tournament().unwrap().title, "Spring Cup");
        assert_eq!(state.teams().len(), 2);
        assert!(log.notifications().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_failed_load_keeps_prior_state_and_notifies() {
        let service = MockService::new()
            .with_tournament(Err(ServiceError::status(500, "boom")));
        let (state, log, session) = session(service);
        state
            .borrow_mut()
            .apply_loaded(summary("cup-1", "Old"), sample_teams());

        let outcome = session.load().await;
        assert!(matches!(outcome, LoadOutcome::Failed(ServiceError::Status { code: 500, .. })));

        let state = state.borrow();
        assert!(!state.is_loading());
        assert_eq!(state.tournament().unwrap().title, "Old");
        assert_eq!(state.teams().len(), 2);

        let note = log.last().unwrap();
        assert!(note.is_error());
        assert_eq!(note.message, "Failed to load tournament applicants. Please try again.");
    }

    #[test_log::test(tokio::test)]
    async fn test_invalid_trust_score_is_malformed() {
        let mut teams = sample_teams();
        teams[1].average_trust_score = 4000.0;
        let service = MockService::new().with_applicants(Ok(ApplicantsResponse::Bare(teams)));
        let result = fetch_applicants(&service, "cup-1").await;
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[test_log::test(tokio::test)]
    async fn test_load_after_view_dropped_is_detached() {
        let (state, log, session) = session(MockService::new());
        drop(state);
        assert_eq!(session.load().await, LoadOutcome::Detached);
        assert!(log.notifications().is_empty());
    }
}
