use log::{debug, error, info};

use crate::error::{ReviewError, ServiceError};
use crate::models::team::{ReviewDecision, TeamStatus};
use crate::review::notification::{Notification, ReviewObserver};
use crate::review::session::ReviewSession;
use crate::service::TournamentService;

/// Result of one `set_status` call
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The service accepted the change and the local row was updated
    Applied(TeamStatus),
    /// The request failed; the row keeps its previous status
    Failed(ServiceError),
    /// A guard refused the call before any request was sent
    Suppressed(ReviewError),
    /// The view went away while the request was in flight
    Detached,
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied(_))
    }
}

pub(crate) fn success_message(status: TeamStatus) -> String {
    format!("Team {} successfully.", status)
}

pub(crate) const UPDATE_FAILED: &str = "Failed to update team status. Please try again.";

impl<S, O> ReviewSession<S, O>
where
    S: TournamentService + ?Sized,
    O: ReviewObserver + ?Sized,
{
    /// Sends one status change for one team.
    ///
    /// The team is in the pending set from just before the request is sent
    /// until it settles, on every path. Other teams are never blocked.
    pub async fn set_status(&self, team_id: &str, decision: ReviewDecision) -> TransitionOutcome {
        let Some(state) = self.state() else {
            return TransitionOutcome::Detached;
        };

        let tournament_id = {
            let mut state = state.borrow_mut();
            if let Err(e) = state.begin_transition(team_id, decision) {
                debug!("Skipping status update: {}", e);
                return TransitionOutcome::Suppressed(e);
            }
            state.tournament_id().to_string()
        };
        drop(state);
        self.observer.refresh();

        let status = decision.target_status();
        debug!("Updating team {} to {}", team_id, status);
        let result = self
            .service
            .update_applicant_status(&tournament_id, team_id, status)
            .await;

        let Some(state) = self.state() else {
            debug!("Applicants view closed before team {} update settled", team_id);
            return TransitionOutcome::Detached;
        };
        let committed = state
            .borrow_mut()
            .finish_transition(team_id, decision, &result);

        let outcome = match result {
            Ok(()) if committed => {
                info!("Team {} is now {}", team_id, status);
                self.observer.notify(Notification::success(success_message(status)));
                TransitionOutcome::Applied(status)
            }
            Ok(()) => {
                // The team vanished from the list while the request was out
                debug!("Team {} no longer listed, status {} not applied", team_id, status);
                TransitionOutcome::Suppressed(ReviewError::UnknownTeam(team_id.to_string()))
            }
            Err(e) => {
                error!("Error updating team status: {}", e);
                self.observer
                    .notify(Notification::error(UPDATE_FAILED).with_detail(&e));
                TransitionOutcome::Failed(e)
            }
        };
        self.observer.refresh();
        outcome
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
