use std::collections::HashSet;

use log::debug;

use crate::error::{ReviewError, ServiceError};
use crate::models::team::{ReviewDecision, Team, TeamStatus};
use crate::models::tournament::TournamentSummary;
use crate::review::filter::{self, ApplicantFilter};

/// Which row actions are clickable for one team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    /// A status update for this team is in flight
    pub pending: bool,
    pub approve: bool,
    pub reject: bool,
    pub flag: bool,
}

impl RowActions {
    pub fn for_team(team: &Team, pending: bool) -> Self {
        Self {
            pending,
            approve: !pending && team.accepts(ReviewDecision::Approve),
            reject: !pending && team.accepts(ReviewDecision::Reject),
            flag: !pending && team.accepts(ReviewDecision::Flag),
        }
    }

    /// All actions off, used while the list is reloading
    pub fn locked(pending: bool) -> Self {
        Self {
            pending,
            approve: false,
            reject: false,
            flag: false,
        }
    }

    pub fn enabled(&self, decision: ReviewDecision) -> bool {
        match decision {
            ReviewDecision::Approve => self.approve,
            ReviewDecision::Reject => self.reject,
            ReviewDecision::Flag => self.flag,
        }
    }
}

/// Everything the applicants view knows about one tournament's applicants.
///
/// Owned by a single view. Async work holds it through a `Weak` handle, so
/// late completions after the view is gone write nothing.
#[derive(Debug, Clone)]
pub struct ApplicantReview {
    tournament_id: String,
    tournament: Option<TournamentSummary>,
    teams: Vec<Team>,
    filter: ApplicantFilter,
    pending: HashSet<String>,
    loading: bool,
}

impl ApplicantReview {
    pub fn new(tournament_id: impl Into<String>) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            tournament: None,
            teams: Vec::new(),
            filter: ApplicantFilter::default(),
            pending: HashSet::new(),
            loading: false,
        }
    }

    pub fn tournament_id(&self) -> &str {
        &self.tournament_id
    }

    pub fn tournament(&self) -> Option<&TournamentSummary> {
        self.tournament.as_ref()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Finished loading without ever getting a tournament
    pub fn is_unavailable(&self) -> bool {
        !self.loading && self.tournament.is_none()
    }

    pub fn filter(&self) -> &ApplicantFilter {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_status_filter(&mut self, status: Option<TeamStatus>) {
        self.filter.status = status;
    }

    pub fn visible_teams(&self) -> Vec<&Team> {
        self.filter.apply(&self.teams)
    }

    pub fn available_statuses(&self) -> Vec<TeamStatus> {
        filter::available_statuses(&self.teams)
    }

    pub fn empty_message(&self) -> &'static str {
        filter::empty_message(self.teams.len())
    }

    pub fn is_pending(&self, team_id: &str) -> bool {
        self.pending.contains(team_id)
    }

    pub fn pending_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.pending.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn row_actions(&self, team: &Team) -> RowActions {
        let pending = self.is_pending(&team.id);
        if self.loading {
            return RowActions::locked(pending);
        }
        RowActions::for_team(team, pending)
    }

    /// Checks whether `decision` may be dispatched for `team_id` right now
    pub fn check_transition(&self, team_id: &str, decision: ReviewDecision) -> Result<(), ReviewError> {
        if self.loading {
            return Err(ReviewError::ListLoading);
        }
        let team = self
            .team(team_id)
            .ok_or_else(|| ReviewError::UnknownTeam(team_id.to_string()))?;
        if self.is_pending(team_id) {
            return Err(ReviewError::UpdateInFlight(team_id.to_string()));
        }
        if !team.accepts(decision) {
            return Err(ReviewError::AlreadyInStatus {
                team_id: team_id.to_string(),
                status: team.status,
            });
        }
        Ok(())
    }

    /// Guards the transition and marks the team pending
    pub fn begin_transition(&mut self, team_id: &str, decision: ReviewDecision) -> Result<(), ReviewError> {
        self.check_transition(team_id, decision)?;
        self.pending.insert(team_id.to_string());
        debug!("Team {} pending {:?}", team_id, decision);
        Ok(())
    }

    /// Reconciles a finished request and releases the pending mark.
    /// Returns whether the new status was committed.
    pub fn finish_transition(
        &mut self,
        team_id: &str,
        decision: ReviewDecision,
        result: &Result<(), ServiceError>,
    ) -> bool {
        self.pending.remove(team_id);
        if result.is_err() {
            return false;
        }
        match self.teams.iter_mut().find(|team| team.id == team_id) {
            Some(team) => {
                team.status = decision.target_status();
                true
            }
            None => false,
        }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Replaces the tournament and applicants with a fresh load
    pub fn apply_loaded(&mut self, tournament: TournamentSummary, teams: Vec<Team>) {
        self.tournament = Some(tournament);
        self.teams = teams;
        self.pending.retain(|id| self.teams.iter().any(|team| &team.id == id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::test_support::{sample_teams, summary};
    use pretty_assertions::assert_eq;

    fn loaded() -> ApplicantReview {
        let mut review = ApplicantReview::new("cup-1");
        review.apply_loaded(summary("cup-1", "Spring Cup"), sample_teams());
        review
    }

    #[test]
    fn test_row_actions_follow_status_and_pending() {
        let mut review = loaded();
        let approved = review.team("t2").unwrap().clone();
        let actions = review.row_actions(&approved);
        assert!(!actions.approve);
        assert!(actions.reject);
        assert!(actions.flag);

        review.begin_transition("t2", ReviewDecision::Reject).unwrap();
        let actions = review.row_actions(&approved);
        assert!(actions.pending);
        for decision in ReviewDecision::ALL {
            assert!(!actions.enabled(decision));
        }
    }

    #[test]
    fn test_guard_rejects_same_status() {
        let mut review = loaded();
        let err = review.begin_transition("t2", ReviewDecision::Approve).unwrap_err();
        assert_eq!(
            err,
            ReviewError::AlreadyInStatus {
                team_id: "t2".to_string(),
                status: TeamStatus::Approved
            }
        );
        assert!(!review.is_pending("t2"));
    }

    #[test]
    fn test_guard_rejects_duplicate_in_flight() {
        let mut review = loaded();
        review.begin_transition("t1", ReviewDecision::Approve).unwrap();
        assert_eq!(
            review.begin_transition("t1", ReviewDecision::Reject),
            Err(ReviewError::UpdateInFlight("t1".to_string()))
        );
        assert_eq!(review.pending_ids(), ["t1"]);
    }

    #[test]
    fn test_guard_rejects_unknown_team() {
        let mut review = loaded();
        assert_eq!(
            review.begin_transition("ghost", ReviewDecision::Flag),
            Err(ReviewError::UnknownTeam("ghost".to_string()))
        );
    }

    #[test]
    fn test_finish_commits_only_status_field() {
        let mut review = loaded();
        let before = review.team("t1").unwrap().clone();
        review.begin_transition("t1", ReviewDecision::Flag).unwrap();
        assert!(review.finish_transition("t1", ReviewDecision::Flag, &Ok(())));

        let after = review.team("t1").unwrap();
        assert_eq!(after.status, TeamStatus::Flagged);
        assert_eq!(Team { status: before.status, ..after.clone() }, before);
        assert!(!review.is_pending("t1"));
    }

    #[test]
    fn test_finish_failure_keeps_status_and_releases() {
        let mut review = loaded();
        review.begin_transition("t1", ReviewDecision::Approve).unwrap();
        let failed = Err(ServiceError::Transport("offline".to_string()));
        assert!(!review.finish_transition("t1", ReviewDecision::Approve, &failed));
        assert_eq!(review.team("t1").unwrap().status, TeamStatus::Pending);
        assert!(!review.is_pending("t1"));
    }

    #[test]
    fn test_filter_setters_drive_visible_teams() {
        let mut review = loaded();
        review.set_query("night");
        assert_eq!(review.visible_teams().len(), 1);
        review.set_query("");
        review.set_status_filter(Some(TeamStatus::Approved));
        assert_eq!(review.visible_teams()[0].id, "t2");
        assert_eq!(review.teams().len(), 2);
    }

    #[test]
    fn test_reload_locks_every_row() {
        let mut review = loaded();
        review.start_loading();
        for team in review.teams().to_vec() {
            let actions = review.row_actions(&team);
            for decision in ReviewDecision::ALL {
                assert!(!actions.enabled(decision));
            }
        }
        assert_eq!(
            review.begin_transition("t1", ReviewDecision::Approve),
            Err(ReviewError::ListLoading)
        );
        assert!(review.pending_ids().is_empty());

        review.finish_loading();
        assert!(review.row_actions(review.team("t1").unwrap()).approve);
        assert!(review.begin_transition("t1", ReviewDecision::Approve).is_ok());
    }

    #[test]
    fn test_unavailable_only_after_failed_first_load() {
        let mut review = ApplicantReview::new("cup-1");
        review.start_loading();
        assert!(!review.is_unavailable());
        review.finish_loading();
        assert!(review.is_unavailable());

        let review = loaded();
        assert!(!review.is_unavailable());
    }
}
