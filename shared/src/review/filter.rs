use crate::models::team::{Team, TeamStatus};

/// Search box and status dropdown of the applicants table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantFilter {
    pub query: String,
    pub status: Option<TeamStatus>,
}

impl ApplicantFilter {
    pub fn new(query: impl Into<String>, status: Option<TeamStatus>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status.is_some()
    }

    pub fn matches(&self, team: &Team) -> bool {
        self.matches_lowered(team, &self.query.to_lowercase())
    }

    /// Visible subset of `teams`, in their original order
    pub fn apply<'a>(&self, teams: &'a [Team]) -> Vec<&'a Team> {
        let needle = self.query.to_lowercase();
        teams
            .iter()
            .filter(|team| self.matches_lowered(team, &needle))
            .collect()
    }

    fn matches_lowered(&self, team: &Team, needle: &str) -> bool {
        matches_query(team, needle) && self.status.map_or(true, |status| team.status == status)
    }
}

fn matches_query(team: &Team, needle: &str) -> bool {
    needle.is_empty()
        || team.team_name.to_lowercase().contains(needle)
        || team.captain.to_lowercase().contains(needle)
}

/// Stable filter over the loaded applicants
pub fn filter_teams<'a>(
    teams: &'a [Team],
    query: &str,
    status: Option<TeamStatus>,
) -> Vec<&'a Team> {
    ApplicantFilter::new(query, status).apply(teams)
}

/// Statuses present in `teams`, in order of first appearance
pub fn available_statuses(teams: &[Team]) -> Vec<TeamStatus> {
    let mut statuses = Vec::new();
    for team in teams {
        if !statuses.contains(&team.status) {
            statuses.push(team.status);
        }
    }
    statuses
}

/// Placeholder row text when nothing is visible
pub fn empty_message(total: usize) -> &'static str {
    if total == 0 {
        "No teams registered yet."
    } else {
        "No teams found matching your filters."
    }
}
