//! Tournament list on the dashboard home page.

use log::{debug, error};

use crate::models::tournament::{Tournament, TournamentDetails, TournamentStatus};
use crate::review::notification::{Notification, ReviewObserver};
use crate::service::TournamentService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentFilter {
    pub query: String,
    pub status: Option<TournamentStatus>,
    pub game: Option<String>,
}

impl TournamentFilter {
    pub fn matches(&self, tournament: &Tournament) -> bool {
        tournament
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase())
            && self.status.map_or(true, |status| tournament.status == status)
            && self
                .game
                .as_ref()
                .map_or(true, |game| &tournament.game == game)
    }

    pub fn apply<'a>(&self, tournaments: &'a [Tournament]) -> Vec<&'a Tournament> {
        tournaments.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Distinct games, first appearance first
pub fn available_games(tournaments: &[Tournament]) -> Vec<String> {
    let mut games: Vec<String> = Vec::new();
    for tournament in tournaments {
        if !games.contains(&tournament.game) {
            games.push(tournament.game.clone());
        }
    }
    games
}

pub fn available_statuses(tournaments: &[Tournament]) -> Vec<TournamentStatus> {
    let mut statuses = Vec::new();
    for tournament in tournaments {
        if !statuses.contains(&tournament.status) {
            statuses.push(tournament.status);
        }
    }
    statuses
}

/// Fetches every tournament; on failure notifies and returns an empty list
pub async fn load_tournaments<S, O>(service: &S, observer: &O) -> Vec<Tournament>
where
    S: TournamentService + ?Sized,
    O: ReviewObserver + ?Sized,
{
    match service.list_tournaments().await {
        Ok(tournaments) => {
            debug!("Fetched {} tournaments", tournaments.len());
            tournaments
        }
        Err(e) => {
            error!("Error fetching tournaments: {}", e);
            observer.notify(
                Notification::error("Failed to load tournaments. Please try again.").with_detail(&e),
            );
            Vec::new()
        }
    }
}

/// Fetches one tournament's full record; on failure notifies and returns `None`
pub async fn load_tournament_details<S, O>(
    service: &S,
    observer: &O,
    tournament_id: &str,
) -> Option<TournamentDetails>
where
    S: TournamentService + ?Sized,
    O: ReviewObserver + ?Sized,
{
    match service.get_tournament_details(tournament_id).await {
        Ok(details) => {
            debug!("Fetched details for tournament {}", tournament_id);
            Some(details)
        }
        Err(e) => {
            error!("Error fetching tournament {}: {}", tournament_id, e);
            observer.notify(
                Notification::error("Failed to load tournament details. Please try again.")
                    .with_detail(&e),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::review::notification::NotificationLog;
    use crate::review::test_support::MockService;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn tournament(id: &str, title: &str, game: &str, status: TournamentStatus) -> Tournament {
        Tournament {
            id: id.to_string(),
            title: title.to_string(),
            game: game.to_string(),
            status,
            date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            max_players: 16,
            prize_pool: "$1,000".to_string(),
            trust_score_threshold: 750,
            registration_deadline: Utc.with_ymd_and_hms(2024, 5, 25, 12, 0, 0).unwrap(),
            current_registrations: 4,
        }
    }

    fn listing() -> Vec<Tournament> {
        vec![
            tournament("a", "Summer Showdown", "Valorant", TournamentStatus::Open),
            tournament("b", "CS Night", "CS2", TournamentStatus::Upcoming),
            tournament("c", "Summer Finals", "CS2", TournamentStatus::Closed),
        ]
    }

    fn ids(tournaments: Vec<&Tournament>) -> Vec<&str> {
        tournaments.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_title_query_case_insensitive() {
        let all = listing();
        let filter = TournamentFilter {
            query: "SUMMER".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&all)), ["a", "c"]);
    }

    #[test]
    fn test_game_and_status_filters_combine() {
        let all = listing();
        let filter = TournamentFilter {
            query: String::new(),
            status: Some(TournamentStatus::Closed),
            game: Some("CS2".to_string()),
        };
        assert_eq!(ids(filter.apply(&all)), ["c"]);
    }

    #[test]
    fn test_dropdown_values() {
        let all = listing();
        assert_eq!(available_games(&all), ["Valorant", "CS2"]);
        assert_eq!(
            available_statuses(&all),
            [TournamentStatus::Open, TournamentStatus::Upcoming, TournamentStatus::Closed]
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_load_failure_yields_empty_list() {
        let service = MockService::new().with_tournaments(Err(ServiceError::Transport("down".into())));
        let log = NotificationLog::new();
        assert!(load_tournaments(&service, &log).await.is_empty());
        assert!(log.last().unwrap().is_error());
    }

    #[test_log::test(tokio::test)]
    async fn test_load_success() {
        let service = MockService::new().with_tournaments(Ok(listing()));
        let log = NotificationLog::new();
        assert_eq!(load_tournaments(&service, &log).await.len(), 3);
        assert!(log.notifications().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_details_load_success() {
        let details = TournamentDetails {
            tournament: tournament("a", "Summer Showdown", "Valorant", TournamentStatus::Open),
            description: "Best of three".to_string(),
            organizer: "Org".to_string(),
            location: "Online".to_string(),
            rules: vec!["No smurfs".to_string()],
            schedule: Vec::new(),
        };
        let service = MockService::new().with_details(Ok(details.clone()));
        let log = NotificationLog::new();
        assert_eq!(load_tournament_details(&service, &log, "a").await, Some(details));
        assert!(log.notifications().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_details_load_failure_notifies() {
        let service = MockService::new().with_details(Err(ServiceError::status(404, "Tournament not found")));
        let log = NotificationLog::new();
        assert_eq!(load_tournament_details(&service, &log, "missing").await, None);
        let last = log.last().unwrap();
        assert!(last.is_error());
        assert_eq!(last.message, "Failed to load tournament details. Please try again.");
    }
}
