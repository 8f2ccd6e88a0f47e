use shared::{Game, ReviewDecision, TeamStatus, TournamentStatus, TrustTier};
use yew::prelude::*;

pub fn status_badge_class(status: TeamStatus) -> &'static str {
    match status {
        TeamStatus::Pending => "bg-yellow-100 text-yellow-800",
        TeamStatus::Approved => "bg-green-100 text-green-800",
        TeamStatus::Rejected => "bg-red-100 text-red-800",
        TeamStatus::Flagged => "bg-orange-100 text-orange-800",
    }
}

pub fn tournament_status_class(status: TournamentStatus) -> &'static str {
    match status {
        TournamentStatus::Open => "bg-green-100 text-green-800",
        TournamentStatus::Upcoming => "bg-blue-100 text-blue-800",
        TournamentStatus::Ongoing => "bg-purple-100 text-purple-800",
        TournamentStatus::Closed | TournamentStatus::Other => "bg-gray-100 text-gray-800",
    }
}

pub fn trust_tier_class(tier: TrustTier) -> &'static str {
    match tier {
        TrustTier::High => "text-green-600",
        TrustTier::Medium => "text-yellow-600",
        TrustTier::Low => "text-red-600",
    }
}

pub fn decision_button_class(decision: ReviewDecision) -> &'static str {
    match decision {
        ReviewDecision::Approve => "text-green-600 hover:bg-green-50",
        ReviewDecision::Reject => "text-red-600 hover:bg-red-50",
        ReviewDecision::Flag => "text-orange-600 hover:bg-orange-50",
    }
}

pub fn decision_icon(decision: ReviewDecision) -> &'static str {
    match decision {
        ReviewDecision::Approve => "✓",
        ReviewDecision::Reject => "✕",
        ReviewDecision::Flag => "⚑",
    }
}

/// Free-form tournament game labels map onto the known titles when they can
pub fn game_label(game: &str) -> String {
    Game::ALL
        .iter()
        .find(|known| known.as_str().eq_ignore_ascii_case(game))
        .map(|known| known.display_name().to_string())
        .unwrap_or_else(|| game.to_string())
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: TeamStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!("px-2", "py-1", "text-xs", "font-medium", "rounded-full", status_badge_class(props.status))}>
            {props.status.label()}
        </span>
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-blue-600"></div>
    }
}
