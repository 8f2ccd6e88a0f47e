use std::rc::Rc;

use log::{debug, error};
use shared::review::{ApplicantReview, ReviewSession, RowActions};
use shared::{ReviewDecision, Team, TeamStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tournaments::HttpTournamentService;
use crate::components::badges::{
    decision_button_class, decision_icon, game_label, trust_tier_class, Spinner, StatusBadge,
};
use crate::components::common_toast::{ToastContext, ToastObserver};
use crate::download::save_file;
use crate::Route;

type Session = ReviewSession<HttpTournamentService, ToastObserver>;

#[derive(Properties, PartialEq)]
pub struct ApplicantsProps {
    pub tournament_id: String,
}

/// Dropdown value for a status filter; the empty string means "all"
fn status_from_value(value: &str, statuses: &[TeamStatus]) -> Option<TeamStatus> {
    statuses.iter().copied().find(|status| status.as_str() == value)
}

#[function_component(Applicants)]
pub fn applicants(props: &ApplicantsProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    // Starts in the loading state so the first render shows a spinner
    let state = use_mut_ref(|| {
        let mut review = ApplicantReview::new(props.tournament_id.clone());
        review.start_loading();
        review
    });
    let force_update = use_force_update();

    let session: Rc<Session> = {
        let state = state.clone();
        let add_toast = toast_context.add_toast.clone();
        let force_update = force_update.clone();
        use_memo(props.tournament_id.clone(), move |_| {
            let observer = ToastObserver::new(
                add_toast,
                Callback::from(move |_| force_update.force_update()),
            );
            ReviewSession::new(
                Rc::new(HttpTournamentService::new()),
                Rc::new(observer),
                &state,
            )
        })
    };

    // Initial load
    {
        let session = session.clone();
        use_effect_with(props.tournament_id.clone(), move |tournament_id| {
            debug!("Loading applicants for tournament {}", tournament_id);
            wasm_bindgen_futures::spawn_local(async move {
                session.load().await;
            });
            || ()
        });
    }

    let on_query_input = {
        let state = state.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.borrow_mut().set_query(input.value());
            force_update.force_update();
        })
    };

    let on_status_change = {
        let state = state.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let status = {
                let state = state.borrow();
                status_from_value(&select.value(), &state.available_statuses())
            };
            state.borrow_mut().set_status_filter(status);
            force_update.force_update();
        })
    };

    let on_export = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(file) = session.export_list().await {
                    if let Err(e) = save_file(&file) {
                        error!("Failed to save {}: {:?}", file.filename, e);
                    }
                }
            });
        })
    };

    let on_decision = {
        let session = session.clone();
        Callback::from(move |(team_id, decision): (String, ReviewDecision)| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = session.set_status(&team_id, decision).await;
                debug!("Status update for {} finished: {:?}", team_id, outcome);
            });
        })
    };

    let review = state.borrow();

    if review.is_unavailable() {
        return html! {
            <div class="min-h-screen bg-gray-50">
                <main class="container mx-auto px-4 py-6">
                    <Link<Route> to={Route::Tournaments} classes="text-sm text-blue-600 hover:underline">
                        {"← All tournaments"}
                    </Link<Route>>
                    <div class="bg-white rounded-lg shadow-sm p-8 mt-4 text-center text-gray-500">
                        {"Tournament not found."}
                    </div>
                </main>
            </div>
        };
    }

    let title = review
        .tournament()
        .map(|t| t.title.clone())
        .unwrap_or_default();
    let visible = review.visible_teams();
    let statuses = review.available_statuses();
    let selected_status = review
        .filter()
        .status
        .map(|status| status.as_str())
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="app-bar-material p-4 sticky top-0 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <div>
                        <Link<Route>
                            to={Route::TournamentDetails { tournament_id: props.tournament_id.clone() }}
                            classes="text-sm text-blue-600 hover:underline"
                        >
                            {"← Tournament details"}
                        </Link<Route>>
                        <h1 class="text-xl font-medium">{format!("{} Applicants", title)}</h1>
                        if let Some(tournament) = review.tournament() {
                            <p class="text-sm text-gray-500">
                                {format!("{} · {} / {} registered", game_label(&tournament.game), tournament.current_registrations, tournament.max_players)}
                            </p>
                        }
                    </div>
                    <button
                        onclick={on_export}
                        disabled={review.is_loading()}
                        class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    >
                        {"Export CSV"}
                    </button>
                </div>
            </header>

            <main class="container mx-auto px-4 py-6">
                <div class="bg-white rounded-lg shadow-sm p-4 mb-6">
                    <div class="flex flex-col md:flex-row gap-4">
                        <div class="flex-1">
                            <input
                                type="text"
                                placeholder="Search teams or captains..."
                                value={review.filter().query.clone()}
                                oninput={on_query_input}
                                disabled={review.is_loading()}
                                class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            />
                        </div>
                        <select
                            onchange={on_status_change}
                            disabled={review.is_loading()}
                            class="px-4 py-2 border border-gray-300 rounded-lg"
                        >
                            <option value="" selected={selected_status.is_empty()}>{"All Statuses"}</option>
                            {for statuses.iter().map(|status| html! {
                                <option value={status.as_str()} selected={selected_status == status.as_str()}>
                                    {status.label()}
                                </option>
                            })}
                        </select>
                    </div>
                </div>

                if review.is_loading() && review.teams().is_empty() {
                    <div class="flex justify-center p-8"><Spinner /></div>
                } else if visible.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-8 text-center text-gray-500">
                        {review.empty_message()}
                    </div>
                } else {
                    <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Team"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Captain"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Members"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Trust Score"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Applied"}</th>
                                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {for visible.iter().map(|team| html! {
                                        <ApplicantRow
                                            key={team.id.clone()}
                                            tournament_id={props.tournament_id.clone()}
                                            team={(*team).clone()}
                                            actions={review.row_actions(team)}
                                            on_decision={on_decision.clone()}
                                        />
                                    })}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ApplicantRowProps {
    tournament_id: String,
    team: Team,
    actions: RowActions,
    on_decision: Callback<(String, ReviewDecision)>,
}

#[function_component(ApplicantRow)]
fn applicant_row(props: &ApplicantRowProps) -> Html {
    let team = &props.team;
    let actions = props.actions;

    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap">
                <Link<Route>
                    to={Route::TeamDetails { tournament_id: props.tournament_id.clone(), team_id: team.id.clone() }}
                    classes="text-sm font-medium text-blue-600 hover:underline"
                >
                    {&team.team_name}
                </Link<Route>>
                <div class="text-xs text-gray-500">{team.game.display_name()}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&team.captain}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                {format!("{} / {}", team.player_count, team.game.max_roster())}
            </td>
            <td class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", "font-medium", trust_tier_class(team.trust_tier()))}>
                {team.display_trust_score()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap"><StatusBadge status={team.status} /></td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                {team.joined_at.format("%b %-d, %Y").to_string()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right">
                if actions.pending {
                    <div class="flex justify-end"><Spinner /></div>
                } else {
                    <div class="flex justify-end gap-1">
                        {for ReviewDecision::ALL.iter().map(|decision| {
                            let decision = *decision;
                            let team_id = team.id.clone();
                            let on_decision = props.on_decision.clone();
                            html! {
                                <button
                                    title={decision.action_label()}
                                    disabled={!actions.enabled(decision)}
                                    onclick={Callback::from(move |_: MouseEvent| on_decision.emit((team_id.clone(), decision)))}
                                    class={classes!("px-2", "py-1", "rounded", "disabled:opacity-30", decision_button_class(decision))}
                                >
                                    {decision_icon(decision)}
                                </button>
                            }
                        })}
                    </div>
                }
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_from_value() {
        let statuses = [TeamStatus::Pending, TeamStatus::Flagged];
        assert_eq!(status_from_value("flagged", &statuses), Some(TeamStatus::Flagged));
        assert_eq!(status_from_value("", &statuses), None);
        // Only statuses present in the list can be selected
        assert_eq!(status_from_value("approved", &statuses), None);
    }
}
