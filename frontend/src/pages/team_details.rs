use std::rc::Rc;

use log::debug;
use shared::review::{TeamDetailSession, TeamDetailState};
use shared::{ReviewDecision, TeamDetailDto, TeamMember};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tournaments::HttpTournamentService;
use crate::components::badges::{
    decision_button_class, decision_icon, trust_tier_class, Spinner, StatusBadge,
};
use crate::components::common_toast::{ToastContext, ToastObserver};
use crate::Route;

type Session = TeamDetailSession<HttpTournamentService, ToastObserver>;

#[derive(Properties, PartialEq)]
pub struct TeamDetailsProps {
    pub tournament_id: String,
    pub team_id: String,
}

#[function_component(TeamDetails)]
pub fn team_details(props: &TeamDetailsProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let state = use_mut_ref(|| TeamDetailState::new(props.tournament_id.clone(), props.team_id.clone()));
    let force_update = use_force_update();

    let session: Rc<Session> = {
        let state = state.clone();
        let add_toast = toast_context.add_toast.clone();
        let force_update = force_update.clone();
        use_memo(
            (props.tournament_id.clone(), props.team_id.clone()),
            move |_| {
                let observer = ToastObserver::new(
                    add_toast,
                    Callback::from(move |_| force_update.force_update()),
                );
                TeamDetailSession::new(
                    Rc::new(HttpTournamentService::new()),
                    Rc::new(observer),
                    &state,
                )
            },
        )
    };

    {
        let session = session.clone();
        use_effect_with(props.team_id.clone(), move |team_id| {
            debug!("Loading team {}", team_id);
            wasm_bindgen_futures::spawn_local(async move {
                // Failures are already surfaced as a toast
                if let Err(e) = session.load().await {
                    debug!("Team detail load failed: {}", e);
                }
            });
            || ()
        });
    }

    let on_decision = {
        let session = session.clone();
        Callback::from(move |decision: ReviewDecision| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = session.set_status(decision).await;
                debug!("Team detail status update finished: {:?}", outcome);
            });
        })
    };

    let on_contact = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = session.contact().await {
                    debug!("Contact request failed: {}", e);
                }
            });
        })
    };

    let detail = state.borrow();
    let back = html! {
        <Link<Route>
            to={Route::Applicants { tournament_id: props.tournament_id.clone() }}
            classes="text-sm text-blue-600 hover:underline"
        >
            {"← Back to applicants"}
        </Link<Route>>
    };

    let Some(team) = detail.team() else {
        return html! {
            <div class="min-h-screen bg-gray-50">
                <main class="container mx-auto px-4 py-6">
                    {back}
                    if detail.is_loading() {
                        <div class="flex justify-center p-8"><Spinner /></div>
                    } else {
                        <div class="bg-white rounded-lg shadow-sm p-8 mt-4 text-center text-gray-500">
                            {"Team not found."}
                        </div>
                    }
                </main>
            </div>
        };
    };

    let trust_score = team.effective_trust_score();

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="app-bar-material p-4 sticky top-0 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <div>
                        {back}
                        <h1 class="text-xl font-medium">{&team.team_name}</h1>
                        <p class="text-sm text-gray-500">{team.game.display_name()}</p>
                    </div>
                    <div class="flex items-center gap-2">
                        if let Some(status) = team.status {
                            <StatusBadge status={status} />
                        }
                        if detail.is_updating() {
                            <Spinner />
                        }
                        {for ReviewDecision::ALL.iter().map(|decision| {
                            let decision = *decision;
                            let on_decision = on_decision.clone();
                            html! {
                                <button
                                    title={decision.action_label()}
                                    disabled={!detail.can_apply(decision)}
                                    onclick={Callback::from(move |_: MouseEvent| on_decision.emit(decision))}
                                    class={classes!("px-3", "py-2", "rounded-lg", "border", "disabled:opacity-30", decision_button_class(decision))}
                                >
                                    {decision_icon(decision)}
                                </button>
                            }
                        })}
                        <button
                            onclick={on_contact}
                            class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                        >
                            {"Contact Captain"}
                        </button>
                    </div>
                </div>
            </header>

            <main class="container mx-auto px-4 py-6 space-y-6">
                <TeamSummary team={team.clone()} trust_score={trust_score} />

                <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Player"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Email"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Trust Score"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {for team.members().map(|member| html! {
                                <MemberRow key={member.id.clone()} member={member.clone()} captain={team.is_captain(member)} />
                            })}
                        </tbody>
                    </table>
                </div>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TeamSummaryProps {
    team: TeamDetailDto,
    trust_score: f64,
}

#[function_component(TeamSummary)]
fn team_summary(props: &TeamSummaryProps) -> Html {
    let team = &props.team;
    let tier = shared::TrustTier::for_score(props.trust_score);

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <div class="bg-white rounded-lg shadow-sm p-4">
                <div class="text-xs text-gray-500 uppercase">{"Captain"}</div>
                <div class="text-sm font-medium">{&team.captain.full_name}</div>
            </div>
            <div class="bg-white rounded-lg shadow-sm p-4">
                <div class="text-xs text-gray-500 uppercase">{"Roster"}</div>
                <div class="text-sm font-medium">
                    {format!("{} / {}", team.total_players(), team.game.max_roster())}
                </div>
            </div>
            <div class="bg-white rounded-lg shadow-sm p-4">
                <div class="text-xs text-gray-500 uppercase">{"Avg Trust Score"}</div>
                <div class={classes!("text-sm", "font-medium", trust_tier_class(tier))}>
                    {format!("{}", props.trust_score.round() as i64)}
                </div>
            </div>
            <div class="bg-white rounded-lg shadow-sm p-4">
                <div class="text-xs text-gray-500 uppercase">{"Created"}</div>
                <div class="text-sm font-medium">{team.created_at.format("%b %-d, %Y").to_string()}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MemberRowProps {
    member: TeamMember,
    captain: bool,
}

#[function_component(MemberRow)]
fn member_row(props: &MemberRowProps) -> Html {
    let member = &props.member;

    html! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center gap-3">
                    <span class="h-8 w-8 rounded-full bg-gray-200 flex items-center justify-center text-xs font-medium">
                        {member.initials()}
                    </span>
                    <span class="text-sm text-gray-900">{&member.full_name}</span>
                    if props.captain {
                        <span class="px-2 py-1 text-xs rounded-full bg-blue-100 text-blue-800">{"Captain"}</span>
                    }
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{&member.email}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                {match member.rated_score() {
                    Some(score) => html! {
                        <span class={trust_tier_class(shared::TrustTier::for_score(score))}>
                            {format!("{}", score.round() as i64)}
                        </span>
                    },
                    None => html! { <span class="text-gray-400">{"Unrated"}</span> },
                }}
            </td>
        </tr>
    }
}
