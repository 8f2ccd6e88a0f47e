use log::debug;
use shared::listing::load_tournament_details;
use shared::{ScheduleStage, TournamentDetails};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tournaments::HttpTournamentService;
use crate::components::badges::{game_label, tournament_status_class, Spinner};
use crate::components::common_toast::{ToastContext, ToastObserver};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct TournamentDetailsProps {
    pub tournament_id: String,
}

#[function_component(TournamentDetailsPage)]
pub fn tournament_details(props: &TournamentDetailsProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let loading = use_state(|| true);
    let details = use_state(|| None::<TournamentDetails>);

    {
        let loading = loading.clone();
        let details = details.clone();
        let add_toast = toast_context.add_toast.clone();
        use_effect_with(props.tournament_id.clone(), move |tournament_id| {
            debug!("Loading tournament {}", tournament_id);
            let tournament_id = tournament_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let observer = ToastObserver::new(add_toast, Callback::noop());
                let record =
                    load_tournament_details(&HttpTournamentService::new(), &observer, &tournament_id)
                        .await;
                details.set(record);
                loading.set(false);
            });
            || ()
        });
    }

    let back = html! {
        <Link<Route> to={Route::Tournaments} classes="text-sm text-blue-600 hover:underline">
            {"← Back to tournaments"}
        </Link<Route>>
    };

    let Some(record) = (*details).clone() else {
        return html! {
            <div class="min-h-screen bg-gray-50">
                <main class="container mx-auto px-4 py-6">
                    {back}
                    if *loading {
                        <div class="flex justify-center p-8"><Spinner /></div>
                    } else {
                        <div class="bg-white rounded-lg shadow-sm p-8 mt-4 text-center text-gray-500">
                            {"Tournament not found."}
                        </div>
                    }
                </main>
            </div>
        };
    };

    let t = &record.tournament;

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="app-bar-material p-4 sticky top-0 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <div>
                        {back}
                        <h1 class="text-xl font-medium">{&t.title}</h1>
                        <p class="text-sm text-gray-500">{game_label(&t.game)}</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <span class={classes!("px-2", "py-1", "text-xs", "font-medium", "rounded-full", tournament_status_class(t.status))}>
                            {t.status.label()}
                        </span>
                        <Link<Route>
                            to={Route::Applicants { tournament_id: t.id.clone() }}
                            classes="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                        >
                            {"Review Applicants"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <main class="container mx-auto px-4 py-6 space-y-6">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <Fact label="Date" value={t.date.format("%b %-d, %Y").to_string()} />
                    <Fact label="Prize Pool" value={t.prize_pool.clone()} />
                    <Fact label="Trust Threshold" value={t.trust_score_threshold.to_string()} />
                    <Fact label="Registration Deadline" value={t.registration_deadline.format("%b %-d, %Y").to_string()} />
                </div>

                <div class="bg-white rounded-lg shadow-sm p-4">
                    <div class="flex justify-between text-sm">
                        <span class="text-gray-500">{"Registrations"}</span>
                        <span class="font-medium">{format!("{} / {}", t.current_registrations, t.max_players)}</span>
                    </div>
                    <div class="w-full h-2 bg-gray-200 rounded-full mt-2">
                        <div class="h-2 bg-blue-600 rounded-full" style={format!("width: {}%", t.fill_percent())}></div>
                    </div>
                    <p class="text-xs text-gray-500 mt-2">
                        {if record.accepts_registrations() { "Accepting registrations" } else { "Registration closed" }}
                    </p>
                </div>

                if !record.description.is_empty() || !record.organizer.is_empty() || !record.location.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-4 space-y-2">
                        if !record.organizer.is_empty() {
                            <p class="text-sm"><span class="text-gray-500">{"Organizer: "}</span>{&record.organizer}</p>
                        }
                        if !record.location.is_empty() {
                            <p class="text-sm"><span class="text-gray-500">{"Location: "}</span>{&record.location}</p>
                        }
                        if !record.description.is_empty() {
                            <p class="text-sm text-gray-700">{&record.description}</p>
                        }
                    </div>
                }

                if !record.rules.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-4">
                        <h2 class="text-sm font-medium mb-2">{"Rules"}</h2>
                        <ul class="list-disc list-inside text-sm text-gray-700 space-y-1">
                            {for record.rules.iter().map(|rule| html! { <li>{rule}</li> })}
                        </ul>
                    </div>
                }

                if !record.schedule.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Stage"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Teams"}</th>
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                {for record.schedule.iter().map(schedule_row)}
                            </tbody>
                        </table>
                    </div>
                }
            </main>
        </div>
    }
}

fn schedule_row(stage: &ScheduleStage) -> Html {
    html! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&stage.stage}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{stage.date.format("%b %-d, %Y").to_string()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{stage.teams.to_string()}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct FactProps {
    label: &'static str,
    value: String,
}

#[function_component(Fact)]
fn fact(props: &FactProps) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-sm p-4">
            <div class="text-xs text-gray-500 uppercase">{props.label}</div>
            <div class="text-sm font-medium">{&props.value}</div>
        </div>
    }
}
