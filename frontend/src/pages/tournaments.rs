use std::rc::Rc;

use shared::listing::{available_games, available_statuses, load_tournaments, TournamentFilter};
use shared::{Tournament, TournamentStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tournaments::HttpTournamentService;
use crate::components::badges::{game_label, tournament_status_class, Spinner};
use crate::components::common_toast::{ToastContext, ToastObserver};
use crate::Route;

fn status_from_value(value: &str, statuses: &[TournamentStatus]) -> Option<TournamentStatus> {
    statuses.iter().copied().find(|status| status.label() == value)
}

#[function_component(Tournaments)]
pub fn tournaments() -> Html {
    let navigator = use_navigator().expect("Tournaments page rendered outside a router");
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let loading = use_state(|| true);
    let tournaments = use_state(|| Rc::new(Vec::<Tournament>::new()));
    let filter = use_state(TournamentFilter::default);

    // Initial load
    {
        let loading = loading.clone();
        let tournaments = tournaments.clone();
        let add_toast = toast_context.add_toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let observer = ToastObserver::new(add_toast, Callback::noop());
                let list = load_tournaments(&HttpTournamentService::new(), &observer).await;
                tournaments.set(Rc::new(list));
                loading.set(false);
            });
            || ()
        });
    }

    let on_query_input = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            filter.set(TournamentFilter {
                query: input.value(),
                ..(*filter).clone()
            });
        })
    };

    let statuses = available_statuses(&tournaments);
    let games = available_games(&tournaments);

    let on_status_change = {
        let filter = filter.clone();
        let statuses = statuses.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(TournamentFilter {
                status: status_from_value(&select.value(), &statuses),
                ..(*filter).clone()
            });
        })
    };

    let on_game_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            filter.set(TournamentFilter {
                game: (!value.is_empty()).then_some(value),
                ..(*filter).clone()
            });
        })
    };

    let visible = filter.apply(&tournaments);

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="app-bar-material p-4 sticky top-0 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <h1 class="text-xl font-medium">{"Tournaments"}</h1>
                </div>
            </header>

            <main class="container mx-auto px-4 py-6">
                <div class="bg-white rounded-lg shadow-sm p-4 mb-6">
                    <div class="flex flex-col md:flex-row gap-4">
                        <div class="flex-1">
                            <input
                                type="text"
                                placeholder="Search tournaments..."
                                value={filter.query.clone()}
                                oninput={on_query_input}
                                class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            />
                        </div>
                        <select onchange={on_status_change} class="px-4 py-2 border border-gray-300 rounded-lg">
                            <option value="" selected={filter.status.is_none()}>{"All Statuses"}</option>
                            {for statuses.iter().map(|status| html! {
                                <option value={status.label()} selected={filter.status == Some(*status)}>{status.label()}</option>
                            })}
                        </select>
                        <select onchange={on_game_change} class="px-4 py-2 border border-gray-300 rounded-lg">
                            <option value="" selected={filter.game.is_none()}>{"All Games"}</option>
                            {for games.iter().map(|game| html! {
                                <option value={game.clone()} selected={filter.game.as_ref() == Some(game)}>{game_label(game)}</option>
                            })}
                        </select>
                    </div>
                </div>

                if *loading {
                    <div class="flex justify-center p-8"><Spinner /></div>
                } else if visible.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-8 text-center text-gray-500">
                        {if tournaments.is_empty() { "No tournaments yet." } else { "No tournaments match your filters." }}
                    </div>
                } else {
                    <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Title"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Game"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Registrations"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Prize Pool"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {for visible.iter().map(|t| {
                                        let tournament_id = t.id.clone();
                                        let navigator = navigator.clone();
                                        html! {
                                            <tr
                                                class="hover:bg-gray-50 cursor-pointer"
                                                onclick={Callback::from(move |_| {
                                                    navigator.push(&Route::TournamentDetails { tournament_id: tournament_id.clone() });
                                                })}
                                            >
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{&t.title}</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{game_label(&t.game)}</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{t.date.format("%b %-d, %Y").to_string()}</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                    <div>{format!("{} / {}", t.current_registrations, t.max_players)}</div>
                                                    <div class="w-24 h-1.5 bg-gray-200 rounded-full mt-1">
                                                        <div class="h-1.5 bg-blue-600 rounded-full" style={format!("width: {}%", t.fill_percent())}></div>
                                                    </div>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{&t.prize_pool}</td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class={classes!("px-2", "py-1", "text-xs", "font-medium", "rounded-full", tournament_status_class(t.status))}>
                                                        {t.status.label()}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_from_value() {
        let statuses = [TournamentStatus::Open, TournamentStatus::Closed];
        assert_eq!(status_from_value("Open", &statuses), Some(TournamentStatus::Open));
        assert_eq!(status_from_value("", &statuses), None);
        assert_eq!(status_from_value("Ongoing", &statuses), None);
    }
}
