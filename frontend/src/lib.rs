use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common_toast::ToastProvider;

pub mod api;
pub mod components;
pub mod config;
pub mod download;
pub mod pages {
    pub mod applicants;
    pub mod not_found;
    pub mod team_details;
    pub mod tournament_details;
    pub mod tournaments;
}

use pages::{
    applicants::Applicants, not_found::NotFound, team_details::TeamDetails,
    tournament_details::TournamentDetailsPage, tournaments::Tournaments,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Tournaments,
    #[at("/tournaments/:tournament_id")]
    TournamentDetails { tournament_id: String },
    #[at("/tournaments/:tournament_id/applicants")]
    Applicants { tournament_id: String },
    #[at("/tournaments/:tournament_id/applicants/teams/:team_id")]
    TeamDetails {
        tournament_id: String,
        team_id: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="app-container">
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Tournaments => html! { <Tournaments /> },
        Route::TournamentDetails { tournament_id } => html! {
            <TournamentDetailsPage key={tournament_id.clone()} tournament_id={tournament_id.clone()} />
        },
        // Keyed so switching tournaments mounts a fresh view
        Route::Applicants { tournament_id } => {
            html! { <Applicants key={tournament_id.clone()} tournament_id={tournament_id.clone()} /> }
        }
        Route::TeamDetails {
            tournament_id,
            team_id,
        } => html! {
            <TeamDetails
                key={format!("{}/{}", tournament_id, team_id)}
                tournament_id={tournament_id.clone()}
                team_id={team_id.clone()}
            />
        },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting organizer dashboard");
    yew::Renderer::<App>::new().render();

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to start dashboard: {:?}", e);
        }
    });
    Ok(())
}
