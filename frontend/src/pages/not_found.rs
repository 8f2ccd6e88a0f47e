use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center gap-2">
            <h1 class="text-2xl font-medium">{"404 - Page Not Found"}</h1>
            <p class="text-gray-500">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Tournaments} classes="text-blue-600 hover:underline">
                {"Back to tournaments"}
            </Link<Route>>
        </div>
    }
}
