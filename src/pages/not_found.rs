use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found p-6 text-center">
            <h1 class="text-2xl font-bold mb-2">{ "404 - Page not found" }</h1>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                { "Back to the homepage" }
            </Link<Route>>
        </div>
    }
}
