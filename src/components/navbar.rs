use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar flex items-center justify-between p-3">
            <Link<Route> to={Route::Home} classes="navbar-brand font-bold">
                { "IntelliSurge Technologies" }
            </Link<Route>>
            <div class="flex gap-3">
                <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                <Link<Route> to={Route::Services}>{ "Services" }</Link<Route>>
                <Link<Route> to={Route::Blogs}>{ "Blog" }</Link<Route>>
                <Link<Route> to={Route::Career}>{ "Careers" }</Link<Route>>
            </div>
        </nav>
    }
}
