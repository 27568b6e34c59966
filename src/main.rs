mod api;
mod components;
mod config;
mod forms;
mod hooks;
mod pages;
mod router;
mod session;

use crate::components::toast::ToastProvider;
use crate::router::AppRouter;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                config::load_config().await;
                ready.set(true);
            });
            || ()
        });
    }

    if !*ready {
        return html! { <div class="app-loading">{ "Loading..." }</div> };
    }

    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppRouter />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
