use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::forms;
use crate::session;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(forms::input_value(&e)))
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(forms::input_value(&e)))
    };

    let toggle_visibility = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            // Local validation before any request goes out
            if email.trim().is_empty() || password.trim().is_empty() {
                error_message.set(Some("Please enter both email and password.".to_owned()));
                return;
            }
            if !forms::is_valid_email(&email) {
                error_message.set(Some("Please enter a valid email address.".to_owned()));
                return;
            }

            is_loading.set(true);
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();

            spawn_local(async move {
                match session::login(&email_value, &password_value).await {
                    Ok(()) => {
                        let target = session::post_login_target(session::take_target());
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&target);
                        }
                    }
                    Err(err) => {
                        error_message.set(Some(err.to_string()));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="login-container flex justify-center">
            <section class="login-card">
                <h1 class="mb-2">{ "Admin Login" }</h1>

                { if let Some(error) = (*error_message).as_ref() {
                    html! { <div class="error-message mb-2">{ error }</div> }
                } else {
                    html! {}
                }}

                <form {onsubmit}>
                    <label class="block text-sm mb-1" for="email">{ "Email" }</label>
                    <input
                        id="email"
                        class="input w-full mb-2"
                        type="email"
                        value={(*email).clone()}
                        oninput={on_email}
                        disabled={*is_loading}
                    />

                    <label class="block text-sm mb-1" for="password">{ "Password" }</label>
                    <div class="flex gap-2 mb-2">
                        <input
                            id="password"
                            class="input w-full"
                            type={if *show_password { "text" } else { "password" }}
                            value={(*password).clone()}
                            oninput={on_password}
                            disabled={*is_loading}
                        />
                        <button type="button" class="btn btn-secondary" onclick={toggle_visibility}>
                            { if *show_password { "Hide" } else { "Show" } }
                        </button>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary w-full"
                        disabled={*is_loading}
                    >
                        { if *is_loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>
            </section>
        </div>
    }
}
