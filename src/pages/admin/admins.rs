use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::{AdminAccount, AdminPayload};
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, use_delete, Fetch};
use crate::router::AdminRoute;

/// Bcrypt work factor for newly created accounts.
const HASH_COST: u32 = 10;

#[function_component(AdminList)]
pub fn admin_list() -> Html {
    let admins = use_collection::<AdminAccount>(client::ADMINS, "admin accounts");
    let on_delete = use_delete(client::ADMINS, admins.clone(), "admin account");

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ "Admin Accounts" }</h1>
                <Link<AdminRoute> to={AdminRoute::NewAdmin} classes="btn btn-primary">
                    { "Add Admin" }
                </Link<AdminRoute>>
            </div>
            {
                match &*admins {
                    Fetch::Loading => html! { <p>{ "Loading accounts..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No admin accounts found." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Email" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|admin| {
                                    let delete = on_delete.clone();
                                    let id = admin.id;
                                    html! {
                                        <tr key={admin.id}>
                                            <td class="py-2">{ &admin.email }</td>
                                            <td class="py-2 text-center">
                                                <button
                                                    class="btn btn-danger text-sm"
                                                    onclick={Callback::from(move |_| delete.emit(id))}
                                                >
                                                    { "Delete" }
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    },
                    Fetch::Failed(message) => html! {
                        <p class="error-message">{ format!("Could not load accounts: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

/// Creates a new admin account. The password is hashed in the browser before
/// it travels; the backend stores whatever hash it receives.
#[function_component(AdminForm)]
pub fn admin_form() -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().unwrap();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(forms::input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(forms::input_value(&e)))
    };
    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Err(message) = forms::validate_new_admin(&email, &password) {
                error_message.set(Some(message));
                return;
            }

            let hashed = match bcrypt::hash(password.as_str(), HASH_COST) {
                Ok(hash) => hash,
                Err(e) => {
                    error_message.set(Some(format!("Could not hash password: {e}")));
                    return;
                }
            };

            is_saving.set(true);
            let payload = AdminPayload {
                email: email.trim().to_lowercase(),
                password: hashed,
            };

            let email_value = payload.email.clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                match client::ADMINS.create::<_, AdminAccount>(&payload).await {
                    Ok(_) => {
                        toasts.success(format!("Admin account created: {email_value}"));
                        navigator.push(&AdminRoute::Admins);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to create admin: {e}")));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&AdminRoute::Admins))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ "Add Admin" }</h1>
                <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
            </div>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <label class="block text-sm mb-1" for="admin-email">{ "Email" }</label>
                <input id="admin-email" class="input w-full mb-2" type="email"
                    value={(*email).clone()} oninput={on_email} />

                <label class="block text-sm mb-1" for="admin-password">{ "Password" }</label>
                <div class="flex gap-2 mb-3">
                    <input
                        id="admin-password"
                        class="input w-full"
                        type={if *show_password { "text" } else { "password" }}
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                    <button type="button" class="btn btn-secondary" onclick={toggle_password}>
                        { if *show_password { "Hide" } else { "Show" } }
                    </button>
                </div>

                <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                    { if *is_saving { "Creating..." } else { "Create Admin" } }
                </button>
            </form>
        </div>
    }
}
