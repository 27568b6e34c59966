use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::Partner;
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, use_delete, use_record, Fetch};
use crate::router::AdminRoute;

#[function_component(PartnerList)]
pub fn partner_list() -> Html {
    let partners = use_collection::<Partner>(client::PARTNERS, "partners");
    let on_delete = use_delete(client::PARTNERS, partners.clone(), "partner");

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ "Partners" }</h1>
                <Link<AdminRoute> to={AdminRoute::NewPartner} classes="btn btn-primary">
                    { "Add Partner" }
                </Link<AdminRoute>>
            </div>
            {
                match &*partners {
                    Fetch::Loading => html! { <p>{ "Loading partners..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No partners yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Company" }</th>
                                    <th class="text-left">{ "Contact" }</th>
                                    <th class="text-left">{ "Logo" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|partner| {
                                    let delete = on_delete.clone();
                                    let id = partner.id;
                                    html! {
                                        <tr key={partner.id}>
                                            <td class="py-2">{ &partner.company }</td>
                                            <td class="py-2">{ &partner.name }</td>
                                            <td class="py-2">
                                                { match &partner.image {
                                                    Some(url) => html! {
                                                        <img src={url.clone()} alt={partner.company.clone()}
                                                            class="thumbnail" />
                                                    },
                                                    None => html! { { "—" } },
                                                }}
                                            </td>
                                            <td class="py-2 text-center">
                                                <Link<AdminRoute>
                                                    to={AdminRoute::EditPartner { id }}
                                                    classes="btn btn-secondary text-sm mr-2"
                                                >
                                                    { "Edit" }
                                                </Link<AdminRoute>>
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
                        <p class="error-message">{ format!("Could not load partners: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PartnerFormProps {
    pub id: Option<u32>,
}

#[function_component(PartnerForm)]
pub fn partner_form(props: &PartnerFormProps) -> Html {
    match props.id {
        None => html! { <PartnerFormInner initial={None::<Partner>} /> },
        Some(id) => html! { <PartnerFormLoader {id} /> },
    }
}

#[derive(Properties, PartialEq)]
struct PartnerFormLoaderProps {
    id: u32,
}

#[function_component(PartnerFormLoader)]
fn partner_form_loader(props: &PartnerFormLoaderProps) -> Html {
    let record = use_record::<Partner>(client::PARTNERS, props.id, "partner");
    match &*record {
        Fetch::Loading => html! { <p>{ "Loading partner..." }</p> },
        Fetch::Ready(partner) => html! {
            <PartnerFormInner initial={Some(partner.clone())} />
        },
        Fetch::Failed(message) => html! {
            <p class="error-message">{ format!("Could not load this partner: {message}") }</p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct PartnerFormInnerProps {
    initial: Option<Partner>,
}

#[function_component(PartnerFormInner)]
fn partner_form_inner(props: &PartnerFormInnerProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().unwrap();
    let editing = props.initial.as_ref().map(|partner| partner.id);

    let company = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.company.clone())
            .unwrap_or_default()
    });
    let name = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    });
    let image = use_state(|| None::<File>);
    let preview = use_state(|| props.initial.as_ref().and_then(|p| p.image.clone()));
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| company.set(forms::input_value(&e)))
    };
    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(forms::input_value(&e)))
    };
    let on_image = {
        let image = image.clone();
        let preview = preview.clone();
        Callback::from(move |e: Event| {
            let file = forms::selected_file(&e);
            preview.set(file.as_ref().and_then(forms::preview_url));
            image.set(file);
        })
    };

    let onsubmit = {
        let company = company.clone();
        let name = name.clone();
        let image = image.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(missing) = forms::missing_required(&[
                ("Company", company.as_str()),
                ("Contact name", name.as_str()),
            ]) {
                error_message.set(Some(missing));
                return;
            }

            is_saving.set(true);
            let fields = client::FormFields::new()
                .text("company", company.trim())
                .text("name", name.trim())
                .maybe_file("image", (*image).as_ref());

            let company_value = (*company).clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let result = match editing {
                    None => client::PARTNERS.create_form::<Partner>(fields).await,
                    Some(id) => client::PARTNERS.update_form::<Partner>(id, fields).await,
                };
                match result {
                    Ok(_) => {
                        let verb = if editing.is_some() { "updated" } else { "added" };
                        toasts.success(format!("Partner {verb}: {company_value}"));
                        navigator.push(&AdminRoute::Partners);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to save partner: {e}")));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&AdminRoute::Partners))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">
                    { if editing.is_some() { "Edit Partner" } else { "Add Partner" } }
                </h1>
                <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
            </div>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <label class="block text-sm mb-1" for="company">{ "Company" }</label>
                <input id="company" class="input w-full mb-2"
                    value={(*company).clone()} oninput={on_company} />

                <label class="block text-sm mb-1" for="contact">{ "Contact name" }</label>
                <input id="contact" class="input w-full mb-2"
                    value={(*name).clone()} oninput={on_name} />

                <label class="block text-sm mb-1" for="logo">{ "Logo" }</label>
                <input id="logo" class="input w-full mb-2" type="file" accept="image/*"
                    onchange={on_image} />
                { if let Some(url) = (*preview).as_ref() {
                    html! { <img src={url.clone()} alt="Preview" class="image-preview mb-2" /> }
                } else {
                    html! {}
                }}

                <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                    { if *is_saving { "Saving..." } else { "Save Partner" } }
                </button>
            </form>
        </div>
    }
}
