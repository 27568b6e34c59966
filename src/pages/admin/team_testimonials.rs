use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::TeamTestimonial;
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, use_delete, use_record, Fetch};
use crate::router::AdminRoute;

#[function_component(TeamTestimonialList)]
pub fn team_testimonial_list() -> Html {
    let testimonials =
        use_collection::<TeamTestimonial>(client::TEAM_TESTIMONIALS, "team testimonials");
    let on_delete = use_delete(
        client::TEAM_TESTIMONIALS,
        testimonials.clone(),
        "testimonial",
    );

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ "Team Testimonials" }</h1>
                <Link<AdminRoute> to={AdminRoute::NewTeamTestimonial} classes="btn btn-primary">
                    { "Add Testimonial" }
                </Link<AdminRoute>>
            </div>
            {
                match &*testimonials {
                    Fetch::Loading => html! { <p>{ "Loading testimonials..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No team testimonials yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Name" }</th>
                                    <th class="text-left">{ "Position" }</th>
                                    <th class="text-left">{ "Photo" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|testimonial| {
                                    let delete = on_delete.clone();
                                    let id = testimonial.id;
                                    html! {
                                        <tr key={testimonial.id}>
                                            <td class="py-2">{ &testimonial.name }</td>
                                            <td class="py-2">{ &testimonial.position }</td>
                                            <td class="py-2">
                                                { match &testimonial.image {
                                                    Some(url) => html! {
                                                        <img src={url.clone()} alt={testimonial.name.clone()}
                                                            class="thumbnail" />
                                                    },
                                                    None => html! { { "—" } },
                                                }}
                                            </td>
                                            <td class="py-2 text-center">
                                                <Link<AdminRoute>
                                                    to={AdminRoute::EditTeamTestimonial { id }}
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
                        <p class="error-message">{ format!("Could not load testimonials: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamTestimonialFormProps {
    pub id: Option<u32>,
}

#[function_component(TeamTestimonialForm)]
pub fn team_testimonial_form(props: &TeamTestimonialFormProps) -> Html {
    match props.id {
        None => html! { <TestimonialFormInner initial={None::<TeamTestimonial>} /> },
        Some(id) => html! { <TestimonialFormLoader {id} /> },
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialFormLoaderProps {
    id: u32,
}

#[function_component(TestimonialFormLoader)]
fn testimonial_form_loader(props: &TestimonialFormLoaderProps) -> Html {
    let record =
        use_record::<TeamTestimonial>(client::TEAM_TESTIMONIALS, props.id, "testimonial");
    match &*record {
        Fetch::Loading => html! { <p>{ "Loading testimonial..." }</p> },
        Fetch::Ready(row) => html! { <TestimonialFormInner initial={Some(row.clone())} /> },
        Fetch::Failed(message) => html! {
            <p class="error-message">
                { format!("Could not load this testimonial: {message}") }
            </p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialFormInnerProps {
    initial: Option<TeamTestimonial>,
}

#[function_component(TestimonialFormInner)]
fn testimonial_form_inner(props: &TestimonialFormInnerProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().unwrap();
    let editing = props.initial.as_ref().map(|row| row.id);

    let name = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default()
    });
    let position = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|t| t.position.clone())
            .unwrap_or_default()
    });
    let content = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|t| t.content.clone())
            .unwrap_or_default()
    });
    let image = use_state(|| None::<File>);
    let preview = use_state(|| props.initial.as_ref().and_then(|t| t.image.clone()));
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(forms::input_value(&e)))
    };
    let on_position = {
        let position = position.clone();
        Callback::from(move |e: InputEvent| position.set(forms::input_value(&e)))
    };
    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| content.set(forms::textarea_value(&e)))
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
        let name = name.clone();
        let position = position.clone();
        let content = content.clone();
        let image = image.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(missing) = forms::missing_required(&[
                ("Name", name.as_str()),
                ("Position", position.as_str()),
                ("Testimonial", content.as_str()),
            ]) {
                error_message.set(Some(missing));
                return;
            }

            is_saving.set(true);
            // The backend stores this testimonial's text under "Content".
            let fields = client::FormFields::new()
                .text("name", name.trim())
                .text("position", position.trim())
                .text("Content", content.trim())
                .maybe_file("image", (*image).as_ref());

            let name_value = (*name).clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let result = match editing {
                    None => {
                        client::TEAM_TESTIMONIALS
                            .create_form::<TeamTestimonial>(fields)
                            .await
                    }
                    Some(id) => {
                        client::TEAM_TESTIMONIALS
                            .update_form::<TeamTestimonial>(id, fields)
                            .await
                    }
                };
                match result {
                    Ok(_) => {
                        let verb = if editing.is_some() { "updated" } else { "added" };
                        toasts.success(format!("Testimonial {verb} for {name_value}"));
                        navigator.push(&AdminRoute::TeamTestimonials);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to save testimonial: {e}")));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&AdminRoute::TeamTestimonials))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">
                    { if editing.is_some() { "Edit Testimonial" } else { "Add Testimonial" } }
                </h1>
                <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
            </div>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <label class="block text-sm mb-1" for="name">{ "Name" }</label>
                <input id="name" class="input w-full mb-2"
                    value={(*name).clone()} oninput={on_name} />

                <label class="block text-sm mb-1" for="position">{ "Position" }</label>
                <input id="position" class="input w-full mb-2"
                    value={(*position).clone()} oninput={on_position} />

                <label class="block text-sm mb-1" for="photo">{ "Photo" }</label>
                <input id="photo" class="input w-full mb-2" type="file" accept="image/*"
                    onchange={on_image} />
                { if let Some(url) = (*preview).as_ref() {
                    html! { <img src={url.clone()} alt="Preview" class="image-preview mb-2" /> }
                } else {
                    html! {}
                }}

                <label class="block text-sm mb-1" for="content">{ "Testimonial" }</label>
                <textarea id="content" class="input w-full mb-3"
                    value={(*content).clone()} oninput={on_content} />

                <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                    { if *is_saving { "Saving..." } else { "Save Testimonial" } }
                </button>
            </form>
        </div>
    }
}
