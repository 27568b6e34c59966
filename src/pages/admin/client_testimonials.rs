use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::{ClientTestimonial, ClientTestimonialPayload};
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, use_delete, use_record, Fetch};
use crate::router::AdminRoute;

#[function_component(ClientTestimonialList)]
pub fn client_testimonial_list() -> Html {
    let testimonials =
        use_collection::<ClientTestimonial>(client::CLIENT_TESTIMONIALS, "client testimonials");
    let on_delete = use_delete(
        client::CLIENT_TESTIMONIALS,
        testimonials.clone(),
        "testimonial",
    );

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ "Client Testimonials" }</h1>
                <Link<AdminRoute> to={AdminRoute::NewClientTestimonial} classes="btn btn-primary">
                    { "Add Testimonial" }
                </Link<AdminRoute>>
            </div>
            {
                match &*testimonials {
                    Fetch::Loading => html! { <p>{ "Loading testimonials..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No client testimonials yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Author" }</th>
                                    <th class="text-left">{ "Position" }</th>
                                    <th class="text-left">{ "Rating" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|testimonial| {
                                    let delete = on_delete.clone();
                                    let id = testimonial.id;
                                    html! {
                                        <tr key={testimonial.id}>
                                            <td class="py-2">{ &testimonial.author }</td>
                                            <td class="py-2">{ &testimonial.position }</td>
                                            <td class="py-2">{ stars_label(testimonial.stars) }</td>
                                            <td class="py-2 text-center">
                                                <Link<AdminRoute>
                                                    to={AdminRoute::EditClientTestimonial { id }}
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
pub struct ClientTestimonialFormProps {
    pub id: Option<u32>,
}

#[function_component(ClientTestimonialForm)]
pub fn client_testimonial_form(props: &ClientTestimonialFormProps) -> Html {
    match props.id {
        None => html! { <TestimonialFormInner initial={None::<ClientTestimonial>} /> },
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
        use_record::<ClientTestimonial>(client::CLIENT_TESTIMONIALS, props.id, "testimonial");
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
    initial: Option<ClientTestimonial>,
}

#[function_component(TestimonialFormInner)]
fn testimonial_form_inner(props: &TestimonialFormInnerProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().unwrap();
    let editing = props.initial.as_ref().map(|row| row.id);

    let author = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|t| t.author.clone())
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
    let stars = use_state(|| props.initial.as_ref().map(|t| t.stars).unwrap_or(5));
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_author = {
        let author = author.clone();
        Callback::from(move |e: InputEvent| author.set(forms::input_value(&e)))
    };
    let on_position = {
        let position = position.clone();
        Callback::from(move |e: InputEvent| position.set(forms::input_value(&e)))
    };
    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| content.set(forms::textarea_value(&e)))
    };

    let onsubmit = {
        let author = author.clone();
        let position = position.clone();
        let content = content.clone();
        let stars = stars.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(missing) = forms::missing_required(&[
                ("Author", author.as_str()),
                ("Position", position.as_str()),
                ("Testimonial", content.as_str()),
            ]) {
                error_message.set(Some(missing));
                return;
            }

            is_saving.set(true);
            let payload = ClientTestimonialPayload {
                author: author.trim().to_owned(),
                position: position.trim().to_owned(),
                stars: stars.to_string(),
                content: content.trim().to_owned(),
            };

            let author_value = (*author).clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let result = match editing {
                    None => {
                        client::CLIENT_TESTIMONIALS
                            .create::<_, ClientTestimonial>(&payload)
                            .await
                    }
                    Some(id) => {
                        client::CLIENT_TESTIMONIALS
                            .update::<_, ClientTestimonial>(id, &payload)
                            .await
                    }
                };
                match result {
                    Ok(_) => {
                        let verb = if editing.is_some() { "updated" } else { "added" };
                        toasts.success(format!("Testimonial {verb} for {author_value}"));
                        navigator.push(&AdminRoute::ClientTestimonials);
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
        Callback::from(move |_| navigator.push(&AdminRoute::ClientTestimonials))
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
                <label class="block text-sm mb-1" for="author">{ "Author" }</label>
                <input id="author" class="input w-full mb-2"
                    value={(*author).clone()} oninput={on_author} />

                <label class="block text-sm mb-1" for="position">{ "Position" }</label>
                <input id="position" class="input w-full mb-2"
                    placeholder="CTO, Acme Corp"
                    value={(*position).clone()} oninput={on_position} />

                <label class="block text-sm mb-1">{ "Rating" }</label>
                <div class="star-picker flex gap-1 mb-2">
                    { for (1..=5u8).map(|value| {
                        let stars = stars.clone();
                        let filled = *stars >= value;
                        html! {
                            <button
                                type="button"
                                class={if filled { "star filled" } else { "star" }}
                                onclick={Callback::from(move |_| stars.set(value))}
                            >
                                { if filled { "★" } else { "☆" } }
                            </button>
                        }
                    }) }
                </div>

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

fn stars_label(stars: u8) -> String {
    format!("{stars}/5")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_renders_out_of_five() {
        assert_eq!(stars_label(4), "4/5");
        assert_eq!(stars_label(0), "0/5");
    }
}
